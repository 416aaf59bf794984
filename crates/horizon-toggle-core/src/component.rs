//! Component contract and shared component plumbing.
//!
//! A component owns a host element in a [`Document`]. The document drives
//! its lifecycle:
//!
//! - [`Component::connected`] when the host (or an ancestor) is inserted
//!   under the document root, and when an already-connected host is
//!   upgraded
//! - [`Component::disconnected`] when it leaves the document; any queued
//!   render for the host is dropped first
//! - [`Component::render`] for every batched or immediate render request
//!
//! [`ComponentBase`] carries what every component needs: the host, its
//! shadow root, the parts registry, and the first-connection guard.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::dom::{Document, ElementBuilder, NodeId};
use crate::logging::targets;
use crate::parts::Parts;
use crate::property::Property;
use crate::{DomError, Result};

/// Lifecycle hooks of a component.
pub trait Component: Send + Sync {
    /// The host element.
    fn host(&self) -> NodeId;

    /// The host was connected to the document.
    fn connected(&self, doc: &mut Document);

    /// The host was disconnected from the document.
    fn disconnected(&self, _doc: &mut Document) {}

    /// Synchronize the rendered structure with component state.
    fn render(&self, doc: &mut Document);
}

/// Host, shadow root and parts of a component.
#[derive(Debug)]
pub struct ComponentBase {
    host: NodeId,
    shadow_root: NodeId,
    parts: OnceLock<Parts>,
    connected_once: AtomicBool,
}

impl ComponentBase {
    /// Create a detached host element with the given tag and a shadow root.
    pub fn new(doc: &mut Document, tag: &str) -> Result<Self> {
        let host = doc.create_element(tag);
        Self::for_host(doc, host)
    }

    /// Use an existing element as host, attaching a shadow root to it.
    pub fn for_host(doc: &mut Document, host: NodeId) -> Result<Self> {
        let shadow_root = doc.attach_shadow(host)?;
        Ok(Self {
            host,
            shadow_root,
            parts: OnceLock::new(),
            connected_once: AtomicBool::new(false),
        })
    }

    /// The host element.
    pub fn host(&self) -> NodeId {
        self.host
    }

    /// The shadow root holding the internal structure.
    pub fn shadow_root(&self) -> NodeId {
        self.shadow_root
    }

    /// Build the internal structure into the shadow root and collect its
    /// parts. Only the first call builds; later calls return the existing
    /// parts.
    pub fn hydrate<I>(&self, doc: &mut Document, content: I) -> Result<&Parts>
    where
        I: IntoIterator<Item = ElementBuilder>,
    {
        if let Some(parts) = self.parts.get() {
            return Ok(parts);
        }
        for builder in content {
            builder.build_into(doc, self.shadow_root)?;
        }
        let parts = Parts::collect(doc, self.shadow_root);
        tracing::debug!(
            target: targets::COMPONENT,
            host = ?self.host,
            parts = parts.len(),
            "component hydrated"
        );
        Ok(self.parts.get_or_init(|| parts))
    }

    /// The parts registry, once hydrated.
    pub fn parts(&self) -> Option<&Parts> {
        self.parts.get()
    }

    /// Look up a part by name.
    pub fn part(&self, name: &str) -> Result<NodeId> {
        self.parts
            .get()
            .ok_or_else(|| DomError::MissingPart(name.to_string()))?
            .require(name)
    }

    /// Returns `true` exactly once: on the first connection.
    pub fn begin_first_connection(&self) -> bool {
        !self.connected_once.swap(true, Ordering::SeqCst)
    }

    /// Check if the component was ever connected.
    pub fn has_connected(&self) -> bool {
        self.connected_once.load(Ordering::SeqCst)
    }

    /// Initialize boolean properties from the presence of host attributes.
    ///
    /// A property whose value is already `true` (set in code before
    /// connection) is reflected to the host instead.
    pub fn init_attributes(&self, doc: &mut Document, attributes: &[(&str, &Property<bool>)]) {
        for (name, property) in attributes {
            if property.get() {
                self.reflect_attribute(doc, name, true);
            } else {
                property.set_silent(doc.has_attribute(self.host, name));
            }
            tracing::trace!(
                target: targets::COMPONENT,
                host = ?self.host,
                attribute = name,
                value = property.get(),
                "attribute initialized"
            );
        }
    }

    /// Make a boolean host attribute match `value`.
    pub fn reflect_attribute(&self, doc: &mut Document, name: &str, value: bool) {
        if let Err(error) = doc.toggle_attribute(self.host, name, value) {
            tracing::warn!(target: targets::COMPONENT, %error, attribute = name, "failed to reflect attribute");
        }
    }

    /// Request a render: batched, or synchronous when `immediate`.
    pub fn queue_render(&self, doc: &mut Document, immediate: bool) {
        if immediate {
            doc.render_now(self.host);
        } else {
            doc.queue_render(self.host);
        }
    }
}

static_assertions::assert_impl_all!(ComponentBase: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::dom::elements;

    struct Probe {
        base: ComponentBase,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Component for Probe {
        fn host(&self) -> NodeId {
            self.base.host()
        }

        fn connected(&self, _doc: &mut Document) {
            self.log.lock().push(if self.base.begin_first_connection() {
                "first-connect"
            } else {
                "connect"
            });
        }

        fn disconnected(&self, _doc: &mut Document) {
            self.log.lock().push("disconnect");
        }

        fn render(&self, _doc: &mut Document) {
            self.log.lock().push("render");
        }
    }

    fn probe(doc: &mut Document) -> (Arc<Probe>, Arc<Mutex<Vec<&'static str>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let probe = Arc::new(Probe {
            base: ComponentBase::new(doc, "x-probe").unwrap(),
            log: log.clone(),
        });
        doc.upgrade(probe.clone()).unwrap();
        (probe, log)
    }

    #[test]
    fn lifecycle_follows_connection() {
        let mut doc = Document::new();
        let (probe, log) = probe(&mut doc);
        let host = probe.host();
        let root = doc.root();

        doc.append_child(root, host).unwrap();
        doc.remove(host).unwrap();
        doc.append_child(root, host).unwrap();

        assert_eq!(*log.lock(), vec!["first-connect", "disconnect", "connect"]);
        assert_eq!(doc.upgrade(probe.clone()), Err(DomError::AlreadyUpgraded(host)));
    }

    #[test]
    fn queued_renders_coalesce_and_drop_on_disconnect() {
        let mut doc = Document::new();
        let (probe, log) = probe(&mut doc);
        let host = probe.host();
        let root = doc.root();
        doc.append_child(root, host).unwrap();

        for _ in 0..3 {
            probe.base.queue_render(&mut doc, false);
        }
        assert_eq!(doc.flush_renders(), 1);

        probe.base.queue_render(&mut doc, false);
        doc.remove(host).unwrap();
        assert_eq!(doc.flush_renders(), 0);

        probe.base.queue_render(&mut doc, true);
        assert_eq!(
            *log.lock(),
            vec!["first-connect", "render", "disconnect", "render"]
        );
    }

    #[test]
    fn hydrate_builds_once() {
        let mut doc = Document::new();
        let base = ComponentBase::new(&mut doc, "x-probe").unwrap();

        base.hydrate(&mut doc, [elements::div().part("knob")]).unwrap();
        base.hydrate(&mut doc, [elements::div().part("track")]).unwrap();

        assert_eq!(doc.children(base.shadow_root()).len(), 1);
        assert!(base.part("knob").is_ok());
        assert_eq!(base.part("track"), Err(DomError::MissingPart("track".into())));
    }

    #[test]
    fn init_attributes_reads_and_reflects() {
        let mut doc = Document::new();
        let base = ComponentBase::new(&mut doc, "x-probe").unwrap();
        doc.set_attribute(base.host(), "disabled", "").unwrap();

        let disabled = Property::new(false);
        let hidden = Property::new(true);
        base.init_attributes(&mut doc, &[("disabled", &disabled), ("hidden", &hidden)]);

        assert!(disabled.get());
        assert!(doc.has_attribute(base.host(), "hidden"));
    }
}
