//! In-memory document tree.
//!
//! The [`Document`] owns every node in a slot map and exposes the handful of
//! DOM capabilities components rely on:
//!
//! - element creation, insertion and removal, with connection callbacks for
//!   upgraded components
//! - attributes (with mutation notification) and the `checked` property
//! - shadow roots and named slots
//! - event listeners, bubbling dispatch and native activation (see
//!   [`Document::dispatch_event`], [`Document::click`], [`Document::press_key`])
//! - the render queue used by components to batch re-renders

mod builder;
mod dispatch;
mod event;
mod node;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use slotmap::SlotMap;

pub use builder::{ElementBuilder, elements};
pub use dispatch::DispatchResult;
pub use event::{Event, EventKind, EventType, Key, KeyboardEvent, KeyboardModifiers};
pub use node::{AttributeMutation, ListenerId, NodeId};

use node::{ElementData, Listener, ListenerFn, Node, NodeData, next_listener_id};

use crate::component::Component;
use crate::logging::targets;
use crate::scheduler::RenderQueue;
use crate::signal::Signal;
use crate::{DomError, Result};

/// Upper bound on flush passes, guarding against renders that re-queue themselves forever.
const MAX_FLUSH_PASSES: usize = 64;

/// An in-memory document.
pub struct Document {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    components: HashMap<NodeId, Arc<dyn Component>>,
    render_queue: RenderQueue,
    attribute_changed: Signal<AttributeMutation>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(NodeData::Document));
        Self {
            nodes,
            root,
            components: HashMap::new(),
            render_queue: RenderQueue::new(),
            attribute_changed: Signal::new(),
        }
    }

    /// The document root. Nodes are connected when it is a composed ancestor.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Signal emitted after every attribute change.
    pub fn attribute_changed(&self) -> &Signal<AttributeMutation> {
        &self.attribute_changed
    }

    // =========================================================================
    // Node creation and lookup
    // =========================================================================

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes
            .insert(Node::new(NodeData::Element(ElementData::new(tag))))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.nodes.insert(Node::new(NodeData::Text(text.into())))
    }

    /// Check if the node exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or(DomError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(DomError::NodeNotFound(id))
    }

    fn element(&self, id: NodeId) -> Result<&ElementData> {
        self.node(id)?
            .as_element()
            .ok_or(DomError::NotAnElement(id))
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    /// Check if the node is an element.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.as_element().is_some())
    }

    /// Check if the node is a shadow root.
    pub fn is_shadow_root(&self, id: NodeId) -> bool {
        matches!(
            self.nodes.get(id).map(|n| &n.data),
            Some(NodeData::ShadowRoot { .. })
        )
    }

    /// Lowercase tag name of an element.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).ok().map(|e| e.tag.as_str())
    }

    /// The tree parent (a shadow root for top-level shadow content).
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// The parent in the composed tree: like [`parent`](Self::parent), but a
    /// shadow root's composed parent is its host.
    pub fn composed_parent(&self, id: NodeId) -> Option<NodeId> {
        match &self.nodes.get(id)?.data {
            NodeData::ShadowRoot { host } => Some(*host),
            _ => self.parent(id),
        }
    }

    /// Child nodes in order. Shadow content is not included.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Element children in order.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.is_element(*c))
            .collect()
    }

    /// Element siblings that come before `id`, nearest first.
    pub fn preceding_element_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.parent(id) else {
            return Vec::new();
        };
        let siblings = self.children(parent);
        let Some(index) = siblings.iter().position(|s| *s == id) else {
            return Vec::new();
        };
        siblings[..index]
            .iter()
            .rev()
            .copied()
            .filter(|s| self.is_element(*s))
            .collect()
    }

    /// Descendants of `id` in document order, excluding `id` itself and not
    /// entering shadow trees.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// `id` and all of its descendants, including the content of every
    /// shadow tree hosted in that subtree.
    pub fn shadow_including_inclusive_descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
            if let Some(shadow) = self.shadow_root(current) {
                stack.push(shadow);
            }
        }
        out
    }

    /// Concatenated text of all descendant text nodes (light tree only).
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        if let Some(NodeData::Text(t)) = self.nodes.get(id).map(|n| &n.data) {
            text.push_str(t);
        }
        for node in self.descendants(id) {
            if let Some(NodeData::Text(t)) = self.nodes.get(node).map(|n| &n.data) {
                text.push_str(t);
            }
        }
        text
    }

    /// Check if `ancestor` is `node` or one of its composed ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.composed_parent(id);
        }
        false
    }

    /// Check if the node is connected to the document root.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(id) && self.is_inclusive_ancestor(self.root, id)
    }

    // =========================================================================
    // Tree mutation
    // =========================================================================

    /// Append `child` as the last child of `parent`, detaching it from its
    /// previous parent first.
    ///
    /// Components in the inserted subtree receive `connected` if the new
    /// location is connected to the document.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(child)?;
        let parent_node = self.node(parent)?;
        if matches!(parent_node.data, NodeData::Text(_)) {
            return Err(DomError::NotAnElement(parent));
        }
        if matches!(self.node(child)?.data, NodeData::Document | NodeData::ShadowRoot { .. })
            || self.is_inclusive_ancestor(child, parent)
        {
            return Err(DomError::HierarchyCycle { parent, child });
        }

        if self.parent(child).is_some() {
            self.remove(child)?;
        }

        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        tracing::trace!(target: targets::DOM, ?parent, ?child, "appended child");

        if self.is_connected(child) {
            self.notify_connection(child, true);
        }
        Ok(())
    }

    /// Detach a node from its parent. The node (and subtree) stays in the
    /// document arena and can be re-inserted.
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        let was_connected = self.is_connected(id);
        let Some(parent) = self.node(id)?.parent else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|c| *c != id);
        self.node_mut(id)?.parent = None;
        tracing::trace!(target: targets::DOM, ?parent, child = ?id, "removed child");

        if was_connected {
            self.notify_connection(id, false);
        }
        Ok(())
    }

    /// Attach a shadow root to an element.
    pub fn attach_shadow(&mut self, host: NodeId) -> Result<NodeId> {
        if self.element(host)?.shadow_root.is_some() {
            return Err(DomError::AlreadyHasShadowRoot(host));
        }
        let root = self.nodes.insert(Node::new(NodeData::ShadowRoot { host }));
        self.element_mut(host)?.shadow_root = Some(root);
        Ok(root)
    }

    /// The shadow root hosted by an element, if any.
    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.element(host).ok().and_then(|e| e.shadow_root)
    }

    /// The host of a shadow root.
    pub fn shadow_host(&self, root: NodeId) -> Option<NodeId> {
        match self.nodes.get(root).map(|n| &n.data) {
            Some(NodeData::ShadowRoot { host }) => Some(*host),
            _ => None,
        }
    }

    /// The shadow root whose tree contains `id`, if `id` is shadow content.
    pub fn containing_shadow_root(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if self.is_shadow_root(node) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    // =========================================================================
    // Attributes and properties
    // =========================================================================

    /// Get an attribute value.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)
            .ok()
            .and_then(|e| e.attribute(&name.to_ascii_lowercase()))
    }

    /// Check if an attribute is present.
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// All attributes of an element, in insertion order.
    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        self.element(id)
            .map(|e| e.attributes.as_slice())
            .unwrap_or(&[])
    }

    /// Set an attribute, notifying observers when the value changes.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> Result<()> {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        let element = self.element_mut(id)?;
        let old_value = match element.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) if *existing == value => return Ok(()),
            Some((_, existing)) => Some(std::mem::replace(existing, value.clone())),
            None => {
                element.attributes.push((name.clone(), value.clone()));
                None
            }
        };
        self.publish_mutation(id, name, old_value, Some(value));
        Ok(())
    }

    /// Remove an attribute. Returns `true` if it was present.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<bool> {
        let name = name.to_ascii_lowercase();
        let element = self.element_mut(id)?;
        let Some(index) = element.attributes.iter().position(|(n, _)| *n == name) else {
            return Ok(false);
        };
        let (_, old) = element.attributes.remove(index);
        self.publish_mutation(id, name, Some(old), None);
        Ok(true)
    }

    /// Make a boolean attribute present (`force = true`, empty value) or
    /// absent. Returns the resulting presence.
    pub fn toggle_attribute(&mut self, id: NodeId, name: &str, force: bool) -> Result<bool> {
        if force {
            if !self.has_attribute(id, name) {
                self.set_attribute(id, name, "")?;
            } else {
                self.element(id)?;
            }
        } else {
            self.remove_attribute(id, name)?;
        }
        Ok(force)
    }

    fn publish_mutation(
        &self,
        node: NodeId,
        name: String,
        old_value: Option<String>,
        new_value: Option<String>,
    ) {
        tracing::trace!(target: targets::DOM, ?node, %name, ?old_value, ?new_value, "attribute changed");
        self.attribute_changed.emit(AttributeMutation {
            node,
            name,
            old_value,
            new_value,
        });
    }

    /// The `checked` property of an element (false for non-elements).
    pub fn is_checked(&self, id: NodeId) -> bool {
        self.element(id).is_ok_and(|e| e.checked)
    }

    /// Set the `checked` property. Does not touch the `checked` attribute
    /// and does not fire events.
    pub fn set_checked(&mut self, id: NodeId, checked: bool) -> Result<()> {
        self.element_mut(id)?.checked = checked;
        Ok(())
    }

    /// Check if the element is an `<input type="checkbox">`.
    pub fn is_checkbox(&self, id: NodeId) -> bool {
        self.tag_name(id) == Some("input")
            && self
                .attribute(id, "type")
                .is_some_and(|t| t.eq_ignore_ascii_case("checkbox"))
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Parsed `tabindex` attribute.
    pub fn tab_index(&self, id: NodeId) -> Option<i32> {
        self.attribute(id, "tabindex")
            .and_then(|v| v.trim().parse().ok())
    }

    /// Whether the element takes part in sequential keyboard navigation.
    pub fn is_focusable(&self, id: NodeId) -> bool {
        if self.has_attribute(id, "hidden") {
            return false;
        }
        match self.tab_index(id) {
            Some(index) => index >= 0,
            None => self.tag_name(id) == Some("input"),
        }
    }

    // =========================================================================
    // Slots
    // =========================================================================

    /// The slot a light-DOM child is projected into.
    ///
    /// A child of a shadow host is assigned to the first `<slot>` in the
    /// host's shadow tree whose `name` equals the child's `slot` attribute;
    /// children without a `slot` attribute go to the first unnamed slot.
    pub fn assigned_slot(&self, id: NodeId) -> Option<NodeId> {
        let host = self.parent(id)?;
        let shadow = self.shadow_root(host)?;
        let wanted = self.attribute(id, "slot").unwrap_or("");
        self.descendants(shadow).into_iter().find(|candidate| {
            self.tag_name(*candidate) == Some("slot")
                && self.attribute(*candidate, "name").unwrap_or("") == wanted
        })
    }

    /// Light-DOM nodes assigned to a slot, in order.
    pub fn assigned_nodes(&self, slot: NodeId) -> Vec<NodeId> {
        let Some(host) = self
            .containing_shadow_root(slot)
            .and_then(|root| self.shadow_host(root))
        else {
            return Vec::new();
        };
        self.children(host)
            .iter()
            .copied()
            .filter(|child| self.assigned_slot(*child) == Some(slot))
            .collect()
    }

    // =========================================================================
    // Event listeners
    // =========================================================================

    /// Register a listener on a node.
    pub fn add_event_listener<F>(
        &mut self,
        id: NodeId,
        event_type: EventType,
        callback: F,
    ) -> Result<ListenerId>
    where
        F: Fn(&mut Document, &mut Event) + Send + Sync + 'static,
    {
        let listener_id = next_listener_id();
        self.node_mut(id)?.listeners.push(Listener {
            id: listener_id,
            event_type,
            callback: Arc::new(callback),
        });
        tracing::trace!(target: targets::DOM, node = ?id, event = event_type.name(), "listener added");
        Ok(listener_id)
    }

    /// Remove a listener. Returns `true` if it was registered on the node.
    pub fn remove_event_listener(&mut self, id: NodeId, listener: ListenerId) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        let before = node.listeners.len();
        node.listeners.retain(|l| l.id != listener);
        node.listeners.len() != before
    }

    /// Number of listeners of a type registered on a node.
    pub fn listener_count(&self, id: NodeId, event_type: EventType) -> usize {
        self.nodes.get(id).map_or(0, |n| {
            n.listeners
                .iter()
                .filter(|l| l.event_type == event_type)
                .count()
        })
    }

    pub(crate) fn listeners_for(&self, id: NodeId, event_type: EventType) -> Vec<ListenerFn> {
        self.nodes.get(id).map_or_else(Vec::new, |n| {
            n.listeners
                .iter()
                .filter(|l| l.event_type == event_type)
                .map(|l| l.callback.clone())
                .collect()
        })
    }

    // =========================================================================
    // Components and rendering
    // =========================================================================

    /// Register a component for its host element.
    ///
    /// If the host is already connected, the component's `connected` hook
    /// runs immediately.
    pub fn upgrade(&mut self, component: Arc<dyn Component>) -> Result<()> {
        let host = component.host();
        self.element(host)?;
        if self.components.contains_key(&host) {
            return Err(DomError::AlreadyUpgraded(host));
        }
        self.components.insert(host, component.clone());
        tracing::debug!(target: targets::COMPONENT, ?host, "component upgraded");

        if self.is_connected(host) {
            component.connected(self);
        }
        Ok(())
    }

    /// The component registered for a host.
    pub fn component(&self, host: NodeId) -> Option<Arc<dyn Component>> {
        self.components.get(&host).cloned()
    }

    fn notify_connection(&mut self, subtree: NodeId, connected: bool) {
        let affected: Vec<Arc<dyn Component>> = self
            .shadow_including_inclusive_descendants(subtree)
            .into_iter()
            .filter_map(|id| self.components.get(&id).cloned())
            .collect();

        for component in affected {
            let host = component.host();
            if connected {
                tracing::debug!(target: targets::COMPONENT, ?host, "connected");
                component.connected(self);
            } else {
                tracing::debug!(target: targets::COMPONENT, ?host, "disconnected");
                self.render_queue.cancel(host);
                component.disconnected(self);
            }
        }
    }

    /// Schedule a batched render for a component host.
    ///
    /// Multiple requests before the next [`flush_renders`](Self::flush_renders)
    /// collapse into one render.
    pub fn queue_render(&mut self, host: NodeId) {
        if self.render_queue.schedule(host) {
            tracing::trace!(target: targets::RENDER, ?host, "render queued");
        } else {
            tracing::trace!(target: targets::RENDER, ?host, "render coalesced");
        }
    }

    /// Render a component synchronously, dropping any queued render for it.
    pub fn render_now(&mut self, host: NodeId) {
        self.render_queue.cancel(host);
        if let Some(component) = self.component(host) {
            tracing::trace!(target: targets::RENDER, ?host, "immediate render");
            component.render(self);
        }
    }

    /// Run every queued render. Returns the number of render passes executed.
    pub fn flush_renders(&mut self) -> usize {
        let mut rendered = 0;
        for _ in 0..MAX_FLUSH_PASSES {
            let batch = self.render_queue.take_all();
            if batch.is_empty() {
                return rendered;
            }
            for host in batch {
                if let Some(component) = self.component(host) {
                    component.render(self);
                    rendered += 1;
                }
            }
        }
        tracing::warn!(
            target: targets::RENDER,
            pending = self.render_queue.pending_count(),
            "render queue did not settle; leaving remaining renders queued"
        );
        rendered
    }

    /// Number of hosts waiting for a batched render.
    pub fn pending_renders(&self) -> usize {
        self.render_queue.pending_count()
    }

    /// Check if a host has a batched render waiting.
    pub fn has_pending_render(&self, host: NodeId) -> bool {
        self.render_queue.contains(host)
    }

    /// Render requests absorbed by an already-queued render.
    pub fn coalesced_renders(&self) -> u64 {
        self.render_queue.coalesced_count()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("components", &self.components.len())
            .field("pending_renders", &self.render_queue.pending_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn append_and_connect() {
        let mut doc = Document::new();
        let div = doc.create_element("DIV");
        assert_eq!(doc.tag_name(div), Some("div"));
        assert!(!doc.is_connected(div));

        doc.append_child(doc.root(), div).unwrap();
        assert!(doc.is_connected(div));
        assert_eq!(doc.children(doc.root()), &[div]);

        doc.remove(div).unwrap();
        assert!(!doc.is_connected(div));
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn append_rejects_cycles() {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");
        doc.append_child(outer, inner).unwrap();

        assert_eq!(
            doc.append_child(inner, outer),
            Err(DomError::HierarchyCycle {
                parent: inner,
                child: outer
            })
        );
    }

    #[test]
    fn shadow_content_is_connected_through_host() {
        let mut doc = Document::new();
        let host = doc.create_element("x-host");
        let shadow = doc.attach_shadow(host).unwrap();
        let inner = doc.create_element("span");
        doc.append_child(shadow, inner).unwrap();

        assert!(!doc.is_connected(inner));
        doc.append_child(doc.root(), host).unwrap();
        assert!(doc.is_connected(inner));
        assert_eq!(doc.composed_parent(shadow), Some(host));
        assert_eq!(doc.containing_shadow_root(inner), Some(shadow));
        assert_eq!(doc.attach_shadow(host), Err(DomError::AlreadyHasShadowRoot(host)));
    }

    #[test]
    fn attribute_mutations_are_published() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        doc.attribute_changed().connect(move |m: &AttributeMutation| {
            seen_clone.lock().push((m.name.clone(), m.new_value.clone()));
        });

        doc.set_attribute(el, "Checked", "").unwrap();
        doc.set_attribute(el, "checked", "").unwrap(); // unchanged, not published
        doc.toggle_attribute(el, "checked", false).unwrap();
        doc.toggle_attribute(el, "checked", false).unwrap(); // already absent

        assert_eq!(
            *seen.lock(),
            vec![
                ("checked".to_string(), Some(String::new())),
                ("checked".to_string(), None),
            ]
        );
    }

    #[test]
    fn checked_property_is_independent_of_attribute() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_attribute(input, "type", "checkbox").unwrap();
        assert!(doc.is_checkbox(input));

        doc.set_checked(input, true).unwrap();
        assert!(doc.is_checked(input));
        assert!(!doc.has_attribute(input, "checked"));
    }

    #[test]
    fn focusability_follows_tabindex() {
        let mut doc = Document::new();
        let host = doc.create_element("x-toggle");
        assert!(!doc.is_focusable(host));
        doc.set_attribute(host, "tabindex", "0").unwrap();
        assert!(doc.is_focusable(host));
        doc.set_attribute(host, "tabindex", "-1").unwrap();
        assert!(!doc.is_focusable(host));

        let input = doc.create_element("input");
        assert!(doc.is_focusable(input));
        doc.set_attribute(input, "hidden", "").unwrap();
        assert!(!doc.is_focusable(input));
    }

    #[test]
    fn slots_receive_matching_children() {
        let mut doc = Document::new();
        let host = doc.create_element("x-host");
        let shadow = doc.attach_shadow(host).unwrap();
        let on_slot = elements::slot().attr("name", "on").build_into(&mut doc, shadow).unwrap();
        let off_slot = elements::slot().attr("name", "off").build_into(&mut doc, shadow).unwrap();

        let on = elements::span().attr("slot", "on").text("On").build_into(&mut doc, host).unwrap();
        let off = elements::span().attr("slot", "off").text("Off").build_into(&mut doc, host).unwrap();
        let stray = elements::span().text("?").build_into(&mut doc, host).unwrap();

        assert_eq!(doc.assigned_slot(on), Some(on_slot));
        assert_eq!(doc.assigned_slot(off), Some(off_slot));
        assert_eq!(doc.assigned_slot(stray), None);
        assert_eq!(doc.assigned_nodes(on_slot), vec![on]);
        assert_eq!(doc.text_content(host), "OnOff?");
    }
}
