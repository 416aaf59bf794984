//! The toggle switch component.
//!
//! A `ToggleSwitch` holds one boolean `value` and renders it through a
//! hidden native checkbox inside its shadow tree. Styles select on the
//! checkbox's `:checked` state to move the knob, recolor the track and
//! show exactly one of the `on`/`off` slots.
//!
//! # Interaction
//!
//! - Clicking anywhere in the internal `<label>` activates the checkbox;
//!   its `change` event copies the checkbox state into `value` and queues
//!   a batched render.
//! - `Space` pressed while the host receives key events inverts `value`
//!   and renders immediately. Other keys pass through untouched.
//! - While `disabled`, neither path changes `value`.
//!
//! # Signals
//!
//! - `toggled(bool)`: emitted when user interaction changes `value`

use std::sync::Arc;

use horizon_toggle_core::dom::{ElementBuilder, elements};
use horizon_toggle_core::{
    Component, ComponentBase, ConnectionId, Document, Event, EventType, Key, NodeId, Parts,
    Property, ReadOnlyProperty, Signal,
};
use parking_lot::Mutex;

use crate::Result;
use crate::logging::targets;

/// Tag used when none is configured.
pub const DEFAULT_TAG: &str = "x-toggle";

/// Name of the native checkbox part.
pub const VALUE_HOLDER: &str = "valueHolder";

/// Names of every part a toggle exposes.
pub const PART_NAMES: [&str; 4] = [VALUE_HOLDER, "container", "track", "knob"];

/// State shared between the widget handle and its event listeners.
#[derive(Debug, Default)]
struct ToggleState {
    value: Property<bool>,
    disabled: Property<bool>,
    toggled: Signal<bool>,
}

/// A binary on/off switch.
///
/// # Example
///
/// ```
/// use horizon_toggle::ToggleSwitch;
/// use horizon_toggle_core::{Document, Key, KeyboardEvent};
///
/// let mut doc = Document::new();
/// let toggle = ToggleSwitch::new(&mut doc).unwrap();
/// doc.append_child(doc.root(), toggle.host()).unwrap();
///
/// doc.press_key(toggle.host(), KeyboardEvent::new(Key::Space)).unwrap();
/// assert!(toggle.checked());
/// assert!(doc.has_attribute(toggle.host(), "checked"));
/// ```
#[derive(Debug)]
pub struct ToggleSwitch {
    base: ComponentBase,
    state: Arc<ToggleState>,
    /// `attribute_changed` subscription, held while connected.
    disabled_watch: Mutex<Option<ConnectionId>>,
}

impl ToggleSwitch {
    /// Create a detached toggle with the default tag and register it with
    /// the document.
    pub fn new(doc: &mut Document) -> Result<Arc<Self>> {
        Self::create(doc, DEFAULT_TAG)
    }

    /// Create a detached toggle host named `tag` and register it.
    pub fn create(doc: &mut Document, tag: &str) -> Result<Arc<Self>> {
        let host = doc.create_element(tag);
        Self::upgrade(doc, host)
    }

    /// Turn an existing element into a toggle.
    ///
    /// If the element is already connected, it is initialized from its
    /// attributes right away.
    pub fn upgrade(doc: &mut Document, host: NodeId) -> Result<Arc<Self>> {
        let toggle = Arc::new(Self {
            base: ComponentBase::for_host(doc, host)?,
            state: Arc::new(ToggleState::default()),
            disabled_watch: Mutex::new(None),
        });
        doc.upgrade(toggle.clone())?;
        Ok(toggle)
    }

    /// The host element.
    pub fn host(&self) -> NodeId {
        self.base.host()
    }

    /// The parts registry, once the structure is built.
    pub fn parts(&self) -> Option<&Parts> {
        self.base.parts()
    }

    /// Look up a part by name.
    pub fn part(&self, name: &str) -> Result<NodeId> {
        Ok(self.base.part(name)?)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Whether the switch is on. Alias of [`value`](Self::value).
    pub fn checked(&self) -> bool {
        self.state.value.get()
    }

    /// Turn the switch on or off. Alias of [`set_value`](Self::set_value).
    pub fn set_checked(&self, checked: bool) {
        self.set_value(checked);
    }

    /// Whether the switch is on.
    pub fn value(&self) -> bool {
        self.state.value.get()
    }

    /// Assign the value. Takes effect in the document on the next render.
    pub fn set_value(&self, value: bool) {
        if self.state.value.set(value) {
            tracing::debug!(target: targets::TOGGLE, host = ?self.host(), value, "value assigned");
        }
    }

    /// Read-only view of the value.
    pub fn value_property(&self) -> ReadOnlyProperty<'_, bool> {
        ReadOnlyProperty::new(&self.state.value)
    }

    /// Whether user interaction is suppressed.
    pub fn is_disabled(&self) -> bool {
        self.state.disabled.get()
    }

    /// Enable or disable interaction, reflected to the host `disabled`
    /// attribute.
    pub fn set_disabled(&self, doc: &mut Document, disabled: bool) {
        self.state.disabled.set(disabled);
        self.base.reflect_attribute(doc, "disabled", disabled);
        self.base.queue_render(doc, false);
    }

    /// Emitted with the new value whenever user interaction changes it.
    pub fn toggled(&self) -> &Signal<bool> {
        &self.state.toggled
    }

    /// Request a render: batched, or synchronous when `immediate`.
    pub fn queue_render(&self, doc: &mut Document, immediate: bool) {
        self.base.queue_render(doc, immediate);
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    fn first_connection(&self, doc: &mut Document) -> Result<()> {
        let host = self.host();
        self.base.hydrate(doc, [structure()])?;

        self.state.value.set_silent(doc.has_attribute(host, "checked"));
        self.base.init_attributes(doc, &[("disabled", &self.state.disabled)]);
        self.watch_disabled(doc);

        let value_holder = self.base.part(VALUE_HOLDER)?;
        doc.add_event_listener(value_holder, EventType::Change, change_handler(self.state.clone(), host))?;
        doc.add_event_listener(host, EventType::KeyDown, keydown_handler(self.state.clone(), host))?;

        doc.set_attribute(host, "tabindex", "0")?;
        doc.set_attribute(host, "role", "checkbox")?;

        tracing::debug!(
            target: targets::TOGGLE,
            ?host,
            value = self.state.value.get(),
            disabled = self.state.disabled.get(),
            "toggle initialized"
        );
        self.base.queue_render(doc, false);
        Ok(())
    }

    /// Track `disabled` attribute changes on the host.
    fn watch_disabled(&self, doc: &Document) {
        let mut watch = self.disabled_watch.lock();
        if watch.is_some() {
            return;
        }
        let host = self.host();
        let state = self.state.clone();
        *watch = Some(doc.attribute_changed().connect(move |mutation| {
            if mutation.node == host && mutation.name == "disabled" {
                state.disabled.set(mutation.new_value.is_some());
            }
        }));
    }
}

impl Component for ToggleSwitch {
    fn host(&self) -> NodeId {
        self.base.host()
    }

    fn connected(&self, doc: &mut Document) {
        if !self.base.begin_first_connection() {
            tracing::trace!(target: targets::TOGGLE, host = ?self.host(), "reconnected");
            // the attribute may have changed while detached
            self.state.disabled.set(doc.has_attribute(self.host(), "disabled"));
            self.watch_disabled(doc);
            return;
        }
        if let Err(error) = self.first_connection(doc) {
            tracing::warn!(target: targets::TOGGLE, host = ?self.host(), %error, "toggle initialization failed");
        }
    }

    fn disconnected(&self, doc: &mut Document) {
        if let Some(id) = self.disabled_watch.lock().take() {
            doc.attribute_changed().disconnect(id);
        }
    }

    fn render(&self, doc: &mut Document) {
        let Ok(value_holder) = self.base.part(VALUE_HOLDER) else {
            tracing::trace!(target: targets::TOGGLE, host = ?self.host(), "render before first connection skipped");
            return;
        };
        let value = self.state.value.get();
        if let Err(error) = doc.set_checked(value_holder, value) {
            tracing::warn!(target: targets::TOGGLE, %error, "failed to update checkbox");
        }
        self.base.reflect_attribute(doc, "checked", value);
    }
}

static_assertions::assert_impl_all!(ToggleSwitch: Send, Sync);

/// The shadow tree of one toggle.
fn structure() -> ElementBuilder {
    elements::label()
        .child(
            elements::input()
                .flag("hidden")
                .attr("type", "checkbox")
                .part(VALUE_HOLDER),
        )
        .child(
            elements::div()
                .part("container")
                .child(elements::div().part("track"))
                .child(elements::div().part("knob")),
        )
        .child(
            elements::div()
                .child(elements::slot().attr("name", "on"))
                .child(elements::slot().attr("name", "off")),
        )
}

/// Copies the checkbox state into `value` after native activation.
fn change_handler(
    state: Arc<ToggleState>,
    host: NodeId,
) -> impl Fn(&mut Document, &mut Event) + Send + Sync + 'static {
    move |doc: &mut Document, event: &mut Event| {
        let checkbox = event.current_target();
        let checked = doc.is_checked(checkbox);

        if state.disabled.get() {
            let value = state.value.get();
            if checked != value {
                tracing::trace!(target: targets::TOGGLE, ?host, "change while disabled reverted");
                if let Err(error) = doc.set_checked(checkbox, value) {
                    tracing::warn!(target: targets::TOGGLE, %error, "failed to restore checkbox");
                }
            }
            return;
        }

        if state.value.set(checked) {
            tracing::debug!(target: targets::TOGGLE, ?host, value = checked, "toggled by change");
            state.toggled.emit(checked);
        }
        doc.queue_render(host);
    }
}

/// Space inverts `value` and renders synchronously.
fn keydown_handler(
    state: Arc<ToggleState>,
    host: NodeId,
) -> impl Fn(&mut Document, &mut Event) + Send + Sync + 'static {
    move |doc: &mut Document, event: &mut Event| {
        if state.disabled.get() {
            return;
        }
        if !event.keyboard().is_some_and(|k| k.key.normalized() == Key::Space) {
            return;
        }

        let value = state.value.toggle();
        event.prevent_default();
        event.stop_propagation();
        tracing::debug!(target: targets::TOGGLE, ?host, value, "toggled by keyboard");
        state.toggled.emit(value);
        doc.render_now(host);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use horizon_toggle_core::KeyboardEvent;

    use super::*;

    fn connected_toggle(doc: &mut Document) -> Arc<ToggleSwitch> {
        let toggle = ToggleSwitch::new(doc).unwrap();
        let root = doc.root();
        doc.append_child(root, toggle.host()).unwrap();
        doc.flush_renders();
        toggle
    }

    #[test]
    fn structure_exposes_every_part() {
        let mut doc = Document::new();
        let toggle = connected_toggle(&mut doc);

        let parts = toggle.parts().unwrap();
        for name in PART_NAMES {
            assert!(parts.contains(name), "missing part {name}");
        }
        let checkbox = toggle.part(VALUE_HOLDER).unwrap();
        assert!(doc.is_checkbox(checkbox));
        assert!(doc.has_attribute(checkbox, "hidden"));
    }

    #[test]
    fn nothing_is_built_before_connection() {
        let mut doc = Document::new();
        let toggle = ToggleSwitch::new(&mut doc).unwrap();

        toggle.queue_render(&mut doc, true);
        assert!(toggle.parts().is_none());
        assert!(!doc.has_attribute(toggle.host(), "role"));
    }

    #[test]
    fn host_attributes_written_on_connection() {
        let mut doc = Document::new();
        let toggle = connected_toggle(&mut doc);

        assert_eq!(doc.attribute(toggle.host(), "tabindex"), Some("0"));
        assert_eq!(doc.attribute(toggle.host(), "role"), Some("checkbox"));
        assert!(doc.is_focusable(toggle.host()));
    }

    #[test]
    fn toggled_signal_reports_interaction_only() {
        let mut doc = Document::new();
        let toggle = connected_toggle(&mut doc);
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        toggle.toggled().connect(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        toggle.set_checked(true);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        doc.press_key(toggle.host(), KeyboardEvent::new(Key::Space)).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!toggle.checked());
    }

    #[test]
    fn disabled_attribute_changes_are_observed() {
        let mut doc = Document::new();
        let toggle = connected_toggle(&mut doc);

        doc.set_attribute(toggle.host(), "disabled", "").unwrap();
        assert!(toggle.is_disabled());
        doc.remove_attribute(toggle.host(), "disabled").unwrap();
        assert!(!toggle.is_disabled());

        toggle.set_disabled(&mut doc, true);
        assert!(doc.has_attribute(toggle.host(), "disabled"));
    }

    #[test]
    fn attribute_watch_is_held_only_while_connected() {
        let mut doc = Document::new();
        let root = doc.root();
        let before = doc.attribute_changed().connection_count();
        let toggle = connected_toggle(&mut doc);
        let host = toggle.host();
        assert_eq!(doc.attribute_changed().connection_count(), before + 1);

        doc.remove(host).unwrap();
        assert_eq!(doc.attribute_changed().connection_count(), before);

        doc.set_attribute(host, "disabled", "").unwrap();
        doc.append_child(root, host).unwrap();
        assert!(toggle.is_disabled());
        assert_eq!(doc.attribute_changed().connection_count(), before + 1);

        doc.remove_attribute(host, "disabled").unwrap();
        assert!(!toggle.is_disabled());
    }

    #[test]
    fn space_is_recognized_by_code() {
        let mut doc = Document::new();
        let toggle = connected_toggle(&mut doc);
        let raw = KeyboardEvent {
            key: Key::Other("Space"),
            ..KeyboardEvent::new(Key::Enter)
        };

        doc.press_key(toggle.host(), raw).unwrap();
        assert!(toggle.checked());
        doc.press_key(toggle.host(), KeyboardEvent::new(Key::Other("Space"))).unwrap();
        assert!(!toggle.checked());
    }
}
