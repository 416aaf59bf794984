//! Document event types.
//!
//! Events carry a target, the node currently handling them, and the two
//! flags listeners use to shape dispatch: `default_prevented` (suppresses the
//! native default action) and `propagation_stopped` (stops bubbling after the
//! current node).

use super::NodeId;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held.
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

/// Physical keyboard keys, named after web `KeyboardEvent.code` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Space bar.
    Space,
    /// Enter/Return.
    Enter,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// A letter key, stored uppercase (`KeyA` .. `KeyZ`).
    Letter(char),
    /// A main-keyboard digit (`Digit0` .. `Digit9`).
    Digit(u8),
    /// Any other code, kept verbatim.
    Other(&'static str),
}

impl Key {
    /// The web `KeyboardEvent.code` string for this key.
    pub fn code(&self) -> String {
        match self {
            Key::Space => "Space".into(),
            Key::Enter => "Enter".into(),
            Key::Tab => "Tab".into(),
            Key::Escape => "Escape".into(),
            Key::Backspace => "Backspace".into(),
            Key::ArrowUp => "ArrowUp".into(),
            Key::ArrowDown => "ArrowDown".into(),
            Key::ArrowLeft => "ArrowLeft".into(),
            Key::ArrowRight => "ArrowRight".into(),
            Key::Letter(c) => format!("Key{}", c.to_ascii_uppercase()),
            Key::Digit(d) => format!("Digit{d}"),
            Key::Other(code) => (*code).to_string(),
        }
    }

    /// The canonical form of this key.
    ///
    /// Letters are uppercased and an [`Key::Other`] code naming a known key
    /// becomes that key, so equal codes compare equal.
    pub fn normalized(self) -> Self {
        match self {
            Key::Letter(c) => Key::Letter(c.to_ascii_uppercase()),
            Key::Other(code) => Key::from_code(code).unwrap_or(self),
            key => key,
        }
    }

    /// Parse a web `KeyboardEvent.code` string.
    ///
    /// Returns `None` for codes outside the named set; wrap those in
    /// [`Key::Other`] explicitly if they need to be dispatched.
    pub fn from_code(code: &str) -> Option<Self> {
        let key = match code {
            "Space" => Key::Space,
            "Enter" | "NumpadEnter" => Key::Enter,
            "Tab" => Key::Tab,
            "Escape" => Key::Escape,
            "Backspace" => Key::Backspace,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => {
                if let Some(rest) = code.strip_prefix("Key") {
                    let mut chars = rest.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if c.is_ascii_alphabetic() => {
                            Key::Letter(c.to_ascii_uppercase())
                        }
                        _ => return None,
                    }
                } else if let Some(rest) = code.strip_prefix("Digit") {
                    match rest.parse::<u8>() {
                        Ok(d) if d < 10 => Key::Digit(d),
                        _ => return None,
                    }
                } else {
                    return None;
                }
            }
        };
        Some(key)
    }
}

/// Payload of a `keydown` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The physical key.
    pub key: Key,
    /// Modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is an auto-repeat event.
    pub repeat: bool,
}

impl KeyboardEvent {
    /// Create a key event with no modifiers. The key is normalized.
    pub fn new(key: Key) -> Self {
        Self {
            key: key.normalized(),
            modifiers: KeyboardModifiers::NONE,
            repeat: false,
        }
    }

    /// Set the modifiers using builder pattern.
    pub fn with_modifiers(mut self, modifiers: KeyboardModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Event types listeners can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Form control value committed.
    Change,
    /// Pointer activation.
    Click,
    /// Key pressed.
    KeyDown,
}

impl EventType {
    /// The DOM event name.
    pub fn name(&self) -> &'static str {
        match self {
            EventType::Change => "change",
            EventType::Click => "click",
            EventType::KeyDown => "keydown",
        }
    }

    /// Whether the event crosses shadow boundaries while bubbling.
    ///
    /// `change` stays inside the tree of the control that fired it.
    pub fn is_composed(&self) -> bool {
        !matches!(self, EventType::Change)
    }
}

/// Event-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A `change` event.
    Change,
    /// A `click` event.
    Click,
    /// A `keydown` event.
    KeyDown(KeyboardEvent),
}

impl EventKind {
    /// The type listeners subscribe with.
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Change => EventType::Change,
            EventKind::Click => EventType::Click,
            EventKind::KeyDown(_) => EventType::KeyDown,
        }
    }
}

/// A dispatched event.
#[derive(Debug, Clone)]
pub struct Event {
    kind: EventKind,
    target: NodeId,
    current_target: NodeId,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    pub(crate) fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// The event payload.
    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// The event type.
    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// The keyboard payload, if this is a `keydown`.
    pub fn keyboard(&self) -> Option<&KeyboardEvent> {
        match &self.kind {
            EventKind::KeyDown(key) => Some(key),
            _ => None,
        }
    }

    /// The node the event was dispatched to.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The node whose listeners are currently running.
    pub fn current_target(&self) -> NodeId {
        self.current_target
    }

    pub(crate) fn set_current_target(&mut self, node: NodeId) {
        self.current_target = node;
    }

    pub(crate) fn set_target(&mut self, node: NodeId) {
        self.target = node;
    }

    /// Suppress the native default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Check if the default action was suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop bubbling once the current node's listeners have run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if propagation was stopped.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_codes_round_trip_named_keys() {
        for key in [Key::Space, Key::Enter, Key::Tab, Key::ArrowLeft] {
            assert_eq!(Key::from_code(&key.code()), Some(key));
        }
    }

    #[test]
    fn letter_and_digit_codes() {
        assert_eq!(Key::from_code("KeyA"), Some(Key::Letter('A')));
        assert_eq!(Key::Letter('q').code(), "KeyQ");
        assert_eq!(Key::from_code("Digit7"), Some(Key::Digit(7)));
        assert_eq!(Key::from_code("Digit12"), None);
        assert_eq!(Key::from_code("F13"), None);
    }

    #[test]
    fn keys_with_equal_codes_compare_equal() {
        assert_eq!(Key::Other("Space").normalized(), Key::Space);
        assert_eq!(Key::Letter('a').normalized(), Key::from_code("KeyA").unwrap());
        assert_eq!(Key::Other("F13").normalized(), Key::Other("F13"));

        assert_eq!(KeyboardEvent::new(Key::Other("Space")).key, Key::Space);
        assert_eq!(KeyboardEvent::new(Key::Letter('x')).key, Key::Letter('X'));
    }

    #[test]
    fn change_is_not_composed() {
        assert!(!EventType::Change.is_composed());
        assert!(EventType::KeyDown.is_composed());
        assert!(EventType::Click.is_composed());
    }
}
