//! Node storage for the document tree.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::new_key_type;

use super::{Document, Event, EventType};

new_key_type! {
    /// Identifier of a node inside a [`Document`].
    pub struct NodeId;
}

/// A unique identifier for an event listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Get the raw u64 value of this listener ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique listener IDs.
static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_listener_id() -> ListenerId {
    ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
}

/// Listener callback. Receives the document so handlers can read and write
/// the tree (and trigger renders) while the event is in flight.
pub(crate) type ListenerFn = Arc<dyn Fn(&mut Document, &mut Event) + Send + Sync>;

#[derive(Clone)]
pub(crate) struct Listener {
    pub id: ListenerId,
    pub event_type: EventType,
    pub callback: ListenerFn,
}

/// An attribute change, published on [`Document::attribute_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMutation {
    /// The element whose attribute changed.
    pub node: NodeId,
    /// Attribute name (lowercase).
    pub name: String,
    /// Value before the change (`None` = absent).
    pub old_value: Option<String>,
    /// Value after the change (`None` = removed).
    pub new_value: Option<String>,
}

pub(crate) struct ElementData {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    /// The `checked` IDL property, independent of the `checked` attribute.
    pub checked: bool,
    pub shadow_root: Option<NodeId>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            checked: false,
            shadow_root: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub(crate) enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
    ShadowRoot { host: NodeId },
}

pub(crate) struct Node {
    pub data: NodeData,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub listeners: Vec<Listener>,
}

impl Node {
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }
}
