//! Error types for Horizon Toggle core.

use crate::dom::NodeId;

/// Errors raised by document tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node id does not belong to this document (or was removed).
    #[error("Node {0:?} does not exist in this document")]
    NodeNotFound(NodeId),

    /// An element-only operation was attempted on a text node or shadow root.
    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    /// `attach_shadow` was called twice on the same host.
    #[error("Element {0:?} already has a shadow root")]
    AlreadyHasShadowRoot(NodeId),

    /// Appending the node would make it its own ancestor.
    #[error("Cannot insert {child:?} under {parent:?}: would create a cycle")]
    HierarchyCycle { parent: NodeId, child: NodeId },

    /// A component is already registered for this host element.
    #[error("Element {0:?} is already upgraded to a component")]
    AlreadyUpgraded(NodeId),

    /// A component asked for a part its structure does not define.
    #[error("Part '{0}' is not defined")]
    MissingPart(String),
}

/// A specialized Result type for document operations.
pub type Result<T> = std::result::Result<T, DomError>;
