//! Core systems for Horizon Toggle.
//!
//! This crate provides the foundation that components are built on:
//!
//! - **Document**: An in-memory element tree with attributes, element
//!   properties, shadow roots and slots
//! - **Events**: Bubbling dispatch with `prevent_default`/`stop_propagation`
//!   and native activation behavior for labels and checkboxes
//! - **Components**: Lifecycle hooks (connect, disconnect, render) and the
//!   coalescing render queue
//! - **Parts**: Named, read-only handles into a component's internal structure
//! - **Signal/Slot System**: Type-safe in-process notification
//! - **Property System**: Shared values with change detection
//!
//! # Example
//!
//! ```
//! use horizon_toggle_core::dom::{elements, Document, EventType};
//!
//! let mut doc = Document::new();
//! let host = doc.create_element("x-host");
//! let root = doc.attach_shadow(host).unwrap();
//!
//! let input = elements::input()
//!     .attr("type", "checkbox")
//!     .part("valueHolder")
//!     .build_into(&mut doc, root)
//!     .unwrap();
//!
//! doc.add_event_listener(input, EventType::Change, |doc, event| {
//!     println!("checked: {}", doc.is_checked(event.target()));
//! })
//! .unwrap();
//!
//! doc.append_child(doc.root(), host).unwrap();
//! doc.click(input).unwrap();
//! ```

pub mod component;
pub mod dom;
mod error;
pub mod logging;
pub mod parts;
pub mod property;
mod scheduler;
pub mod signal;

pub use component::{Component, ComponentBase};
pub use dom::{
    AttributeMutation, DispatchResult, Document, Event, EventKind, EventType, Key,
    KeyboardEvent, KeyboardModifiers, ListenerId, NodeId,
};
pub use error::{DomError, Result};
pub use parts::Parts;
pub use property::{Property, ReadOnlyProperty};
pub use scheduler::RenderQueue;
pub use signal::{ConnectionId, Signal};
