//! Prelude module for Horizon Toggle.
//!
//! ```ignore
//! use horizon_toggle::prelude::*;
//! ```

// ============================================================================
// Widget
// ============================================================================

pub use crate::widget::{DEFAULT_TAG, ToggleSwitch, toggle_blueprint};

// ============================================================================
// Registration and Options
// ============================================================================

pub use crate::blueprint::{Blueprint, Registry};
pub use crate::options::ToggleOptions;
pub use crate::{Result, ToggleError};

// ============================================================================
// Document and Events
// ============================================================================

pub use horizon_toggle_core::dom::elements;
pub use horizon_toggle_core::{
    Component, Document, EventType, Key, KeyboardEvent, NodeId, Signal,
};

// ============================================================================
// Styling
// ============================================================================

pub use horizon_toggle_style::{Scope, StyleEngine, StyleSheet, TokenSet};
