//! Horizon Toggle - a style-customizable binary switch component.
//!
//! The switch keeps one boolean value, renders it through a hidden native
//! checkbox in its shadow tree and exposes `on`/`off` slots, four style
//! parts and a set of `--toggle-*` design tokens.
//!
//! # Example
//!
//! ```
//! use horizon_toggle::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let options = ToggleOptions::default().with_token("toggle-on-color", "teal");
//!     let mut registry = Registry::new();
//!     registry.define(options.blueprint()?)?;
//!
//!     let mut doc = Document::new();
//!     let toggle = registry.create(&mut doc, "x-toggle")?;
//!     let root = doc.root();
//!     doc.append_child(root, toggle.host())?;
//!     doc.flush_renders();
//!
//!     let engine = registry.style_engine();
//!     assert!(registry.global_css().contains("--toggle-on-color: teal;"));
//!     assert_eq!(
//!         engine.computed_value(&doc, toggle.host(), "display")?.as_deref(),
//!         Some("inline-block")
//!     );
//!     Ok(())
//! }
//! ```

pub mod blueprint;
mod error;
pub mod logging;
pub mod options;
pub mod prelude;
pub mod widget;

pub use blueprint::{Blueprint, Registry};
pub use error::{Result, ToggleError};
pub use options::ToggleOptions;
pub use widget::ToggleSwitch;
