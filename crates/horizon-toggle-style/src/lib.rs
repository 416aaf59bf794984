//! CSS-like styling for Horizon Toggle.
//!
//! This crate turns declarative style specifications into stylesheet text
//! and resolves them against a document:
//!
//! - **Declarations**: camelCase or kebab-case property maps, with `_name`
//!   shorthand for custom properties
//! - **Tokens**: named, overridable design parameters (`--toggle-*`)
//! - **Selectors**: the subset used by components (`:host`, `::part()`,
//!   `:checked`, `:not()`, attribute selectors and all combinators)
//! - **Scoped emission**: verbatim for shadow roots, `:host` rewritten to
//!   the tag name for document injection
//! - **CSS parsing**: load sheets and token overrides from `.css` files
//! - **Resolution**: cascade, `var()` substitution and `calc()` evaluation
//!
//! # Example
//!
//! ```
//! use horizon_toggle_style::prelude::*;
//!
//! let sheet = StyleSheet::component()
//!     .rule(
//!         ":host",
//!         Declarations::new()
//!             .set("display", "inline-flex")
//!             .set("gap", var("toggle-gap")),
//!     )
//!     .unwrap();
//!
//! let css = sheet.to_css(&Scope::Tag("x-toggle".into()));
//! assert_eq!(css, "x-toggle {\n  display: inline-flex;\n  gap: var(--toggle-gap);\n}\n");
//!
//! let tokens = TokenSet::new().with("toggle-gap", "8px");
//! assert_eq!(resolve_value("var(--toggle-gap)", &tokens).unwrap(), "8px");
//! ```

mod declarations;
mod error;
pub mod parser;
pub mod resolve;
pub mod rules;
pub mod selector;
mod tokens;

pub use declarations::{Declaration, Declarations, property_name, token_name, var, var_scaled};
pub use error::{Result, StyleError};
pub use resolve::{Numeric, StyleEngine, evaluate, resolve_tokens, resolve_value};
pub use rules::{Scope, StylePriority, StyleRule, StyleSheet};
pub use tokens::TokenSet;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::declarations::{Declarations, var, var_scaled};
    pub use crate::resolve::{StyleEngine, resolve_value};
    pub use crate::rules::{Scope, StylePriority, StyleRule, StyleSheet};
    pub use crate::selector::{PseudoClass, Selector, SelectorPart, Specificity};
    pub use crate::tokens::TokenSet;
}
