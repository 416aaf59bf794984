//! Style rules and stylesheets.

mod rule;
mod scope;
mod stylesheet;

pub use rule::StyleRule;
pub use scope::Scope;
pub use stylesheet::{StylePriority, StyleSheet};
