//! Style resolution: `var()` substitution, `calc()` evaluation and the
//! cascading engine.

mod calc;
mod engine;
mod vars;

pub use calc::{Numeric, evaluate};
pub use engine::{MatchedRule, StyleEngine};
pub use vars::{has_var_reference, resolve_tokens, resolve_value};
