//! The toggle switch widget and its styling.

pub mod style;
mod toggle;

use std::sync::Arc;

use horizon_toggle_core::Component;
use horizon_toggle_style::TokenSet;

pub use style::{TOKEN_DEFAULTS, component_sheet, default_tokens, global_sheet};
pub use toggle::{DEFAULT_TAG, PART_NAMES, ToggleSwitch, VALUE_HOLDER};

use crate::Result;
use crate::blueprint::Blueprint;

/// The toggle blueprint for `tag`, with `overrides` merged over the default
/// tokens.
pub fn toggle_blueprint(tag: &str, overrides: &TokenSet) -> Result<Blueprint> {
    let tokens = default_tokens().merged(overrides);
    Blueprint::new(
        tag,
        component_sheet()?,
        global_sheet(&tokens)?,
        tokens,
        |doc, host| Ok(ToggleSwitch::upgrade(doc, host)? as Arc<dyn Component>),
    )
}
