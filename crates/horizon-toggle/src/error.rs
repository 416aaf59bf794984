//! Error types for the toggle widget crate.

use std::path::PathBuf;

use horizon_toggle_core::DomError;
use horizon_toggle_style::StyleError;

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, ToggleError>;

/// Errors raised while defining, loading or creating widgets.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    /// Document tree error.
    #[error(transparent)]
    Dom(#[from] DomError),

    /// Style parsing or resolution error.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Malformed options file.
    #[error("Invalid toggle options: {0}")]
    Options(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tag name that cannot name a custom element.
    #[error("Invalid component tag '{0}': tags are lowercase and contain a '-'")]
    InvalidTag(String),

    /// No blueprint is registered for the tag.
    #[error("No component registered for tag '{0}'")]
    UnknownTag(String),

    /// A blueprint is already registered for the tag.
    #[error("A component is already registered for tag '{0}'")]
    AlreadyDefined(String),
}

impl ToggleError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
