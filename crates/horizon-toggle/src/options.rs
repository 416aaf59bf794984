//! Toggle options loaded from TOML.
//!
//! ```toml
//! tag = "my-switch"
//! token_files = ["brand.css"]
//!
//! [tokens]
//! toggle-on-color = "teal"
//! "--toggle-knob-size" = "32px"
//! ```
//!
//! Token keys may be written with or without the `--` prefix. Token files
//! hold CSS custom-property declarations (see [`TokenSet::from_css`]);
//! relative paths are resolved against the options file. Entries of the
//! `[tokens]` table win over token files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use horizon_toggle_style::TokenSet;
use serde::Deserialize;

use crate::blueprint::Blueprint;
use crate::logging::targets;
use crate::widget::{DEFAULT_TAG, toggle_blueprint};
use crate::{Result, ToggleError};

/// Configuration of the toggle component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleOptions {
    /// Element tag to register the component under.
    pub tag: String,
    /// Token overrides, keyed by token name.
    pub tokens: BTreeMap<String, String>,
    /// CSS files with token overrides, applied before `tokens`.
    pub token_files: Vec<PathBuf>,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            tokens: BTreeMap::new(),
            token_files: Vec::new(),
        }
    }
}

impl ToggleOptions {
    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ToggleError::io(path, e))?;
        let mut options = Self::from_toml_str(&text)?;

        if let Some(dir) = path.parent() {
            for file in &mut options.token_files {
                if file.is_relative() {
                    *file = dir.join(&*file);
                }
            }
        }
        tracing::debug!(target: targets::OPTIONS, path = %path.display(), tag = %options.tag, "options loaded");
        Ok(options)
    }

    /// Set the tag, builder style.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Add a token override, builder style.
    pub fn with_token(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tokens.insert(name.into(), value.into());
        self
    }

    /// All token overrides: token files in order, then the `[tokens]` table.
    pub fn token_overrides(&self) -> Result<TokenSet> {
        let mut overrides = TokenSet::new();
        for file in &self.token_files {
            for (name, value) in TokenSet::from_file(file)?.iter() {
                overrides.set(name, value);
            }
        }
        for (name, value) in &self.tokens {
            overrides.set(name, value.as_str());
        }
        Ok(overrides)
    }

    /// Build the toggle blueprint these options describe.
    pub fn blueprint(&self) -> Result<Blueprint> {
        toggle_blueprint(&self.tag, &self.token_overrides()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ToggleOptions::from_toml_str("").unwrap();
        assert_eq!(options, ToggleOptions::default());
        assert_eq!(options.tag, "x-toggle");
    }

    #[test]
    fn token_keys_accept_both_forms() {
        let options = ToggleOptions::from_toml_str(
            r#"
            tag = "my-switch"

            [tokens]
            toggle-on-color = "teal"
            "--toggle-knob-size" = "32px"
            "#,
        )
        .unwrap();

        let overrides = options.token_overrides().unwrap();
        assert_eq!(options.tag, "my-switch");
        assert_eq!(overrides.get("toggle-on-color"), Some("teal"));
        assert_eq!(overrides.get("--toggle-knob-size"), Some("32px"));
    }

    #[test]
    fn malformed_options_are_rejected() {
        assert!(matches!(
            ToggleOptions::from_toml_str("tag = 3"),
            Err(ToggleError::Options(_))
        ));
        assert!(matches!(
            ToggleOptions::from_toml_str("colour = \"red\""),
            Err(ToggleError::Options(_))
        ));
    }

    #[test]
    fn token_files_resolve_next_to_the_options_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("brand.css"),
            ":root { --toggle-on-color: teal; --toggle-gap: 4px; }",
        )
        .unwrap();
        let path = dir.path().join("toggle.toml");
        std::fs::write(
            &path,
            "token_files = [\"brand.css\"]\n[tokens]\ntoggle-gap = \"12px\"\n",
        )
        .unwrap();

        let options = ToggleOptions::from_file(&path).unwrap();
        let overrides = options.token_overrides().unwrap();
        assert_eq!(overrides.get("toggle-on-color"), Some("teal"));
        assert_eq!(overrides.get("toggle-gap"), Some("12px"));

        let missing = ToggleOptions::from_file(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ToggleError::Io { .. })));
    }
}
