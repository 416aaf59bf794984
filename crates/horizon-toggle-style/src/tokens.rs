//! Design tokens (CSS custom properties).
//!
//! A [`TokenSet`] is an immutable-by-convention record of named style
//! parameters. Overrides produce a new record with [`TokenSet::merged`].

use std::path::Path;

use crate::declarations::{Declarations, token_name};
use crate::parser::parse_custom_properties;
use crate::{Result, StyleError};

const TARGET: &str = "horizon_toggle_style::tokens";

/// Named style parameters, in definition order.
///
/// Names are stored without the `--` prefix; every accessor accepts either
/// form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    entries: Vec<(String, String)>,
}

impl TokenSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a token, builder style.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace a token. A replaced token keeps its position.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let name = token_name(name);
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Get a token value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = token_name(name);
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a token is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over `(name, value)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no token is defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A new set with `overrides` applied on top of `self`.
    ///
    /// Tokens `self` does not define are appended and logged at debug
    /// level; tokens are open-ended custom properties.
    pub fn merged(&self, overrides: &TokenSet) -> TokenSet {
        let mut merged = self.clone();
        for (name, value) in overrides.iter() {
            if !self.contains(name) {
                tracing::debug!(
                    target: TARGET,
                    token = name,
                    "override adds a token without a default"
                );
            }
            merged.set(name, value);
        }
        merged
    }

    /// Parse tokens from CSS text.
    ///
    /// Accepts either a stylesheet (custom properties are collected from
    /// every rule, later ones winning) or a bare declaration list.
    /// Non-custom properties are skipped with a warning.
    pub fn from_css(css: &str) -> Result<TokenSet> {
        let mut tokens = TokenSet::new();
        for (name, value) in parse_custom_properties(css)? {
            tokens.set(&name, value);
        }
        Ok(tokens)
    }

    /// Load tokens from a CSS file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<TokenSet> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StyleError::io(path, e))?;
        Self::from_css(&content)
    }

    /// The tokens as custom property declarations (`--name: value`).
    pub fn to_declarations(&self) -> Declarations {
        self.entries
            .iter()
            .map(|(name, value)| (format!("--{name}"), value.clone()))
            .collect()
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut tokens = Self::new();
        for (name, value) in iter {
            tokens.set(name.as_ref(), value);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_set_get() {
        let tokens = TokenSet::new().with("toggle-gap", "8px");

        assert_eq!(tokens.get("toggle-gap"), Some("8px"));
        assert_eq!(tokens.get("--toggle-gap"), Some("8px"));
        assert!(!tokens.contains("toggle-knob-size"));
    }

    #[test]
    fn merged_keeps_order_and_appends_unknown() {
        let defaults = TokenSet::new()
            .with("toggle-off-color", "gray")
            .with("toggle-on-color", "limegreen");
        let overrides = TokenSet::new()
            .with("--toggle-on-color", "royalblue")
            .with("brand-accent", "gold");

        let merged = defaults.merged(&overrides);
        let names: Vec<_> = merged.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["toggle-off-color", "toggle-on-color", "brand-accent"]);
        assert_eq!(merged.get("toggle-on-color"), Some("royalblue"));
        assert_eq!(defaults.get("toggle-on-color"), Some("limegreen"));
    }

    #[test]
    fn from_css_reads_rules_and_declaration_lists() {
        let sheet = TokenSet::from_css(":root { --toggle-gap: 4px; color: red; } x-toggle { --toggle-gap: 6px }")
            .unwrap();
        assert_eq!(sheet.get("toggle-gap"), Some("6px"));
        assert_eq!(sheet.len(), 1);

        let list = TokenSet::from_css("--toggle-knob-size: 32px; --toggle-on-color: var(--brand)").unwrap();
        assert_eq!(list.get("toggle-knob-size"), Some("32px"));
        assert_eq!(list.get("toggle-on-color"), Some("var(--brand)"));
    }

    #[test]
    fn token_names_are_case_sensitive() {
        let tokens = TokenSet::from_css(":root { --Brand-Color: teal; --brand-color: navy; }").unwrap();
        assert_eq!(tokens.get("Brand-Color"), Some("teal"));
        assert_eq!(tokens.get("brand-color"), Some("navy"));

        let resolved = crate::resolve_value("var(--Brand-Color)", &tokens).unwrap();
        assert_eq!(resolved, "teal");

        let sheet = crate::StyleSheet::from_css(
            ":root { --Brand-Color: teal; }",
            crate::StylePriority::Application,
        )
        .unwrap();
        let rule = sheet.iter().next().unwrap();
        assert_eq!(rule.declarations.get("--Brand-Color"), Some("teal"));
    }

    #[test]
    fn to_declarations_uses_custom_property_names() {
        let decls = TokenSet::new().with("toggle-gap", "8px").to_declarations();
        assert_eq!(decls.get("--toggle-gap"), Some("8px"));
    }
}
