//! Property declarations and token references.
//!
//! Declarations keep insertion order. Property names may be given in
//! camelCase and are stored in CSS form:
//!
//! ```
//! use horizon_toggle_style::{property_name, Declarations, var, var_scaled};
//!
//! assert_eq!(property_name("borderRadius"), "border-radius");
//! assert_eq!(property_name("_toggleGap"), "--toggle-gap");
//!
//! let decls = Declarations::new()
//!     .set("gap", var("toggle-gap"))
//!     .set("borderRadius", var_scaled("toggle-knob-size", 50));
//!
//! assert_eq!(decls.get("border-radius"), Some("calc(var(--toggle-knob-size) * 0.5)"));
//! ```

use std::fmt::Write as _;

/// Convert a property name to its CSS form.
///
/// `camelCase` becomes `kebab-case`, and a leading underscore marks a custom
/// property (`_trackColor` → `--track-color`). Standard names that already
/// contain a dash are lowercased. Custom property names are case-sensitive
/// and keep their case once in `--` form.
pub fn property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    if let Some(body) = name.strip_prefix('_') {
        if body.contains('-') {
            return format!("--{body}");
        }
        return format!("--{}", kebab_case(body));
    }
    if name.contains('-') {
        return name.to_ascii_lowercase();
    }
    kebab_case(name)
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Strip the `--` prefix of a custom property name.
pub fn token_name(name: &str) -> &str {
    name.strip_prefix("--").unwrap_or(name)
}

/// A reference to a token: `var(--name)`.
pub fn var(token: &str) -> String {
    format!("var(--{})", token_name(token))
}

/// A token reference scaled by `percent`: `calc(var(--name) * 0.5)` for 50.
pub fn var_scaled(token: &str, percent: u32) -> String {
    let factor = f64::from(percent) / 100.0;
    format!("calc({} * {factor})", var(token))
}

/// A single `name: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name in CSS form.
    pub name: String,
    /// Raw value text.
    pub value: String,
}

impl Declaration {
    /// Check if this declares a custom property.
    pub fn is_custom_property(&self) -> bool {
        self.name.starts_with("--")
    }
}

/// Ordered property declarations of a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<Declaration>,
}

impl Declarations {
    /// Create an empty declaration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a declaration, builder style.
    pub fn set(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a declaration. A replaced declaration keeps its position.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let name = property_name(name);
        let value = value.into();
        match self.entries.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Declaration { name, value }),
        }
    }

    /// Get a declared value by name (either form).
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = property_name(name);
        self.entries
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the block is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the block body, one declaration per line.
    pub(crate) fn write_css(&self, out: &mut String, indent: &str) {
        for decl in &self.entries {
            let _ = writeln!(out, "{indent}{}: {};", decl.name, decl.value);
        }
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut decls = Self::new();
        for (name, value) in iter {
            decls.insert(name.as_ref(), value);
        }
        decls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_names() {
        assert_eq!(property_name("display"), "display");
        assert_eq!(property_name("alignItems"), "align-items");
        assert_eq!(property_name("boxShadow"), "box-shadow");
        assert_eq!(property_name("_toggleTrackOnColor"), "--toggle-track-on-color");
        assert_eq!(property_name("--toggle-gap"), "--toggle-gap");
        assert_eq!(property_name("line-height"), "line-height");
        assert_eq!(property_name("Line-Height"), "line-height");
    }

    #[test]
    fn custom_property_names_keep_their_case() {
        assert_eq!(property_name("--Brand-Color"), "--Brand-Color");
        assert_eq!(property_name("_Brand-Color"), "--Brand-Color");
        assert_eq!(property_name("--toggleGap"), "--toggleGap");

        let decls = Declarations::new().set("--Brand-Color", "teal");
        assert_eq!(decls.get("--Brand-Color"), Some("teal"));
        assert_eq!(decls.get("--brand-color"), None);
    }

    #[test]
    fn scaled_references() {
        assert_eq!(var("--toggle-gap"), "var(--toggle-gap)");
        assert_eq!(var_scaled("toggle-knob-size", 50), "calc(var(--toggle-knob-size) * 0.5)");
        assert_eq!(var_scaled("toggle-track-inset", 200), "calc(var(--toggle-track-inset) * 2)");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut decls = Declarations::new()
            .set("height", "1px")
            .set("width", "2px");
        decls.insert("height", "3px");

        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["height", "width"]);
        assert_eq!(decls.get("height"), Some("3px"));
    }
}
