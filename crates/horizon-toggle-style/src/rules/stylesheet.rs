//! Stylesheet collection and emission.

use std::path::{Path, PathBuf};

use crate::declarations::Declarations;
use crate::rules::{Scope, StyleRule};
use crate::{Result, StyleError};

/// Priority level for style sources.
///
/// Higher priority sheets override lower priority ones regardless of
/// specificity, the way outer-document rules beat a component's own
/// `:host` and `::part` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StylePriority {
    /// A component's own shadow-tree styles (lowest priority).
    Component = 0,
    /// Document-level styles shipped with a component.
    Global = 1,
    /// Application-supplied styles (highest priority).
    Application = 2,
}

/// A stylesheet containing multiple rules.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    /// The rules in this stylesheet.
    pub rules: Vec<StyleRule>,
    /// Priority level.
    pub priority: StylePriority,
    /// Source file path, when loaded from disk.
    pub source_path: Option<PathBuf>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new(priority: StylePriority) -> Self {
        Self {
            rules: vec![],
            priority,
            source_path: None,
        }
    }

    /// Create a component stylesheet.
    pub fn component() -> Self {
        Self::new(StylePriority::Component)
    }

    /// Create a global stylesheet.
    pub fn global() -> Self {
        Self::new(StylePriority::Global)
    }

    /// Create an application stylesheet.
    pub fn application() -> Self {
        Self::new(StylePriority::Application)
    }

    /// Load a stylesheet from a CSS file.
    pub fn from_file(path: impl AsRef<Path>, priority: StylePriority) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StyleError::io(path, e))?;

        let mut sheet = Self::from_css(&content, priority)?;
        sheet.source_path = Some(path.to_path_buf());
        Ok(sheet)
    }

    /// Parse a stylesheet from CSS text.
    pub fn from_css(css: &str, priority: StylePriority) -> Result<Self> {
        let rules = crate::parser::parse_css(css)?;
        Ok(Self {
            rules,
            priority,
            source_path: None,
        })
    }

    /// Add a rule, builder style.
    ///
    /// The rule's order is set from the current number of rules.
    pub fn rule(mut self, selector: &str, declarations: Declarations) -> Result<Self> {
        self.add_rule(selector, declarations)?;
        Ok(self)
    }

    /// Add a rule from selector text.
    pub fn add_rule(&mut self, selector: &str, declarations: Declarations) -> Result<()> {
        let order = self.rules.len() as u32;
        self.rules.push(StyleRule::parse(selector, declarations, order)?);
        Ok(())
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    /// Write the whole sheet as CSS for the given scope.
    pub fn to_css(&self, scope: &Scope) -> String {
        self.rules
            .iter()
            .map(|rule| rule.to_css(scope))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::application()
    }
}
