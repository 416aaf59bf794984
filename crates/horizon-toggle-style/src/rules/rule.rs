//! Single style rule definition.

use crate::declarations::Declarations;
use crate::parser::parse_selector_list;
use crate::rules::Scope;
use crate::selector::{SelectorList, Specificity};
use crate::Result;

/// A style rule mapping a selector list to declarations.
///
/// Each rule has:
/// - Selectors that determine which elements it applies to
/// - Declarations to apply when a selector matches
/// - Pre-computed specificity per selector
/// - Source order for tie-breaking
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The selectors for matching elements.
    pub selectors: SelectorList,
    /// The declarations to apply.
    pub declarations: Declarations,
    /// Pre-computed specificity, one per selector.
    pub specificities: Vec<Specificity>,
    /// Source order (for tie-breaking when specificity is equal).
    pub order: u32,
}

impl StyleRule {
    /// Create a new style rule.
    pub fn new(selectors: SelectorList, declarations: Declarations, order: u32) -> Self {
        let specificities = selectors.iter().map(Specificity::of_selector).collect();
        Self {
            selectors,
            declarations,
            specificities,
            order,
        }
    }

    /// Create a rule from selector text.
    pub fn parse(selector: &str, declarations: Declarations, order: u32) -> Result<Self> {
        Ok(Self::new(parse_selector_list(selector)?, declarations, order))
    }

    /// Write the rule as CSS for the given scope.
    pub fn to_css(&self, scope: &Scope) -> String {
        let mut out = self.selectors.to_css(scope);
        out.push_str(" {\n");
        self.declarations.write_css(&mut out, "  ");
        out.push_str("}\n");
        out
    }
}
