//! CSS specificity calculation.

use super::{PseudoClass, Selector, SelectorPart, TypeSelector};

/// CSS specificity as (a, b, c) tuple.
///
/// - a: ID selectors
/// - b: Class selectors, attributes, pseudo-classes
/// - c: Type selectors, pseudo-elements
///
/// Compared lexicographically: (1,0,0) > (0,99,99)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Zero specificity (universal selector).
    pub const ZERO: Self = Self(0, 0, 0);

    /// Calculate specificity of a selector.
    pub fn of_selector(selector: &Selector) -> Self {
        let mut spec = Self::ZERO;
        for part in &selector.parts {
            spec.add_part(part);
        }
        spec
    }

    fn add_part(&mut self, part: &SelectorPart) {
        if part.id.is_some() {
            self.0 += 1;
        }
        self.1 += (part.classes.len() + part.attributes.len()) as u32;

        for pseudo in &part.pseudo_classes {
            match pseudo {
                // :not() counts as its argument
                PseudoClass::Not(inner) => self.add_part(inner),
                // :host counts as a pseudo-class plus its argument
                PseudoClass::Host(arg) => {
                    self.1 += 1;
                    if let Some(arg) = arg {
                        self.add_part(arg);
                    }
                }
                PseudoClass::Checked | PseudoClass::Root => self.1 += 1,
            }
        }

        if let Some(TypeSelector::Type(_)) = &part.type_selector {
            self.2 += 1;
        }
        if part.pseudo_element.is_some() {
            self.2 += 1;
        }
    }
}
