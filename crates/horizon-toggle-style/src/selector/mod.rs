//! Selector types, specificity and matching.

mod matcher;
mod specificity;
mod types;

pub use matcher::{MatchScope, SelectorMatcher};
pub use specificity::Specificity;
pub use types::{
    AttributeSelector, Combinator, PseudoClass, PseudoElement, Selector, SelectorList,
    SelectorPart, TypeSelector,
};
