//! Selector matching against a document tree.
//!
//! Matching is right-to-left with backtracking over combinators. Every match
//! happens in a [`MatchScope`]:
//!
//! - [`MatchScope::Shadow`] matches elements inside one host's shadow tree.
//!   The host itself is only matched by `:host` compounds, and it is the
//!   parent of the shadow tree's top-level elements.
//! - [`MatchScope::Light`] matches light-tree elements. `:host` compounds
//!   match elements with the given tag (the rewrite done for tag-scoped
//!   sheets), and `::part()` reaches into shadow trees of matching hosts.

use horizon_toggle_core::{Document, NodeId};

use super::{Combinator, PseudoClass, PseudoElement, Selector, SelectorPart, TypeSelector};

/// Where a selector is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope<'a> {
    /// Inside the shadow tree of `host`.
    Shadow { host: NodeId },
    /// In the light tree; `:host` stands for elements named `host_tag`.
    Light { host_tag: Option<&'a str> },
}

/// Selector matching engine.
pub struct SelectorMatcher<'a> {
    doc: &'a Document,
    scope: MatchScope<'a>,
}

impl<'a> SelectorMatcher<'a> {
    /// Create a matcher for a scope.
    pub fn new(doc: &'a Document, scope: MatchScope<'a>) -> Self {
        Self { doc, scope }
    }

    /// Check if the selector matches `node`.
    pub fn matches(&self, selector: &Selector, node: NodeId) -> bool {
        match selector.parts.len() {
            0 => false,
            n => self.match_from(selector, n - 1, node),
        }
    }

    fn match_from(&self, selector: &Selector, index: usize, node: NodeId) -> bool {
        let part = &selector.parts[index];
        let anchor = match &part.pseudo_element {
            Some(PseudoElement::Part(name)) => {
                let Some(host) = self.part_host(node, name) else {
                    return false;
                };
                host
            }
            None => node,
        };
        if !self.compound_matches(part, anchor) {
            return false;
        }
        if index == 0 {
            return true;
        }

        let next = index - 1;
        match selector.combinators[next] {
            Combinator::Descendant => {
                let mut current = self.match_parent(anchor);
                while let Some(ancestor) = current {
                    if self.match_from(selector, next, ancestor) {
                        return true;
                    }
                    current = self.match_parent(ancestor);
                }
                false
            }
            Combinator::Child => self
                .match_parent(anchor)
                .is_some_and(|parent| self.match_from(selector, next, parent)),
            Combinator::AdjacentSibling => self
                .doc
                .preceding_element_siblings(anchor)
                .first()
                .is_some_and(|sibling| self.match_from(selector, next, *sibling)),
            Combinator::GeneralSibling => self
                .doc
                .preceding_element_siblings(anchor)
                .into_iter()
                .any(|sibling| self.match_from(selector, next, sibling)),
        }
    }

    /// The host exposing `node` as part `name`.
    fn part_host(&self, node: NodeId, name: &str) -> Option<NodeId> {
        let exposes = self
            .doc
            .attribute(node, "part")
            .is_some_and(|parts| parts.split_ascii_whitespace().any(|p| p == name));
        if !exposes {
            return None;
        }
        let root = self.doc.containing_shadow_root(node)?;
        self.doc.shadow_host(root)
    }

    /// Parent for combinator purposes.
    fn match_parent(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.doc.parent(node)?;
        if let Some(host) = self.doc.shadow_host(parent) {
            return match self.scope {
                MatchScope::Shadow { host: scope_host } if scope_host == host => Some(host),
                _ => None,
            };
        }
        self.doc.is_element(parent).then_some(parent)
    }

    fn in_scope(&self, node: NodeId) -> bool {
        let owner = self
            .doc
            .containing_shadow_root(node)
            .and_then(|root| self.doc.shadow_host(root));
        match self.scope {
            MatchScope::Shadow { host } => owner == Some(host),
            MatchScope::Light { .. } => owner.is_none(),
        }
    }

    fn compound_matches(&self, part: &SelectorPart, node: NodeId) -> bool {
        if !self.doc.is_element(node) {
            return false;
        }

        match (part.host(), self.scope) {
            (Some(PseudoClass::Host(arg)), MatchScope::Shadow { host }) => {
                if node != host {
                    return false;
                }
                if let Some(arg) = arg {
                    if !self.simple_matches(arg, node) {
                        return false;
                    }
                }
            }
            (Some(PseudoClass::Host(arg)), MatchScope::Light { host_tag }) => {
                let Some(tag) = host_tag else {
                    return false;
                };
                if !self.doc.tag_name(node).is_some_and(|t| t.eq_ignore_ascii_case(tag))
                    || !self.in_scope(node)
                {
                    return false;
                }
                if let Some(arg) = arg {
                    if !self.simple_matches(arg, node) {
                        return false;
                    }
                }
            }
            _ => {
                if !self.in_scope(node) {
                    return false;
                }
            }
        }

        self.simple_matches(part, node)
    }

    /// Match everything in the compound except `:host` and the pseudo-element.
    fn simple_matches(&self, part: &SelectorPart, node: NodeId) -> bool {
        let doc = self.doc;

        if let Some(TypeSelector::Type(name)) = &part.type_selector {
            if !doc.tag_name(node).is_some_and(|t| t.eq_ignore_ascii_case(name)) {
                return false;
            }
        }

        if let Some(id) = &part.id {
            if doc.attribute(node, "id") != Some(id.as_str()) {
                return false;
            }
        }

        if !part.classes.is_empty() {
            let classes = doc.attribute(node, "class").unwrap_or("");
            if !part
                .classes
                .iter()
                .all(|class| classes.split_ascii_whitespace().any(|c| c == class))
            {
                return false;
            }
        }

        for attribute in &part.attributes {
            let matched = match (&attribute.value, doc.attribute(node, &attribute.name)) {
                (_, None) => false,
                (None, Some(_)) => true,
                (Some(expected), Some(actual)) => expected == actual,
            };
            if !matched {
                return false;
            }
        }

        part.pseudo_classes.iter().all(|pseudo| match pseudo {
            PseudoClass::Checked => doc.is_checked(node),
            PseudoClass::Root => doc.parent(node) == Some(doc.root()),
            PseudoClass::Not(inner) => !self.simple_matches(inner, node),
            PseudoClass::Host(_) => true,
        })
    }
}
