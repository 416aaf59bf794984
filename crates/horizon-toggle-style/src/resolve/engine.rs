//! Main style resolution engine.

use std::cmp::Ordering;

use horizon_toggle_core::{Document, NodeId};
use parking_lot::RwLock;

use crate::declarations::{Declarations, property_name, token_name};
use crate::resolve::calc::{Numeric, evaluate};
use crate::resolve::vars::{resolve_tokens, resolve_value};
use crate::rules::{Scope, StylePriority, StyleRule, StyleSheet};
use crate::selector::{MatchScope, SelectorMatcher, Specificity};
use crate::tokens::TokenSet;
use crate::Result;

const TARGET: &str = "horizon_toggle_style::engine";

/// A rule that matched a node, with its cascade key.
#[derive(Debug, Clone, Copy)]
pub struct MatchedRule<'a> {
    /// The matching rule.
    pub rule: &'a StyleRule,
    /// Priority of the sheet the rule came from.
    pub priority: StylePriority,
    /// Highest specificity among the rule's matching selectors.
    pub specificity: Specificity,
    sheet: usize,
}

impl MatchedRule<'_> {
    fn cascade_cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.specificity, self.sheet, self.rule.order).cmp(&(
            other.priority,
            other.specificity,
            other.sheet,
            other.rule.order,
        ))
    }
}

/// The style resolution engine.
///
/// The engine holds scoped stylesheets and a base token layer. For a node
/// it matches every rule, cascades the winning declarations (priority, then
/// specificity, then sheet and source order) and resolves `var()`
/// references against the custom properties inherited along the flat tree.
pub struct StyleEngine {
    sheets: Vec<(StyleSheet, Scope)>,
    tokens: TokenSet,
    /// Resolved base tokens, computed on first use.
    resolved: RwLock<Option<TokenSet>>,
}

impl StyleEngine {
    /// Create an engine with a base token layer.
    pub fn new(tokens: TokenSet) -> Self {
        Self {
            sheets: vec![],
            tokens,
            resolved: RwLock::new(None),
        }
    }

    /// Add a stylesheet in a scope.
    pub fn add_stylesheet(&mut self, sheet: StyleSheet, scope: Scope) {
        tracing::debug!(
            target: TARGET,
            rules = sheet.len(),
            priority = ?sheet.priority,
            ?scope,
            "added stylesheet"
        );
        self.sheets.push((sheet, scope));
    }

    /// Number of registered stylesheets.
    pub fn stylesheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// The base token layer.
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Replace the base token layer.
    pub fn set_tokens(&mut self, tokens: TokenSet) {
        self.tokens = tokens;
        *self.resolved.get_mut() = None;
    }

    /// Merge overrides into the base token layer.
    pub fn override_tokens(&mut self, overrides: &TokenSet) {
        let merged = self.tokens.merged(overrides);
        self.set_tokens(merged);
    }

    /// Resolve a value against the base token layer.
    pub fn resolve(&self, value: &str) -> Result<String> {
        resolve_value(value, &self.base_layer()?)
    }

    fn base_layer(&self) -> Result<TokenSet> {
        if let Some(resolved) = self.resolved.read().as_ref() {
            return Ok(resolved.clone());
        }
        let resolved = resolve_tokens(&self.tokens)?;
        *self.resolved.write() = Some(resolved.clone());
        Ok(resolved)
    }

    /// Rules matching `node`, in cascade order (winner last).
    pub fn matched_rules(&self, doc: &Document, node: NodeId) -> Vec<MatchedRule<'_>> {
        let mut matched = Vec::new();
        if !doc.is_element(node) {
            return matched;
        }

        for (index, (sheet, scope)) in self.sheets.iter().enumerate() {
            let scopes = match_scopes(doc, node, scope);
            if scopes.is_empty() {
                continue;
            }
            let matchers: Vec<_> = scopes
                .into_iter()
                .map(|s| SelectorMatcher::new(doc, s))
                .collect();

            for rule in sheet.iter() {
                let best = rule
                    .selectors
                    .iter()
                    .zip(&rule.specificities)
                    .filter(|(selector, _)| matchers.iter().any(|m| m.matches(selector, node)))
                    .map(|(_, specificity)| *specificity)
                    .max();
                if let Some(specificity) = best {
                    matched.push(MatchedRule {
                        rule,
                        priority: sheet.priority,
                        specificity,
                        sheet: index,
                    });
                }
            }
        }

        matched.sort_by(MatchedRule::cascade_cmp);
        matched
    }

    /// The winning declarations for `node`, unresolved.
    pub fn declared_style(&self, doc: &Document, node: NodeId) -> Declarations {
        let mut style = Declarations::new();
        for matched in self.matched_rules(doc, node) {
            for declaration in matched.rule.declarations.iter() {
                style.insert(&declaration.name, declaration.value.as_str());
            }
        }
        style
    }

    /// The winning declaration for one property, unresolved.
    pub fn declared_value(&self, doc: &Document, node: NodeId, property: &str) -> Option<String> {
        let name = property_name(property);
        self.matched_rules(doc, node)
            .iter()
            .rev()
            .find_map(|m| m.rule.declarations.get(&name).map(str::to_string))
    }

    /// Custom properties in effect at `node`, resolved.
    ///
    /// Custom properties inherit along the flat tree; each element resolves
    /// its own declarations against what it inherits.
    pub fn custom_properties(&self, doc: &Document, node: NodeId) -> Result<TokenSet> {
        let mut chain = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            if doc.is_element(id) {
                chain.push(id);
            }
            current = flat_tree_parent(doc, id);
        }

        let mut inherited = self.base_layer()?;
        for element in chain.into_iter().rev() {
            let own: Vec<(String, String)> = self
                .declared_style(doc, element)
                .iter()
                .filter(|d| d.is_custom_property())
                .map(|d| (token_name(&d.name).to_string(), d.value.clone()))
                .collect();
            if own.is_empty() {
                continue;
            }

            let mut layer = inherited.clone();
            for (name, value) in &own {
                layer.set(name, value.as_str());
            }
            for (name, value) in &own {
                inherited.set(name, resolve_value(value, &layer)?);
            }
        }
        Ok(inherited)
    }

    /// The computed value of `property` at `node`.
    ///
    /// Returns `Ok(None)` when no rule declares the property. Custom
    /// properties (`--name` or `_camelName`) also see inherited values.
    ///
    /// # Errors
    ///
    /// Fails when the winning declaration references an undefined token or
    /// tokens form a cycle.
    pub fn computed_value(
        &self,
        doc: &Document,
        node: NodeId,
        property: &str,
    ) -> Result<Option<String>> {
        let name = property_name(property);
        let tokens = self.custom_properties(doc, node)?;
        if name.starts_with("--") {
            return Ok(tokens.get(&name).map(str::to_string));
        }

        match self.declared_value(doc, node, &name) {
            Some(value) => Ok(Some(resolve_value(&value, &tokens)?)),
            None => Ok(None),
        }
    }

    /// The computed value of a length property, in pixels.
    ///
    /// Returns `Ok(None)` when the property is undeclared or not a length.
    pub fn computed_length(
        &self,
        doc: &Document,
        node: NodeId,
        property: &str,
    ) -> Result<Option<f32>> {
        let value = self.computed_value(doc, node, property)?;
        Ok(value.as_deref().and_then(evaluate).and_then(|n| match n {
            Numeric::Px(px) => Some(px),
            Numeric::Number(n) if n == 0.0 => Some(0.0),
            Numeric::Number(_) => None,
        }))
    }

    /// Every winning declaration of `node`, resolved.
    pub fn computed_style(&self, doc: &Document, node: NodeId) -> Result<Declarations> {
        let tokens = self.custom_properties(doc, node)?;
        self.declared_style(doc, node)
            .iter()
            .map(|d| -> Result<(String, String)> {
                let value = match d.is_custom_property() {
                    true => tokens.get(&d.name).unwrap_or(d.value.as_str()).to_string(),
                    false => resolve_value(&d.value, &tokens)?,
                };
                Ok((d.name.clone(), value))
            })
            .collect()
    }

    /// Check if `node` is rendered at all.
    ///
    /// False when the node or any flat-tree ancestor computes
    /// `display: none`, or when the node is not connected.
    pub fn is_displayed(&self, doc: &Document, node: NodeId) -> bool {
        if !doc.is_connected(node) {
            return false;
        }
        let mut current = Some(node);
        while let Some(id) = current {
            if doc.is_element(id)
                && self
                    .declared_value(doc, id, "display")
                    .is_some_and(|display| display.trim() == "none")
            {
                tracing::trace!(target: TARGET, ?node, hidden_by = ?id, "not displayed");
                return false;
            }
            current = flat_tree_parent(doc, id);
        }
        true
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new(TokenSet::new())
    }
}

impl std::fmt::Debug for StyleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleEngine")
            .field("sheets", &self.sheets.len())
            .field("tokens", &self.tokens.len())
            .finish()
    }
}

/// Match scopes in which a sheet can reach `node`.
fn match_scopes<'a>(doc: &Document, node: NodeId, scope: &'a Scope) -> Vec<MatchScope<'a>> {
    match scope {
        Scope::Document => vec![MatchScope::Light { host_tag: None }],
        Scope::Tag(tag) => vec![MatchScope::Light {
            host_tag: Some(tag.as_str()),
        }],
        Scope::Shadow(tag) => {
            let is_host = |id: NodeId| {
                doc.shadow_root(id).is_some()
                    && doc.tag_name(id).is_some_and(|t| t.eq_ignore_ascii_case(tag))
            };
            let mut scopes = Vec::new();
            // the host itself, for `:host` rules
            if is_host(node) {
                scopes.push(MatchScope::Shadow { host: node });
            }
            if let Some(host) = doc
                .containing_shadow_root(node)
                .and_then(|root| doc.shadow_host(root))
                .filter(|&host| is_host(host))
            {
                scopes.push(MatchScope::Shadow { host });
            }
            scopes
        }
    }
}

/// Parent in the flat tree: slotted nodes sit under their slot, shadow
/// content under its host. `None` above the top-level element.
fn flat_tree_parent(doc: &Document, node: NodeId) -> Option<NodeId> {
    if let Some(slot) = doc.assigned_slot(node) {
        return Some(slot);
    }
    let parent = doc.parent(node)?;
    if let Some(host) = doc.shadow_host(parent) {
        return Some(host);
    }
    (parent != doc.root()).then_some(parent)
}
