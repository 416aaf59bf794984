//! Component blueprints and the tag registry.
//!
//! A [`Blueprint`] bundles what it takes to use a component in a document:
//! its tag, a factory, the stylesheet adopted by each instance's shadow
//! root and the document-level stylesheet (tokens and host rules). The
//! [`Registry`] maps tags to blueprints, creates instances and upgrades
//! elements that were inserted before their tag was defined.

use std::fmt;
use std::sync::Arc;

use horizon_toggle_core::{Component, Document, NodeId};
use horizon_toggle_style::{Scope, StyleEngine, StyleSheet, TokenSet};

use crate::logging::targets;
use crate::{Result, ToggleError};

/// Turns a host element into a registered component.
pub type Factory = Arc<dyn Fn(&mut Document, NodeId) -> Result<Arc<dyn Component>> + Send + Sync>;

/// Registration bundle of one component type.
#[derive(Clone)]
pub struct Blueprint {
    tag: String,
    component_sheet: StyleSheet,
    global_sheet: StyleSheet,
    tokens: TokenSet,
    factory: Factory,
}

impl Blueprint {
    /// Create a blueprint.
    ///
    /// # Errors
    ///
    /// [`ToggleError::InvalidTag`] unless `tag` is a lowercase name
    /// containing a `-`.
    pub fn new<F>(
        tag: &str,
        component_sheet: StyleSheet,
        global_sheet: StyleSheet,
        tokens: TokenSet,
        factory: F,
    ) -> Result<Self>
    where
        F: Fn(&mut Document, NodeId) -> Result<Arc<dyn Component>> + Send + Sync + 'static,
    {
        validate_tag(tag)?;
        Ok(Self {
            tag: tag.to_string(),
            component_sheet,
            global_sheet,
            tokens,
            factory: Arc::new(factory),
        })
    }

    /// The element tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Stylesheet adopted by each instance's shadow root.
    pub fn component_sheet(&self) -> &StyleSheet {
        &self.component_sheet
    }

    /// Stylesheet injected into the document.
    pub fn global_sheet(&self) -> &StyleSheet {
        &self.global_sheet
    }

    /// The token record the global sheet was built from.
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// CSS text for the shadow root.
    pub fn component_css(&self) -> String {
        self.component_sheet.to_css(&Scope::Shadow(self.tag.clone()))
    }

    /// CSS text for the document, with `:host` rewritten to the tag.
    pub fn global_css(&self) -> String {
        self.global_sheet.to_css(&Scope::Tag(self.tag.clone()))
    }

    /// Add both sheets to a style engine.
    pub fn install(&self, engine: &mut StyleEngine) {
        engine.add_stylesheet(self.component_sheet.clone(), Scope::Shadow(self.tag.clone()));
        engine.add_stylesheet(self.global_sheet.clone(), Scope::Tag(self.tag.clone()));
    }

    /// Upgrade an existing element.
    pub fn instantiate(&self, doc: &mut Document, host: NodeId) -> Result<Arc<dyn Component>> {
        (self.factory)(doc, host)
    }
}

impl fmt::Debug for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blueprint")
            .field("tag", &self.tag)
            .field("component_rules", &self.component_sheet.len())
            .field("global_rules", &self.global_sheet.len())
            .field("tokens", &self.tokens.len())
            .finish_non_exhaustive()
    }
}

/// Check that a tag can name a component element.
pub fn validate_tag(tag: &str) -> Result<()> {
    let valid = tag.contains('-')
        && tag.starts_with(|c: char| c.is_ascii_lowercase())
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(ToggleError::InvalidTag(tag.to_string()))
    }
}

/// Tag-to-blueprint registry.
#[derive(Debug, Default)]
pub struct Registry {
    blueprints: Vec<Blueprint>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a blueprint.
    ///
    /// # Errors
    ///
    /// [`ToggleError::AlreadyDefined`] if the tag is taken.
    pub fn define(&mut self, blueprint: Blueprint) -> Result<()> {
        if self.contains(blueprint.tag()) {
            return Err(ToggleError::AlreadyDefined(blueprint.tag.clone()));
        }
        tracing::debug!(target: targets::REGISTRY, tag = blueprint.tag(), "component defined");
        self.blueprints.push(blueprint);
        Ok(())
    }

    /// Look up a blueprint.
    pub fn get(&self, tag: &str) -> Option<&Blueprint> {
        self.blueprints.iter().find(|b| b.tag.eq_ignore_ascii_case(tag))
    }

    /// Check if a tag is defined.
    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Defined tags, in definition order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.blueprints.iter().map(|b| b.tag())
    }

    /// Number of defined tags.
    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    /// Check if nothing is defined.
    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }

    /// Create a detached instance of a defined tag.
    ///
    /// # Errors
    ///
    /// [`ToggleError::UnknownTag`] if no blueprint has this tag.
    pub fn create(&self, doc: &mut Document, tag: &str) -> Result<Arc<dyn Component>> {
        let blueprint = self
            .get(tag)
            .ok_or_else(|| ToggleError::UnknownTag(tag.to_string()))?;
        let host = doc.create_element(blueprint.tag());
        blueprint.instantiate(doc, host)
    }

    /// Upgrade every element under `root` (shadow trees included) whose
    /// tag is defined and which has no component yet. Returns the number
    /// of upgraded elements.
    pub fn upgrade(&self, doc: &mut Document, root: NodeId) -> Result<usize> {
        let pending: Vec<(NodeId, &Blueprint)> = doc
            .shadow_including_inclusive_descendants(root)
            .into_iter()
            .filter(|&node| doc.component(node).is_none())
            .filter_map(|node| Some((node, self.get(doc.tag_name(node)?)?)))
            .collect();

        for (host, blueprint) in &pending {
            tracing::trace!(target: targets::REGISTRY, host = ?host, tag = blueprint.tag(), "upgrading element");
            blueprint.instantiate(doc, *host)?;
        }
        Ok(pending.len())
    }

    /// A style engine with every blueprint's sheets installed.
    pub fn style_engine(&self) -> StyleEngine {
        let mut engine = StyleEngine::default();
        for blueprint in &self.blueprints {
            blueprint.install(&mut engine);
        }
        engine
    }

    /// Document-level CSS of every blueprint.
    pub fn global_css(&self) -> String {
        self.blueprints
            .iter()
            .map(Blueprint::global_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
