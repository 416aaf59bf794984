//! Named handles into a component's internal structure.

use std::collections::HashMap;

use crate::dom::{Document, NodeId};
use crate::{DomError, Result};

/// Read-only map from part name to element.
///
/// Built once from the `part` attributes of a subtree. An element may carry
/// several space-separated part names; when two elements claim the same
/// name, the first in document order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parts {
    by_name: HashMap<String, NodeId>,
    names: Vec<String>,
}

impl Parts {
    /// Collect parts from the descendants of `root`.
    pub fn collect(doc: &Document, root: NodeId) -> Self {
        let mut parts = Self::default();
        for node in doc.descendants(root) {
            let Some(value) = doc.attribute(node, "part") else {
                continue;
            };
            for name in value.split_ascii_whitespace() {
                if !parts.by_name.contains_key(name) {
                    parts.by_name.insert(name.to_string(), node);
                    parts.names.push(name.to_string());
                }
            }
        }
        parts
    }

    /// Look up a part.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Look up a part that the structure is expected to define.
    pub fn require(&self, name: &str) -> Result<NodeId> {
        self.get(name)
            .ok_or_else(|| DomError::MissingPart(name.to_string()))
    }

    /// Check if a part is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Part names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the structure exposes no parts.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::elements;

    #[test]
    fn collects_first_claim_in_document_order() {
        let mut doc = Document::new();
        let root = elements::div()
            .child(elements::input().part("valueHolder"))
            .child(
                elements::div()
                    .part("container")
                    .child(elements::div().part("track knob"))
                    .child(elements::div().part("knob")),
            )
            .build(&mut doc)
            .unwrap();

        let parts = Parts::collect(&doc, root);
        assert_eq!(
            parts.names().collect::<Vec<_>>(),
            vec!["valueHolder", "container", "track", "knob"]
        );
        assert_eq!(parts.get("track"), parts.get("knob"));
        assert_eq!(parts.len(), 4);
    }

    #[test]
    fn require_reports_missing_part() {
        let mut doc = Document::new();
        let root = elements::div().build(&mut doc).unwrap();
        let parts = Parts::collect(&doc, root);

        assert!(parts.is_empty());
        assert_eq!(
            parts.require("knob"),
            Err(DomError::MissingPart("knob".to_string()))
        );
    }
}
