//! Declarative element construction.
//!
//! # Example
//!
//! ```
//! use horizon_toggle_core::dom::{elements, Document};
//!
//! let mut doc = Document::new();
//! let label = elements::label()
//!     .child(elements::input().attr("type", "checkbox").flag("hidden"))
//!     .child(elements::span().text("Dark mode"))
//!     .build(&mut doc)
//!     .unwrap();
//!
//! assert_eq!(doc.text_content(label), "Dark mode");
//! ```

use super::{Document, NodeId};
use crate::Result;

enum Child {
    Element(ElementBuilder),
    Text(String),
}

/// Builder for an element subtree.
#[must_use = "builders do nothing until built into a document"]
pub struct ElementBuilder {
    tag: String,
    attributes: Vec<(String, String)>,
    checked: bool,
    children: Vec<Child>,
}

impl ElementBuilder {
    /// Start an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            checked: false,
            children: Vec::new(),
        }
    }

    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set a boolean attribute (present with an empty value).
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    /// Set the `part` attribute.
    pub fn part(self, name: impl Into<String>) -> Self {
        self.attr("part", name)
    }

    /// Set the initial `checked` property.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Append a text node.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Create the subtree, detached.
    pub fn build(self, doc: &mut Document) -> Result<NodeId> {
        let element = doc.create_element(&self.tag);
        for (name, value) in self.attributes {
            doc.set_attribute(element, &name, value)?;
        }
        if self.checked {
            doc.set_checked(element, true)?;
        }
        for child in self.children {
            let node = match child {
                Child::Element(builder) => builder.build(doc)?,
                Child::Text(text) => doc.create_text(text),
            };
            doc.append_child(element, node)?;
        }
        Ok(element)
    }

    /// Create the subtree and append it to `parent`.
    pub fn build_into(self, doc: &mut Document, parent: NodeId) -> Result<NodeId> {
        let element = self.build(doc)?;
        doc.append_child(parent, element)?;
        Ok(element)
    }
}

/// Shorthand constructors for the elements components are built from.
pub mod elements {
    use super::ElementBuilder;

    macro_rules! element_fns {
        ($($name:ident),* $(,)?) => {
            $(
                #[doc = concat!("Start a `<", stringify!($name), ">` element.")]
                pub fn $name() -> ElementBuilder {
                    ElementBuilder::new(stringify!($name))
                }
            )*
        };
    }

    element_fns!(div, input, label, slot, span);
}
