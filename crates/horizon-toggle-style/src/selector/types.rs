//! Selector type definitions.

use std::fmt;

use crate::rules::Scope;

/// A comma-separated list of selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorList(pub Vec<Selector>);

impl SelectorList {
    /// Iterate over the selectors.
    pub fn iter(&self) -> impl Iterator<Item = &Selector> {
        self.0.iter()
    }

    /// Write the list for the given scope.
    pub fn to_css(&self, scope: &Scope) -> String {
        self.0
            .iter()
            .map(|s| s.to_css(scope))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(&Scope::Document))
    }
}

/// A complete selector (e.g. `input:checked + div > [part=track]`).
///
/// A selector consists of one or more compound parts connected by combinators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Compound parts, leftmost first.
    pub parts: Vec<SelectorPart>,
    /// Combinators between parts (length = parts.len() - 1).
    pub combinators: Vec<Combinator>,
}

impl Selector {
    /// Create a simple type selector.
    pub fn type_selector(tag: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::type_only(tag)],
            combinators: vec![],
        }
    }

    /// Get the rightmost (subject) selector part.
    pub fn subject(&self) -> Option<&SelectorPart> {
        self.parts.last()
    }

    /// Check if the subject is a `::part()` of a shadow tree.
    pub fn targets_part(&self) -> bool {
        self.subject().is_some_and(|p| p.pseudo_element.is_some())
    }

    /// Write the selector for the given scope.
    ///
    /// In [`Scope::Tag`], `:host` compounds are rewritten to the tag name.
    pub fn to_css(&self, scope: &Scope) -> String {
        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push_str(match self.combinators[i - 1] {
                    Combinator::Descendant => " ",
                    Combinator::Child => " > ",
                    Combinator::AdjacentSibling => " + ",
                    Combinator::GeneralSibling => " ~ ",
                });
            }
            part.write_css(&mut out, scope);
        }
        out
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(&Scope::Document))
    }
}

/// A compound selector (e.g. `input:not(:checked)`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorPart {
    /// Type selector (tag name or universal).
    pub type_selector: Option<TypeSelector>,
    /// ID selector (#id).
    pub id: Option<String>,
    /// Class selectors (.class).
    pub classes: Vec<String>,
    /// Attribute selectors (`[name]`, `[name=value]`).
    pub attributes: Vec<AttributeSelector>,
    /// Pseudo-class selectors.
    pub pseudo_classes: Vec<PseudoClass>,
    /// Trailing pseudo-element.
    pub pseudo_element: Option<PseudoElement>,
}

impl SelectorPart {
    /// Create a new empty selector part.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a type-only selector.
    pub fn type_only(tag: impl Into<String>) -> Self {
        Self {
            type_selector: Some(TypeSelector::Type(tag.into())),
            ..Default::default()
        }
    }

    /// Check if nothing was specified.
    pub fn is_empty(&self) -> bool {
        self.type_selector.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && self.pseudo_classes.is_empty()
            && self.pseudo_element.is_none()
    }

    /// The `:host` pseudo-class of this compound, if any.
    pub fn host(&self) -> Option<&PseudoClass> {
        self.pseudo_classes
            .iter()
            .find(|p| matches!(p, PseudoClass::Host(_)))
    }

    fn write_css(&self, out: &mut String, scope: &Scope) {
        let host = self.host();
        match (host, scope) {
            (Some(PseudoClass::Host(arg)), Scope::Tag(tag)) => {
                out.push_str(tag);
                if let Some(arg) = arg {
                    arg.write_simple(out, scope);
                }
            }
            _ => {
                if let Some(type_sel) = &self.type_selector {
                    type_sel.write_css(out);
                }
                if let Some(host) = host {
                    host.write_css(out, scope);
                }
            }
        }
        self.write_simple(out, scope);
        if let Some(element) = &self.pseudo_element {
            out.push_str(&element.to_string());
        }
    }

    /// Everything except the type selector, `:host` and the pseudo-element.
    fn write_simple(&self, out: &mut String, scope: &Scope) {
        if let Some(id) = &self.id {
            out.push('#');
            out.push_str(id);
        }
        for class in &self.classes {
            out.push('.');
            out.push_str(class);
        }
        for attribute in &self.attributes {
            out.push_str(&attribute.to_string());
        }
        for pseudo in &self.pseudo_classes {
            if !matches!(pseudo, PseudoClass::Host(_)) {
                pseudo.write_css(out, scope);
            }
        }
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_css(&mut out, &Scope::Document);
        f.write_str(&out)
    }
}

/// Type selector variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSelector {
    /// Universal selector (*).
    Universal,
    /// Specific tag name.
    Type(String),
}

impl TypeSelector {
    fn write_css(&self, out: &mut String) {
        match self {
            TypeSelector::Universal => out.push('*'),
            TypeSelector::Type(name) => out.push_str(name),
        }
    }
}

/// Attribute selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSelector {
    /// Attribute name (lowercase).
    pub name: String,
    /// Required value; `None` only tests presence.
    pub value: Option<String>,
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            None => write!(f, "[{}]", self.name),
            Some(value) if is_plain_ident(value) => write!(f, "[{}={}]", self.name, value),
            Some(value) => write!(f, "[{}=\"{}\"]", self.name, value),
        }
    }
}

fn is_plain_ident(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(|c: char| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Pseudo-class selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    /// `:checked`
    Checked,
    /// `:root`, the document element
    Root,
    /// `:not(compound)`
    Not(Box<SelectorPart>),
    /// `:host` or `:host(compound)`
    Host(Option<Box<SelectorPart>>),
}

impl PseudoClass {
    fn write_css(&self, out: &mut String, scope: &Scope) {
        match self {
            PseudoClass::Checked => out.push_str(":checked"),
            PseudoClass::Root => out.push_str(":root"),
            PseudoClass::Not(inner) => {
                out.push_str(":not(");
                inner.write_css(out, scope);
                out.push(')');
            }
            PseudoClass::Host(None) => out.push_str(":host"),
            PseudoClass::Host(Some(arg)) => {
                out.push_str(":host(");
                arg.write_css(out, scope);
                out.push(')');
            }
        }
    }
}

/// Pseudo-element selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoElement {
    /// `::part(name)`
    Part(String),
}

impl fmt::Display for PseudoElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PseudoElement::Part(name) => write!(f, "::part({name})"),
        }
    }
}

/// Combinator between compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant (space).
    Descendant,
    /// Direct child (>).
    Child,
    /// Adjacent sibling (+).
    AdjacentSibling,
    /// General sibling (~).
    GeneralSibling,
}
