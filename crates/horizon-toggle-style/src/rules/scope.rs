//! Where a stylesheet applies.

/// The tree a stylesheet is attached to.
///
/// The scope decides both how selectors are written out and how they are
/// matched:
///
/// | Scope | Emission | Matches |
/// |---|---|---|
/// | `Shadow(tag)` | verbatim | inside the shadow tree of each `tag` host; `:host` is that host |
/// | `Tag(tag)` | `:host` rewritten to `tag` | light tree; `:host` is any `tag` element |
/// | `Document` | verbatim | light tree; `:host` matches nothing |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// A plain document stylesheet.
    Document,
    /// Adopted by the shadow root of every host with this tag.
    Shadow(String),
    /// Injected into the document for hosts with this tag.
    Tag(String),
}

impl Scope {
    /// The component tag this scope is bound to.
    pub fn host_tag(&self) -> Option<&str> {
        match self {
            Scope::Document => None,
            Scope::Shadow(tag) | Scope::Tag(tag) => Some(tag),
        }
    }
}
