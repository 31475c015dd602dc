//! Read-only capability set over a markup tree.
//!
//! The resolver and the equivalence checker only ever see a tree through
//! this trait. Any representation that can answer these questions works.

/// A handle to one element of a rooted, ordered tree.
///
/// Handles are cheap to clone. `parent()` returns `None` only at the root.
pub trait TreeNode: Clone {
    fn name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// All attributes, sorted by attribute name.
    fn attributes(&self) -> Vec<(&str, &str)>;

    /// Text content of the element, if any.
    fn text(&self) -> Option<&str>;

    fn parent(&self) -> Option<Self>;

    fn children(&self) -> Vec<Self>;

    /// Node identity (the same element of the same tree), not content equality.
    fn same_node(&self, other: &Self) -> bool;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// The node itself, then its parent, grandparent, ... up to the root.
    fn ancestors_or_self(&self) -> AncestorsOrSelf<Self> {
        AncestorsOrSelf {
            next: Some(self.clone()),
        }
    }
}

pub struct AncestorsOrSelf<N> {
    next: Option<N>,
}

impl<N: TreeNode> Iterator for AncestorsOrSelf<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let cur = self.next.take()?;
        self.next = cur.parent();
        Some(cur)
    }
}
