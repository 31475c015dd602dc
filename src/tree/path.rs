//! Child-index address of a node inside a tree.
//!
//! Example: [0, 1, 0]  =>  root -> first child -> second child -> first child.
//! The empty path [] addresses the root itself.
//!
//! Stored as a Vec<u32> with derived ordering so it sorts in document order
//! and can be used as a BTreeMap key.

use crate::error::TreeError;
use crate::tree::TreeNode;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodePath(pub Vec<u32>);

impl NodePath {
    pub fn new(path: Vec<u32>) -> Self {
        Self(path)
    }

    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: u32) -> Self {
        let mut v = self.0.clone();
        v.push(index);
        Self(v)
    }

    /// Follow the path down from `root`.
    pub fn resolve<N: TreeNode>(&self, root: &N) -> Result<N, TreeError> {
        let mut cur = root.clone();
        for &idx in &self.0 {
            cur = cur
                .children()
                .into_iter()
                .nth(idx as usize)
                .ok_or_else(|| TreeError::PathNotFound(self.clone()))?;
        }
        Ok(cur)
    }

    /// Compute the path of `node` by walking its parent links up to the root.
    ///
    /// `None` if some parent does not list the node among its children.
    pub fn of<N: TreeNode>(node: &N) -> Option<Self> {
        let mut rev = Vec::new();
        let mut cur = node.clone();
        while let Some(parent) = cur.parent() {
            let idx = parent
                .children()
                .iter()
                .position(|c| c.same_node(&cur))?;
            rev.push(idx as u32);
            cur = parent;
        }
        rev.reverse();
        Some(Self(rev))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, idx) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", idx)?;
        }
        f.write_str("]")
    }
}

/// Parse "[0, 1, 0]" (or the shorthand "0/1/0") into NodePath(vec![0, 1, 0]).
impl FromStr for NodePath {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = |reason: String| TreeError::BadPath {
            input: s.to_string(),
            reason,
        };

        let t = s.trim();
        let (inner, sep) = if t.starts_with('[') || t.ends_with(']') {
            if !(t.starts_with('[') && t.ends_with(']') && t.len() >= 2) {
                return Err(bad("unbalanced brackets".to_string()));
            }
            (t[1..t.len() - 1].trim(), ',')
        } else {
            (t, '/')
        };

        if inner.is_empty() {
            return Ok(NodePath::root());
        }

        let mut v = Vec::new();
        for part in inner.split(sep) {
            let p = part.trim();
            if p.is_empty() {
                return Err(bad("empty path element".to_string()));
            }
            let idx = p
                .parse::<u32>()
                .map_err(|_| bad(format!("bad path element {}", p)))?;
            v.push(idx);
        }
        Ok(NodePath(v))
    }
}
