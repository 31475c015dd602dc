//! Concrete immutable tree.
//!
//! Ownership runs top-down: every element owns its children through `Arc`.
//! The upward link is a `Weak` so the tree never forms a reference cycle.
//! A `NodeRef` also holds the root, so a handle to a deep node keeps its
//! whole tree (and therefore its ancestor chain) alive.

use crate::tree::{ElementSpec, TreeNode};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Weak};

struct Element {
    name: String,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    parent: Weak<Element>,
    children: Vec<Arc<Element>>,
}

#[derive(Clone)]
pub struct NodeRef {
    root: Arc<Element>,
    elem: Arc<Element>,
}

impl NodeRef {
    /// Build a tree from an already validated spec. Use
    /// `ElementSpec::validate_and_build` from outside this module.
    pub(crate) fn build(spec: &ElementSpec) -> Self {
        let root = realize(spec, Weak::new());
        NodeRef {
            elem: Arc::clone(&root),
            root,
        }
    }

    /// The root of the tree this node belongs to.
    pub fn root(&self) -> NodeRef {
        NodeRef {
            root: Arc::clone(&self.root),
            elem: Arc::clone(&self.root),
        }
    }

    pub fn is_root(&self) -> bool {
        Arc::ptr_eq(&self.root, &self.elem)
    }

    /// Pre-order (document order) traversal of this node and its descendants.
    pub fn descendants_or_self(&self) -> Vec<NodeRef> {
        let mut out = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(n) = stack.pop() {
            let mut kids = n.children();
            kids.reverse();
            out.push(n);
            stack.extend(kids);
        }
        out
    }

    /// Copy the subtree rooted here back into an owned spec.
    pub fn to_spec(&self) -> ElementSpec {
        ElementSpec {
            name: self.elem.name.clone(),
            attributes: self.elem.attributes.clone(),
            text: self.elem.text.clone(),
            children: self.children().iter().map(NodeRef::to_spec).collect(),
        }
    }

    fn wrap(&self, elem: Arc<Element>) -> NodeRef {
        NodeRef {
            root: Arc::clone(&self.root),
            elem,
        }
    }
}

fn realize(spec: &ElementSpec, parent: Weak<Element>) -> Arc<Element> {
    Arc::new_cyclic(|me| Element {
        name: spec.name.clone(),
        attributes: spec.attributes.clone(),
        text: spec.text.clone(),
        parent,
        children: spec
            .children
            .iter()
            .map(|c| realize(c, me.clone()))
            .collect(),
    })
}

impl TreeNode for NodeRef {
    fn name(&self) -> &str {
        &self.elem.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.elem.attributes.get(name).map(String::as_str)
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.elem
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn text(&self) -> Option<&str> {
        self.elem.text.as_deref()
    }

    fn parent(&self) -> Option<Self> {
        self.elem.parent.upgrade().map(|p| self.wrap(p))
    }

    fn children(&self) -> Vec<Self> {
        self.elem
            .children
            .iter()
            .map(|c| self.wrap(Arc::clone(c)))
            .collect()
    }

    fn same_node(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.elem, &other.elem)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("name", &self.elem.name)
            .field("attributes", &self.elem.attributes)
            .field("children", &self.elem.children.len())
            .finish()
    }
}
