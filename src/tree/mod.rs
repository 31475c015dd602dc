//! Tree layer: the node capability set and one concrete implementation.
//!
//! It owns:
//! - TreeNode trait (name / attributes / text / parent / children)
//! - NodeRef (immutable Arc tree with weak parent links)
//! - ElementSpec (serde input + inline builder)
//! - NodePath (child-index addressing)

pub mod element;
pub mod node;
pub mod path;
pub mod spec;

pub use element::NodeRef;
pub use node::{AncestorsOrSelf, TreeNode};
pub use path::NodePath;
pub use spec::{ElementSpec, load_document};
