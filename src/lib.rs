//! Identity and equivalence of nodes in a markup tree.
//!
//! - `ident`: hierarchical identifiers resolved by walking a node's ancestors
//! - `canon`: content equivalence under a normalized serialization
//! - `tree`: the read-only node capability set both depend on

pub mod canon;
pub mod error;
pub mod ident;
pub mod report;
pub mod tree;

pub use canon::{canonicalize, equivalent};
pub use error::{CanonError, MalformedNodeError, MissingRole, ResolveError, TreeError};
pub use ident::{FlatIdentifier, Identifier, ResolverConfig, identify, identify_with};
pub use tree::{ElementSpec, NodePath, NodeRef, TreeNode};
