use crate::tree::NodePath;
use thiserror::Error;

/// Errors raised while building, loading or addressing a tree.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("invalid element name {name:?} at {path}")]
    InvalidElementName { path: NodePath, name: String },

    #[error("invalid attribute name {name:?} on element at {path}")]
    InvalidAttributeName { path: NodePath, name: String },

    #[error("no node at {0}")]
    PathNotFound(NodePath),

    #[error("bad node path {input:?}: {reason}")]
    BadPath { input: String, reason: String },

    #[error("read document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse document {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The role an ancestor search was looking for when it ran out of tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRole {
    Versionable,
    Maintainable,
    Agency,
}

impl std::fmt::Display for MissingRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MissingRole::Versionable => "versionable or maintainable ancestor",
            MissingRole::Maintainable => "maintainable ancestor",
            MissingRole::Agency => "agency-bearing ancestor",
        };
        f.write_str(s)
    }
}

/// Hierarchical identifier resolution failures (`MalformedTreeError`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("malformed tree: <{node}> has no {missing}")]
    MalformedTree { node: String, missing: MissingRole },

    #[error("malformed tree: <{node}> is marked {role} but has no id attribute")]
    MissingId { node: String, role: &'static str },
}

/// Flat `(id, rev)` identifier failures (`MalformedNodeError`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedNodeError {
    #[error("malformed node: <{node}> has no id attribute")]
    MissingId { node: String },

    #[error("malformed node: <{node}> has no rev attribute")]
    MissingRev { node: String },

    #[error("malformed node: <{node}> rev {value:?} is not an integer")]
    BadRev { node: String, value: String },
}

/// Canonical serialization failures. These are fatal for the equivalence check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    #[error("unencodable character {ch:?} in element at {path}")]
    UnencodableChar { path: NodePath, ch: char },
}
