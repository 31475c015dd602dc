//! Flat `(id, rev)` identifier read straight off a single node.

use crate::error::MalformedNodeError;
use crate::ident::roles;
use crate::tree::TreeNode;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FlatIdentifier {
    pub id: String,
    pub rev: i64,
}

impl FlatIdentifier {
    pub fn new(id: impl Into<String>, rev: i64) -> Self {
        Self { id: id.into(), rev }
    }

    pub fn from_node<N: TreeNode>(node: &N) -> Result<Self, MalformedNodeError> {
        let element = || node.name().to_string();

        let id = node
            .attribute(roles::ID)
            .ok_or_else(|| MalformedNodeError::MissingId { node: element() })?;
        let raw_rev = node
            .attribute(roles::REV)
            .ok_or_else(|| MalformedNodeError::MissingRev { node: element() })?;
        let rev = raw_rev
            .trim()
            .parse::<i64>()
            .map_err(|_| MalformedNodeError::BadRev {
                node: element(),
                value: raw_rev.to_string(),
            })?;

        Ok(Self::new(id, rev))
    }
}

impl fmt::Display for FlatIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.rev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{ElementSpec, NodeRef};
    use pretty_assertions::assert_eq;

    fn build(spec: ElementSpec) -> NodeRef {
        spec.validate_and_build().unwrap()
    }

    #[test]
    fn reads_id_and_rev() {
        let n = build(ElementSpec::new("Item").attr("id", "abc").attr("rev", "3"));
        assert_eq!(FlatIdentifier::from_node(&n).unwrap(), FlatIdentifier::new("abc", 3));
    }

    #[test]
    fn equality_is_by_value() {
        let a = FlatIdentifier::from_node(&build(ElementSpec::new("A").attr("id", "x").attr("rev", "1"))).unwrap();
        let b = FlatIdentifier::from_node(&build(ElementSpec::new("B").attr("id", "x").attr("rev", "1"))).unwrap();
        let c = FlatIdentifier::from_node(&build(ElementSpec::new("A").attr("id", "x").attr("rev", "2"))).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn malformed_nodes() {
        let no_id = build(ElementSpec::new("A").attr("rev", "1"));
        assert_eq!(
            FlatIdentifier::from_node(&no_id).unwrap_err(),
            MalformedNodeError::MissingId { node: "A".to_string() }
        );

        let no_rev = build(ElementSpec::new("A").attr("id", "x"));
        assert!(matches!(
            FlatIdentifier::from_node(&no_rev),
            Err(MalformedNodeError::MissingRev { .. })
        ));

        let bad_rev = build(ElementSpec::new("A").attr("id", "x").attr("rev", "1.5"));
        assert_eq!(
            FlatIdentifier::from_node(&bad_rev).unwrap_err(),
            MalformedNodeError::BadRev {
                node: "A".to_string(),
                value: "1.5".to_string(),
            }
        );
    }
}
