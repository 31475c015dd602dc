//! Role-marking attributes.
//!
//! A role marker is a boolean attribute: present means true, whatever its value.

use crate::tree::TreeNode;

pub const IS_MAINTAINABLE: &str = "isMaintainable";
pub const IS_VERSIONABLE: &str = "isVersionable";
pub const IS_IDENTIFIABLE: &str = "isIdentifiable";
pub const AGENCY: &str = "agency";
pub const ID: &str = "id";
pub const VERSION: &str = "version";
pub const REV: &str = "rev";

/// Top-level versioned container.
pub fn is_maintainable<N: TreeNode>(node: &N) -> bool {
    node.has_attribute(IS_MAINTAINABLE)
}

/// Versioned container. Every maintainable is versionable.
pub fn is_versionable<N: TreeNode>(node: &N) -> bool {
    node.has_attribute(IS_VERSIONABLE) || is_maintainable(node)
}

pub fn is_identifiable<N: TreeNode>(node: &N) -> bool {
    node.has_attribute(IS_IDENTIFIABLE)
}

/// A node is queried as a sub-item when it is itself marked identifiable or
/// versionable. A maintainable alone does not count.
pub fn is_sub_item<N: TreeNode>(node: &N) -> bool {
    is_identifiable(node) || node.has_attribute(IS_VERSIONABLE)
}

pub fn agency_of<N: TreeNode>(node: &N) -> Option<&str> {
    node.attribute(AGENCY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ElementSpec;

    #[test]
    fn maintainable_implies_versionable() {
        let n = ElementSpec::new("M")
            .flag(IS_MAINTAINABLE)
            .validate_and_build()
            .unwrap();
        assert!(is_maintainable(&n));
        assert!(is_versionable(&n));
        assert!(!is_sub_item(&n));
    }

    #[test]
    fn marker_presence_is_what_counts() {
        let n = ElementSpec::new("I")
            .attr(IS_IDENTIFIABLE, "false")
            .validate_and_build()
            .unwrap();
        assert!(is_identifiable(&n));
        assert!(is_sub_item(&n));
        assert_eq!(agency_of(&n), None);
    }
}
