//! Structured hierarchical identifier.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A name together with the version of the container that versions it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VersionedName {
    pub name: String,
    pub version: String,
}

impl VersionedName {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Identity of a node: owning agency, maintainable container, and for
/// sub-items the item name plus the version of its nearest versionable.
///
/// `item` is `None` for a maintainable-only identity. Item name and item
/// version therefore exist together or not at all.
#[derive(Debug, Clone, Serialize)]
pub struct Identifier {
    pub agency: String,
    pub container: VersionedName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<VersionedName>,
}

impl Identifier {
    pub fn maintainable(agency: impl Into<String>, container: VersionedName) -> Self {
        Self {
            agency: agency.into(),
            container,
            item: None,
        }
    }

    pub fn sub_item(agency: impl Into<String>, container: VersionedName, item: VersionedName) -> Self {
        Self {
            agency: agency.into(),
            container,
            item: Some(item),
        }
    }

    pub fn agency(&self) -> &str {
        &self.agency
    }

    pub fn container_name(&self) -> &str {
        &self.container.name
    }

    pub fn container_version(&self) -> &str {
        &self.container.version
    }

    pub fn item_name(&self) -> Option<&str> {
        self.item.as_ref().map(|i| i.name.as_str())
    }

    pub fn item_version(&self) -> Option<&str> {
        self.item.as_ref().map(|i| i.version.as_str())
    }

    pub fn is_maintainable_only(&self) -> bool {
        self.item.is_none()
    }

    /// Equality over possibly-absent identifiers: absent never matches,
    /// not even another absent one.
    pub fn same(lhs: Option<&Identifier>, rhs: Option<&Identifier>) -> bool {
        match (lhs, rhs) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        if self.agency != other.agency
            || self.container.name != other.container.name
            || self.container.version != other.container.version
        {
            return false;
        }
        match (&self.item, &other.item) {
            (None, None) => true,
            (Some(a), Some(b)) => a.name == b.name && a.version == b.version,
            // maintainable vs sub-item
            _ => false,
        }
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.agency.hash(state);
        self.container.hash(state);
        self.item.hash(state);
    }
}

/// URN-style rendering, for display only.
impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "urn:ddi:{}:{}:{}",
            self.agency, self.container.name, self.container.version
        )?;
        if let Some(item) = &self.item {
            write!(f, ":{}:{}", item.name, item.version)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn container() -> VersionedName {
        VersionedName::new("DataCollection.DC_5698", "2.4.0")
    }

    #[test]
    fn maintainable_and_sub_item_never_match() {
        let m = Identifier::maintainable("us.icpsr", container());
        let s = Identifier::sub_item(
            "us.icpsr",
            container(),
            VersionedName::new("Methodology.Meth_Type_1", "1.0.0"),
        );
        assert_ne!(m, s);
        assert_ne!(s, m);
    }

    #[test]
    fn container_triple_short_circuits() {
        let a = Identifier::maintainable("us.icpsr", container());
        let b = Identifier::maintainable("org.other", container());
        let c = Identifier::maintainable("us.icpsr", VersionedName::new("DataCollection.DC_5698", "2.4.1"));
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn absent_operands_are_never_equal() {
        let a = Identifier::maintainable("us.icpsr", container());
        assert!(Identifier::same(Some(&a), Some(&a.clone())));
        assert!(!Identifier::same(Some(&a), None));
        assert!(!Identifier::same(None, Some(&a)));
        assert!(!Identifier::same(None, None));
    }

    #[test]
    fn display_is_not_used_for_equality() {
        // Names containing the separator render identically but differ structurally.
        let a = Identifier::sub_item("x", VersionedName::new("a:b", "1"), VersionedName::new("c", "2"));
        let b = Identifier::sub_item("x", VersionedName::new("a", "b:1"), VersionedName::new("c", "2"));
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, b);
    }

    #[test]
    fn renders_urn() {
        let s = Identifier::sub_item(
            "us.icpsr",
            container(),
            VersionedName::new("TimeMethod.TM_1", "1.0.0"),
        );
        assert_eq!(
            s.to_string(),
            "urn:ddi:us.icpsr:DataCollection.DC_5698:2.4.0:TimeMethod.TM_1:1.0.0"
        );
    }
}
