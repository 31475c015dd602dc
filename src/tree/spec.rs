//! Owned tree description (JSON documents and inline construction).
//!
//! JSON shape:
//! {
//!   "name": "DataCollection",
//!   "attributes": { "isMaintainable": "true", "agency": "us.icpsr", "id": "DC_5698" },
//!   "text": "optional character content",
//!   "children": [ { "name": "Methodology", ... } ]
//! }
//!
//! `validate_and_build` checks names and turns an `ElementSpec` into a `NodeRef`
//! tree with parent links.

use crate::error::TreeError;
use crate::tree::{NodePath, NodeRef};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::sync::LazyLock;
use tracing::debug;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9._:-]*$").expect("markup name pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a role marker. Presence of the attribute is what counts.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "true")
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Validate element and attribute names, then build the tree.
    pub fn validate_and_build(&self) -> Result<NodeRef, TreeError> {
        self.validate(&NodePath::root())?;
        Ok(NodeRef::build(self))
    }

    fn validate(&self, path: &NodePath) -> Result<(), TreeError> {
        if !NAME_RE.is_match(&self.name) {
            return Err(TreeError::InvalidElementName {
                path: path.clone(),
                name: self.name.clone(),
            });
        }
        if let Some(bad) = self.attributes.keys().find(|k| !NAME_RE.is_match(k)) {
            return Err(TreeError::InvalidAttributeName {
                path: path.clone(),
                name: bad.clone(),
            });
        }
        for (i, c) in self.children.iter().enumerate() {
            c.validate(&path.child(i as u32))?;
        }
        Ok(())
    }
}

/// Read a JSON document from disk and build its tree.
pub fn load_document(path: &str) -> Result<NodeRef, TreeError> {
    let text = fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_string(),
        source,
    })?;
    let spec: ElementSpec = serde_json::from_str(&text).map_err(|source| TreeError::Json {
        path: path.to_string(),
        source,
    })?;
    let root = spec.validate_and_build()?;
    debug!(path, root = spec.name.as_str(), "loaded document");
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_with_defaults() {
        let spec: ElementSpec = serde_json::from_str(
            r#"{"name": "a", "children": [{"name": "b", "attributes": {"id": "1"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            spec,
            ElementSpec::new("a").child(ElementSpec::new("b").attr("id", "1"))
        );
    }

    #[test]
    fn rejects_bad_element_name_with_path() {
        let err = ElementSpec::new("a")
            .child(ElementSpec::new("ok").child(ElementSpec::new("1bad")))
            .validate_and_build()
            .unwrap_err();
        match err {
            TreeError::InvalidElementName { path, name } => {
                assert_eq!(path, NodePath::new(vec![0, 0]));
                assert_eq!(name, "1bad");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_bad_attribute_name() {
        let err = ElementSpec::new("a")
            .attr("has space", "x")
            .validate_and_build()
            .unwrap_err();
        assert!(matches!(err, TreeError::InvalidAttributeName { .. }));
    }

    #[test]
    fn loads_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(
            &path,
            r#"{"name": "root", "attributes": {"agency": "x"}, "children": [{"name": "leaf"}]}"#,
        )
        .unwrap();
        let root = load_document(path.to_str().unwrap()).unwrap();
        assert_eq!(root.attribute("agency"), Some("x"));
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn missing_document_is_io_error() {
        let err = load_document("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TreeError::Io { .. }));
    }
}
