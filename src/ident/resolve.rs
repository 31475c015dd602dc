//! Ancestor-walk resolution of hierarchical identifiers.
//!
//! Three independent searches start from the queried node, each one
//! self-inclusive and running up to the root:
//! 1) item: only if the node is itself identifiable or versionable. The item
//!    name is `{name}.{id}` of the node; the item version comes from the
//!    nearest versionable (or maintainable) ancestor-or-self.
//! 2) container: nearest maintainable ancestor-or-self, `{name}.{id}` + version.
//! 3) agency: nearest ancestor-or-self carrying an `agency` attribute.
//!
//! A missing `version` attribute falls back to `ResolverConfig::default_version`.

use crate::error::{MissingRole, ResolveError};
use crate::ident::roles;
use crate::ident::{Identifier, VersionedName};
use crate::tree::{NodePath, TreeNode};

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Version assumed for any versioned node without a `version` attribute.
pub const DEFAULT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub default_version: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl ResolverConfig {
    fn version_of<N: TreeNode>(&self, node: &N) -> String {
        node.attribute(roles::VERSION)
            .unwrap_or(self.default_version.as_str())
            .to_string()
    }
}

/// Resolve with the default configuration.
pub fn identify<N: TreeNode>(node: &N) -> Result<Identifier, ResolveError> {
    identify_with(node, &ResolverConfig::default())
}

pub fn identify_with<N: TreeNode>(
    node: &N,
    config: &ResolverConfig,
) -> Result<Identifier, ResolveError> {
    let malformed = |missing: MissingRole| ResolveError::MalformedTree {
        node: node.name().to_string(),
        missing,
    };

    // 1) Item.
    let item = if roles::is_sub_item(node) {
        let role = if roles::is_identifiable(node) {
            roles::IS_IDENTIFIABLE
        } else {
            roles::IS_VERSIONABLE
        };
        let name = dotted_name(node, role)?;
        let versioned = node
            .ancestors_or_self()
            .find(roles::is_versionable)
            .ok_or_else(|| malformed(MissingRole::Versionable))?;
        debug!(
            node = node.name(),
            versionable = versioned.name(),
            "item version source"
        );
        Some(VersionedName::new(name, config.version_of(&versioned)))
    } else {
        None
    };

    // 2) Container.
    let maintainable = node
        .ancestors_or_self()
        .find(roles::is_maintainable)
        .ok_or_else(|| malformed(MissingRole::Maintainable))?;
    debug!(
        node = node.name(),
        maintainable = maintainable.name(),
        "container source"
    );
    let container = VersionedName::new(
        dotted_name(&maintainable, roles::IS_MAINTAINABLE)?,
        config.version_of(&maintainable),
    );

    // 3) Agency.
    let agency = node
        .ancestors_or_self()
        .find_map(|n| roles::agency_of(&n).map(str::to_string))
        .ok_or_else(|| malformed(MissingRole::Agency))?;

    Ok(Identifier {
        agency,
        container,
        item,
    })
}

/// `{element name}.{id attribute}`; a marked node must carry an id.
fn dotted_name<N: TreeNode>(node: &N, role: &'static str) -> Result<String, ResolveError> {
    let id = node
        .attribute(roles::ID)
        .ok_or_else(|| ResolveError::MissingId {
            node: node.name().to_string(),
            role,
        })?;
    Ok(format!("{}.{}", node.name(), id))
}

/// Outcome of resolving one node during a whole-tree pass.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub path: NodePath,
    pub element: String,
    /// The node is a maintainable or a sub-item, so the identifier names it.
    /// Unmarked nodes only inherit their container's identity.
    pub owns_identity: bool,
    pub result: Result<Identifier, ResolveError>,
}

/// Resolve every node of the tree, in document order.
pub fn identify_all<N: TreeNode>(root: &N, config: &ResolverConfig) -> Vec<Resolution> {
    let mut out = Vec::new();
    let mut stack = vec![(NodePath::root(), root.clone())];
    while let Some((path, node)) = stack.pop() {
        let kids = node.children();
        for (i, kid) in kids.into_iter().enumerate().rev() {
            stack.push((path.child(i as u32), kid));
        }
        out.push(Resolution {
            result: identify_with(&node, config),
            owns_identity: roles::is_maintainable(&node) || roles::is_sub_item(&node),
            element: node.name().to_string(),
            path,
        });
    }
    out
}

/// A class of nodes that resolved to equal identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    pub identifier: Identifier,
    pub paths: Vec<NodePath>,
}

/// Group successful resolutions of identity-owning nodes by identifier
/// equality and keep the classes with more than one member. Groups come out
/// in order of first occurrence.
pub fn duplicate_identities(resolutions: &[Resolution]) -> Vec<DuplicateGroup> {
    let mut index: HashMap<&Identifier, usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for r in resolutions.iter().filter(|r| r.owns_identity) {
        let Ok(id) = &r.result else {
            continue;
        };
        match index.get(id) {
            Some(&g) => groups[g].paths.push(r.path.clone()),
            None => {
                index.insert(id, groups.len());
                groups.push(DuplicateGroup {
                    identifier: id.clone(),
                    paths: vec![r.path.clone()],
                });
            }
        }
    }

    groups.retain(|g| g.paths.len() > 1);
    groups
}
