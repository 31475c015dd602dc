//! Identifier layer: hierarchical identifiers resolved by ancestor walks,
//! plus the flat `(id, rev)` form read off a single node.

pub mod flat;
pub mod identifier;
pub mod resolve;
pub mod roles;

pub use flat::FlatIdentifier;
pub use identifier::{Identifier, VersionedName};
pub use resolve::{
    DEFAULT_VERSION, DuplicateGroup, Resolution, ResolverConfig, duplicate_identities, identify,
    identify_all, identify_with,
};
