//! Content equivalence under a normalized serialization.

pub mod serialize;
pub mod text;

pub use serialize::{canonicalize, equivalent};
pub use text::normalize_text;
