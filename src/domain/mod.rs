//! Domain layer: the hierarchy document and its builders
//!
//! This layer is independent of transport and rendering concerns.

pub mod error;
pub mod hierarchy;
pub mod people;

pub use error::{DomainError, DomainResult};
pub use hierarchy::{HierarchyNode, NodeText};
pub use people::{wrap_root, HierarchyBuilder, PersonRecord};
