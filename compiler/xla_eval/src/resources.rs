//! Resource table: resolution of `@type/name` references.
//!
//! The interpreter only ever calls [`ResourceTable::lookup`]. Hosts supply
//! the table at construction; [`DirectoryResources`] is the file-backed
//! implementation used by the `xla` binary.

mod directory;

use std::path::PathBuf;

pub use directory::{DirectoryResources, ResourceError};

/// A resolved resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    pub type_name: String,
    pub name: String,
    /// File extension, or empty when the file has none.
    pub kind: String,
    /// Where the resource is stored.
    pub location: PathBuf,
}

/// Why a reference did not resolve.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("unknown resource type `{0}`")]
    UnknownType(String),
    #[error("no resource named `{name}` of type `{type_name}`")]
    UnknownName { type_name: String, name: String },
}

/// Read-only lookup from `(type, name)` to a resource.
pub trait ResourceTable {
    fn lookup(&self, type_name: &str, name: &str) -> Result<Resource, LookupError>;
}

/// A table with no resources; every lookup fails with an unknown type.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyResources;

impl ResourceTable for EmptyResources {
    fn lookup(&self, type_name: &str, _name: &str) -> Result<Resource, LookupError> {
        Err(LookupError::UnknownType(type_name.to_owned()))
    }
}

/// Split the text after `@` into `(type, name)`.
///
/// The split happens at the first `/`; both halves must be non-empty.
pub fn split_reference(reference: &str) -> Option<(&str, &str)> {
    reference
        .split_once('/')
        .filter(|(type_name, name)| !type_name.is_empty() && !name.is_empty())
}
