//! Content-addressed node identity.

use sha2::{Digest, Sha256};
use std::fmt;

/// The hierarchy a node was derived from.
///
/// The namespace is part of the node hash, so a taxonomy field and an
/// authored field with the same dotted path never share a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Canonical taxonomy nodes.
    Schema,
    /// Authored package nodes.
    Package,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Package => "package",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blank node label for the field at `path` in `namespace`.
///
/// Lowercase hex SHA-256 over the namespace bytes followed by the path bytes.
pub fn node_id(namespace: Namespace, path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_str().as_bytes());
    hasher.update(path.as_bytes());
    hex::encode(hasher.finalize())
}
