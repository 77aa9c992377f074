//! Flattening of hierarchical field-set documents into statements.
//!
//! Two document shapes are supported:
//!
//! - **Taxonomy** documents map field-set names to records whose nested
//!   `fields` are keyed by full dotted path. Nodes live in the `schema`
//!   namespace, declare `is:type`, and are never published.
//! - **Package** documents are ordered lists of authored fields with
//!   single-segment relative names. Nodes live in the `package`
//!   namespace, declare `as:type`, and are all published.
//!
//! Both shapes synthesize one `group` node for every proper prefix of a
//! field path and link consecutive prefixes with `has:child`, so a field
//! and its ancestors can be walked segment by segment.
//!
//! # Example
//!
//! ```
//! use graft_core::schema::{decode_packages, FlattenResult};
//!
//! let yaml = "- name: scan.path\n  type: keyword\n";
//! let mut result = FlattenResult::new();
//! for doc in decode_packages(yaml).unwrap() {
//!     result.merge(FlattenResult::package(&doc));
//! }
//! // `scan` and `scan.path` are both published.
//! assert_eq!(result.stats().published, 2);
//! ```

mod decode;
mod error;
mod identity;
mod models;
mod package;
mod result;
mod taxonomy;
mod writer;

pub use decode::{decode_packages, decode_taxonomy};
pub use error::{DecodeError, FlattenError};
pub use identity::{node_id, Namespace};
pub use models::{MultiField, PackageDocument, PackageField, TaxonomyDocument, TaxonomyField};
pub use package::{hypothetical_field, package_statements};
pub use result::{FlattenResult, FlattenStats};
pub use taxonomy::taxonomy_statements;
pub use writer::Emit;

/// Declared type of synthesized intermediate nodes.
pub const GROUP_TYPE: &str = "group";

/// Object of every `is:published` statement.
pub const PUBLISHED: &str = "true";
