//! Schema flattening and decoding errors.

use thiserror::Error;

/// A statement that could not be built from a field record.
///
/// These are reported per statement and never stop flattening of the
/// remaining fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    /// A dotted path has an empty segment (`a..b`, `.a`, `a.`).
    #[error("Empty segment in field path `{path}`")]
    EmptySegment { path: String },

    /// A taxonomy field or sub-field declares no type.
    #[error("Missing type for taxonomy field `{path}`")]
    MissingType { path: String },

    /// A taxonomy sub-field whose flat name has no parent segment.
    #[error("Multi-field `{flat_name}` has no parent field")]
    OrphanMultiField { flat_name: String },
}

/// A source document that could not be decoded.
///
/// Fatal for the stream it came from.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to decode document {index}: {source}")]
    Yaml {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },
}
