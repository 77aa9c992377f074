//! Decoding of multi-document YAML streams.

use serde::de::DeserializeOwned;

use super::error::DecodeError;
use super::models::{PackageDocument, TaxonomyDocument};

/// Decode every taxonomy document in a YAML stream.
pub fn decode_taxonomy(text: &str) -> Result<Vec<TaxonomyDocument>, DecodeError> {
    decode_all(text)
}

/// Decode every authored field document in a YAML stream.
pub fn decode_packages(text: &str) -> Result<Vec<PackageDocument>, DecodeError> {
    decode_all(text)
}

fn decode_all<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, DecodeError> {
    serde_yaml::Deserializer::from_str(text)
        .enumerate()
        .map(|(index, document)| {
            T::deserialize(document).map_err(|source| DecodeError::Yaml { index, source })
        })
        .collect()
}
