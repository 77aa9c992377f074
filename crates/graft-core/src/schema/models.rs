//! Field-set records as they appear in the source documents.
//!
//! Only the attributes the graph needs are modelled; every other key in
//! a document is ignored on decode.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One taxonomy document: field-set name to field-set record.
pub type TaxonomyDocument = BTreeMap<String, TaxonomyField>;

/// One authored document: an ordered list of top-level fields.
pub type PackageDocument = Vec<PackageField>;

/// A taxonomy field set or field.
///
/// Keys of `fields` are full dotted paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyField {
    /// Declared storage type.
    #[serde(rename = "type")]
    pub field_type: String,

    /// Nested fields, keyed by full dotted path.
    pub fields: BTreeMap<String, TaxonomyField>,

    /// Alternate ways the field is indexed.
    pub multi_fields: Vec<MultiField>,
}

impl TaxonomyField {
    /// A leaf field with the given type.
    pub fn leaf(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            ..Default::default()
        }
    }

    /// A field set containing the given fields.
    pub fn set<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, TaxonomyField)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Default::default()
        }
    }

    pub fn with_multi_field(mut self, multi: MultiField) -> Self {
        self.multi_fields.push(multi);
        self
    }
}

/// An alternate index sub-field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiField {
    /// Name of the sub-field.
    pub name: String,

    /// Type of the sub-field.
    #[serde(rename = "type")]
    pub field_type: String,

    /// Full dotted path of the sub-field. Set by the taxonomy only.
    pub flat_name: String,
}

impl MultiField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            flat_name: String::new(),
        }
    }

    pub fn with_flat_name(mut self, flat_name: impl Into<String>) -> Self {
        self.flat_name = flat_name.into();
        self
    }
}

/// An authored package field.
///
/// `name` is relative to the enclosing field, though it may itself be dotted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageField {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: String,

    pub fields: Vec<PackageField>,

    pub multi_fields: Vec<MultiField>,

    /// Set when the field's definition comes from an external schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<String>,
}

impl PackageField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            ..Default::default()
        }
    }

    /// A group field containing the given children.
    pub fn group(name: impl Into<String>, fields: Vec<PackageField>) -> Self {
        Self {
            name: name.into(),
            field_type: "group".to_string(),
            fields,
            ..Default::default()
        }
    }

    pub fn with_external(mut self, external: impl Into<String>) -> Self {
        self.external = Some(external.into());
        self
    }

    pub fn with_multi_field(mut self, multi: MultiField) -> Self {
        self.multi_fields.push(multi);
        self
    }
}
