//! Flattening of canonical taxonomy documents.

use std::collections::BTreeMap;

use super::error::FlattenError;
use super::identity::Namespace;
use super::models::TaxonomyField;
use super::writer::{segments, Emit, NodeWriter};

/// Call `emit` with every statement constructed from a taxonomy document.
///
/// Field keys are full dotted paths. Entries directly under `parent == ""`
/// are field sets: only their nested fields produce nodes. Each field
/// yields a group node for every proper prefix of its path, then its own
/// `is:type`, `is:name` and `is:path`, then a `has:multi` edge and the
/// attributes of each alternate index sub-field. Nothing in the taxonomy
/// namespace is published.
///
/// A field whose statements cannot be built reports the error through
/// `emit` and flattening carries on with its siblings.
pub fn taxonomy_statements(
    parent: &str,
    fields: &BTreeMap<String, TaxonomyField>,
    emit: &mut Emit<'_>,
) {
    for (field, props) in fields {
        taxonomy_statements(field, &props.fields, emit);
        if parent.is_empty() {
            continue;
        }

        let mut writer = NodeWriter::new(Namespace::Schema, emit);
        let path = match segments(field) {
            Ok(path) => path,
            Err(err) => {
                writer.fail(err);
                continue;
            }
        };
        writer.groups(&path);

        let node = writer.node(field);
        if props.field_type.is_empty() {
            writer.fail(FlattenError::MissingType {
                path: field.clone(),
            });
        } else {
            writer.declare_type(&node, &props.field_type);
        }
        writer.describe(&node, path[path.len() - 1], field);

        for m in &props.multi_fields {
            let Some((owner, _)) = m.flat_name.rsplit_once('.') else {
                writer.fail(FlattenError::OrphanMultiField {
                    flat_name: m.flat_name.clone(),
                });
                continue;
            };
            let owner = writer.node(owner);
            let multi = writer.node(&m.flat_name);
            writer.multi(&owner, &multi);
            if m.field_type.is_empty() {
                writer.fail(FlattenError::MissingType {
                    path: m.flat_name.clone(),
                });
            } else {
                writer.declare_type(&multi, &m.field_type);
            }
            writer.describe(&multi, &m.name, &m.flat_name);
        }
    }
}
