//! Flattening of authored package field documents.

use super::identity::Namespace;
use super::models::PackageField;
use super::writer::{segments, Emit, NodeWriter};

/// Call `emit` with every statement constructed from authored fields.
///
/// Field names are relative to `parent`; the full path is
/// `parent + "." + name`. Every node, group or leaf, is published and
/// declares its type with `as:type`. A leaf tagged as externally defined
/// also gets an `external:type` statement. Alternate index sub-fields hang
/// off the declaring field through `has:multi` at `path + "." + name`.
pub fn package_statements(parent: &str, fields: &[PackageField], emit: &mut Emit<'_>) {
    for props in fields {
        let path = if parent.is_empty() {
            props.name.clone()
        } else {
            format!("{}.{}", parent, props.name)
        };
        package_statements(&path, &props.fields, emit);

        let mut writer = NodeWriter::new(Namespace::Package, emit);
        let segs = match segments(&path) {
            Ok(segs) => segs,
            Err(err) => {
                writer.fail(err);
                continue;
            }
        };
        writer.groups(&segs);

        let node = writer.node(&path);
        writer.publish(&node);
        writer.describe(&node, segs[segs.len() - 1], &path);
        if let Some(external) = props.external.as_deref().filter(|e| !e.is_empty()) {
            writer.external(&node, external);
        }
        if !props.field_type.is_empty() {
            writer.declare_type(&node, &props.field_type);
        }

        for m in &props.multi_fields {
            let flat_name = format!("{}.{}", path, m.name);
            if let Err(err) = segments(&m.name) {
                writer.fail(err);
                continue;
            }
            let multi = writer.node(&flat_name);
            writer.multi(&node, &multi);
            writer.publish(&multi);
            if !m.field_type.is_empty() {
                writer.declare_type(&multi, &m.field_type);
            }
            writer.describe(&multi, &m.name, &flat_name);
        }
    }
}

/// Call `emit` with the statements of a single authored field that is
/// not part of any document.
///
/// Lets a field be queried with
/// [`candidate_grafts_in`](crate::graft::candidate_grafts_in) before it is
/// written down anywhere.
pub fn hypothetical_field(full: &str, field_type: &str, emit: &mut Emit<'_>) {
    let mut writer = NodeWriter::new(Namespace::Package, emit);
    let segs = match segments(full) {
        Ok(segs) => segs,
        Err(err) => {
            writer.fail(err);
            return;
        }
    };
    writer.groups(&segs);

    let node = writer.node(full);
    writer.publish(&node);
    writer.describe(&node, segs[segs.len() - 1], full);
    writer.declare_type(&node, field_type);
}
