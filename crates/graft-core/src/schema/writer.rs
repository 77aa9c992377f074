//! Statement emission shared by the taxonomy and package flatteners.

use super::error::FlattenError;
use super::identity::{node_id, Namespace};
use super::{GROUP_TYPE, PUBLISHED};
use crate::rdf::{Predicate, Statement, Term};

/// Callback receiving each statement, or the error that replaced it.
pub type Emit<'a> = dyn FnMut(Result<Statement, FlattenError>) + 'a;

/// Split a dotted path, rejecting empty segments.
pub(crate) fn segments(path: &str) -> Result<Vec<&str>, FlattenError> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(FlattenError::EmptySegment {
            path: path.to_string(),
        });
    }
    Ok(segments)
}

pub(crate) struct NodeWriter<'e, 'a> {
    namespace: Namespace,
    emit: &'e mut Emit<'a>,
}

impl<'e, 'a> NodeWriter<'e, 'a> {
    pub fn new(namespace: Namespace, emit: &'e mut Emit<'a>) -> Self {
        Self { namespace, emit }
    }

    pub fn node(&self, path: &str) -> Term {
        Term::blank(node_id(self.namespace, path))
    }

    pub fn fail(&mut self, err: FlattenError) {
        (self.emit)(Err(err));
    }

    fn statement(&mut self, subject: &Term, predicate: Predicate, object: Term) {
        (self.emit)(Ok(Statement::new(subject.clone(), predicate, object)));
    }

    /// Emit one group node per proper prefix of `segments`, each linked
    /// to the next prefix by `has:child`.
    pub fn groups(&mut self, segments: &[&str]) {
        for i in 0..segments.len().saturating_sub(1) {
            let sub = segments[..=i].join(".");
            let child = segments[..=i + 1].join(".");
            let group = self.node(&sub);
            if self.namespace == Namespace::Package {
                self.publish(&group);
            }
            self.declare_type(&group, GROUP_TYPE);
            self.describe(&group, segments[i], &sub);
            let child = self.node(&child);
            self.statement(&group, Predicate::HasChild, child);
        }
    }

    pub fn describe(&mut self, node: &Term, name: &str, path: &str) {
        self.statement(node, Predicate::IsName, Term::literal(name));
        self.statement(node, Predicate::IsPath, Term::literal(path));
    }

    /// Taxonomy nodes declare `is:type`, authored nodes `as:type`.
    pub fn declare_type(&mut self, node: &Term, field_type: &str) {
        let predicate = match self.namespace {
            Namespace::Schema => Predicate::IsType,
            Namespace::Package => Predicate::AsType,
        };
        self.statement(node, predicate, Term::literal(field_type));
    }

    pub fn publish(&mut self, node: &Term) {
        self.statement(node, Predicate::IsPublished, Term::literal(PUBLISHED));
    }

    pub fn external(&mut self, node: &Term, external: &str) {
        self.statement(node, Predicate::ExternalType, Term::literal(external));
    }

    pub fn multi(&mut self, field: &Term, multi: &Term) {
        self.statement(field, Predicate::HasMulti, multi.clone());
    }
}
