//! Statement filters used by query steps.

use crate::rdf::{Predicate, Statement, Term};

/// A test applied to each statement a query step traverses.
///
/// Implemented for [`Predicate`] (match on predicate alone), [`Match`],
/// and any `Fn(&Statement) -> bool` closure.
pub trait StatementFilter {
    fn matches(&self, statement: &Statement) -> bool;
}

impl<F> StatementFilter for F
where
    F: Fn(&Statement) -> bool,
{
    fn matches(&self, statement: &Statement) -> bool {
        self(statement)
    }
}

impl StatementFilter for Predicate {
    fn matches(&self, statement: &Statement) -> bool {
        statement.predicate == *self
    }
}

/// Comparison filters whose values are bound at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    /// Any statement with this predicate.
    Predicate(Predicate),
    /// Statements with this predicate and exactly this object.
    PredicateObject(Predicate, Term),
}

impl Match {
    /// `predicate` statements whose object is the literal `value`.
    pub fn literal(predicate: Predicate, value: impl Into<String>) -> Self {
        Match::PredicateObject(predicate, Term::literal(value))
    }
}

impl StatementFilter for Match {
    fn matches(&self, statement: &Statement) -> bool {
        match self {
            Match::Predicate(p) => statement.predicate == *p,
            Match::PredicateObject(p, o) => statement.predicate == *p && statement.object == *o,
        }
    }
}
