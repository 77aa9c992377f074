//! Set-at-a-time graph queries.

use std::collections::HashSet;

use super::filter::StatementFilter;
use super::Graph;
use crate::rdf::Term;

/// A set of terms bound to a graph.
///
/// Each step produces a new query; the receiver is left untouched so a
/// query can be reused in several branches of a larger expression, as in
/// `q.and(&q.out(&f).in_(&f))`.
#[derive(Debug, Clone)]
pub struct Query<'g> {
    graph: &'g Graph,
    terms: Vec<Term>,
}

impl<'g> Query<'g> {
    pub(crate) fn new(graph: &'g Graph, terms: Vec<Term>) -> Self {
        Self { graph, terms }
    }

    /// Objects of matching statements whose subject is in the current set.
    pub fn out<F: StatementFilter + ?Sized>(&self, filter: &F) -> Query<'g> {
        let terms = self
            .terms
            .iter()
            .flat_map(|t| self.graph.outgoing(t))
            .filter(|s| filter.matches(s))
            .map(|s| s.object.clone())
            .collect();
        Query::new(self.graph, terms)
    }

    /// Subjects of matching statements whose object is in the current set.
    pub fn in_<F: StatementFilter + ?Sized>(&self, filter: &F) -> Query<'g> {
        let terms = self
            .terms
            .iter()
            .flat_map(|t| self.graph.incoming(t))
            .filter(|s| filter.matches(s))
            .map(|s| s.subject.clone())
            .collect();
        Query::new(self.graph, terms)
    }

    /// Terms present in both queries.
    pub fn and(&self, other: &Query<'_>) -> Query<'g> {
        let other: HashSet<&Term> = other.terms.iter().collect();
        self.retain(|t| other.contains(t))
    }

    /// Terms of this query not present in `other`.
    pub fn not(&self, other: &Query<'_>) -> Query<'g> {
        let other: HashSet<&Term> = other.terms.iter().collect();
        self.retain(|t| !other.contains(t))
    }

    /// Remove repeated terms, keeping the first occurrence.
    pub fn unique(&self) -> Query<'g> {
        self.retain(|_| true)
    }

    /// The current terms in sorted order.
    pub fn result(&self) -> Vec<Term> {
        let mut terms = self.terms.clone();
        terms.sort();
        terms
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn retain(&self, keep: impl Fn(&Term) -> bool) -> Query<'g> {
        let mut seen = HashSet::new();
        let terms = self
            .terms
            .iter()
            .filter(|t| keep(t) && seen.insert(*t))
            .cloned()
            .collect();
        Query::new(self.graph, terms)
    }
}
