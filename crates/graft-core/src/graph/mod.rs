//! Immutable, adjacency-indexed statement graph.
//!
//! Statements are held in a flat arena. Two maps from term to arena
//! positions, one keyed by subject and one by object, are built once on
//! load; every query step is one map lookup per term in the current set,
//! so a walk costs in proportion to the sets it touches rather than the
//! size of the graph.
//!
//! A [`Graph`] is never mutated after construction and is `Send + Sync`,
//! so any number of threads may query it at once.

mod canonical;
mod filter;
mod query;

pub use canonical::{deduplicate, Canonicalizer, Deduplicate};
pub use filter::{Match, StatementFilter};
pub use query::Query;

use std::collections::HashMap;
use tracing::debug;

use crate::rdf::{ParseError, Statement, Term};

/// A loaded statement set.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    statements: Vec<Statement>,
    by_subject: HashMap<Term, Vec<usize>>,
    by_object: HashMap<Term, Vec<usize>>,
}

impl Graph {
    /// Build the graph from a finished statement set.
    ///
    /// The set is expected to be deduplicated already; see
    /// [`Graph::canonical`].
    pub fn new(statements: Vec<Statement>) -> Self {
        let mut by_subject: HashMap<Term, Vec<usize>> = HashMap::new();
        let mut by_object: HashMap<Term, Vec<usize>> = HashMap::new();

        for (i, s) in statements.iter().enumerate() {
            by_subject.entry(s.subject.clone()).or_default().push(i);
            by_object.entry(s.object.clone()).or_default().push(i);
        }

        debug!(
            statements = statements.len(),
            subjects = by_subject.len(),
            objects = by_object.len(),
            "Loaded graph"
        );

        Self {
            statements,
            by_subject,
            by_object,
        }
    }

    /// Canonicalize an accumulated multiset, then build the graph.
    pub fn canonical(statements: Vec<Statement>, canonicalizer: &dyn Canonicalizer) -> Self {
        Self::new(canonicalizer.canonicalize(statements))
    }

    /// Build a graph from a statement dump, deduplicating on the way in.
    pub fn from_nquads(text: &str) -> Result<Self, ParseError> {
        let statements = Statement::parse_document(text)?;
        Ok(Self::canonical(statements, &Deduplicate))
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// All statements in load order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The term with the given text form (`_:label` or `"value"`), if it
    /// occurs anywhere in the graph.
    pub fn term_for(&self, text: &str) -> Option<&Term> {
        let term = Term::parse(text).ok()?;
        self.lookup(&term)
    }

    /// The literal term with the given unquoted value, if present.
    pub fn literal(&self, value: &str) -> Option<&Term> {
        self.lookup(&Term::literal(value))
    }

    /// Start a query at a single term.
    pub fn query(&self, term: &Term) -> Query<'_> {
        Query::new(self, vec![term.clone()])
    }

    /// Start a query at a set of terms.
    pub fn query_all<I>(&self, terms: I) -> Query<'_>
    where
        I: IntoIterator<Item = Term>,
    {
        Query::new(self, terms.into_iter().collect())
    }

    /// A query over no terms.
    pub fn empty_query(&self) -> Query<'_> {
        Query::new(self, Vec::new())
    }

    fn lookup(&self, term: &Term) -> Option<&Term> {
        self.by_subject
            .get_key_value(term)
            .or_else(|| self.by_object.get_key_value(term))
            .map(|(k, _)| k)
    }

    pub(crate) fn outgoing<'a>(&'a self, term: &Term) -> impl Iterator<Item = &'a Statement> + 'a {
        self.by_subject
            .get(term)
            .into_iter()
            .flatten()
            .map(move |&i| &self.statements[i])
    }

    pub(crate) fn incoming<'a>(&'a self, term: &Term) -> impl Iterator<Item = &'a Statement> + 'a {
        self.by_object
            .get(term)
            .into_iter()
            .flatten()
            .map(move |&i| &self.statements[i])
    }
}
