//! Canonicalization of the accumulated statement set.

use crate::rdf::Statement;

/// Turns an accumulated statement multiset into the set loaded into a
/// [`Graph`](super::Graph).
///
/// Implementations must return a duplicate-free set whose blank node
/// labelling is consistent with the input (isomorphism preserving). It is
/// run once over every statement from every document, after all of them
/// have been collected.
pub trait Canonicalizer: Send + Sync {
    fn canonicalize(&self, statements: Vec<Statement>) -> Vec<Statement>;
}

/// Sort and drop duplicate statements.
///
/// Blank node labels are content hashes of namespace and path, so they
/// are already canonical and no relabelling is done. This is not a
/// general graph canonicalization: statements whose blank nodes were
/// labelled some other way are only deduplicated, not renamed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Deduplicate;

impl Canonicalizer for Deduplicate {
    fn canonicalize(&self, statements: Vec<Statement>) -> Vec<Statement> {
        deduplicate(statements)
    }
}

/// Sort statements and remove exact duplicates.
pub fn deduplicate(mut statements: Vec<Statement>) -> Vec<Statement> {
    statements.sort();
    statements.dedup();
    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Predicate, Term};

    #[test]
    fn test_deduplicate() {
        let s = |o: &str| Statement::new(Term::blank("a"), Predicate::IsName, Term::literal(o));
        let out = Deduplicate.canonicalize(vec![s("b"), s("a"), s("b"), s("a")]);
        assert_eq!(out, vec![s("a"), s("b")]);
    }

    #[test]
    fn test_deduplicate_is_idempotent() {
        let s = |o: &str| Statement::new(Term::blank("a"), Predicate::IsPath, Term::literal(o));
        let once = deduplicate(vec![s("x"), s("y"), s("x")]);
        let twice = deduplicate(once.iter().cloned().chain(once.iter().cloned()).collect());
        assert_eq!(once, twice);
    }
}
