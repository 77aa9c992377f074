//! Graft candidate search.
//!
//! A graft candidate is a taxonomy node an authored field could be
//! merged into: it declares the same type and shares the longest
//! trailing run of path segments with the field.
//!
//! The search is a suffix walk. Seed with every node whose name is the
//! field's last segment and whose `is:type` is the wanted type, then step
//! each seed's ancestor chain up one `has:child` edge per remaining
//! segment, keeping chains whose parent name matches. When a step leaves
//! no chain alive, the seeds that survived the previous step are the
//! answer. A walk that stops at the seed still reports leaf-only matches.

mod error;
mod report;

pub use error::GraftError;
pub use report::{graft_report, FieldReport, ReportOptions};

use tracing::debug;

use crate::graph::{Graph, Match, Query};
use crate::rdf::{Predicate, Term};
use crate::schema::PUBLISHED;

/// Graft candidates for a field that need not exist in the graph.
///
/// Returns the paths of every node of type `field_type` with the longest
/// matching suffix of `full`, sorted. Fails with
/// [`GraftError::NotFound`] when no node is named like the last segment
/// of `full`. A type that never occurs yields no candidates.
pub fn candidate_grafts_for(
    graph: &Graph,
    full: &str,
    field_type: &str,
) -> Result<Vec<String>, GraftError> {
    let path: Vec<&str> = full.split('.').collect();
    let leaf = path[path.len() - 1];
    let candidates = match graph.literal(leaf) {
        Some(name) => graph.query(name).in_(&Predicate::IsName),
        None => graph.empty_query(),
    };
    if candidates.is_empty() {
        return Err(GraftError::NotFound(full.to_string()));
    }

    let Some(field_type) = graph.literal(field_type) else {
        debug!(path = full, field_type, "Type does not occur in graph");
        return Ok(Vec::new());
    };

    Ok(walk_matching_path(graph, &candidates, field_type, &path))
}

/// Graft candidates for a published field already in the graph.
///
/// The wanted type is the field's own `as:type`. Every node with the
/// field's path is excluded from the candidates, whatever its namespace,
/// so a field never grafts onto itself. Fails with
/// [`GraftError::NotFound`] when no node has `full` as its path.
pub fn candidate_grafts_in(graph: &Graph, full: &str) -> Result<Vec<String>, GraftError> {
    let path: Vec<&str> = full.split('.').collect();
    let node = graph
        .literal(full)
        .ok_or_else(|| GraftError::NotFound(full.to_string()))?;

    let q = graph.query(node).in_(&Predicate::IsPath);
    if q.is_empty() {
        return Err(GraftError::NotFound(full.to_string()));
    }
    let published = Match::literal(Predicate::IsPublished, PUBLISHED);
    let types = q
        .and(&q.out(&published).in_(&published))
        .out(&Predicate::AsType)
        .unique()
        .result();
    let field_type = match types.as_slice() {
        [] => return Err(GraftError::NoType(full.to_string())),
        [t] => t,
        _ => {
            return Err(GraftError::MultipleTypes(
                types.into_iter().map(Term::into_value).collect(),
            ))
        }
    };

    let candidates = q.out(&Predicate::IsName).in_(&Predicate::IsName).not(&q);
    Ok(walk_matching_path(graph, &candidates, field_type, &path))
}

/// Every node flagged as published.
pub fn published_fields_in(graph: &Graph) -> Query<'_> {
    match graph.literal(PUBLISHED) {
        Some(published) => graph
            .query(published)
            .in_(&Match::literal(Predicate::IsPublished, PUBLISHED))
            .unique(),
        None => graph.empty_query(),
    }
}

fn walk_matching_path(
    graph: &Graph,
    candidates: &Query<'_>,
    field_type: &Term,
    path: &[&str],
) -> Vec<String> {
    let matching_type = Match::PredicateObject(Predicate::IsType, field_type.clone());
    let seeds = candidates
        .and(&candidates.out(&matching_type).in_(&matching_type))
        .unique();

    // Each surviving seed with the ancestor reached so far.
    let mut chains: Vec<(&Term, Query<'_>)> = seeds
        .terms()
        .iter()
        .map(|leaf| (leaf, graph.query(leaf)))
        .collect();

    for (depth, segment) in path[..path.len() - 1].iter().rev().enumerate() {
        let named = Match::literal(Predicate::IsName, *segment);
        let next: Vec<(&Term, Query<'_>)> = chains
            .iter()
            .filter_map(|(leaf, level)| {
                let parents = level.in_(&Predicate::HasChild);
                let step = parents.and(&parents.out(&named).in_(&Predicate::IsName));
                (!step.is_empty()).then_some((*leaf, step))
            })
            .collect();

        if next.is_empty() {
            debug!(depth, segment, seeds = chains.len(), "Suffix walk stopped");
            break;
        }
        chains = next;
    }

    paths(&graph.query_all(chains.into_iter().map(|(leaf, _)| leaf.clone())))
}

fn paths(q: &Query<'_>) -> Vec<String> {
    q.out(&Predicate::IsPath)
        .unique()
        .result()
        .into_iter()
        .map(Term::into_value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Deduplicate;
    use crate::schema::{FlattenResult, PackageField, TaxonomyDocument, TaxonomyField};

    fn graph(taxonomy: &[(&str, &str)], package: Vec<PackageField>) -> Graph {
        let doc = TaxonomyDocument::from([(
            "fields".to_string(),
            TaxonomyField::set(
                taxonomy
                    .iter()
                    .map(|(path, typ)| (path.to_string(), TaxonomyField::leaf(*typ))),
            ),
        )]);
        let mut result = FlattenResult::taxonomy(&doc);
        result.merge(FlattenResult::package(&package));
        result.into_graph(&Deduplicate)
    }

    #[test]
    fn test_longest_suffix_wins() {
        let g = graph(
            &[
                ("registry.path", "keyword"),
                ("file.path", "keyword"),
                ("process.parent.path", "keyword"),
            ],
            vec![],
        );
        assert_eq!(
            candidate_grafts_for(&g, "x.parent.path", "keyword").unwrap(),
            vec!["process.parent.path"]
        );
    }

    #[test]
    fn test_ties_are_all_reported() {
        let g = graph(&[("registry.path", "keyword"), ("file.path", "keyword")], vec![]);
        assert_eq!(
            candidate_grafts_for(&g, "x.path", "keyword").unwrap(),
            vec!["file.path", "registry.path"]
        );
    }

    #[test]
    fn test_leaf_only_match_survives_failed_step() {
        let g = graph(&[("registry.path", "keyword")], vec![]);
        assert_eq!(
            candidate_grafts_for(&g, "a.b.path", "keyword").unwrap(),
            vec!["registry.path"]
        );
        assert_eq!(
            candidate_grafts_for(&g, "path", "keyword").unwrap(),
            vec!["registry.path"]
        );
    }

    #[test]
    fn test_type_must_match() {
        let g = graph(&[("registry.path", "keyword"), ("message", "text")], vec![]);
        assert!(candidate_grafts_for(&g, "registry.path", "text")
            .unwrap()
            .is_empty());
        assert!(candidate_grafts_for(&g, "registry.path", "long")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_authored_types_are_not_seeds() {
        let g = graph(&[], vec![PackageField::new("registry.path", "keyword")]);
        assert!(candidate_grafts_for(&g, "registry.path", "keyword")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_missing_name_is_not_found() {
        let g = graph(&[("registry.path", "keyword")], vec![]);
        assert_eq!(
            candidate_grafts_for(&g, "registry.size", "keyword"),
            Err(GraftError::NotFound("registry.size".to_string()))
        );
    }

    #[test]
    fn test_leaf_named_like_a_value_is_not_found() {
        let g = graph(&[("registry.path", "keyword")], vec![]);
        assert_eq!(
            candidate_grafts_for(&g, "x.keyword", "keyword"),
            Err(GraftError::NotFound("x.keyword".to_string()))
        );
    }

    #[test]
    fn test_in_requires_a_path() {
        let g = graph(&[("registry.path", "keyword")], vec![]);
        assert_eq!(
            candidate_grafts_in(&g, "path"),
            Err(GraftError::NotFound("path".to_string()))
        );
    }

    #[test]
    fn test_in_requires_published_type() {
        let g = graph(&[("registry.path", "keyword")], vec![]);
        assert_eq!(
            candidate_grafts_in(&g, "registry.path"),
            Err(GraftError::NoType("registry.path".to_string()))
        );
    }

    #[test]
    fn test_in_excludes_own_path() {
        let g = graph(
            &[("registry.path", "keyword"), ("file.path", "keyword")],
            vec![PackageField::new("registry.path", "keyword")],
        );
        assert_eq!(candidate_grafts_in(&g, "registry.path").unwrap(), vec!["file.path"]);
    }

    #[test]
    fn test_published_fields() {
        let g = graph(
            &[("registry.path", "keyword")],
            vec![PackageField::new("a.b", "keyword")],
        );
        let paths: Vec<String> = published_fields_in(&g)
            .out(&Predicate::IsPath)
            .result()
            .into_iter()
            .map(Term::into_value)
            .collect();
        assert_eq!(paths, vec!["a", "a.b"]);
    }

    #[test]
    fn test_published_fields_empty_graph() {
        let g = Graph::default();
        assert!(published_fields_in(&g).is_empty());
    }
}
