use graft_core::graph::Deduplicate;
use graft_core::schema::{decode_packages, decode_taxonomy, hypothetical_field, node_id, Namespace};
use graft_core::{
    candidate_grafts_for, candidate_grafts_in, graft_report, published_fields_in, FlattenError,
    FlattenResult, GraftError, Graph, Predicate, ReportOptions, Statement, Term,
};

const TAXONOMY: &str = r#"
registry:
  name: registry
  type: group
  fields:
    registry.path:
      flat_name: registry.path
      name: path
      type: keyword
    registry.data.strings:
      flat_name: registry.data.strings
      name: strings
      type: wildcard
file:
  name: file
  type: group
  fields:
    file.path:
      flat_name: file.path
      name: path
      type: keyword
      multi_fields:
        - flat_name: file.path.text
          name: text
          type: match_only_text
"#;

fn flatten(taxonomy: &str, packages: &str) -> FlattenResult {
    let mut result = FlattenResult::new();
    for doc in decode_taxonomy(taxonomy).unwrap() {
        result.merge(FlattenResult::taxonomy(&doc));
    }
    for doc in decode_packages(packages).unwrap() {
        result.merge(FlattenResult::package(&doc));
    }
    result
}

fn load(taxonomy: &str, packages: &str) -> Graph {
    flatten(taxonomy, packages).into_graph(&Deduplicate)
}

fn paths(q: graft_core::Query<'_>) -> Vec<String> {
    q.out(&Predicate::IsPath)
        .unique()
        .result()
        .into_iter()
        .map(Term::into_value)
        .collect()
}

#[test]
fn test_exact_path_match() {
    let g = load(TAXONOMY, "- name: registry.path\n  type: keyword\n");
    assert_eq!(
        candidate_grafts_for(&g, "registry.path", "keyword").unwrap(),
        vec!["registry.path"]
    );
}

#[test]
fn test_suffix_match_crosses_package_prefix() {
    let g = load(
        TAXONOMY,
        r#"
- name: foo_package
  type: group
  fields:
    - name: registry.path
      type: keyword
"#,
    );
    assert_eq!(
        candidate_grafts_for(&g, "foo_package.registry.path", "keyword").unwrap(),
        vec!["registry.path"]
    );
    assert_eq!(
        candidate_grafts_in(&g, "foo_package.registry.path").unwrap(),
        vec!["registry.path"]
    );
}

#[test]
fn test_type_mismatch_is_empty_not_error() {
    let g = load(TAXONOMY, "- name: registry.path\n  type: keyword\n");
    assert_eq!(candidate_grafts_for(&g, "registry.path", "text"), Ok(vec![]));
}

#[test]
fn test_absent_path_is_not_found() {
    let g = load(TAXONOMY, "- name: registry.path\n  type: keyword\n");
    assert_eq!(
        candidate_grafts_for(&g, "registry.hive", "keyword"),
        Err(GraftError::NotFound("registry.hive".to_string()))
    );
    assert_eq!(
        candidate_grafts_in(&g, "foo.registry.path"),
        Err(GraftError::NotFound("foo.registry.path".to_string()))
    );
}

#[test]
fn test_bare_name_is_not_a_path() {
    let g = load(TAXONOMY, "- name: scan.path\n  type: keyword\n");
    for full in ["path", "keyword"] {
        assert_eq!(
            candidate_grafts_in(&g, full),
            Err(GraftError::NotFound(full.to_string()))
        );
    }
}

#[test]
fn test_leaf_must_name_a_node() {
    let g = load(TAXONOMY, "- name: scan.path\n  type: keyword\n");
    for full in ["x.keyword", "x.true"] {
        assert_eq!(
            candidate_grafts_for(&g, full, "keyword"),
            Err(GraftError::NotFound(full.to_string()))
        );
    }
}

#[test]
fn test_conflicting_types_are_reported() {
    let g = load(
        TAXONOMY,
        "- name: scan.path\n  type: keyword\n---\n- name: scan.path\n  type: wildcard\n",
    );
    let err = candidate_grafts_in(&g, "scan.path").unwrap_err();
    assert_eq!(
        err,
        GraftError::MultipleTypes(vec!["keyword".to_string(), "wildcard".to_string()])
    );
    assert_eq!(err.to_string(), "Found multiple types: keyword, wildcard");
}

#[test]
fn test_never_grafts_onto_itself() {
    let g = load(TAXONOMY, "- name: registry.path\n  type: keyword\n");
    let candidates = candidate_grafts_in(&g, "registry.path").unwrap();
    assert!(!candidates.contains(&"registry.path".to_string()));
    assert_eq!(candidates, vec!["file.path"]);
}

#[test]
fn test_failed_step_keeps_previous_level() {
    let g = load(TAXONOMY, "");
    // "data" matches one level up, "other" does not.
    assert_eq!(
        candidate_grafts_for(&g, "other.data.strings", "wildcard").unwrap(),
        vec!["registry.data.strings"]
    );
    // Nothing above the leaf matches.
    assert_eq!(
        candidate_grafts_for(&g, "a.b.c.path", "keyword").unwrap(),
        vec!["file.path", "registry.path"]
    );
}

#[test]
fn test_multi_fields_are_candidates() {
    let g = load(TAXONOMY, "");
    assert_eq!(
        candidate_grafts_for(&g, "message.text", "match_only_text").unwrap(),
        vec!["file.path.text"]
    );
}

#[test]
fn test_hypothetical_field() {
    let mut result = flatten(TAXONOMY, "");
    hypothetical_field(
        "winlog.registry.path",
        "keyword",
        &mut |r: Result<Statement, FlattenError>| result.push(r),
    );
    let g = result.into_graph(&Deduplicate);

    assert_eq!(
        candidate_grafts_in(&g, "winlog.registry.path").unwrap(),
        vec!["registry.path"]
    );
    assert_eq!(
        paths(published_fields_in(&g)),
        vec!["winlog", "winlog.registry", "winlog.registry.path"]
    );
}

#[test]
fn test_ids_are_deterministic() {
    let packages = "- name: scan.path\n  type: keyword\n";
    let first = flatten(TAXONOMY, packages);
    let second = flatten(TAXONOMY, packages);
    assert_eq!(first.statements, second.statements);

    let leaf = Term::blank(node_id(Namespace::Schema, "registry.path"));
    assert!(first
        .statements
        .contains(&Statement::new(leaf, Predicate::IsPath, Term::literal("registry.path"))));
    assert_ne!(
        node_id(Namespace::Schema, "scan.path"),
        node_id(Namespace::Package, "scan.path")
    );
}

#[test]
fn test_loading_twice_is_idempotent() {
    let packages = "- name: scan.path\n  type: keyword\n";
    let once = load(TAXONOMY, packages);

    let mut doubled = flatten(TAXONOMY, packages);
    doubled.merge(flatten(TAXONOMY, packages));
    let twice = doubled.into_graph(&Deduplicate);

    assert_eq!(once.statements(), twice.statements());
    assert_eq!(
        candidate_grafts_in(&once, "scan.path"),
        candidate_grafts_in(&twice, "scan.path")
    );
    assert_eq!(paths(published_fields_in(&once)), paths(published_fields_in(&twice)));
}

#[test]
fn test_reloaded_dump_answers_the_same() {
    let packages = "- name: scan.path\n  type: keyword\n";
    let g = load(TAXONOMY, packages);
    let dump: String = g.statements().iter().map(|s| format!("{}\n", s)).collect();
    let reloaded = Graph::from_nquads(&dump).unwrap();

    assert_eq!(g.statements(), reloaded.statements());
    assert_eq!(
        candidate_grafts_in(&reloaded, "scan.path").unwrap(),
        vec!["file.path", "registry.path"]
    );
}

#[test]
fn test_report_over_packages() {
    let g = load(
        TAXONOMY,
        r#"
- name: scan
  type: group
  fields:
    - name: path
      type: keyword
    - name: hash
      type: keyword
    - name: host
      type: keyword
      external: ecs
"#,
    );
    let reports = graft_report(&g, ReportOptions::default());
    let summary: Vec<(&str, usize)> = reports
        .iter()
        .map(|r| (r.path.as_str(), r.outcome.as_ref().map_or(0, Vec::len)))
        .collect();
    assert_eq!(summary, vec![("scan.hash", 0), ("scan.path", 2)]);
}

#[test]
fn test_concurrent_queries() {
    let g = load(TAXONOMY, "- name: scan.path\n  type: keyword\n");
    let expected = candidate_grafts_in(&g, "scan.path").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| candidate_grafts_in(&g, "scan.path").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
