//! Batch graft search over every authored field.

use std::collections::BTreeSet;

use tracing::{debug, info};

use super::{candidate_grafts_in, published_fields_in, GraftError};
use crate::config::ReportConfig;
use crate::graph::{Graph, Match};
use crate::rdf::{Predicate, Term};
use crate::schema::GROUP_TYPE;

/// Which published fields a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Leave out fields whose authored type is `group`.
    pub skip_groups: bool,
    /// Leave out fields that carry an external type.
    pub skip_external: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            skip_groups: true,
            skip_external: true,
        }
    }
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            skip_groups: config.skip_groups,
            skip_external: config.skip_external,
        }
    }
}

/// Graft search outcome for one published field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub path: String,
    pub outcome: Result<Vec<String>, GraftError>,
}

impl FieldReport {
    /// True when the search succeeded with at least one candidate.
    pub fn has_candidates(&self) -> bool {
        matches!(&self.outcome, Ok(c) if !c.is_empty())
    }
}

/// Run [`candidate_grafts_in`] for every published field, sorted by path.
///
/// A field that fails is reported with its error; the rest of the batch
/// carries on.
pub fn graft_report(graph: &Graph, options: ReportOptions) -> Vec<FieldReport> {
    let published = published_fields_in(graph);
    let mut fields = published.clone();

    if options.skip_groups {
        let group = Match::literal(Predicate::AsType, GROUP_TYPE);
        fields = fields.not(&published.and(&published.out(&group).in_(&group)));
    }
    if options.skip_external {
        let external = published
            .out(&Predicate::ExternalType)
            .in_(&Predicate::ExternalType);
        fields = fields.not(&published.and(&external));
    }

    let paths: BTreeSet<String> = fields
        .out(&Predicate::IsPath)
        .terms()
        .iter()
        .cloned()
        .map(Term::into_value)
        .collect();
    debug!(
        published = published.len(),
        fields = paths.len(),
        "Building graft report"
    );

    let reports: Vec<FieldReport> = paths
        .into_iter()
        .map(|path| {
            let outcome = candidate_grafts_in(graph, &path);
            FieldReport { path, outcome }
        })
        .collect();

    info!(
        fields = reports.len(),
        with_candidates = reports.iter().filter(|r| r.has_candidates()).count(),
        "Graft report complete"
    );
    reports
}
