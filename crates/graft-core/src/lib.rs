//! Flatten field-set schemas into a content-addressed statement graph and
//! search it for graft candidates.

pub mod config;
pub mod graft;
pub mod graph;
pub mod rdf;
pub mod schema;

pub use config::{Config, ConfigError};
pub use graft::{
    candidate_grafts_for, candidate_grafts_in, graft_report, published_fields_in, FieldReport,
    GraftError, ReportOptions,
};
pub use graph::{Deduplicate, Graph, Match, Query};
pub use rdf::{ParseError, Predicate, Statement, Term};
pub use schema::{FlattenError, FlattenResult, PackageField, TaxonomyField};
