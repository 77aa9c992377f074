//! Collected flattening output.

use tracing::warn;

use super::error::FlattenError;
use super::models::{PackageField, TaxonomyDocument};
use super::package::package_statements;
use super::taxonomy::taxonomy_statements;
use crate::graph::{Canonicalizer, Graph};
use crate::rdf::{Predicate, Statement};

/// Statements gathered from one or more documents.
///
/// Per-statement failures are kept as warnings; the statements that
/// could be built are still usable.
#[derive(Debug, Default)]
pub struct FlattenResult {
    /// Emitted statements, in emission order. May contain duplicates.
    pub statements: Vec<Statement>,

    /// Statements that could not be built.
    pub warnings: Vec<FlattenError>,
}

impl FlattenResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten one taxonomy document.
    pub fn taxonomy(document: &TaxonomyDocument) -> Self {
        let mut result = Self::new();
        taxonomy_statements("", document, &mut |r: Result<Statement, FlattenError>| {
            result.push(r)
        });
        result
    }

    /// Flatten one authored document.
    pub fn package(document: &[PackageField]) -> Self {
        let mut result = Self::new();
        package_statements("", document, &mut |r: Result<Statement, FlattenError>| {
            result.push(r)
        });
        result
    }

    /// Record one emitted statement or warning.
    pub fn push(&mut self, statement: Result<Statement, FlattenError>) {
        match statement {
            Ok(s) => self.statements.push(s),
            Err(e) => {
                warn!(error = %e, "Skipping statement");
                self.warnings.push(e);
            }
        }
    }

    /// Append another result, keeping its statements after ours.
    pub fn merge(&mut self, other: FlattenResult) {
        self.statements.extend(other.statements);
        self.warnings.extend(other.warnings);
    }

    /// Canonicalize the accumulated statements once and load them.
    pub fn into_graph(self, canonicalizer: &dyn Canonicalizer) -> Graph {
        Graph::canonical(self.statements, canonicalizer)
    }

    pub fn stats(&self) -> FlattenStats {
        let mut stats = FlattenStats::default();

        for s in &self.statements {
            match s.predicate {
                Predicate::IsName => stats.names += 1,
                Predicate::IsPath => stats.paths += 1,
                Predicate::IsType => stats.types += 1,
                Predicate::AsType => stats.used_types += 1,
                Predicate::IsPublished => stats.published += 1,
                Predicate::ExternalType => stats.external += 1,
                Predicate::HasChild => stats.children += 1,
                Predicate::HasMulti => stats.multi += 1,
            }
        }

        stats.statements = self.statements.len();
        stats.warnings = self.warnings.len();
        stats
    }
}

/// Statement counts per predicate.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlattenStats {
    pub statements: usize,
    pub names: usize,
    pub paths: usize,
    pub types: usize,
    pub used_types: usize,
    pub published: usize,
    pub external: usize,
    pub children: usize,
    pub multi: usize,
    pub warnings: usize,
}

impl std::fmt::Display for FlattenStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Statements: {}", self.statements)?;
        writeln!(f, "  is:name:       {}", self.names)?;
        writeln!(f, "  is:path:       {}", self.paths)?;
        writeln!(f, "  is:type:       {}", self.types)?;
        writeln!(f, "  as:type:       {}", self.used_types)?;
        writeln!(f, "  is:published:  {}", self.published)?;
        writeln!(f, "  external:type: {}", self.external)?;
        writeln!(f, "  has:child:     {}", self.children)?;
        writeln!(f, "  has:multi:     {}", self.multi)?;
        if self.warnings > 0 {
            writeln!(f, "Warnings: {}", self.warnings)?;
        }
        Ok(())
    }
}
