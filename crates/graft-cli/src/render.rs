//! Console output for graft queries.

use serde::Serialize;
use std::io::{self, Write};

use graft_core::{FieldReport, GraftError};

#[derive(Serialize)]
struct FieldOutput<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> FieldOutput<'a> {
    fn new(path: &'a str, outcome: &'a Result<Vec<String>, GraftError>) -> Self {
        match outcome {
            Ok(candidates) => Self {
                path,
                candidates: Some(candidates),
                error: None,
            },
            Err(e) => Self {
                path,
                candidates: None,
                error: Some(e.to_string()),
            },
        }
    }

    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        match (self.candidates, &self.error) {
            (Some([]), _) => writeln!(out, "{}: no candidates", self.path),
            (Some(candidates), _) => writeln!(out, "{}: {}", self.path, candidates.join(", ")),
            (None, Some(error)) => writeln!(out, "{}: error: {}", self.path, error),
            (None, None) => writeln!(out, "{}", self.path),
        }
    }
}

/// Print the candidates for one field.
pub fn field(
    out: &mut impl Write,
    path: &str,
    outcome: &Result<Vec<String>, GraftError>,
    json: bool,
) -> io::Result<()> {
    let output = FieldOutput::new(path, outcome);
    if json {
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)
    } else {
        output.write_text(out)
    }
}

/// Print a batch report, one field per line or as a JSON array.
pub fn report(out: &mut impl Write, reports: &[FieldReport], json: bool) -> io::Result<()> {
    let outputs: Vec<FieldOutput<'_>> = reports
        .iter()
        .map(|r| FieldOutput::new(&r.path, &r.outcome))
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &outputs)?;
        return writeln!(out);
    }
    for output in &outputs {
        output.write_text(out)?;
    }
    Ok(())
}
