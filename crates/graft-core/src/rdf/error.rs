//! Statement parsing errors.

use thiserror::Error;

/// Errors produced while reading the statement text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A subject or object could not be read as a term.
    #[error("Invalid term `{text}`: {reason}")]
    Term { text: String, reason: &'static str },

    /// The predicate is not one of the known tokens.
    #[error("Unknown predicate `{0}`")]
    Predicate(String),

    /// The line does not have the `subject predicate object .` shape.
    #[error("Malformed statement `{text}`: {reason}")]
    Statement { text: String, reason: &'static str },

    /// A statement in a multi-line document failed to parse.
    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub(crate) fn term(text: impl Into<String>, reason: &'static str) -> Self {
        ParseError::Term {
            text: text.into(),
            reason,
        }
    }

    pub(crate) fn statement(text: impl Into<String>, reason: &'static str) -> Self {
        ParseError::Statement {
            text: text.into(),
            reason,
        }
    }

    pub(crate) fn at_line(self, line: usize) -> Self {
        ParseError::Line {
            line,
            source: Box::new(self),
        }
    }
}
