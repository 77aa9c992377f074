//! Triples and their line-oriented text form.

use std::fmt;

use super::error::ParseError;
use super::predicate::Predicate;
use super::term::Term;

/// An immutable (subject, predicate, object) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Statement {
    pub subject: Term,
    pub predicate: Predicate,
    pub object: Term,
}

impl Statement {
    pub fn new(subject: Term, predicate: Predicate, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Parse one statement line, e.g. `_:ab12 <is:name> "path" .`
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let body = line
            .trim()
            .strip_suffix('.')
            .ok_or_else(|| ParseError::statement(line, "missing terminating '.'"))?
            .trim_end();

        let (subject, rest) = body
            .split_once(char::is_whitespace)
            .ok_or_else(|| ParseError::statement(line, "missing predicate"))?;
        let (predicate, object) = rest
            .trim_start()
            .split_once(char::is_whitespace)
            .ok_or_else(|| ParseError::statement(line, "missing object"))?;

        let subject = Term::parse(subject)?;
        if !subject.is_blank() {
            return Err(ParseError::statement(line, "subject must be a blank node"));
        }
        let predicate: Predicate = predicate.parse()?;
        let object = Term::parse(object.trim())?;
        if predicate.is_edge() != object.is_blank() {
            return Err(ParseError::statement(
                line,
                "object kind does not match predicate",
            ));
        }

        Ok(Self::new(subject, predicate, object))
    }

    /// Parse a whole document, one statement per line.
    ///
    /// Blank lines and `#` comments are skipped. Fails on the first bad
    /// line, reporting its 1-based line number.
    pub fn parse_document(text: &str) -> Result<Vec<Self>, ParseError> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(|(i, line)| Self::parse(line).map_err(|e| e.at_line(i + 1)))
            .collect()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
