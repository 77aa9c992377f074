//! Graph terms: blank nodes and string literals.

use std::fmt::{self, Write};

use super::error::ParseError;

/// An atomic graph value.
///
/// Terms compare by value. The derived order sorts blank nodes before
/// literals and then by their text, which gives query results a stable
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// Anonymous node, identified by its label (without the `_:` prefix).
    Blank(String),
    /// Plain string literal (unquoted value).
    Literal(String),
}

impl Term {
    /// Create a blank node term.
    pub fn blank(label: impl Into<String>) -> Self {
        Term::Blank(label.into())
    }

    /// Create a literal term.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(value.into())
    }

    /// The blank node label or literal value.
    pub fn as_str(&self) -> &str {
        match self {
            Term::Blank(label) => label,
            Term::Literal(value) => value,
        }
    }

    /// Consume the term, returning its label or value.
    pub fn into_value(self) -> String {
        match self {
            Term::Blank(label) => label,
            Term::Literal(value) => value,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Parse a term from its text form: `_:label` or `"quoted value"`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if let Some(label) = text.strip_prefix("_:") {
            if label.is_empty() {
                return Err(ParseError::term(text, "empty blank node label"));
            }
            if !label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            {
                return Err(ParseError::term(text, "invalid blank node label"));
            }
            return Ok(Term::Blank(label.to_string()));
        }

        if text.starts_with('"') {
            return unquote(text).map(Term::Literal);
        }

        Err(ParseError::term(text, "expected a blank node or a literal"))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Blank(label) => write!(f, "_:{}", label),
            Term::Literal(value) => write_quoted(f, value),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn unquote(text: &str) -> Result<String, ParseError> {
    let inner = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .ok_or_else(|| ParseError::term(text, "unterminated literal"))?;

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(ParseError::term(text, "unescaped quote in literal")),
            '\\' => {
                let escaped = match chars.next() {
                    Some('"') => '"',
                    Some('\\') => '\\',
                    Some('n') => '\n',
                    Some('r') => '\r',
                    Some('t') => '\t',
                    Some('u') => unicode_escape(text, &mut chars, 4)?,
                    Some('U') => unicode_escape(text, &mut chars, 8)?,
                    _ => return Err(ParseError::term(text, "invalid escape in literal")),
                };
                value.push(escaped);
            }
            c => value.push(c),
        }
    }
    Ok(value)
}

fn unicode_escape(
    text: &str,
    chars: &mut std::str::Chars<'_>,
    digits: usize,
) -> Result<char, ParseError> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.len() != digits {
        return Err(ParseError::term(text, "truncated unicode escape"));
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| ParseError::term(text, "invalid unicode escape"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Term::blank("ab12").to_string(), "_:ab12");
        assert_eq!(Term::literal("registry.path").to_string(), "\"registry.path\"");
        assert_eq!(Term::literal("say \"hi\"\n").to_string(), r#""say \"hi\"\n""#);
    }

    #[test]
    fn test_parse_literal_with_escapes() {
        let term = Term::parse(r#""a\"b\\c\tdé""#).unwrap();
        assert_eq!(term, Term::literal("a\"b\\c\td\u{e9}"));
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(Term::parse("_:0f3a").unwrap(), Term::blank("0f3a"));
        assert!(Term::parse("_:").is_err());
        assert!(Term::parse("_:a b").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_literals() {
        assert!(Term::parse("\"").is_err());
        assert!(Term::parse("\"abc").is_err());
        assert!(Term::parse(r#""a"b""#).is_err());
        assert!(Term::parse(r#""\q""#).is_err());
        assert!(Term::parse("bare").is_err());
    }

    #[test]
    fn test_control_characters_survive_text_form() {
        let term = Term::literal("bell\u{7}");
        assert_eq!(term.to_string(), "\"bell\\u0007\"");
        assert_eq!(Term::parse(&term.to_string()).unwrap(), term);
    }

    #[test]
    fn test_blank_sorts_before_literal() {
        let mut terms = vec![Term::literal("a"), Term::blank("z"), Term::literal("0")];
        terms.sort();
        assert_eq!(
            terms,
            vec![Term::blank("z"), Term::literal("0"), Term::literal("a")]
        );
    }
}
