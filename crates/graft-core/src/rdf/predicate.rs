//! The fixed predicate vocabulary.

use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// Predicate tokens used by the field graph.
///
/// `IsType` declares the storage type of a taxonomy node, `AsType` the
/// type an authored field is used as. Graft searches seed on `IsType`
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Predicate {
    /// Last path segment of a node.
    IsName,
    /// Full dotted path of a node.
    IsPath,
    /// Declared type of a taxonomy node.
    IsType,
    /// Declared type of an authored node.
    AsType,
    /// Authored node is published by its package.
    IsPublished,
    /// Authored field is typed by an external definition.
    ExternalType,
    /// Parent to child edge.
    HasChild,
    /// Field to alternate index sub-field edge.
    HasMulti,
}

impl Predicate {
    /// Every predicate, in declaration order.
    pub const ALL: [Predicate; 8] = [
        Predicate::IsName,
        Predicate::IsPath,
        Predicate::IsType,
        Predicate::AsType,
        Predicate::IsPublished,
        Predicate::ExternalType,
        Predicate::HasChild,
        Predicate::HasMulti,
    ];

    /// The bare token, without angle brackets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsName => "is:name",
            Self::IsPath => "is:path",
            Self::IsType => "is:type",
            Self::AsType => "as:type",
            Self::IsPublished => "is:published",
            Self::ExternalType => "external:type",
            Self::HasChild => "has:child",
            Self::HasMulti => "has:multi",
        }
    }

    /// Whether the object of this predicate is a node rather than a literal.
    pub fn is_edge(&self) -> bool {
        matches!(self, Self::HasChild | Self::HasMulti)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl FromStr for Predicate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .ok_or_else(|| ParseError::Predicate(s.to_string()))?;

        Predicate::ALL
            .into_iter()
            .find(|p| p.as_str() == token)
            .ok_or_else(|| ParseError::Predicate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_round_trips_through_text() {
        for p in Predicate::ALL {
            assert_eq!(p.to_string().parse::<Predicate>(), Ok(p));
        }
    }

    #[test]
    fn test_unknown_predicate() {
        assert!("<is:colour>".parse::<Predicate>().is_err());
        assert!("is:name".parse::<Predicate>().is_err());
    }

    #[test]
    fn test_edges() {
        assert!(Predicate::HasChild.is_edge());
        assert!(Predicate::HasMulti.is_edge());
        assert!(!Predicate::IsName.is_edge());
    }
}
