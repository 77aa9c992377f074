//! Statement model shared by the flatteners and the graph.
//!
//! A field hierarchy is stored as a flat set of triples:
//!
//! ```text
//! _:field <is:name> "name" .
//! _:field <is:path> "full.dotted.path.to.name" .
//! _:field <is:type> "type" .
//! _:field <has:child> _:child .
//! _:field <has:multi> _:multichild .
//! ```
//!
//! Subjects are always blank nodes whose label is a content hash of the
//! field's namespace and path, so the same field derived twice produces
//! the same subject. The text form is a subset of N-Quads: blank node
//! subjects, one of the fixed [`Predicate`] tokens, and a blank node or
//! plain string literal object.

mod error;
mod predicate;
mod statement;
mod term;

pub use error::ParseError;
pub use predicate::Predicate;
pub use statement::Statement;
pub use term::Term;
