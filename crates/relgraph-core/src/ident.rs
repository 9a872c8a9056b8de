//! Identifiers spliced into Cypher text.
//!
//! Labels, relationship types, and property names cannot be bound as query
//! parameters, so they are interpolated. Only values that pass [`Identifier::parse`]
//! ever reach a query string.

use std::fmt;

use crate::error::RelgraphError;

const MAX_LEN: usize = 64;

/// What an identifier names in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    Label,
    RelationshipType,
    Property,
}

impl fmt::Display for IdentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Label => "label",
            Self::RelationshipType => "relationship type",
            Self::Property => "property name",
        };
        f.write_str(s)
    }
}

/// A label, relationship type, or property name matching `[A-Za-z_][A-Za-z0-9_]*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `value` as an identifier of the given kind.
    pub fn parse(kind: IdentKind, value: &str) -> Result<Self, RelgraphError> {
        if is_identifier(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(RelgraphError::InvalidIdentifier {
                kind,
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Backtick-quoted form for use in Cypher text.
    pub fn quoted(&self) -> String {
        format!("`{}`", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    value.len() <= MAX_LEN
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
