use thiserror::Error;

use crate::ident::IdentKind;

/// Top-level error type for relgraph validation and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelgraphError {
    #[error("Invalid {kind}: {value:?} (expected [A-Za-z_][A-Za-z0-9_]*, at most 64 chars)")]
    InvalidIdentifier { kind: IdentKind, value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
