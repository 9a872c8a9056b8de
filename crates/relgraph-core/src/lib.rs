//! relgraph-core: Shared types and error handling for the relgraph service.
//!
//! This crate provides the foundational types used by the graph client and
//! the HTTP server:
//! - Request records, one fixed shape per route
//! - Response records (nodes, relationships, snapshots)
//! - Validated identifiers for labels, relationship types, and property names
//! - Common error types

pub mod error;
pub mod ident;
pub mod types;

pub use error::RelgraphError;
pub use ident::{IdentKind, Identifier};
pub use types::{
    GraphSnapshot, MaxRelationQuery, NewRelation, NodeName, NodePair, NodeRecord, NodeRename,
    RelationEndpoints, RelationRecord, RelationUpdate,
};
