//! relgraph-server: HTTP CRUD service over a Neo4j property graph.
//!
//! One route table, one CORS middleware, and a graph store injected as
//! router state. Each request maps to one query in one transaction.

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::{router, AppState};
