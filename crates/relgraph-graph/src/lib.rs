//! relgraph-graph: Neo4j client for the relgraph service.
//!
//! This crate is the single access point for the graph store. The HTTP layer
//! depends only on the [`GraphStore`] trait; [`GraphClient`] is its Neo4j
//! implementation.

pub mod client;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use store::GraphStore;
