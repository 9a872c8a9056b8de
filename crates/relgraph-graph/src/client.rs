//! Neo4j connection management and per-request transaction lifecycle.

use neo4rs::{ConfigBuilder, Graph, Query, Row, Txn};
use serde::Deserialize;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Configuration for connecting to Neo4j.
///
/// Loaded from the `[neo4j]` section or `RELGRAPH__NEO4J__` environment
/// variables. With authentication disabled on the server, any credentials
/// are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: String::new(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

/// Thread-safe Neo4j graph client with connection pooling.
///
/// Created once at startup and shared by every request.
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Begin a transaction.
    pub async fn start_txn(&self) -> Result<Txn, GraphError> {
        Ok(self.graph.start_txn().await?)
    }

    /// Run one query that returns nothing, in its own transaction.
    pub async fn write(&self, query: Query) -> Result<(), GraphError> {
        let mut txn = self.start_txn().await?;
        let result = txn.run(query).await.map_err(GraphError::from);
        finish(txn, result).await
    }

    /// Run one query in its own transaction and collect all rows.
    pub async fn rows(&self, query: Query) -> Result<Vec<Row>, GraphError> {
        let mut txn = self.start_txn().await?;
        let result = collect_rows(&mut txn, query).await;
        finish(txn, result).await
    }
}

/// Execute `query` inside `txn` and drain the result stream.
pub(crate) async fn collect_rows(txn: &mut Txn, query: Query) -> Result<Vec<Row>, GraphError> {
    let mut stream = txn.execute(query).await?;
    let mut rows = Vec::new();
    while let Some(row) = stream.next(txn.handle()).await? {
        rows.push(row);
    }
    Ok(rows)
}

/// Commit on success, roll back on failure. The connection goes back to the
/// pool either way.
pub(crate) async fn finish<T>(txn: Txn, result: Result<T, GraphError>) -> Result<T, GraphError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, "Rollback failed");
            }
            Err(e)
        }
    }
}
