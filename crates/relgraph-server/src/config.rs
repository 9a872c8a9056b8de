//! Configuration for the relgraph server.
//!
//! Loaded from (in priority order):
//! 1. Environment variables (`RELGRAPH__` prefix, `__` separator)
//! 2. Config file (`relgraph.toml` unless another prefix is given)
//! 3. Defaults

use serde::Deserialize;

use relgraph_core::{MaxRelationQuery, RelgraphError};
use relgraph_graph::GraphConfig;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub neo4j: GraphConfig,

    #[serde(default)]
    pub aggregate: AggregateConfig,
}

/// Listen address.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Labels and property compared by the max-relationship read.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregateConfig {
    #[serde(default = "default_source_label")]
    pub source_label: String,

    #[serde(default = "default_target_label")]
    pub target_label: String,

    #[serde(default = "default_property")]
    pub property: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_source_label() -> String {
    "Product".to_string()
}

fn default_target_label() -> String {
    "Option".to_string()
}

fn default_property() -> String {
    "value".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            source_label: default_source_label(),
            target_label: default_target_label(),
            property: default_property(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// An explicit `--bind` wins over `host` and `port`.
    pub fn resolve_bind(&self, bind_override: Option<&str>) -> String {
        bind_override.map_or_else(|| self.bind_address(), str::to_string)
    }
}

impl AggregateConfig {
    /// Validate the configured names; they are spliced into Cypher text.
    pub fn to_query(&self) -> Result<MaxRelationQuery, RelgraphError> {
        MaxRelationQuery::new(&self.source_label, &self.target_label, &self.property)
            .map_err(|e| RelgraphError::Config(format!("aggregate: {e}")))
    }
}

impl AppConfig {
    /// Load from `<file_prefix>.{toml,yaml,json}` (optional) and the environment.
    pub fn load(file_prefix: &str) -> Result<Self, config::ConfigError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("RELGRAPH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: config::Config) -> Result<Self, config::ConfigError> {
        cfg.try_deserialize()
    }
}
