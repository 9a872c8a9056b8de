//! Request and response records for the relgraph HTTP API.
//!
//! Request records have one fixed shape per route. Every field is required,
//! unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::error::RelgraphError;
use crate::ident::{IdentKind, Identifier};

// ── Requests ──────────────────────────────────────────────────────

/// Body of create-node and delete-node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeName {
    pub name: String,
}

/// Body of update-node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeRename {
    pub name: String,
    pub new_name: String,
}

/// Body of delete-relation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationEndpoints {
    pub from: String,
    pub to: String,
}

/// Body of create-relation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRelation {
    pub from: String,
    pub to: String,
    pub relationship: String,
}

impl NewRelation {
    pub fn relationship_type(&self) -> Result<Identifier, RelgraphError> {
        Identifier::parse(IdentKind::RelationshipType, &self.relationship)
    }
}

/// Body of update-relationship.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelationUpdate {
    pub from: String,
    pub to: String,
    pub relationship: String,
    pub attribute: String,
    pub new_value: String,
}

impl RelationUpdate {
    pub fn relationship_type(&self) -> Result<Identifier, RelgraphError> {
        Identifier::parse(IdentKind::RelationshipType, &self.relationship)
    }

    pub fn attribute(&self) -> Result<Identifier, RelgraphError> {
        Identifier::parse(IdentKind::Property, &self.attribute)
    }
}

// ── Aggregation ───────────────────────────────────────────────────

/// Parameters of the max-relationship read: edges from `source_label` nodes
/// to `target_label` nodes, compared on `property`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxRelationQuery {
    pub source_label: Identifier,
    pub target_label: Identifier,
    pub property: Identifier,
}

impl MaxRelationQuery {
    pub fn new(source_label: &str, target_label: &str, property: &str) -> Result<Self, RelgraphError> {
        Ok(Self {
            source_label: Identifier::parse(IdentKind::Label, source_label)?,
            target_label: Identifier::parse(IdentKind::Label, target_label)?,
            property: Identifier::parse(IdentKind::Property, property)?,
        })
    }
}

// ── Responses ─────────────────────────────────────────────────────

/// A node as returned by the API. Internal store ids are never exposed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeRecord {
    pub labels: Vec<String>,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl NodeRecord {
    /// The node's `name` property, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(|v| v.as_str())
    }
}

/// A relationship as returned by the all-data read; endpoints are node names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationRecord {
    pub from: Option<String>,
    pub to: Option<String>,
    pub relationship: String,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// One result row of the max-relationship read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodePair {
    #[serde(rename = "nodeN")]
    pub node_n: NodeRecord,
    #[serde(rename = "nodeM")]
    pub node_m: NodeRecord,
}

/// Every node and every relationship in the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeRecord>,
    pub relationships: Vec<RelationRecord>,
}
