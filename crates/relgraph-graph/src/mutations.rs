//! Write operations for the graph.
//!
//! Nodes carry the `Node` label and are addressed by their `name` property.
//! Every operation runs in a single transaction. Matching nothing is not an
//! error: the query simply has no effect.

use neo4rs::query;

use relgraph_core::{Identifier, NodeRecord};

use crate::client::{GraphClient, GraphError};
use crate::queries::node_record;

/// Label given to every node created through the API.
pub const NODE_LABEL: &str = "Node";

impl GraphClient {
    // ── Nodes ────────────────────────────────────────────────────

    /// Create a node with the given name and return it as stored.
    ///
    /// Duplicate names are not prevented.
    pub async fn create_node(&self, name: &str) -> Result<NodeRecord, GraphError> {
        let q = query("CREATE (n:Node {name: $name}) RETURN n").param("name", name.to_string());

        let rows = self.rows(q).await?;
        let row = rows.first().ok_or_else(|| {
            GraphError::Serialization("CREATE returned no row".to_string())
        })?;
        let node: neo4rs::Node = row
            .get("n")
            .map_err(|e| GraphError::Serialization(format!("Failed to deserialize node: {e}")))?;

        tracing::debug!(name, "Created node");
        Ok(node_record(&node))
    }

    /// Delete nodes with the given name. Fails if a matching node still has
    /// relationships.
    pub async fn delete_node(&self, name: &str) -> Result<(), GraphError> {
        let q = query("MATCH (n:Node {name: $name}) DELETE n").param("name", name.to_string());
        self.write(q).await?;
        tracing::debug!(name, "Deleted node");
        Ok(())
    }

    /// Delete every node and every relationship.
    pub async fn delete_all_nodes(&self) -> Result<(), GraphError> {
        self.write(query("MATCH (n) DETACH DELETE n")).await?;
        tracing::debug!("Deleted all nodes");
        Ok(())
    }

    /// Rename every node called `name` to `new_name`.
    pub async fn rename_node(&self, name: &str, new_name: &str) -> Result<(), GraphError> {
        let q = query("MATCH (n:Node {name: $name}) SET n.name = $new_name")
            .param("name", name.to_string())
            .param("new_name", new_name.to_string());
        self.write(q).await?;
        tracing::debug!(name, new_name, "Renamed node");
        Ok(())
    }

    // ── Relationships ────────────────────────────────────────────

    /// Create a `rel_type` edge from every node named `from` to every node
    /// named `to`. Creates nothing if either side is missing.
    pub async fn create_relation(
        &self,
        from: &str,
        to: &str,
        rel_type: &Identifier,
    ) -> Result<(), GraphError> {
        let q = query(&create_relation_cypher(rel_type))
            .param("from", from.to_string())
            .param("to", to.to_string());
        self.write(q).await?;
        tracing::debug!(from, to, rel_type = %rel_type, "Created relationship");
        Ok(())
    }

    /// Delete all edges, of any type, from `from` to `to`.
    pub async fn delete_relation(&self, from: &str, to: &str) -> Result<(), GraphError> {
        let q = query("MATCH (from:Node {name: $from})-[r]->(to:Node {name: $to}) DELETE r")
            .param("from", from.to_string())
            .param("to", to.to_string());
        self.write(q).await?;
        tracing::debug!(from, to, "Deleted relationships");
        Ok(())
    }

    /// Delete every relationship, keeping the nodes.
    pub async fn delete_all_relations(&self) -> Result<(), GraphError> {
        self.write(query("MATCH ()-[r]-() DELETE r")).await?;
        tracing::debug!("Deleted all relationships");
        Ok(())
    }

    /// Set `attribute` to `new_value` (stored as a string) on every
    /// `rel_type` edge from `from` to `to`.
    pub async fn update_relation(
        &self,
        from: &str,
        to: &str,
        rel_type: &Identifier,
        attribute: &Identifier,
        new_value: &str,
    ) -> Result<(), GraphError> {
        let q = query(&update_relation_cypher(rel_type, attribute))
            .param("from", from.to_string())
            .param("to", to.to_string())
            .param("new_value", new_value.to_string());
        self.write(q).await?;
        tracing::debug!(from, to, rel_type = %rel_type, attribute = %attribute, "Updated relationship");
        Ok(())
    }
}

// ── Cypher builders ──────────────────────────────────────────────

fn create_relation_cypher(rel_type: &Identifier) -> String {
    format!(
        "MATCH (from:{NODE_LABEL} {{name: $from}}), (to:{NODE_LABEL} {{name: $to}})
         CREATE (from)-[:{}]->(to)",
        rel_type.quoted()
    )
}

fn update_relation_cypher(rel_type: &Identifier, attribute: &Identifier) -> String {
    format!(
        "MATCH (from:{NODE_LABEL} {{name: $from}})-[r:{}]->(to:{NODE_LABEL} {{name: $to}})
         SET r.{} = $new_value",
        rel_type.quoted(),
        attribute.quoted()
    )
}
