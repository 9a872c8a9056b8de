//! Data-access seam between the HTTP handlers and the graph store.

use async_trait::async_trait;

use relgraph_core::{GraphSnapshot, Identifier, MaxRelationQuery, NodePair, NodeRecord};

use crate::client::{GraphClient, GraphError};

/// Everything the HTTP layer needs from a graph store. One call is one
/// transaction.
#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn create_node(&self, name: &str) -> Result<NodeRecord, GraphError>;
    async fn delete_node(&self, name: &str) -> Result<(), GraphError>;
    async fn delete_all_nodes(&self) -> Result<(), GraphError>;
    async fn rename_node(&self, name: &str, new_name: &str) -> Result<(), GraphError>;

    async fn create_relation(
        &self,
        from: &str,
        to: &str,
        rel_type: &Identifier,
    ) -> Result<(), GraphError>;
    async fn delete_relation(&self, from: &str, to: &str) -> Result<(), GraphError>;
    async fn delete_all_relations(&self) -> Result<(), GraphError>;
    async fn update_relation(
        &self,
        from: &str,
        to: &str,
        rel_type: &Identifier,
        attribute: &Identifier,
        new_value: &str,
    ) -> Result<(), GraphError>;

    async fn max_relation_pairs(
        &self,
        params: &MaxRelationQuery,
    ) -> Result<Vec<NodePair>, GraphError>;
    async fn snapshot(&self) -> Result<GraphSnapshot, GraphError>;
}

#[async_trait]
impl GraphStore for GraphClient {
    async fn create_node(&self, name: &str) -> Result<NodeRecord, GraphError> {
        GraphClient::create_node(self, name).await
    }

    async fn delete_node(&self, name: &str) -> Result<(), GraphError> {
        GraphClient::delete_node(self, name).await
    }

    async fn delete_all_nodes(&self) -> Result<(), GraphError> {
        GraphClient::delete_all_nodes(self).await
    }

    async fn rename_node(&self, name: &str, new_name: &str) -> Result<(), GraphError> {
        GraphClient::rename_node(self, name, new_name).await
    }

    async fn create_relation(
        &self,
        from: &str,
        to: &str,
        rel_type: &Identifier,
    ) -> Result<(), GraphError> {
        GraphClient::create_relation(self, from, to, rel_type).await
    }

    async fn delete_relation(&self, from: &str, to: &str) -> Result<(), GraphError> {
        GraphClient::delete_relation(self, from, to).await
    }

    async fn delete_all_relations(&self) -> Result<(), GraphError> {
        GraphClient::delete_all_relations(self).await
    }

    async fn update_relation(
        &self,
        from: &str,
        to: &str,
        rel_type: &Identifier,
        attribute: &Identifier,
        new_value: &str,
    ) -> Result<(), GraphError> {
        GraphClient::update_relation(self, from, to, rel_type, attribute, new_value).await
    }

    async fn max_relation_pairs(
        &self,
        params: &MaxRelationQuery,
    ) -> Result<Vec<NodePair>, GraphError> {
        GraphClient::max_relation_pairs(self, params).await
    }

    async fn snapshot(&self) -> Result<GraphSnapshot, GraphError> {
        GraphClient::snapshot(self).await
    }
}
