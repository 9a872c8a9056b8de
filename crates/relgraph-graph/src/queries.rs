//! Read operations and record conversion for the graph.

use neo4rs::query;
use serde_json::{Map, Value};

use relgraph_core::{GraphSnapshot, MaxRelationQuery, NodePair, NodeRecord, RelationRecord};

use crate::client::{collect_rows, finish, GraphClient, GraphError};

impl GraphClient {
    /// Find the edges from `source_label` to `target_label` nodes whose
    /// `property` equals the maximum over all such edges, and return their
    /// endpoint pairs. Empty when no edge carries the property.
    pub async fn max_relation_pairs(
        &self,
        params: &MaxRelationQuery,
    ) -> Result<Vec<NodePair>, GraphError> {
        let rows = self.rows(query(&max_relation_cypher(params))).await?;

        let mut pairs = Vec::with_capacity(rows.len());
        for row in rows {
            let n: neo4rs::Node = column(&row, "n")?;
            let m: neo4rs::Node = column(&row, "m")?;
            pairs.push(NodePair {
                node_n: node_record(&n),
                node_m: node_record(&m),
            });
        }
        Ok(pairs)
    }

    /// Every node and every relationship, read in one transaction.
    pub async fn snapshot(&self) -> Result<GraphSnapshot, GraphError> {
        let mut txn = self.start_txn().await?;
        let result = async {
            let node_rows = collect_rows(&mut txn, query("MATCH (n) RETURN n")).await?;
            let rel_rows = collect_rows(
                &mut txn,
                query(
                    "MATCH (a)-[r]->(b)
                     RETURN a.name AS from, b.name AS to, type(r) AS rel_type, r",
                ),
            )
            .await?;
            Ok::<_, GraphError>((node_rows, rel_rows))
        }
        .await;
        let (node_rows, rel_rows) = finish(txn, result).await?;

        let mut snapshot = GraphSnapshot {
            nodes: Vec::with_capacity(node_rows.len()),
            relationships: Vec::with_capacity(rel_rows.len()),
        };

        for row in node_rows {
            let node: neo4rs::Node = column(&row, "n")?;
            snapshot.nodes.push(node_record(&node));
        }

        for row in rel_rows {
            let rel: neo4rs::Relation = column(&row, "r")?;
            snapshot.relationships.push(RelationRecord {
                from: column(&row, "from")?,
                to: column(&row, "to")?,
                relationship: column(&row, "rel_type")?,
                properties: relation_properties(&rel),
            });
        }

        Ok(snapshot)
    }
}

/// Read a column, turning a missing or mistyped value into an error.
fn column<'row, T: serde::Deserialize<'row>>(
    row: &'row neo4rs::Row,
    name: &str,
) -> Result<T, GraphError> {
    row.get(name)
        .map_err(|e| GraphError::Serialization(format!("Failed to read column {name}: {e}")))
}

fn max_relation_cypher(params: &MaxRelationQuery) -> String {
    let src = params.source_label.quoted();
    let dst = params.target_label.quoted();
    let prop = params.property.quoted();
    format!(
        "MATCH (:{src})-[r]->(:{dst})
         WITH max(r.{prop}) AS max_value
         MATCH (n:{src})-[r]->(m:{dst})
         WHERE r.{prop} = max_value
         RETURN n, m"
    )
}

// ── Conversion ───────────────────────────────────────────────────

/// Read one property as JSON. Bolt types without a JSON counterpart
/// (temporal, spatial, bytes) become null.
macro_rules! property_json {
    ($entity:expr, $key:expr) => {
        if let Ok(v) = $entity.get::<String>($key) {
            Value::from(v)
        } else if let Ok(v) = $entity.get::<i64>($key) {
            Value::from(v)
        } else if let Ok(v) = $entity.get::<f64>($key) {
            Value::from(v)
        } else if let Ok(v) = $entity.get::<bool>($key) {
            Value::from(v)
        } else if let Ok(v) = $entity.get::<Vec<String>>($key) {
            Value::from(v)
        } else {
            Value::Null
        }
    };
}

/// Convert a neo4rs::Node to our NodeRecord, dropping the internal id.
pub(crate) fn node_record(node: &neo4rs::Node) -> NodeRecord {
    let mut properties = Map::new();
    for key in node.keys() {
        properties.insert(key.to_string(), property_json!(node, key));
    }

    NodeRecord {
        labels: node.labels().into_iter().map(str::to_string).collect(),
        properties,
    }
}

fn relation_properties(rel: &neo4rs::Relation) -> Map<String, Value> {
    let mut properties = Map::new();
    for key in rel.keys() {
        properties.insert(key.to_string(), property_json!(rel, key));
    }
    properties
}
