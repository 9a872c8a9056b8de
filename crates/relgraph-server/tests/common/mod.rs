//! In-memory `GraphStore` for driving the router without Neo4j.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use serde_json::{Map, Value};
use tower::ServiceExt;

use relgraph_core::{
    GraphSnapshot, Identifier, MaxRelationQuery, NodePair, NodeRecord, RelationRecord,
};
use relgraph_graph::{GraphError, GraphStore};
use relgraph_server::{router, AppState};

struct MemNode {
    name: String,
    labels: Vec<String>,
}

struct MemEdge {
    from: u64,
    to: u64,
    rel_type: String,
    properties: Map<String, Value>,
}

#[derive(Default)]
struct MemGraph {
    next_id: u64,
    nodes: BTreeMap<u64, MemNode>,
    edges: Vec<MemEdge>,
}

impl MemGraph {
    fn ids_named(&self, name: &str) -> Vec<u64> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.name == name)
            .map(|(id, _)| *id)
            .collect()
    }

    fn record(&self, id: u64) -> NodeRecord {
        let node = &self.nodes[&id];
        let mut properties = Map::new();
        properties.insert("name".to_string(), Value::from(node.name.clone()));
        NodeRecord {
            labels: node.labels.clone(),
            properties,
        }
    }
}

/// Mirrors the Neo4j semantics the handlers rely on: duplicate names are
/// allowed, zero matches are not errors, connected nodes cannot be deleted,
/// relationship properties are strings.
#[derive(Default)]
pub struct MemoryStore {
    graph: Mutex<MemGraph>,
    calls: AtomicUsize,
    failing: bool,
}

impl MemoryStore {
    /// A store whose every call fails like an unreachable server.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Number of store calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Insert a node with extra labels, bypassing the API.
    pub fn add_node(&self, name: &str, labels: &[&str]) {
        let mut graph = self.graph.lock().unwrap();
        let id = graph.next_id;
        graph.next_id += 1;
        graph.nodes.insert(
            id,
            MemNode {
                name: name.to_string(),
                labels: labels.iter().map(|l| l.to_string()).collect(),
            },
        );
    }

    fn enter(&self) -> Result<std::sync::MutexGuard<'_, MemGraph>, GraphError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(GraphError::Connection("store unavailable".to_string()));
        }
        Ok(self.graph.lock().unwrap())
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn create_node(&self, name: &str) -> Result<NodeRecord, GraphError> {
        let mut graph = self.enter()?;
        let id = graph.next_id;
        graph.next_id += 1;
        graph.nodes.insert(
            id,
            MemNode {
                name: name.to_string(),
                labels: vec!["Node".to_string()],
            },
        );
        Ok(graph.record(id))
    }

    async fn delete_node(&self, name: &str) -> Result<(), GraphError> {
        let mut graph = self.enter()?;
        let ids = graph.ids_named(name);
        // Plain DELETE refuses nodes that still have relationships.
        if graph
            .edges
            .iter()
            .any(|e| ids.contains(&e.from) || ids.contains(&e.to))
        {
            return Err(GraphError::Serialization(format!(
                "Cannot delete node {name}, because it still has relationships"
            )));
        }
        for id in ids {
            graph.nodes.remove(&id);
        }
        Ok(())
    }

    async fn delete_all_nodes(&self) -> Result<(), GraphError> {
        let mut graph = self.enter()?;
        graph.nodes.clear();
        graph.edges.clear();
        Ok(())
    }

    async fn rename_node(&self, name: &str, new_name: &str) -> Result<(), GraphError> {
        let mut graph = self.enter()?;
        for node in graph.nodes.values_mut().filter(|n| n.name == name) {
            node.name = new_name.to_string();
        }
        Ok(())
    }

    async fn create_relation(
        &self,
        from: &str,
        to: &str,
        rel_type: &Identifier,
    ) -> Result<(), GraphError> {
        let mut graph = self.enter()?;
        let sources = graph.ids_named(from);
        let targets = graph.ids_named(to);
        for &s in &sources {
            for &t in &targets {
                graph.edges.push(MemEdge {
                    from: s,
                    to: t,
                    rel_type: rel_type.to_string(),
                    properties: Map::new(),
                });
            }
        }
        Ok(())
    }

    async fn delete_relation(&self, from: &str, to: &str) -> Result<(), GraphError> {
        let mut graph = self.enter()?;
        let sources = graph.ids_named(from);
        let targets = graph.ids_named(to);
        graph
            .edges
            .retain(|e| !(sources.contains(&e.from) && targets.contains(&e.to)));
        Ok(())
    }

    async fn delete_all_relations(&self) -> Result<(), GraphError> {
        let mut graph = self.enter()?;
        graph.edges.clear();
        Ok(())
    }

    async fn update_relation(
        &self,
        from: &str,
        to: &str,
        rel_type: &Identifier,
        attribute: &Identifier,
        new_value: &str,
    ) -> Result<(), GraphError> {
        let mut graph = self.enter()?;
        let sources = graph.ids_named(from);
        let targets = graph.ids_named(to);
        for edge in graph.edges.iter_mut().filter(|e| {
            sources.contains(&e.from) && targets.contains(&e.to) && e.rel_type == rel_type.as_str()
        }) {
            edge.properties
                .insert(attribute.to_string(), Value::from(new_value.to_string()));
        }
        Ok(())
    }

    async fn max_relation_pairs(
        &self,
        params: &MaxRelationQuery,
    ) -> Result<Vec<NodePair>, GraphError> {
        let graph = self.enter()?;
        let has_label = |id: u64, label: &Identifier| {
            graph.nodes[&id]
                .labels
                .iter()
                .any(|l| l == label.as_str())
        };
        let candidates: Vec<(&MemEdge, &str)> = graph
            .edges
            .iter()
            .filter(|e| has_label(e.from, &params.source_label) && has_label(e.to, &params.target_label))
            .filter_map(|e| {
                e.properties
                    .get(params.property.as_str())
                    .and_then(Value::as_str)
                    .map(|v| (e, v))
            })
            .collect();
        let Some(max) = candidates.iter().map(|(_, v)| *v).max() else {
            return Ok(Vec::new());
        };
        Ok(candidates
            .iter()
            .filter(|(_, v)| *v == max)
            .map(|(e, _)| NodePair {
                node_n: graph.record(e.from),
                node_m: graph.record(e.to),
            })
            .collect())
    }

    async fn snapshot(&self) -> Result<GraphSnapshot, GraphError> {
        let graph = self.enter()?;
        Ok(GraphSnapshot {
            nodes: graph.nodes.keys().map(|&id| graph.record(id)).collect(),
            relationships: graph
                .edges
                .iter()
                .map(|e| RelationRecord {
                    from: Some(graph.nodes[&e.from].name.clone()),
                    to: Some(graph.nodes[&e.to].name.clone()),
                    relationship: e.rel_type.clone(),
                    properties: e.properties.clone(),
                })
                .collect(),
        })
    }
}

pub fn app(store: Arc<MemoryStore>) -> Router {
    let max_relation = MaxRelationQuery::new("Product", "Option", "value").unwrap();
    router(AppState::new(store, max_relation))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap_or_else(|err| panic!("failed to build request: {err}"));

    match app.clone().oneshot(request).await {
        Ok(response) => response,
        Err(err) => panic!("router request failed: {err}"),
    }
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    match to_bytes(response.into_body(), 1024 * 1024).await {
        Ok(bytes) => bytes.to_vec(),
        Err(err) => panic!("failed to read response body: {err}"),
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(err) => panic!("response body is not JSON: {err}"),
    }
}
