//! One handler per route. Each parses its body, validates identifiers,
//! makes exactly one store call, and maps the outcome to a status.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use relgraph_core::{
    GraphSnapshot, NewRelation, NodeName, NodePair, NodeRecord, NodeRename, RelationEndpoints,
    RelationUpdate,
};
use relgraph_graph::GraphStore;

use crate::error::Result;
use crate::routes::AppState;

type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;

// ── Nodes ────────────────────────────────────────────────────────

pub async fn create_node<S: GraphStore>(
    State(state): State<AppState<S>>,
    body: JsonBody<NodeName>,
) -> Result<Json<NodeRecord>> {
    let Json(body) = body?;
    let node = state.store.create_node(&body.name).await?;
    Ok(Json(node))
}

pub async fn delete_node<S: GraphStore>(
    State(state): State<AppState<S>>,
    body: JsonBody<NodeName>,
) -> Result<StatusCode> {
    let Json(body) = body?;
    state.store.delete_node(&body.name).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all_nodes<S: GraphStore>(
    State(state): State<AppState<S>>,
) -> Result<StatusCode> {
    state.store.delete_all_nodes().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_node<S: GraphStore>(
    State(state): State<AppState<S>>,
    body: JsonBody<NodeRename>,
) -> Result<StatusCode> {
    let Json(body) = body?;
    state.store.rename_node(&body.name, &body.new_name).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Relationships ────────────────────────────────────────────────

pub async fn create_relation<S: GraphStore>(
    State(state): State<AppState<S>>,
    body: JsonBody<NewRelation>,
) -> Result<StatusCode> {
    let Json(body) = body?;
    let rel_type = body.relationship_type()?;
    state
        .store
        .create_relation(&body.from, &body.to, &rel_type)
        .await?;
    Ok(StatusCode::CREATED)
}

pub async fn delete_relation<S: GraphStore>(
    State(state): State<AppState<S>>,
    body: JsonBody<RelationEndpoints>,
) -> Result<StatusCode> {
    let Json(body) = body?;
    state.store.delete_relation(&body.from, &body.to).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all_relations<S: GraphStore>(
    State(state): State<AppState<S>>,
) -> Result<StatusCode> {
    state.store.delete_all_relations().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_relation<S: GraphStore>(
    State(state): State<AppState<S>>,
    body: JsonBody<RelationUpdate>,
) -> Result<StatusCode> {
    let Json(body) = body?;
    let rel_type = body.relationship_type()?;
    let attribute = body.attribute()?;
    state
        .store
        .update_relation(&body.from, &body.to, &rel_type, &attribute, &body.new_value)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Reads ────────────────────────────────────────────────────────

pub async fn max_relationship_nodes<S: GraphStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<NodePair>>> {
    let pairs = state.store.max_relation_pairs(&state.max_relation).await?;
    Ok(Json(pairs))
}

pub async fn all_data<S: GraphStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<GraphSnapshot>> {
    let snapshot = state.store.snapshot().await?;
    Ok(Json(snapshot))
}
