//! Route table and shared router state.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use relgraph_core::MaxRelationQuery;
use relgraph_graph::GraphStore;

use crate::cors::cors;
use crate::error::ApiError;
use crate::handlers;

/// State handed to every handler: the injected store and the parameters of
/// the max-relationship read.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub max_relation: Arc<MaxRelationQuery>,
}

impl<S> AppState<S> {
    pub fn new(store: Arc<S>, max_relation: MaxRelationQuery) -> Self {
        Self {
            store,
            max_relation: Arc::new(max_relation),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            max_relation: Arc::clone(&self.max_relation),
        }
    }
}

pub fn router<S: GraphStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        // Nodes
        .route("/create-node", post(handlers::create_node::<S>))
        .route("/delete-node", delete(handlers::delete_node::<S>))
        .route("/delete-node-all", delete(handlers::delete_all_nodes::<S>))
        .route("/update-node", put(handlers::update_node::<S>))
        // Relationships
        .route("/create-relation", post(handlers::create_relation::<S>))
        .route("/delete-relation", delete(handlers::delete_relation::<S>))
        .route(
            "/delete-all-relationships",
            delete(handlers::delete_all_relations::<S>),
        )
        .route("/update-relationship", put(handlers::update_relation::<S>))
        // Reads
        .route(
            "/get-max-relationship-nodes",
            get(handlers::max_relationship_nodes::<S>),
        )
        .route("/get-all-data", get(handlers::all_data::<S>))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(method_not_allowed))
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Replace the router's bare 405 with the JSON error body, keeping `Allow`.
async fn method_not_allowed(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut replaced = ApiError::MethodNotAllowed { method, path }.into_response();
    if let Some(allow) = allow {
        replaced.headers_mut().insert(header::ALLOW, allow);
    }
    replaced
}
