use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::service::{DirectoryService, DirectoryServiceError};
use super::store::DirectoryStore;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveAgentsRequest {
    pub names: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionAgentsQuery {
    #[serde(default)]
    pub closed_since: Option<NaiveDate>,
}

/// Router exposing global search and agent resolution over a directory store.
pub fn directory_router<S>(service: Arc<DirectoryService<S>>) -> Router
where
    S: DirectoryStore + 'static,
{
    Router::new()
        .route("/api/v1/search", post(search_handler::<S>))
        .route("/api/v1/agents/resolve", post(resolve_agents_handler::<S>))
        .route(
            "/api/v1/transactions/agents",
            get(transaction_agents_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn search_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Json(request): Json<SearchRequest>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    if request.limit == Some(0) {
        let payload = json!({ "error": "limit must be at least 1" });
        return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
    }

    match service.search(&request.query, request.limit) {
        Ok(results) => (StatusCode::OK, Json(json!({ "results": results }))).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn resolve_agents_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Json(request): Json<ResolveAgentsRequest>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.resolve_agents(&request.names) {
        Ok(matches) => (StatusCode::OK, Json(json!({ "matches": matches }))).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn transaction_agents_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Query(query): Query<TransactionAgentsQuery>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.transaction_agents(query.closed_since) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => service_error(error),
    }
}

fn service_error(error: DirectoryServiceError) -> Response {
    let status = match error {
        DirectoryServiceError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
