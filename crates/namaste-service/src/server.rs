//! HTTP server implementation.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use namaste_loader::{normalize_limit, to_parameters, TerminologyStore, TranslateRequest};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::bearer_credential;
use crate::error::ApiResult;

/// Service name reported by the liveness endpoint.
pub const SERVICE_NAME: &str = "NAMASTE-terminology";

const BANNER: &str = "NAMASTE Terminology Service";

/// NAMASTE terminology HTTP server.
#[derive(Clone)]
pub struct NamasteServer {
    store: Arc<TerminologyStore>,
}

impl NamasteServer {
    /// Creates a new server with the given store.
    pub fn new(store: TerminologyStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Builds the router with every endpoint.
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(banner))
            .route("/health", get(health))
            .route("/fhir/CodeSystem/:id", get(code_system))
            .route("/fhir/ValueSet/$lookup", get(search))
            .route("/fhir/Concept/:system/:code", get(concept))
            .route("/fhir/ConceptMap/$translate", post(translate))
            .route("/fhir/icd11/lookup", get(icd11_lookup))
            .route("/fhir/Bundle", post(annotate_bundle))
            .layer(middleware::from_fn(bearer_credential))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self)
    }
}

async fn banner() -> &'static str {
    BANNER
}

async fn health() -> Json<Value> {
    Json(json!({ "service": SERVICE_NAME, "status": "ok" }))
}

/// GET /fhir/CodeSystem/:id
async fn code_system(
    State(server): State<NamasteServer>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let catalog = server.store.get_catalog(&id)?;
    Ok(Json(catalog.to_resource()).into_response())
}

/// GET /fhir/ValueSet/$lookup?filter=&_count=
async fn search(
    State(server): State<NamasteServer>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = params
        .get("filter")
        .or_else(|| params.get("query"))
        .map(String::as_str)
        .unwrap_or_default();
    let limit = normalize_limit(params.get("_count").map(String::as_str));

    Json(server.store.search(query, limit)).into_response()
}

/// GET /fhir/Concept/:system/:code
async fn concept(
    State(server): State<NamasteServer>,
    Path((system, code)): Path<(String, String)>,
) -> ApiResult<Response> {
    let concept = server.store.get_concept(&system, &code)?;
    Ok(Json(concept).into_response())
}

/// POST /fhir/ConceptMap/$translate
async fn translate(State(server): State<NamasteServer>, body: Bytes) -> ApiResult<Json<Value>> {
    // A missing or unreadable body is an empty request and fails validation
    let request: TranslateRequest = serde_json::from_slice(&body).unwrap_or_default();
    let matches = server.store.translate(&request)?;
    Ok(Json(to_parameters(&matches)))
}

/// GET /fhir/icd11/lookup?code=
async fn icd11_lookup(
    State(server): State<NamasteServer>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = params.get("code").map(String::as_str).unwrap_or_default();
    Json(server.store.icd11_lookup(query)).into_response()
}

/// POST /fhir/Bundle
async fn annotate_bundle(State(server): State<NamasteServer>, body: Bytes) -> ApiResult<Response> {
    let record: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let annotation = server.store.annotate(&record)?;
    Ok(Json(annotation).into_response())
}
