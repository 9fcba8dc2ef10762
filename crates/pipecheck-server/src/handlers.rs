//! REST API handlers for the pipecheck server

use axum::response::Json;
use axum::Form;
use serde::{Deserialize, Serialize};

use pipecheck_core::{analyze, AnalysisReport};

/// Form body of `POST /pipelines/parse`: the raw pipeline JSON document as a
/// single text field.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub pipeline: String,
}

/// Response for the parse endpoint: either the full report or an error
/// message, never a mix of both.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ParseResponse {
    Report(AnalysisReport),
    Failure { error: String },
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Analyze a pipeline description.
///
/// Always answers 200 with a well-formed body; a rejected payload becomes an
/// `{ "error": ... }` object rather than an HTTP failure.
pub async fn parse_pipeline(Form(request): Form<ParseRequest>) -> Json<ParseResponse> {
    match analyze(&request.pipeline) {
        Ok(report) => {
            tracing::debug!(
                num_nodes = report.num_nodes,
                num_edges = report.num_edges,
                is_dag = report.is_dag,
                "analyzed pipeline"
            );
            Json(ParseResponse::Report(report))
        }
        Err(e) => {
            tracing::warn!("rejected pipeline payload: {}", e);
            Json(ParseResponse::Failure {
                error: format!("failed to parse pipeline: {}", e),
            })
        }
    }
}

/// Liveness ping at the root route.
pub async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({"Ping": "Pong"}))
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
