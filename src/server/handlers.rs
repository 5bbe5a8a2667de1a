//! Route handlers and their request/response bodies

use crate::catalog::{best_deal, Listing};
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::verifier::{VerificationResult, Verify};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "Price Comparison Dashboard";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Body of `POST /verify-link`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response from `POST /search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    /// The trimmed query
    pub query: String,
    /// Listings, verified first then by price
    pub results: Vec<Listing>,
    pub best_deal: Option<Listing>,
    pub total_results: usize,
    pub verified_results: usize,
}

/// Response from `POST /verify-link`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub url: String,
    pub verification: VerificationResult,
}

/// Response from `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// `POST /search`
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload?;
    let query = request.query.unwrap_or_default();
    let query = query.trim();
    if query.is_empty() {
        return Err(ApiError::EmptyQuery);
    }

    tracing::info!("Search requested: '{}'", query);

    let results = state.catalog().search(query).await;
    let best = best_deal(&results).cloned();
    let verified_results = results.iter().filter(|l| l.verified).count();

    Ok(Json(SearchResponse {
        success: true,
        query: query.to_string(),
        total_results: results.len(),
        verified_results,
        best_deal: best,
        results,
    }))
}

/// `POST /verify-link`
pub async fn verify_link(
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let Json(request) = payload?;
    let url = request.url.unwrap_or_default();
    let url = url.trim();
    if url.is_empty() {
        return Err(ApiError::EmptyUrl);
    }

    tracing::info!("Verification requested: {}", url);

    let verification = state.verifier().verify(url).await;

    Ok(Json(VerifyResponse {
        success: true,
        url: url.to_string(),
        verification,
    }))
}
