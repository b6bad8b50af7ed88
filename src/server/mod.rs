//! HTTP front end: a thin transport layer over the normalization pipeline
//! and the classifier collaborator. Exposes `POST /predict` for encoded
//! payloads and `GET /health` for liveness probes. All per-request state is
//! local; independent requests run the pipeline concurrently.
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::classify_data_url;
use crate::core::params::NormalizeParams;
use crate::infer::Classifier;
use crate::types::Prediction;

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub params: NormalizeParams,
    pub default_top: usize,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        params: NormalizeParams,
        default_top: usize,
    ) -> Self {
        Self {
            classifier,
            params,
            default_top,
            started_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// `data:image/<format>;base64,<payload>`
    pub image: String,
    /// Number of ranked predictions to return; server default when omitted
    #[serde(default)]
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<Prediction>,
    /// Shape of the normalized matrix handed to the model
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub uptime_seconds: i64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/predict", post(predict_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("digitd listening on {}", addr);
    axum::serve(listener, app).await
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.classifier.name().to_string(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}

/// POST /predict - classify one encoded digit image.
///
/// Client-input failures (bad payload, blank canvas) map to 400; invariant
/// violations and engine failures map to 500. Nothing is retried: every
/// stage is deterministic, so a failing request cannot succeed without
/// different input.
async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    let top = request.top.unwrap_or(state.default_top);

    match classify_data_url(
        &request.image,
        &state.params,
        state.classifier.as_ref(),
        top,
    ) {
        Ok((predictions, normalized)) => {
            info!(
                "Classified {}x{} payload, top class {:?}",
                normalized.source_rows,
                normalized.source_cols,
                predictions.first().map(|p| p.class)
            );
            Ok(Json(PredictResponse {
                predictions,
                width: normalized.pixels.ncols(),
                height: normalized.pixels.nrows(),
            }))
        }
        Err(e) if e.is_client_input() => {
            warn!("Rejected payload: {}", e);
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            warn!("Classification failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
