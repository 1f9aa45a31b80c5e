use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Path as AxumPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use nlp_text::{Analyzer, EnglishAnalyzer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::trace::TraceLayer;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod telemetry;

pub use config::{ConfigError, ServiceConfig, DEFAULT_MAX_BODY_BYTES};
pub use telemetry::{NoopTelemetry, Operation, PrometheusTelemetry, Telemetry};

#[derive(Clone)]
struct AppState {
    analyzer: Arc<EnglishAnalyzer>,
    telemetry: Arc<dyn Telemetry>,
    max_body_bytes: usize,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("error reading request body: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyBody | ApiError::BodyTooLarge { .. } | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        };
        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokensResponse {
    pub tokens: Vec<String>,
}

/// Router with Prometheus call counters, or no counters if the recorder is
/// unavailable. Fails if the configured stop word file cannot be read.
pub fn build_router(config: &ServiceConfig) -> Result<Router, ConfigError> {
    let telemetry: Arc<dyn Telemetry> = match PrometheusTelemetry::global() {
        Some(prometheus) => Arc::new(prometheus),
        None => Arc::new(NoopTelemetry),
    };
    build_router_with_telemetry(config, telemetry)
}

pub fn build_router_with_telemetry(
    config: &ServiceConfig,
    telemetry: Arc<dyn Telemetry>,
) -> Result<Router, ConfigError> {
    let state = AppState {
        analyzer: Arc::new(config.build_analyzer()?),
        telemetry,
        max_body_bytes: config.max_body_bytes,
    };

    let router = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .route("/tokenize", post(tokenize))
        .route("/analyze", post(analyze))
        .route("/stem/:word", get(stem_word))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    Ok(router)
}

pub async fn start_server(
    listener: TcpListener,
    config: &ServiceConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<JoinHandle<Result<(), std::io::Error>>, ConfigError> {
    let app = build_router(config)?;
    Ok(tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn render_metrics(State(state): State<AppState>) -> Response {
    match state.telemetry.render() {
        Some(body) => (StatusCode::OK, body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn read_text(body: Result<Bytes, BytesRejection>, limit: usize) -> Result<String, ApiError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::BodyTooLarge { limit }
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    })?;
    if body.is_empty() {
        return Err(ApiError::EmptyBody);
    }
    Ok(String::from_utf8_lossy(&body).into_owned())
}

#[instrument(skip_all)]
async fn tokenize(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TokensResponse>, ApiError> {
    state.telemetry.record(Operation::Tokenize);
    let text = read_text(body, state.max_body_bytes)?;
    let tokens = state.analyzer.tokenize(&text);
    debug!(bytes = text.len(), tokens = tokens.len(), "tokenized request body");
    Ok(Json(TokensResponse { tokens }))
}

#[instrument(skip_all)]
async fn analyze(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TokensResponse>, ApiError> {
    state.telemetry.record(Operation::Analyze);
    let text = read_text(body, state.max_body_bytes)?;
    let tokens = state.analyzer.analyze(&text);
    debug!(bytes = text.len(), tokens = tokens.len(), "analyzed request body");
    Ok(Json(TokensResponse { tokens }))
}

#[instrument(skip(state))]
async fn stem_word(State(state): State<AppState>, AxumPath(word): AxumPath<String>) -> String {
    state.telemetry.record(Operation::Stem);
    let stem = state.analyzer.stem(&word);
    debug!(%stem, "stemmed word");
    format!("{word} -> {stem}\n")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
