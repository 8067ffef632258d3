use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;

use scrub_core::{Category, Error};
use scrub_engine::Analyzer;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Upper bound on UTF-8 bytes per character, used to size the body limit
const MAX_BYTES_PER_CHAR: usize = 4;

pub struct ScrubServer {
    pub analyzer: Arc<Analyzer>,
}

#[derive(Clone)]
struct AppState {
    server: Arc<ScrubServer>,
}

#[derive(Serialize)]
struct CategoryInfo {
    category: Category,
    counter: &'static str,
    placeholder: &'static str,
}

impl ScrubServer {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }

    /// Largest request body accepted before decoding, in bytes
    pub fn body_limit(&self) -> usize {
        self.analyzer
            .limits()
            .max_chars
            .saturating_mul(MAX_BYTES_PER_CHAR)
            .max(1024)
    }

    pub fn router(self: Arc<Self>) -> Router {
        let body_limit = self.body_limit();

        // Add CORS layer to allow connections from any origin
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(handle_info))
            .route("/health", get(handle_info))
            .route("/redact", post(handle_redact))
            .route("/api/categories", get(api_categories))
            .layer(DefaultBodyLimit::max(body_limit))
            .layer(cors)
            .with_state(AppState { server: self })
    }

    pub async fn serve(analyzer: Analyzer, host: &str, port: u16) -> anyhow::Result<()> {
        let app = Arc::new(Self::new(analyzer)).router();

        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr).await?;

        info!("scrub server listening on {}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// GET handler for server info/health check
async fn handle_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "scrub",
        "version": env!("CARGO_PKG_VERSION"),
        "categories": Category::ALL.iter().map(Category::as_str).collect::<Vec<_>>(),
    }))
}

/// POST /redact - Redact a text/plain body and score it
async fn handle_redact(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            let e = Error::InputTooLarge(format!(
                "body over {} bytes",
                state.server.body_limit()
            ));
            warn!("Rejected redaction request: {}", e);
            return error_response(&e);
        }
        Err(rejection) => {
            warn!("Rejected redaction request: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(serde_json::json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    let text = String::from_utf8_lossy(&body);

    if let Err(e) = state.server.analyzer.check(&text) {
        warn!("Rejected redaction request: {}", e);
        return error_response(&e);
    }

    Json(state.server.analyzer.analyze(&text)).into_response()
}

/// GET /api/categories - Categories in detection priority order
async fn api_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        Category::ALL
            .into_iter()
            .map(|category| CategoryInfo {
                category,
                counter: category.counter_key(),
                placeholder: category.placeholder(),
            })
            .collect(),
    )
}

fn error_response(e: &Error) -> Response {
    let status = match e {
        Error::InputTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        Error::UnknownCategory(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": e.to_string() }))).into_response()
}
