//! HTTP transport.
//!
//! ```bash
//! signsense serve --port 5000
//!
//! curl -X POST http://localhost:5000/api/handsign \
//!   -H "Content-Type: application/json" \
//!   -d '{"landmarks": [{"x": 0.5, "y": 0.9, "name": "wrist"}, ...]}'
//! ```

use crate::api::{handle_request, is_json_content_type, parse_body, HandsignResponse};
use crate::classifier::Classifier;
use crate::config::ServerConfig;
use crate::error::SsResult;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

pub const BANNER: &str =
    "SignSense Rust API is running.\nPOST JSON with 'landmarks' to /api/handsign.";

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
}

pub fn router(classifier: Arc<Classifier>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/handsign", post(handsign))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { classifier })
}

async fn home() -> &'static str {
    BANNER
}

// Raw bytes so a wrong content type or broken JSON still gets the envelope.
// Bodies not declared as JSON are treated as empty.
async fn handsign(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<HandsignResponse> {
    let declared_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(is_json_content_type);

    let body = if declared_json {
        parse_body(&body)
    } else {
        debug!("request body is not declared as JSON");
        Value::Object(Default::default())
    };
    Json(handle_request(&state.classifier, &body))
}

pub async fn serve(config: &ServerConfig, classifier: Classifier) -> SsResult<()> {
    let addr = config.addr();
    let app = router(Arc::new(classifier));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🌐 SignSense listening on http://{}", addr);
    info!("  GET    /");
    info!("  POST   /api/handsign");

    axum::serve(listener, app).await?;
    Ok(())
}
