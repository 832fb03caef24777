//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use classification::{Classifier, CompletionProvider, GroqCompletion};

use crate::config::Config;
use crate::server::routes::{classify_file_handler, classify_text_handler, health_handler};

/// Shared application state
///
/// The classifier is the only process-wide state: built once at startup
/// around the immutable credential and model identifier, read-only after.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self {
            classifier: Arc::new(Classifier::new(completion)),
        }
    }
}

/// Build the Axum application router for the given configuration.
pub fn build_app(config: &Config) -> Router {
    let completion = GroqCompletion::new(config.groq_api_key.clone(), config.groq_model.clone());
    router(AppState::new(Arc::new(completion)))
}

/// Build the router around existing state.
///
/// Separated from [`build_app`] so tests can inject a mock completion
/// provider instead of the Groq client.
pub fn router(state: AppState) -> Router {
    // CORS: the web frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/classify-text", post(classify_text_handler))
        .route("/classify-file", post(classify_file_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
