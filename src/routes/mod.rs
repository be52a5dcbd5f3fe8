// src/routes/mod.rs
pub mod generate;

use axum::{
    Router,
    routing::{get, post},
};
use generate::generate_handler;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router {
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
