use std::sync::Arc;

use axum::{routing::get, Router};

use jaundice_pipeline::BatchOrchestrator;

pub mod rest;

pub struct AppState {
    pub orchestrator: BatchOrchestrator,
    pub max_urls: usize,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(rest::scan)).with_state(state)
}
