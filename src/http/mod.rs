use std::{path::Path, sync::Arc};

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::riot::GameDataApi;

mod summoner;

/// Shared, read-only context of every request.
#[derive(Clone, Default)]
pub struct AppState {
    /// `None` when no API key was configured at startup.
    pub riot: Option<Arc<dyn GameDataApi>>,
}

impl AppState {
    pub fn new(riot: Option<Arc<dyn GameDataApi>>) -> Self {
        Self { riot }
    }
}

/// `/summoner` plus static files from `static_dir` for everything else.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/summoner", get(summoner::get_match_history))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
