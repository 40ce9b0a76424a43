use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod service;
pub mod store;
pub mod utils;

pub use config::Config;
pub use service::RecordService;
pub use store::{FileStore, InMemoryStore, LogStore};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub service: RecordService,
    pub cfg: Config,
}

impl AppState {
    pub fn new(db: Arc<dyn LogStore>, cfg: Config) -> Self {
        Self {
            service: RecordService::new(db),
            cfg,
        }
    }
}

pub fn app_builder(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.cfg.static_dir);

    Router::new()
        .route("/api/record", post(routes::create_record))
        .route("/api/records", get(routes::list_today))
        .route("/api/records/:date", get(routes::list_by_date))
        .nest_service("/static", static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors::cors))
}
