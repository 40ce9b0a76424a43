mod records;

use std::path::Path;
use std::sync::Arc;

use axum::{Router, body::Body, http::Request, response::Response};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

use crate::{app_builder, config::Config, AppState, FileStore, InMemoryStore, LogStore};

fn app_with(db: Arc<dyn LogStore>) -> Router {
    app_builder(AppState::new(db, Config::default()))
}

fn memory_app() -> Router {
    app_with(Arc::new(InMemoryStore::default()))
}

fn file_app(root: &Path) -> Router {
    app_with(Arc::new(FileStore::new(root)))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
