//! In-process mock of the server's REST API.
//!
//! Binds an axum router on an ephemeral port, records every request and
//! answers from a table of canned responses keyed by method and path.

#![allow(dead_code)]

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct Canned {
    method: Method,
    path: String,
    status: StatusCode,
    body: String,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<Vec<Canned>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockServer {
    pub base_url: String,
    state: MockState,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Reply to `method path` with a JSON body.
    pub fn respond_json(&self, method: Method, path: &str, status: StatusCode, body: Value) {
        self.respond_raw(method, path, status, body.to_string());
    }

    /// Reply to `method path` with an arbitrary body.
    pub fn respond_raw(&self, method: Method, path: &str, status: StatusCode, body: impl Into<String>) {
        self.state.routes.lock().unwrap().push(Canned {
            method,
            path: path.to_string(),
            status,
            body: body.into(),
        });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let body = if body.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&body).expect("client sent invalid JSON"))
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });

    let canned = state
        .routes
        .lock()
        .unwrap()
        .iter()
        .find(|c| c.method == method && c.path == path)
        .cloned();

    match canned {
        Some(c) => (
            c.status,
            [(header::CONTENT_TYPE, "application/json")],
            c.body,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, format!("no mock for {method} {path}")).into_response(),
    }
}

pub fn kb_json(id: &str, name: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": null,
        "config": {
            "embedding_provider": "fastembed",
            "embedding_model": "BAAI/bge-small-en-v1.5",
            "vector_dimensions": 384,
            "file_processor": "local",
            "chunk_strategy": "recursive"
        },
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    })
}

pub fn document_json(id: &str, kb_id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "kb_id": kb_id,
        "filename": "guide.md",
        "file_path": "/data/guide.md",
        "mime_type": "text/markdown",
        "chunk_count": 12,
        "status": "completed",
        "error_message": null,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    })
}
