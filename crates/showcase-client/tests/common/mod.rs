//! Local stand-in for the hosted document store.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};

/// Bin id served by [`TestStore`].
pub const BIN_ID: &str = "test-bin";

/// Key the store expects when started with [`TestStore::with_key`].
pub const MASTER_KEY: &str = "test-master-key";

struct StoreState {
    document: Value,
    key: Option<String>,
    hits: AtomicUsize,
}

/// A document store listening on an ephemeral loopback port.
pub struct TestStore {
    /// Base URL to put in `StoreConfig::base_url`
    pub base_url: String,
    state: Arc<StoreState>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestStore {
    /// Store serving `document` to anyone.
    pub async fn open(document: Value) -> Self {
        Self::spawn(document, None).await
    }

    /// Store serving `document` only with [`MASTER_KEY`].
    pub async fn with_key(document: Value) -> Self {
        Self::spawn(document, Some(MASTER_KEY.to_string())).await
    }

    async fn spawn(document: Value, key: Option<String>) -> Self {
        let state = Arc::new(StoreState {
            document,
            key,
            hits: AtomicUsize::new(0),
        });
        let app = Router::new()
            .route("/b/{bin}", get(serve_bin))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/b"),
            state,
            handle,
        }
    }

    /// Number of requests that reached the bin route.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

impl Drop for TestStore {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_bin(
    State(state): State<Arc<StoreState>>,
    Path(bin): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if bin != BIN_ID {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "Bin not found"}))).into_response();
    }

    if let Some(expected) = &state.key {
        let presented = headers
            .get("X-Master-Key")
            .and_then(|v| v.to_str().ok());
        if presented != Some(expected.as_str()) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Invalid X-Master-Key"})),
            )
                .into_response();
        }
    }

    Json(state.document.clone()).into_response()
}

/// A two-project document in the store's envelope.
pub fn sample_document() -> Value {
    json!({
        "record": {
            "products": [
                {
                    "id": 1,
                    "name": "Recipe Finder",
                    "price": 0,
                    "description": "Search recipes by ingredient",
                    "images": ["https://img.test/r1.png", "https://img.test/r2.png"],
                    "category": "unisex",
                    "link": "https://recipes.test",
                    "rating": 5,
                    "date": "March 2025"
                },
                {
                    "id": "42",
                    "name": "Chat App",
                    "price": 10,
                    "description": "Realtime chat",
                    "images": ["https://img.test/c1.png"]
                }
            ]
        },
        "metadata": { "id": BIN_ID, "private": true }
    })
}
