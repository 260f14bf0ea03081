// Stub clinic backend bound to an ephemeral port for client integration tests.
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri, header},
    response::IntoResponse,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

// Request seen by the stub: path plus JSON body.
#[derive(Clone, Debug)]
pub struct Hit {
    pub path: String,
    pub body: Value,
}

#[derive(Default)]
struct StubState {
    // Canned status and raw body per request path.
    replies: HashMap<String, (StatusCode, String)>,
    hits: Mutex<Vec<Hit>>,
}

pub struct StubBackend {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubBackend {
    pub fn hits(&self) -> Vec<Hit> {
        self.state.hits.lock().expect("hits mutex poisoned").clone()
    }
}

#[derive(Default)]
pub struct StubBuilder {
    replies: HashMap<String, (StatusCode, String)>,
}

impl StubBuilder {
    pub fn json(mut self, path: &str, status: StatusCode, body: Value) -> Self {
        self.replies
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    pub fn raw(mut self, path: &str, status: StatusCode, body: &str) -> Self {
        self.replies
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    // Serve on the current test runtime; the task ends with the test.
    pub async fn start(self) -> StubBackend {
        let state = Arc::new(StubState {
            replies: self.replies,
            hits: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(reply).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral test port");
        let addr = listener.local_addr().expect("get local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server failed");
        });

        StubBackend {
            base_url: format!("http://{addr}"),
            state,
        }
    }
}

pub fn stub() -> StubBuilder {
    StubBuilder::default()
}

async fn reply(State(state): State<Arc<StubState>>, uri: Uri, body: Bytes) -> impl IntoResponse {
    let path = uri.path().to_string();
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state
        .hits
        .lock()
        .expect("hits mutex poisoned")
        .push(Hit {
            path: path.clone(),
            body,
        });

    let (status, raw) = state
        .replies
        .get(&path)
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, String::new()));
    (status, [(header::CONTENT_TYPE, "application/json")], raw)
}
