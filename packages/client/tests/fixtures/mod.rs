//! Test fixtures: an in-process fake of the remote message store.
//!
//! Serves the same contract as the real store on `/chat`:
//! `GET` returns `{"messages": [...]}`, `POST` with a JSON body
//! `{"username", "text"}` appends a message and answers 201.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::Mutex, task::JoinHandle};

const AVATAR_COLORS: [&str; 6] = [
    "#0EA5E9", "#F97316", "#8B5CF6", "#10B981", "#EF4444", "#F59E0B",
];

#[derive(Debug)]
pub struct FakeStoreState {
    pub messages: Vec<Value>,
    pub next_id: i64,
    pub get_status: StatusCode,
    /// Raw body answered to GET instead of the message list
    pub get_body_override: Option<String>,
    pub post_status: StatusCode,
    pub posted: Vec<Value>,
    pub get_count: usize,
    pub post_count: usize,
}

impl Default for FakeStoreState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
            get_status: StatusCode::OK,
            get_body_override: None,
            post_status: StatusCode::CREATED,
            posted: Vec::new(),
            get_count: 0,
            post_count: 0,
        }
    }
}

impl FakeStoreState {
    /// Append a message as if another participant had sent it.
    pub fn push_message(&mut self, username: &str, text: &str) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        let color = AVATAR_COLORS[(id as usize) % AVATAR_COLORS.len()];
        self.messages.push(json!({
            "id": id,
            "username": username,
            "text": text,
            "timestamp": format!("2024-05-01T10:{:02}:00.123456", id % 60),
            "avatar_color": color,
        }));
        id
    }
}

pub type FakeStore = Arc<Mutex<FakeStoreState>>;

pub struct TestServer {
    addr: SocketAddr,
    pub store: FakeStore,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let store: FakeStore = Arc::new(Mutex::new(FakeStoreState::default()));
        let app = Router::new()
            .route("/chat", get(list_messages).post(create_message))
            .with_state(store.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server stopped");
        });

        Self {
            addr,
            store,
            handle,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/chat", self.addr)
    }

    pub async fn get_count(&self) -> usize {
        self.store.lock().await.get_count
    }

    pub async fn posted(&self) -> Vec<Value> {
        self.store.lock().await.posted.clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Endpoint on which nothing listens.
pub async fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}/chat")
}

/// Wait until the fake store has answered at least `count` GET requests.
pub async fn wait_for_get_count(server: &TestServer, count: usize, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if server.get_count().await >= count {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

async fn list_messages(State(store): State<FakeStore>) -> Response {
    let mut state = store.lock().await;
    state.get_count += 1;
    if let Some(body) = state.get_body_override.clone() {
        return (state.get_status, body).into_response();
    }
    (state.get_status, Json(json!({ "messages": state.messages }))).into_response()
}

async fn create_message(State(store): State<FakeStore>, Json(body): Json<Value>) -> Response {
    let mut state = store.lock().await;
    state.post_count += 1;
    state.posted.push(body.clone());
    if !state.post_status.is_success() {
        return (state.post_status, Json(json!({ "error": "store unavailable" }))).into_response();
    }
    let username = body["username"].as_str().unwrap_or_default().trim().to_string();
    let text = body["text"].as_str().unwrap_or_default().trim().to_string();
    if username.is_empty() || text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Username and text are required" })),
        )
            .into_response();
    }
    let id = state.push_message(&username, &text);
    (
        StatusCode::CREATED,
        Json(json!({ "id": id, "status": "created" })),
    )
        .into_response()
}
