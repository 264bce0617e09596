//! In-process stand-in for the remote scan / split service.
//!
//! Serves `POST /scan` and `POST /split` on an ephemeral localhost port and
//! records every request body it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use aurasplit::domain::SplitConfig;
use aurasplit::infrastructure::HttpServiceConfig;

/// Scripted reply for one endpoint.
#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Raw(StatusCode, String),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(status, body) => (status, Json(body)).into_response(),
            Reply::Raw(status, body) => (status, body).into_response(),
        }
    }
}

struct MockState {
    scan_reply: Reply,
    split_replies: HashMap<String, Reply>,
    scan_requests: Mutex<Vec<Value>>,
    split_requests: Mutex<Vec<Value>>,
}

pub struct MockServiceBuilder {
    scan_reply: Reply,
    split_replies: HashMap<String, Reply>,
}

impl MockServiceBuilder {
    /// Scan answers with these `(name, path, size)` entries, in order.
    pub fn scan_files(mut self, files: &[(&str, &str, u64)]) -> Self {
        let files: Vec<Value> = files
            .iter()
            .map(|(name, path, size)| json!({ "name": name, "path": path, "size": size }))
            .collect();
        self.scan_reply = Reply::Json(StatusCode::OK, json!({ "files": files }));
        self
    }

    pub fn scan_reply(mut self, reply: Reply) -> Self {
        self.scan_reply = reply;
        self
    }

    pub fn split_count(mut self, path: &str, splits: u32) -> Self {
        self.split_replies.insert(
            path.to_string(),
            Reply::Json(
                StatusCode::OK,
                json!({
                    "splits": splits,
                    "message": format!("Split into {} parts", splits),
                    "files": (1..=splits).map(|i| format!("{}_part{}.mp3", path, i)).collect::<Vec<_>>(),
                }),
            ),
        );
        self
    }

    pub fn split_reply(mut self, path: &str, reply: Reply) -> Self {
        self.split_replies.insert(path.to_string(), reply);
        self
    }

    pub async fn start(self) -> MockService {
        let state = Arc::new(MockState {
            scan_reply: self.scan_reply,
            split_replies: self.split_replies,
            scan_requests: Mutex::new(Vec::new()),
            split_requests: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/scan", post(scan))
            .route("/split", post(split))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        MockService {
            addr,
            state,
            handle,
        }
    }
}

pub struct MockService {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockService {
    pub fn builder() -> MockServiceBuilder {
        MockServiceBuilder {
            scan_reply: Reply::Json(StatusCode::OK, json!({ "files": [] })),
            split_replies: HashMap::new(),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn http_config(&self) -> HttpServiceConfig {
        HttpServiceConfig::new(self.base_url()).with_timeout(10)
    }

    pub fn scan_requests(&self) -> Vec<Value> {
        self.state.scan_requests.lock().unwrap().clone()
    }

    pub fn split_requests(&self) -> Vec<Value> {
        self.state.split_requests.lock().unwrap().clone()
    }

    /// Paths in the order split requests arrived.
    pub fn split_paths(&self) -> Vec<String> {
        self.split_requests()
            .iter()
            .filter_map(|body| body["file_path"].as_str().map(str::to_string))
            .collect()
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn scan(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Reply {
    state.scan_requests.lock().unwrap().push(body);
    state.scan_reply.clone()
}

async fn split(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Reply {
    let path = body["file_path"].as_str().unwrap_or_default().to_string();
    state.split_requests.lock().unwrap().push(body);
    state.split_replies.get(&path).cloned().unwrap_or_else(|| {
        Reply::Json(StatusCode::OK, json!({ "splits": 1 }))
    })
}

/// Base URL of a localhost port with nothing listening on it.
pub fn unreachable_config() -> HttpServiceConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    HttpServiceConfig::new(format!("http://{}", addr)).with_timeout(5)
}

pub fn split_config() -> SplitConfig {
    SplitConfig::default()
}
