//! Stub search backend for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use search_view::ViewConfig;
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(StatusCode),
    Garbage,
    Slow(Duration, Value),
}

#[derive(Clone)]
pub struct Backend {
    pub url: String,
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<Value>>>,
    reply: Arc<Mutex<Reply>>,
}

impl Backend {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn config(&self) -> ViewConfig {
        ViewConfig::new(&self.url).unwrap()
    }
}

async fn handle(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    backend.bodies.lock().unwrap().push(body);
    let reply = backend.reply.lock().unwrap().clone();
    match reply {
        Reply::Json(value) => Json(value).into_response(),
        Reply::Status(status) => (status, Json(json!({"error": "Query is required"}))).into_response(),
        Reply::Garbage => (
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            "{not json",
        )
            .into_response(),
        Reply::Slow(delay, value) => {
            tokio::time::sleep(delay).await;
            Json(value).into_response()
        }
    }
}

/// Start a backend on an ephemeral loopback port answering `POST /search`.
pub async fn spawn_backend(reply: Reply) -> Backend {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let backend = Backend {
        url: format!("http://{addr}/search"),
        hits: Arc::new(AtomicUsize::new(0)),
        bodies: Arc::new(Mutex::new(Vec::new())),
        reply: Arc::new(Mutex::new(reply)),
    };
    let app = Router::new()
        .route("/search", post(handle))
        .with_state(backend.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    backend
}

/// A loopback URL nothing is listening on.
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/search")
}

pub fn three_matches() -> Value {
    json!({
        "query": "who is scooby",
        "best_match": "Scooby-Doo is a Great Dane.",
        "score": 0.873,
        "top_matches": [
            {"text": "Scooby-Doo is a Great Dane.", "score": 0.873},
            {"text": "Shaggy is Scooby's best friend.", "score": 0.412},
            {"text": "The gang drives the Mystery Machine.", "score": 0.05}
        ]
    })
}

pub fn single_match() -> Value {
    json!({
        "best_match": "Velma always finds her glasses.",
        "score": 0.6,
        "top_matches": [{"text": "Velma always finds her glasses.", "score": 0.6}]
    })
}
