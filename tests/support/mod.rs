//! A local stand-in for the remote recipe store.
//!
//! Implements the REST contract on top of a `Vec` so the HTTP store, the engine and
//! the binary can be exercised end to end.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use recipebook::model::{Record, RecordId, RecordPayload};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct RecipeServer {
    records: Arc<Mutex<Vec<Record>>>,
    next_id: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

pub fn soup_and_salad() -> Vec<Record> {
    vec![
        Record::new("Soup", "Carrot, Water").with_id("1"),
        Record::new("Salad", "Lettuce, Tomato").with_id("2"),
    ]
}

impl RecipeServer {
    pub fn with_records(records: Vec<Record>) -> Self {
        let server = Self::default();
        *server.records.lock().unwrap() = records;
        server
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    /// Answer every request with 500 while set.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api", get(list).post(create))
            .route("/api/:id", put(update).delete(remove))
            .with_state(self.clone())
    }

    /// Serve on the current runtime; returns the collection URL.
    pub async fn start(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    /// Serve from a background thread, for tests that are not async themselves.
    pub fn spawn(&self) -> String {
        let app = self.router();
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });
        let addr = rx.recv().unwrap();
        format!("http://{addr}/api")
    }

    fn check(&self) -> Result<(), StatusCode> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Ok(())
    }
}

async fn list(State(server): State<RecipeServer>) -> Result<Json<Vec<Record>>, StatusCode> {
    server.check()?;
    Ok(Json(server.records()))
}

async fn create(
    State(server): State<RecipeServer>,
    Json(payload): Json<RecordPayload>,
) -> Result<Json<Record>, StatusCode> {
    server.check()?;
    let n = server.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let record = payload.into_record(RecordId::new(format!("srv-{n}")));
    server.records.lock().unwrap().push(record.clone());
    Ok(Json(record))
}

async fn update(
    State(server): State<RecipeServer>,
    Path(id): Path<String>,
    Json(payload): Json<RecordPayload>,
) -> Result<Json<Record>, StatusCode> {
    server.check()?;
    let id = RecordId::new(id);
    let mut records = server.records.lock().unwrap();
    let slot = records
        .iter_mut()
        .find(|r| r.has_id(&id))
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = payload.into_record(id);
    Ok(Json(slot.clone()))
}

async fn remove(State(server): State<RecipeServer>, Path(id): Path<String>) -> StatusCode {
    if server.check().is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    let id = RecordId::new(id);
    let mut records = server.records.lock().unwrap();
    let before = records.len();
    records.retain(|r| !r.has_id(&id));
    if records.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}
