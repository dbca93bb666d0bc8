//! Shared test helpers: an in-process mock item server

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use item_sync_provider::RestItemResource;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// One request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct MockStore {
    pub items: Vec<(i64, String)>,
    pub next_id: i64,
    pub requests: Vec<RecordedRequest>,
    /// If Some, every request answers with this status and body
    pub forced_response: Option<(u16, String)>,
}

#[derive(Clone, Default)]
pub struct MockState {
    pub store: Arc<Mutex<MockStore>>,
}

impl MockState {
    pub fn seed(&self, items: &[(i64, &str)]) {
        let mut store = self.store.lock().expect("mock store lock");
        store.items = items.iter().map(|(id, n)| (*id, (*n).to_string())).collect();
        store.next_id = items.iter().map(|(id, _)| *id).max().unwrap_or(0) + 1;
    }

    pub fn force_response(&self, status: u16, body: &str) {
        self.store.lock().expect("mock store lock").forced_response =
            Some((status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.store.lock().expect("mock store lock").requests.clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.store
            .lock()
            .expect("mock store lock")
            .items
            .iter()
            .map(|(_, n)| n.clone())
            .collect()
    }

    fn record(&self, method: Method, path: String, headers: &HeaderMap, body: String) {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.store
            .lock()
            .expect("mock store lock")
            .requests
            .push(RecordedRequest {
                method,
                path,
                content_type,
                body,
            });
    }

    fn forced(&self) -> Option<Response> {
        let store = self.store.lock().expect("mock store lock");
        store.forced_response.as_ref().map(|(status, body)| {
            let status = StatusCode::from_u16(*status).expect("valid status");
            (status, body.clone()).into_response()
        })
    }
}

fn item_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

fn parse_name(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

async fn list_items(State(state): State<MockState>, headers: HeaderMap) -> Response {
    state.record(Method::GET, "/items".into(), &headers, String::new());
    if let Some(resp) = state.forced() {
        return resp;
    }
    let store = state.store.lock().expect("mock store lock");
    let items: Vec<Value> = store.items.iter().map(|(id, n)| item_json(*id, n)).collect();
    Json(items).into_response()
}

async fn create_item(State(state): State<MockState>, headers: HeaderMap, body: String) -> Response {
    state.record(Method::POST, "/items".into(), &headers, body.clone());
    if let Some(resp) = state.forced() {
        return resp;
    }
    let Some(name) = parse_name(&body) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut store = state.store.lock().expect("mock store lock");
    let id = store.next_id;
    store.next_id += 1;
    store.items.push((id, name.clone()));
    (StatusCode::CREATED, Json(item_json(id, &name))).into_response()
}

async fn get_item(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.record(Method::GET, format!("/items/{id}"), &headers, String::new());
    if let Some(resp) = state.forced() {
        return resp;
    }
    let store = state.store.lock().expect("mock store lock");
    match store.items.iter().find(|(i, _)| i.to_string() == id) {
        Some((i, n)) => Json(item_json(*i, n)).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn update_item(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    state.record(Method::PUT, format!("/items/{id}"), &headers, body.clone());
    if let Some(resp) = state.forced() {
        return resp;
    }
    let Some(name) = parse_name(&body) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut store = state.store.lock().expect("mock store lock");
    match store.items.iter_mut().find(|(i, _)| i.to_string() == id) {
        Some(entry) => {
            entry.1 = name;
            StatusCode::OK.into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn delete_item(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.record(Method::DELETE, format!("/items/{id}"), &headers, String::new());
    if let Some(resp) = state.forced() {
        return resp;
    }
    let mut store = state.store.lock().expect("mock store lock");
    let before = store.items.len();
    store.items.retain(|(i, _)| i.to_string() != id);
    if store.items.len() == before {
        (StatusCode::NOT_FOUND, "Not Found").into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

/// Running mock server; shuts down when dropped
pub struct MockServer {
    pub base_url: String,
    pub state: MockState,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .route("/items", get(list_items).post(create_item))
            .route(
                "/items/{id}",
                get(get_item).put(update_item).delete(delete_item),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server listener");
        let address: SocketAddr = listener.local_addr().expect("mock listener local addr");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            server.await.expect("run mock server");
        });

        Self {
            base_url: format!("http://{address}/items"),
            state,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn resource(&self) -> RestItemResource {
        RestItemResource::new(&self.base_url).expect("valid mock base url")
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
