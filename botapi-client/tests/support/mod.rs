//! A local stand-in for the Bot API server.
//!
//! Every request is recorded; replies are queued per method name. The last
//! queued reply for a method keeps being served once the others are used up.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use botapi_client::{Client, Config};
use serde_json::{Value, json};

pub const TOKEN: &str = "42:TEST";

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method:       String,
    pub content_type: String,
    pub body:         Vec<u8>,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn is_multipart(&self) -> bool {
        self.content_type.starts_with("multipart/form-data")
    }
}

#[derive(Clone, Debug)]
pub struct Reply {
    status: StatusCode,
    body:   Value,
    delay:  Duration,
}

impl Reply {
    pub fn ok(result: Value) -> Self {
        Self { status: StatusCode::OK, body: json!({ "ok": true, "result": result }), delay: Duration::ZERO }
    }

    pub fn error(code: u16, description: &str) -> Self {
        Self {
            status: StatusCode::from_u16(code).expect("valid status"),
            body:   json!({ "ok": false, "error_code": code, "description": description }),
            delay:  Duration::ZERO,
        }
    }

    pub fn flood(retry_after: u32) -> Self {
        let mut reply = Self::error(429, &format!("Too Many Requests: retry after {retry_after}"));
        reply.body["parameters"] = json!({ "retry_after": retry_after });
        reply
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay; self
    }
}

#[derive(Default)]
struct Inner {
    replies:  HashMap<String, VecDeque<Reply>>,
    files:    HashMap<String, Vec<u8>>,
    requests: Vec<Recorded>,
}

type Shared = Arc<Mutex<Inner>>;

pub struct FakeBotApi {
    pub base: String,
    state:    Shared,
    _server:  tokio::task::JoinHandle<()>,
}

impl FakeBotApi {
    pub async fn start() -> Self {
        let state: Shared = Arc::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        wait_for_listener(addr).await;

        Self { base: format!("http://{addr}"), state, _server: server }
    }

    pub fn reply(&self, method: &str, reply: Reply) {
        self.state.lock().unwrap().replies.entry(method.to_owned()).or_default().push_back(reply);
    }

    pub fn file(&self, path: &str, data: &[u8]) {
        self.state.lock().unwrap().files.insert(path.to_owned(), data.to_vec());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_for(&self, method: &str) -> Vec<Recorded> {
        self.requests().into_iter().filter(|r| r.method == method).collect()
    }

    pub fn config(&self) -> Config {
        Config { api_base: self.base.clone(), ..Config::new(TOKEN) }
    }

    pub fn client(&self) -> Client {
        Client::with_config(self.config()).expect("client")
    }
}

async fn handle(State(state): State<Shared>, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let path = uri.path();

    if let Some(file) = path.strip_prefix(&format!("/file/bot{TOKEN}/")) {
        let data = state.lock().unwrap().files.get(file).cloned();
        return match data {
            Some(data) => data.into_response(),
            None       => StatusCode::NOT_FOUND.into_response(),
        };
    }

    let Some(method) = path.strip_prefix(&format!("/bot{TOKEN}/")) else {
        let body = json!({ "ok": false, "error_code": 401, "description": "Unauthorized" });
        return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
    };

    let reply = {
        let mut inner = state.lock().unwrap();
        inner.requests.push(Recorded {
            method:       method.to_owned(),
            content_type: headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned(),
            body: body.to_vec(),
        });
        let queued = match inner.replies.get_mut(method) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue)                    => queue.front().cloned(),
            None                           => None,
        };
        queued.unwrap_or_else(|| Reply::ok(Value::Bool(true)))
    };

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (reply.status, axum::Json(reply.body)).into_response()
}

async fn wait_for_listener(addr: std::net::SocketAddr) {
    for _ in 0..20 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

// ─── Fixtures ─────────────────────────────────────────────────────────────────

pub fn private_message(message_id: i64, text: &str) -> Value {
    json!({
        "message_id": message_id,
        "date": 1_700_000_000,
        "chat": { "id": 1001, "type": "private", "first_name": "Ada" },
        "from": { "id": 1001, "is_bot": false, "first_name": "Ada", "last_name": "L" },
        "text": text
    })
}

pub fn message_update(update_id: i64, text: &str) -> Value {
    json!({ "update_id": update_id, "message": private_message(update_id, text) })
}
