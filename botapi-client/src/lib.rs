//! # botapi-client
//!
//! Async Telegram Bot API client over HTTPS.
//!
//! ## Features
//! - One typed call per Bot API method: build a request struct from
//!   [`botapi_types::methods`] and [`invoke`](BotApiExt::invoke) it
//! - Snake-case shortcuts for the common calls via [`AvailableMethodsExt`]
//! - JSON bodies, switching to `multipart/form-data` when a request uploads files
//! - Typed errors carrying the remote `error_code`, description and `retry_after`
//! - Cancellation of in-flight calls with a [`CancellationToken`]
//! - Long polling ([`UpdateStream`]) and a handler base ([`UpdateHandler`], [`run_polling`])
//! - A [`blocking::Client`] for synchronous callers
//! - Custom API base (local Bot API server) and the test environment
//!
//! ```rust,no_run
//! use botapi_client::{AvailableMethodsExt, Client};
//!
//! # async fn demo() -> Result<(), botapi_client::InvocationError> {
//! let client = Client::new("123456:ABC-DEF")?;
//! let me = client.get_me().await?;
//! client.send_message(-1001234567890_i64, format!("{} is online", me.first_name)).await?;
//! # Ok(()) }
//! ```

#![deny(unsafe_code)]

mod api;
mod errors;
mod ext;
mod handler;
pub mod blocking;
pub mod update;

pub use api::{BotApi, BotApiExt, Payload};
pub use errors::{ApiError, InvocationError};
pub use ext::AvailableMethodsExt;
pub use handler::{UpdateHandler, dispatch, run_polling};
pub use update::{PollOptions, UpdateStream};
pub use botapi_types as types;
pub use tokio_util::sync::CancellationToken;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use botapi_types::{ApiResponse, File};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// Default public Bot API server.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

// ─── Config ───────────────────────────────────────────────────────────────────

/// Configuration for [`Client::with_config`].
#[derive(Clone)]
pub struct Config {
    /// Bot token from @BotFather.
    pub token:            String,
    /// Scheme and host of the Bot API server, without a trailing slash.
    pub api_base:         String,
    /// Route calls to Telegram's test environment (`/bot<token>/test/<method>`).
    pub test_environment: bool,
    /// Whole-request timeout. `getUpdates` adds its long-poll timeout on top.
    pub timeout:          Duration,
    pub connect_timeout:  Duration,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into(), ..Self::default() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token:            String::new(),
            api_base:         DEFAULT_API_BASE.to_owned(),
            test_environment: false,
            timeout:          Duration::from_secs(60),
            connect_timeout:  Duration::from_secs(10),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("test_environment", &self.test_environment)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

// ─── Client ───────────────────────────────────────────────────────────────────

struct ClientInner {
    http:             reqwest::Client,
    token:            String,
    api_base:         String,
    test_environment: bool,
    timeout:          Duration,
}

/// The Bot API client. Clones share one connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_base", &self.inner.api_base)
            .field("test_environment", &self.inner.test_environment)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// A client for the public Bot API server with default timeouts.
    pub fn new(token: impl Into<String>) -> Result<Self, InvocationError> {
        Self::with_config(Config::new(token))
    }

    pub fn with_config(config: Config) -> Result<Self, InvocationError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Reuse an existing `reqwest` client (connection pool, proxy, TLS settings).
    pub fn with_http_client(config: Config, http: reqwest::Client) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http,
                token:            config.token,
                api_base:         config.api_base.trim_end_matches('/').to_owned(),
                test_environment: config.test_environment,
                timeout:          config.timeout,
            }),
        }
    }

    /// `{api_base}/bot{token}[/test]/{method}`.
    pub fn method_url(&self, method: &str) -> String {
        let test = if self.inner.test_environment { "/test" } else { "" };
        format!("{}/bot{}{test}/{method}", self.inner.api_base, self.inner.token)
    }

    /// `{api_base}/file/bot{token}[/test]/{file_path}`.
    pub fn file_url(&self, file_path: &str) -> String {
        let test = if self.inner.test_environment { "/test" } else { "" };
        format!("{}/file/bot{}{test}/{file_path}", self.inner.api_base, self.inner.token)
    }

    // ── Files ──────────────────────────────────────────────────────────────

    /// Download the content of a [`File`] returned by `getFile`.
    pub async fn download_file(&self, file: &File) -> Result<Vec<u8>, InvocationError> {
        let Some(path) = file.file_path.as_deref() else {
            return Err(InvocationError::InvalidResponse(format!(
                "file {} has no file_path; call getFile first", file.file_id
            )));
        };
        tracing::debug!("[botapi] downloading file {}", file.file_id);
        let resp = self.inner.http.get(self.file_url(path)).send().await?.error_for_status()?;
        Ok(resp.bytes().await?.to_vec())
    }

    // ── Transport ──────────────────────────────────────────────────────────

    fn request_timeout(&self, method: &str, payload: &Payload<'_>) -> Duration {
        // Long polling holds the connection open for up to `timeout` seconds.
        let poll = match method {
            "getUpdates" => payload.params.get("timeout").and_then(Value::as_u64).unwrap_or(0),
            _ => 0,
        };
        self.inner.timeout + Duration::from_secs(poll)
    }

    fn multipart_form(payload: Payload<'_>) -> Result<Form, InvocationError> {
        let mut form = Form::new();
        for (key, value) in payload.params {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            form = form.text(key, text);
        }
        for file in payload.uploads {
            let mime = mime_guess::from_path(&file.name).first_or_octet_stream();
            let part = Part::bytes(file.data.clone())
                .file_name(file.name.clone())
                .mime_str(mime.essence_str())?;
            form = form.part(file.name.clone(), part);
        }
        Ok(form)
    }
}

#[async_trait]
impl BotApi for Client {
    async fn call_raw(&self, method: &str, payload: Payload<'_>) -> Result<Value, InvocationError> {
        let url     = self.method_url(method);
        let timeout = self.request_timeout(method, &payload);
        tracing::debug!("[botapi] → {method} ({} upload(s))", payload.uploads.len());

        let req = self.inner.http.post(url).timeout(timeout);
        let req = if payload.is_multipart() {
            req.multipart(Self::multipart_form(payload)?)
        } else {
            req.json(&payload.params)
        };

        let resp   = req.send().await?;
        let status = resp.status();
        let body   = resp.bytes().await?;
        decode_envelope(status, &body)
    }
}

/// Map a response body to the `result` of an `ok: true` envelope or an error.
///
/// The body is decoded regardless of HTTP status: Telegram sends a full
/// envelope with 4xx/5xx responses too.
pub(crate) fn decode_envelope(status: reqwest::StatusCode, body: &[u8]) -> Result<Value, InvocationError> {
    let envelope: ApiResponse<Value> = match serde_json::from_slice(body) {
        Ok(e) => e,
        Err(e) => {
            let snippet: String = String::from_utf8_lossy(body).chars().take(200).collect();
            return Err(InvocationError::InvalidResponse(format!("HTTP {status}: {e}: {snippet}")));
        }
    };

    if !envelope.ok {
        let mut err = ApiError::from_response(envelope);
        if err.error_code == 0 {
            err.error_code = i32::from(status.as_u16());
        }
        tracing::debug!("[botapi] ← {err}");
        return Err(InvocationError::Api(err));
    }

    envelope.result.ok_or_else(|| {
        InvocationError::InvalidResponse(format!("HTTP {status}: ok envelope without result"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn client(test_environment: bool) -> Client {
        Client::with_http_client(
            Config {
                api_base: "http://127.0.0.1:8081/".into(),
                test_environment,
                ..Config::new("42:SECRET")
            },
            reqwest::Client::new(),
        )
    }

    #[test]
    fn urls_follow_bot_api_layout() {
        let c = client(false);
        assert_eq!(c.method_url("getMe"), "http://127.0.0.1:8081/bot42:SECRET/getMe");
        assert_eq!(c.file_url("photos/file_1.jpg"), "http://127.0.0.1:8081/file/bot42:SECRET/photos/file_1.jpg");

        let t = client(true);
        assert_eq!(t.method_url("getMe"), "http://127.0.0.1:8081/bot42:SECRET/test/getMe");
    }

    #[test]
    fn debug_never_shows_token() {
        let cfg = Config::new("42:SECRET");
        assert!(!format!("{cfg:?}").contains("SECRET"));
        assert!(!format!("{:?}", client(false)).contains("SECRET"));
    }

    #[test]
    fn envelope_error_uses_http_status_when_code_missing() {
        let err = decode_envelope(StatusCode::BAD_GATEWAY, br#"{"ok":false,"description":"upstream"}"#).unwrap_err();
        assert_eq!(err.error_code(), Some(502));
    }

    #[test]
    fn non_json_body_is_invalid_response() {
        let err = decode_envelope(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, InvocationError::InvalidResponse(_)));
    }

    #[test]
    fn long_poll_extends_timeout() {
        let c = client(false);
        let mut payload = Payload::default();
        payload.params.insert("timeout".into(), Value::from(30));
        assert_eq!(c.request_timeout("getUpdates", &payload), Duration::from_secs(90));
        assert_eq!(c.request_timeout("sendMessage", &payload), Duration::from_secs(60));
    }
}
