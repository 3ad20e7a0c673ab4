//! The dispatch seam: call a Bot API method by name.
//!
//! [`BotApi`] is the one object-safe trait every transport implements.
//! [`BotApiExt`] layers typed, validated calls on top of it for any
//! implementor, including `dyn BotApi`.

use async_trait::async_trait;
use botapi_types::{Method, UploadFile};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

use crate::InvocationError;

// ─── Payload ──────────────────────────────────────────────────────────────────

/// An encoded request: the top-level JSON fields plus the files to upload.
#[derive(Debug, Default)]
pub struct Payload<'a> {
    pub params:  Map<String, Value>,
    /// Non-empty switches the transport to `multipart/form-data`.
    pub uploads: Vec<&'a UploadFile>,
}

impl<'a> Payload<'a> {
    /// Encode a request struct. Fails if it does not serialize to a JSON object.
    pub fn from_method<M: Method>(req: &'a M) -> Result<Self, InvocationError> {
        let params = match serde_json::to_value(req)? {
            Value::Object(map) => map,
            other => {
                return Err(InvocationError::Json(serde::ser::Error::custom(format!(
                    "{} must serialize to a JSON object, got {other}",
                    M::NAME
                ))));
            }
        };
        // A file referenced twice under one name travels once.
        let mut uploads: Vec<&'a UploadFile> = Vec::new();
        for file in req.uploads() {
            if !uploads.iter().any(|u| u.name == file.name) { uploads.push(file); }
        }
        Ok(Self { params, uploads })
    }

    pub fn is_multipart(&self) -> bool {
        !self.uploads.is_empty()
    }
}

// ─── BotApi ───────────────────────────────────────────────────────────────────

/// Dispatches a named method call and returns the envelope's `result`.
#[async_trait]
pub trait BotApi: Send + Sync {
    /// Call `method` with `payload`.
    ///
    /// Returns the raw `result` of an `ok: true` envelope, or
    /// [`InvocationError::Api`] for an `ok: false` one.
    async fn call_raw(&self, method: &str, payload: Payload<'_>) -> Result<Value, InvocationError>;
}

/// Typed calls for every [`BotApi`].
#[async_trait]
pub trait BotApiExt: BotApi {
    /// Validate, encode and send `req`, then decode its typed result.
    ///
    /// A request that fails [`Method::validate`] is never sent.
    async fn invoke<M: Method>(&self, req: &M) -> Result<M::Response, InvocationError> {
        req.validate()?;
        let payload = Payload::from_method(req)?;
        let result = self.call_raw(M::NAME, payload).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Like [`invoke`](Self::invoke), but gives up with
    /// [`InvocationError::Cancelled`] as soon as `cancel` fires.
    async fn invoke_with_cancel<M: Method>(
        &self,
        req:    &M,
        cancel: &CancellationToken,
    ) -> Result<M::Response, InvocationError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(InvocationError::Cancelled),
            res = self.invoke(req) => res,
        }
    }
}

impl<T: BotApi + ?Sized> BotApiExt for T {}

#[async_trait]
impl<T: BotApi + ?Sized> BotApi for std::sync::Arc<T> {
    async fn call_raw(&self, method: &str, payload: Payload<'_>) -> Result<Value, InvocationError> {
        (**self).call_raw(method, payload).await
    }
}

#[async_trait]
impl<T: BotApi + ?Sized> BotApi for &T {
    async fn call_raw(&self, method: &str, payload: Payload<'_>) -> Result<Value, InvocationError> {
        (**self).call_raw(method, payload).await
    }
}
