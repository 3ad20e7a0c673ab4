//! A synchronous client for code that does not run inside an async runtime.
//!
//! Drives the same request structs as the async [`crate::Client`] on an
//! owned current-thread Tokio runtime. Calling it from inside a runtime panics.

use botapi_types::{File, Method};

use crate::{BotApiExt, Config, InvocationError};

/// Blocking wrapper around [`crate::Client`].
pub struct Client {
    inner: crate::Client,
    rt:    tokio::runtime::Runtime,
}

impl Client {
    pub fn new(token: impl Into<String>) -> Result<Self, InvocationError> {
        Self::with_config(Config::new(token))
    }

    pub fn with_config(config: Config) -> Result<Self, InvocationError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let inner = crate::Client::with_config(config)?;
        Ok(Self { inner, rt })
    }

    /// Send `req` and wait for its typed result.
    pub fn invoke<M: Method>(&self, req: &M) -> Result<M::Response, InvocationError> {
        self.rt.block_on(self.inner.invoke(req))
    }

    pub fn download_file(&self, file: &File) -> Result<Vec<u8>, InvocationError> {
        self.rt.block_on(self.inner.download_file(file))
    }

    /// The async client underneath, sharing the same connection pool.
    pub fn as_async(&self) -> &crate::Client {
        &self.inner
    }
}
