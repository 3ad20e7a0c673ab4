//! # botapi: Telegram Bot API for Rust
//!
//! Two focused sub-crates wired together here for convenience:
//!
//! | Sub-crate       | Role                                                        |
//! |-----------------|-------------------------------------------------------------|
//! | `botapi-types`  | Wire models and one request struct per Bot API method       |
//! | `botapi-client` | HTTPS transport, multipart uploads, long polling, handlers  |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use botapi::{AvailableMethodsExt, BotApiExt, Client, PollOptions, UpdateHandler, run_polling};
//! use botapi::types::{Message, methods::SendMessage};
//! use botapi::{CancellationToken, InvocationError};
//!
//! struct Echo(Client);
//!
//! #[async_trait::async_trait]
//! impl UpdateHandler for Echo {
//!     async fn on_message(&self, message: &Message) -> Result<(), InvocationError> {
//!         if let Some(text) = &message.text {
//!             self.0.invoke(&SendMessage::new(message.chat.id, text.clone())).await?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # async fn demo() -> Result<(), InvocationError> {
//! let client = Client::new("123456:ABC-DEF")?;
//! println!("running as @{}", client.get_me().await?.username.unwrap_or_default());
//! run_polling(client.clone(), &Echo(client), PollOptions::default(), CancellationToken::new()).await
//! # }
//! ```
//!
//! Request structs can also be serialized on their own, e.g. to answer a
//! webhook call with a method in the response body.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`botapi_types`]: models, enums and method request structs.
pub use botapi_types as types;

/// Re-export of [`botapi_client`] (requires `feature = "client"`).
#[cfg(feature = "client")]
pub use botapi_client as client;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use botapi_types::{ChatId, InvalidRequest, Method, Update, UpdateKind, UpdateType};

#[cfg(feature = "client")]
pub use botapi_client::{
    ApiError,
    AvailableMethodsExt,
    BotApi,
    BotApiExt,
    CancellationToken,
    Client,
    Config,
    InvocationError,
    PollOptions,
    UpdateHandler,
    UpdateStream,
    run_polling,
};
