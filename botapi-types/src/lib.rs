//! Telegram Bot API types and method requests.
//!
//! Every struct in this crate mirrors one object of the
//! [Bot API](https://core.telegram.org/bots/api) JSON schema field-for-field.
//!
//! # Overview
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`chat`]      | Users, chats, members, permissions, invite links             |
//! | [`message`]   | Messages, entities, parse modes, reply parameters            |
//! | [`media`]     | Photos, videos, documents, stickers, locations, files        |
//! | [`input`]     | Outgoing files and media: [`InputFile`], [`InputMedia`]      |
//! | [`keyboard`]  | Inline and reply keyboards                                   |
//! | [`commands`]  | Bot commands, command scopes, names, descriptions, menus     |
//! | [`passport`]  | Telegram Passport data and element errors                    |
//! | [`inline`]    | Callback queries, inline queries and inline results          |
//! | [`update`]    | Incoming [`Update`]s and webhook info                        |
//! | [`methods`]   | One request struct per remote method, implementing [`Method`] |
//!
//! # Building a request
//!
//! ```rust
//! use botapi_types::{Method, methods::SetChatTitle};
//!
//! let req = SetChatTitle::new("@my_channel", "Release notes");
//! assert_eq!(SetChatTitle::NAME, "setChatTitle");
//! assert!(req.validate().is_ok());
//!
//! let body = serde_json::to_value(&req).unwrap();
//! assert_eq!(body["chat_id"], "@my_channel");
//! ```

#![deny(unsafe_code)]

mod chat_id;
mod serde_util;

pub mod chat;
pub mod commands;
pub mod inline;
pub mod input;
pub mod keyboard;
pub mod media;
pub mod message;
pub mod methods;
pub mod passport;
pub mod response;
pub mod update;

pub use chat::*;
pub use chat_id::ChatId;
pub use commands::*;
pub use inline::*;
pub use input::*;
pub use keyboard::*;
pub use media::*;
pub use message::*;
pub use passport::*;
pub use response::{ApiResponse, ResponseParameters};
pub use update::*;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

// ─── Core traits ──────────────────────────────────────────────────────────────

/// Marks a request struct that can be sent to the Bot API.
///
/// `Response` is the type the `result` field of a successful envelope
/// deserializes into.
pub trait Method: Serialize + Send + Sync {
    /// Remote method name, exactly as it appears in the request URL.
    const NAME: &'static str;

    /// The deserialized `result` type.
    type Response: DeserializeOwned + Send;

    /// Checks that every required parameter carries a value and that
    /// uploads don't share an attach name.
    fn validate(&self) -> Result<(), InvalidRequest> {
        Ok(())
    }

    /// Files that must be uploaded alongside this request.
    ///
    /// A non-empty list switches the transport to `multipart/form-data`.
    fn uploads(&self) -> Vec<&UploadFile> {
        Vec::new()
    }
}

/// Why a request was rejected before it was sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidRequest {
    /// A required parameter was empty.
    MissingParameter(&'static str),
    /// Two different uploads carry the same file name, and with it the same
    /// `attach://` reference.
    DuplicateUpload(String),
}

impl fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter(name) => write!(f, "required parameter `{name}` is missing or empty"),
            Self::DuplicateUpload(name)  => write!(f, "two different uploads are named `{name}`"),
        }
    }
}

impl std::error::Error for InvalidRequest {}
