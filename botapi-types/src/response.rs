//! The response envelope every Bot API call returns.

use serde::{Deserialize, Serialize};

/// `{ ok, result | description, error_code, parameters }`.
///
/// Telegram sends this body for both successful and failed calls, usually
/// with a matching HTTP status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result:      Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code:  Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters:  Option<ResponseParameters>,
}

/// Hints on how a failed request can be repeated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before repeating a request that hit a flood limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u32>,
}
