//! Error types for botapi-client.

use std::{fmt, io};

use botapi_types::{ApiResponse, InvalidRequest, ResponseParameters};

// ─── ApiError ─────────────────────────────────────────────────────────────────

/// An error returned by the Bot API in an `ok: false` envelope.
///
/// # Example
/// `{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 30","parameters":{"retry_after":30}}`
/// → `ApiError { error_code: 429, description: "Too Many Requests: retry after 30", .. }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP-like status code.
    pub error_code:  i32,
    /// Human-readable description, e.g. `"Bad Request: chat not found"`.
    pub description: String,
    pub parameters:  Option<ResponseParameters>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bot API {}: {}", self.error_code, self.description)?;
        if let Some(secs) = self.retry_after() {
            write!(f, " (retry after {secs}s)")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Build from a failed envelope. Missing fields fall back to `0` / `""`.
    pub fn from_response<T>(resp: ApiResponse<T>) -> Self {
        Self {
            error_code:  resp.error_code.unwrap_or_default(),
            description: resp.description.unwrap_or_default(),
            parameters:  resp.parameters,
        }
    }

    /// Match on the description, with optional wildcard prefix/suffix `'*'`.
    ///
    /// # Examples
    /// - `err.is("Forbidden: bot was blocked by the user")`: exact match
    /// - `err.is("Bad Request: *")`: starts-with match
    /// - `err.is("*chat not found")`: ends-with match
    pub fn is(&self, pattern: &str) -> bool {
        if let Some(prefix) = pattern.strip_suffix('*') {
            self.description.starts_with(prefix)
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            self.description.ends_with(suffix)
        } else {
            self.description == pattern
        }
    }

    /// Seconds to wait before repeating the request, for flood-limit errors.
    pub fn retry_after(&self) -> Option<u32> {
        self.parameters.and_then(|p| p.retry_after)
    }

    /// The supergroup a group was migrated to.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.and_then(|p| p.migrate_to_chat_id)
    }
}

// ─── InvocationError ──────────────────────────────────────────────────────────

/// The error type returned from any call that talks to the Bot API.
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    /// The Bot API rejected the request.
    #[error("{0}")]
    Api(ApiError),
    /// Transport failure such as a refused connection, a timeout or an unreadable body.
    ///
    /// The request URL embeds the bot token, so it is stripped from the error.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
    /// The request could not be encoded or the `result` could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The request failed local checks; nothing was sent.
    #[error("{0}")]
    InvalidRequest(#[from] InvalidRequest),
    /// The cancellation token fired before the call completed.
    #[error("request cancelled")]
    Cancelled,
    /// The response body was not a Bot API envelope.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// Local I/O, e.g. building the runtime of the blocking client.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<ApiError> for InvocationError {
    fn from(e: ApiError) -> Self { Self::Api(e) }
}

impl From<reqwest::Error> for InvocationError {
    fn from(e: reqwest::Error) -> Self { Self::Http(e.without_url()) }
}

impl InvocationError {
    /// Returns `true` if this is an API error whose description matches (supports `'*'` wildcards).
    pub fn is(&self, pattern: &str) -> bool {
        match self {
            Self::Api(e) => e.is(pattern),
            _            => false,
        }
    }

    /// The remote error code, for API errors.
    pub fn error_code(&self) -> Option<i32> {
        match self {
            Self::Api(e) => Some(e.error_code),
            _            => None,
        }
    }

    /// If this is a flood-limit error, how many seconds to wait.
    pub fn retry_after(&self) -> Option<u32> {
        match self {
            Self::Api(e) => e.retry_after(),
            _            => None,
        }
    }

    /// `true` for errors that will not go away by repeating the same call:
    /// an invalid token, a bot that was kicked, a malformed request.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Api(e) => matches!(e.error_code, 401 | 403 | 404),
            Self::InvalidRequest(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(code: i32, description: &str, retry_after: Option<u32>) -> ApiError {
        ApiError {
            error_code: code,
            description: description.into(),
            parameters: retry_after.map(|s| ResponseParameters { retry_after: Some(s), ..Default::default() }),
        }
    }

    #[test]
    fn wildcard_matching() {
        let e = api(400, "Bad Request: chat not found", None);
        assert!(e.is("Bad Request: chat not found"));
        assert!(e.is("Bad Request: *"));
        assert!(e.is("*chat not found"));
        assert!(!e.is("Forbidden: *"));
    }

    #[test]
    fn display_includes_retry_hint() {
        let e = api(429, "Too Many Requests: retry after 7", Some(7));
        assert_eq!(e.to_string(), "Bot API 429: Too Many Requests: retry after 7 (retry after 7s)");
        assert_eq!(InvocationError::Api(e).retry_after(), Some(7));
    }

    #[test]
    fn unauthorized_is_fatal() {
        assert!(InvocationError::Api(api(401, "Unauthorized", None)).is_fatal());
        assert!(!InvocationError::Api(api(429, "Too Many Requests", Some(1))).is_fatal());
        assert!(!InvocationError::Cancelled.is_fatal());
    }

    #[test]
    fn invalid_request_is_fatal() {
        let err = InvocationError::from(InvalidRequest::DuplicateUpload("image.jpg".into()));
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "two different uploads are named `image.jpg`");
    }
}
