use std::fmt;

use serde::{Deserialize, Serialize};

/// Target of a chat-scoped method: a numeric chat id or a public handle.
///
/// Encodes as a JSON number for [`ChatId::Id`] and as a JSON string for
/// [`ChatId::Username`] (`"@channelusername"`).
///
/// ```rust
/// use botapi_types::ChatId;
///
/// assert_eq!(serde_json::to_string(&ChatId::from(-1001234)).unwrap(), "-1001234");
/// assert_eq!(serde_json::to_string(&ChatId::from("@news")).unwrap(), "\"@news\"");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    /// `true` for a username handle with no characters.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Id(_)       => false,
            Self::Username(s) => s.is_empty(),
        }
    }

    /// The numeric id, if this is not a handle.
    pub fn as_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Username(_) => None,
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self { Self::Id(id) }
}

impl From<&str> for ChatId {
    fn from(s: &str) -> Self { Self::Username(s.to_owned()) }
}

impl From<String> for ChatId {
    fn from(s: String) -> Self { Self::Username(s) }
}

impl From<&ChatId> for ChatId {
    fn from(c: &ChatId) -> Self { c.clone() }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id)      => write!(f, "{id}"),
            Self::Username(s) => f.write_str(s),
        }
    }
}
