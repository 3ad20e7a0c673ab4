use serde::Serialize;

use crate::inline::InlineQueryResult;

/// Send results for an inline query. At most 50 results per answer.
///
/// An empty `results` list is valid and shows nothing to the user.
#[derive(Clone, Debug, Serialize)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    pub results:         Vec<InlineQueryResult>,
    /// Seconds the result may be cached on the server. Defaults to 300.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time:  Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_personal: Option<bool>,
    /// Passed back as `offset` when the user scrolls to the end. At most 64 bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,
}

bot_method!(AnswerInlineQuery: "answerInlineQuery" -> bool, required(inline_query_id));

impl AnswerInlineQuery {
    pub fn new(inline_query_id: impl Into<String>, results: Vec<InlineQueryResult>) -> Self {
        Self {
            inline_query_id: inline_query_id.into(),
            results,
            cache_time: None,
            is_personal: None,
            next_offset: None,
        }
    }
}
