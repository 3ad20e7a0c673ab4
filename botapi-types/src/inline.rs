//! Callback queries and inline mode.

use serde::{Deserialize, Serialize};

use crate::chat::{ChatType, User};
use crate::keyboard::InlineKeyboardMarkup;
use crate::media::Location;
use crate::message::{LinkPreviewOptions, Message, MessageEntity, ParseMode};

/// A press on an inline keyboard button with `callback_data`.
///
/// The client shows a progress bar until the bot calls `answerCallbackQuery`,
/// so every callback query must be answered even when nothing is shown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id:   String,
    pub from: User,
    /// Message carrying the button. Inaccessible when `date` is `0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<Message>>,
    /// Set when the button belongs to a message sent in inline mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    /// Global identifier of the chat the message was sent to.
    pub chat_instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

/// An incoming inline query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id:     String,
    pub from:   User,
    /// Up to 256 characters.
    pub query:  String,
    /// Pagination offset, controlled by the bot.
    pub offset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<ChatType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location:  Option<Location>,
}

/// A result of an inline query that was chosen by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from:      User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location:  Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub query: String,
}

// ─── Inline results ───────────────────────────────────────────────────────────

/// One result of an inline query, discriminated by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineQueryResult {
    Article(InlineQueryResultArticle),
}

impl From<InlineQueryResultArticle> for InlineQueryResult {
    fn from(a: InlineQueryResultArticle) -> Self { Self::Article(a) }
}

/// A link to an article or web page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineQueryResultArticle {
    /// 1-64 bytes, unique per answer.
    pub id:    String,
    pub title: String,
    pub input_message_content: InputMessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:  Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url:           Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl InlineQueryResultArticle {
    pub fn new(
        id:      impl Into<String>,
        title:   impl Into<String>,
        content: impl Into<InputMessageContent>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            input_message_content: content.into(),
            reply_markup: None,
            url: None,
            description: None,
            thumbnail_url: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into()); self
    }
}

/// Content of the message sent when an inline result is chosen.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
}

impl From<InputTextMessageContent> for InputMessageContent {
    fn from(c: InputTextMessageContent) -> Self { Self::Text(c) }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    /// 1-4096 characters after entity parsing.
    pub message_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:   Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities:     Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,
}

impl InputTextMessageContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            message_text: text.into(),
            parse_mode: None,
            entities: None,
            link_preview_options: None,
        }
    }
}
