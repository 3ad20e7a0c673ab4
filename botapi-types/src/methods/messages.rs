//! Sending, forwarding, editing and deleting messages.

use serde::Serialize;

use crate::chat::ChatAction;
use crate::chat_id::ChatId;
use crate::keyboard::{InlineKeyboardMarkup, ReplyMarkup};
use crate::message::{
    LinkPreviewOptions, Message, MessageEntity, MessageId, MessageOrTrue, ParseMode,
    ReplyParameters,
};
use crate::methods::require;
use crate::{InvalidRequest, Method};

/// Send a text message.
#[derive(Clone, Debug, Serialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    /// 1-4096 characters after entity parsing.
    pub text:    String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id:    Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:           Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities:             Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters:     Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:         Option<ReplyMarkup>,
}

bot_method!(SendMessage: "sendMessage" -> Message, required(chat_id, text));

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            message_thread_id: None,
            parse_mode: None,
            entities: None,
            link_preview_options: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode); self
    }

    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_parameters = Some(ReplyParameters::new(message_id)); self
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into()); self
    }

    /// Deliver without sound.
    pub fn silent(mut self) -> Self {
        self.disable_notification = Some(true); self
    }

    pub fn no_link_preview(mut self) -> Self {
        self.link_preview_options = Some(LinkPreviewOptions::disabled()); self
    }
}

/// Forward a message of any kind. Service messages can't be forwarded.
#[derive(Clone, Debug, Serialize)]
pub struct ForwardMessage {
    pub chat_id:      ChatId,
    pub from_chat_id: ChatId,
    pub message_id:   i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id:    Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content:      Option<bool>,
}

bot_method!(ForwardMessage: "forwardMessage" -> Message, required(chat_id, from_chat_id));

impl ForwardMessage {
    pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            message_thread_id: None,
            disable_notification: None,
            protect_content: None,
        }
    }
}

/// Copy a message without a link to the original.
#[derive(Clone, Debug, Serialize)]
pub struct CopyMessage {
    pub chat_id:      ChatId,
    pub from_chat_id: ChatId,
    pub message_id:   i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    /// Replaces the original caption. Absent keeps it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:           Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:        Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities:  Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters:     Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:         Option<ReplyMarkup>,
}

bot_method!(CopyMessage: "copyMessage" -> MessageId, required(chat_id, from_chat_id));

impl CopyMessage {
    pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            message_thread_id: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            show_caption_above_media: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }
}

/// Send a point on the map.
#[derive(Clone, Debug, Serialize)]
pub struct SendLocation {
    pub chat_id:   ChatId,
    pub latitude:  f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id:      Option<i64>,
    /// Radius of uncertainty in meters, 0-1500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy:    Option<f64>,
    /// Seconds the live location is updated for, 60-86400.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period:            Option<u32>,
    /// Direction of movement in degrees, 1-360.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading:                Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification:   Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content:        Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters:       Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:           Option<ReplyMarkup>,
}

bot_method!(SendLocation: "sendLocation" -> Message, required(chat_id));

impl SendLocation {
    pub fn new(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            message_thread_id: None,
            horizontal_accuracy: None,
            live_period: None,
            heading: None,
            proximity_alert_radius: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }
}

/// Send an animated emoji that displays a random value.
#[derive(Clone, Debug, Serialize)]
pub struct SendDice {
    pub chat_id: ChatId,
    /// One of 🎲 🎯 🏀 ⚽ 🎳 🎰. Defaults to 🎲.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id:    Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters:     Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:         Option<ReplyMarkup>,
}

bot_method!(SendDice: "sendDice" -> Message, required(chat_id));

impl SendDice {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            emoji: None,
            message_thread_id: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into()); self
    }
}

/// Show a status such as "typing…" for up to five seconds.
#[derive(Clone, Debug, Serialize)]
pub struct SendChatAction {
    pub chat_id: ChatId,
    pub action:  ChatAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
}

bot_method!(SendChatAction: "sendChatAction" -> bool, required(chat_id));

impl SendChatAction {
    pub fn new(chat_id: impl Into<ChatId>, action: ChatAction) -> Self {
        Self { chat_id: chat_id.into(), action, message_thread_id: None }
    }
}

// ─── Editing ──────────────────────────────────────────────────────────────────

/// The message an edit applies to: a chat message or an inline message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum EditTarget {
    Chat { chat_id: ChatId, message_id: i64 },
    Inline { inline_message_id: String },
}

impl EditTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self::Chat { chat_id: chat_id.into(), message_id }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline { inline_message_id: inline_message_id.into() }
    }

    fn validate(&self) -> Result<(), InvalidRequest> {
        match self {
            Self::Chat { chat_id, .. } => require(chat_id, "chat_id"),
            Self::Inline { inline_message_id } => require(inline_message_id, "inline_message_id"),
        }
    }
}

/// Edit the text of a message.
#[derive(Clone, Debug, Serialize)]
pub struct EditMessageText {
    #[serde(flatten)]
    pub target: EditTarget,
    pub text:   String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:           Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities:             Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:         Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageText {
    const NAME: &'static str = "editMessageText";
    type Response = MessageOrTrue;

    fn validate(&self) -> Result<(), InvalidRequest> {
        self.target.validate()?;
        require(&self.text, "text")
    }
}

impl EditMessageText {
    pub fn new(target: EditTarget, text: impl Into<String>) -> Self {
        Self {
            target,
            text: text.into(),
            parse_mode: None,
            entities: None,
            link_preview_options: None,
            reply_markup: None,
        }
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode); self
    }

    pub fn reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(markup); self
    }
}

/// Edit the caption of a media message.
#[derive(Clone, Debug, Serialize)]
pub struct EditMessageCaption {
    #[serde(flatten)]
    pub target: EditTarget,
    /// Absent removes the caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:       Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:     Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageCaption {
    const NAME: &'static str = "editMessageCaption";
    type Response = MessageOrTrue;

    fn validate(&self) -> Result<(), InvalidRequest> {
        self.target.validate()
    }
}

impl EditMessageCaption {
    pub fn new(target: EditTarget, caption: Option<String>) -> Self {
        Self {
            target,
            caption,
            parse_mode: None,
            caption_entities: None,
            show_caption_above_media: None,
            reply_markup: None,
        }
    }
}

/// Edit only the inline keyboard of a message.
#[derive(Clone, Debug, Serialize)]
pub struct EditMessageReplyMarkup {
    #[serde(flatten)]
    pub target: EditTarget,
    /// Absent removes the keyboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageReplyMarkup {
    const NAME: &'static str = "editMessageReplyMarkup";
    type Response = MessageOrTrue;

    fn validate(&self) -> Result<(), InvalidRequest> {
        self.target.validate()
    }
}

impl EditMessageReplyMarkup {
    pub fn new(target: EditTarget, reply_markup: Option<InlineKeyboardMarkup>) -> Self {
        Self { target, reply_markup }
    }
}

// ─── Deleting ─────────────────────────────────────────────────────────────────

/// Delete a message. Messages older than 48 hours can only be deleted in some chats.
#[derive(Clone, Debug, Serialize)]
pub struct DeleteMessage {
    pub chat_id:    ChatId,
    pub message_id: i64,
}

bot_method!(DeleteMessage: "deleteMessage" -> bool, required(chat_id));

impl DeleteMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self { chat_id: chat_id.into(), message_id }
    }
}

/// Delete 1-100 messages at once. Messages that can't be found are skipped.
#[derive(Clone, Debug, Serialize)]
pub struct DeleteMessages {
    pub chat_id:     ChatId,
    pub message_ids: Vec<i64>,
}

bot_method!(DeleteMessages: "deleteMessages" -> bool, required(chat_id, message_ids));

impl DeleteMessages {
    pub fn new(chat_id: impl Into<ChatId>, message_ids: Vec<i64>) -> Self {
        Self { chat_id: chat_id.into(), message_ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_target_flattens_into_body() {
        let req = EditMessageText::new(EditTarget::chat(-100_i64, 7), "edited");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, serde_json::json!({ "chat_id": -100, "message_id": 7, "text": "edited" }));
    }

    #[test]
    fn inline_target_requires_id() {
        let req = EditMessageReplyMarkup::new(EditTarget::inline(""), None);
        assert_eq!(req.validate(), Err(InvalidRequest::MissingParameter("inline_message_id")));
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let body = serde_json::to_value(SendMessage::new("@chan", "hi")).unwrap();
        let keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["chat_id", "text"]);
    }
}
