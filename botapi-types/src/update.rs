//! Incoming updates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chat::{ChatJoinRequest, ChatMemberUpdated};
use crate::inline::{CallbackQuery, ChosenInlineResult, InlineQuery};
use crate::message::Message;

/// An incoming event. At most one of the optional fields is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// Sequential identifier, used as the `offset` of the next `getUpdates`.
    pub update_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message:              Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message:       Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_post:         Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_channel_post:  Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_query:         Option<InlineQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<ChosenInlineResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_query:       Option<CallbackQuery>,
    /// The bot's own membership status changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_chat_member:       Option<ChatMemberUpdated>,
    /// Requires `chat_member` in `allowed_updates`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_member:          Option<ChatMemberUpdated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_join_request:    Option<ChatJoinRequest>,
}

/// The payload of an [`Update`], borrowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpdateKind<'a> {
    Message(&'a Message),
    EditedMessage(&'a Message),
    ChannelPost(&'a Message),
    EditedChannelPost(&'a Message),
    InlineQuery(&'a InlineQuery),
    ChosenInlineResult(&'a ChosenInlineResult),
    CallbackQuery(&'a CallbackQuery),
    MyChatMember(&'a ChatMemberUpdated),
    ChatMember(&'a ChatMemberUpdated),
    ChatJoinRequest(&'a ChatJoinRequest),
    /// A payload this crate does not model.
    Unknown,
}

/// Payload-free discriminator of an update, also the wire value of `allowed_updates`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    MyChatMember,
    ChatMember,
    ChatJoinRequest,
    /// Any type this crate does not model. Read-only: it has no wire name,
    /// so serializing it (e.g. in `allowed_updates`) fails and the request
    /// is never sent.
    #[serde(other, skip_serializing)]
    Unknown,
}

impl Update {
    pub fn kind(&self) -> UpdateKind<'_> {
        if let Some(m) = &self.message              { return UpdateKind::Message(m); }
        if let Some(m) = &self.edited_message       { return UpdateKind::EditedMessage(m); }
        if let Some(m) = &self.channel_post         { return UpdateKind::ChannelPost(m); }
        if let Some(m) = &self.edited_channel_post  { return UpdateKind::EditedChannelPost(m); }
        if let Some(q) = &self.inline_query         { return UpdateKind::InlineQuery(q); }
        if let Some(r) = &self.chosen_inline_result { return UpdateKind::ChosenInlineResult(r); }
        if let Some(q) = &self.callback_query       { return UpdateKind::CallbackQuery(q); }
        if let Some(c) = &self.my_chat_member       { return UpdateKind::MyChatMember(c); }
        if let Some(c) = &self.chat_member          { return UpdateKind::ChatMember(c); }
        if let Some(r) = &self.chat_join_request    { return UpdateKind::ChatJoinRequest(r); }
        UpdateKind::Unknown
    }

    pub fn update_type(&self) -> UpdateType {
        self.kind().update_type()
    }

    /// The message carried by any of the four message-bearing kinds.
    pub fn any_message(&self) -> Option<&Message> {
        match self.kind() {
            UpdateKind::Message(m)
            | UpdateKind::EditedMessage(m)
            | UpdateKind::ChannelPost(m)
            | UpdateKind::EditedChannelPost(m) => Some(m),
            _ => None,
        }
    }
}

impl UpdateKind<'_> {
    pub fn update_type(&self) -> UpdateType {
        match self {
            Self::Message(_)            => UpdateType::Message,
            Self::EditedMessage(_)      => UpdateType::EditedMessage,
            Self::ChannelPost(_)        => UpdateType::ChannelPost,
            Self::EditedChannelPost(_)  => UpdateType::EditedChannelPost,
            Self::InlineQuery(_)        => UpdateType::InlineQuery,
            Self::ChosenInlineResult(_) => UpdateType::ChosenInlineResult,
            Self::CallbackQuery(_)      => UpdateType::CallbackQuery,
            Self::MyChatMember(_)       => UpdateType::MyChatMember,
            Self::ChatMember(_)         => UpdateType::ChatMember,
            Self::ChatJoinRequest(_)    => UpdateType::ChatJoinRequest,
            Self::Unknown               => UpdateType::Unknown,
        }
    }
}

impl UpdateType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message            => "message",
            Self::EditedMessage      => "edited_message",
            Self::ChannelPost        => "channel_post",
            Self::EditedChannelPost  => "edited_channel_post",
            Self::InlineQuery        => "inline_query",
            Self::ChosenInlineResult => "chosen_inline_result",
            Self::CallbackQuery      => "callback_query",
            Self::MyChatMember       => "my_chat_member",
            Self::ChatMember         => "chat_member",
            Self::ChatJoinRequest    => "chat_join_request",
            Self::Unknown            => "unknown",
        }
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Webhook ──────────────────────────────────────────────────────────────────

/// Current webhook status, as returned by `getWebhookInfo`.
///
/// `url` is empty while the bot uses `getUpdates`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebhookInfo {
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count:   u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address:             Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_date:        Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_message:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synchronization_error_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections:        Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates:        Option<Vec<UpdateType>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_type_display_matches_wire_name() {
        for t in [UpdateType::ChatJoinRequest, UpdateType::EditedChannelPost, UpdateType::Message] {
            let wire = serde_json::to_value(t).unwrap();
            assert_eq!(wire, t.to_string());
        }
    }

    #[test]
    fn unknown_type_is_read_only() {
        let t: UpdateType = serde_json::from_str(r#""business_message""#).unwrap();
        assert_eq!(t, UpdateType::Unknown);
        assert!(serde_json::to_value(UpdateType::Unknown).is_err());
        assert!(serde_json::to_value(vec![UpdateType::Message, UpdateType::Unknown]).is_err());
    }

    #[test]
    fn empty_update_is_unknown() {
        let u: Update = serde_json::from_str(r#"{"update_id":9,"poll":{"id":"1"}}"#).unwrap();
        assert_eq!(u.kind(), UpdateKind::Unknown);
        assert_eq!(u.update_type(), UpdateType::Unknown);
        assert!(u.any_message().is_none());
    }
}
