//! Chat administration: members, permissions, invite links, chat info.

use serde::Serialize;

use crate::chat::{ChatFullInfo, ChatInviteLink, ChatMember, ChatPermissions};
use crate::chat_id::ChatId;
use crate::input::InputFile;

// ─── Members ──────────────────────────────────────────────────────────────────

/// Ban a user. In supergroups and channels the user can't rejoin on their own.
#[derive(Clone, Debug, Serialize)]
pub struct BanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Unix time the ban ends. Less than 30 seconds or more than 366 days is forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date:      Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke_messages: Option<bool>,
}

bot_method!(BanChatMember: "banChatMember" -> bool, required(chat_id));

impl BanChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self { chat_id: chat_id.into(), user_id, until_date: None, revoke_messages: None }
    }
}

/// Unban a previously banned user.
#[derive(Clone, Debug, Serialize)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Do nothing if the user is not banned, instead of removing them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_if_banned: Option<bool>,
}

bot_method!(UnbanChatMember: "unbanChatMember" -> bool, required(chat_id));

impl UnbanChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self { chat_id: chat_id.into(), user_id, only_if_banned: None }
    }
}

/// Restrict a user in a supergroup.
#[derive(Clone, Debug, Serialize)]
pub struct RestrictChatMember {
    pub chat_id:     ChatId,
    pub user_id:     i64,
    pub permissions: ChatPermissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_independent_chat_permissions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

bot_method!(RestrictChatMember: "restrictChatMember" -> bool, required(chat_id));

impl RestrictChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64, permissions: ChatPermissions) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            permissions,
            use_independent_chat_permissions: None,
            until_date: None,
        }
    }
}

/// Set default permissions for all members.
#[derive(Clone, Debug, Serialize)]
pub struct SetChatPermissions {
    pub chat_id:     ChatId,
    pub permissions: ChatPermissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_independent_chat_permissions: Option<bool>,
}

bot_method!(SetChatPermissions: "setChatPermissions" -> bool, required(chat_id));

impl SetChatPermissions {
    pub fn new(chat_id: impl Into<ChatId>, permissions: ChatPermissions) -> Self {
        Self { chat_id: chat_id.into(), permissions, use_independent_chat_permissions: None }
    }
}

// ─── Invite links ─────────────────────────────────────────────────────────────

/// Generate a new primary invite link, revoking the previous one.
#[derive(Clone, Debug, Serialize)]
pub struct ExportChatInviteLink {
    pub chat_id: ChatId,
}

bot_method!(ExportChatInviteLink: "exportChatInviteLink" -> String, required(chat_id));

impl ExportChatInviteLink {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

/// Create an additional invite link.
#[derive(Clone, Debug, Serialize)]
pub struct CreateChatInviteLink {
    pub chat_id: ChatId,
    /// 0-32 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:         Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date:  Option<i64>,
    /// 1-99999. Can't be combined with `creates_join_request`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creates_join_request: Option<bool>,
}

bot_method!(CreateChatInviteLink: "createChatInviteLink" -> ChatInviteLink, required(chat_id));

impl CreateChatInviteLink {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            name: None,
            expire_date: None,
            member_limit: None,
            creates_join_request: None,
        }
    }
}

/// Revoke an invite link created by the bot.
#[derive(Clone, Debug, Serialize)]
pub struct RevokeChatInviteLink {
    pub chat_id:     ChatId,
    pub invite_link: String,
}

bot_method!(RevokeChatInviteLink: "revokeChatInviteLink" -> ChatInviteLink, required(chat_id, invite_link));

impl RevokeChatInviteLink {
    pub fn new(chat_id: impl Into<ChatId>, invite_link: impl Into<String>) -> Self {
        Self { chat_id: chat_id.into(), invite_link: invite_link.into() }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ApproveChatJoinRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

bot_method!(ApproveChatJoinRequest: "approveChatJoinRequest" -> bool, required(chat_id));

impl ApproveChatJoinRequest {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self { chat_id: chat_id.into(), user_id }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct DeclineChatJoinRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

bot_method!(DeclineChatJoinRequest: "declineChatJoinRequest" -> bool, required(chat_id));

impl DeclineChatJoinRequest {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self { chat_id: chat_id.into(), user_id }
    }
}

// ─── Chat settings ────────────────────────────────────────────────────────────

/// Set a new profile photo. Not available for private chats.
#[derive(Clone, Debug, Serialize)]
pub struct SetChatPhoto {
    pub chat_id: ChatId,
    /// Must be an upload.
    pub photo:   InputFile,
}

bot_method!(SetChatPhoto: "setChatPhoto" -> bool, required(chat_id, photo), uploads(photo));

impl SetChatPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: InputFile) -> Self {
        Self { chat_id: chat_id.into(), photo }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct DeleteChatPhoto {
    pub chat_id: ChatId,
}

bot_method!(DeleteChatPhoto: "deleteChatPhoto" -> bool, required(chat_id));

impl DeleteChatPhoto {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

/// Change the title of a group, supergroup or channel.
#[derive(Clone, Debug, Serialize)]
pub struct SetChatTitle {
    pub chat_id: ChatId,
    /// 1-128 characters.
    pub title:   String,
}

bot_method!(SetChatTitle: "setChatTitle" -> bool, required(chat_id, title));

impl SetChatTitle {
    pub fn new(chat_id: impl Into<ChatId>, title: impl Into<String>) -> Self {
        Self { chat_id: chat_id.into(), title: title.into() }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SetChatDescription {
    pub chat_id: ChatId,
    /// 0-255 characters. Absent clears the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

bot_method!(SetChatDescription: "setChatDescription" -> bool, required(chat_id));

impl SetChatDescription {
    pub fn new(chat_id: impl Into<ChatId>, description: Option<String>) -> Self {
        Self { chat_id: chat_id.into(), description }
    }
}

// ─── Pins ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize)]
pub struct PinChatMessage {
    pub chat_id:    ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

bot_method!(PinChatMessage: "pinChatMessage" -> bool, required(chat_id));

impl PinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self { chat_id: chat_id.into(), message_id, disable_notification: None }
    }
}

/// Unpin a message. Absent `message_id` unpins the most recent one.
#[derive(Clone, Debug, Serialize)]
pub struct UnpinChatMessage {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
}

bot_method!(UnpinChatMessage: "unpinChatMessage" -> bool, required(chat_id));

impl UnpinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into(), message_id: None }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct UnpinAllChatMessages {
    pub chat_id: ChatId,
}

bot_method!(UnpinAllChatMessages: "unpinAllChatMessages" -> bool, required(chat_id));

impl UnpinAllChatMessages {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

// ─── Chat info ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize)]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

bot_method!(LeaveChat: "leaveChat" -> bool, required(chat_id));

impl LeaveChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GetChat {
    pub chat_id: ChatId,
}

bot_method!(GetChat: "getChat" -> ChatFullInfo, required(chat_id));

impl GetChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

/// Administrators of a chat, bots excluded.
#[derive(Clone, Debug, Serialize)]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

bot_method!(GetChatAdministrators: "getChatAdministrators" -> Vec<ChatMember>, required(chat_id));

impl GetChatAdministrators {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GetChatMemberCount {
    pub chat_id: ChatId,
}

bot_method!(GetChatMemberCount: "getChatMemberCount" -> u32, required(chat_id));

impl GetChatMemberCount {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

bot_method!(GetChatMember: "getChatMember" -> ChatMember, required(chat_id));

impl GetChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self { chat_id: chat_id.into(), user_id }
    }
}
