//! Users, chats and chat membership.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::serde_util::is_false;

// ─── User ─────────────────────────────────────────────────────────────────────

/// A Telegram user or bot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id:         i64,
    pub is_bot:     bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name:  Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username:   Option<String>,
    /// IETF language tag of the user's client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub added_to_attachment_menu: bool,
    /// Returned only in `getMe`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_join_groups: Option<bool>,
    /// Returned only in `getMe`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_read_all_group_messages: Option<bool>,
    /// Returned only in `getMe`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_inline_queries: Option<bool>,
}

impl User {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }
}

// ─── Chat ─────────────────────────────────────────────────────────────────────

/// Kind of a [`Chat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
    /// Only reported for inline queries sent from a secret chat or by the bot's own user.
    Sender,
}

/// A private chat, group, supergroup or channel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name:  Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_forum:   bool,
}

impl Chat {
    pub fn is_private(&self) -> bool { self.kind == ChatType::Private }

    /// Title for groups and channels, the user's name for private chats.
    pub fn display_name(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        let first = self.first_name.as_deref().unwrap_or("");
        let last  = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }
}

/// Full information about a chat, as returned by `getChat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatFullInfo {
    #[serde(flatten)]
    pub chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<ChatPhoto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_usernames: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<ChatPermissions>,
    /// Minimum delay between consecutive messages, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow_mode_delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_auto_delete_time: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_protected_content: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_reaction_count: Option<u32>,
}

/// Chat photo file ids. Use `getFile` to download.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatPhoto {
    pub small_file_id:        String,
    pub small_file_unique_id: String,
    pub big_file_id:          String,
    pub big_file_unique_id:   String,
}

// ─── Permissions & rights ─────────────────────────────────────────────────────

/// Actions a non-administrator user is allowed to take in a chat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatPermissions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_messages:         Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_audios:           Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_documents:        Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_photos:           Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_videos:           Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_video_notes:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_voice_notes:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_polls:            Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_send_other_messages:   Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_add_web_page_previews: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_change_info:           Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_invite_users:          Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages:          Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics:         Option<bool>,
}

impl ChatPermissions {
    /// Every permission granted.
    pub fn all() -> Self {
        Self {
            can_send_messages:         Some(true),
            can_send_audios:           Some(true),
            can_send_documents:        Some(true),
            can_send_photos:           Some(true),
            can_send_videos:           Some(true),
            can_send_video_notes:      Some(true),
            can_send_voice_notes:      Some(true),
            can_send_polls:            Some(true),
            can_send_other_messages:   Some(true),
            can_add_web_page_previews: Some(true),
            can_change_info:           Some(true),
            can_invite_users:          Some(true),
            can_pin_messages:          Some(true),
            can_manage_topics:         Some(true),
        }
    }

    /// Read-only: every permission explicitly denied.
    pub fn read_only() -> Self {
        Self {
            can_send_messages:         Some(false),
            can_send_audios:           Some(false),
            can_send_documents:        Some(false),
            can_send_photos:           Some(false),
            can_send_videos:           Some(false),
            can_send_video_notes:      Some(false),
            can_send_voice_notes:      Some(false),
            can_send_polls:            Some(false),
            can_send_other_messages:   Some(false),
            can_add_web_page_previews: Some(false),
            can_change_info:           Some(false),
            can_invite_users:          Some(false),
            can_pin_messages:          Some(false),
            can_manage_topics:         Some(false),
        }
    }
}

// ─── Invite links & join requests ─────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatInviteLink {
    /// The link itself. Elided with `…` if created by another administrator.
    pub invite_link:          String,
    pub creator:              User,
    pub creates_join_request: bool,
    pub is_primary:           bool,
    pub is_revoked:           bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:                 Option<String>,
    /// Unix timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date:          Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_limit:         Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_join_request_count: Option<u32>,
}

/// A request to join a chat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatJoinRequest {
    pub chat:         Chat,
    pub from:         User,
    /// Private chat with the requester, usable for five minutes.
    pub user_chat_id: i64,
    pub date:         i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link:  Option<ChatInviteLink>,
}

// ─── ChatMember ───────────────────────────────────────────────────────────────

/// Information about one member of a chat, discriminated by `status`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChatMember {
    #[serde(rename = "creator")]
    Owner(ChatMemberOwner),
    Administrator(ChatMemberAdministrator),
    Member(ChatMemberMember),
    Restricted(ChatMemberRestricted),
    Left(ChatMemberLeft),
    #[serde(rename = "kicked")]
    Banned(ChatMemberBanned),
}

impl ChatMember {
    pub fn user(&self) -> &User {
        match self {
            Self::Owner(m)         => &m.user,
            Self::Administrator(m) => &m.user,
            Self::Member(m)        => &m.user,
            Self::Restricted(m)    => &m.user,
            Self::Left(m)          => &m.user,
            Self::Banned(m)        => &m.user,
        }
    }

    /// `true` for the owner and administrators.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Owner(_) | Self::Administrator(_))
    }

    /// `true` if the user currently belongs to the chat.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Owner(_) | Self::Administrator(_) | Self::Member(_) => true,
            Self::Restricted(m) => m.is_member,
            Self::Left(_) | Self::Banned(_) => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMemberOwner {
    pub user:         User,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMemberAdministrator {
    pub user:                   User,
    pub can_be_edited:          bool,
    pub is_anonymous:           bool,
    pub can_manage_chat:        bool,
    pub can_delete_messages:    bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members:   bool,
    pub can_promote_members:    bool,
    pub can_change_info:        bool,
    pub can_invite_users:       bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages:       Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title:           Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMemberMember {
    pub user: User,
    /// Unix time when the user's subscription expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMemberRestricted {
    pub user:       User,
    pub is_member:  bool,
    /// Unix time when restrictions are lifted; 0 means forever.
    pub until_date: i64,
    #[serde(flatten)]
    pub permissions: ChatPermissions,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMemberBanned {
    pub user:       User,
    /// Unix time when the ban is lifted; 0 means forever.
    pub until_date: i64,
}

/// A change in a chat member's status.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    pub chat:            Chat,
    pub from:            User,
    pub date:            i64,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link:     Option<ChatInviteLink>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub via_chat_folder_invite_link: bool,
}

/// Administrator rights suggested for the bot when it is added to a chat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatAdministratorRights {
    pub is_anonymous:           bool,
    pub can_manage_chat:        bool,
    pub can_delete_messages:    bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members:   bool,
    pub can_promote_members:    bool,
    pub can_change_info:        bool,
    pub can_invite_users:       bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages:       Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics:      Option<bool>,
}

// ─── ChatAction ───────────────────────────────────────────────────────────────

/// Status shown to the other party while the bot prepares a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordVoice,
    UploadVoice,
    UploadDocument,
    ChooseSticker,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}
