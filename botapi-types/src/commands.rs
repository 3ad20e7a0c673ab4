//! Bot commands, command scopes, and the bot's public profile.

use serde::{Deserialize, Serialize};

use crate::chat_id::ChatId;

/// A command shown in the bot's command menu.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotCommand {
    /// 1-32 characters: lowercase letters, digits and underscores.
    pub command:     String,
    /// 1-256 characters.
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self { command: command.into(), description: description.into() }
    }
}

/// The users a list of bot commands applies to, discriminated by `type`.
///
/// Telegram picks the most specific scope that matches, from `chat_member`
/// down to `default`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommandScope {
    #[default]
    Default,
    AllPrivateChats,
    AllGroupChats,
    AllChatAdministrators,
    Chat { chat_id: ChatId },
    ChatAdministrators { chat_id: ChatId },
    ChatMember { chat_id: ChatId, user_id: i64 },
}

impl BotCommandScope {
    pub fn chat(chat_id: impl Into<ChatId>) -> Self {
        Self::Chat { chat_id: chat_id.into() }
    }

    pub fn chat_administrators(chat_id: impl Into<ChatId>) -> Self {
        Self::ChatAdministrators { chat_id: chat_id.into() }
    }

    pub fn chat_member(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self::ChatMember { chat_id: chat_id.into(), user_id }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotName {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotDescription {
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotShortDescription {
    pub short_description: String,
}

/// The bot's menu button in a private chat, discriminated by `type`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuButton {
    /// Opens the list of bot commands.
    Commands,
    /// Launches a Web App.
    WebApp { text: String, web_app: WebAppInfo },
    #[default]
    Default,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebAppInfo {
    /// HTTPS URL of the Web App.
    pub url: String,
}
