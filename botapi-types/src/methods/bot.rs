//! The bot itself: identity, session, commands, profile texts and menu button.

use serde::Serialize;

use crate::chat::User;
use crate::commands::{
    BotCommand, BotCommandScope, BotDescription, BotName, BotShortDescription, MenuButton,
};
use crate::serde_util::is_blank;

/// Basic information about the bot.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetMe {}

bot_method!(GetMe: "getMe" -> User);

/// Log out from the cloud Bot API server before moving to a local one.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LogOut {}

bot_method!(LogOut: "logOut" -> bool);

/// Close the bot instance before moving it between local servers.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Close {}

bot_method!(Close: "close" -> bool);

/// Answer a callback query sent from an inline keyboard.
#[derive(Clone, Debug, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    /// 0-200 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text:       Option<String>,
    /// Show an alert instead of a notification at the top of the chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url:        Option<String>,
    /// Seconds the answer may be cached client-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u32>,
}

bot_method!(AnswerCallbackQuery: "answerCallbackQuery" -> bool, required(callback_query_id));

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: None,
            url: None,
            cache_time: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into()); self
    }

    pub fn alert(mut self, show: bool) -> Self {
        self.show_alert = Some(show); self
    }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

/// Change the list of the bot's commands for a scope and language.
#[derive(Clone, Debug, Serialize)]
pub struct SetMyCommands {
    /// At most 100 commands.
    pub commands: Vec<BotCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope:    Option<BotCommandScope>,
    /// Two-letter ISO 639-1 code. Empty applies to every user without a dedicated list.
    #[serde(skip_serializing_if = "is_blank")]
    pub language_code: Option<String>,
}

bot_method!(SetMyCommands: "setMyCommands" -> bool, required(commands));

impl SetMyCommands {
    pub fn new(commands: Vec<BotCommand>) -> Self {
        Self { commands, scope: None, language_code: None }
    }

    pub fn scope(mut self, scope: BotCommandScope) -> Self {
        self.scope = Some(scope); self
    }

    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into()); self
    }
}

/// Delete the list of commands for a scope and language.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DeleteMyCommands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    #[serde(skip_serializing_if = "is_blank")]
    pub language_code: Option<String>,
}

bot_method!(DeleteMyCommands: "deleteMyCommands" -> bool);

/// The current list of commands for a scope and language.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetMyCommands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    #[serde(skip_serializing_if = "is_blank")]
    pub language_code: Option<String>,
}

bot_method!(GetMyCommands: "getMyCommands" -> Vec<BotCommand>);

// ─── Profile texts ────────────────────────────────────────────────────────────

/// Change the bot's name. An empty name removes the dedicated name for the language.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SetMyName {
    /// 0-64 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub language_code: Option<String>,
}

bot_method!(SetMyName: "setMyName" -> bool);

impl SetMyName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), language_code: None }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GetMyName {
    #[serde(skip_serializing_if = "is_blank")]
    pub language_code: Option<String>,
}

bot_method!(GetMyName: "getMyName" -> BotName);

/// Change the text shown in an empty chat with the bot.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SetMyDescription {
    /// 0-512 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub language_code: Option<String>,
}

bot_method!(SetMyDescription: "setMyDescription" -> bool);

impl SetMyDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: Some(description.into()), language_code: None }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GetMyDescription {
    #[serde(skip_serializing_if = "is_blank")]
    pub language_code: Option<String>,
}

bot_method!(GetMyDescription: "getMyDescription" -> BotDescription);

/// Change the text on the bot's profile page and in shared links.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SetMyShortDescription {
    /// 0-120 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub language_code: Option<String>,
}

bot_method!(SetMyShortDescription: "setMyShortDescription" -> bool);

impl SetMyShortDescription {
    pub fn new(short_description: impl Into<String>) -> Self {
        Self { short_description: Some(short_description.into()), language_code: None }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GetMyShortDescription {
    #[serde(skip_serializing_if = "is_blank")]
    pub language_code: Option<String>,
}

bot_method!(GetMyShortDescription: "getMyShortDescription" -> BotShortDescription);

// ─── Menu button ──────────────────────────────────────────────────────────────

/// Change the menu button in a private chat, or the default one.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SetChatMenuButton {
    /// Private chat to change. Absent changes the default menu button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id:     Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_button: Option<MenuButton>,
}

bot_method!(SetChatMenuButton: "setChatMenuButton" -> bool);

#[derive(Clone, Debug, Default, Serialize)]
pub struct GetChatMenuButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
}

bot_method!(GetChatMenuButton: "getChatMenuButton" -> MenuButton);
