//! botapi-bot: a hello-world bot built with botapi.
//!
//! # Setup
//! 1. Put `BOT_TOKEN=<token from @BotFather>` in the environment or a `.env` file.
//!    `TELEGRAM_API_BASE` points the bot at a local Bot API server instead.
//! 2. `cargo run -p botapi-bot`

use anyhow::Context;
use async_trait::async_trait;
use botapi::client::dispatch;
use botapi::types::methods::{AnswerCallbackQuery, EditMessageReplyMarkup, EditTarget, SendMessage};
use botapi::types::{
    BotCommand, CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, Message, ParseMode, Update,
    UpdateType,
};
use botapi::{
    AvailableMethodsExt, BotApiExt, CancellationToken, Client, Config, InvocationError, PollOptions,
    UpdateHandler, run_polling,
};

#[tokio::main]
async fn main() {
    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", "botapi_client=info,botapi_bot=info"); }
    }
    env_logger::init();
    if let Err(e) = run().await {
        eprintln!("✗ {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let token = std::env::var("BOT_TOKEN").context("BOT_TOKEN is not set")?;

    let mut config = Config::new(token);
    if let Ok(base) = std::env::var("TELEGRAM_API_BASE") {
        config.api_base = base;
    }
    let client = Client::with_config(config)?;

    let me = client.get_me().await.context("getMe failed; check BOT_TOKEN")?;
    let username = me.username.clone().unwrap_or_default();
    println!("✅ Running as @{username} (id={})", me.id);

    client.set_my_commands(
        vec![
            BotCommand::new("hello", "Say hello"),
            BotCommand::new("help", "What this bot can do"),
        ],
        None,
    ).await?;

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n👋 Stopping…");
            on_ctrl_c.cancel();
        }
    });

    let options = PollOptions {
        allowed_updates: Some(vec![UpdateType::Message, UpdateType::CallbackQuery]),
        ..PollOptions::default()
    };
    let bot = HelloBot { client: client.clone(), username };
    println!("👂 Listening for updates… (Ctrl+C to quit)\n");
    run_polling(client, &bot, options, cancel).await?;
    Ok(())
}

// ─── HelloBot ─────────────────────────────────────────────────────────────────

struct HelloBot {
    client:   Client,
    username: String,
}

#[async_trait]
impl UpdateHandler for HelloBot {
    async fn on_update(&self, update: &Update) -> Result<(), InvocationError> {
        #[cfg(debug_assertions)]
        tracing::info!("New update with id: {}. Type: {}", update.update_id, update.update_type());

        dispatch(self, update).await
    }

    async fn on_message(&self, message: &Message) -> Result<(), InvocationError> {
        let Some(text) = message.text.as_deref() else { return Ok(()) };
        let Some((cmd, _arg)) = split_command(text, &self.username) else { return Ok(()) };

        match cmd.as_str() {
            "/hello" => self.hello(message).await,
            "/start" | "/help" => self.help(message).await,
            _ => Ok(()),
        }
    }

    async fn on_callback_query(&self, query: &CallbackQuery) -> Result<(), InvocationError> {
        if query.data.as_deref() != Some("wave") {
            return self.client.answer_callback_query(query.id.clone(), None).await.map(drop);
        }

        let name = query.from.first_name.clone();
        self.client.invoke(&AnswerCallbackQuery::new(query.id.clone()).text(format!("👋 Hi, {name}!"))).await?;

        // Drop the button once it was used.
        if let Some(message) = query.message.as_deref().filter(|m| m.is_accessible()) {
            let target = EditTarget::chat(message.chat.id, message.message_id);
            self.client.invoke(&EditMessageReplyMarkup::new(target, None)).await?;
        }
        Ok(())
    }
}

impl HelloBot {
    async fn hello(&self, message: &Message) -> Result<(), InvocationError> {
        let name = message.from.as_ref().map(|u| u.full_name()).unwrap_or_else(|| "there".into());
        let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback("👋 Wave back", "wave")]]);
        let req = SendMessage::new(message.chat.id, format!("Hello, <b>{}</b>!", escape_html(&name)))
            .parse_mode(ParseMode::Html)
            .reply_to(message.message_id)
            .reply_markup(keyboard);
        self.client.invoke(&req).await?;
        Ok(())
    }

    async fn help(&self, message: &Message) -> Result<(), InvocationError> {
        let text = "I'm a hello-world bot built with botapi 🦀\n\n\
            /hello - Greet you by name\n\
            /help - This message";
        self.client.invoke(&SendMessage::new(message.chat.id, text)).await?;
        Ok(())
    }
}

// ─── Utilities ────────────────────────────────────────────────────────────────

/// Split `/cmd@bot_name args` into the lowercased command and its argument.
///
/// Returns `None` for plain text and for commands addressed to another bot.
fn split_command(text: &str, bot_username: &str) -> Option<(String, String)> {
    if !text.starts_with('/') { return None; }
    let (cmd_raw, rest) = text.split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((text, ""));
    let cmd = match cmd_raw.split_once('@') {
        Some((cmd, target)) if target.eq_ignore_ascii_case(bot_username) => cmd,
        Some(_) => return None,
        None    => cmd_raw,
    };
    Some((cmd.to_ascii_lowercase(), rest.to_string()))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_split_from_arguments() {
        assert_eq!(split_command("/hello", "my_bot"), Some(("/hello".into(), String::new())));
        assert_eq!(split_command("/Echo  some text ", "my_bot"), Some(("/echo".into(), "some text".into())));
        assert_eq!(split_command("hello", "my_bot"), None);
    }

    #[test]
    fn mentions_of_other_bots_are_ignored() {
        assert_eq!(split_command("/hello@My_Bot", "my_bot"), Some(("/hello".into(), String::new())));
        assert_eq!(split_command("/hello@other_bot", "my_bot"), None);
    }

    #[test]
    fn names_are_escaped_for_html() {
        assert_eq!(escape_html("<Ada & Co>"), "&lt;Ada &amp; Co&gt;");
    }
}
