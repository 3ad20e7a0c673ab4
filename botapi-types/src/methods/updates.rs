//! Getting updates: long polling and webhooks.

use serde::Serialize;

use crate::input::InputFile;
use crate::update::{Update, UpdateType, WebhookInfo};

/// Receive incoming updates using long polling.
///
/// An update is confirmed, and never returned again, as soon as `getUpdates`
/// is called with an `offset` higher than its `update_id`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset:  Option<i64>,
    /// 1-100, defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit:   Option<u32>,
    /// Long polling timeout in seconds. `0` is short polling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateType>>,
}

bot_method!(GetUpdates: "getUpdates" -> Vec<Update>);

impl GetUpdates {
    pub fn new() -> Self { Self::default() }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset); self
    }

    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds); self
    }
}

/// Specify a URL to receive updates through an outgoing webhook.
///
/// An empty `url` removes the current webhook.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SetWebhook {
    pub url: String,
    /// Public key certificate, for self-signed certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate:     Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address:      Option<String>,
    /// 1-100, defaults to 40.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<UpdateType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
    /// Sent back in the `X-Telegram-Bot-Api-Secret-Token` header of every webhook request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token:    Option<String>,
}

bot_method!(SetWebhook: "setWebhook" -> bool, uploads(certificate));

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }
}

/// Remove the webhook and switch back to `getUpdates`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DeleteWebhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

bot_method!(DeleteWebhook: "deleteWebhook" -> bool);

#[derive(Clone, Debug, Default, Serialize)]
pub struct GetWebhookInfo {}

bot_method!(GetWebhookInfo: "getWebhookInfo" -> WebhookInfo);
