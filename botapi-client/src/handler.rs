//! The bot base: one callback per update kind.

use async_trait::async_trait;
use botapi_types::{
    CallbackQuery, ChatJoinRequest, ChatMemberUpdated, ChosenInlineResult, InlineQuery, Message,
    Update, UpdateKind,
};
use tokio_util::sync::CancellationToken;

use crate::update::{PollOptions, UpdateStream};
use crate::{BotApi, InvocationError};

type Result = std::result::Result<(), InvocationError>;

/// Receives updates one at a time.
///
/// [`on_update`](Self::on_update) switches on [`Update::kind`] and calls the
/// matching `on_*` method; every method defaults to doing nothing. An error
/// returned from a callback goes to [`on_error`](Self::on_error) and polling
/// continues.
#[async_trait]
pub trait UpdateHandler: Send + Sync {
    async fn on_update(&self, update: &Update) -> Result {
        dispatch(self, update).await
    }

    async fn on_message(&self, _message: &Message) -> Result { Ok(()) }

    async fn on_edited_message(&self, _message: &Message) -> Result { Ok(()) }

    async fn on_channel_post(&self, _post: &Message) -> Result { Ok(()) }

    async fn on_edited_channel_post(&self, _post: &Message) -> Result { Ok(()) }

    async fn on_inline_query(&self, _query: &InlineQuery) -> Result { Ok(()) }

    async fn on_chosen_inline_result(&self, _result: &ChosenInlineResult) -> Result { Ok(()) }

    async fn on_callback_query(&self, _query: &CallbackQuery) -> Result { Ok(()) }

    /// The bot's own membership changed.
    async fn on_my_chat_member(&self, _change: &ChatMemberUpdated) -> Result { Ok(()) }

    async fn on_chat_member(&self, _change: &ChatMemberUpdated) -> Result { Ok(()) }

    async fn on_chat_join_request(&self, _request: &ChatJoinRequest) -> Result { Ok(()) }

    /// An update kind this crate does not model.
    async fn on_unknown(&self, _update: &Update) -> Result { Ok(()) }

    async fn on_error(&self, update: &Update, error: InvocationError) {
        tracing::warn!("[botapi] handler failed on update {}: {error}", update.update_id);
    }
}

/// Route `update` to the `on_*` method of `handler` that matches its kind.
pub async fn dispatch<H: UpdateHandler + ?Sized>(handler: &H, update: &Update) -> Result {
    match update.kind() {
        UpdateKind::Message(m)            => handler.on_message(m).await,
        UpdateKind::EditedMessage(m)      => handler.on_edited_message(m).await,
        UpdateKind::ChannelPost(m)        => handler.on_channel_post(m).await,
        UpdateKind::EditedChannelPost(m)  => handler.on_edited_channel_post(m).await,
        UpdateKind::InlineQuery(q)        => handler.on_inline_query(q).await,
        UpdateKind::ChosenInlineResult(r) => handler.on_chosen_inline_result(r).await,
        UpdateKind::CallbackQuery(q)      => handler.on_callback_query(q).await,
        UpdateKind::MyChatMember(c)       => handler.on_my_chat_member(c).await,
        UpdateKind::ChatMember(c)         => handler.on_chat_member(c).await,
        UpdateKind::ChatJoinRequest(r)    => handler.on_chat_join_request(r).await,
        UpdateKind::Unknown               => handler.on_unknown(update).await,
    }
}

/// Poll for updates and feed them to `handler`, in order, until `cancel` fires.
///
/// Returns `Err` only when polling itself can't continue, e.g. an invalid token.
pub async fn run_polling<C, H>(
    client:  C,
    handler: &H,
    options: PollOptions,
    cancel:  CancellationToken,
) -> Result
where
    C: BotApi,
    H: UpdateHandler + ?Sized,
{
    tracing::info!("[botapi] polling for updates (timeout {}s)", options.timeout);
    let mut stream = UpdateStream::new(client, options, cancel);
    while let Some(update) = stream.next().await? {
        if let Err(e) = handler.on_update(&update).await {
            handler.on_error(&update, e).await;
        }
    }
    tracing::info!("[botapi] polling stopped");
    Ok(())
}
