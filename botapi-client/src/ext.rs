//! Snake-case shortcuts, one per Bot API method.
//!
//! Each shortcut takes the method's required parameters and sends the
//! request with every optional parameter absent. For anything more, build
//! the request struct from [`botapi_types::methods`] and
//! [`invoke`](crate::BotApiExt::invoke) it.

use async_trait::async_trait;
use botapi_types::methods::*;
use botapi_types::{
    BotCommand, BotCommandScope, BotDescription, BotName, BotShortDescription, ChatAction, ChatFullInfo,
    ChatId, ChatInviteLink, ChatMember, ChatPermissions, File, InlineKeyboardMarkup, InlineQueryResult,
    InputFile, InputMedia, MenuButton, Message, MessageId, MessageOrTrue, PassportElementError, Update,
    User, UserProfilePhotos, WebhookInfo,
};

use crate::{BotApiExt, InvocationError};

type Result<T> = std::result::Result<T, InvocationError>;

#[async_trait]
pub trait AvailableMethodsExt: BotApiExt {
    // ── Getting updates ────────────────────────────────────────────────────

    async fn get_updates(&self, offset: Option<i64>, timeout: u32) -> Result<Vec<Update>> {
        let req = GetUpdates { offset, timeout: Some(timeout), ..GetUpdates::new() };
        self.invoke(&req).await
    }

    async fn set_webhook<U>(&self, url: U) -> Result<bool>
    where U: Into<String> + Send {
        self.invoke(&SetWebhook::new(url)).await
    }

    async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<bool> {
        self.invoke(&DeleteWebhook { drop_pending_updates: Some(drop_pending_updates) }).await
    }

    async fn get_webhook_info(&self) -> Result<WebhookInfo> {
        self.invoke(&GetWebhookInfo {}).await
    }

    // ── Bot ────────────────────────────────────────────────────────────────

    async fn get_me(&self) -> Result<User> {
        self.invoke(&GetMe {}).await
    }

    async fn log_out(&self) -> Result<bool> {
        self.invoke(&LogOut {}).await
    }

    async fn close(&self) -> Result<bool> {
        self.invoke(&Close {}).await
    }

    // ── Messages ───────────────────────────────────────────────────────────

    async fn send_message<C, T>(&self, chat_id: C, text: T) -> Result<Message>
    where C: Into<ChatId> + Send, T: Into<String> + Send {
        self.invoke(&SendMessage::new(chat_id, text)).await
    }

    async fn forward_message<C, F>(&self, chat_id: C, from_chat_id: F, message_id: i64) -> Result<Message>
    where C: Into<ChatId> + Send, F: Into<ChatId> + Send {
        self.invoke(&ForwardMessage::new(chat_id, from_chat_id, message_id)).await
    }

    async fn copy_message<C, F>(&self, chat_id: C, from_chat_id: F, message_id: i64) -> Result<MessageId>
    where C: Into<ChatId> + Send, F: Into<ChatId> + Send {
        self.invoke(&CopyMessage::new(chat_id, from_chat_id, message_id)).await
    }

    async fn send_photo<C>(&self, chat_id: C, photo: InputFile) -> Result<Message>
    where C: Into<ChatId> + Send {
        self.invoke(&SendPhoto::new(chat_id, photo)).await
    }

    async fn send_video<C>(&self, chat_id: C, video: InputFile) -> Result<Message>
    where C: Into<ChatId> + Send {
        self.invoke(&SendVideo::new(chat_id, video)).await
    }

    async fn send_document<C>(&self, chat_id: C, document: InputFile) -> Result<Message>
    where C: Into<ChatId> + Send {
        self.invoke(&SendDocument::new(chat_id, document)).await
    }

    async fn send_media_group<C>(&self, chat_id: C, media: Vec<InputMedia>) -> Result<Vec<Message>>
    where C: Into<ChatId> + Send {
        self.invoke(&SendMediaGroup::new(chat_id, media)).await
    }

    async fn send_location<C>(&self, chat_id: C, latitude: f64, longitude: f64) -> Result<Message>
    where C: Into<ChatId> + Send {
        self.invoke(&SendLocation::new(chat_id, latitude, longitude)).await
    }

    async fn send_dice<C>(&self, chat_id: C) -> Result<Message>
    where C: Into<ChatId> + Send {
        self.invoke(&SendDice::new(chat_id)).await
    }

    async fn send_chat_action<C>(&self, chat_id: C, action: ChatAction) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&SendChatAction::new(chat_id, action)).await
    }

    async fn edit_message_text<T>(&self, target: EditTarget, text: T) -> Result<MessageOrTrue>
    where T: Into<String> + Send {
        self.invoke(&EditMessageText::new(target, text)).await
    }

    async fn edit_message_caption(&self, target: EditTarget, caption: Option<String>) -> Result<MessageOrTrue> {
        self.invoke(&EditMessageCaption::new(target, caption)).await
    }

    async fn edit_message_reply_markup(
        &self,
        target:       EditTarget,
        reply_markup: Option<InlineKeyboardMarkup>,
    ) -> Result<MessageOrTrue> {
        self.invoke(&EditMessageReplyMarkup::new(target, reply_markup)).await
    }

    async fn delete_message<C>(&self, chat_id: C, message_id: i64) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&DeleteMessage::new(chat_id, message_id)).await
    }

    async fn delete_messages<C>(&self, chat_id: C, message_ids: Vec<i64>) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&DeleteMessages::new(chat_id, message_ids)).await
    }

    // ── Files ──────────────────────────────────────────────────────────────

    async fn get_user_profile_photos(&self, user_id: i64) -> Result<UserProfilePhotos> {
        self.invoke(&GetUserProfilePhotos::new(user_id)).await
    }

    async fn get_file<F>(&self, file_id: F) -> Result<File>
    where F: Into<String> + Send {
        self.invoke(&GetFile::new(file_id)).await
    }

    // ── Chat administration ────────────────────────────────────────────────

    async fn ban_chat_member<C>(&self, chat_id: C, user_id: i64) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&BanChatMember::new(chat_id, user_id)).await
    }

    async fn unban_chat_member<C>(&self, chat_id: C, user_id: i64) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&UnbanChatMember::new(chat_id, user_id)).await
    }

    async fn restrict_chat_member<C>(&self, chat_id: C, user_id: i64, permissions: ChatPermissions) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&RestrictChatMember::new(chat_id, user_id, permissions)).await
    }

    async fn set_chat_permissions<C>(&self, chat_id: C, permissions: ChatPermissions) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&SetChatPermissions::new(chat_id, permissions)).await
    }

    async fn export_chat_invite_link<C>(&self, chat_id: C) -> Result<String>
    where C: Into<ChatId> + Send {
        self.invoke(&ExportChatInviteLink::new(chat_id)).await
    }

    async fn create_chat_invite_link<C>(&self, chat_id: C) -> Result<ChatInviteLink>
    where C: Into<ChatId> + Send {
        self.invoke(&CreateChatInviteLink::new(chat_id)).await
    }

    async fn revoke_chat_invite_link<C, L>(&self, chat_id: C, invite_link: L) -> Result<ChatInviteLink>
    where C: Into<ChatId> + Send, L: Into<String> + Send {
        self.invoke(&RevokeChatInviteLink::new(chat_id, invite_link)).await
    }

    async fn approve_chat_join_request<C>(&self, chat_id: C, user_id: i64) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&ApproveChatJoinRequest::new(chat_id, user_id)).await
    }

    async fn decline_chat_join_request<C>(&self, chat_id: C, user_id: i64) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&DeclineChatJoinRequest::new(chat_id, user_id)).await
    }

    async fn set_chat_photo<C>(&self, chat_id: C, photo: InputFile) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&SetChatPhoto::new(chat_id, photo)).await
    }

    async fn delete_chat_photo<C>(&self, chat_id: C) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&DeleteChatPhoto::new(chat_id)).await
    }

    async fn set_chat_title<C, T>(&self, chat_id: C, title: T) -> Result<bool>
    where C: Into<ChatId> + Send, T: Into<String> + Send {
        self.invoke(&SetChatTitle::new(chat_id, title)).await
    }

    async fn set_chat_description<C>(&self, chat_id: C, description: Option<String>) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&SetChatDescription::new(chat_id, description)).await
    }

    async fn pin_chat_message<C>(&self, chat_id: C, message_id: i64) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&PinChatMessage::new(chat_id, message_id)).await
    }

    async fn unpin_chat_message<C>(&self, chat_id: C, message_id: Option<i64>) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&UnpinChatMessage { message_id, ..UnpinChatMessage::new(chat_id) }).await
    }

    async fn unpin_all_chat_messages<C>(&self, chat_id: C) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&UnpinAllChatMessages::new(chat_id)).await
    }

    async fn leave_chat<C>(&self, chat_id: C) -> Result<bool>
    where C: Into<ChatId> + Send {
        self.invoke(&LeaveChat::new(chat_id)).await
    }

    async fn get_chat<C>(&self, chat_id: C) -> Result<ChatFullInfo>
    where C: Into<ChatId> + Send {
        self.invoke(&GetChat::new(chat_id)).await
    }

    async fn get_chat_administrators<C>(&self, chat_id: C) -> Result<Vec<ChatMember>>
    where C: Into<ChatId> + Send {
        self.invoke(&GetChatAdministrators::new(chat_id)).await
    }

    async fn get_chat_member_count<C>(&self, chat_id: C) -> Result<u32>
    where C: Into<ChatId> + Send {
        self.invoke(&GetChatMemberCount::new(chat_id)).await
    }

    async fn get_chat_member<C>(&self, chat_id: C, user_id: i64) -> Result<ChatMember>
    where C: Into<ChatId> + Send {
        self.invoke(&GetChatMember::new(chat_id, user_id)).await
    }

    // ── Callback & inline queries ──────────────────────────────────────────

    /// Answer a callback query; `text` shows as a notification when set.
    async fn answer_callback_query<Q>(&self, callback_query_id: Q, text: Option<String>) -> Result<bool>
    where Q: Into<String> + Send {
        self.invoke(&AnswerCallbackQuery { text, ..AnswerCallbackQuery::new(callback_query_id) }).await
    }

    async fn answer_inline_query<Q>(&self, inline_query_id: Q, results: Vec<InlineQueryResult>) -> Result<bool>
    where Q: Into<String> + Send {
        self.invoke(&AnswerInlineQuery::new(inline_query_id, results)).await
    }

    // ── Commands & profile ─────────────────────────────────────────────────

    async fn set_my_commands(&self, commands: Vec<BotCommand>, scope: Option<BotCommandScope>) -> Result<bool> {
        self.invoke(&SetMyCommands { scope, ..SetMyCommands::new(commands) }).await
    }

    async fn delete_my_commands(&self, scope: Option<BotCommandScope>) -> Result<bool> {
        self.invoke(&DeleteMyCommands { scope, language_code: None }).await
    }

    async fn get_my_commands(&self, scope: Option<BotCommandScope>) -> Result<Vec<BotCommand>> {
        self.invoke(&GetMyCommands { scope, language_code: None }).await
    }

    async fn set_my_name(&self, name: Option<String>, language_code: Option<String>) -> Result<bool> {
        self.invoke(&SetMyName { name, language_code }).await
    }

    async fn get_my_name(&self, language_code: Option<String>) -> Result<BotName> {
        self.invoke(&GetMyName { language_code }).await
    }

    async fn set_my_description(&self, description: Option<String>, language_code: Option<String>) -> Result<bool> {
        self.invoke(&SetMyDescription { description, language_code }).await
    }

    async fn get_my_description(&self, language_code: Option<String>) -> Result<BotDescription> {
        self.invoke(&GetMyDescription { language_code }).await
    }

    async fn set_my_short_description(
        &self,
        short_description: Option<String>,
        language_code:     Option<String>,
    ) -> Result<bool> {
        self.invoke(&SetMyShortDescription { short_description, language_code }).await
    }

    async fn get_my_short_description(&self, language_code: Option<String>) -> Result<BotShortDescription> {
        self.invoke(&GetMyShortDescription { language_code }).await
    }

    async fn set_chat_menu_button(&self, chat_id: Option<i64>, menu_button: Option<MenuButton>) -> Result<bool> {
        self.invoke(&SetChatMenuButton { chat_id, menu_button }).await
    }

    async fn get_chat_menu_button(&self, chat_id: Option<i64>) -> Result<MenuButton> {
        self.invoke(&GetChatMenuButton { chat_id }).await
    }

    // ── Passport ───────────────────────────────────────────────────────────

    async fn set_passport_data_errors(&self, user_id: i64, errors: Vec<PassportElementError>) -> Result<bool> {
        self.invoke(&SetPassportDataErrors::new(user_id, errors)).await
    }
}

impl<T: BotApiExt + ?Sized> AvailableMethodsExt for T {}
