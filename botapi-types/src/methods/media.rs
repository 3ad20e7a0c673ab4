//! Sending media and fetching files.

use serde::Serialize;

use crate::chat_id::ChatId;
use crate::input::{InputFile, InputMedia};
use crate::keyboard::ReplyMarkup;
use crate::media::{File, UserProfilePhotos};
use crate::message::{Message, MessageEntity, ParseMode, ReplyParameters};

/// Send a photo.
#[derive(Clone, Debug, Serialize)]
pub struct SendPhoto {
    pub chat_id: ChatId,
    /// At most 10 MB; width + height at most 10000; ratio at most 20.
    pub photo:   InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    /// 0-1024 characters after entity parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:           Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:        Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities:  Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler:       Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters:     Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:         Option<ReplyMarkup>,
}

bot_method!(SendPhoto: "sendPhoto" -> Message, required(chat_id, photo), uploads(photo));

impl SendPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo,
            message_thread_id: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            show_caption_above_media: None,
            has_spoiler: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into()); self
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into()); self
    }
}

/// Send an MPEG4 video. Other formats may be sent as a document.
#[derive(Clone, Debug, Serialize)]
pub struct SendVideo {
    pub chat_id: ChatId,
    pub video:   InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration:          Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width:             Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height:            Option<u32>,
    /// Ignored unless the video itself is uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:         Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:           Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:        Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities:  Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler:       Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters:     Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:         Option<ReplyMarkup>,
}

bot_method!(SendVideo: "sendVideo" -> Message, required(chat_id, video), uploads(video, thumbnail));

impl SendVideo {
    pub fn new(chat_id: impl Into<ChatId>, video: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            video,
            message_thread_id: None,
            duration: None,
            width: None,
            height: None,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            show_caption_above_media: None,
            has_spoiler: None,
            supports_streaming: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into()); self
    }

    pub fn thumbnail(mut self, thumbnail: InputFile) -> Self {
        self.thumbnail = Some(thumbnail); self
    }
}

/// Send a general file, up to 50 MB.
#[derive(Clone, Debug, Serialize)]
pub struct SendDocument {
    pub chat_id:  ChatId,
    pub document: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:         Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:           Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:        Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities:  Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters:     Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:         Option<ReplyMarkup>,
}

bot_method!(SendDocument: "sendDocument" -> Message, required(chat_id, document), uploads(document, thumbnail));

impl SendDocument {
    pub fn new(chat_id: impl Into<ChatId>, document: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            document,
            message_thread_id: None,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            disable_content_type_detection: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into()); self
    }
}

/// Send 2-10 photos, videos, documents or audios as an album.
///
/// Documents and audio files can only be grouped with items of the same kind.
#[derive(Clone, Debug, Serialize)]
pub struct SendMediaGroup {
    pub chat_id: ChatId,
    pub media:   Vec<InputMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id:    Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters:     Option<ReplyParameters>,
}

bot_method!(SendMediaGroup: "sendMediaGroup" -> Vec<Message>, required(chat_id, media), uploads(media));

impl SendMediaGroup {
    pub fn new(chat_id: impl Into<ChatId>, media: Vec<InputMedia>) -> Self {
        Self {
            chat_id: chat_id.into(),
            media,
            message_thread_id: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
        }
    }
}

/// A user's profile pictures.
#[derive(Clone, Debug, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    /// Sequential number of the first photo to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset:  Option<u32>,
    /// 1-100, defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit:   Option<u32>,
}

bot_method!(GetUserProfilePhotos: "getUserProfilePhotos" -> UserProfilePhotos);

impl GetUserProfilePhotos {
    pub fn new(user_id: i64) -> Self {
        Self { user_id, offset: None, limit: None }
    }
}

/// Prepare a file of up to 20 MB for download.
#[derive(Clone, Debug, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

bot_method!(GetFile: "getFile" -> File, required(file_id));

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self { file_id: file_id.into() }
    }
}
