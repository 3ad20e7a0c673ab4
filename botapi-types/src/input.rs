//! Outgoing files and media.
//!
//! A file can be sent three ways: by the `file_id` of a file already on
//! Telegram's servers, by an HTTP URL Telegram fetches itself, or by
//! uploading bytes. Uploads serialize as `attach://<name>` and travel as a
//! separate part of a `multipart/form-data` request.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::message::{MessageEntity, ParseMode};
use crate::serde_util::is_false;

// ─── InputFile ────────────────────────────────────────────────────────────────

/// A file to send.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum InputFile {
    /// `file_id` of a file that already exists on Telegram's servers.
    FileId(String),
    /// HTTP URL for Telegram to download.
    Url(String),
    /// New file content.
    Upload(UploadFile),
}

/// Bytes uploaded under an attach name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UploadFile {
    /// Attach name and file name of the multipart part. Must be unique within a request.
    pub name: String,
    pub data: Vec<u8>,
}

impl InputFile {
    pub fn file_id(id: impl Into<String>) -> Self { Self::FileId(id.into()) }

    pub fn url(url: impl Into<String>) -> Self { Self::Url(url.into()) }

    /// Upload `data` as a new file named `name`.
    pub fn upload(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Upload(UploadFile { name: name.into(), data: data.into() })
    }

    /// The upload part, if this file is sent as new content.
    pub fn as_upload(&self) -> Option<&UploadFile> {
        match self {
            Self::Upload(u) => Some(u),
            _ => None,
        }
    }

    /// `true` unless this is an empty id or URL.
    pub fn is_present(&self) -> bool {
        match self {
            Self::FileId(s) | Self::Url(s) => !s.is_empty(),
            Self::Upload(u) => !u.name.is_empty(),
        }
    }
}

impl UploadFile {
    /// The value sent in the JSON field that references this upload.
    pub fn attach_uri(&self) -> String {
        format!("attach://{}", self.name)
    }
}

impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::FileId(s) | Self::Url(s) => serializer.serialize_str(s),
            Self::Upload(u) => serializer.serialize_str(&u.attach_uri()),
        }
    }
}

impl fmt::Debug for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileId(s) => f.debug_tuple("FileId").field(s).finish(),
            Self::Url(s)    => f.debug_tuple("Url").field(s).finish(),
            Self::Upload(u) => fmt::Debug::fmt(u, f),
        }
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish()
    }
}

// ─── InputMedia ───────────────────────────────────────────────────────────────

/// Content of a media message to be sent, discriminated by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Animation(InputMediaAnimation),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    /// Every file this media item uploads: the media itself and its thumbnail.
    pub fn uploads(&self) -> Vec<&UploadFile> {
        let (media, thumbnail) = match self {
            Self::Photo(m)     => (&m.media, None),
            Self::Video(m)     => (&m.media, m.thumbnail.as_ref()),
            Self::Animation(m) => (&m.media, m.thumbnail.as_ref()),
            Self::Audio(m)     => (&m.media, m.thumbnail.as_ref()),
            Self::Document(m)  => (&m.media, m.thumbnail.as_ref()),
        };
        media.as_upload().into_iter()
            .chain(thumbnail.and_then(InputFile::as_upload))
            .collect()
    }

    pub fn media(&self) -> &InputFile {
        match self {
            Self::Photo(m)     => &m.media,
            Self::Video(m)     => &m.media,
            Self::Animation(m) => &m.media,
            Self::Audio(m)     => &m.media,
            Self::Document(m)  => &m.media,
        }
    }
}

impl From<InputMediaPhoto> for InputMedia {
    fn from(m: InputMediaPhoto) -> Self { Self::Photo(m) }
}

impl From<InputMediaVideo> for InputMedia {
    fn from(m: InputMediaVideo) -> Self { Self::Video(m) }
}

impl From<InputMediaAnimation> for InputMedia {
    fn from(m: InputMediaAnimation) -> Self { Self::Animation(m) }
}

impl From<InputMediaAudio> for InputMedia {
    fn from(m: InputMediaAudio) -> Self { Self::Audio(m) }
}

impl From<InputMediaDocument> for InputMedia {
    fn from(m: InputMediaDocument) -> Self { Self::Document(m) }
}

/// A photo to be sent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InputMediaPhoto {
    pub media: InputFile,
    /// 0-1024 characters after entity parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:       Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "is_false")]
    pub show_caption_above_media: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub has_spoiler: bool,
}

impl InputMediaPhoto {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            show_caption_above_media: false,
            has_spoiler: false,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into()); self
    }
}

/// A video to be sent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InputMediaVideo {
    pub media: InputFile,
    /// JPEG under 200 kB, at most 320 px per side. Ignored unless the video is uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:        Option<InputFile>,
    /// 0-1024 characters after entity parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:       Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "is_false")]
    pub show_caption_above_media: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width:    Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height:   Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
    #[serde(skip_serializing_if = "is_false")]
    pub has_spoiler: bool,
}

impl InputMediaVideo {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            show_caption_above_media: false,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
            has_spoiler: false,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into()); self
    }

    pub fn thumbnail(mut self, thumbnail: InputFile) -> Self {
        self.thumbnail = Some(thumbnail); self
    }

    /// Width, height and duration in seconds.
    pub fn dimensions(mut self, width: u32, height: u32, duration: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self.duration = Some(duration);
        self
    }

    pub fn supports_streaming(mut self, v: bool) -> Self {
        self.supports_streaming = Some(v); self
    }

    pub fn spoiler(mut self, v: bool) -> Self {
        self.has_spoiler = v; self
    }
}

/// A GIF or soundless H.264/MPEG-4 AVC video to be sent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InputMediaAnimation {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:        Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:       Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width:    Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height:   Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub has_spoiler: bool,
}

impl InputMediaAnimation {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            width: None,
            height: None,
            duration: None,
            has_spoiler: false,
        }
    }
}

/// An audio file to be treated as music.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InputMediaAudio {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:        Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:       Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration:  Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title:     Option<String>,
}

impl InputMediaAudio {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            duration: None,
            performer: None,
            title: None,
        }
    }
}

/// A general file to be sent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InputMediaDocument {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:        Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode:       Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    /// Only meaningful for uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

impl InputMediaDocument {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            disable_content_type_detection: None,
        }
    }
}
