//! Messages and the objects that decorate them.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::chat::{Chat, User};
use crate::chat_id::ChatId;
use crate::keyboard::InlineKeyboardMarkup;
use crate::media::{
    Animation, Audio, Contact, Dice, Document, Location, PhotoSize, Sticker, Venue, Video,
    VideoNote, Voice,
};
use crate::passport::PassportData;
use crate::serde_util::is_false;

// ─── Message ──────────────────────────────────────────────────────────────────

/// A message in a chat.
///
/// A message whose `date` is `0` was deleted or is otherwise inaccessible to
/// the bot; only `chat` and `message_id` are meaningful then.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    /// Forum topic the message belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    /// Empty for messages sent to channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// Sender when the message is sent on behalf of a chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,
    pub date: i64,
    pub chat: Chat,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_topic_message: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_automatic_forward: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_bot: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<i64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_protected_content: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation:  Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio:      Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document:   Option<Document>,
    /// Available sizes of the photo, smallest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo:      Option<Vec<PhotoSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker:    Option<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video:      Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_note: Option<VideoNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice:      Option<Voice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:    Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_media_spoiler: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact:    Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dice:       Option<Dice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue:      Option<Venue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location:   Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_members: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_chat_member: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_title:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_photo:   Option<Vec<PhotoSize>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub delete_chat_photo: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub group_chat_created: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub supergroup_chat_created: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub channel_chat_created: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id:   Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_from_chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_data:  Option<PassportData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup:   Option<InlineKeyboardMarkup>,
}

impl Message {
    /// The message text, or the caption for media messages.
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text.as_deref().or(self.caption.as_deref())
    }

    /// `false` for deleted or otherwise inaccessible messages (`date == 0`).
    pub fn is_accessible(&self) -> bool {
        self.date != 0
    }

    /// `true` if the text starts with a `bot_command` entity at offset 0.
    pub fn is_command(&self) -> bool {
        self.entities.as_deref().unwrap_or_default().iter().any(|e| {
            e.kind == MessageEntityType::BotCommand && e.offset == 0
        })
    }

    /// Entities of either the text or the caption, with the substring each one covers.
    ///
    /// Offsets are in UTF-16 code units, as Telegram reports them.
    pub fn parse_entities(&self) -> Vec<(&MessageEntity, String)> {
        let (Some(text), Some(entities)) = (
            self.text_or_caption(),
            self.entities.as_ref().or(self.caption_entities.as_ref()),
        ) else {
            return Vec::new();
        };
        let utf16: Vec<u16> = text.encode_utf16().collect();
        entities.iter().filter_map(|e| {
            let start = e.offset as usize;
            let end   = start.checked_add(e.length as usize)?;
            let slice = utf16.get(start..end)?;
            Some((e, String::from_utf16_lossy(slice)))
        }).collect()
    }
}

/// Unique identifier of a message, as returned by `copyMessage`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId {
    pub message_id: i64,
}

/// Result of edit methods: the edited [`Message`], or `true` for inline messages.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageOrTrue {
    Message(Box<Message>),
    True,
}

impl Serialize for MessageOrTrue {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Message(m) => m.serialize(s),
            Self::True       => s.serialize_bool(true),
        }
    }
}

impl<'de> Deserialize<'de> for MessageOrTrue {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Message(Box<Message>),
            Flag(bool),
        }

        match Repr::deserialize(d)? {
            Repr::Message(m) => Ok(Self::Message(m)),
            Repr::Flag(true) => Ok(Self::True),
            Repr::Flag(false) => Err(de::Error::custom("expected a message or `true`, got `false`")),
        }
    }
}

// ─── Entities ─────────────────────────────────────────────────────────────────

/// A special entity in a text message: hashtags, usernames, URLs, formatting.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind:   MessageEntityType,
    /// Offset in UTF-16 code units.
    pub offset: u32,
    /// Length in UTF-16 code units.
    pub length: u32,
    /// For `text_link` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url:    Option<String>,
    /// For `text_mention` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user:   Option<User>,
    /// For `pre` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// For `custom_emoji` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

impl MessageEntity {
    pub fn new(kind: MessageEntityType, offset: u32, length: u32) -> Self {
        Self { kind, offset, length, url: None, user: None, language: None, custom_emoji_id: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityType {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Blockquote,
    ExpandableBlockquote,
    Code,
    Pre,
    TextLink,
    TextMention,
    CustomEmoji,
    /// An entity type newer than this crate.
    #[serde(other)]
    Unknown,
}

/// Formatting syntax of a text or caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    /// Legacy Markdown, kept for backward compatibility.
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

// ─── Sending options ──────────────────────────────────────────────────────────

/// Options for link preview generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkPreviewOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled:        Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url:                Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_small_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_large_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_above_text:    Option<bool>,
}

impl LinkPreviewOptions {
    pub fn disabled() -> Self {
        Self { is_disabled: Some(true), ..Default::default() }
    }
}

/// Which message an outgoing message replies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplyParameters {
    pub message_id: i64,
    /// Set when replying to a message in a different chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id:    Option<ChatId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    /// Quoted part of the replied message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote:      Option<String>,
}

impl ReplyParameters {
    pub fn new(message_id: i64) -> Self {
        Self { message_id, chat_id: None, allow_sending_without_reply: None, quote: None }
    }
}
