//! Received media and files.
//!
//! `file_id` can be reused to resend a file; `file_unique_id` is stable
//! across bots and over time but cannot be used to download or resend.

use serde::{Deserialize, Serialize};

use crate::serde_util::is_false;

/// One size of a photo or a file / sticker thumbnail.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id:        String,
    pub file_unique_id: String,
    pub width:          u32,
    pub height:         u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size:      Option<u64>,
}

/// Animation file (GIF or H.264/MPEG-4 AVC video without sound).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animation {
    pub file_id:        String,
    pub file_unique_id: String,
    pub width:          u32,
    pub height:         u32,
    pub duration:       u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:      Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size:      Option<u64>,
}

/// Audio file to be treated as music.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Audio {
    pub file_id:        String,
    pub file_unique_id: String,
    pub duration:       u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size:      Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:      Option<PhotoSize>,
}

/// A general file, as opposed to photos, voice messages and audio files.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    pub file_id:        String,
    pub file_unique_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:      Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size:      Option<u64>,
}

/// A video file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Video {
    pub file_id:        String,
    pub file_unique_id: String,
    /// As defined by the sender.
    pub width:          u32,
    /// As defined by the sender.
    pub height:         u32,
    /// Seconds, as defined by the sender.
    pub duration:       u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:      Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size:      Option<u64>,
}

/// A round video message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoNote {
    pub file_id:        String,
    pub file_unique_id: String,
    /// Width and height (diameter) of the video.
    pub length:         u32,
    pub duration:       u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:      Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size:      Option<u64>,
}

/// A voice note.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voice {
    pub file_id:        String,
    pub file_unique_id: String,
    pub duration:       u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size:      Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id:        String,
    pub file_unique_id: String,
    /// `regular`, `mask` or `custom_emoji`.
    #[serde(rename = "type")]
    pub kind:           String,
    pub width:          u32,
    pub height:         u32,
    pub is_animated:    bool,
    pub is_video:       bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail:      Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji:          Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name:       Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub needs_repainting: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size:      Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub phone_number: String,
    pub first_name:   String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name:    Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id:      Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcard:        Option<String>,
}

/// An animated emoji that displays a random value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    pub emoji: String,
    pub value: u8,
}

/// A point on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude:  f64,
    pub longitude: f64,
    /// Radius of uncertainty in meters, 0-1500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy:    Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period:            Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading:                Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub location: Location,
    pub title:    String,
    pub address:  String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_type:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_id:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_type: Option<String>,
}

/// A file ready to be downloaded from `https://api.telegram.org/file/bot<token>/<file_path>`.
///
/// The link is valid for at least one hour after `getFile`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct File {
    pub file_id:        String,
    pub file_unique_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size:      Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path:      Option<String>,
}

/// A user's profile pictures.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProfilePhotos {
    pub total_count: u32,
    /// Up to four sizes for each photo.
    pub photos: Vec<Vec<PhotoSize>>,
}
