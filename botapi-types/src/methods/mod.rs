//! One request struct per Bot API method.
//!
//! Every struct implements [`Method`](crate::Method): its fields serialize
//! to the request body (absent optionals are omitted), `NAME` is the remote
//! method name and `Response` the type of the envelope's `result`.
//!
//! Required parameters are taken by `new`; optional ones are public fields,
//! and the most common ones also have chained setters.

use crate::chat_id::ChatId;
use crate::input::{InputFile, InputMedia, UploadFile};
use crate::InvalidRequest;

/// Implements [`Method`](crate::Method) for a request struct.
///
/// `required(..)` lists the fields [`validate`](crate::Method::validate)
/// checks for presence; `uploads(..)` lists the fields whose
/// [`InputFile::Upload`]s travel as multipart parts. `validate` also rejects
/// two different uploads under one name.
macro_rules! bot_method {
    (
        $ty:ident : $name:literal -> $resp:ty
        $(, required($($req:ident),+ $(,)?))?
        $(, uploads($($up:ident),+ $(,)?))?
    ) => {
        impl $crate::Method for $ty {
            const NAME: &'static str = $name;
            type Response = $resp;

            fn validate(&self) -> Result<(), $crate::InvalidRequest> {
                $($( $crate::methods::require(&self.$req, stringify!($req))?; )+)?
                $crate::methods::distinct_uploads(&$crate::Method::uploads(self))
            }

            fn uploads(&self) -> Vec<&$crate::input::UploadFile> {
                #[allow(unused_mut)]
                let mut files = Vec::new();
                $($( $crate::methods::Attachments::collect(&self.$up, &mut files); )+)?
                files
            }
        }
    };
}

mod bot;
mod chats;
mod inline;
mod media;
mod messages;
mod passport;
mod updates;

pub use bot::*;
pub use chats::*;
pub use inline::*;
pub use media::*;
pub use messages::*;
pub use passport::*;
pub use updates::*;

// ─── Parameter presence ───────────────────────────────────────────────────────

/// A value a required parameter can be checked against.
pub(crate) trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool { !self.is_empty() }
}

impl Presence for ChatId {
    fn is_present(&self) -> bool { !self.is_empty() }
}

impl Presence for InputFile {
    fn is_present(&self) -> bool { InputFile::is_present(self) }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool { !self.is_empty() }
}

pub(crate) fn require<T: Presence>(value: &T, name: &'static str) -> Result<(), InvalidRequest> {
    if value.is_present() { Ok(()) } else { Err(InvalidRequest::MissingParameter(name)) }
}

/// Uploads are referenced by name, so one name may only stand for one content.
/// The same file listed twice is fine.
pub(crate) fn distinct_uploads(files: &[&UploadFile]) -> Result<(), InvalidRequest> {
    for (i, a) in files.iter().enumerate() {
        if files[..i].iter().any(|b| b.name == a.name && b.data != a.data) {
            return Err(InvalidRequest::DuplicateUpload(a.name.clone()));
        }
    }
    Ok(())
}

// ─── Upload collection ────────────────────────────────────────────────────────

/// Something that may carry files to upload.
pub(crate) trait Attachments {
    fn collect<'a>(&'a self, out: &mut Vec<&'a UploadFile>);
}

impl Attachments for InputFile {
    fn collect<'a>(&'a self, out: &mut Vec<&'a UploadFile>) {
        out.extend(self.as_upload());
    }
}

impl Attachments for InputMedia {
    fn collect<'a>(&'a self, out: &mut Vec<&'a UploadFile>) {
        out.extend(self.uploads());
    }
}

impl<T: Attachments> Attachments for Option<T> {
    fn collect<'a>(&'a self, out: &mut Vec<&'a UploadFile>) {
        if let Some(v) = self { v.collect(out); }
    }
}

impl<T: Attachments> Attachments for Vec<T> {
    fn collect<'a>(&'a self, out: &mut Vec<&'a UploadFile>) {
        for v in self { v.collect(out); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputMediaPhoto;
    use crate::Method;

    #[test]
    fn empty_handle_is_missing() {
        let req = SetChatTitle::new("", "title");
        assert_eq!(req.validate(), Err(InvalidRequest::MissingParameter("chat_id")));
    }

    #[test]
    fn same_name_for_different_uploads_is_rejected() {
        let req = SendMediaGroup::new(42_i64, vec![
            InputMedia::Photo(InputMediaPhoto::new(InputFile::upload("image.jpg", vec![1]))),
            InputMedia::Photo(InputMediaPhoto::new(InputFile::upload("image.jpg", vec![2]))),
        ]);
        assert_eq!(req.validate(), Err(InvalidRequest::DuplicateUpload("image.jpg".into())));
    }

    #[test]
    fn repeated_identical_upload_is_accepted() {
        let file = InputFile::upload("clip.mp4", vec![7, 7]);
        let req = SendVideo::new(42_i64, file.clone()).thumbnail(file);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn numeric_chat_id_is_always_present() {
        assert!(SetChatTitle::new(0_i64, "title").validate().is_ok());
    }

    #[test]
    fn uploads_include_thumbnail() {
        let req = SendVideo::new(42_i64, InputFile::upload("clip.mp4", vec![1, 2, 3]))
            .thumbnail(InputFile::upload("thumb.jpg", vec![4]));
        let names: Vec<_> = req.uploads().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["clip.mp4", "thumb.jpg"]);
    }

    #[test]
    fn remote_files_need_no_multipart() {
        let req = SendPhoto::new(42_i64, InputFile::file_id("AgACAgIAAxk"));
        assert!(req.uploads().is_empty());
    }
}
