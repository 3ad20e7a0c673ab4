//! Telegram Passport: data shared with the bot and errors reported back.

use serde::{Deserialize, Serialize};

/// Data shared with the bot by the user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassportData {
    pub data:        Vec<EncryptedPassportElement>,
    pub credentials: EncryptedCredentials,
}

/// A file uploaded to Telegram Passport, in JPEG format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassportFile {
    pub file_id:        String,
    pub file_unique_id: String,
    pub file_size:      u64,
    /// Unix time the file was uploaded.
    pub file_date:      i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptedPassportElementType {
    PersonalDetails,
    Passport,
    DriverLicense,
    IdentityCard,
    InternalPassport,
    Address,
    UtilityBill,
    BankStatement,
    RentalAgreement,
    PassportRegistration,
    TemporaryRegistration,
    PhoneNumber,
    Email,
}

/// One document or other piece of Passport data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,
    /// Base64-encoded encrypted data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data:         Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email:        Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files:        Option<Vec<PassportFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_side:   Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_side: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selfie:       Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation:  Option<Vec<PassportFile>>,
    /// Base64-encoded element hash, used in [`PassportElementError::Unspecified`].
    pub hash: String,
}

/// Data required for decrypting and authenticating [`EncryptedPassportElement`]s.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncryptedCredentials {
    pub data:   String,
    pub hash:   String,
    pub secret: String,
}

// ─── PassportElementError ─────────────────────────────────────────────────────

/// An error in Passport data the user must fix, discriminated by `source`.
///
/// The user cannot re-submit their Passport until the error is resolved:
/// each variant documents the change that resolves it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PassportElementError {
    /// Resolved when the field's value changes.
    Data {
        #[serde(rename = "type")]
        kind:       EncryptedPassportElementType,
        field_name: String,
        data_hash:  String,
        message:    String,
    },
    /// Resolved when the file with the front side of the document changes.
    FrontSide {
        #[serde(rename = "type")]
        kind:      EncryptedPassportElementType,
        file_hash: String,
        message:   String,
    },
    /// Resolved when the file with the reverse side of the document changes.
    ReverseSide {
        #[serde(rename = "type")]
        kind:      EncryptedPassportElementType,
        file_hash: String,
        message:   String,
    },
    /// Resolved when the file with the selfie changes.
    Selfie {
        #[serde(rename = "type")]
        kind:      EncryptedPassportElementType,
        file_hash: String,
        message:   String,
    },
    /// Resolved when the document scan changes.
    File {
        #[serde(rename = "type")]
        kind:      EncryptedPassportElementType,
        file_hash: String,
        message:   String,
    },
    /// Resolved when the list of document scans changes.
    Files {
        #[serde(rename = "type")]
        kind:        EncryptedPassportElementType,
        file_hashes: Vec<String>,
        message:     String,
    },
    /// Resolved when one file of the translation changes.
    TranslationFile {
        #[serde(rename = "type")]
        kind:      EncryptedPassportElementType,
        file_hash: String,
        message:   String,
    },
    /// Resolved when the list of translation files changes.
    TranslationFiles {
        #[serde(rename = "type")]
        kind:        EncryptedPassportElementType,
        file_hashes: Vec<String>,
        message:     String,
    },
    /// Resolved when new data is added.
    Unspecified {
        #[serde(rename = "type")]
        kind:         EncryptedPassportElementType,
        element_hash: String,
        message:      String,
    },
}

impl PassportElementError {
    /// Wire value of the `source` discriminator.
    pub fn source(&self) -> &'static str {
        match self {
            Self::Data { .. }             => "data",
            Self::FrontSide { .. }        => "front_side",
            Self::ReverseSide { .. }      => "reverse_side",
            Self::Selfie { .. }           => "selfie",
            Self::File { .. }             => "file",
            Self::Files { .. }            => "files",
            Self::TranslationFile { .. }  => "translation_file",
            Self::TranslationFiles { .. } => "translation_files",
            Self::Unspecified { .. }      => "unspecified",
        }
    }

    pub fn element_type(&self) -> EncryptedPassportElementType {
        match self {
            Self::Data { kind, .. }
            | Self::FrontSide { kind, .. }
            | Self::ReverseSide { kind, .. }
            | Self::Selfie { kind, .. }
            | Self::File { kind, .. }
            | Self::Files { kind, .. }
            | Self::TranslationFile { kind, .. }
            | Self::TranslationFiles { kind, .. }
            | Self::Unspecified { kind, .. } => *kind,
        }
    }

    /// Error message shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::Data { message, .. }
            | Self::FrontSide { message, .. }
            | Self::ReverseSide { message, .. }
            | Self::Selfie { message, .. }
            | Self::File { message, .. }
            | Self::Files { message, .. }
            | Self::TranslationFile { message, .. }
            | Self::TranslationFiles { message, .. }
            | Self::Unspecified { message, .. } => message,
        }
    }

    /// An issue with one file of a document's translation.
    pub fn translation_file(
        kind:      EncryptedPassportElementType,
        file_hash: impl Into<String>,
        message:   impl Into<String>,
    ) -> Self {
        Self::TranslationFile { kind, file_hash: file_hash.into(), message: message.into() }
    }

    /// An issue in one field of the data.
    pub fn data(
        kind:       EncryptedPassportElementType,
        field_name: impl Into<String>,
        data_hash:  impl Into<String>,
        message:    impl Into<String>,
    ) -> Self {
        Self::Data {
            kind,
            field_name: field_name.into(),
            data_hash:  data_hash.into(),
            message:    message.into(),
        }
    }

    /// An issue in an unspecified place, resolved when new data is added.
    pub fn unspecified(
        kind:         EncryptedPassportElementType,
        element_hash: impl Into<String>,
        message:      impl Into<String>,
    ) -> Self {
        Self::Unspecified { kind, element_hash: element_hash.into(), message: message.into() }
    }
}
