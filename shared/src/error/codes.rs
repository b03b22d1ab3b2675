//! Numeric error codes
//!
//! Codes travel as plain numbers (`"code": 1001`) so any client can switch
//! on them. Ranges are listed in the module docs of [`crate::error`].

use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    ValidationFailed = 2,
    /// Unknown route or generic missing resource
    NotFound = 3,
    /// Duplicate caller-supplied id
    AlreadyExists = 4,
    /// Body is not valid JSON for the endpoint
    InvalidFormat = 6,
    RequiredField = 7,

    // ==================== 1xxx: Sponsor ====================
    SponsorNotFound = 1001,
    /// Status is not one of the pipeline values
    InvalidStatus = 1002,
    /// Tier is not one of bronze/silver/gold/title
    InvalidTier = 1003,

    // ==================== 2xxx: Deliverable ====================
    DeliverableNotFound = 2001,
    /// Due date is not a YYYY-MM-DD date
    InvalidDueDate = 2002,

    // ==================== 3xxx: Template / Outreach ====================
    TemplateNotFound = 3001,
    /// Provider rejected the send for any other reason
    EmailSendFailed = 3101,
    /// Provider answered 403
    EmailSenderNotVerified = 3102,
    /// Provider answered 401
    EmailInvalidApiKey = 3103,

    // ==================== 4xxx: Tier ====================
    TierNotFound = 4001,
    InvalidPrice = 4002,

    // ==================== 5xxx: Marketplace ====================
    ListNotFound = 5001,
    /// Import request had no contacts
    ImportEmpty = 5002,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    /// Data file could not be written
    StorageError = 9002,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 20] = [
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidFormat,
        ErrorCode::RequiredField,
        ErrorCode::SponsorNotFound,
        ErrorCode::InvalidStatus,
        ErrorCode::InvalidTier,
        ErrorCode::DeliverableNotFound,
        ErrorCode::InvalidDueDate,
        ErrorCode::TemplateNotFound,
        ErrorCode::EmailSendFailed,
        ErrorCode::EmailSenderNotVerified,
        ErrorCode::EmailInvalidApiKey,
        ErrorCode::TierNotFound,
        ErrorCode::InvalidPrice,
        ErrorCode::ListNotFound,
        ErrorCode::ImportEmpty,
        ErrorCode::InternalError,
        ErrorCode::StorageError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message when the error carries no custom one
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::SponsorNotFound => "Sponsor not found",
            ErrorCode::InvalidStatus => "Invalid status",
            ErrorCode::InvalidTier => "Invalid tier",
            ErrorCode::DeliverableNotFound => "Deliverable not found",
            ErrorCode::InvalidDueDate => "Invalid due date, expected YYYY-MM-DD",
            ErrorCode::TemplateNotFound => "Template not found",
            ErrorCode::EmailSendFailed => "Failed to send email",
            ErrorCode::EmailSenderNotVerified => {
                "Sender email not verified with the email provider"
            }
            ErrorCode::EmailInvalidApiKey => "Invalid email provider API key",
            ErrorCode::TierNotFound => "Tier not found",
            ErrorCode::InvalidPrice => "Invalid price",
            ErrorCode::ListNotFound => "Marketplace list not found",
            ErrorCode::ImportEmpty => "No sponsors to import",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Storage error",
        }
    }

    /// Unknown ids are 404, duplicates 409, provider and storage failures 500,
    /// everything else is the caller's fault (400).
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound
            | Self::SponsorNotFound
            | Self::DeliverableNotFound
            | Self::TemplateNotFound
            | Self::TierNotFound
            | Self::ListNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists => StatusCode::CONFLICT,

            Self::InternalError
            | Self::StorageError
            | Self::EmailSendFailed
            | Self::EmailSenderNotVerified
            | Self::EmailInvalidApiKey => StatusCode::INTERNAL_SERVER_ERROR,

            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that is not a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
