//! Unified error codes for the tutanak workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 5xxx: Payment errors
//! - 6xxx: Product errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 5xxx: Payment ====================
    /// Payment amount is invalid
    InvalidAmount = 5002,

    // ==================== 6xxx: Product ====================
    /// Brand/category combination does not exist
    InvalidProductLine = 6002,
    /// Catalog lookup failed
    CatalogUnavailable = 6003,

    // ==================== 9xxx: System ====================
    /// File read/write error
    IoError = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::InvalidAmount => "Invalid payment amount",
            ErrorCode::InvalidProductLine => "Brand and category combination does not exist",
            ErrorCode::CatalogUnavailable => "Product catalog is unavailable",
            ErrorCode::IoError => "File access error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
        match value {
            6 => Ok(ErrorCode::InvalidFormat),
            5002 => Ok(ErrorCode::InvalidAmount),
            6002 => Ok(ErrorCode::InvalidProductLine),
            6003 => Ok(ErrorCode::CatalogUnavailable),
            9006 => Ok(ErrorCode::IoError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
