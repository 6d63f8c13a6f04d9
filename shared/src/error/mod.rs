//! Unified error system for the tutanak workspace
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::CatalogUnavailable);
//! assert_eq!(err.code.code(), 6003);
//!
//! let err = AppError::invalid_format("Invalid date format: 2024-01-15")
//!     .with_detail("field", "date");
//! assert!(err.details.is_some());
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
