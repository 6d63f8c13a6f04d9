//! Shared types for the delivery receipt (tutanak) workspace
//!
//! Domain models used by the engine and the CLI, the unified error type,
//! and small utilities (session date, payment ids).

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{
    Brand, Category, Currency, FormData, FormField, Payment, PaymentField, PaymentId,
    PaymentType, ProductLine, ProductRecord,
};
pub use serde::{Deserialize, Serialize};
