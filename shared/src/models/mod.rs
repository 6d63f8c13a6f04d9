//! Data models
//!
//! Shared between the engine, the CLI and the JSON drafts it reads.

pub mod form;
pub mod payment;
pub mod product;

// Re-exports
pub use form::*;
pub use payment::*;
pub use product::*;
