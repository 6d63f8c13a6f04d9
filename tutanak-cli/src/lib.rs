//! Command line front end for the tutanak engine
//!
//! Loads a catalog and a draft from JSON, replays the draft through an
//! editing session and prints the document.

pub mod config;
pub mod draft;
pub mod logger;
pub mod render;

pub use config::Config;
pub use draft::{Draft, load_catalog};
pub use render::{RenderOutcome, render};
