use std::path::PathBuf;

use tutanak_core::DocumentLayout;
use tutanak_core::document::{DEFAULT_CITY, DEFAULT_WIDTH};

/// CLI configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TUTANAK_CATALOG | data/catalog.json | Catalog JSON path |
/// | TUTANAK_CITY | İZMİR | City printed in the document header |
/// | DOCUMENT_WIDTH | 96 | Text width in characters |
/// | LOG_LEVEL | info | trace, debug, info, warn or error; `RUST_LOG` overrides it |
/// | LOG_DIR | (unset) | Directory for daily log files |
/// | ENVIRONMENT | development | development, staging or production |
///
/// A `.env` file in the working directory is read first.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub city: String,
    pub document_width: usize,
    pub log_level: String,
    /// Log to daily files in this directory instead of stderr
    pub log_dir: Option<String>,
    pub environment: String,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (used by tests)
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        Self {
            catalog_path: non_empty("TUTANAK_CATALOG")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/catalog.json")),
            city: non_empty("TUTANAK_CITY").unwrap_or_else(|| DEFAULT_CITY.into()),
            document_width: non_empty("DOCUMENT_WIDTH")
                .and_then(|w| w.trim().parse().ok())
                .unwrap_or(DEFAULT_WIDTH),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn layout(&self) -> DocumentLayout {
        DocumentLayout {
            city: self.city.clone(),
            width: self.document_width,
        }
    }
}
