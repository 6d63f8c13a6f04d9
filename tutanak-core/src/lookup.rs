//! Reference-code (RMC) lookup
//!
//! The catalog itself is an injected collaborator: the engine calls
//! [`ProductCatalog::find_exact`] and turns the answer into a
//! [`LookupState`] checked against the selected product line. No cache is
//! held here.

use std::collections::HashMap;

use shared::error::{AppError, AppResult};
use shared::models::{Brand, Category, ProductLine, ProductRecord};

use crate::grammar::to_turkish_upper;

pub const MSG_NOT_FOUND: &str = "RMC kodu bulunamadı. Lütfen doğru kodu girdiğinizden emin olun.";
pub const MSG_FAILED: &str = "RMC analizi sırasında bir hata oluştu.";

/// Exact-match product lookup by reference code
pub trait ProductCatalog {
    /// `Ok(None)` when the code is unknown; `Err` when the catalog itself
    /// could not answer.
    fn find_exact(&self, code: &str) -> AppResult<Option<ProductRecord>>;
}

/// Catalog normalizes keys the same way the form normalizes the typed code
fn catalog_key(code: &str) -> String {
    to_turkish_upper(code.trim())
}

/// Catalog held in memory, keyed by normalized RMC
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: HashMap<String, ProductRecord>,
}

impl InMemoryCatalog {
    pub fn new(records: impl IntoIterator<Item = ProductRecord>) -> Self {
        let records = records
            .into_iter()
            .filter(|r| !r.rmc.trim().is_empty())
            .map(|r| (catalog_key(&r.rmc), r))
            .collect();
        Self { records }
    }

    /// Load from a JSON array of catalog rows (`RMC`, `BRAND`, `CATEGORY`, ...)
    pub fn from_json(json: &str) -> AppResult<Self> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)
            .map_err(|e| AppError::catalog(format!("Invalid catalog JSON: {}", e)))?;
        let catalog = Self::new(records);
        tracing::debug!(count = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn find_exact(&self, code: &str) -> AppResult<Option<ProductRecord>> {
        Ok(self.records.get(&catalog_key(code)).cloned())
    }
}

/// Severity attached to a lookup message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    None,
    Error,
}

/// Outcome of the most recent lookup for the current code and product line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LookupState {
    /// No answer yet (or no code entered)
    #[default]
    Pending,
    /// Record found and consistent with the selected product line
    Found(ProductRecord),
    /// Record found but belongs to another brand or category
    Mismatch {
        record: ProductRecord,
        reason: String,
    },
    NotFound,
    /// The catalog failed to answer
    Failed(String),
}

impl LookupState {
    /// Record whose descriptive fields may be shown (found or mismatched)
    pub fn record(&self) -> Option<&ProductRecord> {
        match self {
            LookupState::Found(record) | LookupState::Mismatch { record, .. } => Some(record),
            _ => None,
        }
    }

    /// User-facing message, empty when there is nothing to say
    pub fn message(&self) -> &str {
        match self {
            LookupState::Pending | LookupState::Found(_) => "",
            LookupState::Mismatch { reason, .. } => reason,
            LookupState::NotFound => MSG_NOT_FOUND,
            LookupState::Failed(msg) => msg,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            LookupState::Pending | LookupState::Found(_) => Severity::None,
            _ => Severity::Error,
        }
    }

    /// Only a clean match opens the submission gate
    pub fn is_accepted(&self) -> bool {
        matches!(self, LookupState::Found(_))
    }
}

fn brand_display(raw: &str) -> String {
    Brand::from_label(raw)
        .map(|b| b.display_name().to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

fn category_display(raw: &str) -> String {
    Category::from_label(raw)
        .map(|c| c.display_name().to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Check a found record against the selected product line.
///
/// Brand is checked first. Category is only checked for Rolex, the one
/// brand with more than one category.
pub fn evaluate_record(line: ProductLine, record: ProductRecord) -> LookupState {
    if let Some(found) = non_blank(&record.brand)
        && !found.eq_ignore_ascii_case(line.brand().label())
    {
        let reason = format!(
            "Bu RMC kodu {} markasına ait. Şu anda {} seçili.",
            brand_display(found),
            line.brand().display_name()
        );
        return LookupState::Mismatch { record, reason };
    }

    if line.brand() == Brand::Rolex
        && let Some(found) = non_blank(&record.category)
        && Category::from_label(found) != Some(line.category())
    {
        let reason = format!(
            "Bu RMC kodu {} kategorisine ait. Şu anda {} kategorisi seçili.",
            category_display(found),
            line.category().display_name()
        );
        return LookupState::Mismatch { record, reason };
    }

    LookupState::Found(record)
}

/// Turn a catalog answer into a lookup state
pub fn evaluate(line: ProductLine, result: AppResult<Option<ProductRecord>>) -> LookupState {
    match result {
        Ok(Some(record)) => evaluate_record(line, record),
        Ok(None) => LookupState::NotFound,
        Err(e) => {
            tracing::warn!(error = %e, "Catalog lookup failed");
            LookupState::Failed(MSG_FAILED.to_string())
        }
    }
}

/// Query the catalog and evaluate the answer. Blank codes stay pending.
pub fn lookup(catalog: &dyn ProductCatalog, line: ProductLine, code: &str) -> LookupState {
    if code.trim().is_empty() {
        return LookupState::Pending;
    }
    evaluate(line, catalog.find_exact(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rmc: &str, brand: &str, category: &str) -> ProductRecord {
        ProductRecord {
            rmc: rmc.to_string(),
            brand: Some(brand.to_string()),
            category: Some(category.to_string()),
            family: Some("DATEJUST".to_string()),
            size: Some("41".to_string()),
            ..Default::default()
        }
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new([
            record("M126334-0001", "ROLEX", "SAAT"),
            record("M79360N-0001", "TUDOR", "SAAT"),
            record("M50501-00001", "ROLEX", "AKSESUAR"),
        ])
    }

    struct BrokenCatalog;

    impl ProductCatalog for BrokenCatalog {
        fn find_exact(&self, _code: &str) -> AppResult<Option<ProductRecord>> {
            Err(AppError::catalog("offline"))
        }
    }

    #[test]
    fn test_exact_match_is_case_and_space_insensitive() {
        let c = catalog();
        assert!(c.find_exact(" m126334-0001 ").unwrap().is_some());
        assert!(c.find_exact("M126334-0002").unwrap().is_none());
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_found() {
        let state = lookup(&catalog(), ProductLine::RolexWatch, "M126334-0001");
        assert!(state.is_accepted());
        assert_eq!(state.severity(), Severity::None);
        assert_eq!(state.message(), "");
        assert_eq!(state.record().unwrap().family.as_deref(), Some("DATEJUST"));
    }

    #[test]
    fn test_brand_mismatch_keeps_record() {
        let state = lookup(&catalog(), ProductLine::RolexWatch, "M79360N-0001");
        assert!(!state.is_accepted());
        assert_eq!(state.severity(), Severity::Error);
        assert_eq!(
            state.message(),
            "Bu RMC kodu Tudor markasına ait. Şu anda Rolex seçili."
        );
        assert!(state.record().is_some());
    }

    #[test]
    fn test_category_mismatch_for_rolex() {
        let state = lookup(&catalog(), ProductLine::RolexAccessory, "M126334-0001");
        assert_eq!(
            state.message(),
            "Bu RMC kodu Saat kategorisine ait. Şu anda Aksesuar kategorisi seçili."
        );
        assert!(!state.is_accepted());

        let state = lookup(&catalog(), ProductLine::RolexAccessory, "M50501-00001");
        assert!(state.is_accepted());
    }

    #[test]
    fn test_missing_brand_cell_is_not_a_mismatch() {
        let mut r = record("X", "", "");
        r.brand = None;
        assert!(evaluate_record(ProductLine::TudorWatch, r).is_accepted());
    }

    #[test]
    fn test_not_found_and_failed() {
        let state = lookup(&catalog(), ProductLine::RolexWatch, "NOPE");
        assert_eq!(state, LookupState::NotFound);
        assert_eq!(state.message(), MSG_NOT_FOUND);
        assert!(state.record().is_none());

        let state = lookup(&BrokenCatalog, ProductLine::RolexWatch, "M126334-0001");
        assert_eq!(state, LookupState::Failed(MSG_FAILED.to_string()));
        assert_eq!(state.severity(), Severity::Error);
    }

    #[test]
    fn test_blank_code_stays_pending() {
        assert_eq!(
            lookup(&catalog(), ProductLine::RolexWatch, "  "),
            LookupState::Pending
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"RMC":"M126334-0001","BRAND":"ROLEX","CATEGORY":"SAAT"},{"RMC":""}]"#;
        let c = InMemoryCatalog::from_json(json).unwrap();
        assert_eq!(c.len(), 1);
        assert!(InMemoryCatalog::from_json("{not json").is_err());
    }
}
