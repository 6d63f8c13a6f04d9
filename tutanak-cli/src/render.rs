//! `tutanak render`

use std::path::Path;

use serde_json::{Value, json};
use shared::error::AppResult;
use tutanak_core::Session;
use tutanak_core::money::format_amount;

use crate::config::Config;
use crate::draft::{Draft, load_catalog};

/// Result of rendering one draft
#[derive(Debug)]
pub enum RenderOutcome {
    /// The gate is closed; nothing was rendered
    Blocked(Vec<String>),
    Document(String),
    Json(Value),
}

/// Sentences, totals and summary for machine consumers
pub fn session_json(session: &Session) -> Value {
    let totals = session.totals();
    let per_currency: serde_json::Map<String, Value> = totals
        .per_currency
        .iter()
        .map(|(currency, sum)| (currency.code().to_string(), Value::String(format_amount(sum))))
        .collect();

    json!({
        "sentences": session.legal_text(),
        "total": totals.display_string,
        "perCurrency": per_currency,
        "summary": session.summary_text(),
    })
}

pub fn render(
    config: &Config,
    draft_path: &Path,
    catalog_path: &Path,
    as_json: bool,
) -> AppResult<RenderOutcome> {
    let catalog = load_catalog(catalog_path)?;
    tracing::info!(path = %catalog_path.display(), records = catalog.len(), "Catalog ready");

    let draft = Draft::load(draft_path)?;
    let session = draft.into_session(&catalog);

    let issues = session.issues();
    if !issues.is_empty() {
        tracing::warn!(count = issues.len(), "Draft is not ready for rendering");
        return Ok(RenderOutcome::Blocked(
            issues.iter().map(|i| i.message()).collect(),
        ));
    }

    if as_json {
        Ok(RenderOutcome::Json(session_json(&session)))
    } else {
        Ok(RenderOutcome::Document(session.render_document(&config.layout())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CATALOG: &str = r#"[
        {"RMC":"M126334-0001","BRAND":"ROLEX","CATEGORY":"SAAT","FAMILY":"DATEJUST","SIZE":"41"}
    ]"#;

    fn draft(confirmed: bool) -> String {
        format!(
            r#"{{
                "product": {{"brand": "ROLEX", "category": "WATCH"}},
                "form": {{
                    "customerName": "Serdar Demir",
                    "referenceCode": "M126334-0001",
                    "serialNumber": "AB123456",
                    "recipientName": "Serdar Demir"
                }},
                "payments": [
                    {{"type": "CASH", "amount": "5.000", "currency": "EUR", "date": "15.01.2024"}},
                    {{"type": "CREDIT_ACCOUNT", "amount": "2.000", "currency": "EUR", "date": "15.01.2024"}}
                ],
                "confirmed": {},
                "date": "15.01.2024"
            }}"#,
            confirmed
        )
    }

    fn setup(confirmed: bool) -> (tempfile::TempDir, std::path::PathBuf, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.json");
        let draft_path = dir.path().join("draft.json");
        fs::write(&catalog, CATALOG).unwrap();
        fs::write(&draft_path, draft(confirmed)).unwrap();
        (dir, draft_path, catalog)
    }

    fn config() -> Config {
        Config::from_source(|_| None)
    }

    #[test]
    fn test_render_document() {
        let (_dir, draft, catalog) = setup(true);
        let outcome = render(&config(), &draft, &catalog, false).unwrap();
        let RenderOutcome::Document(doc) = outcome else {
            panic!("expected document, got {:?}", outcome);
        };
        assert!(doc.contains("İZMİR - 15.01.2024"));
        assert!(doc.contains("Toplam: 5.000 € + 2.000 € Cari"));
    }

    #[test]
    fn test_render_json() {
        let (_dir, draft, catalog) = setup(true);
        let outcome = render(&config(), &draft, &catalog, true).unwrap();
        let RenderOutcome::Json(value) = outcome else {
            panic!("expected json, got {:?}", outcome);
        };
        assert_eq!(value["sentences"].as_array().unwrap().len(), 3);
        assert_eq!(value["total"], "7.000 €");
        assert_eq!(value["perCurrency"]["EUR"], "7.000");
        assert_eq!(value["summary"], "5.000 € + 2.000 € Cari");
    }

    #[test]
    fn test_unconfirmed_draft_is_blocked() {
        let (_dir, draft, catalog) = setup(false);
        let outcome = render(&config(), &draft, &catalog, false).unwrap();
        let RenderOutcome::Blocked(issues) = outcome else {
            panic!("expected blocked, got {:?}", outcome);
        };
        assert_eq!(issues, vec!["Ürün kontrol onayı verilmedi.".to_string()]);
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let (dir, draft, _) = setup(true);
        let missing = dir.path().join("missing.json");
        assert!(render(&config(), &draft, &missing, false).is_err());
    }
}
