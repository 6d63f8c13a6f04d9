//! Draft and catalog files
//!
//! A draft is the JSON form of one editing session: the product line, the
//! typed form fields, the payments and the inspection confirmation. It is
//! replayed through a [`Session`] so the same normalization and lookup rules
//! apply as for interactive input.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use shared::error::{AppError, AppResult};
use shared::models::{FormData, FormField, Payment, ProductLine};
use shared::util;
use tutanak_core::money::{self, MAX_AMOUNT};
use tutanak_core::{InMemoryCatalog, PaymentLedger, ProductCatalog, Session};

/// Fields typed by staff, applied before the reference code lookup
const TYPED_FIELDS: [FormField; 3] = [
    FormField::CustomerName,
    FormField::SerialNumber,
    FormField::RecipientName,
];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub product: ProductLine,
    #[serde(default)]
    pub form: FormData,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub confirmed: bool,
    /// Session date (`DD.MM.YYYY`); today when absent
    #[serde(default)]
    pub date: Option<String>,
}

impl Draft {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let draft: Draft = serde_json::from_str(json)?;
        if let Some(date) = &draft.date {
            util::parse_date(date)?;
        }
        for payment in &draft.payments {
            if !payment.date.trim().is_empty() {
                util::parse_date(&payment.date)?;
            }
            if let Some(value) = money::parse_amount(&payment.amount)
                && !money::is_amount_in_range(value)
            {
                return Err(AppError::invalid_amount(format!(
                    "Payment amount exceeds {}",
                    MAX_AMOUNT
                ))
                .with_detail("amount", payment.amount.clone()));
            }
        }
        Ok(draft)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::from(e).with_detail("path", path.display().to_string())
        })?;
        Self::from_json(&json)
    }

    /// Replay the draft into a fresh session
    pub fn into_session(self, catalog: &dyn ProductCatalog) -> Session {
        let date = self.date.unwrap_or_else(util::today);
        let mut session = Session::new(self.product, date);

        for field in TYPED_FIELDS {
            session.set_field(field, self.form.get(field));
        }
        session.set_field(FormField::ReferenceCode, &self.form.reference_code);
        session.lookup_with(catalog);

        // Accessory description may be typed when the catalog has none
        if session.form().is_blank(FormField::Description) && !self.form.description.is_empty() {
            session.set_field(FormField::Description, &self.form.description);
        }

        if !self.payments.is_empty() {
            *session.ledger_mut() = PaymentLedger::from_payments(self.payments);
        }
        session.set_confirmed(self.confirmed);
        session
    }
}

/// Load the catalog JSON file
pub fn load_catalog(path: &Path) -> AppResult<InMemoryCatalog> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::catalog(format!("Cannot read catalog {}: {}", path.display(), e))
    })?;
    InMemoryCatalog::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use shared::models::{Currency, PaymentType, ProductRecord};
    use std::io::Write;

    const DRAFT: &str = r#"{
        "product": {"brand": "ROLEX", "category": "WATCH"},
        "form": {
            "customerName": "ahmet yılmaz",
            "referenceCode": "m126334-0001",
            "serialNumber": "ab12-3456",
            "recipientName": "ayşe yılmaz"
        },
        "payments": [
            {"type": "WIRE_TRANSFER", "amount": "25000", "currency": "TRY", "date": "15.01.2024"},
            {"type": "cari", "amount": "2.000", "currency": "EUR"}
        ],
        "confirmed": true,
        "date": "16.01.2024"
    }"#;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new([ProductRecord {
            rmc: "M126334-0001".into(),
            brand: Some("ROLEX".into()),
            category: Some("SAAT".into()),
            family: Some("DATEJUST".into()),
            size: Some("41".into()),
            ..Default::default()
        }])
    }

    #[test]
    fn test_parse_draft() {
        let draft = Draft::from_json(DRAFT).unwrap();
        assert_eq!(draft.product, ProductLine::RolexWatch);
        assert_eq!(draft.payments.len(), 2);
        assert_eq!(draft.payments[1].payment_type, PaymentType::CreditAccount);
        assert_eq!(draft.payments[1].currency, Currency::Eur);
        assert!(draft.confirmed);
    }

    #[test]
    fn test_invalid_dates_are_rejected() {
        let bad = DRAFT.replace("16.01.2024", "2024-01-16");
        let err = Draft::from_json(&bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);

        let bad = DRAFT.replace("15.01.2024", "yarın");
        assert!(Draft::from_json(&bad).is_err());
    }

    #[test]
    fn test_tudor_accessory_is_rejected() {
        let bad = DRAFT.replace(
            "\"ROLEX\", \"category\": \"WATCH\"",
            "\"TUDOR\", \"category\": \"ACCESSORY\"",
        );
        assert!(Draft::from_json(&bad).is_err());
    }

    #[test]
    fn test_amount_beyond_limit_is_rejected() {
        let bad = DRAFT.replace("\"25000\"", "\"1.000.000.000.001\"");
        let err = Draft::from_json(&bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);
        assert_eq!(err.details.unwrap().get("amount").unwrap(), "1.000.000.000.001");

        let at_limit = DRAFT.replace("\"25000\"", "\"1.000.000.000.000\"");
        assert!(Draft::from_json(&at_limit).is_ok());
    }

    #[test]
    fn test_replay_into_session() {
        let session = Draft::from_json(DRAFT).unwrap().into_session(&catalog());
        let form = session.form();
        assert_eq!(form.customer_name, "AHMET YILMAZ");
        assert_eq!(form.serial_number, "AB123456");
        assert_eq!(form.reference_code, "M126334-0001");
        assert_eq!(form.family_name, "DATEJUST");
        assert_eq!(session.current_date(), "16.01.2024");
        assert_eq!(session.ledger().len(), 2);
        assert!(session.is_submittable());
    }

    #[test]
    fn test_load_from_files() {
        let mut draft_file = tempfile::NamedTempFile::new().unwrap();
        draft_file.write_all(DRAFT.as_bytes()).unwrap();
        assert!(Draft::load(draft_file.path()).is_ok());

        let mut catalog_file = tempfile::NamedTempFile::new().unwrap();
        catalog_file
            .write_all(br#"[{"RMC":"M126334-0001","BRAND":"ROLEX","CATEGORY":"SAAT"}]"#)
            .unwrap();
        assert_eq!(load_catalog(catalog_file.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = Draft::load(&missing).unwrap_err();
        assert_eq!(err.code, ErrorCode::IoError);

        let err = load_catalog(&missing).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);
    }
}
