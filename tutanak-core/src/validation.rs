//! Serial number / reference code validation and the submission gate
//!
//! All predicates are infallible and pure. [`collect_form_issues`] lists the
//! failing gate conditions for display; [`is_form_submittable`] is true
//! exactly when that list is empty.

use std::fmt;

use shared::models::{Brand, FormData, FormField, ProductLine};

use crate::grammar::to_turkish_upper;
use crate::lookup::LookupState;

/// Minimum serial length for Rolex watches
pub const ROLEX_SERIAL_MIN: usize = 8;
/// Minimum serial length for Tudor watches
pub const TUDOR_SERIAL_MIN: usize = 7;

const REFERENCE_HEAD_LEN: usize = 8;
const REFERENCE_TAIL_LEN: usize = 4;

/// Minimum serial length; 0 for accessories, which need no serial
pub const fn min_serial_length(line: ProductLine) -> usize {
    match line {
        ProductLine::RolexWatch => ROLEX_SERIAL_MIN,
        ProductLine::TudorWatch => TUDOR_SERIAL_MIN,
        ProductLine::RolexAccessory => 0,
    }
}

/// Input cap applied while typing (brand-wide, accessories included)
pub const fn max_serial_length(brand: Brand) -> usize {
    match brand {
        Brand::Rolex => ROLEX_SERIAL_MIN,
        Brand::Tudor => TUDOR_SERIAL_MIN,
    }
}

/// Hint shown under the serial field
pub fn serial_description(line: ProductLine) -> String {
    match min_serial_length(line) {
        0 => "Cufflinks için seri numarası gerekmez".to_string(),
        min => format!("En az {} karakter, en az 1 harf ve 1 rakam içermeli", min),
    }
}

/// Serial rule: at least one Latin letter, one digit and the brand minimum
/// length after trimming. Accessories accept anything.
pub fn is_serial_valid(serial: &str, line: ProductLine) -> bool {
    if line.is_accessory() {
        return true;
    }

    let trimmed = serial.trim();
    if trimmed.is_empty() {
        return false;
    }

    let has_letter = trimmed.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = trimmed.chars().any(|c| c.is_ascii_digit());

    has_letter && has_digit && trimmed.chars().count() >= min_serial_length(line)
}

/// Presence only; the catalog is not consulted
pub fn is_reference_code_well_formed(code: &str) -> bool {
    !code.trim().is_empty()
}

/// Structural shape `XXXXXXXX-XXXX` (alphanumerics, case-insensitive)
pub fn is_complete_reference_code(code: &str) -> bool {
    let upper = code.trim().to_ascii_uppercase();
    let Some((head, tail)) = upper.split_once('-') else {
        return false;
    };
    let is_part = |part: &str, len: usize| {
        part.len() == len && part.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    };
    is_part(head, REFERENCE_HEAD_LEN) && is_part(tail, REFERENCE_TAIL_LEN)
}

/// Serial as typed: ASCII alphanumerics only, upper-cased, capped per brand
pub fn normalize_serial(raw: &str, brand: Brand) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(max_serial_length(brand))
        .collect();
    to_turkish_upper(&cleaned)
}

/// Size as typed: digits only
pub fn normalize_size(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// One failing gate condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIssue {
    MissingField(FormField),
    /// Code entered but the lookup has not produced a clean match
    LookupNotAccepted(String),
    InvalidSerial(String),
    NotConfirmed,
}

impl FormIssue {
    /// Turkish message shown to staff
    pub fn message(&self) -> String {
        match self {
            FormIssue::MissingField(field) => format!("{} zorunludur.", field_label(*field)),
            FormIssue::LookupNotAccepted(reason) if reason.is_empty() => {
                "RMC kodu doğrulanmadı.".to_string()
            }
            FormIssue::LookupNotAccepted(reason) => reason.clone(),
            FormIssue::InvalidSerial(hint) => format!("Seri numarası geçersiz. {}", hint),
            FormIssue::NotConfirmed => "Ürün kontrol onayı verilmedi.".to_string(),
        }
    }
}

impl fmt::Display for FormIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::CustomerName => "Müşteri adı",
        FormField::ReferenceCode => "RMC kodu",
        FormField::SerialNumber => "Seri numarası",
        FormField::Size => "Çap",
        FormField::FamilyName => "Aile",
        FormField::Description => "Açıklama",
        FormField::RecipientName => "Teslim edilen kişi",
        FormField::Dial => "Kadran",
        FormField::Bracelet => "Bilezik",
        FormField::Price => "Fiyat",
    }
}

/// Every failing gate condition, in gate order
pub fn collect_form_issues(
    form: &FormData,
    line: ProductLine,
    confirmed: bool,
    lookup: &LookupState,
) -> Vec<FormIssue> {
    let mut issues = Vec::new();

    for field in [
        FormField::CustomerName,
        FormField::ReferenceCode,
        FormField::RecipientName,
    ] {
        if form.is_blank(field) {
            issues.push(FormIssue::MissingField(field));
        }
    }

    let serial_blank = form.is_blank(FormField::SerialNumber);
    if serial_blank && !line.is_accessory() {
        issues.push(FormIssue::MissingField(FormField::SerialNumber));
    }

    if is_reference_code_well_formed(&form.reference_code) && !lookup.is_accepted() {
        issues.push(FormIssue::LookupNotAccepted(lookup.message().to_string()));
    }

    if !serial_blank && !is_serial_valid(&form.serial_number, line) {
        issues.push(FormIssue::InvalidSerial(serial_description(line)));
    }

    if !confirmed {
        issues.push(FormIssue::NotConfirmed);
    }

    issues
}

/// Pure boolean gate: required fields, accepted lookup, valid serial and the
/// explicit inspection confirmation must all hold.
pub fn is_form_submittable(
    form: &FormData,
    line: ProductLine,
    confirmed: bool,
    lookup: &LookupState,
) -> bool {
    collect_form_issues(form, line, confirmed, lookup).is_empty()
}
