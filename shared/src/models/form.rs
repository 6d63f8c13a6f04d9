//! Transaction draft (form data)

use serde::{Deserialize, Serialize};

/// Editable fields of the delivery receipt draft.
///
/// Reference-code derived fields (size, family, dial, bracelet, price,
/// description) are filled from the catalog lookup, not typed by staff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub customer_name: String,
    pub reference_code: String,
    pub serial_number: String,
    pub size: String,
    pub family_name: String,
    pub description: String,
    pub recipient_name: String,
    pub dial: String,
    pub bracelet: String,
    pub price: String,
}

/// Field selector for [`FormData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    CustomerName,
    ReferenceCode,
    SerialNumber,
    Size,
    FamilyName,
    Description,
    RecipientName,
    Dial,
    Bracelet,
    Price,
}

impl FormField {
    /// Fields populated from the lookup result
    pub const LOOKUP_DERIVED: [FormField; 6] = [
        FormField::Size,
        FormField::FamilyName,
        FormField::Dial,
        FormField::Bracelet,
        FormField::Price,
        FormField::Description,
    ];
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CustomerName => &self.customer_name,
            FormField::ReferenceCode => &self.reference_code,
            FormField::SerialNumber => &self.serial_number,
            FormField::Size => &self.size,
            FormField::FamilyName => &self.family_name,
            FormField::Description => &self.description,
            FormField::RecipientName => &self.recipient_name,
            FormField::Dial => &self.dial,
            FormField::Bracelet => &self.bracelet,
            FormField::Price => &self.price,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::CustomerName => &mut self.customer_name,
            FormField::ReferenceCode => &mut self.reference_code,
            FormField::SerialNumber => &mut self.serial_number,
            FormField::Size => &mut self.size,
            FormField::FamilyName => &mut self.family_name,
            FormField::Description => &mut self.description,
            FormField::RecipientName => &mut self.recipient_name,
            FormField::Dial => &mut self.dial,
            FormField::Bracelet => &mut self.bracelet,
            FormField::Price => &mut self.price,
        };
        *slot = value.into();
    }

    /// True when the field is empty after trimming
    pub fn is_blank(&self, field: FormField) -> bool {
        self.get(field).trim().is_empty()
    }

    /// Clear every lookup-derived field
    pub fn clear_lookup_fields(&mut self) {
        for field in FormField::LOOKUP_DERIVED {
            self.set(field, String::new());
        }
    }
}
