//! Payment Model

use serde::{Deserialize, Serialize};

use crate::util;

/// Opaque unique token identifying a payment entry
pub type PaymentId = uuid::Uuid;

/// Payment method
///
/// `CreditAccount` ("cari") is not a completed payment: it is a balance
/// charged to the customer's running account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    #[default]
    #[serde(alias = "havale")]
    WireTransfer,
    #[serde(alias = "kredi_karti")]
    CreditCard,
    #[serde(alias = "link")]
    PaymentLink,
    #[serde(alias = "cari")]
    CreditAccount,
    #[serde(alias = "nakit")]
    Cash,
    /// Method tag not known to this build; rendered with the generic wording
    #[serde(untagged)]
    Other(String),
}

impl PaymentType {
    pub fn is_credit_account(&self) -> bool {
        matches!(self, PaymentType::CreditAccount)
    }

    /// Turkish label shown next to each payment line
    pub fn label(&self) -> &str {
        match self {
            PaymentType::WireTransfer => "Havale",
            PaymentType::CreditCard => "Kredi Kartı",
            PaymentType::PaymentLink => "Link",
            PaymentType::CreditAccount => "Cari",
            PaymentType::Cash => "Nakit",
            PaymentType::Other(tag) => tag,
        }
    }

    /// Currency preselected when a payment switches to this type
    pub fn default_currency(&self) -> Currency {
        match self {
            PaymentType::CreditAccount | PaymentType::Cash => Currency::Eur,
            _ => Currency::Try,
        }
    }
}

/// Currency tag attached to a payment
///
/// Amounts are never converted between currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    #[serde(alias = "TL")]
    Try,
    Eur,
    Usd,
    Gbp,
    Chf,
}

impl Currency {
    /// ISO-like code
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Chf => "CHF",
        }
    }

    /// Display symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Try => "₺",
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Chf => "CHF",
        }
    }
}

/// One payment entry in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default = "util::payment_id")]
    pub id: PaymentId,
    #[serde(rename = "type", default)]
    pub payment_type: PaymentType,
    /// Raw amount as typed (Turkish formatting, may be empty)
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub currency: Currency,
    /// `DD.MM.YYYY`; empty means "use the session date"
    #[serde(default)]
    pub date: String,
}

impl Payment {
    /// Fresh entry: wire transfer, TRY, no amount, dated `date`
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            id: util::payment_id(),
            payment_type: PaymentType::default(),
            amount: String::new(),
            currency: Currency::default(),
            date: date.into(),
        }
    }

    /// Convenience constructor for a fully specified entry
    pub fn with(
        payment_type: PaymentType,
        amount: impl Into<String>,
        currency: Currency,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: util::payment_id(),
            payment_type,
            amount: amount.into(),
            currency,
            date: date.into(),
        }
    }

    /// Overwrite exactly one field
    pub fn apply(&mut self, field: PaymentField) {
        match field {
            PaymentField::Type(t) => self.payment_type = t,
            PaymentField::Amount(a) => self.amount = a,
            PaymentField::Currency(c) => self.currency = c,
            PaymentField::Date(d) => self.date = d,
        }
    }
}

/// A single-field edit of a payment entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PaymentField {
    Type(PaymentType),
    Amount(String),
    Currency(Currency),
    Date(String),
}
