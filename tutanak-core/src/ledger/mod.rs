//! Payment ledger
//!
//! In-memory list of payment entries for one editing session, plus the
//! per-currency totals the document prints. Totals are computed over plain
//! payment slices so that an empty list is always handled.

use rust_decimal::Decimal;
use shared::models::{Currency, Payment, PaymentField, PaymentId, PaymentType};

use crate::money::{format_amount, format_money, parse_amount, positive_amount};

/// Fallback summary when nothing positive has been entered
pub const ZERO_TOTAL: &str = "0 ₺";

/// Suffix marking credit-account subtotals in the summary line
const CREDIT_MARKER: &str = "Cari";

/// A payment plus its presentation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub payment: Payment,
    /// Only one entry is expanded at a time
    pub expanded: bool,
}

/// Ordered payment entries of the current session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentLedger {
    entries: Vec<LedgerEntry>,
}

impl PaymentLedger {
    /// Ledger with one blank, expanded slot dated `today`
    pub fn new(today: &str) -> Self {
        Self {
            entries: vec![LedgerEntry {
                payment: Payment::new(today),
                expanded: true,
            }],
        }
    }

    /// Ledger without any slot (totals and text still work on it)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap existing payments; the last one is expanded
    pub fn from_payments(payments: impl IntoIterator<Item = Payment>) -> Self {
        let mut entries: Vec<LedgerEntry> = payments
            .into_iter()
            .map(|payment| LedgerEntry {
                payment,
                expanded: false,
            })
            .collect();
        if let Some(last) = entries.last_mut() {
            last.expanded = true;
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Payments in ledger order
    pub fn payments(&self) -> Vec<Payment> {
        self.entries.iter().map(|e| e.payment.clone()).collect()
    }

    pub fn get(&self, id: PaymentId) -> Option<&Payment> {
        self.entries
            .iter()
            .find(|e| e.payment.id == id)
            .map(|e| &e.payment)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: PaymentId) -> Option<&mut LedgerEntry> {
        self.entries.iter_mut().find(|e| e.payment.id == id)
    }

    /// Append a default entry dated `today`. It becomes the only expanded one.
    pub fn add_payment(&mut self, today: &str) -> PaymentId {
        for entry in &mut self.entries {
            entry.expanded = false;
        }
        let payment = Payment::new(today);
        let id = payment.id;
        self.entries.push(LedgerEntry {
            payment,
            expanded: true,
        });
        tracing::debug!(payment_id = %id, count = self.entries.len(), "Payment added");
        id
    }

    /// True when an entry may be removed (at least one slot must remain)
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// Remove an entry. No-op on the last remaining slot or an unknown id.
    pub fn remove_payment(&mut self, id: PaymentId) -> bool {
        if !self.can_remove() {
            tracing::debug!(payment_id = %id, "Refusing to remove last payment slot");
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|e| e.payment.id != id);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!(payment_id = %id, count = self.entries.len(), "Payment removed");
        }
        removed
    }

    /// Overwrite exactly one field of one entry
    pub fn update_field(&mut self, id: PaymentId, field: PaymentField) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.payment.apply(field);
                true
            }
            None => false,
        }
    }

    /// Switch the payment type and reset the currency to the type's default
    pub fn change_type(&mut self, id: PaymentId, payment_type: PaymentType) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.payment.currency = payment_type.default_currency();
                entry.payment.payment_type = payment_type;
                true
            }
            None => false,
        }
    }

    /// Rewrite the raw amount in display form (`17500` → `17.500`), clearing
    /// it when it does not parse.
    pub fn normalize_amount(&mut self, id: PaymentId) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.payment.amount = parse_amount(&entry.payment.amount)
                    .map(format_amount)
                    .unwrap_or_default();
                true
            }
            None => false,
        }
    }

    /// Expand one entry and collapse the rest; collapses it if already open
    pub fn toggle_expanded(&mut self, id: PaymentId) -> bool {
        let Some(was_expanded) = self
            .entries
            .iter()
            .find(|e| e.payment.id == id)
            .map(|e| e.expanded)
        else {
            return false;
        };
        for entry in &mut self.entries {
            entry.expanded = entry.payment.id == id && !was_expanded;
        }
        true
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.payments())
    }

    pub fn split_totals(&self) -> SplitTotals {
        compute_split_totals(&self.payments())
    }

    pub fn summary_text(&self) -> String {
        summary_text(&self.payments())
    }
}

/// Per-currency sums kept in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyTotals {
    sums: Vec<(Currency, Decimal)>,
}

impl CurrencyTotals {
    /// Add to the currency's running sum. An addition that would overflow
    /// `Decimal` is dropped and the sum keeps its previous value.
    pub fn add(&mut self, currency: Currency, amount: Decimal) {
        match self.sums.iter_mut().find(|(c, _)| *c == currency) {
            Some((_, sum)) => match sum.checked_add(amount) {
                Some(total) => *sum = total,
                None => {
                    tracing::warn!(
                        currency = currency.code(),
                        amount = %amount,
                        "Currency total overflow, amount skipped"
                    );
                }
            },
            None => self.sums.push((currency, amount)),
        }
    }

    pub fn get(&self, currency: Currency) -> Option<Decimal> {
        self.sums
            .iter()
            .find(|(c, _)| *c == currency)
            .map(|(_, sum)| *sum)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, Decimal)> + '_ {
        self.sums.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    /// `"10.000 ₺ + 1.000 €"`, empty string when there is nothing
    pub fn display(&self) -> String {
        self.formatted_parts(None).join(" + ")
    }

    fn formatted_parts(&self, suffix: Option<&str>) -> Vec<String> {
        self.sums
            .iter()
            .map(|(currency, sum)| match suffix {
                Some(s) => format!("{} {}", format_money(*sum, *currency), s),
                None => format_money(*sum, *currency),
            })
            .collect()
    }
}

/// Merged totals across all payment types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub per_currency: CurrencyTotals,
    pub display_string: String,
}

/// Totals partitioned into completed payments and credit-account balance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitTotals {
    pub paid: CurrencyTotals,
    pub on_credit: CurrencyTotals,
}

/// Sum every positive, in-range amount per currency.
///
/// ```
/// use shared::models::{Currency, Payment, PaymentType};
/// use tutanak_core::ledger::compute_totals;
///
/// let payments = vec![
///     Payment::with(PaymentType::WireTransfer, "10.000", Currency::Try, "15.01.2024"),
///     Payment::with(PaymentType::Cash, "1.000", Currency::Eur, "15.01.2024"),
/// ];
/// assert_eq!(compute_totals(&payments).display_string, "10.000 ₺ + 1.000 €");
/// assert_eq!(compute_totals(&[]).display_string, "0 ₺");
/// ```
pub fn compute_totals(payments: &[Payment]) -> Totals {
    let mut per_currency = CurrencyTotals::default();
    for payment in payments {
        if let Some(amount) = positive_amount(&payment.amount) {
            per_currency.add(payment.currency, amount);
        }
    }

    let display_string = if per_currency.is_empty() {
        ZERO_TOTAL.to_string()
    } else {
        per_currency.display()
    };

    Totals {
        per_currency,
        display_string,
    }
}

/// Same inclusion rule as [`compute_totals`], with credit-account entries in
/// their own bucket
pub fn compute_split_totals(payments: &[Payment]) -> SplitTotals {
    let mut split = SplitTotals::default();
    for payment in payments {
        let Some(amount) = positive_amount(&payment.amount) else {
            continue;
        };
        if payment.payment_type.is_credit_account() {
            split.on_credit.add(payment.currency, amount);
        } else {
            split.paid.add(payment.currency, amount);
        }
    }
    split
}

/// Paid subtotals then credit subtotals marked `Cari`: `"10.000 ₺ + 500 € Cari"`
pub fn summary_text(payments: &[Payment]) -> String {
    let split = compute_split_totals(payments);
    let mut parts = split.paid.formatted_parts(None);
    parts.extend(split.on_credit.formatted_parts(Some(CREDIT_MARKER)));

    if parts.is_empty() {
        ZERO_TOTAL.to_string()
    } else {
        parts.join(" + ")
    }
}

#[cfg(test)]
mod tests;
