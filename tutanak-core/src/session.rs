//! Editing session
//!
//! Owns the product line selection, the draft, the payment ledger, the
//! lookup state and the inspection confirmation for one tutanak. Lookups are
//! asynchronous from the session's point of view: each reference-code edit
//! bumps a sequence number, and a completion is only accepted when its
//! ticket still matches the current code and product line.

use shared::error::AppResult;
use shared::models::{FormData, FormField, ProductLine, ProductRecord};
use shared::util;

use crate::document::{DocumentLayout, render_document};
use crate::grammar::to_turkish_upper;
use crate::ledger::{PaymentLedger, Totals, compute_totals, summary_text};
use crate::legal_text::generate_legal_text;
use crate::lookup::{self, LookupState, ProductCatalog};
use crate::validation::{self, FormIssue};

/// Identifies one lookup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    seq: u64,
    code: String,
    line: ProductLine,
}

impl LookupTicket {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    line: ProductLine,
    form: FormData,
    ledger: PaymentLedger,
    lookup: LookupState,
    lookup_seq: u64,
    confirmed: bool,
    current_date: String,
}

impl Session {
    pub fn new(line: ProductLine, current_date: impl Into<String>) -> Self {
        let current_date = current_date.into();
        Self {
            line,
            form: FormData::default(),
            ledger: PaymentLedger::new(&current_date),
            lookup: LookupState::Pending,
            lookup_seq: 0,
            confirmed: false,
            current_date,
        }
    }

    /// Session dated today
    pub fn today(line: ProductLine) -> Self {
        Self::new(line, util::today())
    }

    pub fn line(&self) -> ProductLine {
        self.line
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn ledger(&self) -> &PaymentLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut PaymentLedger {
        &mut self.ledger
    }

    pub fn lookup(&self) -> &LookupState {
        &self.lookup
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn current_date(&self) -> &str {
        &self.current_date
    }

    /// Switch brand/category. The draft, lookup and confirmation are reset
    /// and any in-flight lookup becomes stale; payments are kept.
    pub fn select_line(&mut self, line: ProductLine) {
        if line == self.line {
            return;
        }
        tracing::debug!(from = ?self.line, to = ?line, "Product line changed, resetting draft");
        self.line = line;
        self.form = FormData::default();
        self.invalidate_lookup();
        self.confirmed = false;
    }

    /// Start over with an empty draft and a fresh ledger
    pub fn reset(&mut self) {
        self.form = FormData::default();
        self.ledger = PaymentLedger::new(&self.current_date);
        self.invalidate_lookup();
        self.confirmed = false;
    }

    fn invalidate_lookup(&mut self) {
        self.lookup_seq += 1;
        self.lookup = LookupState::Pending;
    }

    /// Store a typed value, normalized the way the form field expects
    pub fn set_field(&mut self, field: FormField, value: &str) {
        let normalized = match field {
            FormField::SerialNumber => validation::normalize_serial(value, self.line.brand()),
            FormField::Size => validation::normalize_size(value),
            FormField::Price => value.to_string(),
            _ => to_turkish_upper(value),
        };

        if field == FormField::ReferenceCode && normalized != self.form.reference_code {
            self.invalidate_lookup();
        }
        self.form.set(field, normalized);
    }

    /// Ticket for looking up the current reference code; `None` when blank
    pub fn begin_lookup(&mut self) -> Option<LookupTicket> {
        let code = self.form.reference_code.trim().to_string();
        if code.is_empty() {
            self.lookup = LookupState::Pending;
            return None;
        }
        self.lookup_seq += 1;
        self.lookup = LookupState::Pending;
        Some(LookupTicket {
            seq: self.lookup_seq,
            code,
            line: self.line,
        })
    }

    /// Edit the reference code and request a lookup for it
    pub fn set_reference_code(&mut self, code: &str) -> Option<LookupTicket> {
        self.set_field(FormField::ReferenceCode, code);
        self.begin_lookup()
    }

    fn is_current(&self, ticket: &LookupTicket) -> bool {
        ticket.seq == self.lookup_seq
            && ticket.line == self.line
            && ticket.code == self.form.reference_code.trim()
    }

    /// Accept a catalog answer for `ticket`. Stale answers are discarded and
    /// `false` is returned.
    pub fn complete_lookup(
        &mut self,
        ticket: LookupTicket,
        result: AppResult<Option<ProductRecord>>,
    ) -> bool {
        if !self.is_current(&ticket) {
            tracing::warn!(
                code = %ticket.code,
                ticket_seq = ticket.seq,
                current_seq = self.lookup_seq,
                "Discarding stale lookup result"
            );
            return false;
        }

        let state = lookup::evaluate(self.line, result);
        match state.record() {
            Some(record) => apply_record(&mut self.form, record),
            None => self.form.clear_lookup_fields(),
        }
        tracing::debug!(code = %ticket.code, accepted = state.is_accepted(), "Lookup completed");
        self.lookup = state;
        true
    }

    /// Look up the current code synchronously against `catalog`
    pub fn lookup_with(&mut self, catalog: &dyn ProductCatalog) -> bool {
        match self.begin_lookup() {
            Some(ticket) => {
                let result = catalog.find_exact(ticket.code());
                self.complete_lookup(ticket, result)
            }
            None => false,
        }
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
    }

    pub fn issues(&self) -> Vec<FormIssue> {
        validation::collect_form_issues(&self.form, self.line, self.confirmed, &self.lookup)
    }

    pub fn is_submittable(&self) -> bool {
        validation::is_form_submittable(&self.form, self.line, self.confirmed, &self.lookup)
    }

    pub fn legal_text(&self) -> Vec<String> {
        generate_legal_text(
            &self.ledger.payments(),
            &self.form,
            self.line,
            &self.current_date,
        )
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.ledger.payments())
    }

    pub fn summary_text(&self) -> String {
        summary_text(&self.ledger.payments())
    }

    pub fn render_document(&self, layout: &DocumentLayout) -> String {
        render_document(
            layout,
            self.line,
            &self.form,
            &self.ledger.payments(),
            &self.current_date,
        )
    }
}

/// Copy the descriptive cells of a catalog row into the draft
fn apply_record(form: &mut FormData, record: &ProductRecord) {
    let cell = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or_default().to_string();
    form.set(FormField::Size, cell(&record.size));
    form.set(FormField::FamilyName, cell(&record.family));
    form.set(FormField::Dial, cell(&record.dial));
    form.set(FormField::Bracelet, cell(&record.bracelet));
    form.set(FormField::Price, cell(&record.price));
    form.set(FormField::Description, cell(&record.detail));
}
