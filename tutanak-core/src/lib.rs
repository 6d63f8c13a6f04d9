//! Delivery receipt (teslim tutanağı) engine
//!
//! - [`validation`]: serial / reference code rules and the submission gate
//! - [`ledger`]: payment entries and per-currency totals
//! - [`legal_text`]: the ordered Turkish legal sentences
//! - [`grammar`]: dative suffixes and Turkish upper-casing
//! - [`session`]: one editing session tying it all together
//! - [`document`]: the printable plain-text document

pub mod document;
pub mod grammar;
pub mod ledger;
pub mod legal_text;
pub mod lookup;
pub mod money;
pub mod session;
pub mod validation;

// Re-exports
pub use document::{DocumentLayout, render_document};
pub use grammar::{resolve_dative_suffix, with_dative_suffix};
pub use ledger::{
    CurrencyTotals, PaymentLedger, SplitTotals, Totals, compute_split_totals, compute_totals,
    summary_text,
};
pub use legal_text::{FALLBACK_SENTENCE, LegalText, generate_legal_text};
pub use lookup::{InMemoryCatalog, LookupState, ProductCatalog};
pub use session::{LookupTicket, Session};
pub use validation::{
    FormIssue, collect_form_issues, is_complete_reference_code, is_form_submittable,
    is_reference_code_well_formed, is_serial_valid, min_serial_length, serial_description,
};
