//! Legal text generation
//!
//! Turns the payment list and the draft into the ordered sentences printed
//! on the tutanak:
//!
//! 1. one sentence per completed (non-credit) payment, in ledger order
//! 2. one sale-completion sentence if there was any completed payment
//! 3. one sentence per credit-account entry: the short "remaining balance"
//!    form after completed payments, the long form restating the sale
//!    otherwise
//!
//! Generation never fails from the caller's point of view: an internal
//! error, such as an amount beyond [`MAX_AMOUNT`], replaces the whole list
//! with [`FALLBACK_SENTENCE`].

mod sentence;

pub use sentence::Sentence;

use rust_decimal::Decimal;
use shared::models::{Currency, FormData, Payment, PaymentType, ProductLine};
use thiserror::Error;

use crate::grammar::with_dative_suffix;
use crate::money::{MAX_AMOUNT, format_money, is_amount_in_range, parse_amount};

/// Printed instead of the sentences when rendering fails
pub const FALLBACK_SENTENCE: &str = "Bu ödeme için ayrıntılar görüntülenemedi.";

/// Company identity printed on the document
#[derive(Debug, Clone, Copy)]
pub struct CompanyInfo {
    pub name: &'static str,
    /// Name used in credit-account clauses
    pub short_name: &'static str,
    /// Name used in the document intro line
    pub letterhead_name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub tax_office: &'static str,
    pub tax_number: &'static str,
    pub branch: &'static str,
}

pub const COMPANY: CompanyInfo = CompanyInfo {
    name: "KÜLAHÇIOĞLU DIŞ TİCARET VE SANAYİ LİMİTED ŞİRKETİ",
    short_name: "KÜLAHÇIOĞLU DIŞ TİCARET VE SAN. LTD. ŞTİ.",
    letterhead_name: "KÜLAHÇIOĞLU DIŞ TİCARET LTD. ŞTİ.",
    address: "Talatpaşa Bulvarı Kültür Mahallesi Alayunt Apt. No:7 Kapı No:3 35220 Konak/İzmir",
    phone: "02322030305",
    email: "muhasebe@kulahcioglu.com",
    tax_office: "Hasan Tahsin",
    tax_number: "6050284231",
    branch: "İstinyepark-06",
};

/// Receiving account for wire transfers; only TRY, EUR and USD have one
pub fn iban_for(currency: Currency) -> Option<&'static str> {
    match currency {
        Currency::Try => Some("TR760006200010000006292310"),
        Currency::Eur => Some("TR540006200010000009083008"),
        Currency::Usd => Some("TR810006200010000009083007"),
        Currency::Gbp | Currency::Chf => None,
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("sentence formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
    /// A payment amount the document must not print
    #[error("amount {0} exceeds the limit of {limit}", limit = MAX_AMOUNT)]
    AmountOutOfRange(String),
}

/// Legal text for one draft. Cheap to build; [`LegalText::sentences`] can be
/// iterated any number of times with identical results.
#[derive(Debug, Clone, Copy)]
pub struct LegalText<'a> {
    payments: &'a [Payment],
    form: &'a FormData,
    line: ProductLine,
    current_date: &'a str,
}

impl<'a> LegalText<'a> {
    pub fn new(
        payments: &'a [Payment],
        form: &'a FormData,
        line: ProductLine,
        current_date: &'a str,
    ) -> Self {
        Self {
            payments,
            form,
            line,
            current_date,
        }
    }

    fn has_completed_payment(&self) -> bool {
        self.payments
            .iter()
            .any(|p| !p.payment_type.is_credit_account())
    }

    /// Lazy sentence sequence in print order
    pub fn sentences(&self) -> impl Iterator<Item = Result<String, RenderError>> + '_ {
        let has_paid = self.has_completed_payment();

        let paid = self
            .payments
            .iter()
            .filter(|p| !p.payment_type.is_credit_account())
            .map(move |p| self.payment_sentence(p));

        let sale = has_paid
            .then_some(())
            .into_iter()
            .map(move |_| self.sale_sentence());

        let credit = self
            .payments
            .iter()
            .filter(|p| p.payment_type.is_credit_account())
            .map(move |p| {
                if has_paid {
                    self.partial_credit_sentence(p)
                } else {
                    self.full_credit_sentence(p)
                }
            });

        paid.chain(sale).chain(credit)
    }

    /// All sentences, or the single fallback sentence on failure
    pub fn render(&self) -> Vec<String> {
        collect_or_fallback(self.sentences())
    }

    fn date_of<'p>(&'p self, payment: &'p Payment) -> &'p str {
        let date = payment.date.trim();
        if date.is_empty() { self.current_date } else { date }
    }

    fn field(&self, value: &'a str) -> &'a str {
        value.trim()
    }

    fn payment_sentence(&self, payment: &Payment) -> Result<String, RenderError> {
        let amount = amount_text(payment)?;
        let s = Sentence::new().word(self.date_of(payment)).word("tarihinde");

        let s = match &payment.payment_type {
            PaymentType::WireTransfer => s
                .word("IBAN:")
                .word(iban_for(payment.currency).unwrap_or_default())
                .word("nolu hesaba"),
            PaymentType::CreditCard => s.word("Kredi Kartı ile"),
            PaymentType::PaymentLink => s.word("Link ile"),
            PaymentType::Cash => s.word("nakit olarak"),
            other => s.word(other.label()).word("ile"),
        };

        Ok(s
            .word(amount)
            .word("ödeme gerçekleştirilmiştir")
            .attach(".")
            .finish()?)
    }

    /// The one place where the product category changes sentence structure
    fn sale_sentence(&self) -> Result<String, RenderError> {
        let form = self.form;
        let s = Sentence::new()
            .word("İşbu ödeme ile,")
            .word(self.line.brand().label())
            .word("marka")
            .word(self.field(&form.reference_code))
            .word("ürün koduna sahip,")
            .word(self.field(&form.serial_number))
            .word("seri numaralı,");

        let s = if self.line.is_accessory() {
            s.word(self.field(&form.description))
                .word("aksesuarın satışı gerçekleştirilmiştir")
        } else {
            s.word(self.field(&form.size))
                .word("mm çapında")
                .word(self.field(&form.family_name))
                .word("ailesine ait bir saatin satışı gerçekleştirilmiştir")
        };

        Ok(s.attach(".").finish()?)
    }

    fn partial_credit_sentence(&self, payment: &Payment) -> Result<String, RenderError> {
        let amount = amount_text(payment)?;
        let s = Sentence::new()
            .word(self.line.genitive_capitalized())
            .word("kalan bedeli olan KDV dahil")
            .word(&amount);
        Ok(self.unpaid_clause(s, &amount).finish()?)
    }

    fn full_credit_sentence(&self, payment: &Payment) -> Result<String, RenderError> {
        let form = self.form;
        let amount = amount_text(payment)?;
        let genitive = self.line.genitive();

        let s = Sentence::new()
            .word(COMPANY.short_name)
            .word("tarafından")
            .word(self.line.brand().label())
            .word(self.field(&form.reference_code))
            .word("ürün koduna sahip,");

        let s = if self.line.is_accessory() {
            s.word(self.field(&form.description))
        } else {
            s.word(self.field(&form.serial_number))
                .word("seri numaralı,")
                .word(self.field(&form.size))
                .word("mm çapında")
                .word(self.field(&form.family_name))
                .word("ailesine ait")
        };

        let s = s
            .word(genitive)
            .word("satışı Alıcı-Müşteri")
            .word(with_dative_suffix(&form.customer_name))
            .word("gerçekleştirilmiş, ancak")
            .word(genitive)
            .word("bedeli olan KDV dahil")
            .word(&amount);

        Ok(self.unpaid_clause(s, &amount).finish()?)
    }

    /// "... tarafından <company>'NE ödenmemiş, işbu <amount> ... borç kaydedilmiştir."
    fn unpaid_clause(&self, s: Sentence, amount: &str) -> Sentence {
        s.word("Alıcı-Müşteri tarafından")
            .word(COMPANY.short_name)
            .attach("'NE")
            .word("ödenmemiş, işbu")
            .word(amount)
            .word("Alıcı")
            .word(self.field(&self.form.customer_name))
            .word("- Müşteri Cari Hesabına borç kaydedilmiştir")
            .attach(".")
    }
}

/// Per-payment amount with symbol; unparsable amounts print as zero
fn amount_text(payment: &Payment) -> Result<String, RenderError> {
    let value = parse_amount(&payment.amount).unwrap_or(Decimal::ZERO);
    if !is_amount_in_range(value) {
        return Err(RenderError::AmountOutOfRange(payment.amount.trim().to_string()));
    }
    Ok(format_money(value, payment.currency))
}

fn collect_or_fallback<I>(sentences: I) -> Vec<String>
where
    I: Iterator<Item = Result<String, RenderError>>,
{
    match sentences.collect::<Result<Vec<_>, _>>() {
        Ok(list) => list,
        Err(e) => {
            tracing::error!(error = %e, "Legal text generation failed, using fallback sentence");
            vec![FALLBACK_SENTENCE.to_string()]
        }
    }
}

/// Render the legal sentences for a draft
pub fn generate_legal_text(
    payments: &[Payment],
    form: &FormData,
    line: ProductLine,
    current_date: &str,
) -> Vec<String> {
    LegalText::new(payments, form, line, current_date).render()
}
