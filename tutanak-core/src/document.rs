//! Plain-text tutanak rendering
//!
//! Lays out the whole document (header, intro, legal sentences, total,
//! delivery declaration, signature block and company footer) as fixed-width
//! text ready for printing.

use shared::models::{FormData, Payment, ProductLine};

use crate::grammar::with_dative_suffix;
use crate::ledger::summary_text;
use crate::legal_text::{COMPANY, LegalText, Sentence};

pub const DEFAULT_CITY: &str = "İZMİR";
pub const DEFAULT_WIDTH: usize = 96;
/// Narrowest layout the wrapper accepts
const MIN_WIDTH: usize = 20;

const TITLE: &str = "TESLİM TUTANAK";
const SIGNATURE_DOTS: usize = 69;

/// Page settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    pub city: String,
    pub width: usize,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            width: DEFAULT_WIDTH,
        }
    }
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Line-oriented text buffer with alignment and word wrapping
pub struct TextBuilder {
    buf: String,
    width: usize,
}

impl TextBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width: width.max(MIN_WIDTH),
        }
    }

    pub fn write_line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn center(&mut self, s: &str) {
        let pad = self.width.saturating_sub(text_width(s)) / 2;
        self.write_line(&format!("{}{}", " ".repeat(pad), s));
    }

    pub fn right(&mut self, s: &str) {
        let pad = self.width.saturating_sub(text_width(s));
        self.write_line(&format!("{}{}", " ".repeat(pad), s));
    }

    pub fn dash_sep(&mut self) {
        self.write_line(&"-".repeat(self.width));
    }

    /// Greedy word wrap; a word longer than the width gets a line of its own
    pub fn paragraph(&mut self, text: &str) {
        let mut line = String::new();
        for word in text.split_whitespace() {
            if !line.is_empty() && text_width(&line) + 1 + text_width(word) > self.width {
                self.write_line(&line);
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if !line.is_empty() {
            self.write_line(&line);
        }
    }

    pub fn finalize(self) -> String {
        self.buf
    }
}

fn sentence_text(sentence: Sentence) -> String {
    sentence.finish().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Document paragraph formatting failed");
        String::new()
    })
}

/// Renders one draft into the printable document
pub struct DocumentRenderer<'a> {
    layout: &'a DocumentLayout,
    line: ProductLine,
    form: &'a FormData,
    payments: &'a [Payment],
    current_date: &'a str,
}

impl<'a> DocumentRenderer<'a> {
    pub fn new(
        layout: &'a DocumentLayout,
        line: ProductLine,
        form: &'a FormData,
        payments: &'a [Payment],
        current_date: &'a str,
    ) -> Self {
        Self {
            layout,
            line,
            form,
            payments,
            current_date,
        }
    }

    fn customer(&self) -> &'a str {
        self.form.customer_name.trim()
    }

    /// Person who physically receives the goods; defaults to the customer
    fn recipient(&self) -> &'a str {
        match self.form.recipient_name.trim() {
            "" => self.customer(),
            name => name,
        }
    }

    fn intro(&self) -> String {
        sentence_text(
            Sentence::new()
                .word("Alıcı - Müşteri")
                .word(self.customer())
                .word("tarafından,")
                .word(COMPANY.letterhead_name)
                .word("Adına;"),
        )
    }

    fn declaration(&self) -> String {
        let s = Sentence::new()
            .word("İşbu belge ile; Yukarıda belirtilen özelliklere sahip")
            .word(self.line.genitive())
            .word("tüm yasal ve ticari belgeleriyle birlikte eksiksiz olarak hazırlandığı,")
            .word("müşteri talimatı doğrultusunda");
        // Accessories carry no serial number to inspect
        let s = if self.line.is_accessory() {
            s
        } else {
            s.word("seri numarası,")
        };
        let s = s
            .word("kodu ve fiziksel özelliklerinin kontrol edilip doğrulandığı,")
            .word("herhangi bir eksiklik veya hasar bulunmadığının tespit edildiği,")
            .word("Söz konusu")
            .word(self.line.noun())
            .word("ve tüm belgelerinin asıl sahibi")
            .word(self.customer())
            .word("adına, vekili/temsilcisi")
            .word(with_dative_suffix(self.recipient()))
            .word("eksiksiz olarak teslim edildiği beyan edilir.");
        sentence_text(s)
    }

    fn acknowledgement(&self) -> String {
        format!(
            "YUKARIDAKİ {} VE BELGELERİNİ EKSİKSİZ OLARAK TESLİM ALDIM.",
            self.line.category().label()
        )
    }

    pub fn render(&self) -> String {
        let mut b = TextBuilder::new(self.layout.width);

        // Header
        b.right(&format!("{} - {}", self.layout.city, self.current_date));
        b.blank();
        b.center(TITLE);
        b.blank();

        b.paragraph(&self.intro());
        b.blank();

        // Legal sentences, payment lines separated from the clauses below them
        let sentences =
            LegalText::new(self.payments, self.form, self.line, self.current_date).render();
        let paid_count = self
            .payments
            .iter()
            .filter(|p| !p.payment_type.is_credit_account())
            .count();
        for (i, sentence) in sentences.iter().enumerate() {
            b.paragraph(sentence);
            if paid_count > 0 && i + 1 == paid_count && sentences.len() > paid_count {
                b.blank();
            }
        }
        b.blank();

        b.paragraph(&format!("Toplam: {}", summary_text(self.payments)));
        b.blank();

        b.paragraph(&self.declaration());
        b.blank();
        b.paragraph(&self.acknowledgement());
        b.blank();

        // Signature block
        b.write_line(&format!("Ad-Soyad: {}", self.recipient()));
        b.write_line(&format!("Tarih: {}", self.current_date));
        b.blank();
        b.write_line(&format!("İmza: {}", ".".repeat(SIGNATURE_DOTS)));
        b.blank();

        // Company footer
        b.dash_sep();
        b.center(COMPANY.name);
        b.center(COMPANY.address);
        b.center(&format!("Tel: {} | E-posta: {}", COMPANY.phone, COMPANY.email));
        b.center(&format!(
            "Vergi Dairesi: {} | Vergi No: {} | Şube: {}",
            COMPANY.tax_office, COMPANY.tax_number, COMPANY.branch
        ));

        b.finalize()
    }
}

/// Render the full document for a draft
pub fn render_document(
    layout: &DocumentLayout,
    line: ProductLine,
    form: &FormData,
    payments: &[Payment],
    current_date: &str,
) -> String {
    DocumentRenderer::new(layout, line, form, payments, current_date).render()
}
