//! Token-list sentence builder
//!
//! Sentences are assembled from tokens joined by exactly one space. Blank
//! tokens (missing form fields) are dropped so an incomplete draft never
//! produces double spaces; punctuation is attached to the previous token.

use std::fmt::Write;

#[derive(Debug, Clone, Default)]
pub struct Sentence {
    tokens: Vec<String>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token; blank tokens are skipped
    pub fn word(mut self, token: impl AsRef<str>) -> Self {
        let token = token.as_ref().trim();
        if !token.is_empty() {
            self.tokens.push(token.to_string());
        }
        self
    }

    /// Glue text onto the previous token without a space
    pub fn attach(mut self, text: &str) -> Self {
        match self.tokens.last_mut() {
            Some(last) => last.push_str(text),
            None => self.tokens.push(text.to_string()),
        }
        self
    }

    pub fn finish(self) -> Result<String, std::fmt::Error> {
        let capacity = self.tokens.iter().map(|t| t.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            out.write_str(token)?;
        }
        Ok(out)
    }
}
