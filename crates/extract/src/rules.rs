//! Named, ordered regex patterns, one `Lazy<Regex>` per field so each
//! pattern compiles exactly once per process regardless of how many
//! documents are run through the extractor.

use once_cell::sync::Lazy;
use regex::Regex;

pub static OWNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*owner\s*(?:name)?\s*[:\-]\s*(.+)$").unwrap());

pub static SURVEY_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)survey\s*(?:no\.?|number)\s*[:\-]?\s*([0-9]+[A-Za-z]?(?:/[0-9]+[A-Za-z]?)?)").unwrap());

pub static HISSA_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)hissa\s*(?:no\.?|number)\s*[:\-]?\s*([0-9]+[A-Za-z]?)").unwrap());

pub static VILLAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)village\s*[:\-]\s*([A-Za-z][A-Za-z .]*)").unwrap());

pub static TALUK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)taluk\s*[:\-]\s*([A-Za-z][A-Za-z .]*)").unwrap());

pub static DISTRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)district\s*[:\-]\s*([A-Za-z][A-Za-z .]*)").unwrap());

pub static EXTENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*acres?(?:\s*(?:and)?\s*([0-9]+)\s*guntas?)?").unwrap()
});

pub static VALID_FROM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)valid\s*from\s*[:\-]?\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap());

pub static VALID_TO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)valid\s*(?:to|until|till)\s*[:\-]?\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap());

pub static SIGNED_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)digitally\s*signed\s*(?:on)?\s*[:\-]?\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap()
});

pub static LOAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:loan|mortgage|charge)[^.\n]*?(?:rs\.?|inr|\u{20B9})\s*([0-9][0-9,]*)[^.\n]*?\b(SBI|HDFC|ICICI|AXIS|CANARA|PNB|BOB|UNION\s*BANK|KARNATAKA\s*BANK)\b",
    )
    .unwrap()
});

pub static MUTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)mutation\s*(?:no\.?|number)?\s*[:\-]?\s*([A-Za-z0-9/\-]+)\s*[:\-]?\s*(.*)$").unwrap()
});

pub static CASE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bC\.?\s?No\.?\s*([A-Za-z0-9/\-]+)|case\s*no\.?\s*[:\-]?\s*([A-Za-z0-9/\-]+)").unwrap());

pub static GENERIC_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b").unwrap());
