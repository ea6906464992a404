use std::sync::LazyLock;

use regex::Regex;

// Literal patterns; compilation cannot fail at runtime.
static POSTAL_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-?[0-9]{4}$").expect("postal code regex is valid"));
static PHONE_DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").expect("phone regex is valid"));

fn is_katakana_char(ch: char) -> bool {
    matches!(ch, '\u{30A1}'..='\u{30F6}' | 'ー' | '・') || ch.is_whitespace()
}

/// Full-width katakana, the prolonged sound mark, the middle dot and
/// whitespace (full-width space included). Empty input is rejected.
pub fn is_katakana(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_katakana_char)
}

/// Ten or eleven ASCII digits once hyphens and whitespace are stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|ch| *ch != '-' && !ch.is_whitespace())
        .collect();
    PHONE_DIGITS_REGEX.is_match(&cleaned)
}

/// Absolute URL with a scheme.
pub fn is_valid_url(url: &str) -> bool {
    reqwest::Url::parse(url).is_ok()
}

/// `123-4567` or `1234567`.
pub fn is_valid_postal_code(postal_code: &str) -> bool {
    POSTAL_CODE_REGEX.is_match(postal_code)
}
