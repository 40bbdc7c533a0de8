use crate::error::ValidationReason;
use once_cell::sync::Lazy;
use regex::Regex;

// First and last character must be a Latin or Cyrillic letter; the interior
// may also contain digits, hyphens and spaces. Two characters minimum.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zА-Яа-яЁё][A-Za-zА-Яа-яЁё0-9\- ]*[A-Za-zА-Яа-яЁё]$").unwrap()
});

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

// Optional leading `+`, then at least seven characters of digits, hyphens,
// parentheses or spaces. No checksum or country rules.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9()\- ]{7,}$").unwrap());

/// Name rule, applied to a copy trimmed of surrounding whitespace.
pub fn check_name(value: &str) -> Result<(), ValidationReason> {
    if NAME_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationReason::Format)
    }
}

/// Email rule. All whitespace is stripped before matching, so accidental
/// interior spaces are tolerated.
pub fn check_email(value: &str) -> Result<(), ValidationReason> {
    if EMAIL_RE.is_match(&strip_whitespace(value)) {
        Ok(())
    } else {
        Err(ValidationReason::Format)
    }
}

/// Phone rule. All whitespace is stripped before matching.
pub fn check_phone(value: &str) -> Result<(), ValidationReason> {
    if PHONE_RE.is_match(&strip_whitespace(value)) {
        Ok(())
    } else {
        Err(ValidationReason::Format)
    }
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|ch| !ch.is_whitespace()).collect()
}
