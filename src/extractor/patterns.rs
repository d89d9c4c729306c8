// file: src/extractor/patterns.rs
// description: compiled regex patterns for owner and deadline extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Owner mentions
    pub static ref MENTION: Regex = Regex::new(
        r"@(\w+)"
    ).expect("MENTION regex is valid");

    // Deadlines, tried in order; the first pattern that matches wins
    pub static ref DEADLINE_WEEKDAY: Regex = Regex::new(
        r"(?i)by\s+(\w+day)"
    ).expect("DEADLINE_WEEKDAY regex is valid");

    pub static ref DEADLINE_MONTH_DAY: Regex = Regex::new(
        r"(?i)by\s+(\w+\s+\d+)"
    ).expect("DEADLINE_MONTH_DAY regex is valid");

    pub static ref DEADLINE_DUE: Regex = Regex::new(
        r"(?i)due\s+(\w+)"
    ).expect("DEADLINE_DUE regex is valid");

    pub static ref DEADLINE_LABEL: Regex = Regex::new(
        r"(?i)deadline[:\s]+(\w+)"
    ).expect("DEADLINE_LABEL regex is valid");
}

/// First `@name` mention in the text, without the `@`.
pub fn extract_owner(text: &str) -> Option<String> {
    MENTION
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Best-effort deadline phrase; `None` when no pattern matches.
pub fn extract_deadline(text: &str) -> Option<String> {
    let patterns: [&Regex; 4] = [
        &DEADLINE_WEEKDAY,
        &DEADLINE_MONTH_DAY,
        &DEADLINE_DUE,
        &DEADLINE_LABEL,
    ];

    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
    })
}
