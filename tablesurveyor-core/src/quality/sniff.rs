//! Heuristic type sniffing for textual columns.
//!
//! Classifies a bounded sample of non-null text values as email-like or
//! date-like. Both checks are "looks like" heuristics for quality reporting,
//! not strict validators (the email pattern is not RFC 5322 compliant, and
//! date parsing covers common formats rather than every calendar notation).

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use super::models::TypeHints;

/// Upper bound on the number of values sniffed per column.
///
/// Keeps sniffing O(1) per column regardless of table size.
pub const SNIFF_SAMPLE_LIMIT: usize = 100;

/// Datetime formats tried before the date-only formats.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Date-only formats.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Invalid email pattern")
    })
}

/// Returns true if the value looks like an email address.
pub fn is_email_like(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Returns true if the value parses as a calendar date or datetime.
pub fn is_date_like(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    if DateTime::parse_from_rfc3339(trimmed).is_ok() {
        return true;
    }
    DATETIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).is_ok())
        || DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(trimmed, fmt).is_ok())
}

/// Sniffs a bounded sample of non-null textual values.
///
/// Each hint is set when a strict majority of the sample matches; an
/// exactly-half sample sets nothing. An empty sample yields no hints -
/// callers should omit hints entirely in that case.
pub fn sniff_sample(sample: &[&str]) -> TypeHints {
    let email_matches = sample.iter().filter(|v| is_email_like(v)).count();
    let date_matches = sample.iter().filter(|v| is_date_like(v)).count();

    TypeHints {
        likely_email: email_matches * 2 > sample.len(),
        likely_date: date_matches * 2 > sample.len(),
    }
}
