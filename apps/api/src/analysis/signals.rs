//! Signal extraction — stateless pattern matching over raw resume text.
//!
//! Every function here is total: any string in, a value out. Matching is
//! literal (regex over case-folded text); there is no language understanding.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"[a-zA-Z0-9.\-_+]+@[a-zA-Z0-9\-_]+\.[a-zA-Z0-9.\-_]+").expect("email regex");
    static ref PHONE_RE: Regex = Regex::new(
        r"(\+?\d{1,3}[\s\-]?)?(\d{10}|\d{5}[\s\-]\d{5}|\d{3}[\s\-]\d{3}[\s\-]\d{4})"
    )
    .expect("phone regex");
    static ref PHONE_SEPARATOR_RE: Regex = Regex::new(r"[\s\-]+").expect("separator regex");
    static ref YEAR_RE: Regex = Regex::new(r"\b(19[0-9]{2}|20[0-9]{2})\b").expect("year regex");
    static ref YEARS_OF_EXPERIENCE_RE: Regex =
        Regex::new(r"([0-9]+)\s+(?:years|yrs|year)").expect("years-of-experience regex");
}

/// Shortest normalized phone candidate that is kept.
const MIN_PHONE_LEN: usize = 7;

/// Structured facts pulled out of one resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSignals {
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
    /// Longest (most specific) terms first.
    pub skills_found: Vec<String>,
    pub experience_years: u32,
}

impl ExtractedSignals {
    pub fn from_text(text: &str, vocabulary: &[&str]) -> Self {
        Self {
            emails: extract_emails(text),
            phones: extract_phones(text),
            skills_found: extract_skills(text, vocabulary),
            experience_years: estimate_experience_years(text),
        }
    }

    pub fn has_contact(&self) -> bool {
        !self.emails.is_empty() || !self.phones.is_empty()
    }
}

/// Case-folds text for matching. No other transformation is applied.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
}

/// Whole-word, case-insensitive presence of `term` in already-normalized text.
pub(crate) fn contains_whole_word(normalized: &str, term: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(&normalize_text(term)));
    Regex::new(&pattern)
        .map(|re| re.is_match(normalized))
        .unwrap_or(false)
}

/// Email-shaped tokens, exactly as written, deduplicated.
pub fn extract_emails(text: &str) -> BTreeSet<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Phone-shaped sequences with spaces and hyphens removed, deduplicated.
pub fn extract_phones(text: &str) -> BTreeSet<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| PHONE_SEPARATOR_RE.replace_all(m.as_str(), "").into_owned())
        .filter(|p| p.chars().count() >= MIN_PHONE_LEN)
        .collect()
}

/// Vocabulary entries present in the text as whole words.
///
/// Sorted by descending length; the sort is stable so equal-length terms
/// keep their vocabulary order.
pub fn extract_skills(text: &str, vocabulary: &[&str]) -> Vec<String> {
    let normalized = normalize_text(text);
    let mut found: Vec<String> = Vec::new();
    for &skill in vocabulary {
        if found.iter().any(|f| f == skill) {
            continue;
        }
        if contains_whole_word(&normalized, skill) {
            found.push(skill.to_string());
        }
    }
    found.sort_by_key(|s| Reverse(s.chars().count()));
    found
}

/// Years of experience: an explicit "N years" phrase wins; otherwise the span
/// between the earliest and latest 4-digit year (a single year counts as 1).
pub fn estimate_experience_years(text: &str) -> u32 {
    let normalized = normalize_text(text);
    if let Some(caps) = YEARS_OF_EXPERIENCE_RE.captures(&normalized) {
        // Only ASCII digits can match, so the sole parse failure is overflow.
        return caps[1].parse::<u32>().unwrap_or(u32::MAX);
    }

    let years: Vec<u32> = YEAR_RE
        .captures_iter(text)
        .filter_map(|c| c[1].parse::<u32>().ok())
        .collect();

    match (years.iter().min(), years.iter().max()) {
        (Some(min), Some(max)) if max > min => max - min,
        (Some(_), Some(_)) => 1,
        _ => 0,
    }
}
