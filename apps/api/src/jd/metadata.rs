//! `Key: value` metadata lines, the implicit title line, and salary ranges.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::jd::headings::{has_sentence_punctuation, is_all_caps};

static TITLE_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:job title|title|position|position title|role)$").expect("title key")
});
static LOCATION_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:location|job location|work location|duty station)$").expect("location key")
});
static SALARY_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:salary|salary range|pay|pay range|gross salary|monthly salary|expected salary)$",
    )
    .expect("salary key")
});

static CURRENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:kshs?|kes|usd)\b\.?|[$£€]").expect("currency tokens")
});
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d+(?:\.\d+)?)(?:\s*([kK])\b)?\s*(?:-|–|—|\bto\b)\s*(\d+(?:\.\d+)?)(?:\s*([kK])\b)?",
    )
    .expect("salary range")
});
static SINGLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)(?:\s*([kK])\b)?").expect("salary figure"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataKind {
    Title,
    Location,
    Salary,
}

/// A recognized `Key: value` line with a non-empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataLine<'a> {
    pub kind: MetadataKind,
    pub value: &'a str,
}

/// Bounds parsed out of free salary text. Either side may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl SalaryRange {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Matches a metadata key (already stripped of its trailing colon).
pub fn match_metadata_key(key: &str) -> Option<MetadataKind> {
    let key = key.trim();
    if TITLE_KEY_RE.is_match(key) {
        Some(MetadataKind::Title)
    } else if LOCATION_KEY_RE.is_match(key) {
        Some(MetadataKind::Location)
    } else if SALARY_KEY_RE.is_match(key) {
        Some(MetadataKind::Salary)
    } else {
        None
    }
}

/// Splits `line` at its first colon and matches the left side as a metadata key.
pub fn match_metadata_line(line: &str) -> Option<MetadataLine<'_>> {
    let (key, value) = line.split_once(':')?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let kind = match_metadata_key(key)?;
    Some(MetadataLine { kind, value })
}

/// Whether the first non-blank line of a document reads as a bare job title.
pub fn is_implicit_title(line: &str) -> bool {
    let text = line.trim();
    let len = text.chars().count();
    is_all_caps(text)
        && (3..=70).contains(&len)
        && !text.contains(',')
        && !has_sentence_punctuation(text)
}

/// Parses salary text such as `KES 145,000 – 220,000` or `80k - 120k`.
///
/// Currency tokens and thousands separators are ignored and a `k` suffix
/// multiplies by 1000. A single figure yields only `min`. Text without any
/// figure yields an empty range.
pub fn extract_salary_range(text: &str) -> SalaryRange {
    let cleaned = strip_thousands_separators(&CURRENCY_RE.replace_all(text, " "));

    if let Some(caps) = RANGE_RE.captures(&cleaned) {
        let min = scaled(caps.get(1).map(|m| m.as_str()), caps.get(2).is_some());
        let max = scaled(caps.get(3).map(|m| m.as_str()), caps.get(4).is_some());
        if min.is_some() && max.is_some() {
            return SalaryRange { min, max };
        }
    }

    if let Some(caps) = SINGLE_RE.captures(&cleaned) {
        return SalaryRange {
            min: scaled(caps.get(1).map(|m| m.as_str()), caps.get(2).is_some()),
            max: None,
        };
    }

    SalaryRange::default()
}

fn scaled(figure: Option<&str>, thousands: bool) -> Option<i64> {
    let value: f64 = figure?.parse().ok()?;
    let value = if thousands { value * 1000.0 } else { value };
    if !value.is_finite() || value > i64::MAX as f64 {
        return None;
    }
    Some(value.round() as i64)
}

/// Drops commas that sit between two digits (`145,000` -> `145000`).
fn strip_thousands_separators(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            !(c == ','
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()))
        })
        .map(|(_, &c)| c)
        .collect()
}
