//! Screening question lines from the "Application Questions" block.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NUMBERING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+[.)]|[Qq#]\d+[.)]|[•\-*])\s*").expect("numbering"));
static YES_NO_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\s*(?:yes\s*/\s*no|y\s*/\s*n)\s*\)").expect("yes/no marker")
});
static YES_OR_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\byes or no\b").expect("yes or no phrase"));

const MIN_PROMPT_CHARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    YesNo,
    Text,
}

/// A screening question shown to applicants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub order: u32,
}

/// Parses one question line. Returns `None` for lines too short to be a prompt.
///
/// The caller assigns `order`; it is left at zero here.
pub fn parse_question_line(line: &str) -> Option<Question> {
    let trimmed = line.trim();
    let cleaned = NUMBERING_RE.replace(trimmed, "");
    let cleaned = cleaned.trim();
    if cleaned.chars().count() < MIN_PROMPT_CHARS {
        return None;
    }

    let has_marker = YES_NO_SUFFIX_RE.is_match(cleaned);
    let kind = if has_marker || YES_OR_NO_RE.is_match(cleaned) {
        QuestionKind::YesNo
    } else {
        QuestionKind::Text
    };

    let prompt = if has_marker {
        YES_NO_SUFFIX_RE.replace_all(cleaned, "").trim().to_string()
    } else {
        cleaned.to_string()
    };

    Some(Question {
        kind,
        prompt,
        required: false,
        order: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_yes_no_question() {
        let q = parse_question_line("1. Do you have a driver's license? (Yes/No)").unwrap();
        assert_eq!(q.kind, QuestionKind::YesNo);
        assert_eq!(q.prompt, "Do you have a driver's license?");
        assert!(!q.required);
    }

    #[test]
    fn test_bulleted_text_question() {
        let q = parse_question_line("- Describe your experience with X").unwrap();
        assert_eq!(q.kind, QuestionKind::Text);
        assert_eq!(q.prompt, "Describe your experience with X");
    }

    #[test]
    fn test_y_n_marker_with_spaces() {
        let q = parse_question_line("Q2) Are you based in Nairobi? ( y / n )").unwrap();
        assert_eq!(q.kind, QuestionKind::YesNo);
        assert_eq!(q.prompt, "Are you based in Nairobi?");
    }

    #[test]
    fn test_yes_or_no_phrase_keeps_prompt() {
        let q = parse_question_line("#3. Can you start immediately, yes or no?").unwrap();
        assert_eq!(q.kind, QuestionKind::YesNo);
        assert_eq!(q.prompt, "Can you start immediately, yes or no?");
    }

    #[test]
    fn test_other_bullets_and_numbering() {
        assert_eq!(
            parse_question_line("* What is your notice period").unwrap().prompt,
            "What is your notice period"
        );
        assert_eq!(
            parse_question_line("• Expected salary?").unwrap().prompt,
            "Expected salary?"
        );
        assert_eq!(
            parse_question_line("12) Why this role?").unwrap().prompt,
            "Why this role?"
        );
    }

    #[test]
    fn test_short_lines_are_rejected() {
        assert_eq!(parse_question_line(""), None);
        assert_eq!(parse_question_line("   "), None);
        assert_eq!(parse_question_line("1. Age"), None);
        assert_eq!(parse_question_line("- ok?"), None);
    }

    #[test]
    fn test_question_serializes_type_field() {
        let q = parse_question_line("Do you hold a CPA? (yes/no)").unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "yes_no");
        assert_eq!(json["prompt"], "Do you hold a CPA?");
        assert_eq!(json["order"], 0);
    }
}
