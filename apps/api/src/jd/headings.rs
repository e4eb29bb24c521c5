//! Heading detection for pasted job descriptions.
//!
//! Priority order: known section headings, then metadata keys (title,
//! location, salary), then the generic ALL-CAPS / trailing-colon rules.
//! Known and metadata headings match regardless of the preceding line;
//! generic headings only count after a blank line.

use std::sync::LazyLock;

use regex::Regex;

use crate::jd::metadata::{match_metadata_key, MetadataKind};
use crate::jd::sections::SectionKey;

macro_rules! re {
    ($name:ident, $($e:expr),* $(,)?) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(concat!($($e),*)).expect("static heading pattern"));
    };
}

re!(
    OVERVIEW_RE,
    r"(?i)^(?:overview|about|about (?:the )?(?:role|position|company|job|us)",
    r"|the role|job (?:summary|overview|description)|role (?:summary|overview)|summary)$",
);
re!(
    RESPONSIBILITIES_RE,
    r"(?i)^(?:(?:key |main |core )?responsibilities",
    r"|(?:key |main )?duties(?: (?:and|&) responsibilities)?",
    r"|what you(?:'ll|’ll| will) do)$",
);
re!(
    EDUCATION_RE,
    r"(?i)^(?:education(?: (?:and|&) (?:experience|qualifications))?",
    r"|(?:relevant |work )?experience|experience (?:and|&) qualifications",
    r"|(?:minimum |key |job )?requirements|(?:minimum |academic |required )?qualifications)$",
);
re!(
    SKILLS_RE,
    r"(?i)^(?:(?:required |key |technical |core |essential )?skills",
    r"(?: (?:and|&) (?:competencies|abilities))?",
    r"|(?:key )?competencies|what you(?: will)? bring|what you offer)$",
);
re!(
    KPIS_RE,
    r"(?i)^(?:kpis?|key performance indicators(?: \(kpis?\))?",
    r"|performance (?:metrics|indicators))$",
);
re!(
    COMPENSATION_RE,
    r"(?i)^(?:compensation|salary|remuneration(?: package)?",
    r"|compensation (?:and|&) benefits)$",
);
re!(
    BENEFITS_RE,
    r"(?i)^(?:(?:employee |staff )?benefits|perks(?: (?:and|&) benefits)?|what we offer)$",
);
re!(
    GROWTH_RE,
    r"(?i)^(?:growth path|career (?:growth|path|progression|development)",
    r"|growth (?:and|&) development|growth opportunities)$",
);
re!(
    QUESTIONS_RE,
    r"(?i)^(?:(?:application|screening|pre-?screening|applicant|interview) )?questions$",
);

/// What a heading line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// A recognized section label.
    Known(SectionKey),
    /// A bare metadata label such as "Location:" with no value.
    Metadata(MetadataKind),
    /// Looks like a heading but names nothing we place semantically.
    Generic,
}

impl Heading {
    /// The section receiving content under this heading, if any.
    pub fn section_key(self) -> Option<SectionKey> {
        match self {
            Heading::Known(key) => Some(key),
            Heading::Metadata(_) | Heading::Generic => None,
        }
    }
}

fn known_patterns() -> [(&'static Regex, SectionKey); 8] {
    [
        (&*OVERVIEW_RE, SectionKey::Overview),
        (&*RESPONSIBILITIES_RE, SectionKey::Responsibilities),
        (&*EDUCATION_RE, SectionKey::Education),
        (&*SKILLS_RE, SectionKey::Skills),
        (&*KPIS_RE, SectionKey::Kpis),
        (&*COMPENSATION_RE, SectionKey::Compensation),
        (&*BENEFITS_RE, SectionKey::Benefits),
        (&*GROWTH_RE, SectionKey::Growth),
    ]
}

/// Trims the line and drops a single trailing colon.
pub fn strip_heading(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed.strip_suffix(':').unwrap_or(trimmed).trim()
}

/// Matches a line against the known section headings only.
pub fn match_known_heading(line: &str) -> Option<SectionKey> {
    let stripped = strip_heading(line);
    if stripped.is_empty() {
        return None;
    }
    known_patterns()
        .into_iter()
        .find(|(re, _)| re.is_match(stripped))
        .map(|(_, key)| key)
}

pub fn is_questions_heading(line: &str) -> bool {
    QUESTIONS_RE.is_match(strip_heading(line))
}

/// Decides whether `line` is a heading and what it opens.
pub fn classify_heading(line: &str, prev_blank: bool) -> Option<Heading> {
    if let Some(key) = match_known_heading(line) {
        return Some(Heading::Known(key));
    }
    if let Some(kind) = match_metadata_key(strip_heading(line)) {
        return Some(Heading::Metadata(kind));
    }
    if prev_blank && is_generic_heading(line.trim()) {
        return Some(Heading::Generic);
    }
    None
}

fn is_generic_heading(text: &str) -> bool {
    is_all_caps_heading(text) || is_colon_heading(text)
}

pub(crate) fn is_all_caps(text: &str) -> bool {
    text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
}

pub(crate) fn has_sentence_punctuation(text: &str) -> bool {
    text.contains(['.', '!', '?'])
}

fn starts_with_digit(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn is_all_caps_heading(text: &str) -> bool {
    let len = text.chars().count();
    is_all_caps(text)
        && (3..=55).contains(&len)
        && !has_sentence_punctuation(text)
        && !starts_with_digit(text)
        && !text.contains(',')
}

fn is_colon_heading(text: &str) -> bool {
    let Some(stripped) = text.strip_suffix(':') else {
        return false;
    };
    let len = stripped.trim().chars().count();
    (2..=50).contains(&len) && !text.contains(',') && !starts_with_digit(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_headings_map_to_sections() {
        let cases = [
            ("Overview", SectionKey::Overview),
            ("About", SectionKey::Overview),
            ("About the role:", SectionKey::Overview),
            ("ABOUT US", SectionKey::Overview),
            ("Key Responsibilities:", SectionKey::Responsibilities),
            ("Duties", SectionKey::Responsibilities),
            ("Education & Experience", SectionKey::Education),
            ("Requirements:", SectionKey::Education),
            ("Qualifications", SectionKey::Education),
            ("Experience", SectionKey::Education),
            ("Skills", SectionKey::Skills),
            ("Required Skills:", SectionKey::Skills),
            ("What you bring", SectionKey::Skills),
            ("What you offer:", SectionKey::Skills),
            ("KPIs", SectionKey::Kpis),
            ("Key Performance Indicators", SectionKey::Kpis),
            ("Compensation", SectionKey::Compensation),
            ("Salary:", SectionKey::Compensation),
            ("Remuneration", SectionKey::Compensation),
            ("Benefits", SectionKey::Benefits),
            ("Growth Path:", SectionKey::Growth),
            ("Career Growth", SectionKey::Growth),
        ];
        for (line, expected) in cases {
            assert_eq!(match_known_heading(line), Some(expected), "line {line:?}");
        }
    }

    #[test]
    fn test_every_label_is_recognized() {
        for key in SectionKey::ALL {
            assert_eq!(match_known_heading(&format!("{}:", key.label())), Some(key));
        }
    }

    #[test]
    fn test_known_heading_ignores_prev_blank() {
        assert_eq!(
            classify_heading("Benefits:", false),
            Some(Heading::Known(SectionKey::Benefits))
        );
    }

    #[test]
    fn test_sentence_is_not_a_heading() {
        assert_eq!(match_known_heading("About the company we are great"), None);
        assert_eq!(classify_heading("We value skills and growth.", true), None);
    }

    #[test]
    fn test_metadata_label_is_classified_as_skip() {
        let heading = classify_heading("Location:", false).unwrap();
        assert_eq!(heading, Heading::Metadata(MetadataKind::Location));
        assert_eq!(heading.section_key(), None);
    }

    #[test]
    fn test_generic_caps_heading_requires_prev_blank() {
        assert_eq!(classify_heading("RANDOM SECTION TITLE", true), Some(Heading::Generic));
        assert_eq!(classify_heading("RANDOM SECTION TITLE", false), None);
    }

    #[test]
    fn test_generic_caps_heading_rejections() {
        assert_eq!(classify_heading("OK", true), None);
        assert_eq!(classify_heading("HELLO, WORLD", true), None);
        assert_eq!(classify_heading("APPLY NOW!", true), None);
        assert_eq!(classify_heading("2024 PLAN", true), None);
        assert_eq!(classify_heading("123", true), None);
        assert_eq!(classify_heading(&"A".repeat(56), true), None);
    }

    #[test]
    fn test_generic_colon_heading() {
        assert_eq!(classify_heading("Working hours:", true), Some(Heading::Generic));
        assert_eq!(classify_heading("Hours, days:", true), None);
        assert_eq!(classify_heading("1st shift:", true), None);
        assert_eq!(classify_heading("A:", true), None);
        assert_eq!(classify_heading("Working hours:", false), None);
    }

    #[test]
    fn test_questions_heading() {
        assert!(is_questions_heading("Application Questions:"));
        assert!(is_questions_heading("SCREENING QUESTIONS"));
        assert!(is_questions_heading("Questions"));
        assert!(!is_questions_heading("Any questions? Call us"));
    }

    #[test]
    fn test_strip_heading() {
        assert_eq!(strip_heading("  Skills :  "), "Skills");
        assert_eq!(strip_heading("Skills"), "Skills");
        assert_eq!(strip_heading(""), "");
    }
}
