//! Full job-description paste parser.
//!
//! Scans the text line by line with a small state machine. The active
//! bucket decides where content lines go:
//!
//! - `Pre`: before any heading; committed to `overview` if it is still empty
//! - `Section(key)`: appended to that section as a new block
//! - `Questions`: each line parsed as a screening question
//! - `Skip`: collected, then dropped on commit
//! - `KeptUnknown`: like `Skip`, but appended to `overview` on commit
//!
//! Every bucket change, and the end of input, commits the accumulated lines.
//! Parsing never fails; unrecognized input degrades to `overview` or `Skip`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::jd::headings::{classify_heading, is_questions_heading, strip_heading, Heading};
use crate::jd::metadata::{
    extract_salary_range, is_implicit_title, match_metadata_line, MetadataKind, MetadataLine,
    SalaryRange,
};
use crate::jd::questions::{parse_question_line, Question};
use crate::jd::sections::{SectionKey, Sections};

const BULLET_CHARS: &[char] = &['•', '·', '◦', '▸', '▪', '►', '✓', '✗', '→'];

/// Structured result of parsing a pasted job description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedJD {
    pub sections: Sections,
    pub title: Option<String>,
    pub location: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub questions: Vec<Question>,
}

/// What happens to content under a heading that names no known section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownHeadingPolicy {
    /// Collect and drop it.
    #[default]
    Discard,
    /// Keep the heading and its body as an extra `overview` block.
    Overview,
}

impl FromStr for UnknownHeadingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard" => Ok(UnknownHeadingPolicy::Discard),
            "overview" => Ok(UnknownHeadingPolicy::Overview),
            other => Err(format!("unknown heading policy '{other}' (expected discard|overview)")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub unknown_headings: UnknownHeadingPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Pre,
    Section(SectionKey),
    Questions,
    Skip,
    KeptUnknown,
}

/// Scanner state plus everything extracted so far.
struct Accumulator {
    options: ParseOptions,
    bucket: Bucket,
    accumulated: Vec<String>,
    prev_blank: bool,
    seen_content: bool,

    sections: Sections,
    questions: Vec<Question>,
    title: Option<String>,
    implicit_title: Option<String>,
    location: Option<String>,
    salary: Option<SalaryRange>,
}

impl Accumulator {
    fn new(options: ParseOptions) -> Self {
        Self {
            options,
            bucket: Bucket::Pre,
            accumulated: Vec::new(),
            prev_blank: true,
            seen_content: false,
            sections: Sections::default(),
            questions: Vec::new(),
            title: None,
            implicit_title: None,
            location: None,
            salary: None,
        }
    }

    fn step(&mut self, line: &str) {
        let text = line.trim();
        if text.is_empty() {
            if matches!(
                self.bucket,
                Bucket::Section(_) | Bucket::Questions | Bucket::KeptUnknown
            ) {
                self.accumulated.push(String::new());
            }
            self.prev_blank = true;
            return;
        }

        let first_line = !self.seen_content;
        self.seen_content = true;
        self.handle_content_line(text, first_line);
        self.prev_blank = false;
    }

    fn handle_content_line(&mut self, text: &str, first_line: bool) {
        if matches!(self.bucket, Bucket::Pre | Bucket::Skip | Bucket::KeptUnknown) {
            if let Some(meta) = match_metadata_line(text) {
                self.record_metadata(meta);
                return;
            }
        }

        if is_questions_heading(text) {
            self.switch_to(Bucket::Questions);
            return;
        }

        let heading = classify_heading(text, self.prev_blank);

        if first_line
            && !matches!(heading, Some(Heading::Known(_) | Heading::Metadata(_)))
            && is_implicit_title(text)
        {
            self.implicit_title = Some(strip_heading(text).to_string());
            return;
        }

        match heading {
            None => self.accumulated.push(normalize_bullet(text)),
            Some(Heading::Generic)
                if self.options.unknown_headings == UnknownHeadingPolicy::Overview =>
            {
                self.switch_to(Bucket::KeptUnknown);
                self.accumulated.push(text.to_string());
            }
            Some(heading) => {
                self.switch_to(heading.section_key().map_or(Bucket::Skip, Bucket::Section))
            }
        }
    }

    fn record_metadata(&mut self, meta: MetadataLine<'_>) {
        match meta.kind {
            MetadataKind::Title => {
                self.title.get_or_insert_with(|| meta.value.to_string());
            }
            MetadataKind::Location => {
                self.location.get_or_insert_with(|| meta.value.to_string());
            }
            MetadataKind::Salary => {
                if self.salary.is_none() {
                    let range = extract_salary_range(meta.value);
                    if !range.is_empty() {
                        self.salary = Some(range);
                    }
                }
            }
        }
    }

    fn switch_to(&mut self, bucket: Bucket) {
        self.commit();
        self.bucket = bucket;
    }

    fn commit(&mut self) {
        let lines = std::mem::take(&mut self.accumulated);
        let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(start, |i| i + 1);
        let block = &lines[start..end];

        match self.bucket {
            Bucket::Pre => {
                if self.sections.overview.is_empty() {
                    self.sections.overview = block.join("\n");
                }
            }
            Bucket::Section(key) => self.sections.append(key, &block.join("\n")),
            Bucket::KeptUnknown => self
                .sections
                .append(SectionKey::Overview, &block.join("\n")),
            Bucket::Questions => {
                for line in block {
                    if let Some(mut question) = parse_question_line(line) {
                        question.order = self.questions.len() as u32;
                        self.questions.push(question);
                    }
                }
            }
            Bucket::Skip => {
                if !block.is_empty() {
                    debug!("Dropping {} lines under an unrecognized heading", block.len());
                }
            }
        }
    }

    fn finish(mut self) -> ParsedJD {
        self.commit();

        if let Some(location) = &self.location {
            let overview = &mut self.sections.overview;
            *overview = if overview.is_empty() {
                format!("Location: {location}")
            } else {
                format!("Location: {location}\n{overview}")
            };
        }

        let salary = self
            .salary
            .or_else(|| {
                self.sections
                    .compensation
                    .lines()
                    .find(|l| !l.trim().is_empty())
                    .map(extract_salary_range)
            })
            .unwrap_or_default();

        ParsedJD {
            sections: self.sections,
            title: self.title.or(self.implicit_title),
            location: self.location,
            salary_min: salary.min,
            salary_max: salary.max,
            questions: self.questions,
        }
    }
}

/// Rewrites a leading bullet glyph as a markdown-style `- ` bullet.
fn normalize_bullet(text: &str) -> String {
    match text.strip_prefix(BULLET_CHARS) {
        Some(rest) => format!("- {}", rest.trim_start()),
        None => text.to_string(),
    }
}

/// Parses a pasted job description with the default options.
pub fn parse_full_jd(raw_text: &str) -> ParsedJD {
    parse_full_jd_with(raw_text, ParseOptions::default())
}

pub fn parse_full_jd_with(raw_text: &str, options: ParseOptions) -> ParsedJD {
    let mut acc = Accumulator::new(options);
    for line in raw_text.lines() {
        acc.step(line);
    }
    let parsed = acc.finish();

    debug!(
        "Parsed JD: {} sections, {} questions, title={}",
        parsed.sections.filled_count(),
        parsed.questions.len(),
        parsed.title.is_some()
    );
    parsed
}
