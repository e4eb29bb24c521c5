//! The admin editor's in-progress job buffer.

use serde::{Deserialize, Serialize};

use crate::jd::metadata::{match_metadata_line, MetadataKind};
use crate::jd::questions::Question;
use crate::jd::{description_to_sections, ParsedJD, SectionKey, Sections};

/// Editable job fields. Sections stay split until the draft is finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDraft {
    pub title: String,
    pub location: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub sections: Sections,
    pub questions: Vec<Question>,
}

impl JobDraft {
    /// Loads a stored job into an editable draft.
    ///
    /// A leading `Location: ...` line in the overview (as written by the
    /// paste parser) is surfaced as `location`. The line stays in the
    /// overview and is rewritten from `location` on finalize.
    pub fn from_description(title: &str, description: &str) -> Self {
        let sections = description_to_sections(description);
        let location = sections
            .overview
            .lines()
            .next()
            .and_then(match_metadata_line)
            .filter(|meta| meta.kind == MetadataKind::Location)
            .map(|meta| meta.value.to_string());

        JobDraft {
            title: title.trim().to_string(),
            location,
            sections,
            ..Default::default()
        }
    }

    /// Merges a paste result into the draft.
    ///
    /// Non-empty parsed sections replace the draft's. Title and location are
    /// replaced only when the paste has them; salary bounds are replaced
    /// together when the paste found either bound. Parsed questions are
    /// appended and the full list is renumbered.
    pub fn merge_parsed(&mut self, parsed: ParsedJD) {
        for key in SectionKey::ALL {
            let text = parsed.sections.get(key).trim();
            if !text.is_empty() {
                *self.sections.get_mut(key) = text.to_string();
            }
        }

        if let Some(title) = parsed.title {
            self.title = title;
        }
        if parsed.location.is_some() {
            self.location = parsed.location;
        }
        if parsed.salary_min.is_some() || parsed.salary_max.is_some() {
            self.salary_min = parsed.salary_min;
            self.salary_max = parsed.salary_max;
        }

        self.questions.extend(parsed.questions);
        self.renumber_questions();
    }

    /// Sections with the overview's leading `Location:` line matching
    /// `location`. A missing or blank location removes the line.
    pub fn sections_with_location(&self) -> Sections {
        let overview = self.sections.overview.trim_start();
        let body = match overview.lines().next().and_then(match_metadata_line) {
            Some(meta) if meta.kind == MetadataKind::Location => overview
                .split_once('\n')
                .map_or("", |(_, rest)| rest)
                .trim_start(),
            _ => overview,
        };

        let location = self.location.as_deref().map(str::trim).filter(|l| !l.is_empty());
        let mut sections = self.sections.clone();
        sections.overview = match location {
            Some(location) if body.is_empty() => format!("Location: {location}"),
            Some(location) => format!("Location: {location}\n{body}"),
            None => body.to_string(),
        };
        sections
    }

    pub fn renumber_questions(&mut self) {
        for (i, question) in self.questions.iter_mut().enumerate() {
            question.order = i as u32;
        }
    }
}
