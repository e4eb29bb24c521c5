//! Canonical job-description sections and the stored-text round trip.
//!
//! A stored description is the non-empty sections joined as `"<Label>:\n<text>"`
//! blocks, separated by a blank line, always in [`SectionKey::ALL`] order.

use serde::{Deserialize, Serialize};

use crate::jd::headings::match_known_heading;

/// One of the eight fixed job-description categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Overview,
    Responsibilities,
    Education,
    Skills,
    Kpis,
    Compensation,
    Benefits,
    Growth,
}

impl SectionKey {
    /// Declaration order. Drives both display and reconstruction order.
    pub const ALL: [SectionKey; 8] = [
        SectionKey::Overview,
        SectionKey::Responsibilities,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Kpis,
        SectionKey::Compensation,
        SectionKey::Benefits,
        SectionKey::Growth,
    ];

    /// Heading text written into stored descriptions.
    pub fn label(self) -> &'static str {
        match self {
            SectionKey::Overview => "Overview",
            SectionKey::Responsibilities => "Responsibilities",
            SectionKey::Education => "Education & Experience",
            SectionKey::Skills => "Skills",
            SectionKey::Kpis => "KPIs",
            SectionKey::Compensation => "Compensation",
            SectionKey::Benefits => "Benefits",
            SectionKey::Growth => "Growth Path",
        }
    }
}

/// Free text per section. Every key is always present; "missing" means empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    pub overview: String,
    pub responsibilities: String,
    pub education: String,
    pub skills: String,
    pub kpis: String,
    pub compensation: String,
    pub benefits: String,
    pub growth: String,
}

impl Sections {
    pub fn get(&self, key: SectionKey) -> &str {
        match key {
            SectionKey::Overview => &self.overview,
            SectionKey::Responsibilities => &self.responsibilities,
            SectionKey::Education => &self.education,
            SectionKey::Skills => &self.skills,
            SectionKey::Kpis => &self.kpis,
            SectionKey::Compensation => &self.compensation,
            SectionKey::Benefits => &self.benefits,
            SectionKey::Growth => &self.growth,
        }
    }

    pub fn get_mut(&mut self, key: SectionKey) -> &mut String {
        match key {
            SectionKey::Overview => &mut self.overview,
            SectionKey::Responsibilities => &mut self.responsibilities,
            SectionKey::Education => &mut self.education,
            SectionKey::Skills => &mut self.skills,
            SectionKey::Kpis => &mut self.kpis,
            SectionKey::Compensation => &mut self.compensation,
            SectionKey::Benefits => &mut self.benefits,
            SectionKey::Growth => &mut self.growth,
        }
    }

    /// Appends a block to a section, separated from existing text by a blank line.
    pub fn append(&mut self, key: SectionKey, text: &str) {
        if text.is_empty() {
            return;
        }
        let slot = self.get_mut(key);
        if !slot.is_empty() {
            slot.push_str("\n\n");
        }
        slot.push_str(text);
    }

    pub fn is_empty(&self) -> bool {
        SectionKey::ALL
            .iter()
            .all(|&key| self.get(key).trim().is_empty())
    }

    /// Number of sections holding non-blank text.
    pub fn filled_count(&self) -> usize {
        SectionKey::ALL
            .iter()
            .filter(|&&key| !self.get(key).trim().is_empty())
            .count()
    }

    /// Copy with every section trimmed; the form a stored round trip produces.
    #[cfg(test)]
    pub fn normalized(&self) -> Sections {
        let mut out = Sections::default();
        for key in SectionKey::ALL {
            *out.get_mut(key) = self.get(key).trim().to_string();
        }
        out
    }
}

/// Canonicalizes edited sections into the stored description string.
pub fn sections_to_description(sections: &Sections) -> String {
    SectionKey::ALL
        .iter()
        .filter_map(|&key| {
            let text = sections.get(key).trim();
            (!text.is_empty()).then(|| format!("{}:\n{}", key.label(), text))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Splits a stored description back into editable sections.
///
/// Only recognized headings split the text. Lines before the first heading
/// land in `overview`. If no heading matches anywhere, the whole description
/// is returned as `overview` untouched so legacy free-form text survives.
pub fn description_to_sections(description: &str) -> Sections {
    let mut blocks: Vec<(SectionKey, Vec<&str>)> = Vec::new();
    let mut current = SectionKey::Overview;
    let mut lines: Vec<&str> = Vec::new();
    let mut any_heading = false;

    for line in description.lines() {
        if let Some(key) = match_known_heading(line) {
            blocks.push((current, std::mem::take(&mut lines)));
            current = key;
            any_heading = true;
        } else {
            lines.push(line);
        }
    }
    blocks.push((current, lines));

    let mut sections = Sections::default();
    if !any_heading {
        sections.overview = description.to_string();
        return sections;
    }

    for (key, block) in blocks {
        let text = block.join("\n");
        sections.append(key, text.trim());
    }
    sections
}
