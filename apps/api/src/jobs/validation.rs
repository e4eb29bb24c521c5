use serde::{Deserialize, Serialize};

use crate::jd::questions::Question;
use crate::jd::sections_to_description;
use crate::jobs::draft::JobDraft;

const MAX_TITLE_CHARS: usize = 200;
const MIN_PROMPT_CHARS: usize = 5;

/// A single problem blocking a draft from being saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftIssue {
    pub field: String,
    pub message: String,
}

impl DraftIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Save payload handed to the job store. `description` is the canonical stored text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSubmission {
    pub title: String,
    pub description: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub questions: Vec<Question>,
}

/// Collects every issue with the draft. An empty list means it can be saved.
pub fn validate_draft(draft: &JobDraft) -> Vec<DraftIssue> {
    let mut issues = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        issues.push(DraftIssue::new("title", "Title is required"));
    } else if title.chars().count() > MAX_TITLE_CHARS {
        issues.push(DraftIssue::new(
            "title",
            format!("Title must be at most {MAX_TITLE_CHARS} characters"),
        ));
    }

    if draft.sections.is_empty() {
        issues.push(DraftIssue::new(
            "sections",
            "At least one description section must have content",
        ));
    }

    for (field, value) in [("salary_min", draft.salary_min), ("salary_max", draft.salary_max)] {
        if value.is_some_and(|v| v < 0) {
            issues.push(DraftIssue::new(field, "Salary cannot be negative"));
        }
    }
    if let (Some(min), Some(max)) = (draft.salary_min, draft.salary_max) {
        if min > max {
            issues.push(DraftIssue::new(
                "salary_max",
                format!("Maximum salary {max} is below minimum {min}"),
            ));
        }
    }

    for (i, question) in draft.questions.iter().enumerate() {
        if question.prompt.trim().chars().count() < MIN_PROMPT_CHARS {
            issues.push(DraftIssue::new(
                format!("questions[{i}].prompt"),
                format!("Question prompt must be at least {MIN_PROMPT_CHARS} characters"),
            ));
        }
    }

    issues
}

impl JobDraft {
    /// Validates the draft and builds the save payload.
    pub fn finalize(&self) -> Result<JobSubmission, Vec<DraftIssue>> {
        let issues = validate_draft(self);
        if !issues.is_empty() {
            return Err(issues);
        }

        let questions = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| Question {
                prompt: q.prompt.trim().to_string(),
                order: i as u32,
                ..q.clone()
            })
            .collect();

        Ok(JobSubmission {
            title: self.title.trim().to_string(),
            description: sections_to_description(&self.sections_with_location()),
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jd::questions::QuestionKind;
    use crate::jd::Sections;

    fn valid_draft() -> JobDraft {
        JobDraft {
            title: "  Senior Accountant ".to_string(),
            location: Some("Nairobi".to_string()),
            salary_min: Some(145_000),
            salary_max: Some(220_000),
            sections: Sections {
                overview: "Location: Nairobi\nJoin our finance team.".to_string(),
                responsibilities: "- Prepare accounts".to_string(),
                ..Default::default()
            },
            questions: vec![
                Question {
                    kind: QuestionKind::YesNo,
                    prompt: " Do you hold a CPA? ".to_string(),
                    required: true,
                    order: 7,
                },
                Question {
                    kind: QuestionKind::Text,
                    prompt: "Describe your IFRS experience".to_string(),
                    required: false,
                    order: 3,
                },
            ],
        }
    }

    #[test]
    fn test_valid_draft_finalizes() {
        let submission = valid_draft().finalize().unwrap();
        assert_eq!(submission.title, "Senior Accountant");
        assert_eq!(
            submission.description,
            "Overview:\nLocation: Nairobi\nJoin our finance team.\n\nResponsibilities:\n- Prepare accounts"
        );
        assert_eq!(submission.salary_min, Some(145_000));
        assert_eq!(submission.questions[0].prompt, "Do you hold a CPA?");
        assert!(submission.questions[0].required);
        let orders: Vec<_> = submission.questions.iter().map(|q| q.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }

    #[test]
    fn test_missing_title_and_sections() {
        let issues = validate_draft(&JobDraft::default());
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "sections"]);
    }

    #[test]
    fn test_long_title_rejected() {
        let draft = JobDraft {
            title: "x".repeat(201),
            ..valid_draft()
        };
        let issues = validate_draft(&draft);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "title");
    }

    #[test]
    fn test_salary_rules() {
        let draft = JobDraft {
            salary_min: Some(300_000),
            salary_max: Some(200_000),
            ..valid_draft()
        };
        let issues = validate_draft(&draft);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "salary_max");

        let draft = JobDraft {
            salary_min: Some(-1),
            salary_max: None,
            ..valid_draft()
        };
        let issues = validate_draft(&draft);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "salary_min");
    }

    #[test]
    fn test_short_question_prompt_reported_by_index() {
        let mut draft = valid_draft();
        draft.questions[1].prompt = "Why".to_string();
        let err = draft.finalize().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err[0].field, "questions[1].prompt");
    }

    #[test]
    fn test_edited_location_rewrites_overview_line() {
        let draft = JobDraft {
            location: Some("Mombasa".to_string()),
            ..valid_draft()
        };
        let submission = draft.finalize().unwrap();
        assert!(submission
            .description
            .starts_with("Overview:\nLocation: Mombasa\nJoin our finance team."));
        assert!(!submission.description.contains("Nairobi"));

        let reloaded = JobDraft::from_description(&submission.title, &submission.description);
        assert_eq!(reloaded.location.as_deref(), Some("Mombasa"));
    }

    #[test]
    fn test_cleared_location_drops_overview_line() {
        let draft = JobDraft {
            location: None,
            ..valid_draft()
        };
        let submission = draft.finalize().unwrap();
        assert!(submission
            .description
            .starts_with("Overview:\nJoin our finance team.\n\nResponsibilities:"));
    }

    #[test]
    fn test_new_location_is_prepended_to_overview() {
        let draft = JobDraft {
            location: Some(" Remote ".to_string()),
            sections: Sections {
                overview: "Join our finance team.".to_string(),
                ..Default::default()
            },
            ..valid_draft()
        };
        assert_eq!(
            draft.sections_with_location().overview,
            "Location: Remote\nJoin our finance team."
        );

        let draft = JobDraft {
            location: Some("Remote".to_string()),
            sections: Sections {
                skills: "Excel".to_string(),
                ..Default::default()
            },
            ..valid_draft()
        };
        assert_eq!(draft.sections_with_location().overview, "Location: Remote");
    }

    #[test]
    fn test_finalized_description_round_trips() {
        let draft = valid_draft();
        let submission = draft.finalize().unwrap();
        let reloaded = JobDraft::from_description(&submission.title, &submission.description);
        assert_eq!(reloaded.sections, draft.sections.normalized());
        assert_eq!(reloaded.location.as_deref(), Some("Nairobi"));
    }
}
