//! Content Enhancement — turns the raw profile into a finished ContentRecord.
//!
//! Flow: per-experience bullet generation → summary rewrite → skills
//! categorization → record assembly. Education entries pass through without
//! an LLM call. The document core consumes the resulting record as-is.
//!
//! `ContentEnhancer` is a trait so handlers and tests can run the pipeline
//! against a stub without network access.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::fill;
use crate::llm_client::LlmClient;
use crate::models::profile::{ExperienceInput, UserProfile};
use crate::models::resume::{ContentRecord, EducationEntry, ExperienceEntry};

pub mod prompts;

use prompts::{
    EXPERIENCE_PROMPT_TEMPLATE, EXPERIENCE_SYSTEM, SKILLS_PROMPT_TEMPLATE, SKILLS_SYSTEM,
    SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM,
};

// ────────────────────────────────────────────────────────────────────────────
// Enhancer trait + LLM implementation
// ────────────────────────────────────────────────────────────────────────────

/// The content-enhancement collaborator. One method per enhanced section.
#[async_trait]
pub trait ContentEnhancer: Send + Sync {
    /// Returns achievement bullets for one experience entry, newline-separated,
    /// each line prefixed with a bullet marker.
    async fn enhance_experience(&self, exp: &ExperienceInput) -> Result<String, AppError>;

    /// Returns a rewritten professional summary paragraph.
    async fn enhance_summary(&self, summary: &str, skills: &[String]) -> Result<String, AppError>;

    /// Returns a categorized "CATEGORY: skill | skill" block.
    async fn enhance_skills(&self, skills: &[String]) -> Result<String, AppError>;
}

/// Production enhancer backed by the Anthropic API.
#[derive(Clone)]
pub struct LlmEnhancer {
    llm: LlmClient,
}

impl LlmEnhancer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ContentEnhancer for LlmEnhancer {
    async fn enhance_experience(&self, exp: &ExperienceInput) -> Result<String, AppError> {
        let prompt = fill(
            EXPERIENCE_PROMPT_TEMPLATE,
            &[
                ("company", exp.company.as_str()),
                ("position", exp.position.as_str()),
                ("duration", exp.duration.as_str()),
                ("responsibilities", exp.responsibilities.as_str()),
            ],
        );
        Ok(self.llm.call_text(&prompt, EXPERIENCE_SYSTEM).await?)
    }

    async fn enhance_summary(&self, summary: &str, skills: &[String]) -> Result<String, AppError> {
        let prompt = fill(
            SUMMARY_PROMPT_TEMPLATE,
            &[("summary", summary), ("skills", &skills.join(", "))],
        );
        Ok(self.llm.call_text(&prompt, SUMMARY_SYSTEM).await?)
    }

    async fn enhance_skills(&self, skills: &[String]) -> Result<String, AppError> {
        let prompt = fill(SKILLS_PROMPT_TEMPLATE, &[("skills", &skills.join(", "))]);
        Ok(self.llm.call_text(&prompt, SKILLS_SYSTEM).await?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record assembly
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full enhancement pipeline and assembles the ContentRecord.
///
/// Entry order is preserved exactly; sections with no input skip their LLM
/// call and land in the record as `None`.
pub async fn build_content_record(
    profile: &UserProfile,
    enhancer: &dyn ContentEnhancer,
) -> Result<ContentRecord, AppError> {
    info!(
        "Enhancing profile: {} experience entries, {} education entries, {} skills",
        profile.experience.len(),
        profile.education.len(),
        profile.skills.len()
    );

    let mut experience = Vec::with_capacity(profile.experience.len());
    for exp in &profile.experience {
        let bullets = enhancer.enhance_experience(exp).await?;
        experience.push(ExperienceEntry {
            company: exp.company.clone(),
            position: exp.position.clone(),
            duration: exp.duration.clone(),
            achievements: tidy_text(&bullets),
        });
    }

    let professional_summary =
        if profile.summary.trim().is_empty() && profile.skills.is_empty() {
            None
        } else {
            let summary = enhancer
                .enhance_summary(&profile.summary, &profile.skills)
                .await?;
            Some(tidy_text(&summary))
        };

    let skills = if profile.skills.is_empty() {
        None
    } else {
        Some(tidy_text(&enhancer.enhance_skills(&profile.skills).await?))
    };

    let education = profile
        .education
        .iter()
        .map(|edu| EducationEntry {
            institution: edu.institution.clone(),
            degree: edu.degree.clone(),
            field_of_study: edu.field_of_study.clone(),
            year: edu.year.clone(),
            grade: edu.grade.clone(),
            location: edu.location.clone(),
            achievements: edu.achievements.clone(),
        })
        .collect();

    let p = &profile.personal_info;
    Ok(ContentRecord {
        name: optional(&p.name),
        email: optional(&p.email),
        phone: optional(&p.phone),
        location: optional(&p.location),
        linkedin: optional(&p.linkedin),
        github: optional(&p.github),
        website: optional(&p.website),
        professional_summary,
        experience,
        education,
        skills,
    })
}

/// Normalizes LLM output: trims each line, drops leading/trailing blank lines.
pub fn tidy_text(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(s), Some(e)) => lines[s..=e].join("\n"),
        _ => String::new(),
    }
}

fn optional(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EducationInput, PersonalInfo};

    /// Canned enhancer — no network.
    struct StubEnhancer;

    #[async_trait]
    impl ContentEnhancer for StubEnhancer {
        async fn enhance_experience(&self, exp: &ExperienceInput) -> Result<String, AppError> {
            Ok(format!("* Improved {}\n* Led {}", exp.company, exp.position))
        }

        async fn enhance_summary(
            &self,
            summary: &str,
            _skills: &[String],
        ) -> Result<String, AppError> {
            Ok(format!("  {summary} (enhanced)  \n"))
        }

        async fn enhance_skills(&self, skills: &[String]) -> Result<String, AppError> {
            Ok(format!("TECHNICAL: {}", skills.join(" | ")))
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                email: "j@x.com".to_string(),
                phone: "   ".to_string(),
                ..Default::default()
            },
            summary: "Engineer with 5 years of experience".to_string(),
            skills: vec!["Python".to_string(), "Go".to_string()],
            experience: vec![
                ExperienceInput {
                    company: "Acme".to_string(),
                    position: "Eng".to_string(),
                    duration: "2020-2022".to_string(),
                    responsibilities: "built things".to_string(),
                },
                ExperienceInput {
                    company: "Globex".to_string(),
                    position: "Lead".to_string(),
                    ..Default::default()
                },
            ],
            education: vec![EducationInput {
                institution: "MIT".to_string(),
                ..Default::default()
            }],
        }
    }

    // ── tidy_text ───────────────────────────────────────────────────────────

    #[test]
    fn test_tidy_text_trims_lines_and_edges() {
        let input = "\n\n  * Did X  \n\n   * Did Y\n\n\n";
        assert_eq!(tidy_text(input), "* Did X\n\n* Did Y");
    }

    #[test]
    fn test_tidy_text_all_blank_is_empty() {
        assert_eq!(tidy_text("  \n \n"), "");
    }

    #[test]
    fn test_tidy_text_single_line() {
        assert_eq!(tidy_text("  hello  "), "hello");
    }

    // ── build_content_record ────────────────────────────────────────────────

    #[tokio::test]
    async fn test_build_record_preserves_entry_order() {
        let record = build_content_record(&profile(), &StubEnhancer).await.unwrap();
        assert_eq!(record.experience.len(), 2);
        assert_eq!(record.experience[0].company, "Acme");
        assert_eq!(record.experience[1].company, "Globex");
        assert!(record.experience[0].achievements.contains("Improved Acme"));
    }

    #[tokio::test]
    async fn test_build_record_personal_fields_filtered() {
        let record = build_content_record(&profile(), &StubEnhancer).await.unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.email.as_deref(), Some("j@x.com"));
        // whitespace-only phone becomes None
        assert_eq!(record.phone, None);
        assert_eq!(record.linkedin, None);
    }

    #[tokio::test]
    async fn test_build_record_summary_and_skills_enhanced() {
        let record = build_content_record(&profile(), &StubEnhancer).await.unwrap();
        assert_eq!(
            record.professional_summary.as_deref(),
            Some("Engineer with 5 years of experience (enhanced)")
        );
        assert_eq!(record.skills.as_deref(), Some("TECHNICAL: Python | Go"));
    }

    #[tokio::test]
    async fn test_build_record_empty_sections_skip_llm() {
        let empty = UserProfile::default();
        let record = build_content_record(&empty, &StubEnhancer).await.unwrap();
        assert_eq!(record.professional_summary, None);
        assert_eq!(record.skills, None);
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
    }

    #[tokio::test]
    async fn test_build_record_education_passes_through() {
        let record = build_content_record(&profile(), &StubEnhancer).await.unwrap();
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].institution, "MIT");
        assert_eq!(record.education[0].degree, "");
    }
}
