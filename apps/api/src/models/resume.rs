//! ContentRecord — the normalized, already-enhanced resume content consumed
//! by the document core.
//!
//! A record is produced once (by the enhancement pipeline or directly by the
//! caller) and never mutated afterwards. Entry sequences preserve input order;
//! the core never sorts or reorders them. Every field except the entry lists
//! is independently omittable — omission suppresses only that field's
//! rendering, never its siblings'.

use serde::{Deserialize, Serialize};

/// One enhanced work-experience entry. `achievements` is free text with one
/// achievement per line, each line optionally prefixed with a bullet marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub achievements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub achievements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub professional_summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    /// Either freeform prose or a pre-categorized "CATEGORY: skill | skill" block.
    #[serde(default)]
    pub skills: Option<String>,
}
