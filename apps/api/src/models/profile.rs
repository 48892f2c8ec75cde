//! Raw profile input — what the form-wizard collects before enhancement.
//!
//! Every field is independently omittable; missing JSON keys deserialize to
//! empty strings/vectors rather than failing the request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub website: String,
}

/// One work-experience entry as entered by the user. `responsibilities` is
/// free text that the enhancer rewrites into achievement bullets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceInput {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationInput {
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

/// The complete raw profile submitted for resume generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceInput>,
    #[serde(default)]
    pub education: Vec<EducationInput>,
}
