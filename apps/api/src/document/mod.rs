//! Document core — turns a ContentRecord into a paginated PDF artifact plus
//! a structured preview.
//!
//! One blocking call per build, no shared state across builds: callers that
//! run builds concurrently for different users get fully independent
//! results. The pipeline is record → validate → assemble (ordered nodes) →
//! paginate/render (bytes) → preview (text fallback).

pub mod assembler;
pub mod error;
pub mod font_metrics;
pub mod node;
pub mod page;
pub mod preview;
pub mod section;
pub mod style;

use std::path::Path;

use error::DocumentError;
use node::LayoutNode;

use crate::models::resume::{ContentRecord, EducationEntry, ExperienceEntry};

/// The result of one document build.
#[derive(Debug)]
pub struct BuiltDocument {
    /// The assembled node sequence, in final semantic order.
    pub nodes: Vec<LayoutNode>,
    /// The PDF artifact.
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Plain-text rendering of the same content (preview fallback).
    pub preview: String,
}

/// Builds the complete document for a record. The single entry point of the
/// core; synchronous and side-effect-free.
pub fn build_document(record: &ContentRecord) -> Result<BuiltDocument, DocumentError> {
    validate_record(record)?;

    let nodes = assembler::assemble(record);
    let title = record
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!("{name} - Resume"))
        .unwrap_or_else(|| "Resume".to_string());

    let rendered = page::render(&nodes, &title)?;
    let preview = preview::render_text(&nodes);

    Ok(BuiltDocument {
        nodes,
        bytes: rendered.bytes,
        page_count: rendered.page_count,
        preview,
    })
}

/// Writes the artifact bytes to `path`. I/O failures are surfaced as a
/// distinct error kind; retrying is the caller's decision.
pub fn write_artifact(document: &BuiltDocument, path: &Path) -> Result<(), DocumentError> {
    std::fs::write(path, &document.bytes).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Input-shape validation
// ────────────────────────────────────────────────────────────────────────────

/// Rejects records whose text would corrupt layout before any rendering
/// happens. Newlines are legitimate only in achievement text; other control
/// characters are never valid.
pub fn validate_record(record: &ContentRecord) -> Result<(), DocumentError> {
    let single_line_fields = [
        ("name", &record.name),
        ("email", &record.email),
        ("phone", &record.phone),
        ("location", &record.location),
        ("linkedin", &record.linkedin),
        ("github", &record.github),
        ("website", &record.website),
    ];
    for (field, value) in single_line_fields {
        if let Some(value) = value {
            check_text(field, value, false)?;
        }
    }
    if let Some(summary) = &record.professional_summary {
        check_text("professional_summary", summary, true)?;
    }
    if let Some(skills) = &record.skills {
        check_text("skills", skills, true)?;
    }
    for (i, entry) in record.experience.iter().enumerate() {
        check_experience_entry(i, entry)?;
    }
    for (i, entry) in record.education.iter().enumerate() {
        check_education_entry(i, entry)?;
    }
    Ok(())
}

fn check_experience_entry(index: usize, entry: &ExperienceEntry) -> Result<(), DocumentError> {
    check_text(&format!("experience[{index}].company"), &entry.company, false)?;
    check_text(
        &format!("experience[{index}].position"),
        &entry.position,
        false,
    )?;
    check_text(
        &format!("experience[{index}].duration"),
        &entry.duration,
        false,
    )?;
    check_text(
        &format!("experience[{index}].achievements"),
        &entry.achievements,
        true,
    )
}

fn check_education_entry(index: usize, entry: &EducationEntry) -> Result<(), DocumentError> {
    let fields = [
        ("institution", &entry.institution),
        ("degree", &entry.degree),
        ("field_of_study", &entry.field_of_study),
        ("year", &entry.year),
        ("grade", &entry.grade),
        ("location", &entry.location),
    ];
    for (field, value) in fields {
        check_text(&format!("education[{index}].{field}"), value, false)?;
    }
    check_text(
        &format!("education[{index}].achievements"),
        &entry.achievements,
        true,
    )
}

fn check_text(field: &str, value: &str, newlines_allowed: bool) -> Result<(), DocumentError> {
    for c in value.chars() {
        let allowed_break = newlines_allowed && (c == '\n' || c == '\r');
        if c.is_control() && !allowed_break && c != '\t' {
            return Err(DocumentError::InputShape(format!(
                "field '{field}' contains control character {:#04x}",
                c as u32
            )));
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
