//! Document assembly — fixed-order orchestration of the section renderers.
//!
//! Section order is invariant: header block → professional summary →
//! experience → education → skills. Presence of output is the only gate; no
//! section is reordered or reprioritized based on content, and no section
//! depends on another's content. The assembler owns inter-section spacing.

use crate::document::node::LayoutNode;
use crate::document::section::{
    render_education, render_experience, render_header_block, render_skills, render_summary,
};
use crate::models::resume::ContentRecord;

/// Vertical gap between sections (0.2in).
pub const SECTION_GAP_PT: f32 = 14.4;

/// Produces the flat, ordered node sequence ("story") for a record.
pub fn assemble(record: &ContentRecord) -> Vec<LayoutNode> {
    let summary = record.professional_summary.as_deref().unwrap_or("");
    let skills = record.skills.as_deref().unwrap_or("");

    let sections = [
        render_header_block(record),
        render_summary(summary),
        render_experience(&record.experience),
        render_education(&record.education),
        render_skills(skills),
    ];

    let mut story = Vec::new();
    for section in sections.into_iter().filter(|s| !s.is_empty()) {
        if !story.is_empty() {
            story.push(LayoutNode::Spacer(SECTION_GAP_PT));
        }
        story.extend(section);
    }
    story
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
