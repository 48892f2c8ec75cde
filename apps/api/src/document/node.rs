//! LayoutNode — the intermediate, style-tagged content unit between section
//! rendering and pagination.
//!
//! Nodes are immutable and ephemeral: they exist for one document build,
//! owned exclusively by the assembler's output sequence.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutNode {
    /// The name/title line.
    Heading(String),
    /// A section title ("Professional Experience", ...).
    SectionHeader(String),
    /// An entry title ("Company - Position").
    SubHeading(String),
    /// A plain paragraph.
    BodyText(String),
    /// Dates, grades, locations.
    Metadata(String),
    /// A centered contact line (email/phone, location).
    ContactInfo(String),
    /// A clickable social link rendered as "» label".
    SocialLink { label: String, url: String },
    /// One bullet item per element; items are already parsed and stripped.
    BulletList(Vec<String>),
    /// A horizontal rule under the preceding section header.
    Divider,
    /// Vertical whitespace, in points.
    Spacer(f32),
    /// Row-major table cells. Currently only produced by callers that need
    /// tabular layout; the assembler itself emits none.
    Table(Vec<Vec<String>>),
}

impl LayoutNode {
    /// Short tag name used in error and log context.
    pub fn describe(&self) -> &'static str {
        match self {
            LayoutNode::Heading(_) => "heading",
            LayoutNode::SectionHeader(_) => "section header",
            LayoutNode::SubHeading(_) => "sub-heading",
            LayoutNode::BodyText(_) => "body text",
            LayoutNode::Metadata(_) => "metadata",
            LayoutNode::ContactInfo(_) => "contact info",
            LayoutNode::SocialLink { .. } => "social link",
            LayoutNode::BulletList(_) => "bullet list",
            LayoutNode::Divider => "divider",
            LayoutNode::Spacer(_) => "spacer",
            LayoutNode::Table(_) => "table",
        }
    }
}
