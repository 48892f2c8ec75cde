//! Plain-text rendering of a node sequence — the preview fallback used when
//! the PDF artifact cannot be displayed.

use crate::document::node::LayoutNode;

const DIVIDER_WIDTH: usize = 40;

/// Renders the story as deterministic plain text, preserving semantic order.
pub fn render_text(nodes: &[LayoutNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            LayoutNode::Heading(text) => {
                out.push_str(text);
                out.push('\n');
            }
            LayoutNode::SectionHeader(text) => {
                out.push('\n');
                out.push_str(text);
                out.push('\n');
            }
            LayoutNode::SubHeading(text) => {
                out.push_str(text);
                out.push('\n');
            }
            LayoutNode::BodyText(text) | LayoutNode::Metadata(text) | LayoutNode::ContactInfo(text) => {
                out.push_str(text);
                out.push('\n');
            }
            LayoutNode::SocialLink { label, url } => {
                out.push_str(label);
                out.push_str(": ");
                out.push_str(url);
                out.push('\n');
            }
            LayoutNode::BulletList(items) => {
                for item in items {
                    out.push_str("  • ");
                    out.push_str(item);
                    out.push('\n');
                }
            }
            LayoutNode::Divider => {
                out.push_str(&"-".repeat(DIVIDER_WIDTH));
                out.push('\n');
            }
            LayoutNode::Spacer(_) => out.push('\n'),
            LayoutNode::Table(rows) => {
                for row in rows {
                    out.push_str(&row.join("  "));
                    out.push('\n');
                }
            }
        }
    }
    out
}
