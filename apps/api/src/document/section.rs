//! Section rendering — converts one section's data into LayoutNodes.
//!
//! Every function here is a pure function of its input. Shared edge-case
//! policy: an entirely-empty section suppresses its header too, and composite
//! lines filter empty/whitespace parts BEFORE joining, so a blank field never
//! leaves a dangling separator next to populated siblings.

use crate::document::node::LayoutNode;
use crate::models::resume::{ContentRecord, EducationEntry, ExperienceEntry};

/// Vertical gap between entries within a section (0.15in).
pub const ENTRY_GAP_PT: f32 = 10.8;

/// Characters stripped from the front of achievement lines.
const BULLET_MARKERS: &[char] = &['*', '-', '•'];

fn trimmed(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn non_blank(s: &str) -> Option<&str> {
    let t = s.trim();
    (!t.is_empty()).then_some(t)
}

// ────────────────────────────────────────────────────────────────────────────
// Bullet line parsing
// ────────────────────────────────────────────────────────────────────────────

/// Splits free achievement text into bullet items: one per line, trimmed,
/// blank lines dropped, leading bullet markers stripped.
pub fn parse_bullet_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.trim_start_matches(BULLET_MARKERS).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Header block
// ────────────────────────────────────────────────────────────────────────────

/// Renders the top-of-page identity block.
///
/// Fixed ordering: name heading, email/phone contact line, location line,
/// social links (LinkedIn, GitHub, Website). Each piece is emitted only when
/// its field is non-empty.
pub fn render_header_block(record: &ContentRecord) -> Vec<LayoutNode> {
    let mut nodes = Vec::new();

    if let Some(name) = trimmed(&record.name) {
        nodes.push(LayoutNode::Heading(name.to_string()));
    }

    let mut contact = Vec::new();
    if let Some(email) = trimmed(&record.email) {
        contact.push(format!("Email: {email}"));
    }
    if let Some(phone) = trimmed(&record.phone) {
        contact.push(format!("Phone: {phone}"));
    }
    if !contact.is_empty() {
        nodes.push(LayoutNode::ContactInfo(contact.join(" | ")));
    }

    if let Some(location) = trimmed(&record.location) {
        nodes.push(LayoutNode::ContactInfo(format!("Location: {location}")));
    }

    for (label, url) in [
        ("LinkedIn", &record.linkedin),
        ("GitHub", &record.github),
        ("Website", &record.website),
    ] {
        if let Some(url) = trimmed(url) {
            nodes.push(LayoutNode::SocialLink {
                label: label.to_string(),
                url: url.to_string(),
            });
        }
    }

    nodes
}

// ────────────────────────────────────────────────────────────────────────────
// Summary / skills
// ────────────────────────────────────────────────────────────────────────────

pub fn render_summary(text: &str) -> Vec<LayoutNode> {
    match non_blank(text) {
        Some(summary) => vec![
            LayoutNode::SectionHeader("Professional Summary".to_string()),
            LayoutNode::Divider,
            LayoutNode::BodyText(summary.to_string()),
        ],
        None => Vec::new(),
    }
}

pub fn render_skills(text: &str) -> Vec<LayoutNode> {
    match non_blank(text) {
        Some(skills) => vec![
            LayoutNode::SectionHeader("Skills".to_string()),
            LayoutNode::Divider,
            LayoutNode::BodyText(skills.to_string()),
        ],
        None => Vec::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

pub fn render_experience(entries: &[ExperienceEntry]) -> Vec<LayoutNode> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![
        LayoutNode::SectionHeader("Professional Experience".to_string()),
        LayoutNode::Divider,
    ];

    for entry in entries {
        // Company and position are joined literally; either may be empty.
        nodes.push(LayoutNode::SubHeading(format!(
            "{} - {}",
            entry.company, entry.position
        )));

        if let Some(duration) = non_blank(&entry.duration) {
            nodes.push(LayoutNode::Metadata(duration.to_string()));
        }

        let items = parse_bullet_lines(&entry.achievements);
        if !items.is_empty() {
            nodes.push(LayoutNode::BulletList(items));
        }

        nodes.push(LayoutNode::Spacer(ENTRY_GAP_PT));
    }

    nodes
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn render_education(entries: &[EducationEntry]) -> Vec<LayoutNode> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![
        LayoutNode::SectionHeader("Education".to_string()),
        LayoutNode::Divider,
    ];

    for entry in entries {
        let title: Vec<&str> = [
            entry.institution.as_str(),
            entry.degree.as_str(),
            entry.field_of_study.as_str(),
        ]
        .into_iter()
        .filter_map(non_blank)
        .collect();
        if !title.is_empty() {
            nodes.push(LayoutNode::SubHeading(title.join(" - ")));
        }

        let grade = non_blank(&entry.grade).map(|g| format!("Grade: {g}"));
        let details: Vec<&str> = [
            non_blank(&entry.year),
            grade.as_deref(),
            non_blank(&entry.location),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !details.is_empty() {
            nodes.push(LayoutNode::Metadata(details.join(" | ")));
        }

        let items = parse_bullet_lines(&entry.achievements);
        if !items.is_empty() {
            nodes.push(LayoutNode::BulletList(items));
        }

        nodes.push(LayoutNode::Spacer(ENTRY_GAP_PT));
    }

    nodes
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ContentRecord {
        ContentRecord::default()
    }

    // ── parse_bullet_lines ──────────────────────────────────────────────────

    #[test]
    fn test_parse_bullet_lines_strips_markers_and_blanks() {
        let items = parse_bullet_lines("* Did X\n\n*Did Y\n   ");
        assert_eq!(items, vec!["Did X", "Did Y"]);
    }

    #[test]
    fn test_parse_bullet_lines_mixed_markers() {
        let items = parse_bullet_lines("- first\n• second\n  third");
        assert_eq!(items, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_parse_bullet_lines_marker_only_line_dropped() {
        assert!(parse_bullet_lines("**\n  *  \n").is_empty());
    }

    #[test]
    fn test_parse_bullet_lines_empty_input() {
        assert!(parse_bullet_lines("").is_empty());
    }

    // ── header block ────────────────────────────────────────────────────────

    #[test]
    fn test_header_block_fixed_ordering() {
        let rec = ContentRecord {
            name: Some("Jane Doe".to_string()),
            email: Some("j@x.com".to_string()),
            phone: Some("555".to_string()),
            location: Some("Berlin".to_string()),
            linkedin: Some("https://linkedin.com/in/jane".to_string()),
            website: Some("https://jane.dev".to_string()),
            ..record()
        };
        let nodes = render_header_block(&rec);
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[0], LayoutNode::Heading("Jane Doe".to_string()));
        assert_eq!(
            nodes[1],
            LayoutNode::ContactInfo("Email: j@x.com | Phone: 555".to_string())
        );
        assert_eq!(
            nodes[2],
            LayoutNode::ContactInfo("Location: Berlin".to_string())
        );
        assert_eq!(
            nodes[3],
            LayoutNode::SocialLink {
                label: "LinkedIn".to_string(),
                url: "https://linkedin.com/in/jane".to_string()
            }
        );
        assert_eq!(
            nodes[4],
            LayoutNode::SocialLink {
                label: "Website".to_string(),
                url: "https://jane.dev".to_string()
            }
        );
    }

    #[test]
    fn test_header_block_no_dangling_separator() {
        // Email present, phone absent: no " | " artifact.
        let rec = ContentRecord {
            email: Some("j@x.com".to_string()),
            ..record()
        };
        let nodes = render_header_block(&rec);
        assert_eq!(
            nodes,
            vec![LayoutNode::ContactInfo("Email: j@x.com".to_string())]
        );
    }

    #[test]
    fn test_header_block_contact_line_omitted_when_both_empty() {
        let rec = ContentRecord {
            name: Some("Jane".to_string()),
            phone: Some("   ".to_string()),
            ..record()
        };
        let nodes = render_header_block(&rec);
        assert_eq!(nodes, vec![LayoutNode::Heading("Jane".to_string())]);
    }

    #[test]
    fn test_header_block_empty_record_is_empty() {
        assert!(render_header_block(&record()).is_empty());
    }

    // ── summary / skills ────────────────────────────────────────────────────

    #[test]
    fn test_summary_emits_header_divider_body() {
        let nodes = render_summary("Seasoned engineer.");
        assert_eq!(
            nodes,
            vec![
                LayoutNode::SectionHeader("Professional Summary".to_string()),
                LayoutNode::Divider,
                LayoutNode::BodyText("Seasoned engineer.".to_string()),
            ]
        );
    }

    #[test]
    fn test_summary_whitespace_only_suppresses_header() {
        assert!(render_summary("   \n ").is_empty());
    }

    #[test]
    fn test_skills_skipped_when_empty() {
        assert!(render_skills("").is_empty());
        let nodes = render_skills("Python | Go");
        assert_eq!(nodes[0], LayoutNode::SectionHeader("Skills".to_string()));
        assert_eq!(nodes[2], LayoutNode::BodyText("Python | Go".to_string()));
    }

    // ── experience ──────────────────────────────────────────────────────────

    #[test]
    fn test_experience_empty_entries_no_header() {
        assert!(render_experience(&[]).is_empty());
    }

    #[test]
    fn test_experience_entry_nodes_in_order() {
        let entries = vec![ExperienceEntry {
            company: "Acme".to_string(),
            position: "Eng".to_string(),
            duration: "2020-2022".to_string(),
            achievements: "*Built X\n*Shipped Y".to_string(),
        }];
        let nodes = render_experience(&entries);
        assert_eq!(
            nodes,
            vec![
                LayoutNode::SectionHeader("Professional Experience".to_string()),
                LayoutNode::Divider,
                LayoutNode::SubHeading("Acme - Eng".to_string()),
                LayoutNode::Metadata("2020-2022".to_string()),
                LayoutNode::BulletList(vec!["Built X".to_string(), "Shipped Y".to_string()]),
                LayoutNode::Spacer(ENTRY_GAP_PT),
            ]
        );
    }

    #[test]
    fn test_experience_blank_achievements_no_bullet_list() {
        let entries = vec![ExperienceEntry {
            company: "Acme".to_string(),
            position: "Eng".to_string(),
            duration: String::new(),
            achievements: "  \n * \n".to_string(),
        }];
        let nodes = render_experience(&entries);
        assert!(!nodes
            .iter()
            .any(|n| matches!(n, LayoutNode::BulletList(_))));
        // duration empty: no metadata either
        assert!(!nodes.iter().any(|n| matches!(n, LayoutNode::Metadata(_))));
    }

    #[test]
    fn test_experience_subheading_joined_literally() {
        let entries = vec![ExperienceEntry {
            company: String::new(),
            position: "Eng".to_string(),
            ..Default::default()
        }];
        let nodes = render_experience(&entries);
        assert_eq!(nodes[2], LayoutNode::SubHeading(" - Eng".to_string()));
    }

    #[test]
    fn test_experience_spacer_follows_each_entry() {
        let entries = vec![ExperienceEntry::default(), ExperienceEntry::default()];
        let nodes = render_experience(&entries);
        let spacers = nodes
            .iter()
            .filter(|n| matches!(n, LayoutNode::Spacer(_)))
            .count();
        assert_eq!(spacers, 2);
    }

    // ── education ───────────────────────────────────────────────────────────

    #[test]
    fn test_education_title_filters_before_joining() {
        let entries = vec![EducationEntry {
            institution: "MIT".to_string(),
            degree: String::new(),
            field_of_study: "   ".to_string(),
            ..Default::default()
        }];
        let nodes = render_education(&entries);
        assert_eq!(nodes[2], LayoutNode::SubHeading("MIT".to_string()));
    }

    #[test]
    fn test_education_full_title_join() {
        let entries = vec![EducationEntry {
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "CS".to_string(),
            ..Default::default()
        }];
        let nodes = render_education(&entries);
        assert_eq!(nodes[2], LayoutNode::SubHeading("MIT - BSc - CS".to_string()));
    }

    #[test]
    fn test_education_all_title_fields_empty_skips_subheading() {
        let entries = vec![EducationEntry {
            year: "2019".to_string(),
            ..Default::default()
        }];
        let nodes = render_education(&entries);
        assert!(!nodes.iter().any(|n| matches!(n, LayoutNode::SubHeading(_))));
        // other nodes of the entry still render
        assert!(nodes.contains(&LayoutNode::Metadata("2019".to_string())));
    }

    #[test]
    fn test_education_details_grade_prefix_only_when_present() {
        let entries = vec![EducationEntry {
            institution: "MIT".to_string(),
            year: "2019".to_string(),
            grade: "3.9".to_string(),
            location: "Cambridge".to_string(),
            ..Default::default()
        }];
        let nodes = render_education(&entries);
        assert!(nodes.contains(&LayoutNode::Metadata(
            "2019 | Grade: 3.9 | Cambridge".to_string()
        )));
    }

    #[test]
    fn test_education_no_grade_no_prefix_artifact() {
        let entries = vec![EducationEntry {
            year: "2019".to_string(),
            location: "Cambridge".to_string(),
            ..Default::default()
        }];
        let nodes = render_education(&entries);
        assert!(nodes.contains(&LayoutNode::Metadata("2019 | Cambridge".to_string())));
    }

    #[test]
    fn test_education_empty_entries_no_header() {
        assert!(render_education(&[]).is_empty());
    }
}
