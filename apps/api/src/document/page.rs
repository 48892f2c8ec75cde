//! Page layout engine — flows the node sequence onto fixed-size pages and
//! emits the PDF artifact.
//!
//! Geometry is US letter with 0.75in margins; content flows top-to-bottom.
//! A paragraph or bullet item that would cross the page boundary moves to a
//! fresh page whole, unless it is taller than a full page (then it splits at
//! line boundaries). An empty story still produces a valid one-page
//! document.

use printpdf::{
    Actions, BuiltinFont, Color, IndirectFontRef, Line, LinkAnnotation, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rect, Rgb as PdfRgb,
};

use crate::document::error::DocumentError;
use crate::document::font_metrics::{get_metrics, wrap_words};
use crate::document::node::LayoutNode;
use crate::document::style::{style, Alignment, FontWeight, Rgb, StyleDefinition, StyleId};
use crate::document::style::{ACCENT, SECONDARY};

// ────────────────────────────────────────────────────────────────────────────
// Geometry
// ────────────────────────────────────────────────────────────────────────────

/// Physical page dimensions and margins, in points.
#[derive(Debug, Clone)]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
}

impl Default for PageGeometry {
    /// US letter, 0.75in margins on all four sides.
    fn default() -> Self {
        PageGeometry {
            width_pt: 612.0,
            height_pt: 792.0,
            margin_pt: 54.0,
        }
    }
}

impl PageGeometry {
    fn content_width(&self) -> f32 {
        self.width_pt - 2.0 * self.margin_pt
    }

    fn content_height(&self) -> f32 {
        self.height_pt - 2.0 * self.margin_pt
    }

    fn top(&self) -> f32 {
        self.height_pt - self.margin_pt
    }

    fn bottom(&self) -> f32 {
        self.margin_pt
    }
}

/// The finished artifact.
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Layout blocks
// ────────────────────────────────────────────────────────────────────────────

/// Gap between a bullet glyph and its item text.
const BULLET_TEXT_GAP_PT: f32 = 12.0;
/// Gap between consecutive bullet items.
const BULLET_ITEM_GAP_PT: f32 = 2.0;
const BULLET_GLYPH: &str = "•";
const RULE_THICKNESS_PT: f32 = 1.0;
/// Gap under a divider rule.
const RULE_GAP_PT: f32 = 8.0;

/// A node lowered to measured lines plus drawing parameters.
enum Block {
    Text {
        lines: Vec<String>,
        style: &'static StyleDefinition,
        /// Indent beyond the style's own, applied to every line (bullet hang).
        extra_indent_pt: f32,
        /// Draw a bullet glyph left of the first line.
        glyph: bool,
        /// Make the first line a clickable link to this URL.
        link: Option<String>,
        space_before_pt: f32,
        space_after_pt: f32,
    },
    Rule,
    Gap(f32),
    Row {
        cells: Vec<String>,
        style: &'static StyleDefinition,
    },
}

fn text_block(text: &str, id: StyleId, geom: &PageGeometry) -> Block {
    let st = style(id);
    let metrics = get_metrics(st.weight);
    let max_width = geom.content_width() - st.indent_pt;
    Block::Text {
        lines: wrap_words(text, metrics, st.font_size_pt, max_width),
        style: st,
        extra_indent_pt: 0.0,
        glyph: false,
        link: None,
        space_before_pt: st.space_before_pt,
        space_after_pt: st.space_after_pt,
    }
}

/// Maps each node deterministically to its layout primitive.
fn lower(nodes: &[LayoutNode], geom: &PageGeometry) -> Vec<Block> {
    let mut blocks = Vec::new();
    for node in nodes {
        match node {
            LayoutNode::Heading(text) => blocks.push(text_block(text, StyleId::Header, geom)),
            LayoutNode::SectionHeader(text) => {
                blocks.push(text_block(text, StyleId::SectionHeader, geom))
            }
            LayoutNode::SubHeading(text) => blocks.push(text_block(text, StyleId::SubHeader, geom)),
            LayoutNode::BodyText(text) => blocks.push(text_block(text, StyleId::Body, geom)),
            LayoutNode::Metadata(text) => blocks.push(text_block(text, StyleId::Metadata, geom)),
            LayoutNode::ContactInfo(text) => {
                blocks.push(text_block(text, StyleId::ContactInfo, geom))
            }
            LayoutNode::SocialLink { label, url } => {
                let st = style(StyleId::SocialLink);
                blocks.push(Block::Text {
                    lines: vec![format!("» {label}")],
                    style: st,
                    extra_indent_pt: 0.0,
                    glyph: false,
                    link: Some(url.clone()),
                    space_before_pt: st.space_before_pt,
                    space_after_pt: st.space_after_pt,
                });
            }
            LayoutNode::BulletList(items) => {
                let st = style(StyleId::Body);
                let metrics = get_metrics(st.weight);
                let max_width = geom.content_width() - st.indent_pt - BULLET_TEXT_GAP_PT;
                for item in items {
                    blocks.push(Block::Text {
                        lines: wrap_words(item, metrics, st.font_size_pt, max_width),
                        style: st,
                        extra_indent_pt: BULLET_TEXT_GAP_PT,
                        glyph: true,
                        link: None,
                        space_before_pt: 0.0,
                        space_after_pt: BULLET_ITEM_GAP_PT,
                    });
                }
            }
            LayoutNode::Divider => blocks.push(Block::Rule),
            LayoutNode::Spacer(height) => blocks.push(Block::Gap(*height)),
            LayoutNode::Table(rows) => {
                let st = style(StyleId::Body);
                for row in rows {
                    blocks.push(Block::Row {
                        cells: row.clone(),
                        style: st,
                    });
                }
            }
        }
    }
    blocks
}

// ────────────────────────────────────────────────────────────────────────────
// Drawing
// ────────────────────────────────────────────────────────────────────────────

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, DocumentError> {
        let add = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|e| rendering_error("fonts", &e.to_string()))
        };
        Ok(Fonts {
            regular: add(BuiltinFont::Helvetica)?,
            bold: add(BuiltinFont::HelveticaBold)?,
            oblique: add(BuiltinFont::HelveticaOblique)?,
        })
    }

    fn for_weight(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
            FontWeight::Oblique => &self.oblique,
        }
    }
}

/// Cursor over the current page. `y` is the next baseline position; a new
/// page resets it to the top of the printable area.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    geom: &'a PageGeometry,
    layer: PdfLayerReference,
    y: f32,
    at_top: bool,
    page_count: usize,
}

impl PageWriter<'_> {
    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(mm(self.geom.width_pt), mm(self.geom.height_pt), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = self.geom.top();
        self.at_top = true;
        self.page_count += 1;
    }

    /// Starts a new page unless `needed` points still fit below the cursor.
    fn ensure_room(&mut self, needed: f32) {
        if !self.at_top && self.y - needed < self.geom.bottom() {
            self.new_page();
        }
    }

    fn draw_text_block(
        &mut self,
        lines: &[String],
        st: &'static StyleDefinition,
        extra_indent_pt: f32,
        glyph: bool,
        link: &Option<String>,
        space_before_pt: f32,
        space_after_pt: f32,
        fonts: &Fonts,
    ) {
        if lines.is_empty() {
            return;
        }
        if !self.at_top {
            self.y -= space_before_pt;
        }

        // Keep the block together when it can fit on one page at all.
        let block_height = lines.len() as f32 * st.leading_pt;
        if block_height <= self.geom.content_height() {
            self.ensure_room(block_height);
        }

        let metrics = get_metrics(st.weight);
        let font = fonts.for_weight(st.weight);
        let left = self.geom.margin_pt + st.indent_pt + extra_indent_pt;

        for (i, line) in lines.iter().enumerate() {
            if self.y - st.leading_pt < self.geom.bottom() && !self.at_top {
                self.new_page();
            }
            self.y -= st.leading_pt;
            self.at_top = false;

            let line_width = metrics.text_width_pt(line, st.font_size_pt);
            let x = match st.alignment {
                Alignment::Left => left,
                Alignment::Center => {
                    self.geom.margin_pt + (self.geom.content_width() - line_width) / 2.0
                }
            };

            if glyph && i == 0 {
                self.set_fill(ACCENT);
                self.layer.use_text(
                    BULLET_GLYPH,
                    st.font_size_pt.into(),
                    mm(self.geom.margin_pt + st.indent_pt),
                    mm(self.y),
                    fonts.for_weight(FontWeight::Regular),
                );
            }

            self.set_fill(st.color);
            self.layer
                .use_text(line.as_str(), st.font_size_pt.into(), mm(x), mm(self.y), font);

            if i == 0 {
                if let Some(url) = link {
                    self.layer.add_link_annotation(LinkAnnotation::new(
                        Rect::new(
                            mm(x),
                            mm(self.y - 2.0),
                            mm(x + line_width),
                            mm(self.y + st.font_size_pt),
                        ),
                        None,
                        None,
                        Actions::uri(url.clone()),
                        None,
                    ));
                }
            }
        }

        self.y -= space_after_pt;
    }

    fn draw_rule(&mut self) {
        self.ensure_room(RULE_THICKNESS_PT + RULE_GAP_PT);
        self.y -= 2.0;
        self.at_top = false;

        let line = Line {
            points: vec![
                (Point::new(mm(self.geom.margin_pt), mm(self.y)), false),
                (
                    Point::new(mm(self.geom.width_pt - self.geom.margin_pt), mm(self.y)),
                    false,
                ),
            ],
            is_closed: false,
        };
        self.layer.set_outline_color(to_pdf_color(SECONDARY));
        self.layer.set_outline_thickness(RULE_THICKNESS_PT.into());
        self.layer.add_line(line);

        self.y -= RULE_GAP_PT;
    }

    fn draw_row(&mut self, cells: &[String], st: &'static StyleDefinition, fonts: &Fonts) {
        if cells.is_empty() {
            return;
        }
        self.ensure_room(st.leading_pt);
        self.y -= st.leading_pt;
        self.at_top = false;

        let column_width = self.geom.content_width() / cells.len() as f32;
        self.set_fill(st.color);
        for (i, cell) in cells.iter().enumerate() {
            let x = self.geom.margin_pt + i as f32 * column_width;
            self.layer.use_text(
                cell.as_str(),
                st.font_size_pt.into(),
                mm(x),
                mm(self.y),
                fonts.for_weight(st.weight),
            );
        }
    }

    fn set_fill(&self, color: Rgb) {
        self.layer.set_fill_color(to_pdf_color(color));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Renders the story to a PDF using the default letter geometry.
pub fn render(nodes: &[LayoutNode], title: &str) -> Result<RenderedDocument, DocumentError> {
    render_with_geometry(nodes, title, &PageGeometry::default())
}

pub fn render_with_geometry(
    nodes: &[LayoutNode],
    title: &str,
    geom: &PageGeometry,
) -> Result<RenderedDocument, DocumentError> {
    let blocks = lower(nodes, geom);

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, mm(geom.width_pt), mm(geom.height_pt), "Layer 1");
    let fonts = Fonts::load(&doc)?;

    let mut writer = PageWriter {
        doc: &doc,
        geom,
        layer: doc.get_page(first_page).get_layer(first_layer),
        y: geom.top(),
        at_top: true,
        page_count: 1,
    };

    for block in blocks {
        match block {
            Block::Text {
                lines,
                style,
                extra_indent_pt,
                glyph,
                link,
                space_before_pt,
                space_after_pt,
            } => writer.draw_text_block(
                &lines,
                style,
                extra_indent_pt,
                glyph,
                &link,
                space_before_pt,
                space_after_pt,
                &fonts,
            ),
            Block::Rule => writer.draw_rule(),
            Block::Gap(height) => writer.y -= height,
            Block::Row { cells, style } => writer.draw_row(&cells, style, &fonts),
        }
    }

    let page_count = writer.page_count;
    let bytes = doc
        .save_to_bytes()
        .map_err(|e| rendering_error("artifact", &e.to_string()))?;

    Ok(RenderedDocument { bytes, page_count })
}

fn rendering_error(section: &str, detail: &str) -> DocumentError {
    DocumentError::Rendering {
        section: section.to_string(),
        detail: detail.to_string(),
    }
}

fn to_pdf_color(c: Rgb) -> Color {
    Color::Rgb(PdfRgb::new(
        (c.r as f32 / 255.0).into(),
        (c.g as f32 / 255.0).into(),
        (c.b as f32 / 255.0).into(),
        None,
    ))
}

fn mm(pt: f32) -> Mm {
    Mm((pt * 25.4 / 72.0).into())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
