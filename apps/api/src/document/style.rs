//! Style catalog — named, immutable formatting bundles for every node kind.
//!
//! Styles are process-wide constants. `StyleId` is exhaustive, so a lookup
//! can never miss: the "undefined style" failure class is erased at compile
//! time instead of being a runtime configuration error.

// ────────────────────────────────────────────────────────────────────────────
// Value types
// ────────────────────────────────────────────────────────────────────────────

/// 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
    Oblique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// A named bundle of visual formatting parameters. Read-only after
/// initialization; all dimensions are in points.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefinition {
    pub font_size_pt: f32,
    pub leading_pt: f32,
    pub color: Rgb,
    pub space_before_pt: f32,
    pub space_after_pt: f32,
    pub weight: FontWeight,
    pub alignment: Alignment,
    /// Left indent applied to every line of the paragraph.
    pub indent_pt: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Palette
// ────────────────────────────────────────────────────────────────────────────

pub const PRIMARY: Rgb = Rgb::from_hex(0x1A237E); // dark blue
pub const SECONDARY: Rgb = Rgb::from_hex(0x0D47A1); // medium blue
pub const ACCENT: Rgb = Rgb::from_hex(0x1565C0); // light blue
pub const TEXT: Rgb = Rgb::from_hex(0x212121); // near black
pub const SUBTEXT: Rgb = Rgb::from_hex(0x424242); // dark gray

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// The built-in style names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    /// Name/title — largest, centered, primary color.
    Header,
    /// Section titles — secondary color, underlined via a following divider.
    SectionHeader,
    /// Entry titles, e.g. "Company - Position".
    SubHeader,
    /// Bulleted/plain body text.
    Body,
    /// Dates/locations — oblique, muted.
    Metadata,
    /// Email/phone/location lines — centered, muted.
    ContactInfo,
    /// Social links — centered, accent color.
    SocialLink,
}

static HEADER: StyleDefinition = StyleDefinition {
    font_size_pt: 28.0,
    leading_pt: 34.0,
    color: PRIMARY,
    space_before_pt: 24.0,
    space_after_pt: 12.0,
    weight: FontWeight::Bold,
    alignment: Alignment::Center,
    indent_pt: 0.0,
};

static SECTION_HEADER: StyleDefinition = StyleDefinition {
    font_size_pt: 18.0,
    leading_pt: 22.0,
    color: SECONDARY,
    space_before_pt: 16.0,
    space_after_pt: 4.0,
    weight: FontWeight::Bold,
    alignment: Alignment::Left,
    indent_pt: 0.0,
};

static SUB_HEADER: StyleDefinition = StyleDefinition {
    font_size_pt: 14.0,
    leading_pt: 18.0,
    color: PRIMARY,
    space_before_pt: 0.0,
    space_after_pt: 8.0,
    weight: FontWeight::Bold,
    alignment: Alignment::Left,
    indent_pt: 0.0,
};

static BODY: StyleDefinition = StyleDefinition {
    font_size_pt: 12.0,
    leading_pt: 16.0,
    color: TEXT,
    space_before_pt: 0.0,
    space_after_pt: 8.0,
    weight: FontWeight::Regular,
    alignment: Alignment::Left,
    indent_pt: 20.0,
};

static METADATA: StyleDefinition = StyleDefinition {
    font_size_pt: 11.0,
    leading_pt: 14.0,
    color: SUBTEXT,
    space_before_pt: 0.0,
    space_after_pt: 4.0,
    weight: FontWeight::Oblique,
    alignment: Alignment::Left,
    indent_pt: 0.0,
};

static CONTACT_INFO: StyleDefinition = StyleDefinition {
    font_size_pt: 11.0,
    leading_pt: 14.0,
    color: SUBTEXT,
    space_before_pt: 4.0,
    space_after_pt: 4.0,
    weight: FontWeight::Oblique,
    alignment: Alignment::Center,
    indent_pt: 0.0,
};

static SOCIAL_LINK: StyleDefinition = StyleDefinition {
    font_size_pt: 12.0,
    leading_pt: 16.0,
    color: ACCENT,
    space_before_pt: 2.0,
    space_after_pt: 2.0,
    weight: FontWeight::Regular,
    alignment: Alignment::Center,
    indent_pt: 0.0,
};

/// Returns the style definition for a given id.
pub fn style(id: StyleId) -> &'static StyleDefinition {
    match id {
        StyleId::Header => &HEADER,
        StyleId::SectionHeader => &SECTION_HEADER,
        StyleId::SubHeader => &SUB_HEADER,
        StyleId::Body => &BODY,
        StyleId::Metadata => &METADATA,
        StyleId::ContactInfo => &CONTACT_INFO,
        StyleId::SocialLink => &SOCIAL_LINK,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
