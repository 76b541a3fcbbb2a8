//! Style, border and color records attached to layout blocks.

use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black, also used for `auto`.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Parse `#RRGGBB`, `RRGGBB` or `auto`.
    ///
    /// Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("auto") {
            return Some(Color::BLACK);
        }
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Which side of a box a border belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderSide {
    /// Top edge
    Top,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
}

/// Line pattern of a border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    /// Continuous line
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
}

impl DashStyle {
    /// Map a source border keyword (`single`, `dashed`, `dotted`, `double`, ...).
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "dashed" | "dash" | "dashsmallgap" | "dotdash" => DashStyle::Dashed,
            "dotted" | "dot" | "dotdotdash" => DashStyle::Dotted,
            "double" | "triple" => DashStyle::Double,
            _ => DashStyle::Solid,
        }
    }
}

/// One border of a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderSpec {
    /// Side this border is drawn on
    pub side: BorderSide,
    /// Line width in points
    pub width: f32,
    /// Line color
    pub color: Color,
    /// Line pattern
    pub style: DashStyle,
}

impl BorderSpec {
    /// A solid black border.
    pub fn solid(side: BorderSide, width: f32) -> Self {
        Self {
            side,
            width,
            color: Color::BLACK,
            style: DashStyle::Solid,
        }
    }
}

/// Four-sided padding in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    /// Top padding
    pub top: f32,
    /// Right padding
    pub right: f32,
    /// Bottom padding
    pub bottom: f32,
    /// Left padding
    pub left: f32,
}

impl Padding {
    /// The same padding on every side.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Background, borders and padding of a box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Background fill
    pub background: Option<Color>,
    /// Borders in declaration order
    pub borders: Vec<BorderSpec>,
    /// Inner padding
    pub padding: Padding,
}

impl BoxStyle {
    /// Create an empty box style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Append a border.
    pub fn with_border(mut self, border: BorderSpec) -> Self {
        self.borders.push(border);
        self
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Check if the box draws any border.
    pub fn has_border(&self) -> bool {
        self.borders.iter().any(|b| b.width > 0.0)
    }

    /// Border declared for a side, if any (the last declaration wins).
    pub fn border(&self, side: BorderSide) -> Option<&BorderSpec> {
        self.borders.iter().rev().find(|b| b.side == side)
    }
}

/// Space before and after a block, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Space above the block
    pub before: f32,
    /// Space below the block
    pub after: f32,
}

impl Spacing {
    /// Create a spacing record.
    pub fn new(before: f32, after: f32) -> Self {
        Self { before, after }
    }
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// Map a source alignment keyword (`left`, `start`, `center`, `right`, `end`, `both`, ...).
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "center" | "centre" => Alignment::Center,
            "right" | "end" => Alignment::Right,
            "both" | "justify" | "distribute" => Alignment::Justify,
            _ => Alignment::Left,
        }
    }
}

/// Style record of a positioned block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    /// Box decoration
    #[serde(default)]
    pub decoration: BoxStyle,
    /// Declared spacing around the block
    #[serde(default)]
    pub spacing: Spacing,
    /// Horizontal alignment of the block content
    #[serde(default)]
    pub alignment: Alignment,
}

impl BlockStyle {
    /// Create a style with the given spacing.
    pub fn with_spacing(before: f32, after: f32) -> Self {
        Self {
            spacing: Spacing::new(before, after),
            ..Default::default()
        }
    }
}
