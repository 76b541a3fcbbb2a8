//! Paragraph layout: lines of positioned inline items.

use serde::{Deserialize, Serialize};

use super::{BoxStyle, DataMap};

/// A laid-out paragraph, as produced by the line breaker.
///
/// Lines are ordered top to bottom and are consumed once by renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphLayout {
    /// Lines in reading order
    pub lines: Vec<ParagraphLine>,

    /// List marker drawn before the first line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerLayout>,

    /// Box decoration (borders, shading)
    #[serde(default)]
    pub style: BoxStyle,
}

impl ParagraphLayout {
    /// Create a paragraph layout from its lines.
    pub fn new(lines: Vec<ParagraphLine>) -> Self {
        Self {
            lines,
            marker: None,
            style: BoxStyle::default(),
        }
    }

    /// Attach a list marker.
    pub fn with_marker(mut self, marker: MarkerLayout) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Append a line.
    pub fn push_line(&mut self, line: ParagraphLine) {
        self.lines.push(line);
    }

    /// Consume the layout, yielding its lines in order.
    pub fn into_lines(self) -> std::vec::IntoIter<ParagraphLine> {
        self.lines.into_iter()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total height of all lines.
    pub fn height(&self) -> f32 {
        self.lines.iter().map(|l| l.height()).sum()
    }

    /// Widest line extent (offset + content width).
    pub fn width(&self) -> f32 {
        self.lines
            .iter()
            .map(|l| l.offset_x + l.content_width())
            .fold(0.0, f32::max)
    }

    /// Concatenated text of all text runs, one line per row.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the paragraph has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One line of a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphLine {
    /// Offset of the line start from the paragraph's left edge
    pub offset_x: f32,

    /// Width available to the line
    pub available_width: f32,

    /// Baseline position relative to the paragraph top (downwards)
    pub baseline_y: f32,

    /// Extra leading added below the line
    #[serde(default)]
    pub leading: f32,

    /// Inline items, left to right
    pub items: Vec<InlineItem>,
}

impl ParagraphLine {
    /// Create an empty line.
    pub fn new(offset_x: f32, available_width: f32) -> Self {
        Self {
            offset_x,
            available_width,
            ..Default::default()
        }
    }

    /// Append an item.
    pub fn push(&mut self, item: InlineItem) {
        self.items.push(item);
    }

    /// Tallest ascent on the line.
    pub fn ascent(&self) -> f32 {
        self.items.iter().map(|i| i.ascent).fold(0.0, f32::max)
    }

    /// Deepest descent on the line.
    pub fn descent(&self) -> f32 {
        self.items.iter().map(|i| i.descent).fold(0.0, f32::max)
    }

    /// Line height: ascent + descent + leading.
    pub fn height(&self) -> f32 {
        self.ascent() + self.descent() + self.leading
    }

    /// Right edge of the last item.
    pub fn content_width(&self) -> f32 {
        self.items
            .iter()
            .map(|i| i.x + i.width)
            .fold(0.0, f32::max)
    }

    /// Text of the text runs and fields on this line.
    pub fn plain_text(&self) -> String {
        self.items
            .iter()
            .filter_map(|i| match i.kind {
                InlineKind::TextRun | InlineKind::Field => i.text(),
                InlineKind::InlineImage | InlineKind::InlineTextbox => None,
            })
            .collect()
    }
}

/// Kind of an inline item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineKind {
    /// A run of text
    TextRun,
    /// A field result (page number, date, ...)
    Field,
    /// An image flowing with the text
    InlineImage,
    /// A textbox flowing with the text
    InlineTextbox,
}

/// A positioned inline item with local metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineItem {
    /// Item kind
    pub kind: InlineKind,
    /// Offset from the line start
    pub x: f32,
    /// Advance width
    pub width: f32,
    /// Height above the baseline
    pub ascent: f32,
    /// Depth below the baseline
    pub descent: f32,
    /// Free-form renderer data (`text`, `font`, `size`, `src`, ...)
    #[serde(default)]
    pub data: DataMap,
}

impl InlineItem {
    /// Create an item without data.
    pub fn new(kind: InlineKind, x: f32, width: f32, ascent: f32, descent: f32) -> Self {
        Self {
            kind,
            x,
            width,
            ascent,
            descent,
            data: DataMap::new(),
        }
    }

    /// Create a text run item.
    pub fn text_run(
        text: impl Into<String>,
        x: f32,
        width: f32,
        ascent: f32,
        descent: f32,
    ) -> Self {
        let mut item = Self::new(InlineKind::TextRun, x, width, ascent, descent);
        item.data
            .insert("text".to_string(), serde_json::Value::String(text.into()));
        item
    }

    /// Text stored in the data bag, if any.
    pub fn text(&self) -> Option<&str> {
        self.data.get("text").and_then(|v| v.as_str())
    }
}

/// A list marker placed before the first line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLayout {
    /// Rendered marker text ("1.", "a)", "•")
    pub text: String,
    /// Marker start offset from the paragraph's left edge
    pub x: f32,
    /// Width reserved for the marker
    pub width: f32,
    /// Marker is suppressed (vanished run properties)
    #[serde(default)]
    pub hidden: bool,
}
