//! Resolver input and output records.

use serde::{Deserialize, Serialize};

use super::{IndentSpec, NumberingTable};

fn default_true() -> bool {
    true
}

/// One paragraph as seen by the list indent resolver.
///
/// The three indent specs come from independent sources: the paragraph
/// style, the paragraph properties, and explicit inline formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphEntry {
    /// Paragraph style name
    #[serde(default)]
    pub style_name: Option<String>,

    /// Indentation inherited from the style
    #[serde(default)]
    pub style_indent: IndentSpec,

    /// Indentation from the paragraph properties
    #[serde(default)]
    pub paragraph_indent: IndentSpec,

    /// Explicit inline indentation
    #[serde(default)]
    pub inline_indent: IndentSpec,

    /// Numbering id, if the paragraph is numbered
    #[serde(default)]
    pub num_id: Option<u32>,

    /// List level (zero-based)
    #[serde(default)]
    pub level: Option<u8>,

    /// Marker text as authored (template or rendered)
    #[serde(default)]
    pub marker_text: Option<String>,

    /// The paragraph style is itself a list style
    #[serde(default)]
    pub style_is_list: bool,

    /// The paragraph is bordered or boxed
    #[serde(default)]
    pub has_border: bool,

    /// `inline_indent` was set explicitly and overrides inherited fields
    #[serde(default)]
    pub explicit_indent: bool,

    /// Indent auto-correction may adjust this paragraph
    #[serde(default = "default_true")]
    pub auto_correct: bool,

    /// The paragraph restarts its list counter
    #[serde(default)]
    pub number_override: bool,

    /// The list marker is invisible
    #[serde(default)]
    pub marker_hidden: bool,

    /// Font size of the marker run in points
    #[serde(default)]
    pub font_size: Option<f32>,
}

impl Default for ParagraphEntry {
    fn default() -> Self {
        Self {
            style_name: None,
            style_indent: IndentSpec::default(),
            paragraph_indent: IndentSpec::default(),
            inline_indent: IndentSpec::default(),
            num_id: None,
            level: None,
            marker_text: None,
            style_is_list: false,
            has_border: false,
            explicit_indent: false,
            auto_correct: true,
            number_override: false,
            marker_hidden: false,
            font_size: None,
        }
    }
}

impl ParagraphEntry {
    /// Create a plain paragraph entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a numbered paragraph entry.
    pub fn numbered(num_id: u32, level: u8) -> Self {
        Self {
            num_id: Some(num_id),
            level: Some(level),
            ..Self::default()
        }
    }

    /// Set the style name and its indentation.
    pub fn with_style(mut self, name: impl Into<String>, indent: IndentSpec) -> Self {
        self.style_name = Some(name.into());
        self.style_indent = indent;
        self
    }

    /// Mark the style as a list style at `level`.
    pub fn list_style(mut self, level: u8) -> Self {
        self.style_is_list = true;
        self.level = Some(level);
        self
    }

    /// Set the paragraph-property indentation.
    pub fn with_paragraph_indent(mut self, indent: IndentSpec) -> Self {
        self.paragraph_indent = indent;
        self
    }

    /// Set explicit inline indentation.
    pub fn with_inline_indent(mut self, indent: IndentSpec) -> Self {
        self.inline_indent = indent;
        self.explicit_indent = true;
        self
    }

    /// Set the authored marker text.
    pub fn with_marker_text(mut self, text: impl Into<String>) -> Self {
        self.marker_text = Some(text.into());
        self
    }

    /// Set the marker font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Mark the paragraph as bordered.
    pub fn bordered(mut self) -> Self {
        self.has_border = true;
        self
    }

    /// Mark the marker as invisible.
    pub fn hidden_marker(mut self) -> Self {
        self.marker_hidden = true;
        self
    }

    /// Forbid indent auto-correction.
    pub fn without_auto_correct(mut self) -> Self {
        self.auto_correct = false;
        self
    }

    /// Restart the list counter at this paragraph.
    pub fn restart_numbering(mut self) -> Self {
        self.number_override = true;
        self
    }
}

/// How a paragraph's list indentation was obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListIndentMode {
    /// Not a list paragraph
    #[default]
    None,
    /// Computed from the level definition and inherited indents
    Auto,
    /// Explicit paragraph indentation took over
    Manual,
    /// Copied from a registered baseline of the same marker chain
    AutoMatch,
    /// Continued from the previous node at the same level
    Continuation,
}

/// Synthesized marker counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerOverride {
    /// Counter value
    pub counter: u32,
    /// Rendered marker text
    pub text: String,
    /// This paragraph (re)started the counter
    pub restart: bool,
}

/// Diagnostic record attached to every resolved paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListIndentMetadata {
    /// Resolution path
    pub list_indent_mode: ListIndentMode,
    /// Auto-correction changed the indentation
    pub auto_corrected: bool,
    /// A baseline from an earlier marker chain was reused
    pub matched_previous_chain: bool,
    /// Synthesized counter, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_override: Option<MarkerOverride>,
}

/// Resolver output for one paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParagraph {
    /// Final indentation
    pub indent: IndentSpec,
    /// Start of the first line's text
    pub text_start: f32,
    /// Start of the list marker
    pub marker_start: f32,
    /// Effective numbering id
    pub num_id: Option<u32>,
    /// Effective level
    pub level: Option<u8>,
    /// Marker text to draw
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// The marker is invisible
    #[serde(default)]
    pub marker_hidden: bool,
    /// Resolution diagnostics
    pub metadata: ListIndentMetadata,
}

impl ResolvedParagraph {
    /// Build a result from its indentation, deriving the start positions.
    pub fn from_indent(indent: IndentSpec) -> Self {
        Self {
            indent,
            text_start: indent.text_start(),
            marker_start: indent.marker_start(),
            ..Default::default()
        }
    }

    /// Check if the paragraph was resolved as a list item.
    pub fn is_list_item(&self) -> bool {
        self.metadata.list_indent_mode != ListIndentMode::None
    }
}

/// A document's worth of resolver input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberingInput {
    /// Numbering definitions
    #[serde(default)]
    pub numbering: NumberingTable,
    /// Paragraphs in document order
    #[serde(default)]
    pub paragraphs: Vec<ParagraphEntry>,
}
