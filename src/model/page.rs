//! Page-level types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{BlockPayload, BlockStyle};
use crate::geometry::{Margins, Rect, Size};

/// A single page of the paginated layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page size in points (1 point = 1/72 inch)
    pub size: Size,

    /// Declared page margins
    pub margins: Margins,

    /// Positioned blocks on the page, in placement order
    pub blocks: Vec<LayoutBlock>,
}

impl LayoutPage {
    /// Create a new empty page.
    pub fn new(number: u32, size: Size, margins: Margins) -> Self {
        Self {
            number,
            size,
            margins,
            blocks: Vec::new(),
        }
    }

    /// Full page rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, self.size.height)
    }

    /// Area inside the margins.
    pub fn content_area(&self) -> Rect {
        self.margins.content_rect(self.size)
    }

    /// Check if the page is empty (no blocks).
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks that belong to the body flow (not headers, footers or overlays).
    pub fn body_blocks(&self) -> impl Iterator<Item = &LayoutBlock> {
        self.blocks.iter().filter(|b| b.block_type.is_body())
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.size.width > self.size.height
    }
}

/// Role of a block on its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    /// Body paragraph
    Paragraph,
    /// Body table
    Table,
    /// Inline-positioned image
    Image,
    /// Textbox in the flow
    Textbox,
    /// Page header content
    Header,
    /// Page footer content
    Footer,
    /// Footnote area
    Footnotes,
    /// Endnote area
    Endnotes,
    /// Floating object layer
    Overlay,
    /// Page decoration (watermark, background shapes)
    Decorator,
    /// Anything else
    #[serde(other)]
    Generic,
}

impl BlockType {
    /// Check if this is header or footer content.
    pub fn is_header_footer(&self) -> bool {
        matches!(self, BlockType::Header | BlockType::Footer)
    }

    /// Check if the block takes part in the body flow.
    pub fn is_body(&self) -> bool {
        !matches!(
            self,
            BlockType::Header | BlockType::Footer | BlockType::Overlay | BlockType::Decorator
        )
    }
}

/// A positioned block: an absolute frame plus shared content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutBlock {
    /// Absolute frame on the page (y-up)
    pub frame: Rect,

    /// Role of the block
    pub block_type: BlockType,

    /// Content, shared with the assembler that produced it
    pub content: Arc<BlockPayload>,

    /// Style record; missing styles are reported by the validator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,

    /// Number of the page the block was placed on (set on append)
    #[serde(default)]
    pub page_number: u32,
}

impl LayoutBlock {
    /// Create a block with a default style.
    pub fn new(frame: Rect, block_type: BlockType, content: impl Into<Arc<BlockPayload>>) -> Self {
        Self {
            frame,
            block_type,
            content: content.into(),
            style: Some(BlockStyle::default()),
            page_number: 0,
        }
    }

    /// Replace the style record.
    pub fn with_style(mut self, style: BlockStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Drop the style record.
    pub fn without_style(mut self) -> Self {
        self.style = None;
        self
    }

    /// Space declared before the block (0 when unstyled).
    pub fn spacing_before(&self) -> f32 {
        self.style.as_ref().map(|s| s.spacing.before).unwrap_or(0.0)
    }

    /// Space declared after the block (0 when unstyled).
    pub fn spacing_after(&self) -> f32 {
        self.style.as_ref().map(|s| s.spacing.after).unwrap_or(0.0)
    }
}
