//! Layout model types.
//!
//! This module defines the typed handoff between layout assembly and the
//! rendering backends: positioned blocks on numbered pages, the payload
//! variants they carry, and the style records attached to them.

mod block;
mod layout;
mod page;
mod paragraph;
mod style;
mod table;

use std::collections::BTreeMap;

/// Free-form, string-keyed data attached to inline items and generic blocks.
pub type DataMap = BTreeMap<String, serde_json::Value>;

pub use block::{
    BlockPayload, GenericLayout, ImageLayout, OverlayBox, OverlayKind, TextboxLayout,
};
pub use layout::PaginatedLayout;
pub use page::{BlockType, LayoutBlock, LayoutPage};
pub use paragraph::{InlineItem, InlineKind, MarkerLayout, ParagraphLayout, ParagraphLine};
pub use style::{
    Alignment, BlockStyle, BorderSide, BorderSpec, BoxStyle, Color, DashStyle, Padding, Spacing,
};
pub use table::{TableCellLayout, TableLayout, TableRowLayout, VerticalAlignment};
