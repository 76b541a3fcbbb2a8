//! List numbering and indentation resolution.
//!
//! Paragraph indentation arrives from up to four sources (style, numbering
//! level, paragraph properties, inline formatting). [`ListIndentResolver`]
//! merges them, synthesizes marker text from level counters and unifies
//! near-identical indents of visually identical lists.

mod definition;
mod entry;
mod format;
mod indent;
mod marker;
mod options;
mod resolver;

pub use definition::{
    AbstractNumbering, LevelOverride, NumberingInstance, NumberingLevel, NumberingTable,
};
pub use entry::{
    ListIndentMetadata, ListIndentMode, MarkerOverride, NumberingInput, ParagraphEntry,
    ResolvedParagraph,
};
pub use format::{format_counter, to_letters, to_ordinal, to_roman, NumberFormat};
pub use indent::IndentSpec;
pub use marker::{estimate_marker_width, expand_template, has_placeholders, marker_token};
pub use options::ResolverOptions;
pub use resolver::{ListIndentResolver, ListLevelNode, NodeId, Scope};
