//! Floating object placement.
//!
//! Resolves the anchor data of images, textboxes and shapes into absolute
//! page-space frames, and normalizes the loosely typed lengths found in
//! source markup.

mod anchor;
mod frame;
mod normalize;

pub use anchor::{
    extract_anchor_info, extract_dimension, points_or_emu, AnchorInfo, AnchorKind, AnchorPosition,
    AnchorSource, AnchoredObject, HorizontalFrame, VerticalFrame, ANCHOR_INFO_KEY, EMU_THRESHOLD,
};
pub use frame::{place_overlay, resolve_overlay_frame, PageConfig, PlacementOptions};
pub use normalize::{
    normalize_font_size, normalize_length, normalize_margins, normalize_spacing,
    HALF_POINT_THRESHOLD, TWIPS_THRESHOLD,
};
