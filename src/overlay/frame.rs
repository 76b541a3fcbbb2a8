//! Absolute placement of floating objects.

use serde::{Deserialize, Serialize};

use super::anchor::{
    extract_anchor_info, AnchorKind, AnchorPosition, AnchorSource, HorizontalFrame, VerticalFrame,
};
use crate::geometry::{Margins, Rect, Size};
use crate::model::{LayoutPage, OverlayBox, OverlayKind};
use crate::validate::align_horizontally;

/// Page geometry overlays are placed against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Page size
    pub size: Size,
    /// Page margins
    pub margins: Margins,
}

impl PageConfig {
    /// Create a page configuration.
    pub fn new(size: Size, margins: Margins) -> Self {
        Self { size, margins }
    }

    /// US Letter with one-inch margins.
    pub fn letter() -> Self {
        Self::new(Size::letter(), Margins::inch())
    }

    /// Geometry of an existing layout page.
    pub fn from_page(page: &LayoutPage) -> Self {
        Self::new(page.size, page.margins)
    }
}

/// Options for [`place_overlay`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlacementOptions {
    /// Shift frames that leave the page back inside it
    pub clamp_to_page: bool,
}

impl PlacementOptions {
    /// Create placement options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable clamping to the page bounds.
    pub fn with_clamp_to_page(mut self, clamp: bool) -> Self {
        self.clamp_to_page = clamp;
        self
    }
}

fn horizontal_reference(frame: HorizontalFrame, anchor: &Rect, page: &PageConfig) -> (f32, f32) {
    match frame {
        HorizontalFrame::Page => (0.0, page.size.width),
        HorizontalFrame::Margin => (
            page.margins.left,
            page.size.width - page.margins.left - page.margins.right,
        ),
        HorizontalFrame::Column => (anchor.x, anchor.width),
    }
}

/// Compute the page-space frame of a floating object.
///
/// Offsets are in points. Page and margin offsets are measured down from
/// the top; block-relative offsets are added to the anchoring block's top
/// edge. Without a position the object sits flush at the anchor's
/// bottom-left corner.
pub fn resolve_overlay_frame(
    position: Option<&AnchorPosition>,
    width: f32,
    height: f32,
    anchor: &Rect,
    page: &PageConfig,
) -> Rect {
    let Some(position) = position else {
        return Rect::new(anchor.x, anchor.y, width, height);
    };
    let width = width.abs();
    let height = height.abs();

    let (ref_x, ref_width) = horizontal_reference(position.relative_from_h, anchor, page);
    let x = match position.align_h {
        Some(align) => align_horizontally(width, ref_x, ref_width, align),
        None => ref_x + position.x,
    };

    let page_height = page.size.height;
    let top = match position.relative_from_v {
        VerticalFrame::Page => page_height - position.y,
        VerticalFrame::Margin => page_height - page.margins.top - position.y,
        VerticalFrame::Paragraph | VerticalFrame::Line | VerticalFrame::Text => {
            anchor.top() + position.y
        }
    };

    Rect::new(x, top - height, width, height)
}

fn clamp_into(frame: Rect, bounds: &Rect) -> Rect {
    let dx = if frame.left() < bounds.left() {
        bounds.left() - frame.left()
    } else if frame.right() > bounds.right() {
        (bounds.right() - frame.right()).max(bounds.left() - frame.left())
    } else {
        0.0
    };
    let dy = if frame.bottom() < bounds.bottom() {
        bounds.bottom() - frame.bottom()
    } else if frame.top() > bounds.top() {
        (bounds.top() - frame.top()).max(bounds.bottom() - frame.bottom())
    } else {
        0.0
    };
    frame.translate(dx, dy)
}

/// Extract anchor fields from `source` and build a placed overlay.
pub fn place_overlay<S: AnchorSource + ?Sized>(
    source: &S,
    kind: OverlayKind,
    anchor: &Rect,
    page: &PageConfig,
    options: &PlacementOptions,
) -> OverlayBox {
    let info = extract_anchor_info(source);
    let position = match info.anchor_type {
        AnchorKind::Floating => info.position.as_ref(),
        AnchorKind::Inline => None,
    };

    let mut frame = resolve_overlay_frame(position, info.width, info.height, anchor, page);
    if options.clamp_to_page {
        let bounds = Rect::from_origin_size(Default::default(), page.size);
        frame = clamp_into(frame, &bounds);
    }
    log::debug!(
        "placed {:?} overlay at ({}, {}) {}x{}",
        kind,
        frame.x,
        frame.y,
        frame.width,
        frame.height
    );

    let mut overlay = OverlayBox::new(kind, frame);
    overlay.behind_text = info.behind_doc;
    overlay
}
