//! Horizontal alignment helper.

use crate::model::Alignment;

/// X position of an item of `width` aligned inside a frame.
///
/// Justified content starts at the frame's left edge. Items wider than the
/// frame overflow to the right for left alignment and to both sides for
/// centered alignment.
pub fn align_horizontally(width: f32, frame_x: f32, frame_width: f32, alignment: Alignment) -> f32 {
    match alignment {
        Alignment::Left | Alignment::Justify => frame_x,
        Alignment::Center => frame_x + (frame_width - width) / 2.0,
        Alignment::Right => frame_x + frame_width - width,
    }
}
