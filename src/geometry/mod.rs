//! Geometric primitives and unit conversion.
//!
//! All lengths in the layout model are points, with a y-up page coordinate
//! system: a rectangle's `y` is its bottom edge and `top = y + height`.

mod primitives;
mod units;

pub use primitives::{Margins, Point, Rect, Size};
pub use units::{
    emu_to_points, half_points_to_points, inches_to_points, pixels_to_points, points_to_emu,
    points_to_twips, twips_to_points, LengthUnit, DEFAULT_DPI, EMU_PER_INCH, POINTS_PER_INCH,
    TWIPS_PER_POINT,
};
