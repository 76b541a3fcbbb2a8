//! Paragraph indentation record.

use serde::{Deserialize, Serialize};

use crate::geometry::twips_to_points;

/// Paragraph indentation in points.
///
/// `hanging` and `first_line` are mutually exclusive: a non-zero `hanging`
/// always wins (see [`IndentSpec::normalized`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentSpec {
    /// Left (start) indent
    pub left: f32,
    /// Right (end) indent
    pub right: f32,
    /// Additional indent of the first line
    pub first_line: f32,
    /// Hanging indent: the first line starts this far left of `left`
    pub hanging: f32,
}

impl IndentSpec {
    /// Create an indent spec from its four fields.
    pub fn new(left: f32, right: f32, first_line: f32, hanging: f32) -> Self {
        Self {
            left,
            right,
            first_line,
            hanging,
        }
    }

    /// Create an indent spec from twentieths of a point.
    pub fn from_twips(left: f32, right: f32, first_line: f32, hanging: f32) -> Self {
        Self::new(
            twips_to_points(left),
            twips_to_points(right),
            twips_to_points(first_line),
            twips_to_points(hanging),
        )
    }

    /// Left indent only.
    pub fn left(left: f32) -> Self {
        Self::new(left, 0.0, 0.0, 0.0)
    }

    /// Left plus hanging indent.
    pub fn hanging(left: f32, hanging: f32) -> Self {
        Self::new(left, 0.0, 0.0, hanging)
    }

    /// Check if every field is zero.
    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.right == 0.0 && self.first_line == 0.0 && self.hanging == 0.0
    }

    /// Enforce hanging/first-line exclusivity.
    pub fn normalized(mut self) -> Self {
        if self.hanging != 0.0 {
            self.first_line = 0.0;
        }
        self
    }

    /// Replace every non-zero field of `other` into a copy of `self`.
    ///
    /// Supplying a first-line indent clears an inherited hanging indent and
    /// vice versa.
    pub fn overridden_by(&self, other: &IndentSpec) -> Self {
        let mut out = *self;
        if other.left != 0.0 {
            out.left = other.left;
        }
        if other.right != 0.0 {
            out.right = other.right;
        }
        if other.hanging != 0.0 {
            out.hanging = other.hanging;
            out.first_line = 0.0;
        } else if other.first_line != 0.0 {
            out.first_line = other.first_line;
            out.hanging = 0.0;
        }
        out
    }

    /// Field-wise sum.
    pub fn plus(&self, other: &IndentSpec) -> Self {
        Self::new(
            self.left + other.left,
            self.right + other.right,
            self.first_line + other.first_line,
            self.hanging + other.hanging,
        )
    }

    /// Zero the start-side fields, keeping the right indent.
    pub fn collapsed(&self) -> Self {
        Self::new(0.0, self.right, 0.0, 0.0)
    }

    /// Where the first line's text begins.
    pub fn text_start(&self) -> f32 {
        if self.first_line != 0.0 {
            self.left + self.first_line
        } else {
            self.left.max(0.0)
        }
    }

    /// Where the list marker begins.
    pub fn marker_start(&self) -> f32 {
        if self.hanging != 0.0 {
            self.left - self.hanging
        } else {
            self.left.max(0.0)
        }
    }
}
