//! Read-only consistency checks over a finished layout.

use super::report::{Edge, IssueKind, Severity, ValidationIssue, ValidationReport};
use crate::model::{LayoutBlock, LayoutPage, PaginatedLayout};

/// Options for [`LayoutValidator`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorOptions {
    /// Tolerance (points) for edge and overlap comparisons
    pub epsilon: f32,

    /// Fraction of the combined declared spacing adjacent blocks should keep
    pub spacing_factor: f32,

    /// Treat warnings as failures when computing `is_valid`
    pub warnings_as_errors: bool,

    /// Limit the bottom-margin and adjacency checks to body-flow blocks,
    /// skipping headers, footers, overlays and decorators
    pub body_flow_only: bool,
}

impl ValidatorOptions {
    /// Create validator options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comparison tolerance.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon.max(0.0);
        self
    }

    /// Set the spacing factor.
    pub fn with_spacing_factor(mut self, factor: f32) -> Self {
        self.spacing_factor = factor.max(0.0);
        self
    }

    /// Fail validation on warnings too.
    pub fn with_warnings_as_errors(mut self, strict: bool) -> Self {
        self.warnings_as_errors = strict;
        self
    }

    /// Skip non-body blocks in the bottom-margin and adjacency checks.
    pub fn with_body_flow_only(mut self, body_only: bool) -> Self {
        self.body_flow_only = body_only;
        self
    }

    fn checks_position_of(&self, block: &LayoutBlock) -> bool {
        !self.body_flow_only || block.block_type.is_body()
    }
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            spacing_factor: 0.5,
            warnings_as_errors: false,
            body_flow_only: false,
        }
    }
}

/// Validates a paginated layout.
///
/// Every check is independent of the others and of block order across
/// pages; findings never abort validation.
#[derive(Debug, Clone, Default)]
pub struct LayoutValidator {
    options: ValidatorOptions,
}

impl LayoutValidator {
    /// Create a validator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom options.
    pub fn with_options(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// The validator options.
    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Run all checks.
    pub fn validate(&self, layout: &PaginatedLayout) -> ValidationReport {
        let mut report = ValidationReport::new();

        if layout.pages.is_empty() {
            report.push(ValidationIssue::new(
                IssueKind::NoPages,
                Severity::Error,
                "Layout has no pages",
            ));
            return report;
        }

        for (index, page) in layout.pages.iter().enumerate() {
            let expected = index as u32 + 1;
            if page.number != expected {
                report.push(
                    ValidationIssue::new(
                        IssueKind::PageSequence,
                        Severity::Warning,
                        format!(
                            "Page number {} found where {} was expected",
                            page.number, expected
                        ),
                    )
                    .on_page(page.number),
                );
            }

            for (block_index, block) in page.blocks.iter().enumerate() {
                self.check_block(page, block_index, block, &mut report);
            }
            self.check_adjacent(page, &mut report);

            if index > 0 && page.blocks.iter().all(|b| b.block_type.is_header_footer()) {
                report.push(
                    ValidationIssue::new(
                        IssueKind::EmptyPage,
                        Severity::Warning,
                        "Page has no content besides header and footer",
                    )
                    .on_page(page.number),
                );
            }
        }

        if self.options.warnings_as_errors && !report.warnings.is_empty() {
            report.is_valid = false;
        }
        log::debug!(
            "validated {} pages: {} errors, {} warnings",
            layout.pages.len(),
            report.errors.len(),
            report.warnings.len()
        );
        report
    }

    fn check_block(
        &self,
        page: &LayoutPage,
        index: usize,
        block: &LayoutBlock,
        report: &mut ValidationReport,
    ) {
        let eps = self.options.epsilon;
        let frame = &block.frame;
        let bounds = page.bounds();
        let issue = |kind, severity, message: String| {
            ValidationIssue::new(kind, severity, message)
                .on_page(page.number)
                .at_block(index)
        };

        let edges = [
            (Edge::Left, frame.left() < bounds.left() - eps),
            (Edge::Right, frame.right() > bounds.right() + eps),
            (Edge::Bottom, frame.bottom() < bounds.bottom() - eps),
            (Edge::Top, frame.top() > bounds.top() + eps),
        ];
        for (edge, violated) in edges {
            if violated {
                report.push(issue(
                    IssueKind::OutOfBounds(edge),
                    Severity::Error,
                    format!("{} frame crosses the {} page edge", block.content.kind_name(), edge),
                ));
            }
        }

        if (frame.width <= 0.0 || frame.height <= 0.0) && !block.content.is_placeholder() {
            report.push(issue(
                IssueKind::NonPositiveSize,
                Severity::Error,
                format!("Frame size {}x{} is not positive", frame.width, frame.height),
            ));
        }

        match &block.style {
            None => report.push(issue(
                IssueKind::MissingStyle,
                Severity::Warning,
                "Block has no style record".to_string(),
            )),
            Some(style) if style.spacing.before < 0.0 || style.spacing.after < 0.0 => {
                report.push(issue(
                    IssueKind::NegativeSpacing,
                    Severity::Warning,
                    format!(
                        "Negative spacing (before {}, after {})",
                        style.spacing.before, style.spacing.after
                    ),
                ))
            }
            Some(_) => {}
        }

        // The declared margin length is compared directly against the frame's y.
        if self.options.checks_position_of(block) && frame.y < page.margins.bottom - eps {
            report.push(issue(
                IssueKind::BelowBottomMargin,
                Severity::Error,
                format!(
                    "Block at y={} is below the bottom margin ({})",
                    frame.y, page.margins.bottom
                ),
            ));
        }
    }

    fn check_adjacent(&self, page: &LayoutPage, report: &mut ValidationReport) {
        let eps = self.options.epsilon;
        let checked: Vec<(usize, &LayoutBlock)> = page
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| self.options.checks_position_of(b))
            .collect();

        for pair in checked.windows(2) {
            let (_, first) = pair[0];
            let (index, second) = pair[1];
            let a = &first.frame;
            let b = &second.frame;

            if a.intersection_area(b) > eps {
                report.push(
                    ValidationIssue::new(
                        IssueKind::Overlap,
                        Severity::Error,
                        format!(
                            "Block overlaps the previous block by {:.2} pt²",
                            a.intersection_area(b)
                        ),
                    )
                    .on_page(page.number)
                    .at_block(index),
                );
                continue;
            }

            let same_column = a.left() < b.right() && b.left() < a.right();
            if !same_column {
                continue;
            }
            let gap = (a.bottom() - b.top()).max(b.bottom() - a.top());
            let required =
                (first.spacing_after() + second.spacing_before()) * self.options.spacing_factor;
            if gap + eps < required {
                report.push(
                    ValidationIssue::new(
                        IssueKind::TightSpacing,
                        Severity::Warning,
                        format!("Gap of {:.2} pt is below the expected {:.2} pt", gap, required),
                    )
                    .on_page(page.number)
                    .at_block(index),
                );
            }
        }
    }
}
