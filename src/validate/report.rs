//! Validation findings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Left edge
    Left,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Top edge
    Top,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Top => "top",
        };
        f.write_str(name)
    }
}

/// What a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "edge", rename_all = "snake_case")]
pub enum IssueKind {
    /// The layout has no pages
    NoPages,
    /// A block frame crosses a page edge
    OutOfBounds(Edge),
    /// A block frame has zero or negative width or height
    NonPositiveSize,
    /// A block carries no style record
    MissingStyle,
    /// A block declares negative spacing
    NegativeSpacing,
    /// Page numbers are not 1, 2, 3, ...
    PageSequence,
    /// A body block lies below the bottom margin value
    BelowBottomMargin,
    /// Two adjacent blocks overlap
    Overlap,
    /// Two adjacent blocks are closer than their declared spacing allows
    TightSpacing,
    /// A non-first page holds nothing but header and footer content
    EmptyPage,
}

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Geometric or structural impossibility
    Error,
    /// Soft quality signal
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Finding kind
    pub kind: IssueKind,
    /// Severity
    pub severity: Severity,
    /// Page number, if the finding concerns a page
    pub page: Option<u32>,
    /// Block index on the page, if the finding concerns a block
    pub block: Option<usize>,
    /// Human-readable description
    pub message: String,
}

impl ValidationIssue {
    /// Create a finding.
    pub fn new(kind: IssueKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            page: None,
            block: None,
            message: message.into(),
        }
    }

    /// Attach a page number.
    pub fn on_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Attach a block index.
    pub fn at_block(mut self, block: usize) -> Self {
        self.block = Some(block);
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.page, self.block) {
            (Some(page), Some(block)) => {
                write!(f, "Page {}, block {}: {}", page, block, self.message)
            }
            (Some(page), None) => write!(f, "Page {}: {}", page, self.message),
            _ => f.write_str(&self.message),
        }
    }
}

/// Result of validating a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// No errors were found
    pub is_valid: bool,
    /// Hard failures
    pub errors: Vec<ValidationIssue>,
    /// Soft findings
    pub warnings: Vec<ValidationIssue>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationReport {
    /// Create an empty, valid report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding under its severity.
    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => {
                self.errors.push(issue);
                self.is_valid = false;
            }
            Severity::Warning => self.warnings.push(issue),
        }
    }

    /// Combine another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.is_valid = self.is_valid && other.is_valid;
    }

    /// Findings of either severity, errors first.
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }

    /// Count findings of a kind.
    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues().filter(|i| i.kind == kind).count()
    }

    /// Split into `(is_valid, errors, warnings)` message lists.
    pub fn into_parts(self) -> (bool, Vec<String>, Vec<String>) {
        (
            self.is_valid,
            self.errors.iter().map(ToString::to_string).collect(),
            self.warnings.iter().map(ToString::to_string).collect(),
        )
    }
}
