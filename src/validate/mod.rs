//! Layout validation.
//!
//! A pure read-only pass over a [`PaginatedLayout`](crate::model::PaginatedLayout)
//! that partitions its findings into errors and warnings.

mod align;
mod report;
mod validator;

pub use align::align_horizontally;
pub use report::{Edge, IssueKind, Severity, ValidationIssue, ValidationReport};
pub use validator::{LayoutValidator, ValidatorOptions};
