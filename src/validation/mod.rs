//! Validation Engine
//!
//! Rule evaluation, separated from parsing and report rendering.

pub mod engine;
pub mod rules;

pub use engine::{
    check_unique_names, validate_record, validate_records, IssueKind, Severity, ValidationIssue,
};

// Re-export common types
pub use engine::ValidationResult;
