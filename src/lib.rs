//! Skill Validator
//!
//! Structural validation for collections of SKILL.md files.
//!
//! This library provides:
//! - YAML frontmatter parsing and markdown heading scanning
//! - Mandatory (error) and recommended (warning) rule checks
//! - Report aggregation with strict mode
//! - Configurable conventions for the recommended rules

pub mod cli;
pub mod config;
pub mod conventions;
pub mod core;
pub mod error;
pub mod parser;
pub mod report;
pub mod validation;
pub mod validator;

// Re-exports for clean public API
pub use config::{Config, OutputFormat};
pub use conventions::Conventions;
pub use error::ValidatorError;
pub use parser::{parse_skill, ParsedSkill};
pub use report::{SkillOutcome, ValidationReport};
pub use validation::{IssueKind, Severity, ValidationIssue};
pub use validator::SkillValidator;
