//! Validation Engine
//!
//! Applies the rule set to loaded skill records.
//! Separated from parsing and reporting concerns.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::conventions::Conventions;
use crate::core::SkillRecord;
use crate::validation::rules;

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Which rule family produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Skill file missing or unreadable
    Read,
    /// Malformed metadata block
    Parse,
    /// Missing or invalid required field
    Schema,
    /// Name pattern or name/directory mismatch
    Naming,
    /// Name declared by more than one skill
    Duplicate,
    /// Recommended structure not followed
    Style,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Read => "read",
            IssueKind::Parse => "parse",
            IssueKind::Schema => "schema",
            IssueKind::Naming => "naming",
            IssueKind::Duplicate => "duplicate",
            IssueKind::Style => "style",
        }
    }
}

/// One reported rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub kind: IssueKind,
    /// Skill directory name, `None` for run-level issues
    pub skill: Option<String>,
    pub message: String,
}

/// Issues produced by validating one or more skills
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_error(&mut self, kind: IssueKind, skill: Option<&str>, message: String) {
        self.push(Severity::Error, kind, skill, message);
    }

    pub fn add_warning(&mut self, kind: IssueKind, skill: Option<&str>, message: String) {
        self.push(Severity::Warning, kind, skill, message);
    }

    fn push(&mut self, severity: Severity, kind: IssueKind, skill: Option<&str>, message: String) {
        self.issues.push(ValidationIssue {
            severity,
            kind,
            skill: skill.map(str::to_string),
            message,
        });
    }

    pub fn extend(&mut self, other: ValidationResult) {
        self.issues.extend(other.issues);
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a single skill record against the per-skill rules
///
/// Every mandatory rule runs independently. A record without parsed content
/// yields only its load problem, since the field rules have nothing to check.
pub fn validate_record(record: &SkillRecord, conventions: &Conventions) -> ValidationResult {
    let mut result = ValidationResult::new();
    let skill = record.dir_name.as_str();

    let content = match &record.content {
        Ok(content) => content,
        Err(problem) => {
            rules::check_load_problem(skill, record, problem, &mut result);
            return result;
        }
    };

    rules::check_required_fields(skill, content, &mut result);
    rules::check_name(skill, content, &mut result);
    rules::check_version(skill, content, &mut result);
    rules::check_structure(skill, content, &conventions.structure, &mut result);
    rules::check_description(skill, content, &conventions.description, &mut result);

    result
}

/// Cross-record rule: every declared name must be unique in the run
///
/// Each directory taking part in a collision gets its own issue naming the
/// other directories.
pub fn check_unique_names(records: &[SkillRecord]) -> ValidationResult {
    let mut by_name: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for record in records {
        if let Some(name) = record.declared_name() {
            by_name.entry(name).or_default().push(&record.dir_name);
        }
    }

    let mut result = ValidationResult::new();
    for record in records {
        let Some(name) = record.declared_name() else {
            continue;
        };
        let Some(dirs) = by_name.get(name).filter(|dirs| dirs.len() > 1) else {
            continue;
        };

        let others: Vec<&str> = dirs
            .iter()
            .copied()
            .filter(|d| *d != record.dir_name)
            .collect();
        result.add_error(
            IssueKind::Duplicate,
            Some(&record.dir_name),
            format!(
                "skill name '{}' is also declared in: {}",
                name,
                others.join(", ")
            ),
        );
    }

    result
}

/// Validate a whole run of records
///
/// The uniqueness rule needs every record loaded first; its issues are then
/// placed next to the per-skill issues of the directory they concern.
pub fn validate_records(records: &[SkillRecord], conventions: &Conventions) -> ValidationResult {
    let duplicates = check_unique_names(records);
    let mut result = ValidationResult::new();

    for record in records {
        result.extend(validate_record(record, conventions));
        result.issues.extend(
            duplicates
                .issues
                .iter()
                .filter(|i| i.skill.as_deref() == Some(record.dir_name.as_str()))
                .cloned(),
        );
    }

    if records.is_empty() {
        result.add_warning(IssueKind::Style, None, "no skills found".to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "---
name: pdf-tools
description: Extract text and tables from PDF files
version: 1.2.0
---
# PDF Tools

## Overview
Text.

## Instructions
Steps.

## Examples
Samples.
";

    fn record(dir: &str, text: &str) -> SkillRecord {
        SkillRecord::from_text(dir, format!("{dir}/SKILL.md"), text)
    }

    fn kinds(result: &ValidationResult) -> Vec<IssueKind> {
        result.issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        result.add_warning(IssueKind::Style, Some("a"), "Test warning".to_string());
        assert!(result.is_valid()); // Warnings don't make it invalid

        result.add_error(IssueKind::Schema, Some("a"), "Test error".to_string());
        assert!(!result.is_valid());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_default_result_is_empty() {
        assert_eq!(ValidationResult::default(), ValidationResult::new());
    }

    #[test]
    fn test_valid_record_is_clean() {
        let result = validate_record(&record("pdf-tools", VALID), &Conventions::default());
        assert!(result.issues.is_empty(), "{:?}", result.issues);
    }

    #[test]
    fn test_parse_problem_is_the_only_issue() {
        let result = validate_record(
            &record("broken", "no frontmatter here"),
            &Conventions::default(),
        );
        assert_eq!(kinds(&result), vec![IssueKind::Parse]);
        assert_eq!(result.issues[0].skill.as_deref(), Some("broken"));
    }

    #[test]
    fn test_nested_name_is_a_parse_error() {
        let result = validate_record(
            &record(
                "nested",
                "---\nname: {a: b}\ndescription: Handles nested metadata\nversion: 1.0.0\n---\n# T\n",
            ),
            &Conventions::default(),
        );
        assert_eq!(kinds(&result), vec![IssueKind::Parse]);
        assert!(result.issues[0].message.contains("'name' must be a plain value"));
    }

    #[test]
    fn test_unique_names_reports_each_directory() {
        let a = record("alpha", &VALID.replace("pdf-tools", "shared"));
        let b = record("beta", &VALID.replace("pdf-tools", "shared"));
        let c = record("gamma", &VALID.replace("pdf-tools", "gamma"));

        let result = check_unique_names(&[a, b, c]);
        assert_eq!(kinds(&result), vec![IssueKind::Duplicate, IssueKind::Duplicate]);
        assert_eq!(result.issues[0].skill.as_deref(), Some("alpha"));
        assert!(result.issues[0].message.contains("beta"));
        assert_eq!(result.issues[1].skill.as_deref(), Some("beta"));
        assert!(result.issues[1].message.contains("alpha"));
    }

    #[test]
    fn test_unique_names_ignores_missing_names() {
        let a = record("alpha", "---\ndescription: x\n---\n");
        let b = record("beta", "---\ndescription: y\n---\n");
        assert!(check_unique_names(&[a, b]).issues.is_empty());
    }

    #[test]
    fn test_validate_records_keeps_issues_grouped_by_skill() {
        let a = record("alpha", &VALID.replace("pdf-tools", "shared"));
        let b = record("beta", &VALID.replace("pdf-tools", "shared"));

        let result = validate_records(&[a, b], &Conventions::default());
        let skills: Vec<_> = result
            .issues
            .iter()
            .map(|i| (i.skill.clone().unwrap(), i.kind))
            .collect();
        assert_eq!(
            skills,
            vec![
                ("alpha".to_string(), IssueKind::Naming),
                ("alpha".to_string(), IssueKind::Duplicate),
                ("beta".to_string(), IssueKind::Naming),
                ("beta".to_string(), IssueKind::Duplicate),
            ]
        );
    }

    #[test]
    fn test_empty_run_warns() {
        let result = validate_records(&[], &Conventions::default());
        assert!(result.is_valid());
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.issues[0].skill, None);
    }
}
