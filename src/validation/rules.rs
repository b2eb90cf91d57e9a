//! Skill Rules
//!
//! Individual checks used by the engine. Each check appends to a shared result
//! and never short-circuits the others.

use std::sync::LazyLock;

use regex::Regex;

use crate::conventions::{DescriptionBounds, StructureConventions};
use crate::core::{FieldValue, LoadProblem, SkillContent, SkillRecord};
use crate::validation::engine::{IssueKind, ValidationResult};

/// Lowercase letters, digits and hyphens, starting with a letter
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("valid name regex"));

/// MAJOR.MINOR.PATCH, ASCII digits only
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("valid version regex"));

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "description", "version"];

pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

pub fn is_valid_version(version: &str) -> bool {
    VERSION_PATTERN.is_match(version)
}

pub fn check_load_problem(
    skill: &str,
    record: &SkillRecord,
    problem: &LoadProblem,
    result: &mut ValidationResult,
) {
    match problem {
        LoadProblem::MissingFile => result.add_error(
            IssueKind::Read,
            Some(skill),
            format!("missing skill file {}", record.path.display()),
        ),
        LoadProblem::Unreadable(e) => result.add_error(
            IssueKind::Read,
            Some(skill),
            format!("failed to read {}: {}", record.path.display(), e),
        ),
        LoadProblem::Frontmatter(e) => result.add_error(
            IssueKind::Parse,
            Some(skill),
            format!("{}: {}", record.path.display(), e),
        ),
    }
}

/// One schema error per required field that is missing or empty
pub fn check_required_fields(skill: &str, content: &SkillContent, result: &mut ValidationResult) {
    let fields = [&content.name, &content.description, &content.version];

    for (field, value) in REQUIRED_FIELDS.iter().zip(fields) {
        let message = match value {
            FieldValue::Missing => format!("missing required field '{}'", field),
            FieldValue::Text(_) if value.text().is_none() => {
                format!("required field '{}' is empty", field)
            }
            FieldValue::Text(_) => continue,
        };
        result.add_error(IssueKind::Schema, Some(skill), message);
    }
}

/// Name pattern and name/directory consistency, checked independently
pub fn check_name(skill: &str, content: &SkillContent, result: &mut ValidationResult) {
    let Some(name) = content.name.text() else {
        return;
    };

    if !is_valid_name(name) {
        result.add_error(
            IssueKind::Naming,
            Some(skill),
            format!(
                "skill name '{}' must be lowercase letters, digits and hyphens, \
                 starting with a letter (e.g. 'my-skill-name')",
                name
            ),
        );
    }

    if name != skill {
        result.add_error(
            IssueKind::Naming,
            Some(skill),
            format!(
                "skill name '{}' doesn't match directory name '{}'",
                name, skill
            ),
        );
    }
}

pub fn check_version(skill: &str, content: &SkillContent, result: &mut ValidationResult) {
    let Some(version) = content.version.text() else {
        return;
    };

    if !is_valid_version(version) {
        result.add_error(
            IssueKind::Schema,
            Some(skill),
            format!(
                "version '{}' must follow semantic versioning MAJOR.MINOR.PATCH (e.g. '1.0.0')",
                version
            ),
        );
    }
}

/// Recommended title and sections
pub fn check_structure(
    skill: &str,
    content: &SkillContent,
    structure: &StructureConventions,
    result: &mut ValidationResult,
) {
    if structure.require_title && !content.has_title {
        result.add_warning(
            IssueKind::Style,
            Some(skill),
            "missing top-level heading (# Title)".to_string(),
        );
    }

    for section in &structure.sections {
        let found = content
            .sections
            .iter()
            .any(|heading| StructureConventions::section_matches(section, heading));
        if !found {
            result.add_warning(
                IssueKind::Style,
                Some(skill),
                format!("recommended section '## {}' not found", section),
            );
        }
    }
}

/// Description length; empty descriptions are left to the schema check
pub fn check_description(
    skill: &str,
    content: &SkillContent,
    bounds: &DescriptionBounds,
    result: &mut ValidationResult,
) {
    let Some(description) = content.description.text() else {
        return;
    };

    if let Some(message) = bounds.check(description.trim()) {
        result.add_warning(IssueKind::Style, Some(skill), message);
    }
}
