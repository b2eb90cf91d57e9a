//! Validation Report
//!
//! Aggregates issues into per-skill outcomes and overall counts, and renders
//! the result for the terminal.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::validation::{Severity, ValidationIssue, ValidationResult};

/// Pass/fail summary of one skill directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillOutcome {
    pub skill: String,
    pub errors: usize,
    pub warnings: usize,
    pub passed: bool,
}

/// Outcome of a whole validation run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub skills_dir: PathBuf,
    pub strict: bool,
    pub skills: Vec<SkillOutcome>,
    pub issues: Vec<ValidationIssue>,
    pub error_count: usize,
    pub warning_count: usize,
    pub success: bool,
}

impl ValidationReport {
    /// Build the report for the given skill directories, in the order given
    pub fn new(
        skills_dir: impl Into<PathBuf>,
        strict: bool,
        skill_names: &[String],
        result: ValidationResult,
    ) -> Self {
        let passes = |errors: usize, warnings: usize| errors == 0 && (!strict || warnings == 0);

        let skills = skill_names
            .iter()
            .map(|skill| {
                let own = result
                    .issues
                    .iter()
                    .filter(|i| i.skill.as_deref() == Some(skill.as_str()));
                let (errors, warnings) = own.fold((0, 0), |(e, w), issue| match issue.severity {
                    Severity::Error => (e + 1, w),
                    Severity::Warning => (e, w + 1),
                });
                SkillOutcome {
                    skill: skill.clone(),
                    errors,
                    warnings,
                    passed: passes(errors, warnings),
                }
            })
            .collect();

        let error_count = result.error_count();
        let warning_count = result.warning_count();

        Self {
            skills_dir: skills_dir.into(),
            strict,
            skills,
            issues: result.issues,
            error_count,
            warning_count,
            success: passes(error_count, warning_count),
        }
    }

    /// Process exit code: 0 on success, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.success { 0 } else { 1 }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues_with(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues_with(Severity::Warning)
    }

    fn issues_with(&self, severity: Severity) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    /// Write the human-readable report
    pub fn render_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Validated {} in {}",
            plural(self.skills.len(), "skill"),
            self.skills_dir.display()
        )?;

        if !self.skills.is_empty() {
            writeln!(out)?;
            writeln!(out, "Skills:")?;
            for outcome in &self.skills {
                let status = if outcome.passed { "PASS" } else { "FAIL" };
                write!(out, "  {}  {}", status, outcome.skill)?;
                match (outcome.errors, outcome.warnings) {
                    (0, 0) => writeln!(out)?,
                    (0, w) => writeln!(out, " ({})", plural(w, "warning"))?,
                    (e, 0) => writeln!(out, " ({})", plural(e, "error"))?,
                    (e, w) => writeln!(out, " ({}, {})", plural(e, "error"), plural(w, "warning"))?,
                }
            }
        }

        self.render_section(out, "Errors:", self.errors())?;
        self.render_section(out, "Warnings:", self.warnings())?;

        writeln!(out)?;
        writeln!(out, "{}", self.summary_line())
    }

    fn render_section<'a, W: Write>(
        &self,
        out: &mut W,
        title: &str,
        issues: impl Iterator<Item = &'a ValidationIssue>,
    ) -> io::Result<()> {
        let mut issues = issues.peekable();
        if issues.peek().is_none() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{}", title)?;
        for issue in issues {
            match &issue.skill {
                Some(skill) => writeln!(out, "  [{}] {}: {}", issue.kind.label(), skill, issue.message)?,
                None => writeln!(out, "  [{}] {}", issue.kind.label(), issue.message)?,
            }
        }
        Ok(())
    }

    fn summary_line(&self) -> String {
        let counts = format!(
            "{}, {}",
            plural(self.error_count, "error"),
            plural(self.warning_count, "warning")
        );

        if self.success && self.warning_count == 0 {
            "All skills validated successfully".to_string()
        } else if self.success {
            format!("Validation passed with {}", plural(self.warning_count, "warning"))
        } else if self.error_count == 0 {
            format!("Validation failed: {} (strict mode treats warnings as errors)", counts)
        } else {
            format!("Validation failed: {}", counts)
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
