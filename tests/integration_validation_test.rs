//! End-to-end validation of skill trees on disk
use std::fs;
use std::path::Path;

use skill_validator::{IssueKind, Severity, SkillValidator, ValidationReport};
use tempfile::TempDir;

const BODY: &str = "# Title

## Overview
What it does.

## Instructions
How to use it.

## Examples
```bash
# a shell comment, not a heading
run-it --now
```
";

/// Helper to write a skill directory with the given frontmatter lines
fn write_skill(root: &Path, dir: &str, frontmatter: &str, body: &str) {
    let skill_dir = root.join(dir);
    fs::create_dir_all(&skill_dir).expect("create skill dir");
    fs::write(
        skill_dir.join("SKILL.md"),
        format!("---\n{}---\n{}", frontmatter, body),
    )
    .expect("write SKILL.md");
}

fn valid_frontmatter(name: &str) -> String {
    format!(
        "name: {}\ndescription: A well described skill for testing purposes\nversion: 1.0.0\n",
        name
    )
}

fn validate(root: &Path, strict: bool) -> ValidationReport {
    SkillValidator::default()
        .strict(strict)
        .validate_dir(root)
        .expect("validate skills dir")
}

fn issues_for<'a>(
    report: &'a ValidationReport,
    skill: &'a str,
) -> impl Iterator<Item = &'a skill_validator::ValidationIssue> {
    report
        .issues
        .iter()
        .filter(move |i| i.skill.as_deref() == Some(skill))
}

#[test]
fn test_valid_skills_have_no_issues() {
    let root = TempDir::new().unwrap();
    for name in ["pdf-tools", "excel", "web-search-2"] {
        write_skill(root.path(), name, &valid_frontmatter(name), BODY);
    }

    let report = validate(root.path(), true);
    assert_eq!(report.error_count, 0, "{:?}", report.issues);
    assert_eq!(report.warning_count, 0, "{:?}", report.issues);
    assert!(report.success);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.skills.len(), 3);
    assert!(report.skills.iter().all(|s| s.passed));
}

#[test]
fn test_missing_fields_one_schema_error_each() {
    let root = TempDir::new().unwrap();
    write_skill(
        root.path(),
        "no-version",
        "name: no-version\ndescription: Missing its version field entirely\n",
        BODY,
    );
    write_skill(root.path(), "bare", "title: nothing useful\n", BODY);

    let report = validate(root.path(), false);

    let no_version: Vec<_> = issues_for(&report, "no-version").collect();
    assert_eq!(no_version.len(), 1);
    assert_eq!(no_version[0].kind, IssueKind::Schema);
    assert!(no_version[0].message.contains("'version'"));

    let bare_schema = issues_for(&report, "bare")
        .filter(|i| i.kind == IssueKind::Schema)
        .count();
    assert_eq!(bare_schema, 3);
    assert!(!report.success);
}

#[test]
fn test_uppercase_name_in_matching_directory() {
    let root = TempDir::new().unwrap();
    write_skill(root.path(), "My-Skill", &valid_frontmatter("My-Skill"), BODY);

    let report = validate(root.path(), false);
    let naming: Vec<_> = issues_for(&report, "My-Skill")
        .filter(|i| i.kind == IssueKind::Naming)
        .collect();

    assert_eq!(naming.len(), 1);
    assert!(naming[0].message.contains("lowercase"));
    assert!(!naming[0].message.contains("directory"));
}

#[test]
fn test_version_format() {
    let root = TempDir::new().unwrap();
    write_skill(
        root.path(),
        "short-version",
        "name: short-version\ndescription: Declares a two part version number\nversion: 1.0\n",
        BODY,
    );
    write_skill(
        root.path(),
        "full-version",
        "name: full-version\ndescription: Declares a three part version number\nversion: \"1.0.0\"\n",
        BODY,
    );

    let report = validate(root.path(), false);
    let short: Vec<_> = issues_for(&report, "short-version").collect();
    assert_eq!(short.len(), 1);
    assert_eq!(short[0].kind, IssueKind::Schema);
    assert!(short[0].message.contains("'1.0'"));

    assert_eq!(issues_for(&report, "full-version").count(), 0);
}

#[test]
fn test_duplicate_names_across_directories() {
    let root = TempDir::new().unwrap();
    write_skill(root.path(), "shared", &valid_frontmatter("shared"), BODY);
    write_skill(root.path(), "shared-copy", &valid_frontmatter("shared"), BODY);

    let report = validate(root.path(), false);
    let duplicates: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::Duplicate)
        .collect();

    assert_eq!(duplicates.len(), 2);
    assert!(duplicates.iter().all(|i| i.severity == Severity::Error));
    assert!(!report.success);

    // The copy also fails the directory consistency rule
    assert!(
        issues_for(&report, "shared-copy")
            .any(|i| i.kind == IssueKind::Naming && i.message.contains("directory"))
    );
}

#[test]
fn test_strict_mode_with_warnings_only() {
    let root = TempDir::new().unwrap();
    write_skill(
        root.path(),
        "thin-docs",
        &valid_frontmatter("thin-docs"),
        "# Thin Docs\n\n## Overview\nOnly an overview.\n",
    );

    let lenient = validate(root.path(), false);
    assert_eq!(lenient.error_count, 0);
    assert_eq!(lenient.warning_count, 2);
    assert_eq!(lenient.exit_code(), 0);

    let strict = validate(root.path(), true);
    assert_eq!(strict.issues, lenient.issues);
    assert_eq!(strict.exit_code(), 1);
    assert!(!strict.skills[0].passed);
}

#[test]
fn test_one_broken_skill_does_not_stop_others() {
    let root = TempDir::new().unwrap();
    write_skill(root.path(), "alpha", &valid_frontmatter("alpha"), BODY);
    let broken = root.path().join("broken");
    fs::create_dir(&broken).unwrap();
    fs::write(broken.join("SKILL.md"), "---\nname: [oops\n---\n# Broken\n").unwrap();
    fs::create_dir(root.path().join("no-file")).unwrap();
    write_skill(root.path(), "zulu", &valid_frontmatter("zulu"), BODY);

    let report = validate(root.path(), false);
    let kinds: Vec<_> = report
        .issues
        .iter()
        .map(|i| (i.skill.as_deref().unwrap(), i.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![("broken", IssueKind::Parse), ("no-file", IssueKind::Read)]
    );

    let passed: Vec<_> = report
        .skills
        .iter()
        .map(|s| (s.skill.as_str(), s.passed))
        .collect();
    assert_eq!(
        passed,
        vec![
            ("alpha", true),
            ("broken", false),
            ("no-file", false),
            ("zulu", true)
        ]
    );
}

#[test]
fn test_empty_root_warns() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("README.md"), "# Skills\n").unwrap();

    let report = validate(root.path(), false);
    assert!(report.skills.is_empty());
    assert_eq!(report.warning_count, 1);
    assert_eq!(report.issues[0].skill, None);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(validate(root.path(), true).exit_code(), 1);
}

#[test]
fn test_text_report_lists_everything() {
    let root = TempDir::new().unwrap();
    write_skill(root.path(), "good", &valid_frontmatter("good"), BODY);
    write_skill(
        root.path(),
        "bad",
        "name: Bad\ndescription: short\n",
        "no headings at all\n",
    );

    let report = validate(root.path(), false);
    let mut out = Vec::new();
    report.render_text(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Validated 2 skills in "));
    assert!(text.contains("  FAIL  bad (3 errors, 5 warnings)\n"));
    assert!(text.contains("  PASS  good\n"));
    assert!(text.contains("[schema] bad: missing required field 'version'"));
    assert!(text.contains("[naming] bad: skill name 'Bad' must be lowercase"));
    assert!(text.contains("[style] bad: recommended section '## Examples' not found"));
    assert!(text.ends_with("Validation failed: 3 errors, 5 warnings\n"));
}

#[test]
fn test_nested_required_field_is_a_parse_error() {
    let root = TempDir::new().unwrap();
    write_skill(
        root.path(),
        "nested",
        "name: {a: b}\ndescription: A well described skill for testing purposes\nversion: 1.0.0\n",
        BODY,
    );
    write_skill(
        root.path(),
        "with-metadata",
        &format!(
            "{}metadata:\n  author: someone\n  tags: [a, b]\n",
            valid_frontmatter("with-metadata")
        ),
        BODY,
    );

    let report = validate(root.path(), true);
    let nested: Vec<_> = issues_for(&report, "nested").collect();
    assert_eq!(nested.len(), 1, "{:?}", nested);
    assert_eq!(nested[0].kind, IssueKind::Parse);
    assert_eq!(nested[0].severity, Severity::Error);
    assert!(nested[0].message.contains("'name'"));
    assert_eq!(issues_for(&report, "with-metadata").count(), 0);
}

#[test]
fn test_headings_inside_nested_fences_do_not_count() {
    let root = TempDir::new().unwrap();
    let body = "# Fenced\n\n## Overview\nText.\n\n## Instructions\nSteps.\n\n\
                ````markdown\n```\n## Examples\n```\n````\n";
    write_skill(root.path(), "fenced", &valid_frontmatter("fenced"), body);

    let report = validate(root.path(), false);
    let messages: Vec<_> = issues_for(&report, "fenced")
        .map(|i| i.message.as_str())
        .collect();
    assert_eq!(messages, vec!["recommended section '## Examples' not found"]);
    assert_eq!(validate(root.path(), true).exit_code(), 1);
}
