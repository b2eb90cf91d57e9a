//! Skill Records
//!
//! One immutable record per skill directory, built from the file on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::parser::{parse_skill, FrontmatterError, Heading};

/// A required frontmatter field as found in the metadata block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Missing,
    /// Scalar rendered as text; `null` becomes the empty string
    Text(String),
}

impl FieldValue {
    /// Read a required field; lists and mappings break the flat-mapping rule
    fn from_yaml(key: &str, value: Option<&Value>) -> Result<Self, FrontmatterError> {
        let field = match value {
            None => FieldValue::Missing,
            Some(Value::Null) => FieldValue::Text(String::new()),
            Some(Value::String(s)) => FieldValue::Text(s.clone()),
            Some(Value::Bool(b)) => FieldValue::Text(b.to_string()),
            Some(Value::Number(n)) => FieldValue::Text(n.to_string()),
            Some(Value::Tagged(tagged)) => return FieldValue::from_yaml(key, Some(&tagged.value)),
            Some(Value::Sequence(_) | Value::Mapping(_)) => {
                return Err(FrontmatterError::NestedValue(key.to_string()));
            }
        };
        Ok(field)
    }

    /// The value if it is a scalar with visible content
    pub fn text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Why a skill file could not be turned into fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadProblem {
    /// The skill directory has no skill file
    MissingFile,
    /// The skill file exists but could not be read
    Unreadable(String),
    /// The metadata block could not be parsed
    Frontmatter(FrontmatterError),
}

/// Parsed content of a readable skill file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillContent {
    pub name: FieldValue,
    pub description: FieldValue,
    pub version: FieldValue,
    /// Body has a level-1 heading
    pub has_title: bool,
    /// Titles of level-2 headings in document order
    pub sections: Vec<String>,
}

/// Everything the rule engine knows about one skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecord {
    /// Name of the containing directory
    pub dir_name: String,
    /// Path of the skill file
    pub path: PathBuf,
    pub content: Result<SkillContent, LoadProblem>,
}

impl SkillRecord {
    /// Load the skill file `file_name` inside `dir`
    pub fn load(dir: &Path, file_name: &str) -> Self {
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let path = dir.join(file_name);

        let content = if !path.is_file() {
            Err(LoadProblem::MissingFile)
        } else {
            match fs::read_to_string(&path) {
                Ok(text) => SkillContent::parse(&text),
                Err(e) => Err(LoadProblem::Unreadable(e.to_string())),
            }
        };

        Self {
            dir_name,
            path,
            content,
        }
    }

    /// Build a record from text already in memory
    pub fn from_text(dir_name: &str, path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            dir_name: dir_name.to_string(),
            path: path.into(),
            content: SkillContent::parse(text),
        }
    }

    /// Declared name, when present and non-empty
    pub fn declared_name(&self) -> Option<&str> {
        self.content.as_ref().ok()?.name.text()
    }
}

impl SkillContent {
    pub fn parse(text: &str) -> Result<Self, LoadProblem> {
        let parsed = parse_skill(text).map_err(LoadProblem::Frontmatter)?;
        let fm = &parsed.frontmatter;
        let field = |key: &str| {
            FieldValue::from_yaml(key, fm.get(key)).map_err(LoadProblem::Frontmatter)
        };

        Ok(Self {
            name: field("name")?,
            description: field("description")?,
            version: field("version")?,
            has_title: parsed.headings.iter().any(|h| h.level == 1),
            sections: level_two_titles(&parsed.headings),
        })
    }
}

fn level_two_titles(headings: &[Heading]) -> Vec<String> {
    headings
        .iter()
        .filter(|h| h.level == 2)
        .map(|h| h.text.clone())
        .collect()
}
