//! Frontmatter Splitter
//!
//! Locates the leading `---` fenced YAML block of a skill file and parses it
//! into a flat key/value mapping. Pure functions, no I/O.

use std::collections::BTreeMap;

use serde_yaml::Value;
use thiserror::Error;

/// Fence line that opens and closes the metadata block
const FENCE: &str = "---";

/// Why a metadata block could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    #[error("missing YAML frontmatter (expected a leading '---' line)")]
    Missing,
    #[error("unterminated YAML frontmatter (missing closing '---' line)")]
    Unterminated,
    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
    #[error("frontmatter is not a key/value mapping")]
    NotAMapping,
    #[error("frontmatter key {0} is not a string")]
    NonStringKey(String),
    #[error("frontmatter field '{0}' must be a plain value, not a list or mapping")]
    NestedValue(String),
}

/// A successfully split skill file
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter {
    /// Top-level keys of the metadata block
    pub fields: BTreeMap<String, Value>,
    /// Everything after the closing fence
    pub body: String,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Split raw file text into its metadata mapping and markdown body
pub fn parse_frontmatter(content: &str) -> Result<Frontmatter, FrontmatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let normalized = content.replace("\r\n", "\n");

    let mut lines = normalized.split('\n');
    match lines.next() {
        Some(first) if is_fence(first) => {}
        _ => return Err(FrontmatterError::Missing),
    }

    let mut yaml_lines = Vec::new();
    let mut closed = false;
    for line in &mut lines {
        if is_fence(line) {
            closed = true;
            break;
        }
        yaml_lines.push(line);
    }

    if !closed {
        return Err(FrontmatterError::Unterminated);
    }

    let fields = parse_mapping(&yaml_lines.join("\n"))?;
    let body = lines.collect::<Vec<_>>().join("\n");

    Ok(Frontmatter { fields, body })
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

/// Parse the YAML text of the block, rejecting anything but a string-keyed mapping
fn parse_mapping(yaml: &str) -> Result<BTreeMap<String, Value>, FrontmatterError> {
    let value: Value =
        serde_yaml::from_str(yaml).map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        _ => return Err(FrontmatterError::NotAMapping),
    };

    let mut fields = BTreeMap::new();
    for (key, value) in mapping {
        match key {
            Value::String(key) => {
                fields.insert(key, value);
            }
            other => {
                let rendered = serde_yaml::to_string(&other)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_else(|_| format!("{:?}", other));
                return Err(FrontmatterError::NonStringKey(rendered));
            }
        }
    }

    Ok(fields)
}
