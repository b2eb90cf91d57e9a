//! Conventions Schema Types
//!
//! Parameters of the recommended (warning-level) rules, matching the TOML layout.
//! Every key is optional; missing keys fall back to the built-in defaults.

use serde::{Deserialize, Serialize};

/// Root conventions document
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Conventions {
    pub skill: SkillFileConventions,
    pub structure: StructureConventions,
    pub description: DescriptionBounds,
}

/// Where the skill file lives inside each skill directory
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SkillFileConventions {
    pub file_name: String,
}

/// Recommended markdown structure of the body
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StructureConventions {
    /// Warn when the body has no level-1 heading
    pub require_title: bool,
    /// Level-2 sections every skill should have
    pub sections: Vec<String>,
}

/// Accepted description length in characters
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DescriptionBounds {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for SkillFileConventions {
    fn default() -> Self {
        Self {
            file_name: "SKILL.md".to_string(),
        }
    }
}

impl Default for StructureConventions {
    fn default() -> Self {
        Self {
            require_title: true,
            sections: vec![
                "Overview".to_string(),
                "Instructions".to_string(),
                "Examples".to_string(),
            ],
        }
    }
}

impl Default for DescriptionBounds {
    fn default() -> Self {
        Self {
            min_length: 20,
            max_length: 1024,
        }
    }
}

impl StructureConventions {
    /// Check if a heading text satisfies a recommended section name
    ///
    /// Matches the exact name or the name followed by a non-alphanumeric
    /// character ("Examples: advanced"), ignoring ASCII case.
    pub fn section_matches(section: &str, heading: &str) -> bool {
        let Some(prefix) = heading.get(..section.len()) else {
            return false;
        };
        if !prefix.eq_ignore_ascii_case(section) {
            return false;
        }

        heading[section.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric())
    }
}

impl DescriptionBounds {
    /// Describe why a description length is out of bounds, if it is
    pub fn check(&self, description: &str) -> Option<String> {
        let len = description.chars().count();
        if len < self.min_length {
            Some(format!(
                "description is {} characters long; at least {} recommended",
                len, self.min_length
            ))
        } else if len > self.max_length {
            Some(format!(
                "description is {} characters long; at most {} recommended",
                len, self.max_length
            ))
        } else {
            None
        }
    }
}
