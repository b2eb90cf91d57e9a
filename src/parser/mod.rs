//! Skill File Parser
//!
//! Splits a skill file into frontmatter and body, and scans the body for headings.
//! No validation logic here - pure data extraction.

pub mod frontmatter;
pub mod markdown;

pub use frontmatter::{parse_frontmatter, Frontmatter, FrontmatterError};
pub use markdown::{scan_headings, Heading};

/// A skill file split into its parts
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSkill {
    pub frontmatter: Frontmatter,
    pub headings: Vec<Heading>,
}

/// Parse a whole skill file
///
/// This is the main entry point for parsing. Headings are only collected from
/// the body, never from the metadata block.
pub fn parse_skill(content: &str) -> Result<ParsedSkill, FrontmatterError> {
    let frontmatter = parse_frontmatter(content)?;
    let headings = scan_headings(&frontmatter.body);
    Ok(ParsedSkill {
        frontmatter,
        headings,
    })
}
