//! Markdown Heading Scanner
//!
//! Extracts headings from a skill body with a CommonMark parser, so fenced
//! and indented code never contributes headings.

use pulldown_cmark::{Event, Parser, Tag};

/// A markdown heading like "## Overview"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,
    /// Heading text, trimmed, with inline markup removed
    pub text: String,
}

/// Collect all headings of a markdown body in document order
///
/// Headings with no text are dropped.
pub fn scan_headings(body: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading(level, _, _)) => {
                current = Some((level as u8, String::new()));
            }
            Event::End(Tag::Heading(_, _, _)) => {
                if let Some((level, text)) = current.take() {
                    let text = text.trim();
                    if !text.is_empty() {
                        headings.push(Heading {
                            level,
                            text: text.to_string(),
                        });
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            _ => {}
        }
    }

    headings
}
