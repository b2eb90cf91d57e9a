//! Core Skill Loading
//!
//! Directory discovery and per-skill record construction.

pub mod discovery;
pub mod record;

pub use discovery::discover_skill_dirs;
pub use record::{FieldValue, LoadProblem, SkillContent, SkillRecord};
