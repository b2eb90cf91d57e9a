//! Skill Conventions
//!
//! Configurable defaults for the recommended rules: expected sections,
//! description bounds and the skill file name.

pub mod loader;
pub mod schema;

pub use loader::{load_conventions, ConventionsSource, LoadedConventions};
pub use schema::{Conventions, DescriptionBounds, SkillFileConventions, StructureConventions};
