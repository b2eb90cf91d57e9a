//! Skill Discovery
//!
//! Lists the skill directories below a skills root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, ValidatorError};

/// List skill directories in name order
///
/// Regular files and hidden directories are skipped. Failing to read the root
/// itself is the only fatal condition of a run.
pub fn discover_skill_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let unreadable = |source: io::Error| ValidatorError::SkillsDirUnreadable {
        path: root.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();

        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden {
            log::debug!("Skipping hidden entry {}", path.display());
            continue;
        }

        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}
