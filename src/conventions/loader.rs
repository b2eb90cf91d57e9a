//! Conventions loading
//!
//! Loading priority: built-in < user-global < project < command line.
//! The highest-priority file that exists wins as a whole; nothing is merged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::conventions::schema::Conventions;
use crate::error::{Result, ValidatorError};

/// File name looked up in the working directory
pub const PROJECT_CONVENTIONS_FILE: &str = ".skill-validator.toml";

/// Where the effective conventions came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConventionsSource {
    BuiltIn = 0,
    UserGlobal = 1,
    Project = 2,
    CommandLine = 3,
}

/// Conventions together with their origin
#[derive(Debug, Clone)]
pub struct LoadedConventions {
    pub conventions: Conventions,
    pub source: ConventionsSource,
    pub source_path: Option<PathBuf>,
}

impl LoadedConventions {
    pub fn built_in() -> Self {
        Self {
            conventions: Conventions::default(),
            source: ConventionsSource::BuiltIn,
            source_path: None,
        }
    }
}

/// Resolve the effective conventions for a run
pub fn load_conventions(config: &Config) -> Result<LoadedConventions> {
    // An explicitly requested file has to be there
    if let Some(path) = &config.cli_conventions {
        let conventions = load_file(path)?;
        return Ok(loaded(conventions, ConventionsSource::CommandLine, path));
    }

    let optional = [
        (ConventionsSource::Project, config.project_conventions.as_ref()),
        (ConventionsSource::UserGlobal, config.user_conventions.as_ref()),
    ];

    for (source, path) in optional {
        let Some(path) = path else { continue };
        if !path.is_file() {
            log::debug!("No {:?} conventions at {}", source, path.display());
            continue;
        }
        let conventions = load_file(path)?;
        return Ok(loaded(conventions, source, path));
    }

    log::debug!("Using built-in conventions");
    Ok(LoadedConventions::built_in())
}

fn loaded(conventions: Conventions, source: ConventionsSource, path: &Path) -> LoadedConventions {
    log::info!("Loaded {:?} conventions from {}", source, path.display());
    LoadedConventions {
        conventions,
        source,
        source_path: Some(path.to_path_buf()),
    }
}

/// Read and parse a single conventions file
pub fn load_file(path: &Path) -> Result<Conventions> {
    let content = fs::read_to_string(path).map_err(|source| unreadable(path, source))?;
    parse_conventions(&content).map_err(|source| ValidatorError::ConventionsInvalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse conventions from TOML text
pub fn parse_conventions(content: &str) -> std::result::Result<Conventions, toml::de::Error> {
    toml::from_str(content)
}

fn unreadable(path: &Path, source: io::Error) -> ValidatorError {
    ValidatorError::ConventionsUnreadable {
        path: path.to_path_buf(),
        source,
    }
}
