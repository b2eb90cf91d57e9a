//! Fatal errors
//!
//! Anything that goes wrong with a single skill becomes a report issue; only
//! these abort a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("cannot read skills directory {}", .path.display())]
    SkillsDirUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read conventions file {}", .path.display())]
    ConventionsUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid conventions file {}", .path.display())]
    ConventionsInvalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
