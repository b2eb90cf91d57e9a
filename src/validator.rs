//! Skill Validator
//!
//! Runs the whole pipeline over a skills directory: discovery, record loading,
//! rule evaluation and report aggregation.

use std::path::Path;

use crate::config::Config;
use crate::conventions::{load_conventions, Conventions};
use crate::core::{discover_skill_dirs, SkillRecord};
use crate::error::Result;
use crate::report::ValidationReport;
use crate::validation::validate_records;

/// Validates skill directories against a set of conventions
#[derive(Debug, Clone)]
pub struct SkillValidator {
    conventions: Conventions,
    strict: bool,
}

impl Default for SkillValidator {
    fn default() -> Self {
        Self::new(Conventions::default())
    }
}

impl SkillValidator {
    pub fn new(conventions: Conventions) -> Self {
        Self {
            conventions,
            strict: false,
        }
    }

    /// Create a validator from run configuration, resolving conventions files
    pub fn from_config(config: &Config) -> Result<Self> {
        let loaded = load_conventions(config)?;
        Ok(Self::new(loaded.conventions).strict(config.strict))
    }

    /// Treat warnings as failures
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }

    /// Load every skill below `root`
    ///
    /// Fails only when `root` itself cannot be listed; per-skill problems are
    /// kept inside the records.
    pub fn load_records(&self, root: &Path) -> Result<Vec<SkillRecord>> {
        let file_name = &self.conventions.skill.file_name;
        let records = discover_skill_dirs(root)?
            .iter()
            .map(|dir| {
                let record = SkillRecord::load(dir, file_name);
                log::debug!("Loaded skill '{}' from {}", record.dir_name, record.path.display());
                record
            })
            .collect();
        Ok(records)
    }

    /// Validate every skill below `root` and aggregate the report
    pub fn validate_dir(&self, root: &Path) -> Result<ValidationReport> {
        let records = self.load_records(root)?;
        let result = validate_records(&records, &self.conventions);

        let names: Vec<String> = records.iter().map(|r| r.dir_name.clone()).collect();
        let report = ValidationReport::new(root, self.strict, &names, result);

        log::info!(
            "Validated {} skills in {}: {} errors, {} warnings",
            report.skills.len(),
            root.display(),
            report.error_count,
            report.warning_count
        );

        Ok(report)
    }
}
