use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::config::{Config, OutputFormat};
use crate::validator::SkillValidator;

/// Exit code for runs that could not complete
pub const EXIT_FATAL: u8 = 2;

/// Run the validator from process arguments and return the exit code
pub fn run() -> Result<u8> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    run_with_config(&config, &mut io::stdout().lock())
}

/// Validate with explicit configuration, writing the report to `out`
pub fn run_with_config<W: Write>(config: &Config, out: &mut W) -> Result<u8> {
    let validator = SkillValidator::from_config(config)?;
    let report = validator.validate_dir(&config.skills_dir)?;

    match config.format {
        OutputFormat::Text => report
            .render_text(out)
            .context("Failed to write report")?,
        OutputFormat::Json => {
            let json = report.to_json().context("Failed to serialize report")?;
            writeln!(out, "{}", json).context("Failed to write report")?;
        }
    }

    Ok(report.exit_code())
}
