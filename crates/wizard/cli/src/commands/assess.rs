//! Batch assessment of an answers file

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{self, print_success, OutputFormat};
use crate::payload::{self, Payload};
use std::path::PathBuf;
use wizard_engine::ThemeRegistry;
use wizard_types::{Theme, WizardError};

/// Execute the assess command
pub fn execute(
    registry: &ThemeRegistry,
    config: &CliConfig,
    theme: Theme,
    answers_path: PathBuf,
    save: Option<PathBuf>,
    format: OutputFormat,
) -> CliResult<()> {
    let schema = registry
        .schema(theme)
        .ok_or(WizardError::ThemeNotFound(theme))?;
    let answers = payload::load_answers(&answers_path)?;
    payload::report_issues(&schema, &answers);

    let verdict = registry.assess(theme, &answers)?;
    output::print_verdict(&verdict, format)?;

    if let Some(path) = save {
        let path = config.resolve_save_path(&path);
        Payload {
            theme,
            answers,
            verdict: Some(verdict),
        }
        .save(&path)?;
        if matches!(format, OutputFormat::Table) {
            print_success(&format!("Saved payload to {}", path.display()));
        }
    }
    Ok(())
}
