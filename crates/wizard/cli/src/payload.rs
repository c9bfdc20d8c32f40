//! Answer files and investigation payloads
//!
//! Answers are read from JSON or YAML maps (chosen by file extension). The
//! payload written by `--save` is what a storage layer would persist for
//! one investigation.

use crate::error::CliResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use wizard_types::{AnswerSet, Theme, Verdict, WizardSchema};

/// Persistable result of one wizard run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    pub theme: Theme,
    pub answers: AnswerSet,
    /// Absent for themes without an engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Read an answer set from a JSON or YAML file
pub fn load_answers(path: &Path) -> CliResult<AnswerSet> {
    let contents = std::fs::read_to_string(path)?;
    let answers = if is_yaml(path) {
        serde_yaml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };
    Ok(answers)
}

/// Log answers that do not fit the schema; engines treat them as absent
pub fn report_issues(schema: &WizardSchema, answers: &AnswerSet) -> usize {
    let issues = schema.validate_answers(answers);
    for issue in &issues {
        tracing::warn!(theme = %schema.theme, %issue, "Malformed answer is ignored");
    }
    issues.len()
}

impl Payload {
    /// Write as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!(path = %path.display(), theme = %self.theme, "Payload saved");
        Ok(())
    }
}
