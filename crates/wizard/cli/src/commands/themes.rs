//! Theme listing

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use serde::Serialize;
use tabled::Tabled;
use wizard_engine::ThemeRegistry;

/// Table row for theme display
#[derive(Debug, Serialize, Tabled)]
struct ThemeRow {
    /// Theme id
    id: String,
    /// Display name
    name: String,
    /// Number of steps
    steps: usize,
    /// Number of questions
    questions: usize,
    /// Engine name, if the theme has inference
    engine: String,
}

/// Execute the themes command
pub fn execute(registry: &ThemeRegistry, format: OutputFormat) -> CliResult<()> {
    let rows: Vec<ThemeRow> = registry
        .themes()
        .into_iter()
        .filter_map(|theme| {
            let schema = registry.schema(theme)?;
            Some(ThemeRow {
                id: theme.to_string(),
                name: theme.label().to_string(),
                steps: schema.step_count(),
                questions: schema.question_count(),
                engine: registry
                    .engine(theme)
                    .map(|e| e.name().to_string())
                    .unwrap_or_else(|| "-".to_string()),
            })
        })
        .collect();
    output::print_output(rows, format)
}
