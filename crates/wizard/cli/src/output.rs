//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};
use wizard_types::{RiskLevel, Verdict};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print a vector of items in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                let table = Table::new(data).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&data)?);
        }
    }
    Ok(())
}

/// Print a single item in the specified format
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(data)?);
        }
    }
    Ok(())
}

/// Risk level in its report colour
pub fn colored_level(level: RiskLevel) -> ColoredString {
    let label = level.label().to_uppercase();
    match level {
        RiskLevel::Critical => label.red().bold(),
        RiskLevel::High => label.red(),
        RiskLevel::Medium => label.yellow(),
        RiskLevel::Low => label.green(),
        RiskLevel::Unknown => label.dimmed(),
    }
}

#[derive(Debug, Serialize, Tabled)]
struct FindingRow {
    #[tabled(rename = "Onderwerp")]
    topic: String,
    #[tabled(rename = "Niveau")]
    level: String,
    #[tabled(rename = "Samenvatting")]
    summary: String,
    #[tabled(rename = "Grondslag")]
    legal_basis: String,
}

#[derive(Debug, Serialize, Tabled)]
struct RecommendationRow {
    #[tabled(rename = "Prio")]
    priority: u32,
    #[tabled(rename = "Fase")]
    stage: String,
    #[tabled(rename = "Actie")]
    action: String,
    #[tabled(rename = "Termijn")]
    deadline: String,
}

/// Human-readable verdict report
pub fn print_verdict_report(verdict: &Verdict) {
    println!(
        "{} {}",
        "Risiconiveau:".bold(),
        colored_level(verdict.overall_level)
    );
    println!();

    let findings: Vec<FindingRow> = verdict
        .findings
        .iter()
        .map(|f| FindingRow {
            topic: f.topic.clone(),
            level: f.level.label().to_string(),
            summary: f.summary.clone(),
            legal_basis: f.legal_basis.clone().unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(findings));

    if !verdict.recommendations.is_empty() {
        println!();
        println!("{}", "Aanbevelingen".bold());
        let recommendations: Vec<RecommendationRow> = verdict
            .recommendations
            .iter()
            .map(|r| RecommendationRow {
                priority: r.priority,
                stage: r.stage.to_string(),
                action: r.action.clone(),
                deadline: r.deadline.clone().unwrap_or_default(),
            })
            .collect();
        println!("{}", Table::new(recommendations));
    }

    if !verdict.data_gaps.is_empty() {
        println!();
        println!("{}", "Ontbrekende gegevens".bold());
        for gap in &verdict.data_gaps {
            print_warning(gap);
        }
    }
}

/// Verdict in the requested format
pub fn print_verdict(verdict: &Verdict, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            print_verdict_report(verdict);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Yaml => print_single(verdict, format),
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        let format = OutputFormat::default();
        assert!(matches!(format, OutputFormat::Table));
    }

    #[test]
    fn test_output_format_deserializes_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"yaml\"").unwrap();
        assert!(matches!(format, OutputFormat::Yaml));
    }
}
