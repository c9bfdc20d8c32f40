//! riskwiz - command-line host for workplace hazard wizards
//!
//! This CLI lets assessors:
//! - List the available themes and inspect their questionnaires
//! - Assess a saved answers file and print the risk verdict
//! - Walk through a wizard interactively
//! - Look up the legal clauses and abbreviations used in reports
//! - Save `{theme, answers, verdict}` as the investigation payload

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wizard_engine::ThemeRegistry;
use wizard_types::Theme;

mod commands;
mod config;
mod error;
mod output;
mod payload;

use commands::{assess, glossary, schema, themes, walk};
use config::CliConfig;
use error::CliResult;

/// riskwiz application
#[derive(Parser)]
#[command(name = "riskwiz")]
#[command(about = "riskwiz - workplace hazard wizards and risk assessment", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "RISKWIZ_CONFIG")]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long)]
    output: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List themes
    Themes,

    /// Show the questionnaire of a theme
    Schema {
        /// Theme id (e.g. vibration, sound)
        theme: Option<Theme>,
    },

    /// Assess an answers file (JSON or YAML)
    Assess {
        /// Theme id; falls back to default_theme from the config
        theme: Option<Theme>,

        /// Path to the answers file
        #[arg(short, long)]
        answers: PathBuf,

        /// Write the investigation payload to this file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Walk through a wizard interactively
    Walk {
        /// Theme id; falls back to default_theme from the config
        theme: Option<Theme>,

        /// Resume from a previously saved answers file
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Write the investigation payload to this file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Explain legal clauses and abbreviations
    Glossary {
        /// Abbreviation (e.g. PAGO) or clause key (e.g. vibration-limits)
        term: Option<String>,
    },

    /// Show configuration
    Config,
}

fn main() {
    if let Err(e) = run() {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.output.or(config.output).unwrap_or_default();

    let registry = ThemeRegistry::builtin()?;

    // Execute command
    match cli.command {
        Commands::Themes => themes::execute(&registry, format),
        Commands::Schema { theme } => {
            let theme = config.resolve_theme(theme)?;
            schema::execute(&registry, theme, format)
        }
        Commands::Assess {
            theme,
            answers,
            save,
        } => {
            let theme = config.resolve_theme(theme)?;
            assess::execute(&registry, &config, theme, answers, save, format)
        }
        Commands::Walk {
            theme,
            answers,
            save,
        } => {
            let theme = config.resolve_theme(theme)?;
            walk::execute(&registry, &config, theme, answers, save, format)
        }
        Commands::Glossary { term } => glossary::execute(term.as_deref(), format),
        Commands::Config => {
            println!("Config file: {}", CliConfig::path(cli.config.as_deref())?.display());
            println!("Default theme: {:?}", config.default_theme);
            println!("Output: {:?}", format);
            println!("Save directory: {:?}", config.save_dir);
            Ok(())
        }
    }
}
