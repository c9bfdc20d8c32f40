//! CLI configuration

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wizard_types::Theme;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Theme used when a command is given none
    pub default_theme: Option<String>,

    /// Output format used when `--output` is not given
    pub output: Option<OutputFormat>,

    /// Directory that relative `--save` paths resolve against
    pub save_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from file; a missing file yields the defaults
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = Self::path(path)?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig = toml::from_str(&contents)?;
            tracing::debug!(path = %config_path.display(), "Configuration loaded");
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// The file `load` reads from
    pub fn path(path: Option<&str>) -> CliResult<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_config_path(),
        }
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("riskwiz").join("config.toml"))
    }

    /// Pick the explicit theme, else the configured default
    pub fn resolve_theme(&self, theme: Option<Theme>) -> CliResult<Theme> {
        if let Some(theme) = theme {
            return Ok(theme);
        }
        match &self.default_theme {
            Some(id) => id
                .parse()
                .map_err(|e: wizard_types::WizardError| CliError::Config(e.to_string())),
            None => Err(CliError::InvalidInput(
                "No theme given and no default_theme configured".into(),
            )),
        }
    }

    /// Where a payload should be written
    pub fn resolve_save_path(&self, path: &Path) -> PathBuf {
        match &self.save_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.default_theme.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        // Should return default config when file doesn't exist
        let config = CliConfig::load(Some("/nonexistent/path/config.toml")).unwrap();
        assert!(config.default_theme.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "default_theme = \"vibration\"\noutput = \"json\"\nsave_dir = \"/tmp/riskwiz\""
        )
        .unwrap();

        let config = CliConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.resolve_theme(None).unwrap(), Theme::Vibration);
        assert!(matches!(config.output, Some(OutputFormat::Json)));
        assert_eq!(
            config.resolve_save_path(Path::new("out.json")),
            PathBuf::from("/tmp/riskwiz/out.json")
        );
        assert_eq!(
            config.resolve_save_path(Path::new("/abs/out.json")),
            PathBuf::from("/abs/out.json")
        );
    }

    #[test]
    fn test_invalid_toml_is_a_toml_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_theme = ").unwrap();
        let err = CliConfig::load(file.path().to_str()).unwrap_err();
        assert!(matches!(err, CliError::Toml(_)));
        assert!(err.to_string().starts_with("TOML error"));
    }

    #[test]
    fn test_resolve_theme() {
        let config = CliConfig::default();
        assert_eq!(config.resolve_theme(Some(Theme::Sound)).unwrap(), Theme::Sound);
        assert!(matches!(config.resolve_theme(None), Err(CliError::InvalidInput(_))));

        let config = CliConfig {
            default_theme: Some("noise".into()),
            ..Default::default()
        };
        assert!(matches!(config.resolve_theme(None), Err(CliError::Config(_))));
    }
}
