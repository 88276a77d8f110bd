use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::output::OutputFormat;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::load_optional(None).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
            [output]
            format = "csv"
            pretty = true

            [logging]
            filter = "wardmap=debug"
            "#,
        );
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert!(config.output.pretty);
        assert_eq!(config.logging.filter, "wardmap=debug");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("[output]\nformat = \"text\"\n");
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_unknown_format_is_error() {
        let file = write_config("[output]\nformat = \"yaml\"\n");
        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = Config::load_from_file("/nonexistent/wardmap.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
