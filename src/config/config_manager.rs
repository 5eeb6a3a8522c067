use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the config at `path` (or the default location). A missing file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> AnalyzerResult<Config> {
        let config_location = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !config_location.exists() {
            log::debug!("No config at {}, using defaults", config_location.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_location.display());
        let content = fs::read_to_string(&config_location).map_err(|e| AnalyzerError::ConfigurationFileError {
            path: config_location.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str::<Config>(&content).map_err(|e| AnalyzerError::ConfigurationFileError {
            path: config_location.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn create_sample_config(path: Option<&Path>) -> AnalyzerResult<PathBuf> {
        let sample_config = r#"# Analyzer Console Configuration

[backend]
# Where the analysis web service listens
base_url = "http://localhost:5001"

# Seconds between health probes in the interactive console
health_interval_secs = 30

[console]
# Language sent with snippets when --language is not given
default_language = "python"

# Languages listed in the console help
languages = ["java", "python", "javascript", "go", "rust"]

# Print the raw Markdown analysis instead of the rendered HTML
show_raw_markdown = false
"#;
        let config_file_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if config_file_path.exists() {
            return Err(AnalyzerError::config_error(
                "Configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", config_file_path.display())),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<AnalyzerError>> {
        let mut errors = Vec::new();

        match Url::parse(&config.backend.base_url) {
            Ok(url) if url.cannot_be_a_base() => errors.push(AnalyzerError::config_error(
                "Backend URL cannot be used as a base",
                Some("backend.base_url"),
                Some("Use an http(s) URL such as http://localhost:5001"),
            )),
            Ok(_) => {}
            Err(e) => errors.push(AnalyzerError::config_error(
                &format!("Invalid backend URL '{}': {}", config.backend.base_url, e),
                Some("backend.base_url"),
                Some("Use an http(s) URL such as http://localhost:5001"),
            )),
        }

        if config.backend.health_interval_secs == 0 {
            errors.push(AnalyzerError::config_error(
                "Health interval must be at least one second",
                Some("backend.health_interval_secs"),
                None,
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.backend.health_interval_secs, 30);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[backend]\nbase_url = \"http://10.0.0.5:5001\"\n").unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.backend.base_url, "http://10.0.0.5:5001");
        assert_eq!(config.backend.health_interval_secs, 30);
        assert_eq!(config.console.default_language, "python");
    }

    #[test]
    fn sample_config_round_trips_and_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        ConfigManager::create_sample_config(Some(&path)).unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert!(ConfigManager::create_sample_config(Some(&path)).is_err());
    }

    #[test]
    fn malformed_file_is_a_config_file_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[backend\nbase_url = ").unwrap();

        let err = ConfigManager::load(Some(&path)).unwrap_err();
        assert!(matches!(err, AnalyzerError::ConfigurationFileError { .. }));
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = Config::default();
        config.backend.base_url = "not a url".to_string();
        config.backend.health_interval_secs = 0;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
