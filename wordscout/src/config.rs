use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a grid query, consumed by the CLI.
///
/// # Configuration Locations
///
/// The configuration can be loaded from multiple locations in order of
/// precedence:
/// 1. Custom config file specified via `--config` flag
/// 2. Local `.wordscout.yaml` in the current directory
/// 3. Global `$HOME/.config/wordscout/config.yaml`
///
/// # Configuration Format
///
/// YAML. Example:
/// ```yaml
/// # Grid rows, one string per row, all the same length
/// grid:
///   - "coldy"
///   - "windy"
///   - "chill"
///
/// # Word stream to look up and rank
/// words:
///   - "cold"
///   - "wind"
///   - "cold"
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
///
/// CLI arguments take precedence over config file values; the merging
/// behavior is defined in `merge_with_cli`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Grid rows to search
    #[serde(default)]
    pub grid: Vec<String>,

    /// Word stream to look up, ranked by stream frequency
    #[serde(default)]
    pub words: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for QueryConfig {
    /// The documented sample query used when the CLI is run bare.
    fn default() -> Self {
        Self {
            grid: ["coldy", "windy", "chill", "uvxyy"]
                .map(String::from)
                .to_vec(),
            words: ["cold", "wind", "snow", "chill", "cold", "wind", "wind"]
                .map(String::from)
                .to_vec(),
            log_level: default_log_level(),
        }
    }
}

impl QueryConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("wordscout/config.yaml")),
            // Local config
            Some(PathBuf::from(".wordscout.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: QueryConfig) -> Self {
        // CLI values take precedence over config file values
        if !cli_config.grid.is_empty() {
            self.grid = cli_config.grid;
        }
        if !cli_config.words.is_empty() {
            self.words = cli_config.words;
        }
        if !cli_config.log_level.is_empty() && cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            grid: ["abcd", "efgh"]
            words: ["abcd", "aei"]
            log_level: "debug"
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = QueryConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.grid, vec!["abcd", "efgh"]);
        assert_eq!(config.words, vec!["abcd", "aei"]);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            grid: ["abcd"]
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = QueryConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.grid, vec!["abcd"]);
        assert!(config.words.is_empty());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_merge_with_cli() {
        let config_file = QueryConfig {
            grid: vec!["abcd".to_string()],
            words: vec!["abcd".to_string()],
            log_level: "warn".to_string(),
        };

        let cli_config = QueryConfig {
            grid: vec!["wxyz".to_string()],
            words: Vec::new(),
            log_level: "debug".to_string(),
        };

        let merged = config_file.merge_with_cli(cli_config);
        assert_eq!(merged.grid, vec!["wxyz"]); // CLI value
        assert_eq!(merged.words, vec!["abcd"]); // File value (CLI empty)
        assert_eq!(merged.log_level, "debug"); // CLI value
    }

    #[test]
    fn test_default_query_is_searchable() {
        let config = QueryConfig::default();
        assert!(!config.grid.is_empty());
        assert!(!config.words.is_empty());
        assert!(config.grid.iter().all(|row| row.len() == config.grid[0].len()));
    }

    #[test]
    fn test_invalid_config() {
        let config_content = r#"
            grid: 123  # Should be a list
            log_level: []  # Should be a string
        "#;

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let result = QueryConfig::load_from(Some(&config_path));
        assert!(result.is_err(), "Expected error loading invalid config");
    }
}
