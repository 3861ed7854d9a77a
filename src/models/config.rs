//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// MCP server launch settings
    #[serde(default)]
    pub mcp: McpConfig,

    /// Scraping behavior settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        if !path.as_ref().exists() {
            return Self::default();
        }

        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.mcp.command.trim().is_empty() {
            return Err(AppError::validation("mcp.command is empty"));
        }
        if self.scraper.page_size == 0 {
            return Err(AppError::validation("scraper.page_size must be > 0"));
        }
        if self.scraper.posts_per_pause == 0 {
            return Err(AppError::validation("scraper.posts_per_pause must be > 0"));
        }
        Ok(())
    }
}

/// MCP server launch settings.
///
/// The Reddit MCP server is spawned as a child process and spoken to over
/// stdio for the duration of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpConfig {
    /// Command used to launch the MCP server
    #[serde(default = "defaults::mcp_command")]
    pub command: String,

    /// Arguments passed to the launch command
    #[serde(default = "defaults::mcp_args")]
    pub args: Vec<String>,
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            command: defaults::mcp_command(),
            args: defaults::mcp_args(),
        }
    }
}

/// Scraping behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Maximum number of posts considered per run
    #[serde(default = "defaults::post_limit")]
    pub post_limit: usize,

    /// Page size of the server's hot-post listing
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// Number of posts processed between rate-limiting pauses
    #[serde(default = "defaults::posts_per_pause")]
    pub posts_per_pause: usize,

    /// Pause duration in milliseconds
    #[serde(default = "defaults::pause_ms")]
    pub pause_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            post_limit: defaults::post_limit(),
            page_size: defaults::page_size(),
            posts_per_pause: defaults::posts_per_pause(),
            pause_ms: defaults::pause_ms(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the corpus CSV is written to
    #[serde(default = "defaults::output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
        }
    }
}

mod defaults {
    // MCP defaults
    pub fn mcp_command() -> String {
        "uvx".into()
    }
    pub fn mcp_args() -> Vec<String> {
        vec!["mcp-server-reddit".into()]
    }

    // Scraper defaults
    pub fn post_limit() -> usize {
        100
    }
    pub fn page_size() -> usize {
        100
    }
    pub fn posts_per_pause() -> usize {
        10
    }
    pub fn pause_ms() -> u64 {
        1000
    }

    // Output defaults
    pub fn output_dir() -> String {
        ".".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_command() {
        let mut config = Config::default();
        config.mcp.command = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_pause_interval() {
        let mut config = Config::default();
        config.scraper.posts_per_pause = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scraper]
            post_limit = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.scraper.post_limit, 25);
        assert_eq!(config.scraper.page_size, 100);
        assert_eq!(config.mcp.command, "uvx");
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("does/not/exist.toml");
        assert_eq!(config.scraper.post_limit, 100);
    }
}
