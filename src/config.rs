//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable consulted at build time for the default backend, and at
/// run time as an override.
pub const BACKEND_URL_ENV: &str = "RESUME_MATCH_BACKEND_URL";

const FALLBACK_BACKEND_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: default_backend_url().to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

/// Backend baked in at build time, if any.
pub fn default_backend_url() -> &'static str {
    option_env!("RESUME_MATCH_BACKEND_URL").unwrap_or(FALLBACK_BACKEND_URL)
}

impl Config {
    /// Loads the file at `path`, writing defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeMatchError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeMatchError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-match")
            .join("config.toml")
    }

    /// Picks the backend once per run: explicit flag, then environment, then file.
    pub fn resolve_backend_url(&self, flag: Option<&str>) -> String {
        let from_env = std::env::var(BACKEND_URL_ENV).ok();
        pick_backend_url(flag, from_env.as_deref(), &self.backend.base_url)
    }

    /// Applies a `section.key` assignment from the command line.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend.base_url" => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ResumeMatchError::Configuration(
                        "backend.base_url cannot be empty".to_string(),
                    ));
                }
                self.backend.base_url = trimmed.to_string();
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeMatchError::Configuration)?;
            }
            "output.detailed" => self.output.detailed = parse_bool(key, value)?,
            "output.color_output" => self.output.color_output = parse_bool(key, value)?,
            _ => {
                return Err(ResumeMatchError::Configuration(format!(
                    "Unknown configuration key: {}. Supported: backend.base_url, output.format, output.detailed, output.color_output",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn pick_backend_url(flag: Option<&str>, env: Option<&str>, configured: &str) -> String {
    flag.or(env)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(configured)
        .to_string()
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ResumeMatchError::Configuration(format!(
            "{} expects true or false, got '{}'",
            key, value
        ))),
    }
}
