use crate::config::{DEFAULT_OUTPUT_PATH, DEFAULT_SUCCESS_STATUS, DEFAULT_TARGET, DEFAULT_USER_AGENT};
use crate::core::{BadgeTemplate, ConfigProvider};
use crate::domain::model::default_badges;
use crate::utils::error::{BadgeError, Result};
use crate::utils::validation::{
    validate_badges, validate_path, validate_range, validate_target, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "default_badges")]
    pub badges: Vec<BadgeTemplate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    #[serde(default = "default_success_status")]
    pub success_status: u16,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_target")]
    pub target: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            target: default_target(),
        }
    }
}

fn default_success_status() -> u16 {
    DEFAULT_SUCCESS_STATUS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BadgeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BadgeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BadgeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn success_status(&self) -> u16 {
        self.source.success_status
    }

    fn user_agent(&self) -> &str {
        &self.source.user_agent
    }

    fn target(&self) -> &str {
        &self.output.target
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn badges(&self) -> &[BadgeTemplate] {
        &self.badges
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_range("source.success_status", self.source.success_status, 100, 599)?;
        validate_path("output.path", &self.output.path)?;
        validate_target("output.target", &self.output.target)?;
        validate_badges("badges", &self.badges)
    }
}
