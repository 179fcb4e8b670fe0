use crate::config::{
    DEFAULT_ENDPOINT, DEFAULT_OUTPUT_PATH, DEFAULT_SUCCESS_STATUS, DEFAULT_TARGET,
    DEFAULT_USER_AGENT,
};
use crate::core::{BadgeTemplate, ConfigProvider};
use crate::domain::model::default_badges;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_badges, validate_path, validate_range, validate_target, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "badge-table")]
#[command(about = "Render a CI badge table for every branch of a repository")]
pub struct CliConfig {
    /// Branch listing endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Directory receiving `<target>.html`
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    /// Id of the container the rows are appended to
    #[arg(long, default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Status code the endpoint answers with on success
    #[arg(long, default_value_t = DEFAULT_SUCCESS_STATUS)]
    pub success_status: u16,

    /// User-Agent header sent with the listing request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Load settings from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write rows to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(skip = default_badges())]
    pub badges: Vec<BadgeTemplate>,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn success_status(&self) -> u16 {
        self.success_status
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn badges(&self) -> &[BadgeTemplate] {
        &self.badges
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_path("output_path", &self.output_path)?;
        validate_target("target", &self.target)?;
        validate_range("success_status", self.success_status, 100, 599)?;
        validate_badges("badges", &self.badges)
    }
}
