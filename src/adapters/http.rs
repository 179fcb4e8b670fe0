use crate::core::{BranchList, BranchSource, ConfigProvider};
use crate::utils::error::{BadgeError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Reads a branch listing with a single `GET`.
pub struct HttpBranchSource {
    client: Client,
    success_status: u16,
    user_agent: String,
}

impl HttpBranchSource {
    pub fn new(success_status: u16, user_agent: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            success_status,
            user_agent: user_agent.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.success_status(), config.user_agent())
    }
}

#[async_trait]
impl BranchSource for HttpBranchSource {
    async fn list_branches(&self, url: &str) -> Result<BranchList> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        if status != self.success_status {
            return Err(BadgeError::ListingFailed { status });
        }

        let body = response.text().await?;
        serde_json::from_str::<BranchList>(&body).map_err(|e| BadgeError::MalformedListing {
            message: e.to_string(),
        })
    }
}
