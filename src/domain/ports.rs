use crate::domain::model::{BadgeTemplate, BranchList};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait BranchSource: Send + Sync {
    async fn list_branches(&self, url: &str) -> Result<BranchList>;
}

/// An addressable container that only ever grows.
pub trait MarkupSink: Send + Sync {
    fn append(
        &self,
        target: &str,
        markup: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn success_status(&self) -> u16;
    fn user_agent(&self) -> &str;
    fn target(&self) -> &str;
    fn output_path(&self) -> &str;
    fn badges(&self) -> &[BadgeTemplate];
}
