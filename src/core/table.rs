use crate::core::ordering::{retain_rendered, sort_branches};
use crate::core::render::{diagnostic, render_rows};
use crate::core::{BadgeTemplate, BranchList, BranchSource, ConfigProvider, MarkupSink};
use crate::utils::error::Result;

/// Fetches the branch listing and appends one badge row per branch to the
/// configured target.
pub struct BadgeTable<B: BranchSource, S: MarkupSink> {
    source: B,
    sink: S,
    endpoint: String,
    target: String,
    badges: Vec<BadgeTemplate>,
}

impl<B: BranchSource, S: MarkupSink> BadgeTable<B, S> {
    pub fn new<C: ConfigProvider>(source: B, sink: S, config: &C) -> Self {
        Self {
            source,
            sink,
            endpoint: config.endpoint().to_string(),
            target: config.target().to_string(),
            badges: config.badges().to_vec(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the number of rows appended.
    pub async fn render(&self, mut branches: BranchList) -> Result<usize> {
        let total = branches.len();
        sort_branches(&mut branches);
        retain_rendered(&mut branches);

        tracing::debug!(
            total,
            excluded = total - branches.len(),
            "Sorted and filtered branches"
        );

        if branches.is_empty() {
            tracing::info!(target_id = %self.target, "No branches to render");
            return Ok(0);
        }

        let markup = render_rows(&branches, &self.badges);
        self.sink.append(&self.target, &markup).await?;

        tracing::info!(
            target_id = %self.target,
            rows = branches.len(),
            "Appended badge rows"
        );
        Ok(branches.len())
    }

    /// Listing failures are appended to the target as a diagnostic and then
    /// returned; sink failures propagate as they are.
    pub async fn run(&self) -> Result<usize> {
        tracing::info!(endpoint = %self.endpoint, "Listing branches");

        match self.source.list_branches(&self.endpoint).await {
            Ok(branches) => {
                tracing::debug!(count = branches.len(), "Branch listing received");
                self.render(branches).await
            }
            Err(e) if e.is_listing_failure() => {
                tracing::warn!(error = %e, "Branch listing failed");
                self.sink.append(&self.target, &diagnostic(&e)).await?;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
