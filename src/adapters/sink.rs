use crate::core::MarkupSink;
use crate::utils::error::Result;
use crate::utils::validation::validate_target;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// Each target id is a file `<base_path>/<id>.html`, opened for append.
/// Ids that would leave `base_path` are refused.
#[derive(Debug, Clone)]
pub struct FileSink {
    base_path: String,
}

impl FileSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn path_for(&self, target: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.html", target))
    }
}

impl MarkupSink for FileSink {
    async fn append(&self, target: &str, markup: &str) -> Result<()> {
        validate_target("target", target)?;
        let full_path = self.path_for(target);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&full_path)
            .await?;
        file.write_all(markup.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!("Appended {} bytes to {}", markup.len(), full_path.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    containers: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contents(&self, target: &str) -> Option<String> {
        let containers = self.containers.lock().await;
        containers.get(target).cloned()
    }
}

impl MarkupSink for MemorySink {
    async fn append(&self, target: &str, markup: &str) -> Result<()> {
        let mut containers = self.containers.lock().await;
        containers.entry(target.to_string()).or_default().push_str(markup);
        Ok(())
    }
}

/// Ignores the target id.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl MarkupSink for StdoutSink {
    async fn append(&self, _target: &str, markup: &str) -> Result<()> {
        write_markup(&mut tokio::io::stdout(), markup).await
    }
}

async fn write_markup<W: AsyncWrite + Unpin>(writer: &mut W, markup: &str) -> Result<()> {
    writer.write_all(markup.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
