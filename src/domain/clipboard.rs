use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardFacade: Send + Sync {
    // Replaces the host clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}
