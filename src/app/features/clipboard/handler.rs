use crate::app::{action::Action, command::Command};
use crate::domain::clipboard::ClipboardFacade;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Executes reducer commands on tokio tasks and reports results as actions.
pub struct CommandRuntime {
    clipboard: Arc<dyn ClipboardFacade>,
    tx: mpsc::Sender<Action>,
    copied_reset: Option<JoinHandle<()>>,
}

impl CommandRuntime {
    pub fn new(clipboard: Arc<dyn ClipboardFacade>, tx: mpsc::Sender<Action>) -> Self {
        Self {
            clipboard,
            tx,
            copied_reset: None,
        }
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::CopyToClipboard { id, text } => {
                let clipboard = self.clipboard.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    match clipboard.write_text(&text).await {
                        Ok(()) => {
                            tracing::debug!(%id, backend = clipboard.backend_name(), "copied");
                            let _ = tx.send(Action::CopySucceeded(id, text)).await;
                        }
                        Err(e) => {
                            tracing::error!(
                                %id,
                                backend = clipboard.backend_name(),
                                "clipboard write failed: {e:#}"
                            );
                        }
                    }
                });
            }
            Command::ScheduleCopiedReset {
                id,
                generation,
                after,
            } => {
                if let Some(pending) = self.copied_reset.take() {
                    pending.abort();
                }
                let deadline = tokio::time::Instant::now() + after;
                let tx = self.tx.clone();
                self.copied_reset = Some(tokio::spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    let _ = tx.send(Action::CopyExpired(id, generation)).await;
                }));
            }
        }
    }
}

impl Drop for CommandRuntime {
    fn drop(&mut self) {
        if let Some(pending) = self.copied_reset.take() {
            pending.abort();
        }
    }
}
