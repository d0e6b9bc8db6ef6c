use crate::domain::clipboard::ClipboardFacade;
use anyhow::Result;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cli_clipboard::{ClipboardContext, ClipboardProvider};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
    #[error("clipboard task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// Native clipboard of the host (X11, Wayland, macOS, Windows).
    #[default]
    System,
    /// OSC 52 escape sequence written to the terminal.
    Osc52,
}

#[must_use]
pub fn from_backend(backend: ClipboardBackend) -> Arc<dyn ClipboardFacade> {
    match backend {
        ClipboardBackend::System => Arc::new(SystemClipboard),
        ClipboardBackend::Osc52 => Arc::new(Osc52Clipboard::stdout()),
    }
}

pub struct SystemClipboard;

#[async_trait]
impl ClipboardFacade for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_string();
        // cli-clipboard talks to the display server synchronously
        let result = tokio::task::spawn_blocking(move || -> Result<(), ClipboardError> {
            let mut ctx =
                ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            ctx.set_contents(text)
                .map_err(|e| ClipboardError::Write(e.to_string()))
        })
        .await
        .map_err(ClipboardError::from)?;
        result?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "system"
    }
}

pub struct Osc52Clipboard<W> {
    writer: Mutex<W>,
    tmux_passthrough: bool,
}

impl Osc52Clipboard<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(std::io::stdout()),
            tmux_passthrough: std::env::var_os("TMUX").is_some(),
        }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W, tmux_passthrough: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            tmux_passthrough,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_sequence(&self, text: &str) -> Result<(), ClipboardError> {
        let seq = osc52_sequence(text, self.tmux_passthrough);
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ClipboardError::Write("terminal writer poisoned".to_string()))?;
        writer.write_all(seq.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl<W: Write + Send + 'static> ClipboardFacade for Osc52Clipboard<W> {
    async fn write_text(&self, text: &str) -> Result<()> {
        self.write_sequence(text)?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "osc52"
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`, wrapped in a tmux DCS passthrough when asked.
#[must_use]
pub fn osc52_sequence(text: &str, tmux_passthrough: bool) -> String {
    let seq = format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()));
    if tmux_passthrough {
        format!("\x1bPtmux;{}\x1b\\", seq.replace('\x1b', "\x1b\x1b"))
    } else {
        seq
    }
}
