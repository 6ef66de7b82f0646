//! Clipboard access

use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::PromptError;

/// System clipboard write access
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), PromptError>;
}

/// Records writes in memory; can be set to reject every write
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
    reject: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write
    pub fn rejecting() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    /// Most recent successful write
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().ok().and_then(|w| w.last().cloned())
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| w.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), PromptError> {
        if self.reject {
            return Err(PromptError::Clipboard("write rejected".to_string()));
        }
        let mut writes = self
            .writes
            .lock()
            .map_err(|e| PromptError::Clipboard(e.to_string()))?;
        writes.push(text.to_string());
        Ok(())
    }
}

/// Pipes text into an external copy command (`pbcopy`, `wl-copy`, ...)
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Parse a whitespace-separated command line such as `xclip -selection clipboard`
    pub fn from_command_line(command: &str) -> Option<Self> {
        debug!(%command, "CommandClipboard::from_command_line: called");
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), PromptError> {
        debug!(program = %self.program, len = text.len(), "CommandClipboard::write_text: called");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PromptError::Clipboard(format!("failed to start {}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(PromptError::Clipboard(format!("{} exited with {}", self.program, status)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_clipboard_records_writes() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("first").await.unwrap();
        clipboard.write_text("second").await.unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some("second"));
        assert_eq!(clipboard.write_count(), 2);
    }

    #[tokio::test]
    async fn test_rejecting_clipboard() {
        let clipboard = MemoryClipboard::rejecting();
        assert!(clipboard.write_text("text").await.is_err());
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_command_line_parsing() {
        let clipboard = CommandClipboard::from_command_line("xclip -selection clipboard").unwrap();
        assert_eq!(clipboard.program(), "xclip");
        assert_eq!(clipboard.args, vec!["-selection", "clipboard"]);
        assert!(CommandClipboard::from_command_line("   ").is_none());
    }

    #[tokio::test]
    async fn test_missing_program_fails() {
        let clipboard = CommandClipboard::from_command_line("promptmatrix-no-such-copy-tool").unwrap();
        assert!(matches!(
            clipboard.write_text("text").await,
            Err(PromptError::Clipboard(_))
        ));
    }
}
