use anyhow::{Context, Result, anyhow};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTool {
    WlCopy,
    Xclip,
    Pbcopy,
    Clip,
}

impl ClipboardTool {
    /// Program and arguments that read the new clipboard contents from stdin.
    pub fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            ClipboardTool::WlCopy => ("wl-copy", &[]),
            ClipboardTool::Xclip => ("xclip", &["-selection", "clipboard"]),
            ClipboardTool::Pbcopy => ("pbcopy", &[]),
            ClipboardTool::Clip => ("clip", &[]),
        }
    }

    pub fn detect() -> Option<Self> {
        if cfg!(target_os = "windows") {
            return Some(ClipboardTool::Clip);
        }
        if cfg!(target_os = "macos") {
            return Some(ClipboardTool::Pbcopy);
        }
        if std::env::var("WAYLAND_DISPLAY").is_ok() && command_exists("wl-copy") {
            return Some(ClipboardTool::WlCopy);
        }
        if std::env::var("DISPLAY").is_ok() && command_exists("xclip") {
            return Some(ClipboardTool::Xclip);
        }
        None
    }
}

fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn copy_with_tool(tool: ClipboardTool, content: &str) -> Result<()> {
    let (cmd, args) = tool.command();

    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn {}", cmd))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to {} stdin", cmd))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", cmd))?;
    if !status.success() {
        return Err(anyhow!("{} failed with status: {}", cmd, status));
    }

    info!("Rendered prompt copied using {}", cmd);
    Ok(())
}

fn copy_with_copypasta(content: &str) -> Result<()> {
    use copypasta::{ClipboardContext, ClipboardProvider};

    let mut ctx =
        ClipboardContext::new().map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
    ctx.set_contents(content.to_owned())
        .map_err(|e| anyhow!("Failed to set clipboard contents: {}", e))?;

    info!("Rendered prompt copied using copypasta");
    Ok(())
}

/// Copies `content` with the platform tool, falling back to copypasta.
#[instrument(skip(content), fields(len = content.len()))]
pub async fn copy_to_clipboard(content: &str) -> Result<()> {
    let content = content.to_owned();
    tokio::task::spawn_blocking(move || {
        let native = match ClipboardTool::detect() {
            Some(tool) => {
                debug!("Detected clipboard tool: {:?}", tool);
                copy_with_tool(tool, &content)
            }
            None => Err(anyhow!("No clipboard tool found (wl-copy, xclip, pbcopy, clip)")),
        };

        native.or_else(|e| {
            warn!("Native clipboard failed: {}, trying fallback", e);
            copy_with_copypasta(&content)
        })
    })
    .await
    .context("Clipboard task panicked")?
}
