/*!
 * Clipboard support for CopyLS
 *
 * Delivers text to the system clipboard by piping it to whichever
 * clipboard command the platform provides.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the clipboard command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard command found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Copy text to the system clipboard using the first candidate that works
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    try_candidates(&candidates(), text)
}

/// Run through candidate commands until one succeeds.
///
/// A command present on PATH can still fail at run time (xsel without an X
/// display, say), so a failure moves on to the next candidate; the last
/// error is reported only when every candidate has failed.
fn try_candidates(candidates: &[(&str, Vec<&str>)], text: &str) -> Result<()> {
    let mut last_error = None;

    for (cmd, args) in candidates {
        if !command_exists(cmd) {
            continue;
        }
        match pipe_to_command(cmd, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error.unwrap_or(ClipboardError::NoClipboardFound))
}

/// Check whether a command is reachable through PATH
pub fn command_exists(command: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|p| p.join(command).exists()))
        .unwrap_or(false)
}

/// Candidate clipboard commands, in order of preference for the platform
fn candidates() -> Vec<(&'static str, Vec<&'static str>)> {
    let mut cmds: Vec<(&'static str, Vec<&'static str>)> = Vec::new();

    // A running tmux session wins regardless of platform.
    if env::var("TMUX").is_ok() {
        cmds.push(("tmux", vec!["load-buffer", "-w", "-"]));
    }

    if cfg!(target_os = "macos") {
        cmds.push(("pbcopy", vec![]));
    } else if cfg!(target_os = "windows") || env::var("WSL_DISTRO_NAME").is_ok() {
        cmds.push(("clip.exe", vec![]));
    } else {
        // Wayland first, then the X11 mechanisms.
        cmds.push(("wl-copy", vec![]));
        cmds.push(("xsel", vec!["-b", "-i"]));
        cmds.push(("xclip", vec!["-selection", "clipboard", "-in"]));
    }

    cmds
}

/// Spawn a clipboard command and feed it the text on stdin
fn pipe_to_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("failed to spawn {}: {}", cmd, e)))?;

    child
        .stdin
        .as_mut()
        .ok_or_else(|| ClipboardError::CommandFailed(format!("failed to open stdin for {}", cmd)))?
        .write_all(text.as_bytes())?;

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}
