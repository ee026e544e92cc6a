//! System clipboard access through platform helper programs.
//!
//! - macOS: `pbpaste` / `pbcopy`
//! - Linux: `xclip`, falling back to `xsel`
//! - Windows: PowerShell `Get-Clipboard` / `clip`

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{ClipError, Result};

/// A helper program invocation used to reach the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ClipboardTool {
    const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

#[cfg(target_os = "macos")]
const READ_TOOLS: &[ClipboardTool] = &[ClipboardTool::new("pbpaste", &[])];
#[cfg(target_os = "macos")]
const WRITE_TOOLS: &[ClipboardTool] = &[ClipboardTool::new("pbcopy", &[])];

#[cfg(target_os = "linux")]
const READ_TOOLS: &[ClipboardTool] = &[
    ClipboardTool::new("xclip", &["-selection", "clipboard", "-o"]),
    ClipboardTool::new("xsel", &["--clipboard", "--output"]),
];
#[cfg(target_os = "linux")]
const WRITE_TOOLS: &[ClipboardTool] = &[
    ClipboardTool::new("xclip", &["-selection", "clipboard"]),
    ClipboardTool::new("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const READ_TOOLS: &[ClipboardTool] = &[ClipboardTool::new(
    "powershell",
    &["-NoProfile", "-Command", "Get-Clipboard -Raw"],
)];
#[cfg(target_os = "windows")]
const WRITE_TOOLS: &[ClipboardTool] = &[ClipboardTool::new("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const READ_TOOLS: &[ClipboardTool] = &[];
#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const WRITE_TOOLS: &[ClipboardTool] = &[];

/// Helpers that print the clipboard to stdout, in the order they are tried.
pub fn read_tools() -> &'static [ClipboardTool] {
    READ_TOOLS
}

/// Helpers that replace the clipboard with their stdin, in the order they are tried.
pub fn write_tools() -> &'static [ClipboardTool] {
    WRITE_TOOLS
}

/// Read text from the system clipboard.
pub fn read_clipboard() -> Result<String> {
    let tools = read_tools();
    if tools.is_empty() {
        return Err(ClipError::UnsupportedPlatform);
    }

    let mut failures = Vec::new();
    for tool in tools {
        tracing::debug!("Reading clipboard with {}", tool.program);
        match Command::new(tool.program).args(tool.args).output() {
            Ok(output) if output.status.success() => {
                return Ok(String::from_utf8(output.stdout)?);
            }
            Ok(output) => failures.push(format!("{} exited with {}", tool.program, output.status)),
            Err(e) => failures.push(format!("{}: {}", tool.program, e)),
        }
    }

    Err(ClipError::clipboard(format!(
        "could not read clipboard ({})",
        failures.join("; ")
    )))
}

/// Replace the system clipboard contents with `text`.
pub fn write_clipboard(text: &str) -> Result<()> {
    let tools = write_tools();
    if tools.is_empty() {
        return Err(ClipError::UnsupportedPlatform);
    }

    let mut failures = Vec::new();
    for tool in tools {
        tracing::debug!("Writing clipboard with {}", tool.program);
        match write_with(tool, text) {
            Ok(()) => return Ok(()),
            Err(e) => failures.push(format!("{}: {}", tool.program, e)),
        }
    }

    Err(ClipError::clipboard(format!(
        "could not write clipboard ({})",
        failures.join("; ")
    )))
}

fn write_with(tool: &ClipboardTool, text: &str) -> Result<()> {
    let mut child = Command::new(tool.program)
        .args(tool.args)
        .stdin(Stdio::piped())
        .spawn()?;

    // Dropping stdin closes the pipe so the helper sees EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    // Reap the helper even when the write failed.
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipError::clipboard(format!("exited with {}", status)))
    }
}
