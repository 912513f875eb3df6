//! Best-effort copy of the shareable link to the system clipboard.
//!
//! There is no clipboard API in the standard library, so
//! [`SystemClipboard`] pipes the text into the first clipboard tool found
//! on the platform. Copying is fire-and-forget: [`copy_best_effort`] logs a
//! failure at debug level and moves on.

use std::{
    cell::RefCell,
    io::{self, Write},
    process::{Child, Command, ExitStatus, Stdio},
    rc::Rc,
};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool available")]
    NoTool,

    #[error("clipboard tool '{tool}' failed to run: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("clipboard tool '{tool}' exited with {status}")]
    Failed {
        tool: &'static str,
        status: ExitStatus,
    },
}

pub trait Clipboard {
    fn copy_text(
        &mut self,
        text: &str,
    ) -> Result<(), ClipboardError>;
}

/// Candidate tools, in the order they are tried.
#[cfg(target_os = "macos")]
const TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const TOOLS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Clipboard backed by the platform's command-line clipboard tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn pipe_into(
        tool: &'static str,
        args: &[&str],
        text: &str,
    ) -> Result<(), ClipboardError> {
        let mut child = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn { tool, source })?;
        let status = feed(tool, &mut child, text)?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Failed { tool, status })
        }
    }
}

/// Writes `text` to the child's stdin and reaps it. The child is waited on
/// even when the write fails; a failed write kills it first.
fn feed(
    tool: &'static str,
    child: &mut Child,
    text: &str,
) -> Result<ExitStatus, ClipboardError> {
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    if written.is_err() {
        let _ = child.kill();
    }
    let status = child.wait();
    written.map_err(|source| ClipboardError::Spawn { tool, source })?;
    status.map_err(|source| ClipboardError::Spawn { tool, source })
}

impl Clipboard for SystemClipboard {
    fn copy_text(
        &mut self,
        text: &str,
    ) -> Result<(), ClipboardError> {
        let mut last_error = ClipboardError::NoTool;
        for &(tool, args) in TOOLS {
            match Self::pipe_into(tool, args, text) {
                Ok(()) => return Ok(()),
                // Tool not installed; try the next one.
                Err(ClipboardError::Spawn { source, .. })
                    if source.kind() == io::ErrorKind::NotFound => {}
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }
}

/// In-process clipboard that remembers everything copied to it. Clones
/// share the same history.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    copied: Rc<RefCell<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<String> {
        self.copied.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.copied.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.copied.borrow().is_empty()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_text(
        &mut self,
        text: &str,
    ) -> Result<(), ClipboardError> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Copies `text`, logging any failure at debug level. Returns whether the
/// copy went through.
pub fn copy_best_effort(
    clipboard: &mut dyn Clipboard,
    text: &str,
) -> bool {
    match clipboard.copy_text(text) {
        Ok(()) => {
            debug!(chars = text.len(), "link copied");
            true
        }
        Err(error) => {
            debug!(%error, "clipboard copy failed");
            false
        }
    }
}
