//! Append-only audit trail of denials, rewrites and advisory notes.
//!
//! The sink is injected into the hook so tests can capture entries without
//! touching the filesystem. Write failures are swallowed: an audit problem
//! must never change what happens to the command.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context as _;
use chrono::Local;

/// Kind of event recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditKind {
    Denied,
    Rewritten,
    Info,
}

impl AuditKind {
    pub fn label(&self) -> &'static str {
        match self {
            AuditKind::Denied => "DENIED",
            AuditKind::Rewritten => "REWRITTEN",
            AuditKind::Info => "INFO",
        }
    }
}

/// A single audit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub kind: AuditKind,
    pub message: String,
}

impl AuditEntry {
    pub fn denied(reason: &str) -> Self {
        Self {
            kind: AuditKind::Denied,
            message: reason.to_string(),
        }
    }

    pub fn rewritten(reason: &str, replacement: &str) -> Self {
        Self {
            kind: AuditKind::Rewritten,
            message: format!("{reason} -> {replacement}"),
        }
    }

    pub fn info(note: &str) -> Self {
        Self {
            kind: AuditKind::Info,
            message: note.to_string(),
        }
    }

    /// `[<timestamp>] <KIND>: <message>`, without a trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "[{}] {}: {}",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.6f"),
            self.kind.label(),
            self.message
        )
    }
}

/// Destination for audit entries.
pub trait AuditSink: Send + Sync {
    /// Record an entry. Must not panic and must not report failure.
    fn append(&self, entry: &AuditEntry);
}

impl<T: AuditSink + ?Sized> AuditSink for Arc<T> {
    fn append(&self, entry: &AuditEntry) {
        (**self).append(entry)
    }
}

/// Appends one line per entry to a text file, creating parent directories.
#[derive(Debug, Clone)]
pub struct FileAuditSink {
    path: PathBuf,
}

impl FileAuditSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn try_append(&self, entry: &AuditEntry) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create audit directory: {}", parent.display())
            })?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open audit log: {}", self.path.display()))?;
        writeln!(file, "{}", entry.to_line())
            .with_context(|| format!("Failed to write audit log: {}", self.path.display()))?;
        Ok(())
    }
}

impl AuditSink for FileAuditSink {
    fn append(&self, entry: &AuditEntry) {
        if let Err(e) = self.try_append(entry) {
            tracing::debug!("Audit write dropped: {:#}", e);
        }
    }
}

/// Discards every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn append(&self, _entry: &AuditEntry) {}
}

/// Keeps entries in memory. Used by tests and by callers that forward
/// entries somewhere else.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<AuditEntry> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&self, entry: &AuditEntry) {
        match self.entries.lock() {
            Ok(mut guard) => guard.push(entry.clone()),
            Err(poisoned) => poisoned.into_inner().push(entry.clone()),
        }
    }
}
