//! PreToolUse hook driver.
//!
//! Parses the host's request, classifies shell commands, and reports the
//! decision. Nothing here touches stdin or stdout; `main` does the I/O.

mod protocol;
mod reporter;

pub use protocol::{
    HookInput, HookResponse, HookSpecificOutput, PermissionDecision, ToolInput, UpdatedInput,
    HOOK_EVENT_NAME,
};
pub use reporter::report;

use crate::audit::{AuditSink, FileAuditSink, NoopAuditSink};
use crate::capability::{PathProbe, TrashProbe};
use crate::config::Config;
use crate::security::Classifier;

/// Everything a request needs, built once per process.
pub struct HookContext {
    pub tool_name: String,
    pub classifier: Classifier,
    pub probe: Box<dyn TrashProbe>,
    pub audit: Box<dyn AuditSink>,
}

impl HookContext {
    /// Wire the built-in rules, `PATH` probing and the configured audit sink.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let audit: Box<dyn AuditSink> = if config.audit_enabled {
            Box::new(FileAuditSink::new(&config.audit_log))
        } else {
            Box::new(NoopAuditSink)
        };

        Ok(Self {
            tool_name: config.tool_name.clone(),
            classifier: Classifier::builtin()?,
            probe: Box::new(PathProbe::default()),
            audit,
        })
    }
}

/// Handle one raw hook request.
///
/// Returns `None` when there is nothing to say: malformed input, another
/// tool, an empty command, or a plain allow.
pub fn handle(raw: &str, ctx: &HookContext) -> Option<HookResponse> {
    let input: HookInput = match serde_json::from_str(raw) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!("Ignoring malformed hook input: {}", e);
            return None;
        }
    };

    if input.tool_name.as_deref() != Some(ctx.tool_name.as_str()) {
        tracing::debug!("Passing through tool {:?}", input.tool_name);
        return None;
    }

    let command = input.command().trim();
    if command.is_empty() {
        return None;
    }

    // Probed once per request and held fixed for the whole classification.
    let trash_available = ctx.probe.is_available();
    let decision = ctx.classifier.classify(command, trash_available);
    tracing::debug!(
        "Classified '{}' as {} (trash available: {})",
        command,
        decision.verdict().as_str(),
        trash_available
    );

    report(&decision, ctx.audit.as_ref())
}
