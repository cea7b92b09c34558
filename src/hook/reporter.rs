//! Turns a classifier [`Decision`] into the hook's response and audit trail.

use crate::audit::{AuditEntry, AuditSink};
use crate::security::Decision;

use super::protocol::HookResponse;

/// Record `decision` and build the payload the host should receive.
///
/// Returns `None` for a plain allow: the host treats silence as "run the
/// original command".
///
/// # Examples
/// ```
/// use trash_guard::audit::NoopAuditSink;
/// use trash_guard::hook::report;
/// use trash_guard::security::Decision;
///
/// assert!(report(&Decision::allow(), &NoopAuditSink).is_none());
/// assert!(report(&Decision::deny("Blocked"), &NoopAuditSink).is_some());
/// ```
pub fn report(decision: &Decision, audit: &dyn AuditSink) -> Option<HookResponse> {
    match decision {
        Decision::Deny { reason } => {
            tracing::info!("Denied: {}", reason);
            audit.append(&AuditEntry::denied(reason));
            Some(HookResponse::deny(reason))
        }
        Decision::AllowRewritten {
            replacement,
            reason,
        } => {
            tracing::info!("Rewritten to '{}': {}", replacement, reason);
            audit.append(&AuditEntry::rewritten(reason, replacement));
            Some(HookResponse::allow_with_updated_command(replacement, reason))
        }
        Decision::Allow { advisory } => {
            if let Some(note) = advisory {
                tracing::debug!("Advisory: {}", note);
                audit.append(&AuditEntry::info(note));
            }
            None
        }
    }
}
