//! Security module for command classification and rewriting.
//!
//! This module decides, for a single proposed shell command, whether it may
//! run as given, must be rewritten to move files to the trash instead of
//! deleting them, or must be refused.

mod analyzer;
mod rewriter;
pub mod rules;

pub use analyzer::Classifier;
pub use rewriter::rewrite;
pub use rules::{RuleSet, TRASH_PROGRAM};

/// Terminal outcome of classifying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    AllowRewritten,
    Deny,
}

impl Verdict {
    /// Machine-readable string for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allow => "allow",
            Verdict::AllowRewritten => "allow_rewritten",
            Verdict::Deny => "deny",
        }
    }
}

/// The classifier's answer for one command. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Run the command unchanged. `advisory` is a note for the audit trail only.
    Allow { advisory: Option<String> },
    /// Run `replacement` instead of the original command.
    AllowRewritten { replacement: String, reason: String },
    /// Do not run anything.
    Deny { reason: String },
}

impl Decision {
    pub fn allow() -> Self {
        Decision::Allow { advisory: None }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Decision::Deny {
            reason: reason.into(),
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            Decision::Allow { .. } => Verdict::Allow,
            Decision::AllowRewritten { .. } => Verdict::AllowRewritten,
            Decision::Deny { .. } => Verdict::Deny,
        }
    }

    /// Human-readable reason. Empty for a plain allow.
    pub fn reason(&self) -> &str {
        match self {
            Decision::Allow { .. } => "",
            Decision::AllowRewritten { reason, .. } | Decision::Deny { reason } => reason,
        }
    }

    pub fn replacement(&self) -> Option<&str> {
        match self {
            Decision::AllowRewritten { replacement, .. } => Some(replacement),
            _ => None,
        }
    }

    pub fn advisory(&self) -> Option<&str> {
        match self {
            Decision::Allow { advisory } => advisory.as_deref(),
            _ => None,
        }
    }
}
