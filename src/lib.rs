//! trash-guard - a PreToolUse hook that keeps shell deletions recoverable
//!
//! This library provides:
//! - Command classification: allow, rewrite `rm`/`rmdir` to `trash`, or deny
//! - Hook plumbing: request parsing, response payloads, decision reporting
//! - An injectable audit trail and trash-availability probe
//!
//! # Example
//!
//! ```
//! use trash_guard::security::{Classifier, Verdict};
//!
//! let classifier = Classifier::builtin().unwrap();
//!
//! let decision = classifier.classify("rm -rf ./build", true);
//! assert_eq!(decision.verdict(), Verdict::AllowRewritten);
//! assert_eq!(decision.replacement(), Some("trash -rf ./build"));
//!
//! let decision = classifier.classify("shred -u secret.key", true);
//! assert_eq!(decision.verdict(), Verdict::Deny);
//! ```

pub mod audit;
pub mod capability;
pub mod config;
pub mod hook;
pub mod security;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use hook::{HookContext, HookResponse, handle};
pub use security::{Classifier, Decision, Verdict};
