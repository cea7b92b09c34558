//! Staged command classifier.
//!
//! Walks the [`RuleSet`] tables in a fixed order and stops at the first stage
//! that reaches a verdict.

use super::rewriter::{original_name, rewrite};
use super::rules::RuleSet;
use super::Decision;

/// Maps a command string to a [`Decision`] using an immutable [`RuleSet`].
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleSet,
}

impl Classifier {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Build a classifier over the built-in rule tables.
    pub fn builtin() -> anyhow::Result<Self> {
        Ok(Self::new(RuleSet::builtin()?))
    }

    /// Classify a command.
    ///
    /// # Rules
    /// - Deny: elevation prefix followed by a removal verb
    /// - Deny: any block rule matching anywhere (`shred`, `find -delete`)
    /// - Deny: compound command (`;`, `&`, `|`, newlines, `$(`, backticks, subshells)
    ///   holding a removal verb
    /// - Allow: any other compound command
    /// - Rewrite: leading `rm`/`rmdir` becomes `trash`, or Deny if trash is unavailable
    /// - Default: Allow, with an advisory note for overwriting renames
    pub fn classify(&self, command: &str, trash_available: bool) -> Decision {
        let cmd = command.trim();
        if cmd.is_empty() {
            return Decision::allow();
        }

        if self.rules.elevation.is_match(cmd) {
            return Decision::deny(&self.rules.elevation_reason);
        }

        if let Some(rule) = self.rules.block.iter().find(|r| r.pattern.is_match(cmd)) {
            return Decision::deny(&rule.reason);
        }

        // A compound command never reaches the redirect stage: the rewriter only
        // touches the first token and would leave embedded removals untouched.
        if self.is_compound(cmd) {
            if self.has_destructive_verb(cmd) {
                return Decision::deny(&self.rules.compound_reason);
            }
            return Decision::allow();
        }

        for rule in &self.rules.redirect {
            let Some(m) = rule.pattern.find(cmd) else {
                continue;
            };

            if !trash_available {
                return Decision::deny(format!(
                    "Cannot redirect to trash: '{}' command not found. \
                     Install with: brew install macos-trash",
                    rule.canonical
                ));
            }

            let original = original_name(cmd, m.end());
            return Decision::AllowRewritten {
                replacement: rewrite(cmd, m.end(), &rule.canonical),
                reason: format!(
                    "Redirected '{}' to {} (recoverable via Finder)",
                    original, rule.canonical
                ),
            };
        }

        let advisory = self
            .rules
            .advisory
            .iter()
            .find(|r| r.pattern.is_match(cmd))
            .map(|r| format!("{}: {}", r.note, cmd));

        Decision::Allow { advisory }
    }

    fn is_compound(&self, cmd: &str) -> bool {
        self.rules.compound_indicators.iter().any(|p| p.is_match(cmd))
    }

    fn has_destructive_verb(&self, cmd: &str) -> bool {
        self.rules
            .destructive_in_compound
            .iter()
            .any(|p| p.is_match(cmd))
    }
}
