//! Built-in pattern tables consumed by the classifier.
//!
//! Every table is an ordered list evaluated first-match-wins. The tables are
//! compiled once into a [`RuleSet`] and never mutated afterwards.

use anyhow::Context as _;
use regex::{Regex, RegexBuilder};

/// Program every redirect rule rewrites to. Also the binary probed on `PATH`.
pub const TRASH_PROGRAM: &str = "trash";

/// Elevation prefix directly followed by a destructive verb.
const ELEVATION_PATTERN: &str = r"^(?:sudo|doas)\s+(?:(?:/usr)?/bin/)?(?:rm|rmdir|shred)\b";

const ELEVATION_REASON: &str = "Blocked: sudo with destructive command. \
     Remove sudo to allow trash redirection.";

/// (pattern, reason). Matched anywhere, case-insensitive.
const BLOCK_PATTERNS: &[(&str, &str)] = &[
    (
        r"shred\s",
        "Blocked: 'shred' performs secure delete and cannot be recovered",
    ),
    (
        r"find\s+.*\s+-delete",
        "Blocked: 'find -delete' - use 'find ... -exec trash {} +' instead",
    ),
];

/// (anchored pattern, canonical program). The pattern consumes at most one
/// trailing whitespace character after the command name.
const REDIRECT_PATTERNS: &[(&str, &str)] = &[
    (r"^(?:(?:/usr)?/bin/)?rm(?:\s|$)", TRASH_PROGRAM),
    (r"^(?:(?:/usr)?/bin/)?rmdir(?:\s|$)", TRASH_PROGRAM),
];

/// Signals that a command line holds more than one shell statement.
const COMPOUND_INDICATORS: &[&str] = &[
    r"[;&|\n\r]", // separators, pipes, background, newlines
    r"\$\(",       // command substitution
    r"`",          // backtick substitution
    r"[()]",       // subshell
    r"\|\|",
    r"&&",
];

/// A removal verb somewhere inside a compound command, bounded by
/// separators or substitution/subshell delimiters.
const DESTRUCTIVE_IN_COMPOUND: &[&str] = &[
    r"(?:^|[\s;&|(`])(?:(?:/usr)?/bin/)?(?:rm|rmdir)(?:$|[\s;&|)`])",
    r"\$\(.*\b(?:rm|rmdir)\b",
    r"`.*\b(?:rm|rmdir)\b",
];

const COMPOUND_REASON: &str = "Blocked: compound command containing destructive operation. \
     Split into separate commands so rm can be safely redirected to trash.";

/// (pattern, note prefix). Never changes a verdict.
const ADVISORY_PATTERNS: &[(&str, &str)] = &[(r"^mv\s", "mv command executed (may overwrite)")];

/// A pattern whose match always refuses the command.
#[derive(Debug, Clone)]
pub struct BlockRule {
    pub pattern: Regex,
    pub reason: String,
}

/// An anchored command-name pattern mapped to its safer substitute.
#[derive(Debug, Clone)]
pub struct RedirectRule {
    pub pattern: Regex,
    pub canonical: String,
}

/// A pattern that attaches an informational note to an allowed command.
#[derive(Debug, Clone)]
pub struct AdvisoryRule {
    pub pattern: Regex,
    pub note: String,
}

/// The complete, immutable set of tables the classifier walks.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub elevation: Regex,
    pub elevation_reason: String,
    pub block: Vec<BlockRule>,
    pub compound_indicators: Vec<Regex>,
    pub destructive_in_compound: Vec<Regex>,
    pub compound_reason: String,
    pub redirect: Vec<RedirectRule>,
    pub advisory: Vec<AdvisoryRule>,
}

impl RuleSet {
    /// Compile the built-in tables.
    pub fn builtin() -> anyhow::Result<Self> {
        let block = BLOCK_PATTERNS
            .iter()
            .map(|(pattern, reason)| -> anyhow::Result<BlockRule> {
                Ok(BlockRule {
                    pattern: compile_case_insensitive(pattern)?,
                    reason: (*reason).to_string(),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let redirect = REDIRECT_PATTERNS
            .iter()
            .map(|(pattern, canonical)| -> anyhow::Result<RedirectRule> {
                Ok(RedirectRule {
                    pattern: compile(pattern)?,
                    canonical: (*canonical).to_string(),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let advisory = ADVISORY_PATTERNS
            .iter()
            .map(|(pattern, note)| -> anyhow::Result<AdvisoryRule> {
                Ok(AdvisoryRule {
                    pattern: compile(pattern)?,
                    note: (*note).to_string(),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            elevation: compile(ELEVATION_PATTERN)?,
            elevation_reason: ELEVATION_REASON.to_string(),
            block,
            compound_indicators: compile_all(COMPOUND_INDICATORS)?,
            destructive_in_compound: compile_all(DESTRUCTIVE_IN_COMPOUND)?,
            compound_reason: COMPOUND_REASON.to_string(),
            redirect,
            advisory,
        })
    }
}

fn compile(pattern: &str) -> anyhow::Result<Regex> {
    Regex::new(pattern).with_context(|| format!("Invalid rule pattern: {pattern}"))
}

fn compile_case_insensitive(pattern: &str) -> anyhow::Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("Invalid rule pattern: {pattern}"))
}

fn compile_all(patterns: &[&str]) -> anyhow::Result<Vec<Regex>> {
    patterns.iter().copied().map(compile).collect()
}
