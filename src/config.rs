//! Hook configuration.
//!
//! Defaults, overlaid by `~/.trash-guard/config.json` when it exists, then by
//! environment variables:
//! - `TRASH_GUARD_AUDIT=0|false|off` disables the audit trail
//! - `TRASH_GUARD_AUDIT_LOG=<path>` moves it

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

pub const AUDIT_ENV: &str = "TRASH_GUARD_AUDIT";
pub const AUDIT_LOG_ENV: &str = "TRASH_GUARD_AUDIT_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the shell-execution tool whose commands are classified.
    pub tool_name: String,
    pub audit_enabled: bool,
    pub audit_log: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool_name: "Bash".to_string(),
            audit_enabled: true,
            audit_log: home_dir().join(".claude").join("trash-redirect.log"),
        }
    }
}

impl Config {
    /// Load from the default location and the process environment.
    pub fn load() -> Self {
        Self::load_from(&default_config_path(), |key| std::env::var(key).ok())
    }

    /// Load `path`, then apply environment overrides.
    ///
    /// An unreadable or invalid file is logged and replaced by the defaults,
    /// so a broken config never switches the guard off.
    pub fn load_from(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match Self::load_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {:#}", e);
                Self::default()
            }
        };
        config.apply_env(lookup);
        config
    }

    /// Read a JSON config file. A missing file yields the defaults.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config JSON at {}", path.display()))?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(AUDIT_ENV) {
            self.audit_enabled = !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }
        if let Some(path) = lookup(AUDIT_LOG_ENV).filter(|p| !p.trim().is_empty()) {
            self.audit_log = PathBuf::from(path);
        }
    }
}

pub fn default_config_path() -> PathBuf {
    data_dir().join("config.json")
}

/// `~/.trash-guard`, home of the config file and diagnostic logs.
pub fn data_dir() -> PathBuf {
    home_dir().join(".trash-guard")
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tool_name, "Bash");
        assert!(config.audit_enabled);
        assert!(config.audit_log.ends_with(".claude/trash-redirect.log"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_file(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"tool_name": "Shell", "audit_enabled": false}"#).unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.tool_name, "Shell");
        assert!(!config.audit_enabled);
        assert_eq!(config.audit_log, Config::default().audit_log);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config JSON"));
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"tool_name": "Bash",,}"#).unwrap();

        let config = Config::load_from(&path, env(&[(AUDIT_ENV, "off")]));
        assert_eq!(config.tool_name, "Bash");
        assert!(!config.audit_enabled);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(env(&[(AUDIT_ENV, "off"), (AUDIT_LOG_ENV, "/tmp/audit.log")]));
        assert!(!config.audit_enabled);
        assert_eq!(config.audit_log, PathBuf::from("/tmp/audit.log"));

        config.apply_env(env(&[(AUDIT_ENV, "1")]));
        assert!(config.audit_enabled);
    }

    #[test]
    fn test_blank_log_override_is_ignored() {
        let mut config = Config::default();
        config.apply_env(env(&[(AUDIT_LOG_ENV, "  ")]));
        assert_eq!(config.audit_log, Config::default().audit_log);
    }
}
