//! Main entry point for the trash-guard hook.
//!
//! Reads one PreToolUse request from stdin, writes a permission decision to
//! stdout when there is one, and always exits 0 so that a failure here falls
//! back to the host's default behaviour.

use std::io::Read;

use anyhow::{Context as _, Result};
use trash_guard::config::{self, Config};
use trash_guard::hook::{self, HookContext};
use trash_guard::utils;

fn main() {
    // Initialize logging before anything else
    let _log_guard = utils::logger::init_logging(&config::data_dir().join("logs"));

    if let Err(e) = run() {
        tracing::error!("trash-guard failed: {:#}", e);
        eprintln!("trash-guard: {:#}", e);
    }
}

fn run() -> Result<()> {
    let config = Config::load();
    let ctx = HookContext::from_config(&config)?;

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read hook input from stdin")?;

    if let Some(response) = hook::handle(&raw, &ctx) {
        println!("{}", response.to_json()?);
    }
    Ok(())
}
