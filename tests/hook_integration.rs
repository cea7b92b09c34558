//! End-to-end tests of the hook pipeline: raw JSON in, response and audit out.

use std::sync::Arc;

use trash_guard::audit::{AuditKind, FileAuditSink, MemoryAuditSink, NoopAuditSink};
use trash_guard::capability::StaticProbe;
use trash_guard::config::{AUDIT_ENV, Config};
use trash_guard::hook::{HookContext, PermissionDecision, handle};
use trash_guard::security::Classifier;

fn context(trash_available: bool, audit: Arc<MemoryAuditSink>) -> HookContext {
    HookContext {
        tool_name: "Bash".to_string(),
        classifier: Classifier::builtin().unwrap(),
        probe: Box::new(StaticProbe(trash_available)),
        audit: Box::new(audit),
    }
}

fn bash(command: &str) -> String {
    serde_json::json!({
        "session_id": "abc",
        "hook_event_name": "PreToolUse",
        "tool_name": "Bash",
        "tool_input": {"command": command, "description": "test"}
    })
    .to_string()
}

fn output_json(raw: &str, ctx: &HookContext) -> Option<serde_json::Value> {
    handle(raw, ctx).map(|r| serde_json::from_str(&r.to_json().unwrap()).unwrap())
}

#[test]
fn test_rewrite_payload_and_audit() {
    let audit = Arc::new(MemoryAuditSink::new());
    let ctx = context(true, audit.clone());

    let value = output_json(&bash("rm -rf ./build"), &ctx).unwrap();
    let out = &value["hookSpecificOutput"];
    assert_eq!(out["hookEventName"], "PreToolUse");
    assert_eq!(out["permissionDecision"], "allow");
    assert_eq!(out["updatedInput"]["command"], "trash -rf ./build");
    assert!(
        out["permissionDecisionReason"]
            .as_str()
            .unwrap()
            .contains("Redirected 'rm' to trash")
    );

    let entries = audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, AuditKind::Rewritten);
    assert!(entries[0].message.ends_with("-> trash -rf ./build"));
}

#[test]
fn test_spec_examples() {
    let ctx = context(true, Arc::new(MemoryAuditSink::new()));

    let denied = [
        "shred -u secret.key",
        "find . -name '*.tmp' -delete",
        "sudo rm file.txt",
        "rm a.txt && rm b.txt",
    ];
    for cmd in denied {
        let response = handle(&bash(cmd), &ctx).unwrap();
        assert_eq!(
            response.hook_specific_output.permission_decision,
            PermissionDecision::Deny,
            "command: {cmd}"
        );
        assert!(!response.hook_specific_output.permission_decision_reason.is_empty());
    }

    assert!(handle(&bash("ls -la && echo done"), &ctx).is_none());
}

#[test]
fn test_missing_trash_fails_closed() {
    let audit = Arc::new(MemoryAuditSink::new());
    let ctx = context(false, audit.clone());

    let value = output_json(&bash("rmdir empty"), &ctx).unwrap();
    assert_eq!(value["hookSpecificOutput"]["permissionDecision"], "deny");
    assert!(value["hookSpecificOutput"].get("updatedInput").is_none());
    assert_eq!(audit.entries()[0].kind, AuditKind::Denied);
}

#[test]
fn test_advisory_does_not_emit_a_decision() {
    let audit = Arc::new(MemoryAuditSink::new());
    let ctx = context(true, audit.clone());

    assert!(handle(&bash("mv draft.md final.md"), &ctx).is_none());
    let entries = audit.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, AuditKind::Info);
}

#[test]
fn test_pass_through_cases_leave_no_audit() {
    let audit = Arc::new(MemoryAuditSink::new());
    let ctx = context(true, audit.clone());

    assert!(handle("{", &ctx).is_none());
    assert!(handle(r#"{"tool_name":"Read","tool_input":{"file_path":"x"}}"#, &ctx).is_none());
    assert!(handle(&bash(""), &ctx).is_none());
    assert!(handle(&bash("cargo test"), &ctx).is_none());
    assert!(audit.entries().is_empty());
}

#[test]
fn test_file_audit_trail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("trash-redirect.log");
    let ctx = HookContext {
        tool_name: "Bash".to_string(),
        classifier: Classifier::builtin().unwrap(),
        probe: Box::new(StaticProbe(true)),
        audit: Box::new(FileAuditSink::new(&path)),
    };

    handle(&bash("rm notes.txt"), &ctx).unwrap();
    handle(&bash("shred -u notes.txt"), &ctx).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("] REWRITTEN: "));
    assert!(lines[1].contains("] DENIED: Blocked: 'shred'"));
}

#[test]
fn test_broken_audit_does_not_change_decision() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = HookContext {
        tool_name: "Bash".to_string(),
        classifier: Classifier::builtin().unwrap(),
        probe: Box::new(StaticProbe(true)),
        // The temp dir itself is not a writable file.
        audit: Box::new(FileAuditSink::new(dir.path())),
    };

    let response = handle(&bash("rm x"), &ctx).unwrap();
    assert_eq!(
        response.hook_specific_output.updated_input.unwrap().command,
        "trash x"
    );
}

#[test]
fn test_noop_audit() {
    let ctx = HookContext {
        tool_name: "Bash".to_string(),
        classifier: Classifier::builtin().unwrap(),
        probe: Box::new(StaticProbe(true)),
        audit: Box::new(NoopAuditSink),
    };
    assert!(handle(&bash("sudo rmdir x"), &ctx).is_some());
}

#[test]
fn test_broken_config_still_classifies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ tool_name: Bash").unwrap();

    let config = Config::load_from(&path, |key| (key == AUDIT_ENV).then(|| "0".to_string()));
    let ctx = HookContext::from_config(&config).unwrap();

    // Rewritten or denied depending on whether trash is installed, never silent.
    let response = handle(&bash("rm -rf ./build"), &ctx).unwrap();
    let out = response.hook_specific_output;
    match out.permission_decision {
        PermissionDecision::Allow => {
            assert_eq!(out.updated_input.unwrap().command, "trash -rf ./build")
        }
        PermissionDecision::Deny => assert!(out.permission_decision_reason.contains("trash")),
    }
}
