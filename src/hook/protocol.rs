//! Wire types for the PreToolUse hook.

use serde::{Deserialize, Serialize};

pub const HOOK_EVENT_NAME: &str = "PreToolUse";

/// Request read from stdin. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_input: Option<ToolInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub command: Option<String>,
}

impl HookInput {
    /// Command text, or `""` if the request carries none.
    pub fn command(&self) -> &str {
        self.tool_input
            .as_ref()
            .and_then(|t| t.command.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedInput {
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub permission_decision: PermissionDecision,
    pub permission_decision_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_input: Option<UpdatedInput>,
}

/// Payload written to stdout. Writing nothing means "default allow".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResponse {
    pub hook_specific_output: HookSpecificOutput,
}

impl HookResponse {
    pub fn deny(reason: &str) -> Self {
        Self::new(PermissionDecision::Deny, reason, None)
    }

    pub fn allow_with_updated_command(command: &str, reason: &str) -> Self {
        Self::new(
            PermissionDecision::Allow,
            reason,
            Some(UpdatedInput {
                command: command.to_string(),
            }),
        )
    }

    fn new(decision: PermissionDecision, reason: &str, updated_input: Option<UpdatedInput>) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HOOK_EVENT_NAME.to_string(),
                permission_decision: decision,
                permission_decision_reason: reason.to_string(),
                updated_input,
            },
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
