use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A function-call declaration the assistant can invoke, plus the webhook
/// URLs that connect it to third-party automations.
///
/// `name` is the unique key within the tool collection; every by-name
/// operation on the store relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub is_enabled: bool,
    /// JSON schema describing the tool's arguments.
    pub parameters: serde_json::Value,
    /// POST endpoint invoked with the tool arguments when the tool executes.
    /// `Some("")` still counts as a webhook surface — membership in the
    /// Integrations view is field presence, not non-emptiness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_webhook_url: Option<String>,
    /// Optional GET endpoint polled for long-running task status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_status_webhook_url: Option<String>,
}

impl ToolDefinition {
    /// A blank custom tool, as created by the "Add New Tool" action.
    pub fn blank(name: String) -> Self {
        Self {
            name,
            description: String::new(),
            icon: "construction".to_string(),
            is_enabled: true,
            parameters: serde_json::json!({ "type": "object", "properties": {} }),
            post_webhook_url: Some(String::new()),
            get_status_webhook_url: None,
        }
    }

    /// Whether this tool shows up on the Integrations tab.
    pub fn has_webhook_surface(&self) -> bool {
        self.post_webhook_url.is_some()
    }
}

/// Which of a tool's two webhook URLs a field-level patch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookField {
    Post,
    GetStatus,
}

/// A tool invocation awaiting user confirmation. Exists only between the
/// confirmation request and its resolution.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ToolCall {
    pub name: String,
    #[ts(type = "Record<string, unknown>")]
    pub args: serde_json::Map<String, serde_json::Value>,
}
