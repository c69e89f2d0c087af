use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AppError;
use crate::models::{PersonaConfig, ToolDefinition, Voice, WebhookField};

/// The full settings snapshot pushed to the backend on save. Upsert
/// semantics keyed by the user id — every save overwrites the remote
/// record wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub id: String,
    pub persona_name: String,
    pub system_prompt: String,
    pub voice: Voice,
    pub template: String,
    pub tools: Vec<ToolDefinition>,
}

/// In-memory configuration owned by the UI root for the lifetime of the
/// session: persona fields, the active tool template, and the tool list.
///
/// All operations are synchronous and field-scoped — persona setters never
/// touch the tool list and tool operations never touch the persona.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    persona: PersonaConfig,
    template: String,
    tools: Vec<ToolDefinition>,
}

impl SettingsStore {
    pub fn new(persona: PersonaConfig, template: String, tools: Vec<ToolDefinition>) -> Self {
        Self {
            persona,
            template,
            tools,
        }
    }

    pub fn persona(&self) -> &PersonaConfig {
        &self.persona
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    // ------------------------------------------------------------------
    // Persona fields
    // ------------------------------------------------------------------

    pub fn set_persona_name(&mut self, name: String) {
        self.persona.persona_name = name;
    }

    pub fn set_system_prompt(&mut self, prompt: String) {
        self.persona.system_prompt = prompt;
    }

    pub fn set_voice(&mut self, voice: Voice) {
        self.persona.voice = voice;
    }

    pub fn set_template(&mut self, template: String) {
        self.template = template;
    }

    // ------------------------------------------------------------------
    // Tool collection
    // ------------------------------------------------------------------

    /// Append a blank tool with a generated unique name and return it.
    pub fn add_tool(&mut self) -> &ToolDefinition {
        let name = self.next_tool_name();
        self.tools.push(ToolDefinition::blank(name));
        self.tools.last().expect("tool was just pushed")
    }

    /// Remove a tool by name. Returns false when no tool matched.
    pub fn remove_tool(&mut self, name: &str) -> bool {
        let before = self.tools.len();
        self.tools.retain(|t| t.name != name);
        self.tools.len() != before
    }

    /// Flip a tool's enabled state. Returns false when no tool matched.
    pub fn toggle_tool(&mut self, name: &str) -> bool {
        match self.tools.iter_mut().find(|t| t.name == name) {
            Some(tool) => {
                tool.is_enabled = !tool.is_enabled;
                true
            }
            None => false,
        }
    }

    /// Replace a tool in place, keyed by its current name.
    ///
    /// Fails with `NotFound` for an unknown name and `Validation` when the
    /// replacement renames the tool onto another existing one — the UI
    /// relies on name uniqueness for every by-name operation.
    pub fn update_tool(&mut self, name: &str, replacement: ToolDefinition) -> Result<(), AppError> {
        let idx = self
            .tools
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Tool {name}")))?;

        if replacement.name != name && self.tools.iter().any(|t| t.name == replacement.name) {
            return Err(AppError::Validation(format!(
                "A tool named {} already exists",
                replacement.name
            )));
        }

        self.tools[idx] = replacement;
        Ok(())
    }

    /// Patch a single webhook URL on a tool. An empty value is stored as
    /// `Some("")`, keeping the tool on the Integrations tab.
    pub fn set_webhook_url(
        &mut self,
        name: &str,
        field: WebhookField,
        value: String,
    ) -> Result<(), AppError> {
        let tool = self
            .tools
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Tool {name}")))?;

        match field {
            WebhookField::Post => tool.post_webhook_url = Some(value),
            WebhookField::GetStatus => tool.get_status_webhook_url = Some(value),
        }
        Ok(())
    }

    /// Full snapshot for the persistence upsert, keyed by user id.
    pub fn snapshot(&self, user_id: &str) -> SettingsRecord {
        SettingsRecord {
            id: user_id.to_string(),
            persona_name: self.persona.persona_name.clone(),
            system_prompt: self.persona.system_prompt.clone(),
            voice: self.persona.voice,
            template: self.template.clone(),
            tools: self.tools.clone(),
        }
    }

    fn next_tool_name(&self) -> String {
        if self.tool("new_function").is_none() {
            return "new_function".to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("new_function_{n}");
            if self.tool(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(name: &str) -> ToolDefinition {
        ToolDefinition::blank(name.to_string())
    }

    fn store_with(names: &[&str]) -> SettingsStore {
        SettingsStore::new(
            PersonaConfig::default(),
            "general".to_string(),
            names.iter().map(|n| tool(n)).collect(),
        )
    }

    #[test]
    fn test_add_tool_generates_unique_names() {
        let mut store = SettingsStore::default();
        assert_eq!(store.add_tool().name, "new_function");
        assert_eq!(store.add_tool().name, "new_function_1");
        assert_eq!(store.add_tool().name, "new_function_2");
        assert_eq!(store.tools().len(), 3);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut store = store_with(&["search_web"]);
        let original = store.tool("search_web").unwrap().is_enabled;
        assert!(store.toggle_tool("search_web"));
        assert!(store.toggle_tool("search_web"));
        assert_eq!(store.tool("search_web").unwrap().is_enabled, original);
    }

    #[test]
    fn test_toggle_unknown_tool_is_noop() {
        let mut store = store_with(&["search_web"]);
        assert!(!store.toggle_tool("missing"));
        assert_eq!(store.tools().len(), 1);
    }

    #[test]
    fn test_update_tool_preserves_position_and_length() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut replacement = tool("b_renamed");
        replacement.description = "updated".to_string();
        store.update_tool("b", replacement).unwrap();

        assert_eq!(store.tools().len(), 3);
        assert_eq!(store.tools()[1].name, "b_renamed");
        assert_eq!(store.tools()[1].description, "updated");
    }

    #[test]
    fn test_update_tool_rejects_duplicate_rename() {
        let mut store = store_with(&["a", "b"]);
        let err = store.update_tool("a", tool("b")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_update_unknown_tool_is_not_found() {
        let mut store = store_with(&["a"]);
        let err = store.update_tool("missing", tool("x")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_persona_setters_never_touch_tools() {
        let mut store = store_with(&["a", "b"]);
        let tools_before = store.tools().to_vec();

        store.set_persona_name("Nova".to_string());
        store.set_system_prompt("Be terse.".to_string());
        store.set_voice(Voice::Kore);

        assert_eq!(store.tools(), tools_before.as_slice());
    }

    #[test]
    fn test_tool_ops_never_touch_persona() {
        let mut store = store_with(&["a"]);
        let persona_before = store.persona().clone();

        store.add_tool();
        store.toggle_tool("a");
        store.remove_tool("a");

        assert_eq!(store.persona().persona_name, persona_before.persona_name);
        assert_eq!(store.persona().system_prompt, persona_before.system_prompt);
        assert_eq!(store.persona().voice, persona_before.voice);
    }

    #[test]
    fn test_webhook_patch_keeps_empty_value_defined() {
        let mut store = store_with(&["a"]);
        store
            .set_webhook_url("a", WebhookField::Post, String::new())
            .unwrap();
        let t = store.tool("a").unwrap();
        assert_eq!(t.post_webhook_url.as_deref(), Some(""));
        assert!(t.has_webhook_surface());
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let mut store = store_with(&["a"]);
        store.set_persona_name("Nova".to_string());
        let json = serde_json::to_value(store.snapshot("user-1")).unwrap();

        assert_eq!(json["id"], "user-1");
        assert_eq!(json["personaName"], "Nova");
        assert_eq!(json["voice"], "Puck");
        assert_eq!(json["tools"][0]["isEnabled"], true);
        assert_eq!(json["tools"][0]["postWebhookUrl"], "");
    }
}
