use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::identity::Capabilities;
use crate::models::ToolDefinition;
use crate::store::SettingsStore;

/// Tool names hidden from the Tools tab unless the session has the
/// admin-tools capability.
pub const ADMIN_ONLY_TOOLS: &[&str] = &["write_code_snippet", "generate_video"];

/// Remote content embedded in the Apps tab's sandboxed iframe. Opaque to
/// this crate; the renderer owns the sandboxing.
pub const APPS_EMBED_URL: &str = "https://apps.ariavoice.app/index.html";

/// The settings panel's tabs. Mutually exclusive, no transition guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    Persona,
    Tools,
    Integrations,
    Apps,
}

/// Settings panel state: which tab is active, whether the panel is open,
/// and whether a save is in flight (which suppresses duplicate saves).
#[derive(Debug, Default)]
pub struct SettingsPanel {
    pub is_open: bool,
    pub active_tab: SettingsTab,
    pub is_saving: bool,
}

impl SettingsPanel {
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.active_tab = tab;
    }
}

/// Tools shown on the Tools tab: everyone sees the full list except the
/// admin-only names, which require the capability.
pub fn displayed_tools<'a>(
    store: &'a SettingsStore,
    caps: &Capabilities,
) -> Vec<&'a ToolDefinition> {
    store
        .tools()
        .iter()
        .filter(|t| caps.can_view_admin_tools || !ADMIN_ONLY_TOOLS.contains(&t.name.as_str()))
        .collect()
}

/// Tools shown on the Integrations tab: those with a webhook surface.
/// Membership is field presence — an empty POST URL still qualifies.
pub fn webhook_tools(store: &SettingsStore) -> Vec<&ToolDefinition> {
    store
        .tools()
        .iter()
        .filter(|t| t.has_webhook_surface())
        .collect()
}
