pub mod cloud;
pub mod error;
pub mod identity;
pub mod logging;
pub mod models;
pub mod notifications;
pub mod registry;
pub mod store;
pub mod ui;
mod validation;

use cloud::client::SettingsClient;
use error::AppError;
use identity::{AuthUser, Capabilities};
use models::{ToolCall, Voice, WebhookField};
use notifications::Notifier;
use registry::AppRegistry;
use store::SettingsStore;
use ui::confirm::ToolConfirmation;
use ui::modals::{AddAppForm, ToolEditor};
use ui::panel::SettingsPanel;

/// Application state owned by the UI root. Views read it by reference and
/// mutate it only through the operations below; the async operations
/// (`save_settings`, `submit_new_app`) are the only suspension points.
pub struct AppState {
    pub store: SettingsStore,
    pub panel: SettingsPanel,
    pub registry: AppRegistry,
    pub confirmation: ToolConfirmation,
    pub notifier: Notifier,
    pub tool_editor: Option<ToolEditor>,
    pub add_app_form: Option<AddAppForm>,
    session: Option<AuthUser>,
    capabilities: Capabilities,
    /// Whether the realtime voice link is up. Settings are read-only while
    /// connected.
    connected: bool,
    client: SettingsClient,
}

impl AppState {
    pub fn new(client: SettingsClient) -> Self {
        Self {
            store: SettingsStore::default(),
            panel: SettingsPanel::default(),
            registry: AppRegistry::default(),
            confirmation: ToolConfirmation::default(),
            notifier: Notifier::default(),
            tool_editor: None,
            add_app_form: None,
            session: None,
            capabilities: Capabilities::default(),
            connected: false,
            client,
        }
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Record the authenticated user and compute view capabilities once
    /// from the identity claim.
    pub fn sign_in(&mut self, user: AuthUser) {
        self.capabilities = Capabilities::for_user(&user);
        tracing::info!(email = %user.email, "Session started");
        self.session = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.capabilities = Capabilities::default();
    }

    pub fn session(&self) -> Option<&AuthUser> {
        self.session.as_ref()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    fn ensure_editable(&self) -> Result<(), AppError> {
        if self.connected {
            return Err(AppError::Validation(
                "Settings are read-only while the voice session is connected".into(),
            ));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Persona fields
    // ------------------------------------------------------------------

    pub fn set_persona_name(&mut self, name: String) -> Result<(), AppError> {
        self.ensure_editable()?;
        self.store.set_persona_name(name);
        Ok(())
    }

    pub fn set_system_prompt(&mut self, prompt: String) -> Result<(), AppError> {
        self.ensure_editable()?;
        self.store.set_system_prompt(prompt);
        Ok(())
    }

    pub fn set_voice(&mut self, voice: Voice) -> Result<(), AppError> {
        self.ensure_editable()?;
        self.store.set_voice(voice);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Tool operations
    // ------------------------------------------------------------------

    /// Add a blank tool and return its generated name.
    pub fn add_tool(&mut self) -> Result<String, AppError> {
        self.ensure_editable()?;
        Ok(self.store.add_tool().name.clone())
    }

    pub fn remove_tool(&mut self, name: &str) -> Result<bool, AppError> {
        self.ensure_editable()?;
        Ok(self.store.remove_tool(name))
    }

    pub fn toggle_tool(&mut self, name: &str) -> Result<bool, AppError> {
        self.ensure_editable()?;
        Ok(self.store.toggle_tool(name))
    }

    pub fn set_webhook_url(
        &mut self,
        name: &str,
        field: WebhookField,
        value: String,
    ) -> Result<(), AppError> {
        self.ensure_editable()?;
        self.store.set_webhook_url(name, field, value)
    }

    // ------------------------------------------------------------------
    // View projections
    // ------------------------------------------------------------------

    pub fn displayed_tools(&self) -> Vec<&models::ToolDefinition> {
        ui::panel::displayed_tools(&self.store, &self.capabilities)
    }

    pub fn webhook_tools(&self) -> Vec<&models::ToolDefinition> {
        ui::panel::webhook_tools(&self.store)
    }

    // ------------------------------------------------------------------
    // Modals
    // ------------------------------------------------------------------

    pub fn open_tool_editor(&mut self, name: &str) -> Result<(), AppError> {
        let tool = self
            .store
            .tool(name)
            .ok_or_else(|| AppError::NotFound(format!("Tool {name}")))?;
        self.tool_editor = Some(ToolEditor::open(tool));
        Ok(())
    }

    /// Save the open tool editor's draft back into the store and close it.
    pub fn save_tool_editor(&mut self) -> Result<(), AppError> {
        let Some(editor) = self.tool_editor.take() else {
            return Ok(());
        };
        editor.save(&mut self.store)
    }

    pub fn close_tool_editor(&mut self) {
        self.tool_editor = None;
    }

    pub fn open_add_app(&mut self) {
        self.add_app_form = Some(AddAppForm::default());
    }

    pub fn close_add_app(&mut self) {
        self.add_app_form = None;
    }

    // ------------------------------------------------------------------
    // Tool confirmation
    // ------------------------------------------------------------------

    /// Ask the user to confirm a tool call; the receiver resolves exactly
    /// once with the outcome.
    pub fn request_tool_confirmation(
        &mut self,
        call: ToolCall,
    ) -> tokio::sync::oneshot::Receiver<bool> {
        self.confirmation.request(call)
    }

    pub fn confirm_pending_tool(&mut self) -> bool {
        self.confirmation.confirm()
    }

    pub fn cancel_pending_tool(&mut self) -> bool {
        self.confirmation.cancel()
    }

    // ------------------------------------------------------------------
    // Async operations
    // ------------------------------------------------------------------

    /// Push the full settings snapshot to the backend.
    ///
    /// Requires a signed-in user; rejected before any network call without
    /// one. While a save is in flight further saves are suppressed. Local
    /// state is never rolled back on remote failure.
    pub async fn save_settings(&mut self) -> Result<(), AppError> {
        if self.panel.is_saving {
            tracing::debug!("Save already in flight, ignoring");
            return Ok(());
        }

        let Some(user) = &self.session else {
            self.notifier.error("You must be logged in to save settings.");
            return Err(AppError::Auth("No signed-in user".into()));
        };

        let record = self.store.snapshot(&user.id);
        self.panel.is_saving = true;
        let result = self.client.upsert_user_settings(&record).await;
        self.panel.is_saving = false;

        match result {
            Ok(()) => {
                self.notifier.success("Settings saved successfully!");
                Ok(())
            }
            Err(e) => {
                self.notifier.error(format!("Failed to save settings: {e}"));
                Err(e)
            }
        }
    }

    /// Submit the open add-app form. On success the created app (with its
    /// server-assigned id) is appended to the registry and the modal
    /// closes; on failure the error is surfaced and the modal stays open.
    pub async fn submit_new_app(&mut self) -> Result<(), AppError> {
        let Some(user_id) = self.session.as_ref().map(|u| u.id.clone()) else {
            self.notifier.error("You must be logged in to add an app.");
            return Err(AppError::Auth("No signed-in user".into()));
        };

        let new_app = {
            let Some(form) = self.add_app_form.as_mut() else {
                return Ok(());
            };
            if form.is_saving {
                return Ok(());
            }
            match form.validate() {
                Ok(app) => {
                    form.is_saving = true;
                    app
                }
                Err(e) => {
                    self.notifier.error(e.to_string());
                    return Err(e);
                }
            }
        };

        let result = self.registry.add_app(&self.client, new_app, &user_id).await;

        match result {
            Ok(app) => {
                self.add_app_form = None;
                self.notifier.success(format!("{} added.", app.name));
                Ok(())
            }
            Err(e) => {
                if let Some(form) = self.add_app_form.as_mut() {
                    form.is_saving = false;
                }
                self.notifier.error(format!("Failed to add app: {e}"));
                Err(e)
            }
        }
    }

    /// Load the session user's app registry from the backend.
    pub async fn load_apps(&mut self) -> Result<(), AppError> {
        let Some(user_id) = self.session.as_ref().map(|u| u.id.clone()) else {
            return Err(AppError::Auth("No signed-in user".into()));
        };
        self.registry.load(&self.client, &user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud::config::BackendConfig;
    use notifications::Severity;

    // Nothing listens here; a test that reaches the network fails loudly
    // instead of hanging.
    fn test_state() -> AppState {
        AppState::new(SettingsClient::new(BackendConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            anon_key: "test-key".to_string(),
        }))
    }

    fn test_user() -> AuthUser {
        AuthUser {
            id: "user-1".to_string(),
            email: "someone@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_without_user_is_rejected_before_network() {
        let mut state = test_state();
        let err = state.save_settings().await.unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));

        let notices = state.notifier.drain();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Error);
        assert!(!state.panel.is_saving);
    }

    #[tokio::test]
    async fn test_save_in_flight_suppresses_duplicates() {
        let mut state = test_state();
        state.sign_in(test_user());
        state.panel.is_saving = true;

        // Early return, no network attempt, no notice.
        assert!(state.save_settings().await.is_ok());
        assert!(state.notifier.pending().is_empty());
    }

    #[tokio::test]
    async fn test_submit_new_app_keeps_modal_open_on_invalid_form() {
        let mut state = test_state();
        state.sign_in(test_user());
        state.open_add_app();

        let err = state.submit_new_app().await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(state.add_app_form.is_some());
        assert_eq!(state.notifier.pending().len(), 1);
    }

    #[test]
    fn test_persona_edits_rejected_while_connected() {
        let mut state = test_state();
        let name_before = state.store.persona().persona_name.clone();

        state.set_connected(true);
        assert!(state.set_persona_name("Nova".to_string()).is_err());
        assert_eq!(state.store.persona().persona_name, name_before);

        state.set_connected(false);
        assert!(state.set_persona_name("Nova".to_string()).is_ok());
        assert_eq!(state.store.persona().persona_name, "Nova");
    }

    #[test]
    fn test_capabilities_computed_once_at_sign_in() {
        let mut state = test_state();
        assert!(!state.capabilities().can_view_admin_tools);

        state.sign_in(AuthUser {
            id: "u-1".to_string(),
            email: "ops@ariavoice.app".to_string(),
        });
        assert!(state.capabilities().can_view_admin_tools);

        state.sign_out();
        assert!(!state.capabilities().can_view_admin_tools);
    }

    #[test]
    fn test_tool_editor_round_trip_through_state() {
        let mut state = test_state();
        state.add_tool().unwrap();
        state.open_tool_editor("new_function").unwrap();

        let editor = state.tool_editor.as_mut().unwrap();
        editor.draft.description = "edited".to_string();
        state.save_tool_editor().unwrap();

        assert!(state.tool_editor.is_none());
        assert_eq!(state.store.tool("new_function").unwrap().description, "edited");
    }
}
