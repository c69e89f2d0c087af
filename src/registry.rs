use crate::cloud::client::SettingsClient;
use crate::error::AppError;
use crate::models::{App, NewApp};

/// The session user's externally linked apps. The backend is the source of
/// truth; this list mirrors it for the Apps tab.
#[derive(Debug, Default)]
pub struct AppRegistry {
    apps: Vec<App>,
}

impl AppRegistry {
    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    /// Replace the list with the user's apps from the backend.
    pub async fn load(&mut self, client: &SettingsClient, user_id: &str) -> Result<(), AppError> {
        self.apps = client.fetch_apps(user_id).await?;
        tracing::debug!(count = self.apps.len(), "App registry loaded");
        Ok(())
    }

    /// Create an app on the backend, then append the returned record (with
    /// its server-assigned id). Errors propagate to the caller — the UI is
    /// responsible for surfacing them.
    pub async fn add_app(
        &mut self,
        client: &SettingsClient,
        new_app: NewApp,
        user_id: &str,
    ) -> Result<App, AppError> {
        let created = client.insert_app(&new_app, user_id).await?;
        self.apps.push(created.clone());
        Ok(created)
    }
}
