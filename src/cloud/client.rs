use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cloud::config::BackendConfig;
use crate::error::AppError;
use crate::models::{App, NewApp};
use crate::store::SettingsRecord;

/// Convert any displayable error into `AppError::Persistence`.
fn persist_err(e: impl std::fmt::Display) -> AppError {
    AppError::Persistence(e.to_string())
}

#[derive(Serialize)]
struct NewAppRow<'a> {
    user_id: &'a str,
    name: &'a str,
    description: &'a str,
    logo_url: &'a str,
    app_url: &'a str,
}

/// HTTP client for the hosted backend's REST surface. Each call is a full,
/// unconditional write — no retry, no idempotency key.
pub struct SettingsClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SettingsClient {
    /// Create a new `SettingsClient`. The underlying `reqwest::Client` is
    /// configured with a 30-second timeout.
    pub fn new(config: BackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build reqwest client");

        Self {
            http,
            base_url: config.base_url,
            anon_key: config.anon_key,
        }
    }

    // --------------------------------------------------------------------
    // Private HTTP helpers
    // --------------------------------------------------------------------

    /// Build an authenticated request to the given endpoint path.
    fn authed(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Send a request, check the status code, and deserialize the JSON response.
    async fn send_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, AppError> {
        req.send()
            .await
            .map_err(persist_err)?
            .error_for_status()
            .map_err(persist_err)?
            .json()
            .await
            .map_err(persist_err)
    }

    /// Send a request, check the status code, and discard the response body.
    async fn send_ok(&self, req: reqwest::RequestBuilder) -> Result<(), AppError> {
        req.send()
            .await
            .map_err(persist_err)?
            .error_for_status()
            .map_err(persist_err)?;
        Ok(())
    }

    // --------------------------------------------------------------------
    // User settings
    // --------------------------------------------------------------------

    /// `POST /rest/v1/user_settings` -- upsert the full settings snapshot,
    /// keyed by the record's `id` (the user id).
    pub async fn upsert_user_settings(&self, record: &SettingsRecord) -> Result<(), AppError> {
        let req = self
            .authed(reqwest::Method::POST, "/rest/v1/user_settings")
            .header("Prefer", "resolution=merge-duplicates")
            .json(record);
        self.send_ok(req).await
    }

    // --------------------------------------------------------------------
    // Apps
    // --------------------------------------------------------------------

    /// `POST /rest/v1/apps` -- insert an app for the user and return the
    /// created record, including the server-assigned id.
    pub async fn insert_app(&self, app: &NewApp, user_id: &str) -> Result<App, AppError> {
        let req = self
            .authed(reqwest::Method::POST, "/rest/v1/apps")
            .header("Prefer", "return=representation")
            .json(&NewAppRow {
                user_id,
                name: &app.name,
                description: &app.description,
                logo_url: &app.logo_url,
                app_url: &app.app_url,
            });
        let mut rows: Vec<App> = self.send_json(req).await?;
        rows.pop()
            .ok_or_else(|| AppError::Persistence("Insert returned no record".into()))
    }

    /// `GET /rest/v1/apps?user_id=eq.{id}` -- fetch the user's app list.
    pub async fn fetch_apps(&self, user_id: &str) -> Result<Vec<App>, AppError> {
        let path = format!("/rest/v1/apps?user_id=eq.{}&select=*", user_id);
        self.send_json(self.authed(reqwest::Method::GET, &path)).await
    }
}
