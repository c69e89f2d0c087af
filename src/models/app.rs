use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An externally linked app as stored by the backend. `id` is assigned
/// server-side on insert.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct App {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo_url: String,
    pub app_url: String,
}

/// Client-supplied fields for creating an app.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewApp {
    pub name: String,
    pub description: String,
    pub logo_url: String,
    pub app_url: String,
}
