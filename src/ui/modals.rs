use crate::error::AppError;
use crate::models::{NewApp, ToolDefinition};
use crate::store::SettingsStore;
use crate::validation::{require_non_empty, require_url};

/// Tool editor modal: edits a draft copy of the tool, leaving the store
/// untouched until save.
#[derive(Debug, Clone)]
pub struct ToolEditor {
    original_name: String,
    pub draft: ToolDefinition,
}

impl ToolEditor {
    pub fn open(tool: &ToolDefinition) -> Self {
        Self {
            original_name: tool.name.clone(),
            draft: tool.clone(),
        }
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// Replace the edited tool in the store, keyed by its pre-edit name.
    /// Consumes the editor — success or failure, the modal closes and the
    /// draft is gone.
    pub fn save(self, store: &mut SettingsStore) -> Result<(), AppError> {
        require_non_empty("Tool name", &self.draft.name)?;
        store.update_tool(&self.original_name, self.draft)
    }
}

/// Add-app modal form. All four fields are required; the URL fields must
/// parse.
#[derive(Debug, Clone, Default)]
pub struct AddAppForm {
    pub name: String,
    pub description: String,
    pub logo_url: String,
    pub app_url: String,
    pub is_saving: bool,
}

impl AddAppForm {
    /// Validate the form into the record sent to the backend.
    pub fn validate(&self) -> Result<NewApp, AppError> {
        require_non_empty("App name", &self.name)?;
        require_non_empty("Description", &self.description)?;
        require_url("Logo URL", &self.logo_url)?;
        require_url("App URL", &self.app_url)?;

        Ok(NewApp {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            logo_url: self.logo_url.trim().to_string(),
            app_url: self.app_url.trim().to_string(),
        })
    }
}
