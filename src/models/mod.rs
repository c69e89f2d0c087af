mod app;
mod persona;
mod tool;

pub use app::{App, NewApp};
pub use persona::{PersonaConfig, Voice, AVAILABLE_VOICES};
pub use tool::{ToolCall, ToolDefinition, WebhookField};
