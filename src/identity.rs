use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The authenticated user, as reported by the realtime connection's
/// verified session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Emails allowed to edit the full system prompt.
const PROMPT_EDITOR_ALLOWLIST: &[&str] = &["ops@ariavoice.app", "dev@ariavoice.app"];

/// Emails shown the admin-only tool set.
const ADMIN_ALLOWLIST: &[&str] = &["ops@ariavoice.app"];

/// View capabilities computed once per session from the identity claim.
/// Cosmetic gating only — the backend enforces nothing based on these
/// flags, and nothing here is a security boundary.
#[derive(Debug, Clone, Copy, Default, Serialize, TS)]
#[ts(export)]
pub struct Capabilities {
    pub can_edit_system_prompt: bool,
    pub can_view_admin_tools: bool,
}

impl Capabilities {
    pub fn for_user(user: &AuthUser) -> Self {
        Self {
            can_edit_system_prompt: PROMPT_EDITOR_ALLOWLIST.contains(&user.email.as_str()),
            can_view_admin_tools: ADMIN_ALLOWLIST.contains(&user.email.as_str()),
        }
    }
}
