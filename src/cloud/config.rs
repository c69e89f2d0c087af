use crate::error::AppError;

/// Backend connection settings resolved from the environment. There are no
/// baked-in fallback values: an unset variable is a hard configuration
/// error at startup rather than a silent default.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub anon_key: String,
}

impl BackendConfig {
    /// Load from `ARIA_SUPABASE_URL` / `ARIA_SUPABASE_ANON_KEY`, reading a
    /// local `.env` file first when present.
    ///
    /// The anon key is a public client key by Supabase design; access
    /// control lives in Row Level Security policies, not in the secrecy of
    /// this key.
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        let base_url = std::env::var("ARIA_SUPABASE_URL")
            .map_err(|_| AppError::Config("ARIA_SUPABASE_URL is not set".into()))?;
        let anon_key = std::env::var("ARIA_SUPABASE_ANON_KEY")
            .map_err(|_| AppError::Config("ARIA_SUPABASE_ANON_KEY is not set".into()))?;

        if base_url.trim().is_empty() || anon_key.trim().is_empty() {
            return Err(AppError::Config(
                "Backend URL or anon key is empty".into(),
            ));
        }

        Ok(Self { base_url, anon_key })
    }
}
