use crate::error::AppError;

pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

pub fn require_url(field: &str, value: &str) -> Result<(), AppError> {
    require_non_empty(field, value)?;
    url::Url::parse(value)
        .map_err(|e| AppError::Validation(format!("{field} is not a valid URL: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty_rejects_whitespace() {
        assert!(require_non_empty("name", "   ").is_err());
        assert!(require_non_empty("name", "").is_err());
        assert!(require_non_empty("name", "ok").is_ok());
    }

    #[test]
    fn test_require_url() {
        assert!(require_url("app_url", "https://example.com/app").is_ok());
        assert!(require_url("app_url", "not a url").is_err());
        assert!(require_url("app_url", "").is_err());
    }
}
