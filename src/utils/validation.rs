use crate::utils::error::{BillingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BillingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BillingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BillingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path_accepts_relative_path() {
        assert!(validate_path("input_path", "./sites.json").is_ok());
    }

    #[test]
    fn test_validate_path_rejects_empty() {
        let result = validate_path("input_path", "");
        assert!(matches!(
            result,
            Err(BillingError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validate_path_rejects_null_bytes() {
        assert!(validate_path("input_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string_rejects_whitespace() {
        assert!(validate_non_empty_string("name", "   ").is_err());
        assert!(validate_non_empty_string("name", "occupant").is_ok());
    }
}
