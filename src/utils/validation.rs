use crate::utils::error::{PystrapError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PystrapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PystrapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PystrapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A Python module path like `app.main`: dot-separated identifiers.
pub fn validate_module_name(field_name: &str, module: &str) -> Result<()> {
    let valid = !module.is_empty()
        && module.split('.').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                }
                _ => false,
            }
        });

    if valid {
        Ok(())
    } else {
        Err(PystrapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: module.to_string(),
            reason: "Expected a dotted Python module path (e.g. app.main)".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("venv_dir", ".venv").is_ok());
        assert!(validate_path("venv_dir", "").is_err());
        assert!(validate_path("venv_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("interpreter", "python3").is_ok());
        assert!(validate_non_empty_string("interpreter", "   ").is_err());
    }

    #[test]
    fn test_validate_module_name() {
        assert!(validate_module_name("entry_module", "app.main").is_ok());
        assert!(validate_module_name("entry_module", "main").is_ok());
        assert!(validate_module_name("entry_module", "_private.mod2").is_ok());
        assert!(validate_module_name("entry_module", "").is_err());
        assert!(validate_module_name("entry_module", "app..main").is_err());
        assert!(validate_module_name("entry_module", "2app.main").is_err());
        assert!(validate_module_name("entry_module", "app/main").is_err());
    }
}
