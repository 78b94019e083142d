use crate::utils::error::{FareError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_fare(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Fare must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Fare must be greater than zero".to_string(),
        });
    }

    Ok(())
}

pub fn validate_output_format(field_name: &str, format: &str) -> Result<()> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: other.to_string(),
            reason: "Supported formats: text, json".to_string(),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
