use crate::utils::error::{Result, TrackerError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TrackerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| TrackerError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 對應表單 `type="number" min="0"` 的限制
pub fn parse_non_negative_amount(field_name: &str, raw: &str) -> Result<f64> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| TrackerError::ValidationError {
            field: field_name.to_string(),
            message: format!("'{}' is not a number", raw),
        })?;

    if !amount.is_finite() {
        return Err(TrackerError::ValidationError {
            field: field_name.to_string(),
            message: format!("'{}' is not a finite number", raw),
        });
    }

    if amount < 0.0 {
        return Err(TrackerError::ValidationError {
            field: field_name.to_string(),
            message: "Value must be at least 0".to_string(),
        });
    }

    Ok(amount)
}

/// Returns the allowed spelling of `value`, compared case-insensitively.
pub fn validate_one_of<'a>(
    field_name: &str,
    value: &str,
    allowed: &'a [String],
) -> Result<&'a str> {
    allowed
        .iter()
        .find(|candidate| candidate.to_lowercase() == value.trim().to_lowercase())
        .map(String::as_str)
        .ok_or_else(|| TrackerError::ValidationError {
            field: field_name.to_string(),
            message: format!("'{}' is not one of: {}", value, allowed.join(", ")),
        })
}
