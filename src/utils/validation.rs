use crate::utils::error::{CdekError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CdekError::InvalidConfig {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CdekError::InvalidConfig {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CdekError::InvalidConfig {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CdekError::InvalidConfig {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CdekError::InvalidConfig {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(validate_url("base_url", "https://api.cdek.ru/v2").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn rejects_non_http_schemes_and_garbage() {
        assert!(validate_url("base_url", "ftp://api.cdek.ru").is_err());
        assert!(validate_url("base_url", "not a url").is_err());
        assert!(validate_url("base_url", "").is_err());
    }

    #[test]
    fn rejects_blank_strings() {
        assert!(validate_non_empty_string("account", "  ").is_err());
        assert!(validate_non_empty_string("account", "acc").is_ok());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(validate_positive_number("weight", 0.0).is_err());
        assert!(validate_positive_number("weight", -1.5).is_err());
        assert!(validate_positive_number("weight", f64::NAN).is_err());
        assert!(validate_positive_number("weight", 1.5).is_ok());
    }
}
