use crate::utils::error::{QuoteError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Simple `local@domain.tld` shape check. No trimming: surrounding whitespace fails.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    if !is_valid_email(email) {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: email.to_string(),
            reason: "Expected an address of the form local@domain.tld".to_string(),
        });
    }
    Ok(())
}

/// Email shape check plus a ban on characters that carry meaning in a `mailto:` URI.
pub fn validate_mailto_address(field_name: &str, email: &str) -> Result<()> {
    validate_email(field_name, email)?;
    if let Some(c) = email.chars().find(|c| matches!(c, '?' | '&' | '=' | '#' | '%')) {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: email.to_string(),
            reason: format!("'{}' is not allowed in a mail recipient", c),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks that `uri` parses and uses one of the `allowed_schemes`.
pub fn validate_uri(field_name: &str, uri: &str, allowed_schemes: &[&str]) -> Result<()> {
    match Url::parse(uri) {
        Ok(url) if allowed_schemes.contains(&url.scheme()) => Ok(()),
        Ok(url) => Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: uri.to_string(),
            reason: format!(
                "Unsupported URI scheme: {}. Allowed schemes: {}",
                url.scheme(),
                allowed_schemes.join(", ")
            ),
        }),
        Err(e) => Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: uri.to_string(),
            reason: format!("Invalid URI: {}", e),
        }),
    }
}
