use crate::domain::model::ProviderProfile;
use crate::domain::ports::ProfileProvider;
use crate::utils::error::{QuoteError, Result};
use crate::utils::uri;
use crate::utils::validation::{
    validate_mailto_address, validate_non_empty_string, validate_uri, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: Option<String>,
    pub enrollment_email: Option<String>,
    pub enquiries_email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub maps_base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    pub currency_symbol: Option<String>,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Provider profile with every unset field taken from the defaults.
    pub fn resolve(&self) -> ProviderProfile {
        let defaults = ProviderProfile::default();
        let provider = &self.provider;
        ProviderProfile {
            name: provider.name.clone().unwrap_or(defaults.name),
            enrollment_email: provider
                .enrollment_email
                .clone()
                .unwrap_or(defaults.enrollment_email),
            enquiries_email: provider
                .enquiries_email
                .clone()
                .unwrap_or(defaults.enquiries_email),
            phone: provider.phone.clone().unwrap_or(defaults.phone),
            address: provider.address.clone().unwrap_or(defaults.address),
            maps_base_url: provider
                .maps_base_url
                .clone()
                .unwrap_or(defaults.maps_base_url),
            currency_symbol: self
                .pricing
                .currency_symbol
                .clone()
                .unwrap_or(defaults.currency_symbol),
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        let profile = self.resolve();

        validate_non_empty_string("provider.name", &profile.name)?;
        validate_mailto_address("provider.enrollment_email", &profile.enrollment_email)?;
        validate_mailto_address("provider.enquiries_email", &profile.enquiries_email)?;
        validate_non_empty_string("provider.phone", &profile.phone)?;
        validate_uri("provider.phone", &uri::tel_uri(&profile.phone), &["tel"])?;
        validate_non_empty_string("provider.address", &profile.address)?;
        validate_uri("provider.maps_base_url", &profile.maps_base_url, &["http", "https"])?;
        validate_non_empty_string("pricing.currency_symbol", &profile.currency_symbol)?;

        if !profile.phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(QuoteError::InvalidConfigValueError {
                field: "provider.phone".to_string(),
                value: profile.phone,
                reason: "Phone number contains no digits".to_string(),
            });
        }

        Ok(())
    }
}

impl ProfileProvider for AppConfig {
    fn profile(&self) -> ProviderProfile {
        self.resolve()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
