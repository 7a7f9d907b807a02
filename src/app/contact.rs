use crate::app::enrollment::dispatch_or_fallback;
use crate::core::engine::QuoteEngine;
use crate::domain::model::ProviderProfile;
use crate::domain::ports::LinkDispatcher;
use crate::utils::error::{QuoteError, Result};
use crate::utils::uri;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ContactAction {
    Call,
    Email,
    Directions,
}

impl ContactAction {
    pub fn label(&self) -> &'static str {
        match self {
            ContactAction::Call => "Call Now",
            ContactAction::Email => "Send Email",
            ContactAction::Directions => "Get Directions",
        }
    }

    pub fn uri(&self, profile: &ProviderProfile) -> Result<String> {
        match self {
            ContactAction::Call => Ok(uri::tel_uri(&profile.phone)),
            ContactAction::Email => Ok(uri::mailto_uri(&profile.enquiries_email)),
            ContactAction::Directions => uri::maps_search_uri(&profile.maps_base_url, &profile.address)
                .map_err(|e| QuoteError::InvalidConfigValueError {
                    field: "provider.maps_base_url".to_string(),
                    value: profile.maps_base_url.clone(),
                    reason: e.to_string(),
                }),
        }
    }
}

/// Text of the "Ready to Enroll?" prompt.
pub fn contact_card(profile: &ProviderProfile) -> String {
    format!(
        "Contact us to complete your enrollment:\n\nPhone: {}\nEmail: {}\nAddress: {}",
        profile.phone, profile.enquiries_email, profile.address
    )
}

pub async fn perform_contact_action<D: LinkDispatcher>(
    engine: &QuoteEngine,
    dispatcher: &D,
    action: ContactAction,
) -> Result<String> {
    let target = action.uri(engine.profile())?;
    tracing::info!(action = action.label(), uri = %target, "Contact action requested");
    dispatch_or_fallback(dispatcher, &target, || engine.dispatch_fallback_message()).await?;
    Ok(target)
}
