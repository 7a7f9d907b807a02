use crate::domain::model::ProviderProfile;
use async_trait::async_trait;

pub trait ProfileProvider: Send + Sync {
    fn profile(&self) -> ProviderProfile;
}

/// Hands a fully formed URI (`tel:`, `mailto:`, `https:`) to the host's link handler.
///
/// Implementations return the reason text on failure; callers turn it into a
/// user-facing fallback and do not retry.
#[async_trait]
pub trait LinkDispatcher: Send + Sync {
    async fn dispatch(&self, uri: &str) -> std::result::Result<(), String>;
}
