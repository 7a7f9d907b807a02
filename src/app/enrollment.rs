use crate::core::engine::QuoteEngine;
use crate::domain::model::{EnrollmentEmail, Selection};
use crate::domain::ports::LinkDispatcher;
use crate::utils::error::{QuoteError, Result};

/// Confirm-and-email flow: validate, build the email, hand the `mailto:` URI
/// to the host. A failed hand-off becomes a fallback alert; nothing is retried.
pub struct EnrollmentFlow<D: LinkDispatcher> {
    engine: QuoteEngine,
    dispatcher: D,
}

impl<D: LinkDispatcher> EnrollmentFlow<D> {
    pub fn new(engine: QuoteEngine, dispatcher: D) -> Self {
        Self { engine, dispatcher }
    }

    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub async fn confirm(
        &self,
        selection: &Selection,
        full_name: &str,
        email: &str,
    ) -> Result<EnrollmentEmail> {
        let enrollment = match self.engine.prepare_enrollment(selection, full_name, email) {
            Ok(enrollment) => enrollment,
            Err(e) => {
                tracing::warn!("Enrollment rejected: {}", e);
                return Err(e);
            }
        };

        tracing::info!(
            courses = selection.len(),
            recipient = %enrollment.recipient,
            "Opening mail composer"
        );
        dispatch_or_fallback(&self.dispatcher, &enrollment.mailto_uri(), || {
            self.engine.dispatch_fallback_message()
        })
        .await?;

        Ok(enrollment)
    }
}

/// Dispatches `uri`, mapping a failure to [`QuoteError::LinkDispatchFailure`]
/// carrying the static fallback text.
pub async fn dispatch_or_fallback<D, F>(dispatcher: &D, uri: &str, fallback: F) -> Result<()>
where
    D: LinkDispatcher + ?Sized,
    F: FnOnce() -> String,
{
    match dispatcher.dispatch(uri).await {
        Ok(()) => {
            tracing::debug!(uri, "Link dispatched");
            Ok(())
        }
        Err(reason) => {
            tracing::warn!(uri, %reason, "Link dispatch failed");
            Err(QuoteError::LinkDispatchFailure {
                uri: uri.to_string(),
                reason,
                fallback: fallback(),
            })
        }
    }
}
