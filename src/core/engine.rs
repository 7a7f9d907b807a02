use crate::core::catalog::Catalog;
use crate::core::{message, pricing};
use crate::domain::model::{
    ContactInfo, DiscountRate, EnrollmentEmail, Money, ProviderProfile, Quote, Selection,
    SelectionSummary,
};
use crate::domain::ports::ProfileProvider;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::is_valid_email;
use std::sync::Arc;

/// Course pricing and enrollment-message engine.
///
/// Every operation is a pure function of the shared catalog, the provider
/// profile and its arguments; selections are passed in and returned, never held.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    catalog: Arc<Catalog>,
    profile: ProviderProfile,
}

impl QuoteEngine {
    pub fn new(catalog: Arc<Catalog>, profile: ProviderProfile) -> Self {
        Self { catalog, profile }
    }

    pub fn from_provider<P: ProfileProvider>(catalog: Arc<Catalog>, provider: &P) -> Self {
        Self::new(catalog, provider.profile())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn profile(&self) -> &ProviderProfile {
        &self.profile
    }

    pub fn toggle_selection(&self, selection: &Selection, course_id: &str) -> Selection {
        let next = pricing::toggle_selection(selection, course_id);
        tracing::debug!(course_id, selected = next.len(), "Toggled course selection");
        next
    }

    pub fn compute_subtotal(&self, selection: &Selection) -> Money {
        pricing::compute_subtotal(&self.catalog, selection)
    }

    pub fn discount_rate(&self, selection_size: usize) -> DiscountRate {
        pricing::discount_rate(selection_size)
    }

    pub fn compute_quote(&self, selection: &Selection) -> Quote {
        let quote = pricing::compute_quote(&self.catalog, selection);
        tracing::debug!(
            courses = selection.len(),
            subtotal = %quote.subtotal,
            discount_percent = quote.discount_rate.percent(),
            total = %quote.total,
            "Computed quote"
        );
        quote
    }

    pub fn summarize(&self, selection: &Selection) -> SelectionSummary {
        pricing::summarize(&self.catalog, selection)
    }

    /// Quote text for the confirmation dialog. An empty selection is rejected
    /// rather than producing a zero quote.
    pub fn format_quote_message(&self, selection: &Selection, quote: &Quote) -> Result<String> {
        if selection.is_empty() {
            return Err(QuoteError::EmptySelection);
        }
        Ok(message::format_quote_message(quote, &self.profile.currency_symbol))
    }

    /// Computes the quote for `selection` and formats it in one step.
    pub fn quote_message(&self, selection: &Selection) -> Result<String> {
        let quote = self.compute_quote(selection);
        self.format_quote_message(selection, &quote)
    }

    /// Checks selection, then name, then email; the first failure wins.
    pub fn validate_contact(
        &self,
        selection: &Selection,
        full_name: &str,
        email: &str,
    ) -> Result<ContactInfo> {
        if selection.is_empty() {
            return Err(QuoteError::EmptySelection);
        }
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(QuoteError::MissingName);
        }
        if !is_valid_email(email) {
            return Err(QuoteError::InvalidEmail {
                email: email.to_string(),
            });
        }
        Ok(ContactInfo::new(full_name.to_string(), email.to_string()))
    }

    pub fn build_enrollment_email(
        &self,
        selection: &Selection,
        quote: &Quote,
        contact: &ContactInfo,
    ) -> EnrollmentEmail {
        tracing::debug!(
            courses = selection.len(),
            recipient = %self.profile.enrollment_email,
            "Building enrollment email"
        );
        message::build_enrollment_email(quote, contact, &self.profile)
    }

    /// Validate, quote and build the email for a confirm action.
    pub fn prepare_enrollment(
        &self,
        selection: &Selection,
        full_name: &str,
        email: &str,
    ) -> Result<EnrollmentEmail> {
        let contact = self.validate_contact(selection, full_name, email)?;
        let quote = self.compute_quote(selection);
        Ok(self.build_enrollment_email(selection, &quote, &contact))
    }

    pub fn dispatch_fallback_message(&self) -> String {
        message::dispatch_fallback_message(&self.profile)
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::standard()), ProviderProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> QuoteEngine {
        QuoteEngine::default()
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let engine = engine();
        let start = Selection::from_ids(["1", "5"]);
        for id in ["1", "2", "unknown"] {
            let twice = engine.toggle_selection(&engine.toggle_selection(&start, id), id);
            assert_eq!(twice, start);
        }
    }

    #[test]
    fn test_validation_order() {
        let engine = engine();
        let empty = Selection::new();
        let one = Selection::from_ids(["1"]);

        assert!(matches!(
            engine.validate_contact(&empty, "", ""),
            Err(QuoteError::EmptySelection)
        ));
        assert!(matches!(
            engine.validate_contact(&one, "", "a@b.com"),
            Err(QuoteError::MissingName)
        ));
        assert!(matches!(
            engine.validate_contact(&one, "   ", "not-an-email"),
            Err(QuoteError::MissingName)
        ));
        assert!(matches!(
            engine.validate_contact(&one, "Jane Doe", "not-an-email"),
            Err(QuoteError::InvalidEmail { .. })
        ));
    }

    #[test]
    fn test_validate_contact_trims_name() {
        let contact = engine()
            .validate_contact(&Selection::from_ids(["2"]), "  Jane Doe ", "jane@example.com")
            .unwrap();
        assert_eq!(contact.full_name(), "Jane Doe");
        assert_eq!(contact.email(), "jane@example.com");
    }

    #[test]
    fn test_quote_message_rejects_empty_selection() {
        assert!(matches!(
            engine().quote_message(&Selection::new()),
            Err(QuoteError::EmptySelection)
        ));
    }

    #[test]
    fn test_prepare_enrollment() {
        let email = engine()
            .prepare_enrollment(&Selection::from_ids(["1"]), "Jane Doe", "jane@example.com")
            .unwrap();
        assert_eq!(email.subject, "Enrollment request from Jane Doe");
        assert!(email.body.contains("• First Aid (6 Months) – R1,500"));
    }

    #[test]
    fn test_fallback_names_enrollment_address() {
        assert_eq!(
            engine().dispatch_fallback_message(),
            "Please email us at empoweringthenation@gmail.com."
        );
    }
}
