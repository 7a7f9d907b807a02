use crate::domain::model::{ContactInfo, EnrollmentEmail, Money, ProviderProfile, Quote};
use std::fmt::Write;

pub const QUOTE_TITLE: &str = "Course Fee Quote";

fn amount(symbol: &str, money: Money) -> String {
    format!("{}{}", symbol, money)
}

/// Multi-line quote summary for the confirmation dialog.
pub fn format_quote_message(quote: &Quote, currency_symbol: &str) -> String {
    let mut message = String::from("Course Selection Summary:\n\n");
    for item in &quote.line_items {
        let _ = writeln!(
            message,
            "• {} ({}): {}",
            item.name,
            item.duration,
            amount(currency_symbol, item.fee)
        );
    }

    let _ = write!(message, "\nSubtotal: {}", amount(currency_symbol, quote.subtotal));
    if quote.has_discount() {
        let _ = write!(
            message,
            "\nDiscount ({}%): -{}",
            quote.discount_rate.percent(),
            amount(currency_symbol, quote.discount_amount)
        );
    }
    let _ = write!(message, "\nTotal Amount: {}", amount(currency_symbol, quote.total));

    if quote.has_discount() {
        let _ = write!(
            message,
            "\n\nYou saved {} with our multiple course discount!",
            amount(currency_symbol, quote.discount_amount)
        );
    }
    message
}

pub fn enrollment_subject(contact: &ContactInfo) -> String {
    format!("Enrollment request from {}", contact.full_name())
}

/// Plain-text body; encoding for `mailto:` happens in [`EnrollmentEmail::mailto_uri`].
pub fn enrollment_body(quote: &Quote, contact: &ContactInfo, profile: &ProviderProfile) -> String {
    let symbol = profile.currency_symbol.as_str();
    let courses = quote
        .line_items
        .iter()
        .map(|item| {
            format!(
                "• {} ({}) – {}",
                item.name,
                item.duration,
                amount(symbol, item.fee)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut body = format!("Hello {},\n\n", profile.name);
    let _ = write!(
        body,
        "I would like to enroll in the following course(s):\n{}\n\n",
        courses
    );
    let _ = writeln!(body, "Subtotal: {}", amount(symbol, quote.subtotal));
    if quote.has_discount() {
        let _ = writeln!(body, "Discount: -{}", amount(symbol, quote.discount_amount));
    }
    let _ = write!(body, "Total: {}\n\n", amount(symbol, quote.total));
    let _ = write!(
        body,
        "My details:\nName: {}\nEmail: {}\n\n",
        contact.full_name(),
        contact.email()
    );
    body.push_str("Please contact me with next steps. Thank you!");
    body
}

pub fn build_enrollment_email(
    quote: &Quote,
    contact: &ContactInfo,
    profile: &ProviderProfile,
) -> EnrollmentEmail {
    EnrollmentEmail {
        recipient: profile.enrollment_email.clone(),
        subject: enrollment_subject(contact),
        body: enrollment_body(quote, contact, profile),
    }
}

pub fn dispatch_fallback_message(profile: &ProviderProfile) -> String {
    format!("Please email us at {}.", profile.enrollment_email)
}
