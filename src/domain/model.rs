use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Sub};

use crate::utils::uri;

/// Currency amount held as integer cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub fn from_units(units: i64) -> Self {
        Self { cents: units * 100 }
    }

    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn as_f64(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents + rhs.cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::from_cents(self.cents - rhs.cents)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Grouped thousands and no trailing zero cents: `1,425`, `112.5`, `0.05`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cents < 0 {
            f.write_str("-")?;
        }
        let abs = self.cents.unsigned_abs();
        let units = (abs / 100).to_string();
        let frac = abs % 100;

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        f.write_str(&grouped)?;

        match frac {
            0 => Ok(()),
            f10 if f10 % 10 == 0 => write!(f, ".{}", f10 / 10),
            _ => write!(f, ".{:02}", frac),
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Whole-percent discount rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscountRate {
    percent: u32,
}

impl DiscountRate {
    pub const NONE: DiscountRate = DiscountRate { percent: 0 };

    pub fn from_percent(percent: u32) -> Self {
        Self { percent }
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.percent == 0
    }

    /// Exact for whole-unit amounts: `units * 100 * p / 100` has no remainder.
    pub fn apply(&self, amount: Money) -> Money {
        Money::from_cents(amount.cents() * i64::from(self.percent) / 100)
    }
}

impl Serialize for DiscountRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseTier {
    /// Six-week courses.
    Short,
    /// Six-month courses.
    Long,
}

impl CourseTier {
    pub fn heading(&self) -> &'static str {
        match self {
            CourseTier::Short => "Six Week Courses",
            CourseTier::Long => "Six Month Courses",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            CourseTier::Short => "Short-term skill development programs",
            CourseTier::Long => "Comprehensive learnerships",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: &'static str,
    pub name: &'static str,
    pub fee: u32,
    pub duration: &'static str,
    pub tier: CourseTier,
    pub purpose: &'static str,
    pub topics: &'static [&'static str],
}

impl Course {
    pub fn fee(&self) -> Money {
        Money::from_units(i64::from(self.fee))
    }
}

/// Set of selected course ids. Updates return a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn toggled(&self, course_id: &str) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(course_id) {
            ids.insert(course_id.to_string());
        }
        Self { ids }
    }

    pub fn cleared(&self) -> Self {
        Self::new()
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.ids.contains(course_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// Contact details that passed validation. Only built by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    full_name: String,
    email: String,
}

impl ContactInfo {
    pub(crate) fn new(full_name: String, email: String) -> Self {
        Self { full_name, email }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub course_id: String,
    pub name: String,
    pub duration: String,
    pub fee: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub subtotal: Money,
    pub discount_rate: DiscountRate,
    pub discount_amount: Money,
    pub total: Money,
    pub line_items: Vec<LineItem>,
}

impl Quote {
    pub fn has_discount(&self) -> bool {
        !self.discount_amount.is_zero()
    }
}

/// Running summary shown under the course list while selecting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSummary {
    pub count: usize,
    pub total: Money,
    pub savings: Money,
}

impl SelectionSummary {
    pub fn headline(&self) -> String {
        let plural = if self.count == 1 { "" } else { "s" };
        format!("Selected: {} course{}", self.count, plural)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl EnrollmentEmail {
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            uri::encode_address(&self.recipient),
            uri::encode_component(&self.subject),
            uri::encode_component(&self.body)
        )
    }
}

/// Contact and branding details of the training provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderProfile {
    pub name: String,
    pub enrollment_email: String,
    pub enquiries_email: String,
    pub phone: String,
    pub address: String,
    pub maps_base_url: String,
    pub currency_symbol: String,
}

impl Default for ProviderProfile {
    fn default() -> Self {
        Self {
            name: "Empowering the Nation".to_string(),
            enrollment_email: "empoweringthenation@gmail.com".to_string(),
            enquiries_email: "info@empoweringthenation.co.za".to_string(),
            phone: "+27 11 234 5678".to_string(),
            address: "115 Vilakazi street, Orlando West, Soweto, Johannesburg".to_string(),
            maps_base_url: "https://maps.google.com/".to_string(),
            currency_symbol: "R".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_units(0).to_string(), "0");
        assert_eq!(Money::from_units(750).to_string(), "750");
        assert_eq!(Money::from_units(1425).to_string(), "1,425");
        assert_eq!(Money::from_units(1_234_567).to_string(), "1,234,567");
        assert_eq!(Money::from_cents(11_250).to_string(), "112.5");
        assert_eq!(Money::from_cents(191_250).to_string(), "1,912.5");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-7_500).to_string(), "-75");
    }

    #[test]
    fn test_discount_apply_is_exact() {
        let rate = DiscountRate::from_percent(15);
        assert_eq!(rate.apply(Money::from_units(750)), Money::from_cents(11_250));
        assert_eq!(rate.apply(Money::from_units(4500)).as_f64(), 675.0);
        assert_eq!(DiscountRate::NONE.apply(Money::from_units(1500)), Money::ZERO);
    }

    #[test]
    fn test_selection_toggle_and_clear() {
        let selection = Selection::new().toggled("1").toggled("5");
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("5"));

        let removed = selection.toggled("5");
        assert!(!removed.contains("5"));
        assert_eq!(selection.len(), 2, "original value is untouched");

        assert!(selection.cleared().is_empty());
    }

    #[test]
    fn test_summary_headline() {
        let summary = SelectionSummary {
            count: 1,
            total: Money::from_units(750),
            savings: Money::ZERO,
        };
        assert_eq!(summary.headline(), "Selected: 1 course");

        let summary = SelectionSummary { count: 3, ..summary };
        assert_eq!(summary.headline(), "Selected: 3 courses");
    }

    #[test]
    fn test_mailto_uri_escapes_recipient() {
        let email = EnrollmentEmail {
            recipient: "a?cc=evil@b.com".to_string(),
            subject: "Hi".to_string(),
            body: "Body".to_string(),
        };
        let uri = email.mailto_uri();
        assert_eq!(uri, "mailto:a%3Fcc%3Devil@b.com?subject=Hi&body=Body");
        assert_eq!(uri.matches('?').count(), 1);
    }

    #[test]
    fn test_mailto_uri_encodes_components() {
        let email = EnrollmentEmail {
            recipient: "office@example.com".to_string(),
            subject: "Enrollment request from Jane Doe".to_string(),
            body: "Line one\nLine two".to_string(),
        };
        assert_eq!(
            email.mailto_uri(),
            "mailto:office@example.com?subject=Enrollment%20request%20from%20Jane%20Doe&body=Line%20one%0ALine%20two"
        );
    }
}
