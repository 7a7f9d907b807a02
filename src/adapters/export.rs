use crate::core::message::format_quote_message;
use crate::domain::model::{Money, Quote};
use crate::utils::error::{QuoteError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render_quote(quote: &Quote, format: OutputFormat, currency_symbol: &str) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_quote_message(quote, currency_symbol)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(quote)?),
        OutputFormat::Csv => quote_to_csv(quote),
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    course_id: &'a str,
    name: &'a str,
    duration: &'a str,
    amount: f64,
}

/// One row per course, then subtotal, discount and total rows with an empty id.
pub fn quote_to_csv(quote: &Quote) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for item in &quote.line_items {
        writer.serialize(CsvRow {
            course_id: &item.course_id,
            name: &item.name,
            duration: &item.duration,
            amount: item.fee.as_f64(),
        })?;
    }

    let discount_label = format!("Discount ({}%)", quote.discount_rate.percent());
    let totals: [(&str, Money); 3] = [
        ("Subtotal", quote.subtotal),
        (&discount_label, Money::ZERO - quote.discount_amount),
        ("Total", quote.total),
    ];
    for (label, amount) in totals {
        writer.serialize(CsvRow {
            course_id: "",
            name: label,
            duration: "",
            amount: amount.as_f64(),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| QuoteError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| QuoteError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::pricing::compute_quote;
    use crate::domain::model::Selection;

    fn two_course_quote() -> Quote {
        compute_quote(&Catalog::standard(), &Selection::from_ids(["5", "6"]))
    }

    #[test]
    fn test_csv_export() {
        let csv = quote_to_csv(&two_course_quote()).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "course_id,name,duration,amount");
        assert_eq!(lines[1], "5,Child Minding,6 weeks,750.0");
        assert_eq!(lines[2], "6,Cooking,6 weeks,750.0");
        assert_eq!(lines[3], ",Subtotal,,1500.0");
        assert_eq!(lines[4], ",Discount (5%),,-75.0");
        assert_eq!(lines[5], ",Total,,1425.0");
    }

    #[test]
    fn test_json_export() {
        let json = render_quote(&two_course_quote(), OutputFormat::Json, "R").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["subtotal"], 1500.0);
        assert_eq!(value["discount_rate"], 0.05);
        assert_eq!(value["discount_amount"], 75.0);
        assert_eq!(value["total"], 1425.0);
        assert_eq!(value["line_items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_text_export_matches_dialog() {
        let text = render_quote(&two_course_quote(), OutputFormat::Text, "R").unwrap();
        assert!(text.contains("Discount (5%): -R75"));
    }
}
