use crate::core::catalog::Catalog;
use crate::domain::model::{DiscountRate, LineItem, Money, Quote, Selection, SelectionSummary};

/// Adds `course_id` if absent, removes it if present. Unknown ids are accepted.
pub fn toggle_selection(selection: &Selection, course_id: &str) -> Selection {
    selection.toggled(course_id)
}

/// Sum of catalog fees for the selected ids. Unknown ids contribute nothing.
pub fn compute_subtotal(catalog: &Catalog, selection: &Selection) -> Money {
    selection
        .ids()
        .filter_map(|id| catalog.find(id))
        .map(|course| course.fee())
        .sum()
}

/// Count-based discount tier: 3+ courses 15%, exactly 2 courses 5%, otherwise none.
pub fn discount_rate(selection_size: usize) -> DiscountRate {
    match selection_size {
        n if n >= 3 => DiscountRate::from_percent(15),
        2 => DiscountRate::from_percent(5),
        _ => DiscountRate::NONE,
    }
}

/// The rate uses the size of the selection, unknown ids included.
pub fn compute_quote(catalog: &Catalog, selection: &Selection) -> Quote {
    let subtotal = compute_subtotal(catalog, selection);
    let rate = discount_rate(selection.len());
    let discount_amount = rate.apply(subtotal);

    let line_items = catalog
        .courses()
        .iter()
        .filter(|course| selection.contains(course.id))
        .map(|course| LineItem {
            course_id: course.id.to_string(),
            name: course.name.to_string(),
            duration: course.duration.to_string(),
            fee: course.fee(),
        })
        .collect();

    Quote {
        subtotal,
        discount_rate: rate,
        discount_amount,
        total: subtotal - discount_amount,
        line_items,
    }
}

pub fn summarize(catalog: &Catalog, selection: &Selection) -> SelectionSummary {
    let quote = compute_quote(catalog, selection);
    SelectionSummary {
        count: selection.len(),
        total: quote.total,
        savings: quote.discount_amount,
    }
}
