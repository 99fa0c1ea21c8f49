#![doc = include_str!("../README.md")]
use log::debug;
use serde_json::Value;

mod aggregate;
mod amount;
mod catalog;
mod input;
mod report;
mod sales;
mod validate;

pub use self::{
    aggregate::compute_total,
    amount::Amount,
    catalog::Catalog,
    input::{read_json_file, InputError},
    report::{Report, REPORT_FILE_NAME},
    sales::{parse_sales, Sale},
    validate::is_number,
};

/// Computes a sales [`Report`] from decoded catalog and sales data.
///
/// Bad catalog items, bad sales items, and sales of products missing from
/// the catalog never stop the calculation. They are skipped, and listed in
/// the report's errors in that order: catalog problems first, then sales
/// problems, then unknown products.
///
/// The returned report's execution time is zero; use
/// [`Report::with_elapsed`] to set it.
///
/// # Examples
///
/// ```
/// # use serde_json::json;
/// # use sales_total::compute;
/// let report = compute(
///     &json!([{"title": "A", "price": 2}]),
///     &json!([{"Product": "A", "Quantity": "bad"}]),
/// );
/// assert_eq!(report.total.to_string(), "0.00");
/// assert_eq!(
///     report.errors,
///     vec!["Sales item #1 has an invalid 'Quantity' field for product 'A'."],
/// );
/// ```
#[must_use]
pub fn compute(catalog_data: &Value, sales_data: &Value) -> Report {
    let (catalog, mut errors) = Catalog::from_json(catalog_data);
    let (sales, sales_errors) = parse_sales(sales_data);
    let (total, resolution_errors) = compute_total(&catalog, &sales);
    errors.extend(sales_errors);
    errors.extend(resolution_errors);
    debug!("computed total {total} with {} errors", errors.len());
    Report::new(total, errors)
}
