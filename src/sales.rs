use log::debug;
use serde_json::Value;

use crate::validate::{number_field, text_field};

/// A single line of sales data: how many units of which product were sold.
#[derive(Clone, Debug, PartialEq)]
pub struct Sale {
    pub product: String,
    pub quantity: f64,
}

impl Sale {
    #[must_use]
    pub fn new(product: &str, quantity: f64) -> Self {
        Self {
            product: product.to_string(),
            quantity,
        }
    }
}

/// Parses sales records from `data`, which should be a JSON array of objects
/// of the form:
///
/// ```json
/// { "Product": "Pen", "Quantity": 10 }
/// ```
///
/// Field names are case-sensitive, and other fields are ignored. Records are
/// returned in input order. Invalid items are skipped, each with one message
/// in the returned error list. If `data` is not an array, no records are
/// returned and there is exactly one message.
///
/// # Examples
///
/// ```
/// # use serde_json::json;
/// # use sales_total::{parse_sales, Sale};
/// let (sales, errors) = parse_sales(&json!([
///     {"Product": "Pen", "Quantity": 10},
///     {"Product": "Pen", "Quantity": "ten"},
/// ]));
/// assert_eq!(sales, vec![Sale::new("Pen", 10.0)]);
/// assert_eq!(
///     errors,
///     vec!["Sales item #2 has an invalid 'Quantity' field for product 'Pen'."],
/// );
/// ```
#[must_use]
pub fn parse_sales(data: &Value) -> (Vec<Sale>, Vec<String>) {
    let Some(items) = data.as_array() else {
        return (Vec::new(), vec!["Sales record data must be a JSON array.".into()]);
    };
    let mut sales = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let index = index + 1;
        let Some(object) = item.as_object() else {
            errors.push(format!("Sales item #{index} is not a JSON object."));
            continue;
        };
        let Some(product) = text_field(object, "Product") else {
            errors.push(format!("Sales item #{index} has an invalid 'Product' field."));
            continue;
        };
        let Some(quantity) = number_field(object, "Quantity") else {
            errors.push(format!(
                "Sales item #{index} has an invalid 'Quantity' field for product '{product}'."
            ));
            continue;
        };
        sales.push(Sale::new(product, quantity));
    }
    debug!(
        "sales: {} records from {} items, {} errors",
        sales.len(),
        items.len(),
        errors.len()
    );
    (sales, errors)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn load(path: &str) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn parse_sales_fn_correctly_parses_sales_data_in_order() {
        let (sales, errors) = parse_sales(&load("testdata/sales.json"));
        assert!(errors.is_empty());
        assert_eq!(
            sales,
            vec![
                Sale::new("Pen", 10.0),
                Sale::new("Notebook", 4.0),
                Sale::new("Stapler", 1.0),
                Sale::new("Free sample", 25.0),
                Sale::new("Pen", -2.0),
            ]
        );
    }

    #[test]
    fn parse_sales_fn_reports_one_error_per_bad_item_in_order() {
        let (sales, errors) = parse_sales(&load("testdata/sales.bad.json"));
        assert_eq!(
            errors,
            vec![
                "Sales item #1 is not a JSON object.",
                "Sales item #2 has an invalid 'Product' field.",
                "Sales item #3 has an invalid 'Product' field.",
                "Sales item #4 has an invalid 'Product' field.",
                "Sales item #5 has an invalid 'Quantity' field for product 'Pen'.",
                "Sales item #6 has an invalid 'Quantity' field for product 'Pen'.",
                "Sales item #7 has an invalid 'Quantity' field for product 'Notebook'.",
            ]
        );
        assert_eq!(sales, vec![Sale::new("Ghost", 2.0), Sale::new("Pen", 0.5)]);
    }

    #[test]
    fn parse_sales_fn_returns_single_error_for_non_array() {
        let (sales, errors) = parse_sales(&json!({"Product": "Pen", "Quantity": 1}));
        assert!(sales.is_empty());
        assert_eq!(errors, vec!["Sales record data must be a JSON array."]);
    }

    #[test]
    fn parse_sales_fn_does_not_accept_catalog_field_names() {
        let (sales, errors) = parse_sales(&json!([{"title": "Pen", "price": 1}]));
        assert!(sales.is_empty());
        assert_eq!(errors, vec!["Sales item #1 has an invalid 'Product' field."]);
    }

    #[test]
    fn parse_sales_fn_accepts_empty_array() {
        let (sales, errors) = parse_sales(&json!([]));
        assert!(sales.is_empty());
        assert!(errors.is_empty());
    }
}
