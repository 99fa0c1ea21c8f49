use log::debug;
use serde_json::Value;

use std::collections::BTreeMap;

use crate::{
    amount::Amount,
    validate::{number_field, text_field},
};

/// Maps product titles to unit prices.
///
/// To build a `Catalog` from decoded JSON, use [`Catalog::from_json`].
#[derive(Debug, Default, PartialEq)]
pub struct Catalog {
    prices: BTreeMap<String, Amount>,
}

impl Catalog {
    /// Creates a new, empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `data`, which should be a JSON array of product
    /// objects of the form:
    ///
    /// ```json
    /// { "title": "Pen", "price": 1.5 }
    /// ```
    ///
    /// Other fields are ignored. Items that are not objects, or whose `title`
    /// or `price` is invalid, are skipped, and a message describing each one
    /// is returned alongside the catalog. If `data` is not an array at all,
    /// the catalog is empty and there is exactly one message.
    ///
    /// A title that appears more than once takes the price of its last
    /// occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// # use serde_json::json;
    /// # use sales_total::Catalog;
    /// let (catalog, errors) = Catalog::from_json(&json!([
    ///     {"title": "Pen", "price": 1.5},
    ///     {"title": "Pencil", "price": "cheap"},
    /// ]));
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.price("Pen").unwrap().value(), 1.5);
    /// assert_eq!(
    ///     errors,
    ///     vec!["Catalog item #2 has an invalid 'price' field for product 'Pencil'."],
    /// );
    /// ```
    #[must_use]
    pub fn from_json(data: &Value) -> (Self, Vec<String>) {
        let mut catalog = Self::new();
        let Some(items) = data.as_array() else {
            return (catalog, vec!["Catalog data must be a JSON array.".into()]);
        };
        let mut errors = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let index = index + 1;
            let Some(object) = item.as_object() else {
                errors.push(format!("Catalog item #{index} is not a JSON object."));
                continue;
            };
            let Some(title) = text_field(object, "title") else {
                errors.push(format!("Catalog item #{index} has an invalid 'title' field."));
                continue;
            };
            let Some(price) = number_field(object, "price") else {
                errors.push(format!(
                    "Catalog item #{index} has an invalid 'price' field for product '{title}'."
                ));
                continue;
            };
            catalog.insert(title, Amount::from(price));
        }
        debug!(
            "catalog: {} products from {} items, {} errors",
            catalog.len(),
            items.len(),
            errors.len()
        );
        (catalog, errors)
    }

    /// Sets the unit price of `title`, replacing any previous price.
    pub fn insert(&mut self, title: &str, price: Amount) {
        self.prices.insert(title.to_string(), price);
    }

    /// Returns the unit price of `title`, if it is in the catalog.
    #[must_use]
    pub fn price(&self, title: &str) -> Option<Amount> {
        self.prices.get(title).copied()
    }

    /// Returns the number of distinct titles in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns `true` if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
