use log::debug;

use crate::{amount::Amount, catalog::Catalog, sales::Sale};

/// Totals `sales` at the unit prices in `catalog`.
///
/// Each sale whose product is in the catalog adds `price * quantity` to the
/// total, in the order given. A sale for any other product adds nothing, and
/// instead produces one message in the returned error list.
///
/// # Examples
///
/// ```
/// # use sales_total::{compute_total, Amount, Catalog, Sale};
/// let mut catalog = Catalog::new();
/// catalog.insert("Pen", Amount::from(1.5));
/// let (total, errors) = compute_total(
///     &catalog,
///     &[Sale::new("Pen", 10.0), Sale::new("Ghost", 2.0)],
/// );
/// assert_eq!(total.to_string(), "15.00");
/// assert_eq!(
///     errors,
///     vec!["Product 'Ghost' does not exist in the catalog. Record skipped."],
/// );
/// ```
#[must_use]
pub fn compute_total(catalog: &Catalog, sales: &[Sale]) -> (Amount, Vec<String>) {
    let mut total = Amount::default();
    let mut errors = Vec::new();
    for sale in sales {
        let Some(price) = catalog.price(&sale.product) else {
            errors.push(format!(
                "Product '{}' does not exist in the catalog. Record skipped.",
                sale.product
            ));
            continue;
        };
        total += price * sale.quantity;
    }
    debug!("total: {total} from {} sales, {} unresolved", sales.len(), errors.len());
    (total, errors)
}
