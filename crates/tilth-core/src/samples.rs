//! Bundled sample datasets.
//!
//! The storefront ships with static catalogs for each section so it can run
//! without a database. They parse through the same schemas as any other
//! source.

use crate::error::CatalogError;
use crate::schemas::{InventoryProduct, Product, RentalTool};

const RENTALS_JSON: &str = include_str!("../data/rentals.json");
const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const INVENTORY_JSON: &str = include_str!("../data/inventory.json");

/// The fourteen tools of the public rental catalog.
pub fn rental_tools() -> Result<Vec<RentalTool>, CatalogError> {
    Ok(serde_json::from_str(RENTALS_JSON)?)
}

/// The public product catalog.
pub fn products() -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(PRODUCTS_JSON)?)
}

/// The admin inventory list.
pub fn inventory() -> Result<Vec<InventoryProduct>, CatalogError> {
    Ok(serde_json::from_str(INVENTORY_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::item::CatalogItem;

    #[test]
    fn test_rental_sample_shape() {
        let tools = rental_tools().unwrap();
        assert_eq!(tools.len(), 14);
        assert_eq!(tools.iter().filter(|t| !t.is_available()).count(), 3);

        let catalog = Catalog::new(tools).unwrap();
        assert_eq!(catalog.facets().categories.len(), 9);
        assert_eq!(catalog.price_bounds(), Some((65.0, 300.0)));
    }

    #[test]
    fn test_product_sample_shape() {
        let products = products().unwrap();
        assert_eq!(products.len(), 12);

        let catalog = Catalog::new(products).unwrap();
        assert_eq!(
            catalog.facets().categories,
            vec!["fertilizers", "tools", "equipment"]
        );
    }

    #[test]
    fn test_inventory_sample_shape() {
        let rows = inventory().unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows.iter().filter(|r| r.featured).count(), 3);
        assert_eq!(rows.iter().filter(|r| r.is_low_stock()).count(), 1);
    }
}
