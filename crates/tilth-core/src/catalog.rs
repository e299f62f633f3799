//! Validated, immutable catalog snapshots.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::error::CatalogError;
use crate::item::{CatalogItem, ItemId};

/// An ordered, read-only collection of items for one storefront section.
///
/// Construction enforces the identity contract (ids are unique) and rejects
/// prices the engine cannot order. A catalog is never edited in place; a
/// changed catalog is a new snapshot.
#[derive(Debug, Clone)]
pub struct Catalog<T: CatalogItem> {
    items: Vec<T>,
    index: HashMap<ItemId, usize>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Build a catalog, validating ids and prices.
    pub fn new(items: Vec<T>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            let price = item.price();
            if !price.is_finite() || price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: item.id().clone(),
                    price,
                });
            }
            if index.insert(item.id().clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(item.id().clone()));
            }
        }

        tracing::debug!("Built {} catalog with {} items", T::KIND, items.len());
        Ok(Self { items, index })
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&T> {
        self.index.get(id).and_then(|&i| self.items.get(i))
    }

    /// Check whether an id is present.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Distinct attribute values for populating filter controls.
    pub fn facets(&self) -> Facets {
        Facets {
            categories: distinct(self.items.iter().map(|i| Some(i.category()))),
            subcategories: distinct(self.items.iter().map(|i| i.subcategory())),
            locations: distinct(self.items.iter().map(|i| i.location())),
        }
    }

    /// Lowest and highest canonical price, or `None` when empty.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.items.iter().map(|i| i.price()).fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
    }

    /// Consume the snapshot, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: CatalogItem> Default for Catalog<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: CatalogItem> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Distinct values of the selector attributes, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
    pub locations: Vec<String>,
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .flatten()
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::InventoryProduct;

    fn row(id: u64, name: &str, category: &str, price: f64) -> InventoryProduct {
        InventoryProduct {
            id: ItemId::from(id),
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock: 10,
            image: None,
            featured: false,
        }
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(vec![
            row(1, "Premium Tractor", "Heavy Machinery", 45000.0),
            row(2, "Irrigation System", "Irrigation", 2500.0),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&ItemId::from(2)));
        assert_eq!(catalog.get(&ItemId::from(1)).unwrap().name, "Premium Tractor");
        assert!(catalog.get(&ItemId::from(9)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            row(1, "Premium Tractor", "Heavy Machinery", 45000.0),
            row(1, "Harvest Combine", "Heavy Machinery", 38000.0),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == ItemId::from(1)));
    }

    #[test]
    fn test_invalid_price_rejected() {
        let negative = Catalog::new(vec![row(1, "Sickle", "Hand Tools", -1.0)]);
        assert!(matches!(negative, Err(CatalogError::InvalidPrice { .. })));

        let nan = Catalog::new(vec![row(1, "Sickle", "Hand Tools", f64::NAN)]);
        assert!(matches!(nan, Err(CatalogError::InvalidPrice { .. })));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Catalog<InventoryProduct> = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.price_bounds().is_none());
        assert_eq!(catalog.facets(), Facets::default());
    }

    #[test]
    fn test_facets_first_appearance_order() {
        let catalog = Catalog::new(vec![
            row(1, "Premium Tractor", "Heavy Machinery", 45000.0),
            row(2, "Irrigation System", "Irrigation", 2500.0),
            row(3, "Harvest Combine", "Heavy Machinery", 38000.0),
            row(4, "Soil Tester Kit", "Hand Tools", 120.0),
        ])
        .unwrap();

        let facets = catalog.facets();
        assert_eq!(
            facets.categories,
            vec!["Heavy Machinery", "Irrigation", "Hand Tools"]
        );
        assert!(facets.subcategories.is_empty());
        assert!(facets.locations.is_empty());
    }

    #[test]
    fn test_price_bounds() {
        let catalog = Catalog::new(vec![
            row(1, "Premium Tractor", "Heavy Machinery", 45000.0),
            row(2, "Harvesting Sickle", "Hand Tools", 35.0),
            row(3, "Sprinkler System", "Irrigation", 750.0),
        ])
        .unwrap();
        assert_eq!(catalog.price_bounds(), Some((35.0, 45000.0)));
    }
}
