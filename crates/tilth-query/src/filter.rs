//! Filter stage: narrow a catalog to the items matching every active predicate.

use tilth_core::{CatalogItem, FilterState};

/// Return the items satisfying all active predicates, in catalog order.
///
/// Pure: the same inputs always give the same output, and an all-default
/// `FilterState` returns every item unchanged.
pub fn filter<'a, T: CatalogItem>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let needle = state.search_needle();
    items
        .iter()
        .filter(|item| matches(*item, state, needle.as_deref()))
        .collect()
}

/// Check one item against a filter state.
///
/// `needle` is the pre-lowered search term so it is not recomputed per item.
pub fn matches<T: CatalogItem>(item: &T, state: &FilterState, needle: Option<&str>) -> bool {
    if let Some(needle) = needle {
        let in_name = item.name().to_lowercase().contains(needle);
        let in_description = || {
            item.description()
                .is_some_and(|d| d.to_lowercase().contains(needle))
        };
        if !in_name && !in_description() {
            return false;
        }
    }

    if let Some(category) = &state.category {
        if item.category() != category {
            return false;
        }
    }

    if let Some(subcategory) = &state.subcategory {
        if item.subcategory() != Some(subcategory.as_str()) {
            return false;
        }
    }

    if let Some(location) = &state.location {
        if item.location() != Some(location.as_str()) {
            return false;
        }
    }

    if state.available_only && !item.is_available() {
        return false;
    }

    if let Some(range) = &state.price_range {
        if !range.contains(item.price()) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilth_core::{samples, Catalog, ItemId, PriceRange, RentalTool};

    fn rentals() -> Catalog<RentalTool> {
        Catalog::new(samples::rental_tools().unwrap()).unwrap()
    }

    fn ids(items: &[&RentalTool]) -> Vec<u64> {
        items.iter().map(|t| t.id.0.parse().unwrap()).collect()
    }

    #[test]
    fn test_default_state_is_identity() {
        let catalog = rentals();
        let result = filter(catalog.items(), &FilterState::default());
        assert_eq!(result.len(), catalog.len());
        assert!(result.iter().zip(catalog.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_empty_catalog_gives_empty_result() {
        let items: Vec<RentalTool> = Vec::new();
        let state = FilterState::default().with_search_term("tractor");
        assert!(filter(&items, &state).is_empty());
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let catalog = rentals();
        let state = FilterState::default().with_search_term("TRACTOR");
        let result = filter(catalog.items(), &state);

        let by_name: Vec<_> = catalog
            .iter()
            .filter(|t| t.name.to_lowercase().contains("tractor"))
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(by_name, vec![ItemId::from(1)]);
        assert!(result.iter().any(|t| t.name == "Tractor - Medium Duty"));

        // The post hole digger is a tractor attachment per its description.
        assert_eq!(ids(&result), vec![1, 6]);
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = rentals();
        let state = FilterState::default().with_search_term("boom");
        // Boom Lift by name, sprayer by its "40-foot boom" description.
        assert_eq!(ids(&filter(catalog.items(), &state)), vec![8, 12]);
    }

    #[test]
    fn test_available_only() {
        let catalog = rentals();
        let state = FilterState::default().with_available_only(true);
        let result = filter(catalog.items(), &state);
        assert_eq!(result.len(), 11);
        assert!(result.iter().all(|t| t.available));
    }

    #[test]
    fn test_exact_category_and_subcategory() {
        let catalog = rentals();
        let state = FilterState::default()
            .with_category(Some("Planting Equipment".to_string()))
            .with_subcategory(Some("Seeders".to_string()));
        assert_eq!(ids(&filter(catalog.items(), &state)), vec![2, 13, 14]);

        let partial = FilterState::default().with_category(Some("Planting".to_string()));
        assert!(filter(catalog.items(), &partial).is_empty());
    }

    #[test]
    fn test_location() {
        let catalog = rentals();
        let state =
            FilterState::default().with_location(Some("Western Valley Depot".to_string()));
        assert_eq!(ids(&filter(catalog.items(), &state)), vec![3, 14]);
    }

    #[test]
    fn test_price_range_inclusive_bounds() {
        let catalog = rentals();
        let state = FilterState::default().with_price_range(Some(PriceRange::between(85.0, 110.0)));
        assert_eq!(ids(&filter(catalog.items(), &state)), vec![5, 7, 9, 10]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let catalog = rentals();
        let state = FilterState::default()
            .with_category(Some("Maintenance".to_string()))
            .with_available_only(true);
        assert_eq!(ids(&filter(catalog.items(), &state)), vec![5]);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = rentals();
        let states = [
            FilterState::default().with_search_term("e"),
            FilterState::default().with_available_only(true),
            FilterState::default().with_price_range(Some(PriceRange::at_most(120.0))),
            FilterState::default().with_search_term("zzz"),
        ];

        for state in &states {
            let result = filter(catalog.items(), state);
            let mut cursor = catalog.iter();
            for item in &result {
                assert!(cursor.any(|c| c.id == item.id), "not an ordered subsequence");
            }
        }
    }

    #[test]
    fn test_filter_is_repeatable() {
        let catalog = rentals();
        let state = FilterState::default().with_search_term("heavy");
        assert_eq!(
            ids(&filter(catalog.items(), &state)),
            ids(&filter(catalog.items(), &state))
        );
    }
}
