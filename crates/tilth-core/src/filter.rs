//! Filter state types.

use serde::{Deserialize, Serialize};

/// Inclusive price bounds. An absent bound is unconstrained on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    /// Create a range with both bounds optional.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Range bounded on both sides.
    pub fn between(min: f64, max: f64) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: f64) -> Self {
        Self::new(None, Some(max))
    }

    /// Repair a malformed range.
    ///
    /// Non-finite bounds are dropped, negative bounds are raised to zero and
    /// inverted bounds are swapped. Returns `None` when nothing constrains.
    pub fn normalized(self) -> Option<PriceRange> {
        let clean = |bound: Option<f64>| bound.filter(|b| b.is_finite()).map(|b| b.max(0.0));
        let (mut min, mut max) = (clean(self.min), clean(self.max));

        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                min = Some(hi);
                max = Some(lo);
            }
        }

        if min.is_none() && max.is_none() {
            None
        } else {
            Some(PriceRange { min, max })
        }
    }

    /// Check whether a price falls inside the range (both ends inclusive).
    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Independent predicates narrowing a catalog.
///
/// Every field at its default is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive substring matched against name and description.
    #[serde(default)]
    pub search_term: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    pub available_only: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
}

impl FilterState {
    /// Check if no predicate is active.
    pub fn is_identity(&self) -> bool {
        self.search_needle().is_none()
            && self.category.is_none()
            && self.subcategory.is_none()
            && self.location.is_none()
            && !self.available_only
            && self.price_range.is_none()
    }

    /// Lowercased, trimmed search term, or `None` when it constrains nothing.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_term.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Number of active predicates, for "N filters applied" badges.
    pub fn active_count(&self) -> usize {
        [
            self.search_needle().is_some(),
            self.category.is_some(),
            self.subcategory.is_some(),
            self.location.is_some(),
            self.available_only,
            self.price_range.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

/// Filter dimensions a catalog type supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDimensions {
    pub category: bool,
    pub subcategory: bool,
    pub location: bool,
    pub availability: bool,
    pub price_range: bool,
}

impl FilterDimensions {
    /// Every dimension enabled.
    pub const ALL: FilterDimensions = FilterDimensions {
        category: true,
        subcategory: true,
        location: true,
        availability: true,
        price_range: true,
    };
}

/// Treat blank selector values ("", "All") as "no constraint".
pub(crate) fn normalize_selector(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && !v.eq_ignore_ascii_case("all")
    })
}

impl FilterState {
    /// Set the category predicate; blank and "All" clear it.
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = normalize_selector(category);
        self
    }

    /// Set the subcategory predicate; blank and "All" clear it.
    pub fn with_subcategory(mut self, subcategory: Option<String>) -> Self {
        self.subcategory = normalize_selector(subcategory);
        self
    }

    /// Set the location predicate; blank and "All" clear it.
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = normalize_selector(location);
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_available_only(mut self, available_only: bool) -> Self {
        self.available_only = available_only;
        self
    }

    /// Set the price predicate, repairing malformed bounds.
    pub fn with_price_range(mut self, range: Option<PriceRange>) -> Self {
        self.price_range = range.and_then(PriceRange::normalized);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let state = FilterState::default();
        assert!(state.is_identity());
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn test_whitespace_search_is_identity() {
        let state = FilterState::default().with_search_term("   ");
        assert!(state.is_identity());
        assert!(state.search_needle().is_none());
    }

    #[test]
    fn test_search_needle_lowercases() {
        let state = FilterState::default().with_search_term("  TracTor ");
        assert_eq!(state.search_needle().as_deref(), Some("tractor"));
    }

    #[test]
    fn test_blank_and_all_selectors_clear() {
        let state = FilterState::default()
            .with_category(Some(String::new()))
            .with_subcategory(Some("All".to_string()))
            .with_location(Some("Ho Farm Hub".to_string()));
        assert!(state.category.is_none());
        assert!(state.subcategory.is_none());
        assert_eq!(state.location.as_deref(), Some("Ho Farm Hub"));
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn test_price_range_inclusive() {
        let range = PriceRange::between(100.0, 250.0);
        assert!(range.contains(100.0));
        assert!(range.contains(250.0));
        assert!(!range.contains(99.99));
        assert!(!range.contains(250.01));
    }

    #[test]
    fn test_price_range_open_sides() {
        assert!(PriceRange::at_least(50.0).contains(10_000.0));
        assert!(!PriceRange::at_least(50.0).contains(49.0));
        assert!(PriceRange::at_most(50.0).contains(0.0));
    }

    #[test]
    fn test_price_range_swaps_inverted_bounds() {
        let range = PriceRange::between(300.0, 100.0).normalized().unwrap();
        assert_eq!(range.min, Some(100.0));
        assert_eq!(range.max, Some(300.0));
    }

    #[test]
    fn test_price_range_drops_garbage_bounds() {
        assert!(PriceRange::new(Some(f64::NAN), None).normalized().is_none());

        let range = PriceRange::new(Some(-20.0), Some(f64::INFINITY))
            .normalized()
            .unwrap();
        assert_eq!(range.min, Some(0.0));
        assert_eq!(range.max, None);
    }

    #[test]
    fn test_with_price_range_normalizes() {
        let state = FilterState::default().with_price_range(Some(PriceRange::default()));
        assert!(state.price_range.is_none());
        assert!(state.is_identity());
    }
}
