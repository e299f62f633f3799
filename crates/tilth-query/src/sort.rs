//! Sort stage: order filtered items by the active sort key.

use std::cmp::{Ordering, Reverse};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use tilth_core::{CatalogItem, SortKey};

/// Resolve the key actually applied for a schema.
///
/// Keys the catalog does not support degrade to relevance.
pub fn effective_key<T: CatalogItem>(key: SortKey) -> SortKey {
    if T::supports_sort(key) {
        key
    } else {
        tracing::debug!("Sort key {} unsupported for {} catalog, using relevance", key, T::KIND);
        SortKey::Relevance
    }
}

/// Return a new ordering of `items`. The input is never modified.
///
/// Every ordering is stable: items that compare equal keep their input order,
/// so relevance ties do not reshuffle between calls.
pub fn sort<'a, T: CatalogItem>(items: &[&'a T], key: SortKey) -> Vec<&'a T> {
    let mut sorted = items.to_vec();

    match effective_key::<T>(key) {
        SortKey::Relevance => sorted.sort_by_key(|item| Reverse(item.review_count())),
        SortKey::PriceAsc => sorted.sort_by(|a, b| a.price().total_cmp(&b.price())),
        SortKey::PriceDesc => sorted.sort_by(|a, b| b.price().total_cmp(&a.price())),
        SortKey::RatingDesc => sorted.sort_by(|a, b| compare_rating_desc(*a, *b)),
        SortKey::NameAsc => sorted.sort_by_cached_key(|item| name_key(*item)),
        SortKey::NameDesc => sorted.sort_by_cached_key(|item| Reverse(name_key(*item))),
        SortKey::StockAsc => sorted.sort_by_key(|item| item.stock().unwrap_or(0)),
        SortKey::StockDesc => sorted.sort_by_key(|item| Reverse(item.stock().unwrap_or(0))),
    }

    sorted
}

// Unrated items sink to the bottom.
fn compare_rating_desc<T: CatalogItem>(a: &T, b: &T) -> Ordering {
    let rating = |item: &T| item.rating().unwrap_or(f64::NEG_INFINITY);
    rating(b).total_cmp(&rating(a))
}

/// Collation key: accents folded away first, then lowercase.
///
/// "Épandeur" files under E, and accented and plain spellings of the same
/// word order by the plain form before falling back to the accented one.
fn name_key<T: CatalogItem>(item: &T) -> (String, String) {
    let name = item.name();
    let folded = name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    (folded, name.to_lowercase())
}
