//! Plain-text rendering of catalog pages and detail views.

use tilth_core::{CatalogItem, Facets, InventoryProduct, Product, RentalTool};
use tilth_query::CatalogPage;

/// How one item is shown as a list row and as a detail view.
pub trait Render: CatalogItem {
    fn row(&self) -> String;

    fn detail(&self) -> Vec<(&'static str, String)>;
}

impl Render for RentalTool {
    fn row(&self) -> String {
        format!(
            "{:>4}  {:<34} {:<20} ${:>7.2}/day  {:.1}★ ({})  {}",
            self.id,
            self.name,
            self.category,
            self.price_per_day,
            self.rating,
            self.review_count,
            if self.available { "available" } else { "rented out" }
        )
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Category", format!("{} / {}", self.category, self.subcategory)),
            ("Price", format!("${:.2} per day", self.price_per_day)),
            ("Rating", format!("{:.1} ({} reviews)", self.rating, self.review_count)),
            ("Location", self.location.clone()),
            ("Available", yes_no(self.available)),
            ("Description", self.description.clone()),
        ]
    }
}

impl Render for Product {
    fn row(&self) -> String {
        format!(
            "{:>4}  {:<34} {:<12} ${:>7.2}  {}",
            self.id,
            self.name,
            self.category,
            self.price,
            if self.in_stock { "in stock" } else { "out of stock" }
        )
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![
            ("Name", self.name.clone()),
            ("Category", self.category.clone()),
            ("Price", format!("${:.2}", self.price)),
            ("In stock", yes_no(self.in_stock)),
        ];
        if let Some(manufacturer) = &self.details.manufacturer {
            lines.push(("Manufacturer", manufacturer.clone()));
        }
        if let Some(rating) = self.details.rating {
            lines.push((
                "Rating",
                format!("{:.1} ({} reviews)", rating, self.details.reviews),
            ));
        }
        lines.push(("Description", self.description.clone()));
        lines
    }
}

impl Render for InventoryProduct {
    fn row(&self) -> String {
        format!(
            "{:>4}  {:<24} {:<16} ${:>9.2}  stock {:>4}{}{}",
            self.id,
            self.name,
            self.category,
            self.price,
            self.stock,
            if self.is_low_stock() { "  LOW" } else { "" },
            if self.featured { "  ★" } else { "" }
        )
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Category", self.category.clone()),
            ("Price", format!("${:.2}", self.price)),
            ("Stock", self.stock.to_string()),
            ("Low stock", yes_no(self.is_low_stock())),
            ("Featured", yes_no(self.featured)),
        ]
    }
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

/// Render a page with its "Showing a-b of n" footer.
pub fn page<T: Render>(page: &CatalogPage<'_, T>) -> String {
    let mut lines: Vec<String> = page.items.iter().map(|item| item.row()).collect();
    if page.is_empty() {
        lines.push("No items match the current filters.".to_string());
    }
    if let Some((first, last)) = page.range() {
        lines.push(String::new());
        lines.push(format!(
            "Showing {}-{} of {}  (page {} of {})",
            first, last, page.filtered_count, page.page, page.total_pages
        ));
    }
    terminated(lines)
}

/// Render a detail view followed by its related items.
pub fn detail<T: Render>(item: &T, related: &[&T]) -> String {
    let mut lines: Vec<String> = item
        .detail()
        .into_iter()
        .map(|(label, value)| format!("{:<13}{}", format!("{}:", label), value))
        .collect();
    if !related.is_empty() {
        lines.push(String::new());
        lines.push("Related:".to_string());
        lines.extend(related.iter().map(|r| r.row()));
    }
    terminated(lines)
}

pub fn facets(facets: &Facets) -> String {
    let sections = [
        ("Categories", &facets.categories),
        ("Subcategories", &facets.subcategories),
        ("Locations", &facets.locations),
    ];
    let mut lines = Vec::new();
    for (title, values) in sections {
        if values.is_empty() {
            continue;
        }
        lines.push(format!("{}:", title));
        lines.extend(values.iter().map(|value| format!("  {}", value)));
    }
    terminated(lines)
}

fn terminated(lines: Vec<String>) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
