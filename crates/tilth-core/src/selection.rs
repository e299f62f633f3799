//! Selection and presentation state types.

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// Whether the catalog shows the paginated list or one item in full.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    List,
    Detail,
}

/// Selected item and display mode.
///
/// Returning to the list keeps `selected_id` so the same item can be
/// re-entered without selecting it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_id: Option<ItemId>,

    #[serde(default)]
    pub mode: DisplayMode,
}

impl SelectionState {
    pub fn is_detail(&self) -> bool {
        self.mode == DisplayMode::Detail
    }
}

/// Grid or list layout of the result page. Presentation only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Grid,
    List,
}

/// Collapsible sections of the filter sidebar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FilterSection {
    Categories,
    Subcategories,
    Locations,
    Availability,
    Price,
}

impl FilterSection {
    pub const ALL: [FilterSection; 5] = [
        FilterSection::Categories,
        FilterSection::Subcategories,
        FilterSection::Locations,
        FilterSection::Availability,
        FilterSection::Price,
    ];
}
