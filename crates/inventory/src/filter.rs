//! Filter and sort settings for the item list view.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use homevault_core::ValueObject;

use crate::item::{Condition, InventoryItem};

/// Value range applied when no explicit bounds are set.
pub const DEFAULT_VALUE_RANGE: (f64, f64) = (0.0, 10_000.0);

/// Field the item list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Category,
    Room,
    PurchaseDate,
    CurrentValue,
}

/// Direction of the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Active predicates narrowing the displayed item list.
///
/// A `None` selector means "no filter"; the search string matches everything
/// while empty. All predicates must hold for an item to pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFilter {
    /// Case-insensitive substring matched against name and description only.
    pub search: String,
    pub category: Option<String>,
    pub room: Option<String>,
    pub condition: Option<Condition>,
    /// Inclusive bounds on the current value.
    pub value_range: (f64, f64),
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            room: None,
            condition: None,
            value_range: DEFAULT_VALUE_RANGE,
        }
    }
}

impl ValueObject for ItemFilter {}

/// Partial filter update; omitted fields keep their current value.
///
/// Same double-`Option` convention as [`crate::item::ItemPatch`]: `Some(None)`
/// clears a selector back to "no filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub category: Option<Option<String>>,
    pub room: Option<Option<String>>,
    pub condition: Option<Option<Condition>>,
    pub value_range: Option<(f64, f64)>,
}

impl ItemFilter {
    /// True when the item passes every active predicate.
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty()
            || item.name.to_lowercase().contains(&search)
            || item.description.to_lowercase().contains(&search);
        let matches_category = self
            .category
            .as_ref()
            .map_or(true, |category| item.category == *category);
        let matches_room = self.room.as_ref().map_or(true, |room| item.room == *room);
        let matches_condition = self
            .condition
            .map_or(true, |condition| item.condition == condition);
        let (low, high) = self.value_range;
        let matches_value = item.current_value >= low && item.current_value <= high;

        matches_search && matches_category && matches_room && matches_condition && matches_value
    }

    /// Shallow-merge a patch; fields absent from the patch are untouched.
    pub fn apply_patch(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(room) = patch.room {
            self.room = room;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(value_range) = patch.value_range {
            self.value_range = value_range;
        }
    }
}

impl SortField {
    /// Typed comparator for this field.
    ///
    /// String fields compare case-insensitively, the purchase date as a
    /// calendar date, the current value numerically (`total_cmp`, so the
    /// ordering stays total even for pathological stored values).
    pub fn compare(self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            SortField::Name => cmp_case_insensitive(&a.name, &b.name),
            SortField::Category => cmp_case_insensitive(&a.category, &b.category),
            SortField::Room => cmp_case_insensitive(&a.room, &b.room),
            SortField::PurchaseDate => a.purchase_date.cmp(&b.purchase_date),
            SortField::CurrentValue => a.current_value.total_cmp(&b.current_value),
        }
    }
}

impl SortOrder {
    /// Orient a comparison result: descending negates it.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
