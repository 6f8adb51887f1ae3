//! The inventory store: single source of truth for items, reference lists
//! and the current filter/sort view state.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use homevault_core::{CategoryId, ItemId, RoomId};

use crate::catalog::{Category, NewCategory, NewRoom, Room};
use crate::filter::{FilterPatch, ItemFilter, SortField, SortOrder};
use crate::item::{InventoryItem, ItemPatch, NewItem};
use crate::seed;

/// Everything the store owns, guarded as a single unit.
#[derive(Debug, Clone)]
struct StoreState {
    items: Vec<InventoryItem>,
    categories: Vec<Category>,
    rooms: Vec<Room>,
    filter: ItemFilter,
    sort_field: SortField,
    sort_order: SortOrder,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            categories: Vec::new(),
            rooms: Vec::new(),
            filter: ItemFilter::default(),
            sort_field: SortField::Name,
            sort_order: SortOrder::Ascending,
        }
    }
}

/// In-memory inventory store.
///
/// One lock guards the whole state, so every operation runs to completion as
/// a unit and a reader never observes the store mid-mutation. Construct a
/// single instance at application start and share it by reference; tests
/// build their own instance for isolation.
///
/// Mutations on unknown identifiers are silent no-ops - the store raises no
/// errors and performs no validation on stored content.
#[derive(Debug)]
pub struct InventoryStore {
    inner: RwLock<StoreState>,
}

impl InventoryStore {
    /// Create an empty store (no items, no reference lists).
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState::empty()),
        }
    }

    /// Create a store loaded with the built-in seed set: eight categories,
    /// eight rooms and the example items.
    pub fn seeded() -> Self {
        let mut state = StoreState::empty();
        state.categories = seed::default_categories();
        state.rooms = seed::default_rooms();
        state.items = seed::sample_items();
        Self {
            inner: RwLock::new(state),
        }
    }

    // ---- mutations ----

    /// Append a new item, assigning a fresh identifier and stamping both
    /// timestamps. The payload is stored as given. Returns the new id.
    pub fn add_item(&self, data: NewItem) -> ItemId {
        let id = ItemId::new();
        let now = Utc::now();
        if let Ok(mut state) = self.inner.write() {
            state.items.push(InventoryItem::create(id, data, now));
            tracing::debug!(item_id = %id, "inventory item added");
        }
        id
    }

    /// Shallow-merge a partial update onto the item with this identifier and
    /// refresh its updated timestamp. Unknown identifiers are a silent no-op.
    pub fn update_item(&self, id: &ItemId, patch: ItemPatch) {
        let now = Utc::now();
        if let Ok(mut state) = self.inner.write() {
            if let Some(item) = state.items.iter_mut().find(|item| item.id == *id) {
                item.apply_patch(patch, now);
                tracing::debug!(item_id = %id, "inventory item updated");
            }
        }
    }

    /// Remove the item with this identifier; no-op if absent.
    pub fn delete_item(&self, id: &ItemId) {
        if let Ok(mut state) = self.inner.write() {
            let before = state.items.len();
            state.items.retain(|item| item.id != *id);
            if state.items.len() < before {
                tracing::debug!(item_id = %id, "inventory item deleted");
            }
        }
    }

    /// Append a category. Duplicate names are permitted.
    pub fn add_category(&self, data: NewCategory) -> CategoryId {
        let id = CategoryId::new();
        if let Ok(mut state) = self.inner.write() {
            state.categories.push(Category {
                id,
                name: data.name,
                color: data.color,
                icon: data.icon,
            });
            tracing::debug!(category_id = %id, "category added");
        }
        id
    }

    /// Append a room. Duplicate names are permitted.
    pub fn add_room(&self, data: NewRoom) -> RoomId {
        let id = RoomId::new();
        if let Ok(mut state) = self.inner.write() {
            state.rooms.push(Room {
                id,
                name: data.name,
            });
            tracing::debug!(room_id = %id, "room added");
        }
        id
    }

    /// Merge partial filter settings; fields omitted from the patch keep
    /// their current value.
    pub fn set_filters(&self, patch: FilterPatch) {
        if let Ok(mut state) = self.inner.write() {
            state.filter.apply_patch(patch);
        }
    }

    /// Restore the default filter settings.
    pub fn reset_filters(&self) {
        if let Ok(mut state) = self.inner.write() {
            state.filter = ItemFilter::default();
        }
    }

    /// Replace the sort settings wholesale.
    pub fn set_sorting(&self, field: SortField, order: SortOrder) {
        if let Ok(mut state) = self.inner.write() {
            state.sort_field = field;
            state.sort_order = order;
        }
    }

    // ---- derived queries (computed fresh per call, never cached) ----

    /// Items passing the current filters, in the current sort order.
    ///
    /// The sort is stable: ties keep their insertion-order position.
    pub fn filtered_items(&self) -> Vec<InventoryItem> {
        let state = match self.inner.read() {
            Ok(state) => state,
            Err(_) => return Vec::new(),
        };

        let mut items: Vec<InventoryItem> = state
            .items
            .iter()
            .filter(|item| state.filter.matches(item))
            .cloned()
            .collect();

        let (field, order) = (state.sort_field, state.sort_order);
        items.sort_by(|a, b| order.apply(field.compare(a, b)));
        items
    }

    /// Sum of current values across ALL items; filters do not apply.
    pub fn total_value(&self) -> f64 {
        match self.inner.read() {
            Ok(state) => state.items.iter().map(|item| item.current_value).sum(),
            Err(_) => 0.0,
        }
    }

    /// Item count per category name, over ALL items.
    ///
    /// Categories with no items are absent rather than reported as zero.
    pub fn items_by_category(&self) -> HashMap<String, usize> {
        let state = match self.inner.read() {
            Ok(state) => state,
            Err(_) => return HashMap::new(),
        };

        let mut counts = HashMap::new();
        for item in &state.items {
            *counts.entry(item.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    // ---- read accessors ----

    /// Full collection in insertion order.
    pub fn items(&self) -> Vec<InventoryItem> {
        match self.inner.read() {
            Ok(state) => state.items.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Point lookup by identifier.
    pub fn item(&self, id: &ItemId) -> Option<InventoryItem> {
        let state = self.inner.read().ok()?;
        state.items.iter().find(|item| item.id == *id).cloned()
    }

    /// Number of items in the full collection.
    pub fn item_count(&self) -> usize {
        match self.inner.read() {
            Ok(state) => state.items.len(),
            Err(_) => 0,
        }
    }

    /// Category reference list in insertion order.
    pub fn categories(&self) -> Vec<Category> {
        match self.inner.read() {
            Ok(state) => state.categories.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Room reference list in insertion order.
    pub fn rooms(&self) -> Vec<Room> {
        match self.inner.read() {
            Ok(state) => state.rooms.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Current filter settings.
    pub fn filters(&self) -> ItemFilter {
        match self.inner.read() {
            Ok(state) => state.filter.clone(),
            Err(_) => ItemFilter::default(),
        }
    }

    /// Current sort settings.
    pub fn sorting(&self) -> (SortField, SortOrder) {
        match self.inner.read() {
            Ok(state) => (state.sort_field, state.sort_order),
            Err(_) => (SortField::Name, SortOrder::Ascending),
        }
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}
