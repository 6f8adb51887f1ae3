use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use homevault_core::{Entity, ItemId, ValueObject};

/// Physical condition of a tracked possession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Warranty coverage attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warranty {
    pub expiry_date: NaiveDate,
    pub provider: String,
}

impl ValueObject for Warranty {}

/// A single tracked household possession.
///
/// `category` and `room` are display-name references into the catalog lists,
/// not foreign keys: renaming or deleting a catalog entry does not cascade to
/// items referencing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub room: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: f64,
    pub current_value: f64,
    pub serial_number: Option<String>,
    pub model: Option<String>,
    pub brand: Option<String>,
    pub condition: Condition,
    /// Photo references in display order.
    pub photos: Vec<String>,
    pub receipt: Option<String>,
    pub warranty: Option<Warranty>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    /// Set once at creation, never changed afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation of the item.
    pub updated_at: DateTime<Utc>,
}

/// Creation payload: an item without identifier and timestamps.
///
/// Stored as given — no validation is performed on any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub category: String,
    pub room: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: f64,
    pub current_value: f64,
    pub serial_number: Option<String>,
    pub model: Option<String>,
    pub brand: Option<String>,
    pub condition: Condition,
    pub photos: Vec<String>,
    pub receipt: Option<String>,
    pub warranty: Option<Warranty>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
}

/// Partial update merged onto an existing item.
///
/// `None` leaves a field untouched. Clearable fields use a double `Option`:
/// the outer one selects whether the field is touched, the inner one carries
/// the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub room: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub current_value: Option<f64>,
    pub serial_number: Option<Option<String>>,
    pub model: Option<Option<String>>,
    pub brand: Option<Option<String>>,
    pub condition: Option<Condition>,
    pub photos: Option<Vec<String>>,
    pub receipt: Option<Option<String>>,
    pub warranty: Option<Option<Warranty>>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<Option<String>>,
}

impl InventoryItem {
    /// Materialize a creation payload into an item.
    ///
    /// The caller (the store) assigns the identifier and the creation instant;
    /// both timestamps start out equal.
    pub fn create(id: ItemId, data: NewItem, at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            category: data.category,
            room: data.room,
            purchase_date: data.purchase_date,
            purchase_price: data.purchase_price,
            current_value: data.current_value,
            serial_number: data.serial_number,
            model: data.model,
            brand: data.brand,
            condition: data.condition,
            photos: data.photos,
            receipt: data.receipt,
            warranty: data.warranty,
            tags: data.tags,
            notes: data.notes,
            created_at: at,
            updated_at: at,
        }
    }

    /// Shallow-merge a patch onto this item and refresh the updated timestamp.
    ///
    /// Only fields present in the patch change; `created_at` is never touched.
    pub fn apply_patch(&mut self, patch: ItemPatch, at: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(room) = patch.room {
            self.room = room;
        }
        if let Some(purchase_date) = patch.purchase_date {
            self.purchase_date = purchase_date;
        }
        if let Some(purchase_price) = patch.purchase_price {
            self.purchase_price = purchase_price;
        }
        if let Some(current_value) = patch.current_value {
            self.current_value = current_value;
        }
        if let Some(serial_number) = patch.serial_number {
            self.serial_number = serial_number;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(photos) = patch.photos {
            self.photos = photos;
        }
        if let Some(receipt) = patch.receipt {
            self.receipt = receipt;
        }
        if let Some(warranty) = patch.warranty {
            self.warranty = warranty;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self.updated_at = at;
    }

    /// Gain (positive) or loss (negative) against the purchase price.
    pub fn value_change(&self) -> f64 {
        self.current_value - self.purchase_price
    }

    /// Gain/loss as a percentage of the purchase price.
    ///
    /// `None` when the purchase price is not positive (no meaningful base).
    pub fn value_change_percent(&self) -> Option<f64> {
        if self.purchase_price > 0.0 {
            Some(self.value_change() / self.purchase_price * 100.0)
        } else {
            None
        }
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> NewItem {
        NewItem {
            name: "MacBook Pro 16\"".to_string(),
            description: "Apple MacBook Pro 16-inch laptop".to_string(),
            category: "Electronics".to_string(),
            room: "Office".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            purchase_price: 2499.0,
            current_value: 2000.0,
            serial_number: Some("ABC123456".to_string()),
            model: Some("MacBook Pro 16\"".to_string()),
            brand: Some("Apple".to_string()),
            condition: Condition::Excellent,
            photos: vec![],
            receipt: None,
            warranty: None,
            tags: vec!["work".to_string(), "computer".to_string()],
            notes: Some("Primary work laptop".to_string()),
        }
    }

    #[test]
    fn create_stamps_both_timestamps_equal() {
        let at = Utc::now();
        let item = InventoryItem::create(ItemId::new(), laptop(), at);
        assert_eq!(item.created_at, at);
        assert_eq!(item.updated_at, at);
    }

    #[test]
    fn patch_changes_only_supplied_fields() {
        let created = Utc::now();
        let mut item = InventoryItem::create(ItemId::new(), laptop(), created);

        let later = created + chrono::Duration::seconds(5);
        item.apply_patch(
            ItemPatch {
                current_value: Some(1800.0),
                notes: Some(None),
                ..ItemPatch::default()
            },
            later,
        );

        assert_eq!(item.current_value, 1800.0);
        assert_eq!(item.notes, None);
        // Everything else untouched.
        assert_eq!(item.name, "MacBook Pro 16\"");
        assert_eq!(item.purchase_price, 2499.0);
        assert_eq!(item.serial_number.as_deref(), Some("ABC123456"));
        assert_eq!(item.created_at, created);
        assert_eq!(item.updated_at, later);
    }

    #[test]
    fn empty_patch_still_refreshes_updated_at() {
        let created = Utc::now();
        let mut item = InventoryItem::create(ItemId::new(), laptop(), created);

        let later = created + chrono::Duration::seconds(1);
        item.apply_patch(ItemPatch::default(), later);

        assert_eq!(item.updated_at, later);
        assert_eq!(item.created_at, created);
    }

    #[test]
    fn double_option_distinguishes_clear_from_leave() {
        let mut item = InventoryItem::create(ItemId::new(), laptop(), Utc::now());

        // Outer None: leave as-is.
        item.apply_patch(ItemPatch::default(), Utc::now());
        assert_eq!(item.brand.as_deref(), Some("Apple"));

        // Some(None): clear.
        item.apply_patch(
            ItemPatch {
                brand: Some(None),
                ..ItemPatch::default()
            },
            Utc::now(),
        );
        assert_eq!(item.brand, None);

        // Some(Some(_)): replace.
        item.apply_patch(
            ItemPatch {
                brand: Some(Some("Apple Inc.".to_string())),
                ..ItemPatch::default()
            },
            Utc::now(),
        );
        assert_eq!(item.brand.as_deref(), Some("Apple Inc."));
    }

    #[test]
    fn value_change_reports_loss_and_gain() {
        let mut item = InventoryItem::create(ItemId::new(), laptop(), Utc::now());
        assert_eq!(item.value_change(), -499.0);

        item.current_value = 2600.0;
        assert_eq!(item.value_change(), 101.0);
    }

    #[test]
    fn value_change_percent_needs_a_positive_base() {
        let mut item = InventoryItem::create(ItemId::new(), laptop(), Utc::now());
        let pct = item.value_change_percent().unwrap();
        assert!((pct - (-499.0 / 2499.0 * 100.0)).abs() < 1e-9);

        item.purchase_price = 0.0;
        assert_eq!(item.value_change_percent(), None);
    }

    #[test]
    fn condition_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Condition::Excellent).unwrap(), "\"excellent\"");
        assert_eq!(serde_json::to_string(&Condition::Poor).unwrap(), "\"poor\"");
        let parsed: Condition = serde_json::from_str("\"fair\"").unwrap();
        assert_eq!(parsed, Condition::Fair);
    }
}
