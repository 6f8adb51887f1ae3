//! Built-in seed set loaded at application start.
//!
//! Nothing persists between runs, so every process begins from this fixed
//! set: eight categories, eight rooms and two example items.

use chrono::{NaiveDate, Utc};

use homevault_core::{CategoryId, ItemId, RoomId};

use crate::catalog::{Category, Room};
use crate::item::{Condition, InventoryItem, NewItem};

/// The eight built-in categories with their dashboard colors and icons.
pub fn default_categories() -> Vec<Category> {
    [
        ("Electronics", "#3B82F6", "Smartphone"),
        ("Furniture", "#10B981", "Armchair"),
        ("Appliances", "#F59E0B", "Zap"),
        ("Jewelry", "#EF4444", "Gem"),
        ("Clothing", "#8B5CF6", "Shirt"),
        ("Tools", "#6B7280", "Wrench"),
        ("Sports", "#06B6D4", "Trophy"),
        ("Books", "#84CC16", "Book"),
    ]
    .into_iter()
    .map(|(name, color, icon)| Category {
        id: CategoryId::new(),
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// The eight built-in rooms.
pub fn default_rooms() -> Vec<Room> {
    [
        "Living Room",
        "Bedroom",
        "Kitchen",
        "Bathroom",
        "Office",
        "Garage",
        "Basement",
        "Attic",
    ]
    .into_iter()
    .map(|name| Room {
        id: RoomId::new(),
        name: name.to_string(),
    })
    .collect()
}

/// Two example items so a fresh install is not an empty screen.
pub fn sample_items() -> Vec<InventoryItem> {
    let now = Utc::now();
    vec![
        InventoryItem::create(
            ItemId::new(),
            NewItem {
                name: "MacBook Pro 16\"".to_string(),
                description: "Apple MacBook Pro 16-inch laptop".to_string(),
                category: "Electronics".to_string(),
                room: "Office".to_string(),
                purchase_date: date(2023, 1, 15),
                purchase_price: 2499.0,
                current_value: 2000.0,
                serial_number: Some("ABC123456".to_string()),
                model: Some("MacBook Pro 16\"".to_string()),
                brand: Some("Apple".to_string()),
                condition: Condition::Excellent,
                photos: vec![
                    "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=400".to_string(),
                ],
                receipt: None,
                warranty: None,
                tags: vec!["work".to_string(), "computer".to_string()],
                notes: Some("Primary work laptop".to_string()),
            },
            now,
        ),
        InventoryItem::create(
            ItemId::new(),
            NewItem {
                name: "Samsung 65\" TV".to_string(),
                description: "Samsung QLED 65-inch Smart TV".to_string(),
                category: "Electronics".to_string(),
                room: "Living Room".to_string(),
                purchase_date: date(2022, 11, 20),
                purchase_price: 1200.0,
                current_value: 900.0,
                serial_number: Some("SAM789".to_string()),
                model: Some("QN65Q70A".to_string()),
                brand: Some("Samsung".to_string()),
                condition: Condition::Good,
                photos: vec![
                    "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=400"
                        .to_string(),
                ],
                receipt: None,
                warranty: None,
                tags: vec!["entertainment".to_string()],
                notes: None,
            },
            now,
        ),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed constants are known-valid; degrade to the epoch rather than panic.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
