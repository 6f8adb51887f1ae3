//! Household inventory domain: the item catalog, view settings and the
//! in-memory store behind the dashboard.
//!
//! Business rules live here as deterministic domain logic (no IO, no HTTP,
//! no storage). The UI layer consumes this crate through [`InventoryStore`]:
//! it calls the mutation operations in response to user actions and reads
//! derived query results, never holding copies of the state itself.

pub mod catalog;
pub mod filter;
pub mod item;
pub mod seed;
pub mod store;

pub use catalog::{Category, NewCategory, NewRoom, Room};
pub use filter::{DEFAULT_VALUE_RANGE, FilterPatch, ItemFilter, SortField, SortOrder};
pub use item::{Condition, InventoryItem, ItemPatch, NewItem, Warranty};
pub use store::InventoryStore;
