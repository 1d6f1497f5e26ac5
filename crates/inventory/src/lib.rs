//! Inventory aging module.
//!
//! This crate contains the end-of-day aging rules for stocked items,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! Callers own the item collection and run one update per simulated day.

pub mod aging;
pub mod category;
pub mod engine;
pub mod item;

pub use aging::{TICKET_FAR_DAYS, TICKET_NEAR_DAYS, next_state, update_day};
pub use category::{
    AGED_BRIE, BACKSTAGE_PASS_PREFIX, Category, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY,
    SULFURAS,
};
pub use engine::GildedRose;
pub use item::Item;
