//! Inventory aging domain module.
//!
//! This crate contains the business rules for daily item aging, implemented
//! purely as deterministic domain logic (no IO, no storage, no clock). The
//! caller owns the item collection; one [`Inventory::advance_day`] call
//! applies each item's category rules in place.

pub mod category;
pub mod engine;
pub mod item;

pub use category::{Category, advance};
pub use engine::{Inventory, ItemUpdate};
pub use item::Item;
