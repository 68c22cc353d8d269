//! Batch update engine: advances every held item by one day.

use tracing::{error, warn};

use gildedrose_core::DomainResult;

use crate::category::{self, Category};
use crate::item::Item;

/// Per-item outcome of one [`Inventory::advance_day`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    /// Item name at the time of the update.
    pub name: String,
    /// Category the name resolved to for this call.
    pub category: Category,
    /// `Err` when applying the rules to this item failed; the item is then
    /// left untouched.
    pub result: DomainResult<()>,
}

impl ItemUpdate {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Inventory holder: owns the items and applies the daily rules in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable access, e.g. for renames (which change an item's category
    /// starting with the next update).
    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advance every item by one day, in collection order.
    ///
    /// Items are updated independently: a per-item failure is recorded in
    /// that item's entry, reported via diagnostics, and the batch keeps
    /// going. The call itself never fails; the report holds one entry per
    /// item, successes and failures co-existing.
    pub fn advance_day(&mut self) -> Vec<ItemUpdate> {
        self.items.iter_mut().map(update_item).collect()
    }
}

fn update_item(item: &mut Item) -> ItemUpdate {
    // Resolved by current name on every call, so renamed items switch rules.
    let category = Category::resolve(item.name());

    if !category.is_recognized() {
        // Emitted on every update, never deduplicated.
        warn!(name = %item.name(), "unrecognized item type, applying standard rules");
    }

    let result = match category::advance(category, item.sell_in(), item.quality()) {
        Ok((sell_in, quality)) => {
            item.put(sell_in, quality);
            Ok(())
        }
        Err(err) => {
            error!(name = %item.name(), %err, "failed to update item");
            Err(err)
        }
    };

    ItemUpdate {
        name: item.name().to_string(),
        category,
        result,
    }
}
