use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, QUALITY_CAP, QUALITY_FLOOR};

use crate::category::Category;

/// An inventory item: a named record whose `sell_in` and `quality` evolve
/// once per day under the rules of the category its name resolves to.
///
/// Construction validates eagerly; an invalid item never enters a
/// collection. Deserialization goes through the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl Item {
    /// Create a validated item.
    ///
    /// Fails with [`DomainError::InvalidAttribute`] when `quality` is
    /// negative, or above the cap for any non-legendary name. `sell_in` has
    /// no range restriction: negative means "already expired".
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let name = name.into();

        if quality < QUALITY_FLOOR {
            return Err(DomainError::invalid_attribute("quality cannot be negative"));
        }
        if quality > QUALITY_CAP && !Category::resolve(&name).is_legendary() {
            return Err(DomainError::invalid_attribute(format!(
                "quality cannot exceed {QUALITY_CAP} (except for legendary items)"
            )));
        }

        Ok(Self {
            name,
            sell_in,
            quality,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days remaining until expiry; negative once expired.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Rename the item.
    ///
    /// Category resolution reads the current name on every update call, so
    /// a rename changes the item's behavior starting with the next update.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Write back the state produced by one daily update step.
    pub(crate) fn put(&mut self, sell_in: i32, quality: i32) {
        self.sell_in = sell_in;
        self.quality = quality;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Unvalidated wire shape; promoted to [`Item`] through `Item::new`.
#[derive(Deserialize)]
struct RawItem {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl TryFrom<RawItem> for Item {
    type Error = DomainError;

    fn try_from(raw: RawItem) -> DomainResult<Self> {
        Item::new(raw.name, raw.sell_in, raw.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_round_trips_its_arguments() {
        let item = Item::new("Normal Item", 10, 20).unwrap();
        assert_eq!(item.name(), "Normal Item");
        assert_eq!(item.sell_in(), 10);
        assert_eq!(item.quality(), 20);
    }

    #[test]
    fn negative_sell_in_is_valid() {
        let item = Item::new("Normal Item", -3, 20).unwrap();
        assert_eq!(item.sell_in(), -3);
    }

    #[test]
    fn negative_quality_is_rejected() {
        let err = Item::new("Normal Item", 10, -1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAttribute(_)));
    }

    #[test]
    fn quality_above_cap_is_rejected_for_non_legendary_names() {
        let err = Item::new("Anything", 1, 51).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAttribute(_)));
    }

    #[test]
    fn legendary_items_are_exempt_from_the_cap() {
        let item = Item::new("Sulfuras, Hand of Ragnaros", 1, 51).unwrap();
        assert_eq!(item.quality(), 51);

        let item = Item::new("Sulfuras, Hand of Ragnaros", 5, 80).unwrap();
        assert_eq!(item.quality(), 80);
    }

    #[test]
    fn display_shows_name_sell_in_quality() {
        let item = Item::new("Aged Brie", 2, 0).unwrap();
        assert_eq!(item.to_string(), "Aged Brie, 2, 0");
    }

    #[test]
    fn deserialization_preserves_validation() {
        let item: Item =
            serde_json::from_str(r#"{"name":"Normal Item","sell_in":10,"quality":20}"#).unwrap();
        assert_eq!(item, Item::new("Normal Item", 10, 20).unwrap());

        let err = serde_json::from_str::<Item>(r#"{"name":"Anything","sell_in":1,"quality":51}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid attribute"));
    }
}
