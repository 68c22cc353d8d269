//! Category policies and the daily update rules.
//!
//! A category is resolved fresh from the item name on every update call; it
//! is never stored on the item. The rules themselves are pure functions over
//! `(category, sell_in, quality)`.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, clamp_quality};

/// Aging policy for an item, keyed by exact item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// "Aged Brie": gains quality as it ages, twice as fast once expired.
    Ripening,
    /// Backstage passes: gain quality as the event approaches, worthless
    /// the moment it has passed.
    EventPass,
    /// "Sulfuras": never changes, exempt from the quality cap.
    Legendary,
    /// "Conjured": degrades twice as fast as standard items.
    FastDecay,
    /// Plain aging rules. Also the named fallback for any name outside the
    /// mapping; resolving to it for such a name draws a diagnostic notice.
    Standard,
}

impl Category {
    /// Resolve a category from an item name.
    ///
    /// Exact string match only: an item merely named "Conjured Mana Cake"
    /// resolves to `Standard`.
    pub fn resolve(name: &str) -> Self {
        match name {
            "Aged Brie" => Self::Ripening,
            "Backstage passes to a TAFKAL80ETC concert" => Self::EventPass,
            "Sulfuras, Hand of Ragnaros" => Self::Legendary,
            "Conjured" => Self::FastDecay,
            _ => Self::Standard,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Self::Legendary)
    }

    /// No name maps to `Standard` directly; it is only reachable as the
    /// fallback, so `Standard` means "unrecognized name".
    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Standard)
    }

    /// Pre-expiry quality delta. EventPass branches on the pre-decrement
    /// `sell_in`.
    fn quality_delta(self, sell_in: i32) -> i32 {
        match self {
            Self::Standard => -1,
            Self::Ripening => 1,
            Self::FastDecay => -2,
            Self::EventPass => {
                if sell_in > 10 {
                    1
                } else if sell_in > 5 {
                    2
                } else if sell_in > 0 {
                    3
                } else {
                    0
                }
            }
            Self::Legendary => 0,
        }
    }

    /// Additional quality delta once expired. EventPass is handled
    /// separately in [`advance`]: its quality is forced to zero, not
    /// adjusted by a delta.
    fn expired_delta(self) -> i32 {
        match self {
            Self::Standard => -1,
            Self::Ripening => 1,
            Self::FastDecay => -2,
            Self::EventPass | Self::Legendary => 0,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Ripening => "ripening",
            Self::EventPass => "eventpass",
            Self::Legendary => "legendary",
            Self::FastDecay => "fastdecay",
            Self::Standard => "standard",
        };
        f.write_str(name)
    }
}

/// Apply one day of aging to `(sell_in, quality)` under `category`.
///
/// Fixed step order: clamped quality step, sell-in decrement, then the
/// expiry step only if `sell_in` is negative *after* the decrement.
/// Legendary items short-circuit: the whole update is a no-op.
pub fn advance(category: Category, sell_in: i32, quality: i32) -> DomainResult<(i32, i32)> {
    if category.is_legendary() {
        return Ok((sell_in, quality));
    }

    let quality = clamp_quality(quality, category.quality_delta(sell_in));

    let sell_in = sell_in
        .checked_sub(1)
        .ok_or_else(|| DomainError::update_failure("sell_in underflow"))?;

    if sell_in >= 0 {
        return Ok((sell_in, quality));
    }

    let quality = match category {
        // Worthless once the event has passed; overrides the quality step.
        Category::EventPass => 0,
        _ => clamp_quality(quality, category.expired_delta()),
    };

    Ok((sell_in, quality))
}
