use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Exact name of the ripening item.
pub const AGED_BRIE: &str = "Aged Brie";

/// Exact name of the legendary (fixed-value) item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Any name starting with this is an event ticket.
pub const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";

/// Lowest quality an ordinary item can age down to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality an ordinary item can age up to.
pub const MAX_QUALITY: i32 = 50;

/// Quality a legendary item always holds.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Aging category of an item, resolved once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses quality every day, twice as fast once past its sell-by date.
    Default,
    /// Gains quality every day, twice as fast once past its sell-by date.
    Ripening,
    /// Never ages.
    FixedValue,
    /// Gains quality faster as the event nears, worthless once it has passed.
    EventTicket,
}

impl Category {
    /// Resolve the category for an item name.
    ///
    /// Matching is case-sensitive. Anything unrecognized is `Default`.
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::Ripening,
            SULFURAS => Category::FixedValue,
            n if n.starts_with(BACKSTAGE_PASS_PREFIX) => Category::EventTicket,
            _ => Category::Default,
        }
    }

    /// Quality range an item of this category is allowed to hold.
    pub fn bounds(self) -> RangeInclusive<i32> {
        match self {
            Category::FixedValue => LEGENDARY_QUALITY..=LEGENDARY_QUALITY,
            Category::Default | Category::Ripening | Category::EventTicket => {
                MIN_QUALITY..=MAX_QUALITY
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Default => "default",
            Category::Ripening => "ripening",
            Category::FixedValue => "fixed_value",
            Category::EventTicket => "event_ticket",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
