use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

use crate::aging::next_state;
use crate::category::{Category, LEGENDARY_QUALITY};

/// A stocked good.
///
/// The category is resolved from the name at construction and kept alongside
/// it; the name is immutable, so the two never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
    category: Category,
}

impl Item {
    /// Stock a new item. No range checks are applied; see [`Item::validate`].
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::classify(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days left until the sell-by date; negative once past it.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether the stored quality lies within what the category allows.
    pub fn quality_in_bounds(&self) -> bool {
        self.category.bounds().contains(&self.quality)
    }

    /// Advance this item by one day.
    pub fn age(&mut self) {
        let (sell_in, quality) = next_state(self.category, self.sell_in, self.quality);
        self.sell_in = sell_in;
        self.quality = quality;
    }

    /// Check the item is in a legal state for its category.
    ///
    /// Aging never calls this: out-of-range input is carried as-is, and
    /// rejecting it is up to whoever stocks the item.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        match self.category {
            Category::FixedValue if self.quality != LEGENDARY_QUALITY => {
                Err(DomainError::invariant(format!(
                    "{} must have quality {LEGENDARY_QUALITY} (got {})",
                    self.name, self.quality
                )))
            }
            _ if !self.quality_in_bounds() => {
                let bounds = self.category.bounds();
                Err(DomainError::validation(format!(
                    "{} quality {} outside {}..={}",
                    self.name,
                    self.quality,
                    bounds.start(),
                    bounds.end()
                )))
            }
            _ => Ok(()),
        }
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire shape of an item: the caller-facing `(name, sellIn, quality)` triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_classifies_once() {
        let item = Item::new("Aged Brie", 2, 0);
        assert_eq!(item.name(), "Aged Brie");
        assert_eq!(item.sell_in(), 2);
        assert_eq!(item.quality(), 0);
        assert_eq!(item.category(), Category::Ripening);
    }

    #[test]
    fn age_applies_category_rule() {
        let mut item = Item::new("normal", 10, 20);
        item.age();
        assert_eq!((item.sell_in(), item.quality()), (9, 19));
    }

    #[test]
    fn display_matches_report_line() {
        let item = Item::new("Sulfuras, Hand of Ragnaros", -1, 80);
        assert_eq!(item.to_string(), "Sulfuras, Hand of Ragnaros, -1, 80");
    }

    #[test]
    fn validate_accepts_legal_items() {
        assert!(Item::new("normal", 5, 0).validate().is_ok());
        assert!(Item::new("Aged Brie", -3, 50).validate().is_ok());
        assert!(Item::new("Sulfuras, Hand of Ragnaros", 0, 80).validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let err = Item::new("   ", 5, 10).validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn validate_rejects_out_of_range_quality() {
        let err = Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 55)
            .validate()
            .unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("55")),
            _ => panic!("Expected Validation error for quality 55"),
        }

        assert!(Item::new("normal", 5, -1).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_legendary_sulfuras() {
        let err = Item::new("Sulfuras, Hand of Ragnaros", 0, 50)
            .validate()
            .unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation for Sulfuras at 50"),
        }
    }

    #[test]
    fn serializes_as_camel_case_triple() {
        let item = Item::new("Aged Brie", 2, 0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Aged Brie", "sellIn": 2, "quality": 0 })
        );
    }

    #[test]
    fn deserialize_reclassifies_name() {
        let item: Item = serde_json::from_str(
            r#"{ "name": "Backstage passes to a TAFKAL80ETC concert", "sellIn": 15, "quality": 20 }"#,
        )
        .unwrap();
        assert_eq!(item.category(), Category::EventTicket);
        assert_eq!(item, Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20));
    }
}
