use crate::aging;
use crate::item::Item;

/// Update engine over an owned, ordered inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Close the day: age every item once and return the updated inventory.
    pub fn update_day(&mut self) -> &[Item] {
        aging::update_day(&mut self.items);
        &self.items
    }

    /// Run `days` consecutive end-of-day updates.
    pub fn advance(&mut self, days: u32) -> &[Item] {
        for day in 1..=days {
            tracing::debug!(day, days, "closing day");
            aging::update_day(&mut self.items);
        }
        &self.items
    }
}

impl FromIterator<Item> for GildedRose {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
