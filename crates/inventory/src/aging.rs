//! End-of-day aging rules.
//!
//! [`next_state`] is the whole rule set: a pure function from
//! `(category, sell_in, quality)` to the next day's `(sell_in, quality)`.
//! Bounds only stop a step from crossing them; a quality that was stocked out
//! of range stays where it is rather than being pulled back in.

use crate::category::{Category, MAX_QUALITY, MIN_QUALITY};
use crate::item::Item;

/// Event tickets with more sell-in days than this gain 1 quality per day.
pub const TICKET_FAR_DAYS: i32 = 10;

/// Event tickets with more sell-in days than this (up to [`TICKET_FAR_DAYS`])
/// gain 2 per day; at or below it, 3 per day.
pub const TICKET_NEAR_DAYS: i32 = 5;

/// Compute one day of aging.
///
/// - `Default`: -1 quality, -2 once `sell_in` has gone negative.
/// - `Ripening`: +1 quality, +2 once `sell_in` has gone negative.
/// - `FixedValue`: unchanged.
/// - `EventTicket`: +1/+2/+3 by the sell-in before today, dropping to 0 once
///   the decremented sell-in reaches 0.
pub fn next_state(category: Category, sell_in: i32, quality: i32) -> (i32, i32) {
    match category {
        Category::FixedValue => (sell_in, quality),
        Category::Default => {
            let sell_in = sell_in.saturating_sub(1);
            let steps = if sell_in < 0 { 2 } else { 1 };
            (sell_in, degrade(quality, steps))
        }
        Category::Ripening => {
            let sell_in = sell_in.saturating_sub(1);
            let steps = if sell_in < 0 { 2 } else { 1 };
            (sell_in, appreciate(quality, steps))
        }
        Category::EventTicket => {
            let next_sell_in = sell_in.saturating_sub(1);
            if next_sell_in <= 0 {
                return (next_sell_in, MIN_QUALITY);
            }
            let steps = if sell_in > TICKET_FAR_DAYS {
                1
            } else if sell_in > TICKET_NEAR_DAYS {
                2
            } else {
                3
            };
            (next_sell_in, appreciate(quality, steps))
        }
    }
}

fn degrade(quality: i32, steps: u32) -> i32 {
    (0..steps).fold(quality, |q, _| if q > MIN_QUALITY { q - 1 } else { q })
}

fn appreciate(quality: i32, steps: u32) -> i32 {
    (0..steps).fold(quality, |q, _| if q < MAX_QUALITY { q + 1 } else { q })
}

/// Age every item by one day, in order.
#[tracing::instrument(level = "debug", skip_all, fields(items = items.len()))]
pub fn update_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        if !item.quality_in_bounds() {
            tracing::warn!(
                name = item.name(),
                category = %item.category(),
                quality = item.quality(),
                "item quality outside category bounds; aging without correction"
            );
        }

        let (sell_in_before, quality_before) = (item.sell_in(), item.quality());
        item.age();

        tracing::trace!(
            name = item.name(),
            category = %item.category(),
            sell_in_before,
            quality_before,
            sell_in = item.sell_in(),
            quality = item.quality(),
            "item aged"
        );
    }
}
