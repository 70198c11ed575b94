//! Core arithmetic for splitting a restaurant bill.
//!
//! Everything here is pure: the UI feeds in the current bill amount, tip
//! percentage and split count, and reads back the derived totals. Out-of-range
//! inputs degrade to `0.0` instead of erroring.

/// Calculation-level constants.
pub mod defaults {
    /// A bill is always shared by at least one person.
    pub const MIN_SPLIT_COUNT: usize = 1;
    /// Upper bound of the tip scale.
    pub const MAX_TIP_PERCENT: u32 = 100;
}

/// Tip owed on the whole bill, before splitting.
///
/// Bills of one dollar or less produce no tip.
pub fn calculate_total_tip(bill: f64, tip_percent: u32) -> f64 {
    if bill > 1.0 {
        bill * tip_percent as f64 / 100.0
    } else {
        0.0
    }
}

/// Each person's share of the bill including tip.
///
/// Returns `0.0` when `split_count` is below the minimum, so callers never
/// divide by zero.
pub fn per_person_amount(bill: f64, tip_percent: u32, split_count: usize) -> f64 {
    if split_count < defaults::MIN_SPLIT_COUNT {
        return 0.0;
    }
    (bill + calculate_total_tip(bill, tip_percent)) / split_count as f64
}

/// Add one person to the split.
pub fn increment_split_count(count: usize) -> usize {
    count.saturating_add(1)
}

/// Remove one person from the split, never dropping below the minimum.
pub fn decrement_split_count(count: usize) -> usize {
    if count > defaults::MIN_SPLIT_COUNT {
        count - 1
    } else {
        defaults::MIN_SPLIT_COUNT
    }
}

/// Format a monetary value with two decimal places for display.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
