//! # Reward Aggregation
//!
//! Rolls a customer's transactions up into points per month.
//!
//! ## Grouping Key
//! Transactions are grouped by month **name** only. January 2023 and
//! January 2024 land in the same `"JANUARY"` bucket. Existing clients rely on
//! this output, so it is kept as-is; a reward window longer than a year will
//! merge months across years (see `test_months_merge_across_years`).
//!
//! ## Ordering
//! Months appear in the order they are first seen in the input, not in
//! calendar order. Input `[March, January, March]` yields `[MARCH, JANUARY]`.

use chrono::{Datelike, NaiveDate};

use crate::points::calculate_points;
use crate::types::{MonthlyReward, RewardBreakdown, Transaction};

const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Returns the upper-case English month name used as the grouping key.
pub fn month_label(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Sums reward points per month and in total.
///
/// An empty slice yields an empty breakdown; callers treat "no transactions"
/// as not-found before getting here.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rewards_core::{aggregate, Money, Transaction};
///
/// let tx = Transaction {
///     id: 1,
///     customer_id: 1,
///     amount: "120.00".parse::<Money>().unwrap(),
///     date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
/// };
/// let breakdown = aggregate(&[tx]);
/// assert_eq!(breakdown.months[0].month, "APRIL");
/// assert_eq!(breakdown.total_points, 90);
/// ```
pub fn aggregate(transactions: &[Transaction]) -> RewardBreakdown {
    // at most twelve buckets, so a linear lookup keeps insertion order cheaply
    let mut months: Vec<MonthlyReward> = Vec::new();

    for transaction in transactions {
        let label = month_label(transaction.date);
        let points = calculate_points(transaction.amount);

        match months.iter_mut().find(|entry| entry.month == label) {
            Some(entry) => entry.points = entry.points.saturating_add(points),
            None => months.push(MonthlyReward {
                month: label.to_string(),
                points,
            }),
        }
    }

    let total_points = months
        .iter()
        .fold(0u64, |total, entry| total.saturating_add(entry.points));

    RewardBreakdown {
        months,
        total_points,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
