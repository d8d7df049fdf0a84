//! # Reward Points
//!
//! The tiered loyalty rule applied to every transaction.
//!
//! ```text
//! amount:   0 ──────── 50 ──────── 100 ──────────────►
//! rate:        0 pts      1 pt / $      2 pts / $
//!
//! 120.00 → 2 × 20 (above 100) + 1 × 50 (50..100) = 90
//! ```
//!
//! Each tier is truncated to a whole number on its own before the tiers are
//! added. Summing first and truncating once gives different answers for
//! fractional amounts, so the order here is part of the rule.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::money::Money;

/// Amount above which every dollar earns two points.
const UPPER_TIER: Decimal = Decimal::ONE_HUNDRED;

/// Amount above which every dollar (up to the upper tier) earns one point.
const LOWER_TIER: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Calculates reward points for a single transaction amount.
///
/// - `floor((amount - 100) * 2)` for the part above 100
/// - `floor(min(amount, 100)) - 50` when the amount is above 50
///
/// Amounts of 50 or less earn nothing. The caller is expected to have
/// validated the amount as positive; non-positive amounts simply earn zero.
/// Results too large for a `u64` saturate.
///
/// ## Example
/// ```rust
/// use rewards_core::money::Money;
/// use rewards_core::points::calculate_points;
///
/// let points = |text: &str| calculate_points(text.parse::<Money>().unwrap());
/// assert_eq!(points("120.00"), 90);
/// assert_eq!(points("100.01"), 50);
/// assert_eq!(points("50.00"), 0);
/// ```
pub fn calculate_points(amount: Money) -> u64 {
    let amount = amount.amount();
    let mut points: u64 = 0;

    if amount > UPPER_TIER {
        let upper = (amount - UPPER_TIER)
            .checked_mul(Decimal::TWO)
            .and_then(|doubled| doubled.floor().to_u64())
            .unwrap_or(u64::MAX);
        points = points.saturating_add(upper);
    }

    if amount > LOWER_TIER {
        let lower = (amount.min(UPPER_TIER).floor() - LOWER_TIER)
            .to_u64()
            .unwrap_or(0);
        points = points.saturating_add(lower);
    }

    points
}

// =============================================================================
// Unit Tests
// =============================================================================
