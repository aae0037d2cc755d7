//! Tiered allocation of an event's total amount across payment tiers.
//!
//! Each participant's share is weighted by their tier rank: with tiers
//! `{1 × 2 people, 2 × 1 person}` the total weight is 4, so a tier-1
//! participant pays a quarter of the total and the tier-2 participant a half.
//! Every amount is rounded independently; the rounded amounts are not
//! reconciled against the total, see [`summarize`] for the resulting drift.

use crate::domain::model::{AllocationSummary, TierAllocation, TierConfig};

/// Computes the per-person amount of every tier.
///
/// The output keeps the input's length, order, `tier` and `count` values.
/// Degenerate inputs (nobody attending, zero total weight, an empty tier)
/// yield `0` amounts rather than errors.
pub fn calc_tier_amounts(total_amount: i64, tiers: &[TierConfig]) -> Vec<TierAllocation> {
    let total_people: i128 = tiers.iter().map(|t| i128::from(t.count)).sum();

    if total_people == 0 {
        return with_amounts(tiers, |_| 0);
    }

    if tiers.len() == 1 {
        let amount = round_half_up(i128::from(total_amount), total_people);
        return with_amounts(tiers, |_| amount);
    }

    let total_weight: i128 = tiers.iter().map(weight).sum();
    if total_weight == 0 {
        return with_amounts(tiers, |_| 0);
    }

    with_amounts(tiers, |tier| {
        if tier.count == 0 {
            return 0;
        }
        // total × tier × count / total_weight / count，count 約分後結果相同且不會溢位
        round_half_up(i128::from(total_amount) * i128::from(tier.tier), total_weight)
    })
}

/// Allocates and reports head count, collected sum and rounding drift.
pub fn summarize(total_amount: i64, tiers: &[TierConfig]) -> AllocationSummary {
    let allocations = calc_tier_amounts(total_amount, tiers);

    let total_people = tiers.iter().map(|t| u64::from(t.count)).sum();
    let collected = clamp_amount(
        allocations
            .iter()
            .map(|a| i128::from(a.amount) * i128::from(a.count))
            .sum(),
    );
    let drift = clamp_amount(i128::from(collected) - i128::from(total_amount));

    if drift != 0 {
        tracing::debug!(
            "Allocation of {} across {} tiers drifts by {}",
            total_amount,
            tiers.len(),
            drift
        );
    }

    AllocationSummary {
        total_amount,
        total_people,
        allocations,
        collected,
        drift,
    }
}

fn weight(tier: &TierConfig) -> i128 {
    i128::from(tier.tier) * i128::from(tier.count)
}

fn with_amounts(tiers: &[TierConfig], amount: impl Fn(&TierConfig) -> i64) -> Vec<TierAllocation> {
    tiers
        .iter()
        .map(|tier| TierAllocation {
            tier: tier.tier,
            count: tier.count,
            amount: amount(tier),
        })
        .collect()
}

/// `floor(numerator / denominator + 1/2)` on exact integers; `denominator > 0`.
fn round_half_up(numerator: i128, denominator: i128) -> i64 {
    clamp_amount((2 * numerator + denominator).div_euclid(2 * denominator))
}

fn clamp_amount(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}
