//! Reward tier resolution for the funnel's signup gift.
//!
//! Applicants are shown a gift based on the funding amount they request.
//! Tiers are a static table ordered by ascending threshold; selection picks
//! the highest tier whose threshold does not exceed the requested amount.

use serde::Serialize;

/// A single reward tier: minimum requested amount (whole dollars) and the
/// gift shown for it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RewardTier {
    pub min_amount: u64,
    pub label: &'static str,
}

/// Ordered ascending by `min_amount`; the first entry must be 0 so that
/// [`resolve_gift`] is total over all inputs.
pub const REWARD_TIERS: [RewardTier; 6] = [
    RewardTier {
        min_amount: 0,
        label: "Capflow welcome kit",
    },
    RewardTier {
        min_amount: 20_000,
        label: "Apple AirPods Pro",
    },
    RewardTier {
        min_amount: 100_000,
        label: "Apple Watch Series 10",
    },
    RewardTier {
        min_amount: 200_000,
        label: "iPad Pro 11\"",
    },
    RewardTier {
        min_amount: 350_000,
        label: "MacBook Air",
    },
    RewardTier {
        min_amount: 500_000,
        label: "$2,500 travel rewards package",
    },
];

/// Resolve the gift for a requested funding amount.
///
/// The input may carry formatting (`"$250,000"`, `"250000.00"`); all
/// non-digit characters are stripped before parsing. Anything that still
/// fails to parse (empty string, overflow) is treated as 0, so the base
/// tier is the worst case and this function never fails.
pub fn resolve_gift(amount_input: &str) -> &'static RewardTier {
    let digits: String = amount_input.chars().filter(|c| c.is_ascii_digit()).collect();
    let amount: u64 = digits.parse().unwrap_or(0);

    let mut selected = &REWARD_TIERS[0];
    for tier in &REWARD_TIERS {
        if tier.min_amount <= amount {
            selected = tier;
        }
    }
    selected
}
