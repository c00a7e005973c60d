//! Normalizes item amounts to base units and ranks items by unit price.
//!
//! `evaluate` is a pure function of the working item list; it is recomputed
//! from scratch on every edit, so there is no cached ranking state anywhere.

use super::entities::Item;
use super::units::Unit;

/// Derived, read-only view of a ranked item. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedItem {
    pub price_per_base_unit: f64,
    /// Percent more expensive than the best value, rounded to 2 decimals.
    /// Always >= 0; exactly 0 for the best value itself. Infinite when the
    /// best value is free and this item is not.
    pub percentage_diff: f64,
}

/// What happened to one input item during ranking. Items with partially
/// filled forms are excluded rather than treated as errors so live feedback
/// stays responsive while the user types.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemOutcome {
    Included(RankedItem),
    /// Price or amount still empty.
    ExcludedIncomplete,
    /// Price unparseable, or the normalized amount came out zero.
    ExcludedInvalid,
}

impl ItemOutcome {
    pub fn ranked(&self) -> Option<&RankedItem> {
        match self {
            ItemOutcome::Included(ranked) => Some(ranked),
            _ => None,
        }
    }
}

/// One outcome per input item, in input order, plus the id of the best-value
/// item when at least one item survived.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankingResult {
    pub outcomes: Vec<(u64, ItemOutcome)>,
    pub best: Option<u64>,
}

impl RankingResult {
    pub fn outcome_for(&self, item_id: u64) -> Option<&ItemOutcome> {
        self.outcomes
            .iter()
            .find(|(id, _)| *id == item_id)
            .map(|(_, outcome)| outcome)
    }

    pub fn included_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, ItemOutcome::Included(_)))
            .count()
    }
}

/// Converts a raw amount string into base units of the unit's dimension.
/// Unparseable, non-finite, or non-positive input yields 0.0 — "not yet
/// computable", which excludes the item from ranking without erroring.
pub fn normalize(amount: &str, unit: Unit) -> f64 {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value * unit.base_multiplier(),
        _ => 0.0,
    }
}

/// Ranks the working item list by price per base unit.
pub fn evaluate(items: &[Item]) -> RankingResult {
    let mut outcomes = Vec::with_capacity(items.len());

    for item in items {
        let outcome = if item.price.trim().is_empty() || item.amount.trim().is_empty() {
            ItemOutcome::ExcludedIncomplete
        } else {
            let base_amount = normalize(&item.amount, item.unit);
            let price = item
                .price
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0);
            match price {
                Some(price) if base_amount > 0.0 => ItemOutcome::Included(RankedItem {
                    price_per_base_unit: price / base_amount,
                    percentage_diff: 0.0,
                }),
                _ => ItemOutcome::ExcludedInvalid,
            }
        };
        outcomes.push((item.id, outcome));
    }

    // Minimum unit price wins; strict `<` keeps the first occurrence on ties.
    let mut best: Option<(u64, f64)> = None;
    for (id, outcome) in &outcomes {
        if let ItemOutcome::Included(ranked) = outcome {
            let beats = best
                .map(|(_, price)| ranked.price_per_base_unit < price)
                .unwrap_or(true);
            if beats {
                best = Some((*id, ranked.price_per_base_unit));
            }
        }
    }

    if let Some((_, best_price)) = best {
        for (_, outcome) in &mut outcomes {
            if let ItemOutcome::Included(ranked) = outcome {
                ranked.percentage_diff = percentage_over(best_price, ranked.price_per_base_unit);
            }
        }
    }

    RankingResult {
        outcomes,
        best: best.map(|(id, _)| id),
    }
}

/// Text-editing guard for the price field: digits, at most one decimal point,
/// optional leading currency symbol (stripped). Anything else keeps the prior
/// value. This runs on keystrokes, not during ranking.
pub fn sanitize_price(prior: &str, raw: &str) -> String {
    let stripped = raw
        .strip_prefix(|ch: char| matches!(ch, '$' | '€' | '£' | '¥'))
        .unwrap_or(raw);

    let mut seen_point = false;
    for ch in stripped.chars() {
        if ch == '.' {
            if seen_point {
                return prior.to_string();
            }
            seen_point = true;
        } else if !ch.is_ascii_digit() {
            return prior.to_string();
        }
    }
    stripped.to_string()
}

/// Percent more expensive than the best unit price. A zero best price (a
/// free item) would divide by zero, so that case is handled explicitly:
/// other free items tie at 0, and any paid item is infinitely more expensive
/// than free.
fn percentage_over(best_price: f64, price_per_base_unit: f64) -> f64 {
    if price_per_base_unit == best_price {
        0.0
    } else if best_price == 0.0 {
        f64::INFINITY
    } else {
        round2((price_per_base_unit - best_price) / best_price * 100.0)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}


#[cfg(test)]
mod props {
    use super::*;
    use crate::domain::units::Unit;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalize_is_linear(amount in 0.01f64..10_000.0) {
            let doubled = normalize(&format!("{}", amount * 2.0), Unit::Liter);
            let single = normalize(&format!("{}", amount), Unit::Liter);
            prop_assert!((doubled - 2.0 * single).abs() <= 1e-9 * doubled.abs().max(1.0));
        }

        #[test]
        fn percentage_diff_is_never_negative(
            prices in prop::collection::vec(
                prop_oneof![Just(0.0f64), 0.01f64..1_000.0],
                1..12,
            ),
        ) {
            let items: Vec<Item> = prices
                .iter()
                .enumerate()
                .map(|(idx, price)| Item {
                    id: idx as u64,
                    name: format!("item {idx}"),
                    price: format!("{price}"),
                    amount: "250".to_string(),
                    unit: Unit::Gram,
                    dimension: Unit::Gram.dimension(),
                })
                .collect();

            let result = evaluate(&items);
            prop_assert!(result.best.is_some());
            for (_, outcome) in &result.outcomes {
                if let ItemOutcome::Included(ranked) = outcome {
                    prop_assert!(!ranked.percentage_diff.is_nan());
                    prop_assert!(ranked.percentage_diff >= 0.0);
                }
            }
            let best_outcome = result.outcome_for(result.best.unwrap()).unwrap();
            prop_assert_eq!(best_outcome.ranked().unwrap().percentage_diff, 0.0);
        }
    }
}
