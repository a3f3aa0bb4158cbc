// ABOUTME: Meal distribution balancer keeping each meal's share of the day inside bounded bands
// ABOUTME: Detects protein/carb share violations and rescales meals toward their ideal share
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use super::aggregator::{aggregate_meal, aggregate_plan};
use super::scale_item;
use crate::config::{BalancerConfig, BalancingStrategy, ShareBand};
use coachfit_core::models::{MealPlan, Nutrient, NutrientTotals};
use serde::Serialize;
use tracing::{debug, info};

/// Nutrients whose shares trigger balancing
const CHECKED_NUTRIENTS: [Nutrient; 2] = [Nutrient::Protein, Nutrient::Carb];

/// What the balancer did to a plan
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BalanceOutcome {
    /// Fewer than two non-empty meals, or no protein and carb in the day
    NotApplicable,
    /// Every meal already inside its band
    WithinBounds,
    /// Meals were rescaled toward their ideal share
    Rebalanced {
        /// Strategy applied
        strategy: BalancingStrategy,
        /// Violations that triggered the rescale
        violations: Vec<ShareViolation>,
        /// Ratio `ideal / current` per quantity for each meal, in plan order
        meal_ratios: Vec<NutrientTotals>,
    },
}

/// A meal whose protein or carb share lies outside its band
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShareViolation {
    /// Position of the meal in the plan
    pub meal_index: usize,
    /// Offending nutrient
    pub nutrient: Nutrient,
    /// Observed share of the day (%)
    pub share_percent: f64,
    /// Band the share should lie in
    pub band: ShareBand,
}

/// Indexes of meals that carry at least one item
fn balanced_meals(plan: &MealPlan) -> Vec<usize> {
    plan.meals
        .iter()
        .enumerate()
        .filter(|(_, meal)| !meal.items.is_empty())
        .map(|(index, _)| index)
        .collect()
}

/// List every protein or carb share outside its meal's band
///
/// Every meal is checked, so a meal without items reports a 0% share. A
/// nutrient whose day total is not positive has no meaningful share and is
/// skipped.
#[must_use]
pub fn find_share_violations(plan: &MealPlan, config: &BalancerConfig) -> Vec<ShareViolation> {
    let day = aggregate_plan(plan);
    let mut violations = Vec::new();

    for (meal_index, meal) in plan.meals.iter().enumerate() {
        let band = if meal.is_principal() {
            config.principal_band
        } else {
            config.regular_band
        };
        let totals = aggregate_meal(meal);

        for nutrient in CHECKED_NUTRIENTS {
            let day_total = day.get(nutrient);
            if day_total <= 0.0 {
                continue;
            }
            let share_percent = totals.get(nutrient) / day_total * 100.0;
            if !band.contains(share_percent) {
                violations.push(ShareViolation {
                    meal_index,
                    nutrient,
                    share_percent,
                    band,
                });
            }
        }
    }

    violations
}

/// Rescale meals whose protein or carb share is out of bounds
///
/// Once triggered, every non-empty meal is scaled toward its ideal share:
/// `100 / meal_count` for regular meals, `principal_target_share` for lunch
/// and dinner. `meal_count` includes meals without items, which are left as
/// they are. A quantity the meal does not carry contributes a ratio of 1.
pub fn balance_meal_distribution(plan: &mut MealPlan, config: &BalancerConfig) -> BalanceOutcome {
    let meal_indexes = balanced_meals(plan);
    if meal_indexes.len() < 2 {
        return BalanceOutcome::NotApplicable;
    }

    let day = aggregate_plan(plan);
    if CHECKED_NUTRIENTS
        .iter()
        .all(|&nutrient| day.get(nutrient) <= 0.0)
    {
        return BalanceOutcome::NotApplicable;
    }

    let violations = find_share_violations(plan, config);
    if violations.is_empty() {
        debug!("Meal distribution within bounds");
        return BalanceOutcome::WithinBounds;
    }

    let regular_share = 100.0 / plan.meals.len() as f64;
    let mut meal_ratios = vec![NutrientTotals::from_fn(|_| 1.0); plan.meals.len()];

    for &meal_index in &meal_indexes {
        let meal = &mut plan.meals[meal_index];
        let ideal_share = if meal.is_principal() {
            config.principal_target_share
        } else {
            regular_share
        };

        let current = aggregate_meal(meal);
        let ratios = NutrientTotals::from_fn(|nutrient| {
            let amount = current.get(nutrient);
            let day_total = day.get(nutrient);
            if amount > 0.0 && day_total > 0.0 {
                day_total * ideal_share / 100.0 / amount
            } else {
                1.0
            }
        });

        match config.strategy {
            BalancingStrategy::Blended => {
                let blended = Nutrient::ALL
                    .iter()
                    .map(|&nutrient| ratios.get(nutrient))
                    .sum::<f64>()
                    / 4.0;
                for item in &mut meal.items {
                    scale_item(item, |_| blended, config.decimal_places);
                }
            }
            BalancingStrategy::PerNutrient => {
                for item in &mut meal.items {
                    scale_item(item, |nutrient| ratios.get(nutrient), config.decimal_places);
                }
            }
        }

        meal.recompute_total();
        meal_ratios[meal_index] = ratios;
    }

    info!(
        violations = violations.len(),
        strategy = %config.strategy,
        "Meal distribution rebalanced"
    );

    BalanceOutcome::Rebalanced {
        strategy: config.strategy,
        violations,
        meal_ratios,
    }
}
