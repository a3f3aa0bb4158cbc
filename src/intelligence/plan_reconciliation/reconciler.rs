// ABOUTME: Proportional reconciler scaling meal plan items so day totals match the target
// ABOUTME: Per-nutrient scale factors, 2-decimal rounding, and single-item residual correction
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use super::aggregator::aggregate_plan;
use super::{round_to, scale_item};
use crate::config::ReconcilerConfig;
use coachfit_core::models::{MealPlan, Nutrient, NutrientFields, NutrientTotals, NutritionalTarget};
use serde::Serialize;
use tracing::debug;

/// What the reconciler did to a plan
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReconcileOutcome {
    /// Totals were already within tolerance; only headers were written
    FastPath {
        /// Relative deviation per quantity before the call
        deviation: NutrientTotals,
    },
    /// Items were rescaled and the residual absorbed
    Scaled {
        /// Scale factor applied per quantity
        factors: NutrientTotals,
        /// Residual added to the absorbing item per quantity (after rounding)
        residuals: NutrientTotals,
    },
}

impl ReconcileOutcome {
    /// Whether items were left untouched
    #[must_use]
    pub const fn is_fast_path(&self) -> bool {
        matches!(self, Self::FastPath { .. })
    }
}

/// Relative deviation `|current - target| / target` per quantity
///
/// A zero target is met only by a zero current value; anything else reports
/// an infinite deviation.
#[must_use]
pub fn relative_deviations(current: &NutrientTotals, target: &NutrientTotals) -> NutrientTotals {
    NutrientTotals::from_fn(|nutrient| {
        let goal = target.get(nutrient);
        let actual = current.get(nutrient);
        if goal.abs() > f64::EPSILON {
            (actual - goal).abs() / goal.abs()
        } else if actual.abs() > f64::EPSILON {
            f64::INFINITY
        } else {
            0.0
        }
    })
}

/// Largest relative deviation of the plan's totals from the target
#[must_use]
pub fn max_relative_deviation(plan: &MealPlan, target: &NutritionalTarget) -> f64 {
    let deviations = relative_deviations(&aggregate_plan(plan), &target.totals());
    Nutrient::ALL
        .iter()
        .map(|&nutrient| deviations.get(nutrient))
        .fold(0.0, f64::max)
}

/// Scale a plan in place so its day totals equal the target
///
/// Headers are always overwritten with the target values. When every
/// quantity is already within `fast_path_tolerance`, item values are not
/// touched.
pub fn reconcile_to_target(
    plan: &mut MealPlan,
    target: &NutritionalTarget,
    config: &ReconcilerConfig,
) -> ReconcileOutcome {
    let goal = target.totals();
    let current = aggregate_plan(plan);
    let deviation = relative_deviations(&current, &goal);

    plan.apply_target_headers(target);

    if Nutrient::ALL
        .iter()
        .all(|&nutrient| deviation.get(nutrient) < config.fast_path_tolerance)
    {
        debug!(
            calories = current.calories,
            target_calories = goal.calories,
            "Plan within tolerance, skipping rescale"
        );
        return ReconcileOutcome::FastPath { deviation };
    }

    let factors = NutrientTotals::from_fn(|nutrient| {
        let actual = current.get(nutrient);
        if actual > 0.0 {
            goal.get(nutrient) / actual.max(config.epsilon)
        } else {
            1.0
        }
    });

    for meal in &mut plan.meals {
        for item in &mut meal.items {
            scale_item(item, |nutrient| factors.get(nutrient), config.decimal_places);
        }
    }

    let scaled = aggregate_plan(plan);
    let residuals = NutrientTotals::from_fn(|nutrient| {
        let residual = goal.get(nutrient) - scaled.get(nutrient);
        if absorb_residual(plan, nutrient, residual, config.decimal_places) {
            residual
        } else {
            0.0
        }
    });

    plan.recompute_meal_totals();

    debug!(
        factor_calories = factors.calories,
        factor_protein = factors.protein_g,
        factor_carb = factors.carb_g,
        factor_fat = factors.fat_g,
        residual_calories = residuals.calories,
        "Plan rescaled to target"
    );

    ReconcileOutcome::Scaled { factors, residuals }
}

/// Add `residual` to the last item with a positive value of `nutrient`
///
/// Meals and items are scanned in reverse. Returns false when no item
/// carries a positive value.
fn absorb_residual(
    plan: &mut MealPlan,
    nutrient: Nutrient,
    residual: f64,
    decimal_places: u32,
) -> bool {
    if !residual.is_finite() || residual.abs() < f64::EPSILON {
        return false;
    }

    let absorber = plan
        .meals
        .iter_mut()
        .rev()
        .flat_map(|meal| meal.items.iter_mut().rev())
        .find(|item| {
            item.nutrient(nutrient)
                .is_some_and(|value| value.is_finite() && value > 0.0)
        });

    let Some(item) = absorber else {
        return false;
    };
    if let Some(value) = item.nutrient_mut(nutrient) {
        *value = round_to(*value + residual, decimal_places).max(0.0);
    }
    true
}
