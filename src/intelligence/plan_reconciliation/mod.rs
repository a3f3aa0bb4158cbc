// ABOUTME: Meal plan reconciliation engine matching a generated plan to a nutrition target
// ABOUTME: Aggregation, proportional scaling, meal balancing, category coverage, and orchestration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

//! Meal Plan Reconciliation
//!
//! A plan produced by the external generator rarely matches the user's target.
//! The stages in this module transform it in place, deterministically:
//!
//! 1. `reconciler` rescales item values so day totals equal the target
//! 2. `balancer` pulls each meal's share of the day into bounded bands
//! 3. `guarantor` injects fruit and vegetable items where coverage is missing
//! 4. `reconciler` runs again to absorb what the guarantor injected
//!
//! Every stage is total over its input: the worst outcome is an unchanged
//! plan. After every stage each meal's `total_calories` equals the sum of its
//! item calories.

/// Day and per-meal nutrient totals
pub mod aggregator;
/// Per-meal share balancing
pub mod balancer;
/// Fruit and vegetable coverage
pub mod guarantor;
/// Fixed stage orchestration
pub mod pipeline;
/// Proportional scaling with residual correction
pub mod reconciler;

pub use aggregator::{aggregate_meal, aggregate_plan, meal_shares, MealShare};
pub use balancer::{balance_meal_distribution, find_share_violations, BalanceOutcome, ShareViolation};
pub use guarantor::{guarantee_category_coverage, CoverageOutcome};
pub use pipeline::{ReconciliationPipeline, ReconciliationReport, ReconciliationRound};
pub use reconciler::{
    max_relative_deviation, reconcile_to_target, relative_deviations, ReconcileOutcome,
};

use coachfit_core::models::{FoodItem, Nutrient, NutrientFields};

/// Round `value` to `decimal_places` decimals
pub(crate) fn round_to(value: f64, decimal_places: u32) -> f64 {
    let scale = 10_f64.powf(f64::from(decimal_places));
    (value * scale).round() / scale
}

/// Scale every positive finite nutrient field of `item` and its substitutions
///
/// Missing, malformed, zero and negative fields are left untouched.
pub(crate) fn scale_item(
    item: &mut FoodItem,
    factor_for: impl Fn(Nutrient) -> f64,
    decimal_places: u32,
) {
    scale_fields(item, &factor_for, decimal_places);
    for substitution in &mut item.substitutions {
        scale_fields(substitution, &factor_for, decimal_places);
    }
}

fn scale_fields(
    fields: &mut impl NutrientFields,
    factor_for: &impl Fn(Nutrient) -> f64,
    decimal_places: u32,
) {
    for nutrient in Nutrient::ALL {
        if let Some(value) = fields.nutrient_mut(nutrient) {
            if value.is_finite() && *value > 0.0 {
                *value = round_to(*value * factor_for(nutrient), decimal_places);
            }
        }
    }
}
