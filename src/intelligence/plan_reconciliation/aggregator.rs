// ABOUTME: Nutrient aggregation over meal plans and meals
// ABOUTME: Day totals, per-meal totals, and per-meal percentage shares of the day
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use coachfit_core::models::{Meal, MealPlan, MealType, NutrientTotals};
use serde::Serialize;

/// Sum calories and macros over every item of every meal
///
/// Missing or non-finite values count as zero.
#[must_use]
pub fn aggregate_plan(plan: &MealPlan) -> NutrientTotals {
    let mut totals = NutrientTotals::default();
    for item in plan.meals.iter().flat_map(|meal| &meal.items) {
        totals.accumulate(item);
    }
    totals
}

/// Sum calories and macros over the items of one meal
#[must_use]
pub fn aggregate_meal(meal: &Meal) -> NutrientTotals {
    let mut totals = NutrientTotals::default();
    for item in &meal.items {
        totals.accumulate(item);
    }
    totals
}

/// A meal's percentage share of each day total
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealShare {
    /// Position of the meal in the plan
    pub meal_index: usize,
    /// Meal name
    pub name: String,
    /// Meal type tag
    pub kind: MealType,
    /// Absolute totals of the meal
    pub totals: NutrientTotals,
    /// Percent of the day total per quantity (0 when the day total is 0)
    pub percent: NutrientTotals,
}

/// Compute every meal's share of the day
#[must_use]
pub fn meal_shares(plan: &MealPlan) -> Vec<MealShare> {
    let day = aggregate_plan(plan);

    plan.meals
        .iter()
        .enumerate()
        .map(|(meal_index, meal)| {
            let totals = aggregate_meal(meal);
            let percent = NutrientTotals::from_fn(|nutrient| {
                let day_total = day.get(nutrient);
                if day_total > 0.0 {
                    totals.get(nutrient) / day_total * 100.0
                } else {
                    0.0
                }
            });
            MealShare {
                meal_index,
                name: meal.name.clone(),
                kind: meal.kind,
                totals,
                percent,
            }
        })
        .collect()
}
