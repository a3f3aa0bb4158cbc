// ABOUTME: Category guarantor enforcing minimum fruit and vegetable coverage in a meal plan
// ABOUTME: Injects reference fruit and vegetable items with substitutions where coverage is missing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use crate::config::GuarantorConfig;
use coachfit_core::constants::food_lexicon::{REFERENCE_FRUIT, REFERENCE_VEGETABLE};
use coachfit_core::models::{FoodCategory, FoodItem, MealPlan, MealType};
use serde::Serialize;
use tracing::info;

/// Items added by the guarantor
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CoverageOutcome {
    /// Reference fruit items injected across the day
    pub fruits_injected: usize,
    /// Reference vegetable items injected into principal meals
    pub vegetables_injected: usize,
    /// Indexes of meals that received at least one item
    pub meals_touched: Vec<usize>,
}

impl CoverageOutcome {
    /// Whether the plan was left untouched
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.fruits_injected == 0 && self.vegetables_injected == 0
    }

    fn touch(&mut self, meal_index: usize) {
        if !self.meals_touched.contains(&meal_index) {
            self.meals_touched.push(meal_index);
        }
    }
}

/// Meals receiving fruit when no snack-like meal exists
///
/// Every non-principal meal plus the last meal of the day, in plan order.
/// Lunch only qualifies when it closes the day.
fn fallback_fruit_meals(plan: &MealPlan) -> Vec<usize> {
    let last = plan.meals.len().saturating_sub(1);
    plan.meals
        .iter()
        .enumerate()
        .filter(|&(index, meal)| !meal.is_principal() || index == last)
        .map(|(index, _)| index)
        .collect()
}

/// Add reference fruit and vegetable items until coverage holds
///
/// Fruit goes round-robin into meals that are neither lunch, dinner nor
/// breakfast. When none qualifies it goes to breakfast-like meals and the
/// last meal of the day. Each lunch and dinner without a vegetable receives
/// one. Items are only ever added.
pub fn guarantee_category_coverage(plan: &mut MealPlan, config: &GuarantorConfig) -> CoverageOutcome {
    let mut outcome = CoverageOutcome::default();
    if plan.meals.is_empty() {
        return outcome;
    }

    let fruit_count = plan.count_category(FoodCategory::Fruit);
    let shortfall = config.min_fruit_items.saturating_sub(fruit_count);
    if shortfall > 0 {
        let preferred: Vec<usize> = plan
            .meals
            .iter()
            .enumerate()
            .filter(|(_, meal)| !meal.is_principal() && meal.kind != MealType::Breakfast)
            .map(|(index, _)| index)
            .collect();
        let eligible = if preferred.is_empty() {
            fallback_fruit_meals(plan)
        } else {
            preferred
        };

        for &meal_index in eligible.iter().cycle().take(shortfall) {
            plan.meals[meal_index]
                .items
                .push(FoodItem::from_reference(&REFERENCE_FRUIT, FoodCategory::Fruit));
            outcome.fruits_injected += 1;
            outcome.touch(meal_index);
        }
    }

    if config.require_principal_vegetable {
        for (meal_index, meal) in plan.meals.iter_mut().enumerate() {
            if meal.is_principal() && meal.count_category(FoodCategory::Vegetable) == 0 {
                meal.items.push(FoodItem::from_reference(
                    &REFERENCE_VEGETABLE,
                    FoodCategory::Vegetable,
                ));
                outcome.vegetables_injected += 1;
                outcome.touch(meal_index);
            }
        }
    }

    for &meal_index in &outcome.meals_touched {
        plan.meals[meal_index].recompute_total();
    }

    if !outcome.is_unchanged() {
        info!(
            fruits_injected = outcome.fruits_injected,
            vegetables_injected = outcome.vegetables_injected,
            "Category coverage completed"
        );
    }

    outcome
}
