// ABOUTME: Shared test utilities and plan builders for integration tests
// ABOUTME: Provides quiet logging, item/meal/plan builders, and invariant assertions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::float_cmp
)]
//! Shared test utilities for `coachfit_nutrition`
//!
//! This module provides common builders to reduce duplication across
//! integration tests.

use coachfit_nutrition::intelligence::plan_reconciliation::aggregate_plan;
use coachfit_nutrition::models::{
    FoodItem, ItemMacros, MacroGrams, Meal, MealPlan, Nutrient, NutrientFields, NutritionalTarget,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Food item with every value present
pub fn item(name: &str, calories: f64, protein: f64, carb: f64, fat: f64) -> FoodItem {
    FoodItem::new(name, "1 portion", calories, ItemMacros::new(protein, carb, fat))
}

/// Item whose composition is a fixed multiple of a base plate
pub fn uniform_item(scale: f64) -> FoodItem {
    item(
        "Mixed plate",
        400.0 * scale,
        30.0 * scale,
        40.0 * scale,
        10.0 * scale,
    )
}

/// Meal with its kind resolved from the name
pub fn meal(name: &str, items: Vec<FoodItem>) -> Meal {
    Meal::new(name, items)
}

/// Target with explicit totals
pub fn target(calories: f64, protein: f64, carb: f64, fat: f64) -> NutritionalTarget {
    NutritionalTarget::new(
        calories,
        MacroGrams {
            protein_g: protein,
            carb_g: carb,
            fat_g: fat,
        },
    )
}

/// Four-meal plan totalling 1800 kcal, 140 g protein, 180 g carb, 60 g fat
///
/// Contains no fruit and no vegetable.
pub fn four_meal_plan() -> MealPlan {
    MealPlan::new(vec![
        meal(
            "Breakfast",
            vec![
                item("Oats", 300.0, 10.0, 50.0, 6.0),
                item("Scrambled eggs", 150.0, 12.0, 1.0, 10.0),
            ],
        ),
        meal(
            "Lunch",
            vec![
                item("Chicken breast", 330.0, 50.0, 0.0, 7.0),
                item("White rice", 300.0, 6.0, 64.0, 1.0),
            ],
        ),
        meal(
            "Afternoon snack",
            vec![
                item("Greek yogurt", 150.0, 15.0, 10.0, 5.0),
                item("Almonds", 170.0, 5.0, 5.0, 15.0),
            ],
        ),
        meal(
            "Dinner",
            vec![
                item("Salmon", 250.0, 38.0, 0.0, 14.0),
                item("Baked potato", 150.0, 4.0, 50.0, 2.0),
            ],
        ),
    ])
}

/// Assert every meal's total equals the sum of its item calories
pub fn assert_meal_totals_consistent(plan: &MealPlan) {
    for meal in &plan.meals {
        let sum: f64 = meal
            .items
            .iter()
            .map(|item| item.nutrient_or_zero(Nutrient::Calories))
            .sum();
        assert!(
            (meal.total_calories - sum).abs() < 1e-6,
            "meal '{}' total {} differs from item sum {}",
            meal.name,
            meal.total_calories,
            sum
        );
    }
}

/// Assert the plan aggregate equals the target within rounding tolerance
pub fn assert_matches_target(plan: &MealPlan, goal: &NutritionalTarget) {
    let totals = aggregate_plan(plan);
    assert!(
        (totals.calories - goal.calories).abs() <= 0.1,
        "calories {} vs target {}",
        totals.calories,
        goal.calories
    );
    assert!((totals.protein_g - goal.macros.protein_g).abs() <= 0.01);
    assert!((totals.carb_g - goal.macros.carb_g).abs() <= 0.01);
    assert!((totals.fat_g - goal.macros.fat_g).abs() <= 0.01);
}
