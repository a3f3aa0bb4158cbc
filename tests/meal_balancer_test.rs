// ABOUTME: Integration tests for the meal distribution balancer
// ABOUTME: Covers trigger conditions, share bounds after balancing, and both scaling strategies
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coachfit_nutrition::config::{BalancerConfig, BalancingStrategy};
use coachfit_nutrition::intelligence::plan_reconciliation::{
    balance_meal_distribution, find_share_violations, meal_shares, BalanceOutcome,
};
use coachfit_nutrition::models::{MealPlan, MealType, Nutrient};

mod common;

use common::{assert_meal_totals_consistent, item, meal, uniform_item};

/// Uniform-composition plan with a 10/50/10/30 split across four meals
fn lopsided_uniform_plan() -> MealPlan {
    MealPlan::new(vec![
        meal("Breakfast", vec![uniform_item(1.0)]),
        meal("Lunch", vec![uniform_item(2.0), uniform_item(3.0)]),
        meal("Afternoon snack", vec![uniform_item(1.0)]),
        meal("Dinner", vec![uniform_item(3.0)]),
    ])
}

fn assert_shares_within_bands(plan: &MealPlan, config: &BalancerConfig) {
    for share in meal_shares(plan) {
        let band = if share.kind.is_principal() {
            config.principal_band
        } else {
            config.regular_band
        };
        for nutrient in [Nutrient::Protein, Nutrient::Carb] {
            let percent = share.percent.get(nutrient);
            assert!(
                band.contains(percent),
                "{} {:?} share {percent:.2}% outside {band:?}",
                share.name,
                nutrient
            );
        }
    }
}

#[test]
fn test_meal_kinds_resolved_from_names() {
    let plan = lopsided_uniform_plan();
    let kinds: Vec<_> = plan.meals.iter().map(|meal| meal.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Snack,
            MealType::Dinner
        ]
    );
}

#[test]
fn test_lopsided_plan_reports_violations() {
    let plan = lopsided_uniform_plan();
    let violations = find_share_violations(&plan, &BalancerConfig::default());

    // Breakfast and snack at 10%, lunch at 50%; dinner at 30% is fine
    let offending: Vec<_> = violations.iter().map(|v| v.meal_index).collect();
    assert_eq!(offending, vec![0, 0, 1, 1, 2, 2]);
}

#[test]
fn test_blended_balancing_restores_bounds_for_uniform_meals() {
    common::init_test_logging();
    let config = BalancerConfig::default();
    let mut plan = lopsided_uniform_plan();

    let outcome = balance_meal_distribution(&mut plan, &config);

    let BalanceOutcome::Rebalanced {
        strategy,
        violations,
        meal_ratios,
    } = outcome
    else {
        panic!("lopsided plan must be rebalanced");
    };
    assert_eq!(strategy, BalancingStrategy::Blended);
    assert_eq!(violations.len(), 6);
    // Breakfast moves from 10% toward 25% of the day
    assert!((meal_ratios[0].protein_g - 2.5).abs() < 1e-9);

    assert_shares_within_bands(&plan, &config);
    assert!(find_share_violations(&plan, &config).is_empty());
    assert_meal_totals_consistent(&plan);
}

#[test]
fn test_blended_factor_scales_all_fields_of_a_meal_alike() {
    let config = BalancerConfig::default();
    let mut plan = lopsided_uniform_plan();

    balance_meal_distribution(&mut plan, &config);

    let breakfast = &plan.meals[0].items[0];
    assert_eq!(breakfast.calories, Some(1000.0));
    assert_eq!(breakfast.macros.protein_g, Some(75.0));
    assert_eq!(breakfast.macros.carb_g, Some(100.0));
    assert_eq!(breakfast.macros.fat_g, Some(25.0));
}

#[test]
fn test_per_nutrient_strategy_hits_bounds_for_mixed_meals() {
    let config = BalancerConfig {
        strategy: BalancingStrategy::PerNutrient,
        ..BalancerConfig::default()
    };
    let mut plan = MealPlan::new(vec![
        meal("Breakfast", vec![item("Pancakes", 400.0, 5.0, 60.0, 12.0)]),
        meal("Lunch", vec![item("Steak", 500.0, 60.0, 10.0, 25.0)]),
        meal("Dinner", vec![item("Chicken wrap", 450.0, 35.0, 30.0, 15.0)]),
    ]);
    assert!(!find_share_violations(&plan, &config).is_empty());

    let outcome = balance_meal_distribution(&mut plan, &config);

    assert!(matches!(
        outcome,
        BalanceOutcome::Rebalanced {
            strategy: BalancingStrategy::PerNutrient,
            ..
        }
    ));
    assert_shares_within_bands(&plan, &config);
    assert_meal_totals_consistent(&plan);
}

#[test]
fn test_plan_within_bounds_is_untouched() {
    let mut plan = MealPlan::new(vec![
        meal("Breakfast", vec![uniform_item(1.0)]),
        meal("Lunch", vec![uniform_item(1.1)]),
        meal("Snack", vec![uniform_item(0.9)]),
        meal("Dinner", vec![uniform_item(1.0)]),
    ]);
    let before = plan.clone();

    let outcome = balance_meal_distribution(&mut plan, &BalancerConfig::default());

    assert_eq!(outcome, BalanceOutcome::WithinBounds);
    assert_eq!(plan, before);
}

#[test]
fn test_single_meal_plan_is_not_applicable() {
    let mut plan = MealPlan::new(vec![meal("Lunch", vec![uniform_item(2.0)])]);
    let before = plan.clone();

    let outcome = balance_meal_distribution(&mut plan, &BalancerConfig::default());

    assert_eq!(outcome, BalanceOutcome::NotApplicable);
    assert_eq!(plan, before);
}

#[test]
fn test_plan_without_protein_or_carb_is_not_applicable() {
    let mut plan = MealPlan::new(vec![
        meal("Breakfast", vec![item("Butter", 100.0, 0.0, 0.0, 11.0)]),
        meal("Lunch", vec![item("Olive oil", 120.0, 0.0, 0.0, 14.0)]),
    ]);

    let outcome = balance_meal_distribution(&mut plan, &BalancerConfig::default());

    assert_eq!(outcome, BalanceOutcome::NotApplicable);
}

#[test]
fn test_empty_meal_counts_toward_ideal_share() {
    let mut plan = MealPlan::new(vec![
        meal("Breakfast", vec![uniform_item(1.0)]),
        meal("Morning snack", Vec::new()),
        meal("Lunch", vec![uniform_item(1.0)]),
        meal("Dinner", vec![uniform_item(1.0)]),
    ]);

    let outcome = balance_meal_distribution(&mut plan, &BalancerConfig::default());

    let BalanceOutcome::Rebalanced {
        violations,
        meal_ratios,
        ..
    } = outcome
    else {
        panic!("a 0% snack share must trigger balancing");
    };
    let offending: Vec<_> = violations.iter().map(|v| v.meal_index).collect();
    assert_eq!(offending, vec![1, 1]);

    // Four meals: breakfast targets 25% of the day, not a third
    assert!((meal_ratios[0].protein_g - 0.75).abs() < 1e-9);
    assert!((meal_ratios[0].carb_g - 0.75).abs() < 1e-9);
    assert!((meal_ratios[1].protein_g - 1.0).abs() < f64::EPSILON);
    assert_eq!(plan.meals[0].items[0].macros.protein_g, Some(22.5));
    assert!(plan.meals[1].items.is_empty());
    assert_meal_totals_consistent(&plan);
}
