// ABOUTME: Inspect command for coachfit-plan
// ABOUTME: Reports plan totals, per-meal shares, share violations, and coverage gaps
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use coachfit_nutrition::adapters::parse_meal_plan;
use coachfit_nutrition::config::NutritionEngineConfig;
use coachfit_nutrition::errors::AppResult;
use coachfit_nutrition::intelligence::plan_reconciliation::{
    aggregate_plan, find_share_violations, meal_shares, relative_deviations, MealShare,
    ShareViolation,
};
use coachfit_nutrition::models::{FoodCategory, NutrientTotals, NutritionalTarget};
use serde::Serialize;
use std::path::Path;

use crate::helpers::display::print_json;
use crate::helpers::io::{read_input, TargetSource};

type Result<T> = AppResult<T>;

#[derive(Serialize)]
struct PlanInspection {
    totals: NutrientTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<NutritionalTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relative_deviation: Option<NutrientTotals>,
    meals: Vec<MealShare>,
    share_violations: Vec<ShareViolation>,
    fruit_items: usize,
    principal_meals_without_vegetable: Vec<String>,
}

/// Print a read-only report of the plan at `plan_path`
pub fn run(
    config: &NutritionEngineConfig,
    plan_path: &Path,
    source: Option<&TargetSource>,
    pretty: bool,
) -> Result<()> {
    let plan = parse_meal_plan(&read_input(plan_path)?)?;
    let target = match source {
        Some(source) => source.resolve(config)?,
        None => None,
    };

    let totals = aggregate_plan(&plan);
    let inspection = PlanInspection {
        totals,
        target,
        relative_deviation: target.map(|t| relative_deviations(&totals, &t.totals())),
        meals: meal_shares(&plan),
        share_violations: find_share_violations(&plan, &config.balancer),
        fruit_items: plan.count_category(FoodCategory::Fruit),
        principal_meals_without_vegetable: plan
            .meals
            .iter()
            .filter(|meal| meal.is_principal() && meal.count_category(FoodCategory::Vegetable) == 0)
            .map(|meal| meal.name.clone())
            .collect(),
    };

    print_json(&inspection, pretty)
}
