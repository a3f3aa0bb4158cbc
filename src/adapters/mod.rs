// ABOUTME: Boundary adapters converting external payloads into canonical nutrition models
// ABOUTME: Hosts the meal plan adapter for generator output
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

/// Generator meal plan normalization
pub mod meal_plan;

pub use meal_plan::{
    normalize_meal_plan, parse_meal_plan, ExternalFoodItem, ExternalMacros, ExternalMeal,
    ExternalMealPlan, LooseNumber,
};
