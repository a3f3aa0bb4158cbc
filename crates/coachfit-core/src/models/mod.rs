// ABOUTME: Core data models shared by the nutrition engine crates
// ABOUTME: Re-exports meal plan, food item, and nutrition target types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

/// Meal plan, food item, and nutrition target models
pub mod nutrition;

pub use nutrition::{
    FoodCategory, FoodItem, ItemMacros, MacroGrams, Meal, MealPlan, MealType, Nutrient,
    NutrientFields, NutrientTotals, NutritionalTarget, Substitution,
};
