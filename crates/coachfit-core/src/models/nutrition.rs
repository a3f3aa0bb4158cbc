// ABOUTME: Canonical meal plan models reconciled against a nutrition target
// ABOUTME: MealPlan, Meal, FoodItem, Substitution, MealType, FoodCategory, and NutritionalTarget
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use crate::constants::food_lexicon::{
    matches_any, ReferenceFood, ReferenceItem, BREAKFAST_KEYWORDS, DINNER_KEYWORDS,
    FRUIT_KEYWORDS, LUNCH_KEYWORDS, SNACK_KEYWORDS, VEGETABLE_KEYWORDS,
};
use serde::{Deserialize, Serialize};

/// One of the four reconciled quantities
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrate (g)
    Carb,
    /// Fat (g)
    Fat,
}

impl Nutrient {
    /// All reconciled quantities, in reporting order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carb, Self::Fat];

    /// Field name used in logs and reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein_g",
            Self::Carb => "carb_g",
            Self::Fat => "fat_g",
        }
    }
}

/// Type of meal, resolved once from the meal name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal (principal)
    Lunch,
    /// Dinner meal (principal)
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    #[default]
    Other,
}

impl MealType {
    /// Parse meal type from an exact tag string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }

    /// Classify a free-form meal name by keyword
    ///
    /// Lunch and dinner keywords are checked first, so a name matching both a
    /// principal keyword and a breakfast keyword is principal.
    #[must_use]
    pub fn from_meal_name(name: &str) -> Self {
        if matches_any(name, LUNCH_KEYWORDS) {
            Self::Lunch
        } else if matches_any(name, DINNER_KEYWORDS) {
            Self::Dinner
        } else if matches_any(name, BREAKFAST_KEYWORDS) {
            Self::Breakfast
        } else if matches_any(name, SNACK_KEYWORDS) {
            Self::Snack
        } else {
            Self::Other
        }
    }

    /// Lunch and dinner are principal meals
    #[must_use]
    pub const fn is_principal(self) -> bool {
        matches!(self, Self::Lunch | Self::Dinner)
    }
}

/// Food category tag stored on each food item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Fruit
    Fruit,
    /// Vegetable or salad
    Vegetable,
    /// Anything else
    #[default]
    Other,
}

impl FoodCategory {
    /// Classify a food name against the fruit lexicon, then the vegetable lexicon
    #[must_use]
    pub fn classify_name(name: &str) -> Self {
        if matches_any(name, FRUIT_KEYWORDS) {
            Self::Fruit
        } else if matches_any(name, VEGETABLE_KEYWORDS) {
            Self::Vegetable
        } else {
            Self::Other
        }
    }

    /// Parse an explicit category tag
    ///
    /// Returns `None` for tags that name no known category, so callers can
    /// fall back to name classification.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "fruit" | "fruits" | "fruta" | "frutas" => Some(Self::Fruit),
            "vegetable" | "vegetables" | "veggie" | "salad" | "vegetal" | "vegetais"
            | "legume" | "legumes" | "verdura" | "verduras" | "salada" => Some(Self::Vegetable),
            "other" | "outro" | "outros" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Macronutrient grams for plan headers and targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct MacroGrams {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrate (g)
    pub carb_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// Item-level macronutrients; `None` marks a missing or malformed value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ItemMacros {
    /// Protein (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrate (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carb_g: Option<f64>,
    /// Fat (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

impl ItemMacros {
    /// Macros with every value present
    #[must_use]
    pub const fn new(protein_g: f64, carb_g: f64, fat_g: f64) -> Self {
        Self {
            protein_g: Some(protein_g),
            carb_g: Some(carb_g),
            fat_g: Some(fat_g),
        }
    }
}

/// Access to the four reconciled fields of an item or substitution
pub trait NutrientFields {
    /// Raw value of a nutrient field
    fn nutrient(&self, nutrient: Nutrient) -> Option<f64>;

    /// Mutable slot of a nutrient field
    fn nutrient_mut(&mut self, nutrient: Nutrient) -> &mut Option<f64>;

    /// Finite value of a nutrient field, zero when missing or malformed
    fn nutrient_or_zero(&self, nutrient: Nutrient) -> f64 {
        self.nutrient(nutrient).filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

/// Alternate food with approximate nutrition, rescaled alongside its parent item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    /// Food name
    pub name: String,
    /// Portion description
    #[serde(default)]
    pub portion_description: String,
    /// Energy (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Macronutrients
    #[serde(default)]
    pub macros: ItemMacros,
}

impl Substitution {
    /// Create a substitution with every value present
    pub fn new(
        name: impl Into<String>,
        portion_description: impl Into<String>,
        calories: f64,
        macros: ItemMacros,
    ) -> Self {
        Self {
            name: name.into(),
            portion_description: portion_description.into(),
            calories: Some(calories),
            macros,
        }
    }

    fn from_reference(food: &ReferenceFood) -> Self {
        Self::new(
            food.name,
            food.portion,
            food.calories,
            ItemMacros::new(food.protein_g, food.carb_g, food.fat_g),
        )
    }
}

impl NutrientFields for Substitution {
    fn nutrient(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.macros.protein_g,
            Nutrient::Carb => self.macros.carb_g,
            Nutrient::Fat => self.macros.fat_g,
        }
    }

    fn nutrient_mut(&mut self, nutrient: Nutrient) -> &mut Option<f64> {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.macros.protein_g,
            Nutrient::Carb => &mut self.macros.carb_g,
            Nutrient::Fat => &mut self.macros.fat_g,
        }
    }
}

/// Individual food item within a meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Portion description
    #[serde(default)]
    pub portion_description: String,
    /// Energy (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Macronutrients
    #[serde(default)]
    pub macros: ItemMacros,
    /// Alternate foods
    #[serde(default)]
    pub substitutions: Vec<Substitution>,
    /// Category tag resolved when the item was built
    #[serde(default)]
    pub category: FoodCategory,
}

impl FoodItem {
    /// Create a food item, tagging its category from the name
    pub fn new(
        name: impl Into<String>,
        portion_description: impl Into<String>,
        calories: f64,
        macros: ItemMacros,
    ) -> Self {
        let name = name.into();
        let category = FoodCategory::classify_name(&name);
        Self {
            name,
            portion_description: portion_description.into(),
            calories: Some(calories),
            macros,
            substitutions: Vec::new(),
            category,
        }
    }

    /// Build an item from a reference food and its alternatives
    #[must_use]
    pub fn from_reference(reference: &ReferenceItem, category: FoodCategory) -> Self {
        let food = &reference.food;
        Self {
            name: food.name.to_owned(),
            portion_description: food.portion.to_owned(),
            calories: Some(food.calories),
            macros: ItemMacros::new(food.protein_g, food.carb_g, food.fat_g),
            substitutions: reference
                .substitutions
                .iter()
                .map(Substitution::from_reference)
                .collect(),
            category,
        }
    }

    /// Add a substitution
    #[must_use]
    pub fn with_substitution(mut self, substitution: Substitution) -> Self {
        self.substitutions.push(substitution);
        self
    }

    /// Override the category tag
    #[must_use]
    pub const fn with_category(mut self, category: FoodCategory) -> Self {
        self.category = category;
        self
    }
}

impl NutrientFields for FoodItem {
    fn nutrient(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.macros.protein_g,
            Nutrient::Carb => self.macros.carb_g,
            Nutrient::Fat => self.macros.fat_g,
        }
    }

    fn nutrient_mut(&mut self, nutrient: Nutrient) -> &mut Option<f64> {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.macros.protein_g,
            Nutrient::Carb => &mut self.macros.carb_g,
            Nutrient::Fat => &mut self.macros.fat_g,
        }
    }
}

/// One meal of the day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Meal name as produced by the generator
    pub name: String,
    /// Meal type tag resolved from the name
    #[serde(default)]
    pub kind: MealType,
    /// Food items
    #[serde(default)]
    pub items: Vec<FoodItem>,
    /// Sum of item calories, always recomputed
    #[serde(default)]
    pub total_calories: f64,
}

impl Meal {
    /// Create a meal, tagging its type from the name and deriving its total
    pub fn new(name: impl Into<String>, items: Vec<FoodItem>) -> Self {
        let name = name.into();
        let kind = MealType::from_meal_name(&name);
        let mut meal = Self {
            name,
            kind,
            items,
            total_calories: 0.0,
        };
        meal.recompute_total();
        meal
    }

    /// Recompute `total_calories` from item calories
    pub fn recompute_total(&mut self) {
        self.total_calories = self
            .items
            .iter()
            .map(|item| item.nutrient_or_zero(Nutrient::Calories))
            .sum();
    }

    /// Lunch or dinner
    #[must_use]
    pub const fn is_principal(&self) -> bool {
        self.kind.is_principal()
    }

    /// Number of items tagged with `category`
    #[must_use]
    pub fn count_category(&self, category: FoodCategory) -> usize {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .count()
    }
}

/// Daily meal plan with declared header totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Declared daily calories
    #[serde(default)]
    pub total_calories_per_day: f64,
    /// Declared daily macronutrients
    #[serde(default)]
    pub macro_targets: MacroGrams,
    /// Meals in serving order
    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl MealPlan {
    /// Create a plan with zeroed headers
    #[must_use]
    pub fn new(meals: Vec<Meal>) -> Self {
        Self {
            total_calories_per_day: 0.0,
            macro_targets: MacroGrams::default(),
            meals,
        }
    }

    /// Recompute every meal's `total_calories`
    pub fn recompute_meal_totals(&mut self) {
        for meal in &mut self.meals {
            meal.recompute_total();
        }
    }

    /// Number of items tagged with `category` across the day
    #[must_use]
    pub fn count_category(&self, category: FoodCategory) -> usize {
        self.meals
            .iter()
            .map(|meal| meal.count_category(category))
            .sum()
    }

    /// Overwrite the declared header totals with the target's values
    pub fn apply_target_headers(&mut self, target: &NutritionalTarget) {
        self.total_calories_per_day = target.calories;
        self.macro_targets = target.macros;
    }
}

/// Daily totals of the four reconciled quantities
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct NutrientTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrate (g)
    pub carb_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl NutrientTotals {
    /// Build totals by evaluating `f` for each quantity
    pub fn from_fn(mut f: impl FnMut(Nutrient) -> f64) -> Self {
        Self {
            calories: f(Nutrient::Calories),
            protein_g: f(Nutrient::Protein),
            carb_g: f(Nutrient::Carb),
            fat_g: f(Nutrient::Fat),
        }
    }

    /// Value of one quantity
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein_g,
            Nutrient::Carb => self.carb_g,
            Nutrient::Fat => self.fat_g,
        }
    }

    /// Add the finite nutrient values of `fields`
    pub fn accumulate(&mut self, fields: &impl NutrientFields) {
        self.calories += fields.nutrient_or_zero(Nutrient::Calories);
        self.protein_g += fields.nutrient_or_zero(Nutrient::Protein);
        self.carb_g += fields.nutrient_or_zero(Nutrient::Carb);
        self.fat_g += fields.nutrient_or_zero(Nutrient::Fat);
    }
}

/// Computed daily caloric and macronutrient target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalTarget {
    /// Daily energy target (kcal)
    pub calories: f64,
    /// Daily macronutrient targets (g)
    pub macros: MacroGrams,
    /// Basal metabolic rate the target was derived from (kcal/day)
    #[serde(default)]
    pub basal_metabolic_rate: f64,
    /// Activity multiplier applied to the BMR
    #[serde(default)]
    pub activity_factor: f64,
}

impl NutritionalTarget {
    /// Target with explicit totals and no derivation metadata
    #[must_use]
    pub const fn new(calories: f64, macros: MacroGrams) -> Self {
        Self {
            calories,
            macros,
            basal_metabolic_rate: 0.0,
            activity_factor: 0.0,
        }
    }

    /// Target values as reconcilable totals
    #[must_use]
    pub const fn totals(&self) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories,
            protein_g: self.macros.protein_g,
            carb_g: self.macros.carb_g,
            fat_g: self.macros.fat_g,
        }
    }
}
