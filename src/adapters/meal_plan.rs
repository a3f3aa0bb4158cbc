// ABOUTME: Boundary adapter normalizing generator-produced meal plan JSON into the canonical model
// ABOUTME: Accepts nested, flat, and wrapped shapes with English/Portuguese keys and loose numbers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

//! Meal plan boundary adapter
//!
//! The plan generator is an LLM-backed collaborator whose output shape drifts:
//! header totals come nested or flattened, keys come in English or
//! Portuguese, and numbers come as JSON numbers or as strings with units.
//! Each known shape is an explicit variant of [`ExternalMealPlan`]; anything
//! else is rejected as `InvalidFormat`.

use crate::intelligence::plan_reconciliation::aggregate_plan;
use coachfit_core::constants::energy::{KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use coachfit_core::errors::AppResult;
use coachfit_core::models::{
    FoodCategory, FoodItem, ItemMacros, MacroGrams, Meal, MealPlan, MealType, Nutrient,
    NutrientFields, Substitution,
};
use serde::Deserialize;
use tracing::debug;

/// A number that may arrive as a JSON number or as text such as `"150 g"`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LooseNumber {
    /// Plain JSON number
    Number(f64),
    /// Numeric text, optionally with a unit suffix and a decimal comma
    Text(String),
}

impl LooseNumber {
    /// Finite numeric value, `None` when the text holds no number
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let parsed = match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => {
                let numeric: String = text
                    .trim()
                    .chars()
                    .take_while(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+'))
                    .map(|c| if c == ',' { '.' } else { c })
                    .collect();
                numeric.parse::<f64>().ok()
            }
        };
        parsed.filter(|n| n.is_finite())
    }
}

fn loose(value: Option<&LooseNumber>) -> Option<f64> {
    value.and_then(LooseNumber::value)
}

/// Declared macro totals as a nested object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalMacros {
    /// Declared calories
    #[serde(default, alias = "kcal", alias = "calorias", alias = "totalCalories")]
    pub calories: Option<LooseNumber>,
    /// Declared protein (g)
    #[serde(default, alias = "protein_g", alias = "proteinG", alias = "proteina", alias = "proteinas")]
    pub protein: Option<LooseNumber>,
    /// Declared carbohydrate (g)
    #[serde(
        default,
        alias = "carb",
        alias = "carb_g",
        alias = "carbG",
        alias = "carbohydrates",
        alias = "carboidratos"
    )]
    pub carbs: Option<LooseNumber>,
    /// Declared fat (g)
    #[serde(default, alias = "fat_g", alias = "fatG", alias = "fats", alias = "gordura", alias = "gorduras")]
    pub fat: Option<LooseNumber>,
}

/// A food item or substitution as produced by the generator
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalFoodItem {
    /// Food name
    #[serde(default, alias = "nome", alias = "food", alias = "alimento")]
    pub name: String,
    /// Portion description
    #[serde(
        default,
        alias = "portion",
        alias = "portion_description",
        alias = "porcao",
        alias = "quantity",
        alias = "quantidade"
    )]
    pub portion_description: Option<String>,
    /// Calories
    #[serde(default, alias = "kcal", alias = "calorias")]
    pub calories: Option<LooseNumber>,
    /// Protein (g)
    #[serde(default, alias = "protein_g", alias = "proteinG", alias = "proteina")]
    pub protein: Option<LooseNumber>,
    /// Carbohydrate (g)
    #[serde(
        default,
        alias = "carb",
        alias = "carb_g",
        alias = "carbG",
        alias = "carbohydrates",
        alias = "carboidratos"
    )]
    pub carbs: Option<LooseNumber>,
    /// Fat (g)
    #[serde(default, alias = "fat_g", alias = "fatG", alias = "fats", alias = "gordura")]
    pub fat: Option<LooseNumber>,
    /// Nested macros, used when the flat fields are absent
    #[serde(default, alias = "macronutrients", alias = "macronutrientes")]
    pub macros: Option<ExternalMacros>,
    /// Explicit category tag
    #[serde(default, alias = "categoria", alias = "tag")]
    pub category: Option<String>,
    /// Alternative foods
    #[serde(
        default,
        alias = "substituicoes",
        alias = "substitutes",
        alias = "alternatives"
    )]
    pub substitutions: Vec<ExternalFoodItem>,
}

/// A meal as produced by the generator
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalMeal {
    /// Meal name
    #[serde(default, alias = "nome", alias = "refeicao", alias = "title")]
    pub name: String,
    /// Explicit meal type tag
    #[serde(default, alias = "type", alias = "tipo", alias = "mealType", alias = "meal_type")]
    pub kind: Option<String>,
    /// Food items
    #[serde(default, alias = "foods", alias = "alimentos", alias = "itens")]
    pub items: Vec<ExternalFoodItem>,
}

/// Every plan shape the generator is known to emit
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExternalMealPlan {
    /// Plan wrapped in an envelope object
    Wrapped {
        /// Inner plan
        #[serde(alias = "mealPlan", alias = "meal_plan", alias = "plano")]
        plan: Box<ExternalMealPlan>,
    },
    /// Header totals in a nested `macroTargets` (or `totals`) object
    #[serde(rename_all = "camelCase")]
    Nested {
        /// Declared daily calories
        #[serde(default, alias = "total_calories_per_day", alias = "totalCalories")]
        total_calories_per_day: Option<LooseNumber>,
        /// Declared daily macros
        #[serde(alias = "macro_targets", alias = "totals", alias = "macros")]
        macro_targets: ExternalMacros,
        /// Meals
        #[serde(alias = "refeicoes")]
        meals: Vec<ExternalMeal>,
    },
    /// Header totals flattened onto the plan object
    #[serde(rename_all = "camelCase")]
    Flat {
        /// Declared daily calories
        #[serde(
            default,
            alias = "totalCaloriesPerDay",
            alias = "total_calories",
            alias = "calories",
            alias = "calorias"
        )]
        total_calories: Option<LooseNumber>,
        /// Declared protein (g)
        #[serde(default, alias = "protein_g", alias = "proteina")]
        protein: Option<LooseNumber>,
        /// Declared carbohydrate (g)
        #[serde(default, alias = "carb", alias = "carb_g", alias = "carboidratos")]
        carbs: Option<LooseNumber>,
        /// Declared fat (g)
        #[serde(default, alias = "fat_g", alias = "gordura")]
        fat: Option<LooseNumber>,
        /// Meals
        #[serde(alias = "refeicoes")]
        meals: Vec<ExternalMeal>,
    },
}

/// Parse generator JSON into a canonical plan
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not JSON or matches no known
/// plan shape.
pub fn parse_meal_plan(json: &str) -> AppResult<MealPlan> {
    let external: ExternalMealPlan = serde_json::from_str(json)?;
    Ok(normalize_meal_plan(external))
}

/// Convert an external plan into the canonical model
///
/// Meal kinds and food categories are resolved here, once. Missing header
/// totals fall back to the sums of the item values.
#[must_use]
pub fn normalize_meal_plan(external: ExternalMealPlan) -> MealPlan {
    let (declared_calories, declared_macros, meals) = match external {
        ExternalMealPlan::Wrapped { plan } => return normalize_meal_plan(*plan),
        ExternalMealPlan::Nested {
            total_calories_per_day,
            macro_targets,
            meals,
        } => (
            loose(total_calories_per_day.as_ref()).or_else(|| loose(macro_targets.calories.as_ref())),
            [macro_targets.protein, macro_targets.carbs, macro_targets.fat],
            meals,
        ),
        ExternalMealPlan::Flat {
            total_calories,
            protein,
            carbs,
            fat,
            meals,
        } => (loose(total_calories.as_ref()), [protein, carbs, fat], meals),
    };

    let mut plan = MealPlan::new(meals.into_iter().map(normalize_meal).collect());
    let sums = aggregate_plan(&plan);
    let [protein, carbs, fat] = declared_macros;

    plan.total_calories_per_day = declared_calories.unwrap_or(sums.calories);
    plan.macro_targets = MacroGrams {
        protein_g: loose(protein.as_ref()).unwrap_or(sums.protein_g),
        carb_g: loose(carbs.as_ref()).unwrap_or(sums.carb_g),
        fat_g: loose(fat.as_ref()).unwrap_or(sums.fat_g),
    };

    debug!(
        meals = plan.meals.len(),
        items = plan.meals.iter().map(|meal| meal.items.len()).sum::<usize>(),
        "Meal plan normalized"
    );

    plan
}

fn normalize_meal(external: ExternalMeal) -> Meal {
    let items = external.items.into_iter().map(normalize_item).collect();
    let mut meal = Meal::new(external.name, items);

    if let Some(tag) = external.kind.as_deref() {
        let kind = MealType::from_str_lossy(tag);
        if kind != MealType::Other {
            meal.kind = kind;
        }
    }

    meal
}

fn item_macros(external: &ExternalFoodItem) -> ItemMacros {
    let nested = external.macros.as_ref();
    ItemMacros {
        protein_g: loose(external.protein.as_ref())
            .or_else(|| nested.and_then(|m| loose(m.protein.as_ref()))),
        carb_g: loose(external.carbs.as_ref())
            .or_else(|| nested.and_then(|m| loose(m.carbs.as_ref()))),
        fat_g: loose(external.fat.as_ref()).or_else(|| nested.and_then(|m| loose(m.fat.as_ref()))),
    }
}

/// Calories from the item, or derived from its macros when all three are known
fn item_calories(external: &ExternalFoodItem, macros: &ItemMacros) -> Option<f64> {
    loose(external.calories.as_ref())
        .or_else(|| external.macros.as_ref().and_then(|m| loose(m.calories.as_ref())))
        .or_else(|| match (macros.protein_g, macros.carb_g, macros.fat_g) {
            (Some(protein), Some(carb), Some(fat)) => Some(
                fat.mul_add(
                    KCAL_PER_G_FAT,
                    protein.mul_add(KCAL_PER_G_PROTEIN, carb * KCAL_PER_G_CARB),
                ),
            ),
            _ => None,
        })
}

fn normalize_substitution(external: ExternalFoodItem) -> Substitution {
    let macros = item_macros(&external);
    let calories = item_calories(&external, &macros);
    Substitution {
        name: external.name,
        portion_description: external.portion_description.unwrap_or_default(),
        calories,
        macros,
    }
}

fn normalize_item(external: ExternalFoodItem) -> FoodItem {
    let macros = item_macros(&external);
    let calories = item_calories(&external, &macros);
    let category = external
        .category
        .as_deref()
        .and_then(FoodCategory::from_tag)
        .unwrap_or_else(|| FoodCategory::classify_name(&external.name));

    let mut item = FoodItem::new(
        external.name,
        external.portion_description.unwrap_or_default(),
        0.0,
        macros,
    )
    .with_category(category);
    *item.nutrient_mut(Nutrient::Calories) = calories;
    item.substitutions = external
        .substitutions
        .into_iter()
        .map(normalize_substitution)
        .collect();
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_number_text_forms() {
        assert_eq!(LooseNumber::Text("150 g".into()).value(), Some(150.0));
        assert_eq!(LooseNumber::Text("12,5g".into()).value(), Some(12.5));
        assert_eq!(LooseNumber::Text("about 10".into()).value(), None);
        assert_eq!(LooseNumber::Number(f64::NAN).value(), None);
    }

    #[test]
    fn test_calories_derived_from_macros() {
        let item = normalize_item(ExternalFoodItem {
            name: "Yogurt".into(),
            protein: Some(LooseNumber::Number(10.0)),
            carbs: Some(LooseNumber::Number(5.0)),
            fat: Some(LooseNumber::Number(2.0)),
            ..ExternalFoodItem::default()
        });
        assert_eq!(item.calories, Some(78.0));
    }

    #[test]
    fn test_category_tag_overrides_name() {
        let item = normalize_item(ExternalFoodItem {
            name: "Green smoothie".into(),
            category: Some("vegetable".into()),
            ..ExternalFoodItem::default()
        });
        assert_eq!(item.category, FoodCategory::Vegetable);
        assert_eq!(item.calories, None);
    }
}
