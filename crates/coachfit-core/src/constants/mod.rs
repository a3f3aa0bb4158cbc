// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups service identity, meal keywords, and food lexicons
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Meal-name keywords, food-name lexicons, and reference foods
pub mod food_lexicon;

/// Service names used in structured logging
pub mod service_names {
    /// Name reported by the engine's logging setup
    pub const COACHFIT_NUTRITION: &str = "coachfit-nutrition";
}

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARB: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}
