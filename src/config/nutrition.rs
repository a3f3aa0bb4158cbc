// ABOUTME: Nutrition target configuration for BMR, activity factors, goals, and macro splits
// ABOUTME: Defaults encode Mifflin-St Jeor coefficients and the coaching platform's goal tables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

//! Nutrition Target Configuration
//!
//! Provides configuration for computing a user's daily caloric and macronutrient
//! target from a biometric profile.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Target calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers and routine bonuses
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-based calorie adjustment and floor
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Goal-based macronutrient split tables
    pub macro_splits: MacroSplitConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for total daily expenditure
///
/// The frequency tier sets the base factor; the daily routine adds a small
/// bonus on top, and the sum is capped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (no structured exercise): 1.2
    pub sedentary: f64,
    /// Exercise 1-2 times per week: 1.375
    pub one_to_two_per_week: f64,
    /// Exercise 3-4 times per week: 1.55
    pub three_to_four_per_week: f64,
    /// Exercise 5 or more times per week: 1.725
    pub five_plus_per_week: f64,
    /// Bonus for a moderately active daily routine: 0.05
    pub moderate_routine_bonus: f64,
    /// Bonus for an active daily routine: 0.1
    pub active_routine_bonus: f64,
    /// Upper bound of the combined factor: 1.9
    pub max_factor: f64,
}

/// Goal-based calorie adjustment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Calories added for fat loss (negative for a deficit): -500
    pub fat_loss_kcal: f64,
    /// Calories added for muscle gain: +500
    pub muscle_gain_kcal: f64,
    /// Calories added for maintenance: 0
    pub maintenance_kcal: f64,
    /// Daily floor applied regardless of sex: 1200
    pub minimum_daily_kcal: f64,
}

/// Macro distribution as percentages of daily calories (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    fn sum(self) -> u8 {
        self.protein_pct
            .saturating_add(self.carbs_pct)
            .saturating_add(self.fat_pct)
    }
}

/// Macro split table per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Fat loss: 40% protein, 30% carbs, 30% fat
    pub fat_loss: MacroDistribution,
    /// Muscle gain: 30% protein, 45% carbs, 25% fat
    pub muscle_gain: MacroDistribution,
    /// Maintenance: 30% protein, 40% carbs, 30% fat
    pub maintenance: MacroDistribution,
}

impl MacroSplitConfig {
    /// Validate that every goal's distribution sums to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if any goal's macro percentages
    /// (protein + carbs + fat) do not sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("fat_loss", self.fat_loss),
            ("muscle_gain", self.muscle_gain),
            ("maintenance", self.maintenance),
        ];

        for (name, split) in splits {
            let sum = split.sum();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }

        Ok(())
    }
}

impl TargetConfig {
    /// Validate target configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the activity tiers are not ascending, the cap is
    /// below a tier, the floor is not positive, or a macro split is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        if factors.sedentary >= factors.one_to_two_per_week
            || factors.one_to_two_per_week >= factors.three_to_four_per_week
            || factors.three_to_four_per_week >= factors.five_plus_per_week
        {
            return Err(ConfigError::InvalidRange(
                "Activity factor tiers must be in ascending order",
            ));
        }
        if factors.max_factor < factors.five_plus_per_week {
            return Err(ConfigError::InvalidRange(
                "max_factor must be >= the highest activity tier",
            ));
        }
        if factors.moderate_routine_bonus < 0.0 || factors.active_routine_bonus < 0.0 {
            return Err(ConfigError::InvalidRange(
                "Routine bonuses must be non-negative",
            ));
        }
        if self.goal_adjustment.minimum_daily_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "minimum_daily_kcal must be positive, got {}",
                self.goal_adjustment.minimum_daily_kcal
            )));
        }

        self.macro_splits.validate()
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            one_to_two_per_week: 1.375,
            three_to_four_per_week: 1.55,
            five_plus_per_week: 1.725,
            moderate_routine_bonus: 0.05,
            active_routine_bonus: 0.1,
            max_factor: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            fat_loss_kcal: -500.0,
            muscle_gain_kcal: 500.0,
            maintenance_kcal: 0.0,
            minimum_daily_kcal: 1200.0,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            // Higher protein preserves lean mass in a deficit
            fat_loss: MacroDistribution::new(40, 30, 30),
            muscle_gain: MacroDistribution::new(30, 45, 25),
            maintenance: MacroDistribution::new(30, 40, 30),
        }
    }
}
