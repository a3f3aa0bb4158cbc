// ABOUTME: Daily nutrition target calculation from a biometric profile
// ABOUTME: Mifflin-St Jeor BMR, activity factor with routine bonus, goal adjustment, macro split
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

//! Nutrition Target Calculator
//!
//! Computes the caloric and macronutrient target a generated meal plan is
//! reconciled against. The calculation never fails: when a required profile
//! field is missing or unusable it returns `None`, and callers skip
//! reconciliation.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroSplitConfig, TargetConfig,
};
use coachfit_core::constants::energy::{KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use coachfit_core::models::{MacroGrams, NutritionalTarget};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Sex {
    /// Parse a profile value; `None` when unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" | "masculino" | "homem" => Some(Self::Male),
            "female" | "f" | "woman" | "feminino" | "mulher" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Training goal selecting the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit
    FatLoss,
    /// Caloric surplus
    MuscleGain,
    /// Caloric balance
    Maintenance,
}

impl FitnessGoal {
    /// Parse a profile value; `None` when unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        let any = |keywords: &[&str]| keywords.iter().any(|k| normalized.contains(k));

        if any(&[
            "fat loss", "weight loss", "lose", "cut", "emagrec", "perder", "perda",
        ]) {
            Some(Self::FatLoss)
        } else if any(&[
            "muscle", "gain", "bulk", "hypertroph", "hipertrof", "ganho", "ganhar",
        ]) {
            Some(Self::MuscleGain)
        } else if any(&["mainten", "maintain", "manuten", "manter"]) {
            Some(Self::Maintenance)
        } else {
            None
        }
    }
}

/// Self-reported exercise frequency tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityFrequency {
    /// No structured exercise
    #[default]
    Sedentary,
    /// 1-2 sessions per week
    OneToTwo,
    /// 3-4 sessions per week
    ThreeToFour,
    /// 5 or more sessions per week
    FivePlus,
}

impl ActivityFrequency {
    /// Parse a free-text onboarding answer
    ///
    /// The first number in the text picks the tier ("1-2x", "3 a 4 vezes",
    /// "5+"). Without a number, keywords decide. Anything unrecognized is
    /// sedentary.
    #[must_use]
    pub fn from_descriptor(descriptor: &str) -> Self {
        let lowered = descriptor.trim().to_lowercase();
        let first_number = lowered
            .split(|c: char| !c.is_ascii_digit())
            .find(|part| !part.is_empty())
            .and_then(|digits| digits.parse::<u32>().ok());

        if let Some(sessions) = first_number {
            return match sessions {
                0 => Self::Sedentary,
                1..=2 => Self::OneToTwo,
                3..=4 => Self::ThreeToFour,
                _ => Self::FivePlus,
            };
        }

        let any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));
        if any(&["sedent", "none", "never", "nenhum", "nunca"]) {
            Self::Sedentary
        } else if any(&["five", "daily", "every day", "diari", "todos os dias"]) {
            Self::FivePlus
        } else if any(&["three", "moderat", "moderad"]) {
            Self::ThreeToFour
        } else if any(&["one", "light", "leve", "occasional"]) {
            Self::OneToTwo
        } else {
            Self::Sedentary
        }
    }
}

/// Activity level of the user's daily routine outside exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DailyRoutine {
    /// Desk-bound routine, no bonus
    #[default]
    Sedentary,
    /// Some walking or standing
    Moderate,
    /// On-feet or physical work
    Active,
}

impl DailyRoutine {
    /// Parse a free-text onboarding answer; unrecognized text is sedentary
    #[must_use]
    pub fn from_descriptor(descriptor: &str) -> Self {
        let lowered = descriptor.trim().to_lowercase();
        let any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

        if any(&["sedent", "inactive", "inativ", "desk", "escritório", "escritorio"]) {
            Self::Sedentary
        } else if any(&["moderat", "moderad", "some walking"]) {
            Self::Moderate
        } else if any(&["activ", "ativ", "physical", "on my feet", "em pé", "bracal", "braçal"])
        {
            Self::Active
        } else {
            Self::Sedentary
        }
    }
}

/// Biometric profile as stored by the coaching platform
///
/// Required fields are optional here so that incomplete profiles can be
/// represented; the calculator returns `None` for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricProfile {
    /// Age in years
    #[serde(default, alias = "idade")]
    pub age: Option<u32>,
    /// Body weight in kilograms
    #[serde(default, alias = "weight", alias = "weight_kg", alias = "peso")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(default, alias = "height", alias = "height_cm", alias = "altura")]
    pub height_cm: Option<f64>,
    /// Biological sex
    #[serde(
        default,
        alias = "gender",
        alias = "sexo",
        deserialize_with = "deserialize_sex"
    )]
    pub sex: Option<Sex>,
    /// Training goal
    #[serde(default, alias = "objetivo", deserialize_with = "deserialize_goal")]
    pub goal: Option<FitnessGoal>,
    /// Free-text exercise frequency answer
    #[serde(default, alias = "activity_frequency")]
    pub activity_frequency: Option<String>,
    /// Free-text daily routine answer
    #[serde(default, alias = "daily_routine")]
    pub daily_routine: Option<String>,
}

impl BiometricProfile {
    /// First required field that is absent or unusable, by its JSON name
    ///
    /// Checked in order: age, weight, height, sex, goal. `None` means the
    /// profile is complete enough to compute a target.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        let positive = |value: Option<f64>| value.is_some_and(|v| v.is_finite() && v > 0.0);

        [
            ("age", self.age.is_some_and(|age| age > 0)),
            ("weightKg", positive(self.weight_kg)),
            ("heightCm", positive(self.height_cm)),
            ("sex", self.sex.is_some()),
            ("goal", self.goal.is_some()),
        ]
        .into_iter()
        .find(|(_, usable)| !usable)
        .map(|(field, _)| field)
    }
}

fn deserialize_sex<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Sex>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Sex::from_str_lossy))
}

fn deserialize_goal<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<FitnessGoal>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(FitnessGoal::from_str_lossy))
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// Clamped at zero so the target never carries a negative BMR.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    (weight_component + height_component + age_component + sex_constant).max(0.0)
}

/// Calculate the activity factor from frequency tier and daily routine
///
/// Tier base (1.2 / 1.375 / 1.55 / 1.725) plus routine bonus
/// (+0.05 moderate, +0.1 active), capped at 1.9.
#[must_use]
pub fn calculate_activity_factor(
    frequency: ActivityFrequency,
    routine: DailyRoutine,
    config: &ActivityFactorsConfig,
) -> f64 {
    let base = match frequency {
        ActivityFrequency::Sedentary => config.sedentary,
        ActivityFrequency::OneToTwo => config.one_to_two_per_week,
        ActivityFrequency::ThreeToFour => config.three_to_four_per_week,
        ActivityFrequency::FivePlus => config.five_plus_per_week,
    };
    let bonus = match routine {
        DailyRoutine::Sedentary => 0.0,
        DailyRoutine::Moderate => config.moderate_routine_bonus,
        DailyRoutine::Active => config.active_routine_bonus,
    };

    (base + bonus).min(config.max_factor)
}

/// Apply the goal adjustment and the daily floor to a daily expenditure
///
/// The floor is the same for both sexes. Result rounded to the nearest kcal.
#[must_use]
pub fn apply_goal_adjustment(
    daily_expenditure: f64,
    goal: FitnessGoal,
    config: &GoalAdjustmentConfig,
) -> f64 {
    let adjustment = match goal {
        FitnessGoal::FatLoss => config.fat_loss_kcal,
        FitnessGoal::MuscleGain => config.muscle_gain_kcal,
        FitnessGoal::Maintenance => config.maintenance_kcal,
    };

    (daily_expenditure + adjustment)
        .max(config.minimum_daily_kcal)
        .round()
}

/// Convert daily calories into macro grams using the goal's split
///
/// Protein and carbohydrate at 4 kcal/g, fat at 9 kcal/g, rounded to the
/// nearest gram.
#[must_use]
pub fn split_macros(calories: f64, goal: FitnessGoal, config: &MacroSplitConfig) -> MacroGrams {
    let split = match goal {
        FitnessGoal::FatLoss => config.fat_loss,
        FitnessGoal::MuscleGain => config.muscle_gain,
        FitnessGoal::Maintenance => config.maintenance,
    };
    let grams = |pct: u8, kcal_per_g: f64| (calories * f64::from(pct) / 100.0 / kcal_per_g).round();

    MacroGrams {
        protein_g: grams(split.protein_pct, KCAL_PER_G_PROTEIN),
        carb_g: grams(split.carbs_pct, KCAL_PER_G_CARB),
        fat_g: grams(split.fat_pct, KCAL_PER_G_FAT),
    }
}

/// Calculate the daily nutritional target for a profile
///
/// Returns `None` when age, weight, height, sex or goal is missing, or when a
/// numeric field is not a positive finite number.
#[must_use]
pub fn calculate_nutritional_target(
    profile: &BiometricProfile,
    config: &TargetConfig,
) -> Option<NutritionalTarget> {
    let Some((age, weight_kg, height_cm, sex, goal)) = required_fields(profile) else {
        debug!(?profile, "Profile incomplete, no nutritional target computed");
        return None;
    };

    let frequency = profile
        .activity_frequency
        .as_deref()
        .map(ActivityFrequency::from_descriptor)
        .unwrap_or_default();
    let routine = profile
        .daily_routine
        .as_deref()
        .map(DailyRoutine::from_descriptor)
        .unwrap_or_default();

    let bmr = calculate_mifflin_st_jeor(weight_kg, height_cm, age, sex, &config.bmr);
    let activity_factor = calculate_activity_factor(frequency, routine, &config.activity_factors);
    let calories = apply_goal_adjustment(bmr * activity_factor, goal, &config.goal_adjustment);
    let macros = split_macros(calories, goal, &config.macro_splits);

    debug!(
        bmr,
        activity_factor,
        calories,
        protein_g = macros.protein_g,
        carb_g = macros.carb_g,
        fat_g = macros.fat_g,
        ?goal,
        "Nutritional target computed"
    );

    Some(NutritionalTarget {
        calories,
        macros,
        basal_metabolic_rate: bmr,
        activity_factor,
    })
}

fn required_fields(profile: &BiometricProfile) -> Option<(u32, f64, f64, Sex, FitnessGoal)> {
    let positive = |value: Option<f64>| value.filter(|v| v.is_finite() && *v > 0.0);

    Some((
        profile.age.filter(|age| *age > 0)?,
        positive(profile.weight_kg)?,
        positive(profile.height_cm)?,
        profile.sex?,
        profile.goal?,
    ))
}
