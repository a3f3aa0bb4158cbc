// ABOUTME: Integration tests for the biometric target calculator
// ABOUTME: Covers BMR, activity factors, goal adjustment, macro splits, and incomplete profiles
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coachfit_nutrition::config::{ActivityFactorsConfig, BmrConfig, TargetConfig};
use coachfit_nutrition::intelligence::nutrition_calculator::{
    apply_goal_adjustment, calculate_activity_factor, calculate_mifflin_st_jeor,
    calculate_nutritional_target, split_macros, ActivityFrequency, BiometricProfile, DailyRoutine,
    FitnessGoal, Sex,
};

mod common;

fn profile(age: u32, weight: f64, height: f64, sex: Sex, goal: FitnessGoal) -> BiometricProfile {
    BiometricProfile {
        age: Some(age),
        weight_kg: Some(weight),
        height_cm: Some(height),
        sex: Some(sex),
        goal: Some(goal),
        activity_frequency: None,
        daily_routine: None,
    }
}

// ============================================================================
// BMR AND ACTIVITY FACTOR
// ============================================================================

#[test]
fn test_mifflin_st_jeor_male_and_female() {
    let config = BmrConfig::default();

    // 10 * 80 + 6.25 * 180 - 5 * 30 + 5 = 1780
    let male = calculate_mifflin_st_jeor(80.0, 180.0, 30, Sex::Male, &config);
    assert!((male - 1780.0).abs() < 1e-9);

    // 10 * 60 + 6.25 * 165 - 5 * 25 - 161 = 1345.25
    let female = calculate_mifflin_st_jeor(60.0, 165.0, 25, Sex::Female, &config);
    assert!((female - 1345.25).abs() < 1e-9);
}

#[test]
fn test_activity_factor_tiers_and_routine_bonus() {
    let config = ActivityFactorsConfig::default();

    let cases = [
        (ActivityFrequency::Sedentary, DailyRoutine::Sedentary, 1.2),
        (ActivityFrequency::OneToTwo, DailyRoutine::Sedentary, 1.375),
        (ActivityFrequency::ThreeToFour, DailyRoutine::Moderate, 1.6),
        (ActivityFrequency::FivePlus, DailyRoutine::Active, 1.825),
    ];
    for (frequency, routine, expected) in cases {
        let factor = calculate_activity_factor(frequency, routine, &config);
        assert!(
            (factor - expected).abs() < 1e-9,
            "{frequency:?}/{routine:?} gave {factor}, expected {expected}"
        );
    }
}

#[test]
fn test_activity_factor_is_capped() {
    let config = ActivityFactorsConfig {
        max_factor: 1.7,
        ..ActivityFactorsConfig::default()
    };
    let factor =
        calculate_activity_factor(ActivityFrequency::FivePlus, DailyRoutine::Active, &config);
    assert!((factor - 1.7).abs() < 1e-9);
}

#[test]
fn test_frequency_descriptors() {
    assert_eq!(
        ActivityFrequency::from_descriptor("1-2x per week"),
        ActivityFrequency::OneToTwo
    );
    assert_eq!(
        ActivityFrequency::from_descriptor("3 a 4 vezes por semana"),
        ActivityFrequency::ThreeToFour
    );
    assert_eq!(
        ActivityFrequency::from_descriptor("5+"),
        ActivityFrequency::FivePlus
    );
    assert_eq!(
        ActivityFrequency::from_descriptor("every day"),
        ActivityFrequency::FivePlus
    );
    assert_eq!(
        ActivityFrequency::from_descriptor("I never train"),
        ActivityFrequency::Sedentary
    );
    assert_eq!(
        ActivityFrequency::from_descriptor("gibberish"),
        ActivityFrequency::Sedentary
    );
}

#[test]
fn test_routine_descriptors() {
    assert_eq!(
        DailyRoutine::from_descriptor("Moderately active, some walking"),
        DailyRoutine::Moderate
    );
    assert_eq!(
        DailyRoutine::from_descriptor("Trabalho braçal"),
        DailyRoutine::Active
    );
    assert_eq!(
        DailyRoutine::from_descriptor("Inactive desk job"),
        DailyRoutine::Sedentary
    );
}

// ============================================================================
// GOAL ADJUSTMENT AND MACRO SPLIT
// ============================================================================

#[test]
fn test_goal_adjustment_applies_floor() {
    let config = TargetConfig::default().goal_adjustment;

    assert!((apply_goal_adjustment(2848.0, FitnessGoal::FatLoss, &config) - 2348.0).abs() < 1e-9);
    assert!(
        (apply_goal_adjustment(2000.0, FitnessGoal::MuscleGain, &config) - 2500.0).abs() < 1e-9
    );
    assert!((apply_goal_adjustment(900.0, FitnessGoal::FatLoss, &config) - 1200.0).abs() < 1e-9);
}

#[test]
fn test_macro_split_per_goal() {
    let config = TargetConfig::default().macro_splits;

    let fat_loss = split_macros(2000.0, FitnessGoal::FatLoss, &config);
    assert!((fat_loss.protein_g - 200.0).abs() < 1e-9);
    assert!((fat_loss.carb_g - 150.0).abs() < 1e-9);
    assert!((fat_loss.fat_g - 67.0).abs() < 1e-9);

    let gain = split_macros(3000.0, FitnessGoal::MuscleGain, &config);
    assert!((gain.protein_g - 225.0).abs() < 1e-9);
    assert!((gain.carb_g - 338.0).abs() < 1e-9);
    assert!((gain.fat_g - 83.0).abs() < 1e-9);
}

// ============================================================================
// FULL TARGET CALCULATION
// ============================================================================

#[test]
fn test_full_target_for_active_male_cutting() {
    common::init_test_logging();
    let mut input = profile(30, 80.0, 180.0, Sex::Male, FitnessGoal::FatLoss);
    input.activity_frequency = Some("3-4x per week".into());
    input.daily_routine = Some("moderate".into());

    let target = calculate_nutritional_target(&input, &TargetConfig::default()).unwrap();

    // BMR 1780 * 1.6 = 2848, minus 500
    assert!((target.calories - 2348.0).abs() < 1e-9);
    assert!((target.macros.protein_g - 235.0).abs() < 1e-9);
    assert!((target.macros.carb_g - 176.0).abs() < 1e-9);
    assert!((target.macros.fat_g - 78.0).abs() < 1e-9);
    assert!((target.basal_metabolic_rate - 1780.0).abs() < 1e-9);
    assert!((target.activity_factor - 1.6).abs() < 1e-9);
}

#[test]
fn test_full_target_for_sedentary_female_maintaining() {
    let input = profile(25, 60.0, 165.0, Sex::Female, FitnessGoal::Maintenance);

    let target = calculate_nutritional_target(&input, &TargetConfig::default()).unwrap();

    // 1345.25 * 1.2 = 1614.3
    assert!((target.calories - 1614.0).abs() < 1e-9);
    assert!((target.macros.protein_g - 121.0).abs() < 1e-9);
    assert!((target.macros.carb_g - 161.0).abs() < 1e-9);
    assert!((target.macros.fat_g - 54.0).abs() < 1e-9);
}

#[test]
fn test_floor_applies_to_small_profiles() {
    let input = profile(70, 40.0, 140.0, Sex::Female, FitnessGoal::FatLoss);

    let target = calculate_nutritional_target(&input, &TargetConfig::default()).unwrap();

    assert!((target.calories - 1200.0).abs() < 1e-9);
}

#[test]
fn test_portuguese_profile_deserializes() {
    let input: BiometricProfile = serde_json::from_str(
        r#"{
            "idade": 30,
            "peso": 80,
            "altura": 180,
            "sexo": "masculino",
            "objetivo": "emagrecimento",
            "activityFrequency": "3 a 4 vezes",
            "dailyRoutine": "moderado"
        }"#,
    )
    .unwrap();

    let target = calculate_nutritional_target(&input, &TargetConfig::default()).unwrap();
    assert!((target.calories - 2348.0).abs() < 1e-9);
}

#[test]
fn test_incomplete_profiles_yield_no_target() {
    let config = TargetConfig::default();
    let complete = profile(30, 80.0, 180.0, Sex::Male, FitnessGoal::Maintenance);
    assert!(calculate_nutritional_target(&complete, &config).is_some());

    let mut missing_sex = complete.clone();
    missing_sex.sex = None;
    assert!(calculate_nutritional_target(&missing_sex, &config).is_none());

    let mut missing_goal = complete.clone();
    missing_goal.goal = None;
    assert!(calculate_nutritional_target(&missing_goal, &config).is_none());

    let mut zero_weight = complete.clone();
    zero_weight.weight_kg = Some(0.0);
    assert!(calculate_nutritional_target(&zero_weight, &config).is_none());

    let mut negative_height = complete;
    negative_height.height_cm = Some(-170.0);
    assert!(calculate_nutritional_target(&negative_height, &config).is_none());
}

#[test]
fn test_unrecognized_sex_counts_as_missing() {
    let input: BiometricProfile = serde_json::from_str(
        r#"{"age": 30, "weightKg": 80, "heightCm": 180, "sex": "unknown", "goal": "maintain"}"#,
    )
    .unwrap();

    assert_eq!(input.sex, None);
    assert!(calculate_nutritional_target(&input, &TargetConfig::default()).is_none());
}
