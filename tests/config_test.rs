// ABOUTME: Integration tests for nutrition engine configuration loading and validation
// ABOUTME: Covers defaults, COACHFIT_* environment overrides, and rejected values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coachfit_nutrition::config::{
    BalancingStrategy, ConfigError, MacroDistribution, NutritionEngineConfig, PipelineMode,
    ShareBand,
};
use coachfit_nutrition::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;

const OVERRIDE_VARS: &[&str] = &[
    "COACHFIT_BALANCER_STRATEGY",
    "COACHFIT_PIPELINE_MODE",
    "COACHFIT_PIPELINE_MAX_ITERATIONS",
    "COACHFIT_GUARANTOR_MIN_FRUIT_ITEMS",
    "COACHFIT_TARGET_MIN_DAILY_KCAL",
    "COACHFIT_BALANCER_PRINCIPAL_TARGET_SHARE",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_validation() {
    let config = NutritionEngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.balancer.strategy, BalancingStrategy::Blended);
    assert_eq!(config.pipeline.mode, PipelineMode::TwoPass);
    assert_eq!(config.guarantor.min_fruit_items, 2);
    assert!(config.guarantor.require_principal_vegetable);
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_overrides();
    env::set_var("COACHFIT_BALANCER_STRATEGY", "per-nutrient");
    env::set_var("COACHFIT_PIPELINE_MODE", "fixed_point");
    env::set_var("COACHFIT_PIPELINE_MAX_ITERATIONS", "6");
    env::set_var("COACHFIT_GUARANTOR_MIN_FRUIT_ITEMS", "3");
    env::set_var("COACHFIT_TARGET_MIN_DAILY_KCAL", "1400");

    let config = NutritionEngineConfig::load().unwrap();

    assert_eq!(config.balancer.strategy, BalancingStrategy::PerNutrient);
    assert_eq!(config.pipeline.mode, PipelineMode::FixedPoint);
    assert_eq!(config.pipeline.max_iterations, 6);
    assert_eq!(config.guarantor.min_fruit_items, 3);
    assert!((config.target.goal_adjustment.minimum_daily_kcal - 1400.0).abs() < f64::EPSILON);

    clear_overrides();
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("COACHFIT_PIPELINE_MAX_ITERATIONS", "many");

    let err = NutritionEngineConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    clear_overrides();
}

#[test]
#[serial]
fn test_unknown_strategy_is_rejected() {
    clear_overrides();
    env::set_var("COACHFIT_BALANCER_STRATEGY", "random");

    assert!(matches!(
        NutritionEngineConfig::load(),
        Err(ConfigError::Parse(_))
    ));

    clear_overrides();
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    env::set_var("COACHFIT_BALANCER_PRINCIPAL_TARGET_SHARE", "55");

    assert!(matches!(
        NutritionEngineConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_overrides();
}

#[test]
fn test_inverted_share_band_is_invalid() {
    let mut config = NutritionEngineConfig::default();
    config.balancer.regular_band = ShareBand::new(35.0, 20.0);

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_macro_split_must_sum_to_100() {
    let mut config = NutritionEngineConfig::default();
    config.target.macro_splits.fat_loss = MacroDistribution::new(40, 40, 30);

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_zero_iteration_cap_is_invalid() {
    let mut config = NutritionEngineConfig::default();
    config.pipeline.max_iterations = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_maps_to_config_invalid() {
    let app_error: AppError = ConfigError::Parse("Invalid COACHFIT_PIPELINE_MODE".into()).into();

    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
    assert_eq!(app_error.exit_code(), 78);
    assert!(app_error.message.contains("COACHFIT_PIPELINE_MODE"));
}

#[test]
fn test_share_band_is_inclusive() {
    let band = ShareBand::new(20.0, 35.0);
    assert!(band.contains(20.0));
    assert!(band.contains(35.0));
    assert!(!band.contains(35.01));
}

#[test]
fn test_strategy_round_trips_through_display() {
    for strategy in [BalancingStrategy::Blended, BalancingStrategy::PerNutrient] {
        let parsed: BalancingStrategy = strategy.to_string().parse().unwrap();
        assert_eq!(parsed, strategy);
    }
}
