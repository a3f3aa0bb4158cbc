// ABOUTME: Main library entry point for the Coachfit nutrition engine
// ABOUTME: Computes nutrition targets and reconciles generated meal plans against them
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

#![deny(unsafe_code)]

//! # Coachfit Nutrition
//!
//! Nutrition target calculation and meal plan reconciliation.
//!
//! Given a biometric profile, the engine computes a daily calorie and
//! macronutrient target. Given a meal plan produced by an external generator,
//! it normalizes the plan and transforms it deterministically so that:
//!
//! - day totals match the target exactly
//! - no meal carries an implausible share of the day
//! - fruit and vegetable coverage meets fixed minimums
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coachfit_nutrition::adapters::parse_meal_plan;
//! use coachfit_nutrition::config::NutritionEngineConfig;
//! use coachfit_nutrition::errors::AppResult;
//! use coachfit_nutrition::intelligence::{
//!     calculate_nutritional_target, BiometricProfile, ReconciliationPipeline,
//! };
//!
//! fn main() -> AppResult<()> {
//!     let config = NutritionEngineConfig::global();
//!     let profile: BiometricProfile = serde_json::from_str(
//!         r#"{"age": 30, "weightKg": 80, "heightCm": 180, "sex": "male", "goal": "fat loss"}"#,
//!     )?;
//!     let target = calculate_nutritional_target(&profile, &config.target);
//!
//!     let mut plan = parse_meal_plan(r#"{"meals": []}"#)?;
//!     ReconciliationPipeline::new(config).run(&mut plan, target.as_ref());
//!     Ok(())
//! }
//! ```

/// Boundary adapters for external payloads
pub mod adapters;

/// Engine configuration and environment overrides
pub mod config;

/// Target calculation and plan reconciliation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use coachfit_core::{constants, errors, models};
