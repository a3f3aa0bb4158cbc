// ABOUTME: Nutrition intelligence: target calculation and meal plan reconciliation
// ABOUTME: Groups the biometric target calculator and the plan reconciliation stages
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

//! # Intelligence Module
//!
//! Computes a daily nutrition target from a biometric profile and reconciles
//! generated meal plans against it.

/// Biometric profile to daily calorie and macro target
pub mod nutrition_calculator;
/// Meal plan reconciliation stages and pipeline
pub mod plan_reconciliation;

pub use nutrition_calculator::{
    calculate_nutritional_target, ActivityFrequency, BiometricProfile, DailyRoutine, FitnessGoal,
    Sex,
};
pub use plan_reconciliation::{ReconciliationPipeline, ReconciliationReport};
