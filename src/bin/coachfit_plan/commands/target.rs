// ABOUTME: Target command for coachfit-plan
// ABOUTME: Computes the daily calorie and macro target of a biometric profile
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use coachfit_nutrition::config::NutritionEngineConfig;
use coachfit_nutrition::errors::{AppError, AppResult};
use coachfit_nutrition::intelligence::{calculate_nutritional_target, BiometricProfile};
use coachfit_nutrition::logging::EngineLogger;
use serde_json::json;
use std::path::Path;

use crate::helpers::display::print_json;
use crate::helpers::io::read_json;

type Result<T> = AppResult<T>;

/// Compute and print the target for the profile at `profile_path`
pub fn run(config: &NutritionEngineConfig, profile_path: &Path, pretty: bool) -> Result<()> {
    let profile: BiometricProfile = read_json(profile_path)?;

    let Some(target) = calculate_nutritional_target(&profile, &config.target) else {
        let field = profile.missing_field().unwrap_or("profile");
        return Err(AppError::missing_field(field).with_details(json!({ "profile": profile })));
    };

    EngineLogger::log_target_calculated(&target);
    print_json(&target, pretty)
}
