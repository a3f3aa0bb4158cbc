// ABOUTME: Input helpers for coachfit-plan
// ABOUTME: Reads JSON files or stdin and resolves the nutrition target from a profile or target file
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use coachfit_nutrition::config::NutritionEngineConfig;
use coachfit_nutrition::errors::{AppError, AppResult};
use coachfit_nutrition::intelligence::{calculate_nutritional_target, BiometricProfile};
use coachfit_nutrition::logging::EngineLogger;
use coachfit_nutrition::models::NutritionalTarget;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

type Result<T> = AppResult<T>;

/// Read a whole file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    debug!(path = %path.display(), "Reading input file");
    fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_details(json!({ "path": path.display().to_string() }))
    })
}

/// Read and deserialize a JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_input(path)?;
    serde_json::from_str(&text).map_err(|e| {
        let line = e.line();
        AppError::from(e).with_details(json!({
            "path": path.display().to_string(),
            "line": line,
        }))
    })
}

/// Where the nutrition target comes from
pub enum TargetSource {
    /// Computed from a biometric profile
    Profile(PathBuf),
    /// Read as-is from a target document
    Target(PathBuf),
}

impl TargetSource {
    /// Pick the source from command arguments, an explicit target first
    pub fn from_args(profile: Option<PathBuf>, target: Option<PathBuf>) -> Option<Self> {
        target.map(Self::Target).or_else(|| profile.map(Self::Profile))
    }

    /// Load or compute the target
    ///
    /// An incomplete profile yields `Ok(None)`.
    pub fn resolve(&self, config: &NutritionEngineConfig) -> Result<Option<NutritionalTarget>> {
        match self {
            Self::Target(path) => read_json(path).map(Some),
            Self::Profile(path) => {
                let profile: BiometricProfile = read_json(path)?;
                let target = calculate_nutritional_target(&profile, &config.target);
                match &target {
                    Some(target) => EngineLogger::log_target_calculated(target),
                    None => warn!(path = %path.display(), "Profile incomplete, no target computed"),
                }
                Ok(target)
            }
        }
    }
}
