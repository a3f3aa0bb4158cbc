// ABOUTME: Configuration module for the nutrition target and plan reconciliation engine
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit
//! Configuration module for the Coachfit nutrition engine
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - BMR coefficients, activity factors, goal adjustments, macro splits
//! - `reconciliation` - Reconciler tolerances, balancer bands, guarantor minimums, pipeline mode
//! - `error` - Validation and parsing errors
//!
//! Defaults are compiled in. Individual values can be overridden through
//! `COACHFIT_*` environment variables, after which the whole configuration is
//! validated.

/// Configuration validation errors
pub mod error;
/// Nutrition target configuration
pub mod nutrition;
/// Plan reconciliation configuration
pub mod reconciliation;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroDistribution, MacroSplitConfig,
    TargetConfig,
};
pub use reconciliation::{
    BalancerConfig, BalancingStrategy, GuarantorConfig, PipelineConfig, PipelineMode,
    ReconcilerConfig, ShareBand,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<NutritionEngineConfig> = OnceLock::new();

/// Main nutrition engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionEngineConfig {
    /// Configuration for target calculation
    pub target: TargetConfig,
    /// Configuration for the proportional reconciler
    pub reconciler: ReconcilerConfig,
    /// Configuration for the meal distribution balancer
    pub balancer: BalancerConfig,
    /// Configuration for the category guarantor
    pub guarantor: GuarantorConfig,
    /// Configuration for pipeline orchestration
    pub pipeline: PipelineConfig,
}

impl NutritionEngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            balancing_strategy = %config.balancer.strategy,
            pipeline_mode = ?config.pipeline.mode,
            "Nutrition engine configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any subsystem configuration is inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.target.validate()?;

        let reconciler = &self.reconciler;
        if !(0.0..1.0).contains(&reconciler.fast_path_tolerance) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "fast_path_tolerance must be in [0, 1), got {}",
                reconciler.fast_path_tolerance
            )));
        }
        if reconciler.epsilon <= 0.0 {
            return Err(ConfigError::InvalidRange("epsilon must be positive"));
        }
        if reconciler.decimal_places > 6 || self.balancer.decimal_places > 6 {
            return Err(ConfigError::InvalidRange(
                "decimal_places must be between 0 and 6",
            ));
        }

        self.balancer.validate()?;

        if self.pipeline.max_iterations == 0 {
            return Err(ConfigError::InvalidRange(
                "pipeline max_iterations must be at least 1",
            ));
        }
        if self.pipeline.convergence_tolerance <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "pipeline convergence_tolerance must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Target overrides
        Self::apply_env_var(
            "COACHFIT_TARGET_MIN_DAILY_KCAL",
            &mut self.target.goal_adjustment.minimum_daily_kcal,
        )?;
        Self::apply_env_var(
            "COACHFIT_TARGET_FAT_LOSS_KCAL",
            &mut self.target.goal_adjustment.fat_loss_kcal,
        )?;
        Self::apply_env_var(
            "COACHFIT_TARGET_MUSCLE_GAIN_KCAL",
            &mut self.target.goal_adjustment.muscle_gain_kcal,
        )?;
        Self::apply_env_var(
            "COACHFIT_ACTIVITY_MAX_FACTOR",
            &mut self.target.activity_factors.max_factor,
        )?;

        // Reconciler overrides
        Self::apply_env_var(
            "COACHFIT_RECONCILER_FAST_PATH_TOLERANCE",
            &mut self.reconciler.fast_path_tolerance,
        )?;
        Self::apply_env_var(
            "COACHFIT_RECONCILER_DECIMAL_PLACES",
            &mut self.reconciler.decimal_places,
        )?;

        // Balancer overrides
        Self::apply_env_var("COACHFIT_BALANCER_STRATEGY", &mut self.balancer.strategy)?;
        Self::apply_env_var(
            "COACHFIT_BALANCER_PRINCIPAL_TARGET_SHARE",
            &mut self.balancer.principal_target_share,
        )?;

        // Guarantor overrides
        Self::apply_env_var(
            "COACHFIT_GUARANTOR_MIN_FRUIT_ITEMS",
            &mut self.guarantor.min_fruit_items,
        )?;
        Self::apply_env_var(
            "COACHFIT_GUARANTOR_REQUIRE_PRINCIPAL_VEGETABLE",
            &mut self.guarantor.require_principal_vegetable,
        )?;

        // Pipeline overrides
        Self::apply_env_var("COACHFIT_PIPELINE_MODE", &mut self.pipeline.mode)?;
        Self::apply_env_var(
            "COACHFIT_PIPELINE_MAX_ITERATIONS",
            &mut self.pipeline.max_iterations,
        )?;
        Self::apply_env_var(
            "COACHFIT_PIPELINE_CONVERGENCE_TOLERANCE",
            &mut self.pipeline.convergence_tolerance,
        )?;

        Ok(self)
    }
}
