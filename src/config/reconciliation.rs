// ABOUTME: Plan reconciliation configuration for scaling, meal balancing, and category coverage
// ABOUTME: Tolerances, share bands, balancing strategy, fruit minimum, and pipeline mode
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Proportional reconciler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Relative deviation below which the plan is left untouched: 0.01 (1%)
    pub fast_path_tolerance: f64,
    /// Lower bound of the divisor when computing scale factors
    pub epsilon: f64,
    /// Decimal places kept on scaled values: 2
    pub decimal_places: u32,
}

/// Inclusive percentage band for a meal's share of a nutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShareBand {
    /// Lowest acceptable share (%)
    pub min_percent: f64,
    /// Highest acceptable share (%)
    pub max_percent: f64,
}

impl ShareBand {
    /// Create a band
    #[must_use]
    pub const fn new(min_percent: f64, max_percent: f64) -> Self {
        Self {
            min_percent,
            max_percent,
        }
    }

    /// Whether `share` lies inside the band
    #[must_use]
    pub fn contains(&self, share: f64) -> bool {
        (self.min_percent..=self.max_percent).contains(&share)
    }
}

/// How the balancer scales a meal once balancing is triggered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BalancingStrategy {
    /// One factor per meal, the mean of the four per-nutrient ratios
    #[default]
    Blended,
    /// Each nutrient field scaled by its own ratio
    PerNutrient,
}

impl FromStr for BalancingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "blended" => Ok(Self::Blended),
            "per_nutrient" => Ok(Self::PerNutrient),
            other => Err(ConfigError::Parse(format!(
                "Unknown balancing strategy: {other}"
            ))),
        }
    }
}

impl fmt::Display for BalancingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blended => write!(f, "blended"),
            Self::PerNutrient => write!(f, "per_nutrient"),
        }
    }
}

/// Meal distribution balancer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancerConfig {
    /// Accepted protein/carb share for regular meals: 20-35%
    pub regular_band: ShareBand,
    /// Accepted protein/carb share for lunch and dinner: 20-40%
    pub principal_band: ShareBand,
    /// Share a principal meal is scaled toward: 32.5%
    pub principal_target_share: f64,
    /// Scaling strategy once triggered
    pub strategy: BalancingStrategy,
    /// Decimal places kept on scaled values: 2
    pub decimal_places: u32,
}

/// Category guarantor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuarantorConfig {
    /// Minimum fruit items across the day: 2
    pub min_fruit_items: usize,
    /// Every lunch and dinner must carry a vegetable item
    pub require_principal_vegetable: bool,
}

/// Orchestration mode of the reconciliation pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PipelineMode {
    /// Reconcile, balance, guarantee, reconcile; no convergence check
    #[default]
    TwoPass,
    /// Repeat balance, guarantee, reconcile until converged or capped
    FixedPoint,
}

impl FromStr for PipelineMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "two_pass" => Ok(Self::TwoPass),
            "fixed_point" => Ok(Self::FixedPoint),
            other => Err(ConfigError::Parse(format!("Unknown pipeline mode: {other}"))),
        }
    }
}

/// Reconciliation pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Orchestration mode
    pub mode: PipelineMode,
    /// Iteration cap for fixed-point mode
    pub max_iterations: u32,
    /// Max relative deviation from target at which fixed-point mode stops
    pub convergence_tolerance: f64,
}

impl BalancerConfig {
    /// Validate share bands and target share
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a band is inverted or outside
    /// 0-100, or if the principal target share falls outside its band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for band in [self.regular_band, self.principal_band] {
            if band.min_percent < 0.0
                || band.max_percent > 100.0
                || band.min_percent >= band.max_percent
            {
                return Err(ConfigError::InvalidRange(
                    "Share bands must satisfy 0 <= min < max <= 100",
                ));
            }
        }
        if !self.principal_band.contains(self.principal_target_share) {
            return Err(ConfigError::InvalidRange(
                "principal_target_share must lie inside principal_band",
            ));
        }
        Ok(())
    }
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            fast_path_tolerance: 0.01,
            epsilon: 1e-9,
            decimal_places: 2,
        }
    }
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            regular_band: ShareBand::new(20.0, 35.0),
            principal_band: ShareBand::new(20.0, 40.0),
            principal_target_share: 32.5,
            strategy: BalancingStrategy::Blended,
            decimal_places: 2,
        }
    }
}

impl Default for GuarantorConfig {
    fn default() -> Self {
        Self {
            min_fruit_items: 2,
            require_principal_vegetable: true,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: PipelineMode::TwoPass,
            max_iterations: 4,
            convergence_tolerance: 0.01,
        }
    }
}
