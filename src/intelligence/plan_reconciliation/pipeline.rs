// ABOUTME: Reconciliation pipeline running the reconciler, balancer, and guarantor in fixed order
// ABOUTME: Two-pass default, opt-in bounded fixed-point mode, and parallel batch reconciliation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use super::aggregator::aggregate_plan;
use super::balancer::{balance_meal_distribution, BalanceOutcome};
use super::guarantor::{guarantee_category_coverage, CoverageOutcome};
use super::reconciler::{max_relative_deviation, reconcile_to_target, ReconcileOutcome};
use crate::config::{NutritionEngineConfig, PipelineMode};
use coachfit_core::models::{MealPlan, NutrientTotals, NutritionalTarget};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

/// One Balancer, Guarantor, Reconciler round
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReconciliationRound {
    /// Balancer outcome
    pub balance: BalanceOutcome,
    /// Guarantor outcome
    pub coverage: CoverageOutcome,
    /// Max relative deviation from target after balancing and coverage
    pub drift: f64,
    /// Closing reconciler outcome
    pub reconcile: ReconcileOutcome,
}

/// Everything the pipeline did to one plan
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReconciliationReport {
    /// Orchestration mode used
    pub mode: PipelineMode,
    /// First reconciler pass
    pub initial: ReconcileOutcome,
    /// Rounds run after the first pass
    pub rounds: Vec<ReconciliationRound>,
    /// Day totals after the last stage
    pub final_totals: NutrientTotals,
    /// Max relative deviation of `final_totals` from the target
    pub final_deviation: f64,
    /// Whether the last round's drift fell below the convergence tolerance
    pub converged: bool,
}

/// Runs the reconciliation stages over meal plans
pub struct ReconciliationPipeline<'a> {
    config: &'a NutritionEngineConfig,
}

impl ReconciliationPipeline<'static> {
    /// Pipeline using the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(NutritionEngineConfig::global())
    }
}

impl<'a> ReconciliationPipeline<'a> {
    /// Pipeline using an explicit configuration
    #[must_use]
    pub const fn new(config: &'a NutritionEngineConfig) -> Self {
        Self { config }
    }

    /// Reconcile `plan` in place against `target`
    ///
    /// Runs `Reconciler → Balancer → Guarantor → Reconciler`. In fixed-point
    /// mode the last three stages repeat until the drift they introduce
    /// falls below the convergence tolerance or the iteration cap is hit.
    ///
    /// Returns `None` and leaves the plan untouched when there is no target.
    pub fn run(
        &self,
        plan: &mut MealPlan,
        target: Option<&NutritionalTarget>,
    ) -> Option<ReconciliationReport> {
        let Some(target) = target else {
            warn!("No nutritional target available, meal plan left unchanged");
            return None;
        };

        let pipeline = &self.config.pipeline;
        let max_rounds = match pipeline.mode {
            PipelineMode::TwoPass => 1,
            PipelineMode::FixedPoint => pipeline.max_iterations.max(1),
        };

        let initial = reconcile_to_target(plan, target, &self.config.reconciler);
        let mut rounds = Vec::new();
        let mut converged = false;

        for round in 1..=max_rounds {
            let balance = balance_meal_distribution(plan, &self.config.balancer);
            let coverage = guarantee_category_coverage(plan, &self.config.guarantor);
            let drift = max_relative_deviation(plan, target);
            let reconcile = reconcile_to_target(plan, target, &self.config.reconciler);

            debug!(round, drift, "Reconciliation round complete");
            converged = drift < pipeline.convergence_tolerance;
            rounds.push(ReconciliationRound {
                balance,
                coverage,
                drift,
                reconcile,
            });

            if converged {
                break;
            }
        }

        let final_totals = aggregate_plan(plan);
        let final_deviation = max_relative_deviation(plan, target);

        info!(
            mode = ?pipeline.mode,
            rounds = rounds.len(),
            converged,
            final_calories = final_totals.calories,
            target_calories = target.calories,
            "Meal plan reconciled"
        );

        Some(ReconciliationReport {
            mode: pipeline.mode,
            initial,
            rounds,
            final_totals,
            final_deviation,
            converged,
        })
    }

    /// Reconcile an owned plan and return it
    #[must_use]
    pub fn reconcile(&self, mut plan: MealPlan, target: Option<&NutritionalTarget>) -> MealPlan {
        self.run(&mut plan, target);
        plan
    }

    /// Reconcile independent plans in parallel
    ///
    /// Each job owns its plan, so no state is shared between them. Output
    /// order matches input order.
    #[must_use]
    pub fn reconcile_batch(
        &self,
        jobs: Vec<(MealPlan, Option<NutritionalTarget>)>,
    ) -> Vec<MealPlan> {
        jobs.into_par_iter()
            .map(|(plan, target)| self.reconcile(plan, target.as_ref()))
            .collect()
    }
}
