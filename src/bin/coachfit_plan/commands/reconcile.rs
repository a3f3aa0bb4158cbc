// ABOUTME: Reconcile command for coachfit-plan
// ABOUTME: Normalizes a generated meal plan and runs the reconciliation pipeline against a target
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

use coachfit_nutrition::adapters::parse_meal_plan;
use coachfit_nutrition::config::NutritionEngineConfig;
use coachfit_nutrition::errors::AppResult;
use coachfit_nutrition::intelligence::ReconciliationPipeline;
use coachfit_nutrition::logging::EngineLogger;
use serde_json::json;
use std::path::Path;
use tracing::warn;

use crate::helpers::display::print_json;
use crate::helpers::io::{read_input, TargetSource};

type Result<T> = AppResult<T>;

/// Reconcile the plan at `plan_path` and print it
///
/// Without a resolvable target the plan is printed as normalized.
pub fn run(
    config: &NutritionEngineConfig,
    plan_path: &Path,
    source: Option<&TargetSource>,
    with_report: bool,
    pretty: bool,
) -> Result<()> {
    let mut plan = parse_meal_plan(&read_input(plan_path)?)?;

    let target = match source {
        Some(source) => source.resolve(config)?,
        None => {
            warn!("No --profile or --target given");
            None
        }
    };

    let report = ReconciliationPipeline::new(config).run(&mut plan, target.as_ref());
    if let Some(report) = &report {
        EngineLogger::log_reconciliation(&plan_path.display().to_string(), report);
    }

    if with_report {
        print_json(
            &json!({
                "plan": plan,
                "target": target,
                "report": report,
            }),
            pretty,
        )
    } else {
        print_json(&plan, pretty)
    }
}
