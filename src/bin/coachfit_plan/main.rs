// ABOUTME: Coachfit plan CLI - computes nutrition targets and reconciles generated meal plans
// ABOUTME: Reads profile, target, and plan JSON files and prints JSON results to stdout
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit
//!
//! Usage:
//! ```bash
//! # Compute the daily target for a profile
//! coachfit-plan target --profile profile.json
//!
//! # Reconcile a generated plan against a profile's target
//! coachfit-plan reconcile --plan plan.json --profile profile.json --report
//!
//! # Reconcile against an explicit target using the fixed-point mode
//! coachfit-plan reconcile --plan plan.json --target target.json --mode fixed-point
//!
//! # Show totals, meal shares, and coverage gaps of a plan
//! coachfit-plan inspect --plan plan.json
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use coachfit_nutrition::config::{BalancingStrategy, NutritionEngineConfig, PipelineMode};
use coachfit_nutrition::errors::AppResult;
use coachfit_nutrition::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "coachfit-plan",
    version,
    about = "Coachfit nutrition target and meal plan reconciliation CLI",
    long_about = "Computes daily nutrition targets from biometric profiles and reconciles generated meal plans so their totals, meal distribution, and food coverage match the target."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute the daily nutrition target for a biometric profile
    Target {
        /// Profile JSON file ("-" for stdin)
        #[arg(long)]
        profile: PathBuf,
    },

    /// Reconcile a generated meal plan against a nutrition target
    Reconcile {
        /// Generated meal plan JSON file ("-" for stdin)
        #[arg(long)]
        plan: PathBuf,

        /// Profile JSON file the target is computed from
        #[arg(long, conflicts_with = "target")]
        profile: Option<PathBuf>,

        /// Target JSON file used as-is
        #[arg(long)]
        target: Option<PathBuf>,

        /// Include the stage report alongside the plan
        #[arg(long)]
        report: bool,

        /// Pipeline mode override (two-pass, fixed-point)
        #[arg(long)]
        mode: Option<PipelineMode>,

        /// Balancing strategy override (blended, per-nutrient)
        #[arg(long)]
        strategy: Option<BalancingStrategy>,
    },

    /// Show totals, per-meal shares, and coverage gaps of a meal plan
    Inspect {
        /// Meal plan JSON file ("-" for stdin)
        #[arg(long)]
        plan: PathBuf,

        /// Profile JSON file to compare totals against
        #[arg(long, conflicts_with = "target")]
        profile: Option<PathBuf>,

        /// Target JSON file to compare totals against
        #[arg(long)]
        target: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = NutritionEngineConfig::load()?;

    match cli.command {
        Command::Target { profile } => {
            commands::target::run(&config, &profile, cli.pretty)?;
        }
        Command::Reconcile {
            plan,
            profile,
            target,
            report,
            mode,
            strategy,
        } => {
            if let Some(mode) = mode {
                config.pipeline.mode = mode;
            }
            if let Some(strategy) = strategy {
                config.balancer.strategy = strategy;
            }
            debug!(pipeline_mode = ?config.pipeline.mode, "Effective configuration resolved");
            let source = helpers::io::TargetSource::from_args(profile, target);
            commands::reconcile::run(&config, &plan, source.as_ref(), report, cli.pretty)?;
        }
        Command::Inspect {
            plan,
            profile,
            target,
        } => {
            let source = helpers::io::TargetSource::from_args(profile, target);
            commands::inspect::run(&config, &plan, source.as_ref(), cli.pretty)?;
        }
    }

    Ok(())
}
