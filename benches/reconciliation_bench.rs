// ABOUTME: Criterion benchmarks for target calculation and meal plan reconciliation
// ABOUTME: Measures the reconciler, balancer, and full pipeline across plan sizes and batches
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

//! Criterion benchmarks for the nutrition engine.
//!
//! Plans are generated deterministically so runs are comparable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use coachfit_nutrition::config::{NutritionEngineConfig, PipelineMode, TargetConfig};
use coachfit_nutrition::intelligence::plan_reconciliation::{
    balance_meal_distribution, reconcile_to_target,
};
use coachfit_nutrition::intelligence::{
    calculate_nutritional_target, BiometricProfile, FitnessGoal, ReconciliationPipeline, Sex,
};
use coachfit_nutrition::models::{FoodItem, ItemMacros, MacroGrams, Meal, MealPlan, NutritionalTarget};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const MEAL_NAMES: [&str; 6] = [
    "Breakfast",
    "Morning snack",
    "Lunch",
    "Afternoon snack",
    "Dinner",
    "Evening snack",
];

const FOOD_NAMES: [&str; 8] = [
    "Oats",
    "Chicken breast",
    "White rice",
    "Greek yogurt",
    "Salmon",
    "Whole wheat bread",
    "Eggs",
    "Lentils",
];

/// Generate a plan with `meals` meals of `items_per_meal` items each
#[allow(clippy::cast_precision_loss)]
fn generate_plan(meals: usize, items_per_meal: usize) -> MealPlan {
    MealPlan::new(
        (0..meals)
            .map(|meal_index| {
                let items = (0..items_per_meal)
                    .map(|item_index| {
                        let seed = (meal_index * 31 + item_index * 17) % 100;
                        let protein = 5.0 + (seed % 40) as f64;
                        let carb = 5.0 + ((seed * 3) % 60) as f64;
                        let fat = 1.0 + ((seed * 7) % 20) as f64;
                        FoodItem::new(
                            FOOD_NAMES[(meal_index + item_index) % FOOD_NAMES.len()],
                            "1 portion",
                            fat.mul_add(9.0, (protein + carb) * 4.0),
                            ItemMacros::new(protein, carb, fat),
                        )
                    })
                    .collect();
                Meal::new(MEAL_NAMES[meal_index % MEAL_NAMES.len()], items)
            })
            .collect(),
    )
}

fn bench_target() -> NutritionalTarget {
    NutritionalTarget::new(
        2350.0,
        MacroGrams {
            protein_g: 176.0,
            carb_g: 235.0,
            fat_g: 78.0,
        },
    )
}

/// Benchmark target calculation from a profile
fn bench_target_calculation(c: &mut Criterion) {
    let config = TargetConfig::default();
    let profile = BiometricProfile {
        age: Some(30),
        weight_kg: Some(80.0),
        height_cm: Some(180.0),
        sex: Some(Sex::Male),
        goal: Some(FitnessGoal::FatLoss),
        activity_frequency: Some("3-4x per week".into()),
        daily_routine: Some("moderate".into()),
    };

    c.bench_function("calculate_nutritional_target", |b| {
        b.iter(|| calculate_nutritional_target(black_box(&profile), black_box(&config)));
    });
}

/// Benchmark the proportional reconciler and the balancer with varying plan sizes
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let config = NutritionEngineConfig::default();
    let target = bench_target();

    for (meals, items) in [(4, 3), (6, 6), (6, 20)] {
        let plan = generate_plan(meals, items);
        let label = format!("{meals}x{items}");
        group.throughput(Throughput::Elements((meals * items) as u64));

        group.bench_with_input(
            BenchmarkId::new("reconcile_to_target", &label),
            &plan,
            |b, plan| {
                b.iter(|| {
                    let mut plan = plan.clone();
                    reconcile_to_target(&mut plan, black_box(&target), &config.reconciler)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("balance_meal_distribution", &label),
            &plan,
            |b, plan| {
                b.iter(|| {
                    let mut plan = plan.clone();
                    balance_meal_distribution(&mut plan, &config.balancer)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the full pipeline in both modes
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let target = bench_target();
    let plan = generate_plan(6, 6);

    for mode in [PipelineMode::TwoPass, PipelineMode::FixedPoint] {
        let mut config = NutritionEngineConfig::default();
        config.pipeline.mode = mode;
        let pipeline = ReconciliationPipeline::new(&config);

        group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| pipeline.reconcile(plan.clone(), black_box(Some(&target))));
        });
    }

    group.finish();
}

/// Benchmark parallel batch reconciliation
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let config = NutritionEngineConfig::default();
    let pipeline = ReconciliationPipeline::new(&config);
    let target = bench_target();

    for count in [10_usize, 100] {
        let jobs: Vec<(MealPlan, Option<NutritionalTarget>)> = (0..count)
            .map(|index| (generate_plan(4 + index % 3, 4), Some(target)))
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("reconcile_batch", count), &jobs, |b, jobs| {
            b.iter(|| pipeline.reconcile_batch(black_box(jobs.clone())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_target_calculation,
    bench_stages,
    bench_pipeline,
    bench_batch,
);
criterion_main!(benches);
