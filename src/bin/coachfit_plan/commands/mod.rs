// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit
// ABOUTME: Re-exports command modules for coachfit-plan
// ABOUTME: Provides access to the target, reconcile, and inspect commands

pub mod inspect;
pub mod reconcile;
pub mod target;
