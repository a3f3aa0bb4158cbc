// ABOUTME: Core types and constants for the Coachfit nutrition engine
// ABOUTME: Foundation crate with error handling, meal plan models, and food lexicons
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

#![deny(unsafe_code)]

//! # Coachfit Core
//!
//! Foundation crate providing shared types and constants for the Coachfit
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Meal keywords, food lexicons, and reference foods
//! - **models**: Canonical meal plan and nutrition target models

/// Unified error handling system with standard error codes
pub mod errors;

/// Meal keywords, food lexicons, and reference foods
pub mod constants;

/// Canonical meal plan and nutrition target models
pub mod models;
