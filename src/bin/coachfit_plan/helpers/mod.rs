// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit
// ABOUTME: Re-exports helper modules for coachfit-plan
// ABOUTME: Provides file input, target resolution, and JSON output utilities

pub mod display;
pub mod io;
