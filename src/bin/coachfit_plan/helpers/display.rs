// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit
// ABOUTME: Output formatting helpers for coachfit-plan
// ABOUTME: Writes JSON documents to stdout, compact or pretty

use coachfit_nutrition::errors::AppResult;
use serde::Serialize;
use std::io::{self, Write};

/// Write `value` as one JSON document followed by a newline
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
