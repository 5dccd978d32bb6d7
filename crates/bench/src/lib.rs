// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Benchmark harness for fixmatrix-kernel.
//!
//! `Timing` is the cycle-counter seam: on a host it is backed by
//! `std::time::Instant`, on a board it would read a hardware counter.

pub mod cases;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use std::time::Instant;

/// Start/stop timer. `end_timing` returns the elapsed count since the last
/// `start_timing`, saturated to `u32`.
pub trait Timing {
    fn start_timing(&mut self);
    fn end_timing(&mut self) -> u32;
}

/// Nanosecond timer for hosted runs.
#[derive(Debug, Default)]
pub struct InstantTiming {
    started: Option<Instant>,
}

impl Timing for InstantTiming {
    fn start_timing(&mut self) {
        self.started = Some(Instant::now());
    }

    fn end_timing(&mut self) -> u32 {
        match self.started.take() {
            Some(start) => u32::try_from(start.elapsed().as_nanos()).unwrap_or(u32::MAX),
            None => 0,
        }
    }
}

/// One benchmark result. `cycles` is the fastest iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingRecord {
    pub name: String,
    pub cycles: u32,
    pub iterations: u32,
}

/// Runs `body` `iterations` times and keeps the fastest run, which is the
/// least disturbed by the host.
pub fn measure<T: Timing>(timer: &mut T, iterations: u32, mut body: impl FnMut()) -> u32 {
    let mut best = u32::MAX;
    for _ in 0..iterations.max(1) {
        timer.start_timing();
        body();
        best = best.min(timer.end_timing());
    }
    best
}

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub records: Vec<TimingRecord>,
    /// Hex BLAKE3 digest of every benchmark output.
    pub digest: String,
}

impl Report {
    pub fn print_timing(&mut self, name: &str, cycles: u32, iterations: u32) {
        tracing::debug!(name, cycles, "benchmark finished");
        self.records.push(TimingRecord {
            name: name.to_string(),
            cycles,
            iterations,
        });
    }

    pub fn set_digest(&mut self, digest: &[u8; 32]) {
        self.digest = to_hex(digest);
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Benchmark", "Best (ns)", "Iterations"]);

        for record in &self.records {
            table.add_row(vec![
                record.name.clone(),
                record.cycles.to_string(),
                record.iterations.to_string(),
            ]);
        }
        table
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
