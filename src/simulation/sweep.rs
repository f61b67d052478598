//! Iteration sweep: run the simulation for every round count 0..=max.
//!
//! Each round count is an independent run with its own amplitude vector, so
//! the sweep fans out over the rayon pool and collects in input order.

use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

use super::engine::run_simulation;
use super::report::save_json;
use crate::error::Result;

/// Summary of one run within a sweep.
#[derive(Clone, Debug, Serialize)]
pub struct SweepEntry {
    pub iterations: usize,
    pub max_probability: f64,
    pub most_likely_state: usize,
    pub most_likely_binary: String,
    pub winner_is_critical: bool,
    pub critical_mass: f64,
    pub predicted_critical_mass: f64,
}

/// Run iterations 0..=`max_iterations`, sorted by iteration count.
pub fn sweep_iterations(max_iterations: usize) -> Vec<SweepEntry> {
    (0..=max_iterations)
        .into_par_iter()
        .map(|k| {
            let r = run_simulation(k);
            SweepEntry {
                iterations: r.iterations,
                max_probability: r.max_probability,
                most_likely_state: r.most_likely_state,
                most_likely_binary: r.most_likely_binary,
                winner_is_critical: r.winner_is_critical,
                critical_mass: r.critical_mass,
                predicted_critical_mass: r.predicted_critical_mass,
            }
        })
        .collect()
}

/// Fixed-width table: header line followed by one row per entry.
pub fn format_sweep_table(entries: &[SweepEntry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!(
        "{:>5}  {:>9}  {:>6}  {:>5}  {:>9}  {:>9}",
        "iters", "max_p(%)", "state", "crit", "mass(%)", "pred(%)"
    ));
    for e in entries {
        lines.push(format!(
            "{:>5}  {:>9.4}  {:>6}  {:>5}  {:>9.4}  {:>9.4}",
            e.iterations,
            e.max_probability * 100.0,
            e.most_likely_binary,
            if e.winner_is_critical { "yes" } else { "no" },
            e.critical_mass * 100.0,
            e.predicted_critical_mass * 100.0
        ));
    }
    lines
}

/// Largest |simulated − predicted| critical mass across the sweep.
pub fn max_prediction_error(entries: &[SweepEntry]) -> f64 {
    entries
        .iter()
        .map(|e| (e.critical_mass - e.predicted_critical_mass).abs())
        .fold(0.0, f64::max)
}

/// Write the sweep as pretty JSON.
pub fn save_sweep(entries: &[SweepEntry], path: &Path) -> Result<()> {
    save_json(&entries, path)
}
