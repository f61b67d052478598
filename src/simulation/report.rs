//! Console rendering and JSON persistence of a [`SimulationReport`].

use std::fmt;
use std::path::Path;

use super::engine::SimulationReport;
use crate::error::{Result, TriageError};

pub const MEASUREMENT_HEADER: &str = "--- Measurement results ---";
pub const VALIDATION_OK: &str =
    "VALIDATION: the most likely sensor state satisfies the risk predicate H.";
pub const VALIDATION_WARN: &str =
    "VALIDATION: warning, the amplified state is not a critical state (adjust the iteration count).";

/// Report lines in narration order: init, target count, iteration count,
/// optional trace, measurement header, probability, binary, decimal, validation.
pub fn report_lines(report: &SimulationReport) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Initialized {} states in superposition (amplitude: {:.4})",
            report.num_states, report.initial_amplitude
        ),
        format!(
            "Critical (target) states found: {} of {}",
            report.critical_count, report.num_states
        ),
        format!("Running {} Grover iterations.", report.iterations),
    ];
    for snap in &report.trace {
        lines.push(format!(
            "  iteration {:>3}: max probability {:.2}% (state {}), critical mass {:.2}%",
            snap.iteration,
            snap.max_probability * 100.0,
            snap.most_likely_state,
            snap.critical_mass * 100.0
        ));
    }
    lines.push(String::new());
    lines.push(MEASUREMENT_HEADER.to_string());
    lines.push(format!(
        "Highest probability: {:.2}%",
        report.max_probability * 100.0
    ));
    lines.push(format!(
        "Most likely critical sensor combination (S5..S0): {}",
        report.most_likely_binary
    ));
    lines.push(format!("(decimal index: {})", report.most_likely_state));
    lines.push(if report.winner_is_critical {
        VALIDATION_OK.to_string()
    } else {
        VALIDATION_WARN.to_string()
    });
    lines
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in report_lines(self) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Write the report as pretty JSON, creating parent directories.
pub fn save_report(report: &SimulationReport, path: &Path) -> Result<()> {
    save_json(report, path)
}

/// Serialize any report-like value to pretty JSON at `path`.
pub(crate) fn save_json<T: serde::Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| TriageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| TriageError::Io {
        path: path.to_path_buf(),
        source,
    })
}
