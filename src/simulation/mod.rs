//! Grover simulation and its outputs.
//!
//! - [`engine`]: init, oracle+diffusion rounds, measurement
//! - [`report`]: console narration and JSON persistence
//! - [`sweep`]: parallel runs over a range of iteration counts
//! - [`measure`]: seeded shot sampling from the final distribution

pub mod engine;
pub mod measure;
pub mod report;
pub mod sweep;

// Re-export commonly used items
pub use engine::{
    run_iterations, run_simulation, run_simulation_with, IterationSnapshot, SimulationConfig,
    SimulationReport,
};
pub use measure::{sample_measurements, MeasurementHistogram};
pub use report::{report_lines, save_report, MEASUREMENT_HEADER, VALIDATION_OK, VALIDATION_WARN};
pub use sweep::{format_sweep_table, max_prediction_error, save_sweep, sweep_iterations, SweepEntry};
