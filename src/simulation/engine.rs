//! Simulation driver: init → iterate (oracle + diffusion) → measure.
//!
//! One run owns one amplitude vector from start to finish. The optional
//! trace records a snapshot after every round and emits a `debug!` event;
//! it is off by default and never changes the numbers.

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::amplitudes::{
    apply_oracle, critical_probability_mass, diffuse, mean, most_likely_state, norm_squared,
    probabilities, uniform_superposition, Amplitudes,
};
use crate::constants::*;
use crate::risk::{count_critical_states, is_critical};
use crate::theory::predicted_success_probability;

/// Run parameters.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub iterations: usize,
    /// Record per-round snapshots.
    pub trace: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            trace: false,
        }
    }
}

impl SimulationConfig {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

/// State of the vector after one oracle+diffusion round.
#[derive(Clone, Debug, Serialize)]
pub struct IterationSnapshot {
    /// 1-based round number.
    pub iteration: usize,
    pub mean_after_oracle: f64,
    pub critical_mass: f64,
    pub max_probability: f64,
    pub most_likely_state: usize,
}

/// Everything a run measured, in report order.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub num_states: usize,
    pub initial_amplitude: f64,
    pub critical_count: usize,
    pub iterations: usize,
    pub max_probability: f64,
    pub most_likely_state: usize,
    pub most_likely_binary: String,
    /// Whether the winner satisfies the risk predicate.
    pub winner_is_critical: bool,
    pub critical_mass: f64,
    pub predicted_critical_mass: f64,
    pub norm_squared: f64,
    pub amplitudes: Vec<f64>,
    pub probabilities: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<IterationSnapshot>,
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Apply `iterations` oracle+diffusion rounds to `amps` in place.
///
/// When `trace` is given, one snapshot per round is appended.
pub fn run_iterations(
    amps: &mut Amplitudes,
    iterations: usize,
    mut trace: Option<&mut Vec<IterationSnapshot>>,
) {
    for i in 0..iterations {
        apply_oracle(amps);
        let mean_after_oracle = mean(amps);
        diffuse(amps);

        if let Some(snapshots) = trace.as_deref_mut() {
            let probs = probabilities(amps);
            let (state, max_probability) = most_likely_state(&probs);
            let snap = IterationSnapshot {
                iteration: i + 1,
                mean_after_oracle,
                critical_mass: critical_probability_mass(&probs),
                max_probability,
                most_likely_state: state,
            };
            debug!(
                iteration = snap.iteration,
                mean = snap.mean_after_oracle,
                critical_mass = snap.critical_mass,
                max_probability = snap.max_probability,
                state = snap.most_likely_state,
                "grover round"
            );
            snapshots.push(snap);
        }
    }
}

/// Run the full simulation for `iterations` rounds without tracing.
pub fn run_simulation(iterations: usize) -> SimulationReport {
    run_simulation_with(&SimulationConfig::new(iterations))
}

/// Run the full simulation with explicit configuration.
pub fn run_simulation_with(config: &SimulationConfig) -> SimulationReport {
    let t0 = Instant::now();
    let critical_count = count_critical_states();
    info!(
        iterations = config.iterations,
        critical_count, "starting grover simulation"
    );

    let mut amps = uniform_superposition();
    let mut trace = Vec::new();
    run_iterations(
        &mut amps,
        config.iterations,
        config.trace.then_some(&mut trace),
    );

    let probs = probabilities(&amps);
    let (most_likely, max_probability) = most_likely_state(&probs);
    let winner_is_critical = is_critical(most_likely);
    if !winner_is_critical {
        warn!(
            state = most_likely,
            iterations = config.iterations,
            "most likely state does not satisfy the risk predicate"
        );
    }

    let report = SimulationReport {
        num_states: NUM_STATES,
        initial_amplitude: INITIAL_AMPLITUDE,
        critical_count,
        iterations: config.iterations,
        max_probability,
        most_likely_state: most_likely,
        most_likely_binary: state_binary(most_likely),
        winner_is_critical,
        critical_mass: critical_probability_mass(&probs),
        predicted_critical_mass: predicted_success_probability(
            critical_count,
            NUM_STATES,
            config.iterations,
        ),
        norm_squared: norm_squared(&amps),
        amplitudes: amps.to_vec(),
        probabilities: probs.to_vec(),
        trace,
        elapsed: t0.elapsed(),
    };
    info!(
        state = report.most_likely_state,
        max_probability = report.max_probability,
        elapsed_us = report.elapsed.as_micros() as u64,
        "simulation finished"
    );
    report
}
