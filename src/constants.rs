//! Sensor-space constants and state-indexing helpers.
//!
//! A sensor state is a 6-bit integer: bit `i` holds sensor S*i* (S0 = LSB).
//! - |S| = [`NUM_STATES`] = 2^[`NUM_SENSORS`] = 64
//! - uniform amplitude = [`INITIAL_AMPLITUDE`] = 1/√64 = 0.125
//! - uniform probability = [`UNIFORM_PROBABILITY`] = 1/64

/// Number of boolean sensors (S0..S5).
pub const NUM_SENSORS: usize = 6;

/// Number of distinct sensor states: 2^6.
pub const NUM_STATES: usize = 1 << NUM_SENSORS;

/// Amplitude of every state in the uniform superposition: 1/√64.
pub const INITIAL_AMPLITUDE: f64 = 0.125;

/// Probability of every state in the uniform superposition: 1/64.
pub const UNIFORM_PROBABILITY: f64 = 1.0 / NUM_STATES as f64;

/// Iteration count used when neither the CLI nor the environment sets one.
/// π/4 · √64 ≈ 6.28, rounded down.
pub const DEFAULT_ITERATIONS: usize = 6;

/// Tolerance for normalization checks (Σ|a|² = 1).
pub const NORMALIZATION_TOLERANCE: f64 = 1e-12;

/// Sensor indices, used as bit positions in a state.
pub const SENSOR_S0: usize = 0;
pub const SENSOR_S1: usize = 1;
pub const SENSOR_S2: usize = 2;
pub const SENSOR_S3: usize = 3;
pub const SENSOR_S4: usize = 4;
pub const SENSOR_S5: usize = 5;

/// Human-readable sensor names, indexed by bit position.
pub const SENSOR_NAMES: [&str; NUM_SENSORS] = ["S0", "S1", "S2", "S3", "S4", "S5"];

/// Read sensor `sensor` from `state` (bit extraction with `& 1`).
#[inline(always)]
pub fn sensor_bit(state: usize, sensor: usize) -> bool {
    (state >> sensor) & 1 == 1
}

/// Render a state as a 6-character binary string, S5 first, S0 last.
pub fn state_binary(state: usize) -> String {
    format!("{:0width$b}", state & (NUM_STATES - 1), width = NUM_SENSORS)
}

/// Names of the sensors that are on in `state`, ascending.
pub fn active_sensors(state: usize) -> Vec<&'static str> {
    (0..NUM_SENSORS)
        .filter(|&s| sensor_bit(state, s))
        .map(|s| SENSOR_NAMES[s])
        .collect()
}
