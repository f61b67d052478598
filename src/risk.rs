//! Risk predicate H over sensor states.
//!
//! H = S0·S1 + S2·S3 + S0·S2 (OR of three ANDs). Only S0..S3 participate;
//! S4 and S5 are part of the state layout but never change the verdict, so
//! each satisfying low nibble is replicated across the 4 (S4, S5) patterns.
//!
//! Satisfying (S3 S2 S1 S0) nibbles: 0011, 0101, 0111, 1011, 1100, 1101,
//! 1110, 1111 — 8 of 16, i.e. 32 of the 64 states.

use crate::constants::*;

/// Evaluate H for a sensor state.
#[inline(always)]
pub fn is_critical(state: usize) -> bool {
    let s0 = sensor_bit(state, SENSOR_S0);
    let s1 = sensor_bit(state, SENSOR_S1);
    let s2 = sensor_bit(state, SENSOR_S2);
    let s3 = sensor_bit(state, SENSOR_S3);
    (s0 && s1) || (s2 && s3) || (s0 && s2)
}

/// All critical states in ascending order.
pub fn critical_states() -> Vec<usize> {
    (0..NUM_STATES).filter(|&s| is_critical(s)).collect()
}

/// Number of critical states among the 64.
pub fn count_critical_states() -> usize {
    (0..NUM_STATES).filter(|&s| is_critical(s)).count()
}

/// Oracle sign table: -1.0 for critical states, +1.0 otherwise.
pub fn oracle_signs() -> [f64; NUM_STATES] {
    let mut signs = [1.0f64; NUM_STATES];
    for (state, sign) in signs.iter_mut().enumerate() {
        if is_critical(state) {
            *sign = -1.0;
        }
    }
    signs
}
