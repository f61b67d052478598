//! Sampled measurement: draw repeated shots from a probability vector.
//!
//! Uses inverse-CDF sampling with a seeded `SmallRng`, so a (seed, shots)
//! pair always reproduces the same histogram.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::{Result, TriageError};

/// Outcome counts per state for a batch of shots.
#[derive(Clone, Debug, Serialize)]
pub struct MeasurementHistogram {
    pub shots: u32,
    pub seed: u64,
    pub counts: Vec<u32>,
}

impl MeasurementHistogram {
    /// Observed frequency of `state`.
    pub fn frequency(&self, state: usize) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.counts.get(state).copied().unwrap_or(0) as f64 / self.shots as f64
    }

    /// Most frequently observed state; ties go to the lowest index.
    pub fn most_frequent_state(&self) -> usize {
        let mut best = 0;
        for (state, &c) in self.counts.iter().enumerate() {
            if c > self.counts[best] {
                best = state;
            }
        }
        best
    }
}

/// Draw `shots` outcomes from `probabilities`.
///
/// The vector need not sum to exactly 1.0; samples are scaled by its total.
/// Non-finite weights are rejected.
pub fn sample_measurements(
    probabilities: &[f64],
    shots: u32,
    seed: u64,
) -> Result<MeasurementHistogram> {
    let mut cdf = Vec::with_capacity(probabilities.len());
    let mut acc = 0.0f64;
    for &p in probabilities {
        if !p.is_finite() {
            return Err(TriageError::InvalidDistribution);
        }
        acc += p.max(0.0);
        cdf.push(acc);
    }
    if cdf.is_empty() || !acc.is_finite() || acc <= 0.0 {
        return Err(TriageError::InvalidDistribution);
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut counts = vec![0u32; probabilities.len()];
    let last = cdf.len() - 1;
    for _ in 0..shots {
        let u = rng.random::<f64>() * acc;
        let state = cdf.partition_point(|&c| c <= u).min(last);
        counts[state] += 1;
    }

    Ok(MeasurementHistogram {
        shots,
        seed,
        counts,
    })
}
