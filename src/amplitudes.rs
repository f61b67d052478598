//! Amplitude vector operations: oracle, diffusion, and measurement helpers.
//!
//! The amplitude vector is a plain `[f64; NUM_STATES]` owned by one run and
//! passed by `&mut` between phases. Its length is fixed by the type.

use crate::constants::*;
use crate::risk::is_critical;

/// Real-valued amplitude per sensor state, indexed by state.
pub type Amplitudes = [f64; NUM_STATES];

/// Squared amplitudes, indexed by state.
pub type Probabilities = [f64; NUM_STATES];

/// Uniform superposition: every amplitude is 1/√64.
pub fn uniform_superposition() -> Amplitudes {
    [INITIAL_AMPLITUDE; NUM_STATES]
}

/// Oracle U_f: negate the amplitude of every critical state.
///
/// The flip depends only on the index, so the full pass completes before
/// any diffusion step reads the vector.
pub fn apply_oracle(amps: &mut Amplitudes) {
    for (state, a) in amps.iter_mut().enumerate() {
        if is_critical(state) {
            *a = -*a;
        }
    }
}

/// Arithmetic mean of all amplitudes.
#[inline]
pub fn mean(amps: &Amplitudes) -> f64 {
    amps.iter().sum::<f64>() / NUM_STATES as f64
}

/// Inversion about the mean: a[x] = 2·mean − a[x], one mean for the whole pass.
pub fn diffuse(amps: &mut Amplitudes) {
    let m = mean(amps);
    for a in amps.iter_mut() {
        *a = 2.0 * m - *a;
    }
}

/// One Grover round: oracle then diffusion.
pub fn grover_iteration(amps: &mut Amplitudes) {
    apply_oracle(amps);
    diffuse(amps);
}

/// Element-wise square.
pub fn probabilities(amps: &Amplitudes) -> Probabilities {
    let mut probs = [0.0f64; NUM_STATES];
    for (p, &a) in probs.iter_mut().zip(amps.iter()) {
        *p = a * a;
    }
    probs
}

/// Σ|a|². Equals 1.0 for a normalized state.
pub fn norm_squared(amps: &Amplitudes) -> f64 {
    amps.iter().map(|a| a * a).sum()
}

/// Total probability carried by critical states.
pub fn critical_probability_mass(probs: &Probabilities) -> f64 {
    probs
        .iter()
        .enumerate()
        .filter(|&(state, _)| is_critical(state))
        .map(|(_, p)| p)
        .sum()
}

/// Index and value of the highest probability.
///
/// Ties resolve to the lowest index: the scan only replaces the current best
/// on a strictly greater value.
pub fn most_likely_state(probs: &Probabilities) -> (usize, f64) {
    let mut best_state = 0;
    let mut best_prob = probs[0];
    for (state, &p) in probs.iter().enumerate().skip(1) {
        if p > best_prob {
            best_state = state;
            best_prob = p;
        }
    }
    (best_state, best_prob)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_is_normalized() {
        let amps = uniform_superposition();
        assert!(amps.iter().all(|&a| a == 0.125));
        assert!((norm_squared(&amps) - 1.0).abs() < NORMALIZATION_TOLERANCE);
    }

    #[test]
    fn test_oracle_flips_only_critical() {
        let mut amps = uniform_superposition();
        apply_oracle(&mut amps);
        for state in 0..NUM_STATES {
            let want = if is_critical(state) { -0.125 } else { 0.125 };
            assert_eq!(amps[state], want, "state={state}");
        }
        // Half the space is marked, so the post-oracle mean cancels exactly.
        assert_eq!(mean(&amps), 0.0);
    }

    #[test]
    fn test_diffuse_reflects_about_mean() {
        let mut amps = [0.0f64; NUM_STATES];
        for (i, a) in amps.iter_mut().enumerate() {
            *a = (i as f64 - 20.0) / 100.0;
        }
        let before = amps;
        let m = mean(&before);
        diffuse(&mut amps);
        for x in 0..NUM_STATES {
            assert!((amps[x] + before[x] - 2.0 * m).abs() < 1e-12, "x={x}");
        }
        // Reflection preserves the mean.
        assert!((mean(&amps) - m).abs() < 1e-12);
    }

    #[test]
    fn test_diffuse_twice_is_identity() {
        let mut amps = uniform_superposition();
        amps[5] = 0.5;
        amps[40] = -0.25;
        let before = amps;
        diffuse(&mut amps);
        diffuse(&mut amps);
        for x in 0..NUM_STATES {
            assert!((amps[x] - before[x]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_grover_iteration_preserves_norm() {
        let mut amps = uniform_superposition();
        for _ in 0..50 {
            grover_iteration(&mut amps);
            assert!((norm_squared(&amps) - 1.0).abs() < NORMALIZATION_TOLERANCE);
        }
    }

    #[test]
    fn test_most_likely_tie_breaks_low() {
        let probs = [UNIFORM_PROBABILITY; NUM_STATES];
        assert_eq!(most_likely_state(&probs), (0, UNIFORM_PROBABILITY));

        let mut probs = [0.0; NUM_STATES];
        probs[17] = 0.4;
        probs[9] = 0.4;
        probs[63] = 0.2;
        assert_eq!(most_likely_state(&probs), (9, 0.4));
    }

    #[test]
    fn test_critical_mass_uniform_is_half() {
        let probs = probabilities(&uniform_superposition());
        assert!((critical_probability_mass(&probs) - 0.5).abs() < 1e-15);
    }
}
