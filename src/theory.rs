//! Closed-form Grover amplitude-amplification predictions.
//!
//! With M marked states out of N, the uniform state sits at angle θ from the
//! unmarked subspace, sin θ = √(M/N). Each oracle+diffusion round rotates by
//! 2θ, so after k rounds the marked subspace carries sin²((2k+1)θ).
//!
//! For the risk predicate M/N = 32/64, θ = π/4 and every round is a quarter
//! turn: the marked mass stays at 1/2 for every k.

use std::f64::consts::FRAC_PI_4;

/// θ = asin(√(marked/total)). `marked` is capped at `total`, giving θ ≤ π/2.
pub fn rotation_angle(marked: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (marked.min(total) as f64 / total as f64).sqrt().asin()
}

/// Probability of measuring any marked state after `iterations` rounds.
pub fn predicted_success_probability(marked: usize, total: usize, iterations: usize) -> f64 {
    let theta = rotation_angle(marked, total);
    let s = ((2 * iterations + 1) as f64 * theta).sin();
    s * s
}

/// ⌊π / (4θ)⌋ rounds. Zero when nothing or everything is marked.
pub fn optimal_iterations(marked: usize, total: usize) -> usize {
    if marked == 0 || marked >= total {
        return 0;
    }
    (FRAC_PI_4 / rotation_angle(marked, total)).floor() as usize
}

/// Single-target rule of thumb ⌊π/4 · √N⌋.
pub fn naive_iteration_estimate(total: usize) -> usize {
    (FRAC_PI_4 * (total as f64).sqrt()).floor() as usize
}
