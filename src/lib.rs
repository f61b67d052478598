//! # Grover Triage — amplitude-amplification search over sensor states
//!
//! Simulates Grover's search classically over the 64 combinations of six
//! boolean sensors (S0..S5) to find the combination most likely to be
//! critical under a fixed risk predicate.
//!
//! ## Algorithm overview
//!
//! | Phase | Rust module | Description |
//! |-------|-------------|-------------|
//! | Init | [`amplitudes::uniform_superposition`] | All 64 amplitudes set to 1/√64 |
//! | Oracle | [`amplitudes::apply_oracle`] | Negate amplitudes of states where [`risk::is_critical`] holds |
//! | Diffusion | [`amplitudes::diffuse`] | Inversion about the mean: a[x] = 2·mean − a[x] |
//! | Measure | [`amplitudes::most_likely_state`] | Square amplitudes, first maximum wins |
//!
//! [`simulation::run_simulation`] drives the phases and returns a
//! [`simulation::SimulationReport`]; [`theory`] gives the closed-form
//! prediction that the simulated critical mass is checked against.
//!
//! ## State representation
//!
//! A sensor state is an integer in [0, 63]; bit `i` is sensor S*i*. Binary
//! renderings are MSB first (S5..S0). The amplitude vector is a fixed
//! `[f64; 64]` passed explicitly between phases.
//!
//! ## Behavior of the risk predicate
//!
//! H = S0·S1 + S2·S3 + S0·S2 marks exactly half of the space (32 states).
//! With M/N = 1/2 the Grover rotation angle is π/4, so amplification cannot
//! concentrate probability: the distribution stays uniform for every
//! iteration count and measurement falls back to state 0 (not critical).
//! Reports flag this with a validation warning.

#![allow(clippy::needless_range_loop)]

pub mod amplitudes;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod risk;
pub mod simulation;
pub mod theory;

pub use error::{Result, TriageError};
