//! End-to-end scenarios for the simulation driver and its outputs.

use grover_triage::constants::*;
use grover_triage::error::validate_iterations;
use grover_triage::risk::{count_critical_states, is_critical};
use grover_triage::simulation::{
    report_lines, run_simulation, run_simulation_with, sample_measurements, save_report,
    sweep_iterations, SimulationConfig, VALIDATION_WARN,
};
use grover_triage::theory::predicted_success_probability;
use grover_triage::TriageError;

// ── Init ─────────────────────────────────────────────────────────────

#[test]
fn critical_count_is_exhaustive() {
    let manual = (0..64).filter(|&s| is_critical(s)).count();
    assert_eq!(manual, 32);
    assert_eq!(count_critical_states(), manual);
    assert_eq!(run_simulation(0).critical_count, 32);
}

#[test]
fn zero_iterations_measures_uniform_state() {
    let r = run_simulation(0);
    assert!(r.amplitudes.iter().all(|&a| a == INITIAL_AMPLITUDE));
    assert!((r.norm_squared - 1.0).abs() < NORMALIZATION_TOLERANCE);
    assert_eq!(r.most_likely_state, 0);
    assert_eq!(r.most_likely_binary, "000000");
    assert_eq!(r.max_probability, UNIFORM_PROBABILITY);
}

// ── Canonical scenario ───────────────────────────────────────────────

#[test]
fn six_iterations_canonical_run() {
    let r = run_simulation(DEFAULT_ITERATIONS);
    assert_eq!(r.iterations, 6);
    // Half the space is marked: amplification leaves the distribution flat.
    assert!(r.probabilities.iter().all(|&p| p == UNIFORM_PROBABILITY));
    assert_eq!(r.most_likely_state, 0);
    assert!(!r.winner_is_critical);
    assert!((r.critical_mass - 0.5).abs() < 1e-12);
    assert_eq!(report_lines(&r).last().map(String::as_str), Some(VALIDATION_WARN));
}

#[test]
fn normalization_holds_across_iteration_counts() {
    for k in 0..=25 {
        let r = run_simulation(k);
        assert!(
            (r.norm_squared - 1.0).abs() < NORMALIZATION_TOLERANCE,
            "k={k} norm²={}",
            r.norm_squared
        );
        let p_sum: f64 = r.probabilities.iter().sum();
        assert!((p_sum - 1.0).abs() < NORMALIZATION_TOLERANCE);
    }
}

#[test]
fn critical_mass_matches_closed_form() {
    for k in 0..=15 {
        let r = run_simulation(k);
        let predicted = predicted_success_probability(r.critical_count, NUM_STATES, k);
        assert!((r.critical_mass - predicted).abs() < 1e-9, "k={k}");
        assert!((r.predicted_critical_mass - predicted).abs() < 1e-15);
    }
}

// ── Boundaries ───────────────────────────────────────────────────────

#[test]
fn negative_iterations_rejected() {
    assert!(matches!(
        validate_iterations(-6),
        Err(TriageError::NegativeIterations(-6))
    ));
    assert_eq!(validate_iterations(0).unwrap(), 0);
}

#[test]
fn sweep_agrees_with_single_runs() {
    let entries = sweep_iterations(8);
    for e in &entries {
        let r = run_simulation(e.iterations);
        assert_eq!(e.most_likely_state, r.most_likely_state);
        assert_eq!(e.max_probability, r.max_probability);
    }
}

// ── Outputs ──────────────────────────────────────────────────────────

#[test]
fn report_json_has_expected_fields() {
    let r = run_simulation_with(&SimulationConfig::new(3).with_trace(true));
    let dir = std::env::temp_dir().join(format!("grover-triage-test-{}", std::process::id()));
    let path = dir.join("report.json");
    save_report(&r, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["iterations"], 3);
    assert_eq!(json["critical_count"], 32);
    assert_eq!(json["most_likely_binary"], "000000");
    assert_eq!(json["probabilities"].as_array().unwrap().len(), NUM_STATES);
    assert_eq!(json["trace"].as_array().unwrap().len(), 3);
    assert!(json.get("elapsed").is_none());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn sampled_shots_cover_the_flat_distribution() {
    let r = run_simulation(6);
    let h = sample_measurements(&r.probabilities, 64_000, 42).unwrap();
    assert_eq!(h.counts.len(), NUM_STATES);
    assert_eq!(h.counts.iter().sum::<u32>(), 64_000);
    for state in 0..NUM_STATES {
        let f = h.frequency(state);
        assert!((f - UNIFORM_PROBABILITY).abs() < 0.006, "state={state} f={f}");
    }
}
