//! Shared environment configuration for the triage binaries.
//!
//! Consolidates `TRIAGE_ITERATIONS`, `RAYON_NUM_THREADS`, and `TRIAGE_LOG`
//! reads. CLI flags override whatever is read here.

use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::DEFAULT_ITERATIONS;
use crate::error::{validate_iterations, Result, TriageError};

/// Read `TRIAGE_ITERATIONS` (default [`DEFAULT_ITERATIONS`]).
///
/// A value that does not parse, or is negative, is an error rather than a
/// silent fallback.
pub fn iterations_from_env() -> Result<usize> {
    match std::env::var("TRIAGE_ITERATIONS") {
        Ok(raw) => parse_iterations("TRIAGE_ITERATIONS", &raw),
        Err(_) => Ok(DEFAULT_ITERATIONS),
    }
}

/// Parse a signed iteration count from text and validate it.
pub fn parse_iterations(flag: &str, raw: &str) -> Result<usize> {
    let n: i64 = raw.trim().parse().map_err(|_| TriageError::InvalidArgument {
        flag: flag.to_string(),
        value: raw.to_string(),
    })?;
    validate_iterations(n)
}

/// Value following the flag at `args[flag_index]`.
pub fn flag_value<'a>(args: &'a [String], flag_index: usize) -> Result<&'a str> {
    match args.get(flag_index + 1) {
        Some(value) => Ok(value.as_str()),
        None => Err(TriageError::MissingValue(
            args.get(flag_index).cloned().unwrap_or_default(),
        )),
    }
}

/// Read `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default 8).
/// Builds the rayon global pool, tolerating one that already exists.
pub fn init_rayon_threads() -> usize {
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    if rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .is_err()
    {
        tracing::debug!("rayon global pool already initialized");
    }
    num_threads
}

/// Install the fmt subscriber. Filter comes from `TRIAGE_LOG`, then
/// `RUST_LOG`, then `default_directive`.
pub fn init_tracing(default_directive: &str) {
    let filter = std::env::var("TRIAGE_LOG")
        .ok()
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive));
    // A second install (e.g. from tests) is harmless.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iterations() {
        assert_eq!(parse_iterations("--iterations", "6").unwrap(), 6);
        assert_eq!(parse_iterations("--iterations", " 0 ").unwrap(), 0);
        assert!(matches!(
            parse_iterations("--iterations", "-3"),
            Err(TriageError::NegativeIterations(-3))
        ));
        assert!(matches!(
            parse_iterations("--iterations", "six"),
            Err(TriageError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_flag_value() {
        let args: Vec<String> = ["triage-simulate", "--iterations", "4", "--output"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(flag_value(&args, 1).unwrap(), "4");
        let err = flag_value(&args, 3).unwrap_err();
        assert!(matches!(&err, TriageError::MissingValue(flag) if flag == "--output"));
        assert_eq!(err.to_string(), "missing value for --output");
    }
}
