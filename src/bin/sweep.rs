use std::path::PathBuf;
use std::time::Instant;

use grover_triage::constants::NUM_STATES;
use grover_triage::env_config::{flag_value, init_rayon_threads, init_tracing, parse_iterations};
use grover_triage::TriageError;
use grover_triage::risk::count_critical_states;
use grover_triage::simulation::{
    format_sweep_table, max_prediction_error, save_sweep, sweep_iterations,
};
use grover_triage::theory::{naive_iteration_estimate, optimal_iterations};

const USAGE: &str = "Usage: triage-sweep [--max N] [--output FILE]";

fn fail(err: TriageError) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

fn parse_args() -> (usize, Option<PathBuf>) {
    let args: Vec<String> = std::env::args().collect();
    let mut max_iterations = 16usize;
    let mut output: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max" => {
                let raw = flag_value(&args, i).unwrap_or_else(|e| fail(e));
                max_iterations = parse_iterations("--max", raw).unwrap_or_else(|e| fail(e));
                i += 1;
            }
            "--output" => {
                let raw = flag_value(&args, i).unwrap_or_else(|e| fail(e));
                output = Some(PathBuf::from(raw));
                i += 1;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Options:");
                println!("  --max N          Sweep iteration counts 0..=N (default: 16)");
                println!("  --output FILE    Write the sweep as JSON");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (max_iterations, output)
}

fn main() {
    init_tracing("warn");
    let (max_iterations, output) = parse_args();
    let threads = init_rayon_threads();

    let marked = count_critical_states();
    println!(
        "Sweeping 0..={} iterations on {} threads ({} of {} states critical)",
        max_iterations, threads, marked, NUM_STATES
    );
    println!(
        "Rule-of-thumb iterations: {}, optimal for {} marked: {}",
        naive_iteration_estimate(NUM_STATES),
        marked,
        optimal_iterations(marked, NUM_STATES)
    );

    let t0 = Instant::now();
    let entries = sweep_iterations(max_iterations);
    for line in format_sweep_table(&entries) {
        println!("{}", line);
    }
    println!(
        "Max |simulated - predicted| critical mass: {:.3e} ({:.1} ms)",
        max_prediction_error(&entries),
        t0.elapsed().as_secs_f64() * 1000.0
    );

    if let Some(path) = output {
        save_sweep(&entries, &path).unwrap_or_else(|e| fail(e));
        println!("Sweep written to {}", path.display());
    }
}
