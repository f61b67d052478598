use std::path::PathBuf;

use grover_triage::env_config::{flag_value, init_tracing, iterations_from_env, parse_iterations};
use grover_triage::simulation::{
    report_lines, run_simulation_with, sample_measurements, save_report, SimulationConfig,
};
use grover_triage::TriageError;

const USAGE: &str =
    "Usage: triage-simulate [--iterations N] [--trace] [--shots S] [--seed K] [--output FILE]";

struct Args {
    iterations: usize,
    trace: bool,
    shots: u32,
    seed: u64,
    output: Option<PathBuf>,
}

fn fail(err: TriageError) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

fn parse_flag<T: std::str::FromStr>(flag: &str, raw: &str) -> T {
    raw.parse().unwrap_or_else(|_| {
        fail(TriageError::InvalidArgument {
            flag: flag.to_string(),
            value: raw.to_string(),
        })
    })
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut iterations = iterations_from_env().unwrap_or_else(|e| fail(e));
    let mut trace = false;
    let mut shots = 0u32;
    let mut seed = 42u64;
    let mut output: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-n" => {
                let raw = flag_value(&args, i).unwrap_or_else(|e| fail(e));
                iterations = parse_iterations("--iterations", raw).unwrap_or_else(|e| fail(e));
                i += 1;
            }
            "--trace" => {
                trace = true;
            }
            "--shots" => {
                shots = parse_flag("--shots", flag_value(&args, i).unwrap_or_else(|e| fail(e)));
                i += 1;
            }
            "--seed" => {
                seed = parse_flag("--seed", flag_value(&args, i).unwrap_or_else(|e| fail(e)));
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
                println!("  --iterations N   Grover rounds (default: $TRIAGE_ITERATIONS or 6)");
                println!("  --trace          Print a line per round");
                println!("  --shots S        Sample S measurement shots (default: 0, off)");
                println!("  --seed K         RNG seed for shot sampling (default: 42)");
                println!("  --output FILE    Write the report as JSON");
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

    Args {
        iterations,
        trace,
        shots,
        seed,
        output,
    }
}

fn main() {
    init_tracing("warn");
    let args = parse_args();

    let config = SimulationConfig::new(args.iterations).with_trace(args.trace);
    let report = run_simulation_with(&config);
    for line in report_lines(&report) {
        println!("{}", line);
    }

    if args.shots > 0 {
        let hist = sample_measurements(&report.probabilities, args.shots, args.seed)
            .unwrap_or_else(|e| fail(e));
        let top = hist.most_frequent_state();
        println!();
        println!(
            "Sampled {} shots (seed {}): most frequent state {:06b} ({:.2}%)",
            hist.shots,
            hist.seed,
            top,
            hist.frequency(top) * 100.0
        );
    }

    if let Some(path) = args.output {
        save_report(&report, &path).unwrap_or_else(|e| fail(e));
        println!("Report written to {}", path.display());
    }
}
