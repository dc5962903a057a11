//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations of full sessions to analyze class balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # Default: 1000 runs per class
//!   cargo run --bin simulate -- -n 100 -c caster   # 100 caster runs
//!   cargo run --bin simulate -- --seed 42          # Reproducible run

use legends::build_info::build_label;
use legends::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match SimConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("run with --help for usage");
            return ExitCode::from(2);
        }
    };

    let default_filter = if config.verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              LEGENDS BALANCE SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("  Build:          {}", build_label());
    println!();
    println!("Configuration:");
    println!("  Runs per class: {}", config.num_runs);
    println!(
        "  Classes:        {}",
        config
            .classes
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Max Explores:   {}", config.max_explores_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if config.json {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(err) = std::fs::write(&filename, json) {
            eprintln!("error: failed to write {filename}: {err}");
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn print_help() {
    println!("Legends Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>          Runs per class (default: 1000)");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    -c, --class <CLASS>     caster, duelist, bruiser or all (default: all)");
    println!("    --max-explores <N>      Explorations per run before timing out (default: 200)");
    println!("    --quick                 Quick test (100 runs per class)");
    println!("    -v, --verbose           Log every run and encounter to stderr (unless RUST_LOG is set)");
    println!("    --json                  Save JSON report");
    println!("    -h, --help              Show this help");
    println!();
    println!("Log filtering follows RUST_LOG, e.g. RUST_LOG=legends=debug.");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                         # Default run");
    println!("    cargo run --bin simulate -- -n 100 -c bruiser   # 100 bruiser runs");
    println!("    cargo run --bin simulate -- --seed 42 --json    # Reproducible, with JSON");
}
