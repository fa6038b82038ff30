use std::time::Instant;

use disc::env_config::{init_base_path, init_rayon_threads};
use disc::inventory::standard_inventory;
use disc::simulation::{aggregate_statistics, save_statistics, simulate_batch, DimensionWeights};

fn parse_bias(arg: &str) -> DimensionWeights {
    let parts: Vec<&str> = arg.split(',').collect();
    if parts.len() != 4 {
        eprintln!("Invalid --bias value: expected four comma-separated weights (D,I,S,C)");
        std::process::exit(1);
    }
    let mut weights = [0.0f64; 4];
    for (slot, part) in weights.iter_mut().zip(&parts) {
        *slot = part.trim().parse().unwrap_or_else(|_| {
            eprintln!("Invalid --bias weight: {}", part);
            std::process::exit(1);
        });
    }
    let weights = DimensionWeights(weights);
    if !weights.is_valid() {
        eprintln!("Invalid --bias: weights must be finite and > 0");
        std::process::exit(1);
    }
    weights
}

fn parse_args() -> (usize, u64, Option<String>, DimensionWeights) {
    let args: Vec<String> = std::env::args().collect();
    let mut num_respondents = 1000usize;
    let mut seed = 42u64;
    let mut output: Option<String> = None;
    let mut weights = DimensionWeights::uniform();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--respondents" => {
                i += 1;
                if i < args.len() {
                    num_respondents = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --respondents value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--bias" => {
                i += 1;
                if i < args.len() {
                    weights = parse_bias(&args[i]);
                }
            }
            "--help" | "-h" => {
                println!("Usage: disc-simulate [--respondents N] [--seed S] [--output DIR] [--bias D,I,S,C]");
                println!();
                println!("Options:");
                println!("  --respondents N  Number of respondents to simulate (default: 1000)");
                println!("  --seed S         RNG seed (default: 42)");
                println!("  --output DIR     Write aggregated statistics JSON to DIR");
                println!("  --bias D,I,S,C   Per-dimension preference weights (default: 1,1,1,1)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: disc-simulate [--respondents N] [--seed S] [--output DIR] [--bias D,I,S,C]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (num_respondents, seed, output, weights)
}

fn main() {
    init_base_path();
    let (num_respondents, seed, output, weights) = parse_args();
    let num_threads = init_rayon_threads();

    println!("DISC Simulation ({} respondents)", num_respondents);
    println!(
        "  Bias: D={} I={} S={} C={}",
        weights.0[0], weights.0[1], weights.0[2], weights.0[3]
    );

    let inventory = standard_inventory();

    println!(
        "Simulating {} respondents ({} threads)...",
        num_respondents, num_threads
    );
    let t0 = Instant::now();
    let records = simulate_batch(&inventory, num_respondents, seed, &weights);
    let elapsed = t0.elapsed();

    let per_respondent_us = elapsed.as_secs_f64() * 1e6 / num_respondents.max(1) as f64;
    println!("  Elapsed:        {:.1} ms", elapsed.as_secs_f64() * 1000.0);
    println!("  Per respondent: {:.1} \u{00b5}s", per_respondent_us);
    println!();

    let stats = aggregate_statistics(&records, seed);

    println!("Results:");
    for dim in &stats.dimensions {
        println!(
            "  {}  mean most {:5.2}  std {:5.2}  primary {:5.1}%  secondary {:5.1}%",
            dim.symbol,
            dim.mean_most,
            dim.std_dev,
            dim.primary_rate * 100.0,
            dim.secondary_rate * 100.0,
        );
    }
    println!("  Secondary rate: {:.1}%", stats.secondary_rate * 100.0);

    let mut top: Vec<(&String, &f64)> = stats.profiles.iter().collect();
    top.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
    println!();
    println!("Top profiles:");
    for (label, share) in top.iter().take(5) {
        println!("  {:<4} {:5.1}%", label, *share * 100.0);
    }

    if let Some(ref output_dir) = output {
        let json_path = format!("{}/assessment_statistics.json", output_dir);
        save_statistics(&stats, &json_path);
        println!();
        println!("  Statistics saved: {}", json_path);
    }
}
