//! Example: Profile a delimited file with tabprof.
//!
//! Usage:
//!   cargo run --example profile -- <file_path>
//!
//! Files ending in `.tsv` are read tab-delimited.

use std::env;
use std::fs;
use std::path::Path;

use tabprof::{ParserConfig, Profiler, ProfilerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example profile -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") => b'\t',
        _ => b',',
    };

    let profiler = Profiler::with_config(ProfilerConfig {
        parser: ParserConfig::default().with_delimiter(delimiter),
        ..ProfilerConfig::default()
    });
    let result = profiler.profile(&fs::read(path)?)?;

    let separator = "=".repeat(72);
    println!("{}", separator);
    println!("Profile: {}", path.display());
    println!("{}", separator);
    println!();

    println!("## Source");
    println!("  Hash: {}", result.source.hash);
    println!("  Format: {}", result.source.format);
    println!("  Rows: {}", result.rows);
    println!("  Columns: {}", result.columns);
    println!();

    println!("## Columns");
    for (name, info) in &result.column_info {
        println!(
            "  {:20} {:12} null={:<6} unique={:<6} complete={:.1}%",
            name, info.kind, info.null, info.unique, info.completeness
        );
    }
    println!();

    println!("## Statistics");
    let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{:.3}", v));
    for (name, stats) in &result.statistics {
        println!(
            "  {:20} n={:<6} mean={:<10} std={:<10} min={:<10} max={}",
            name,
            stats.count,
            fmt(stats.mean),
            fmt(stats.std),
            fmt(stats.min),
            fmt(stats.max)
        );
    }
    println!();

    if !result.correlation.is_empty() {
        println!("## Strong Correlations");
        for pair in result.correlation.strong_pairs(0.7) {
            if let Some(r) = pair.r {
                println!("  {} <-> {}: {:.3}", pair.left, pair.right, r);
            }
        }
    }

    Ok(())
}
