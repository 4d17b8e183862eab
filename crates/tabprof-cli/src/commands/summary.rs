//! Summary command - print a human-readable profile with quality insights.

use std::path::PathBuf;

use colored::Colorize;
use tabprof::{ColumnKind, CorrelationPair, CorrelationStrength, ProfileResult};

use crate::cli::ProfileOptions;

/// Correlations above this magnitude are listed; `--verbose` lists all.
const NOTABLE_CORRELATION: f64 = 0.4;

/// Overall quality verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataQuality {
    Good,
    NeedsAttention,
}

impl DataQuality {
    fn label(&self) -> &'static str {
        match self {
            DataQuality::Good => "Good",
            DataQuality::NeedsAttention => "Needs attention",
        }
    }
}

/// Roll-up of the statistics records.
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    /// Number of statistics records.
    pub columns_analyzed: usize,
    /// Sum of their counts.
    pub total_data_points: usize,
    /// `Good` only if every record counted at least one value.
    pub data_quality: DataQuality,
}

impl Insights {
    pub fn from_profile(result: &ProfileResult) -> Self {
        let all_populated = result.statistics.values().all(|s| s.count > 0);

        Self {
            columns_analyzed: result.statistics.len(),
            total_data_points: result.statistics.values().map(|s| s.count).sum(),
            data_quality: if all_populated {
                DataQuality::Good
            } else {
                DataQuality::NeedsAttention
            },
        }
    }
}

pub fn run(
    file: PathBuf,
    options: ProfileOptions,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Profiling".cyan().bold(),
        file.display().to_string().white()
    );

    let result = super::profile_file(&file, &options)?;

    println!(
        "{} rows x {} columns ({} numeric)",
        result.rows.to_string().white().bold(),
        result.columns.to_string().white().bold(),
        result.statistics.len().to_string().white().bold()
    );
    if verbose {
        println!("Source: {} ({} bytes)", result.source.hash, result.source.size_bytes);
    }
    println!();

    print_columns(&result);
    print_statistics(&result);
    print_correlations(&result, verbose);
    print_insights(&Insights::from_profile(&result));

    Ok(())
}

fn print_columns(result: &ProfileResult) {
    println!("{}", "Columns:".yellow().bold());
    for (name, info) in &result.column_info {
        let kind = match info.kind {
            ColumnKind::Numeric => info.kind.to_string().blue(),
            ColumnKind::NonNumeric => info.kind.to_string().magenta(),
        };
        let null = if info.null > 0 {
            info.null.to_string().yellow()
        } else {
            info.null.to_string().normal()
        };
        println!(
            "  {:20} {:12} non-null={:<6} null={:<6} unique={:<6} complete={:.1}%",
            name, kind, info.non_null, null, info.unique, info.completeness
        );
    }
    println!();
}

fn print_statistics(result: &ProfileResult) {
    if result.statistics.is_empty() {
        return;
    }

    println!("{}", "Statistics:".yellow().bold());
    println!(
        "  {:20} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for (name, s) in &result.statistics {
        println!(
            "  {:20} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            name,
            s.count,
            format_stat(s.mean),
            format_stat(s.std),
            format_stat(s.min),
            format_stat(s.p25),
            format_stat(s.p50),
            format_stat(s.p75),
            format_stat(s.max)
        );
    }
    println!();
}

/// Defined pairs worth printing, strongest first.
fn listed_pairs(result: &ProfileResult, verbose: bool) -> Vec<CorrelationPair> {
    let threshold = if verbose { 0.0 } else { NOTABLE_CORRELATION };
    result.correlation.strong_pairs(threshold)
}

fn print_correlations(result: &ProfileResult, verbose: bool) {
    if result.correlation.is_empty() {
        return;
    }

    let pairs = listed_pairs(result, verbose);
    println!("{}", "Correlations:".yellow().bold());
    if pairs.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for pair in pairs {
        if let (Some(r), Some(strength)) = (pair.r, pair.strength()) {
            let value = format!("{:+.3}", r);
            let value = match strength {
                CorrelationStrength::Strong => value.green().bold(),
                CorrelationStrength::Moderate => value.yellow(),
                CorrelationStrength::Weak => value.normal(),
            };
            println!("  {} <-> {}: {}", pair.left, pair.right, value);
        }
    }
    println!();
}

fn print_insights(insights: &Insights) {
    println!("{}", "Insights:".yellow().bold());
    println!("  Columns analyzed:  {}", insights.columns_analyzed);
    println!("  Total data points: {}", insights.total_data_points);

    let label = insights.data_quality.label();
    let label = match insights.data_quality {
        DataQuality::Good => label.green().bold(),
        DataQuality::NeedsAttention => label.red().bold(),
    };
    println!("  Data quality:      {}", label);
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "-".to_string(),
    }
}
