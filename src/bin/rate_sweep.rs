//! Run the projection across a range of return rates
//!
//! Outputs one CSV row per rate for comparing outcomes side by side

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use rayon::prelude::*;
use serde::Serialize;

use wealth_projection::assumptions::percent_to_fraction;
use wealth_projection::projection::{DEFAULT_PROJECTION_YEARS, DEFAULT_START_AGE};
use wealth_projection::records::load_store;
use wealth_projection::{MissingMonthlyPolicy, ProjectionConfig, ProjectionEngine, ProjectionInputs};

#[derive(Parser, Debug)]
#[command(name = "rate_sweep", about = "Compare projections over a range of return rates")]
struct Args {
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Lowest return rate in percent
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Highest return rate in percent
    #[arg(long, default_value_t = 10.0)]
    to: f64,

    /// Increment in percentage points
    #[arg(long, default_value_t = 0.5)]
    step: f64,

    #[arg(long)]
    start_year: Option<i32>,

    #[arg(long, default_value_t = DEFAULT_START_AGE)]
    start_age: u32,

    #[arg(short, long, default_value_t = DEFAULT_PROJECTION_YEARS)]
    years: u32,

    /// Project with zero yearly savings when no monthly record exists
    #[arg(long)]
    assume_zero_savings: bool,

    /// Write CSV here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Summary of one projection
#[derive(Debug, Serialize)]
struct SweepRow {
    return_rate_pct: f64,
    final_wealth: i64,
    min_wealth: i64,
    first_negative_year: Option<i32>,
}

/// Most rates a single sweep will project
const MAX_SWEEP_RATES: usize = 10_000;

fn sweep_rates(from: f64, to: f64, step: f64) -> anyhow::Result<Vec<f64>> {
    if !(step > 0.0) || !from.is_finite() || !to.is_finite() || to < from {
        bail!("rate range must satisfy from <= to with a positive step");
    }
    let steps = ((to - from) / step + 1e-9).floor();
    if !steps.is_finite() || steps >= MAX_SWEEP_RATES as f64 {
        bail!("rate range {}..={} with step {} exceeds {} rates", from, to, step, MAX_SWEEP_RATES);
    }
    let count = steps as usize + 1;
    // Round to basis points so 0.1 steps print cleanly
    Ok((0..count)
        .map(|i| ((from + step * i as f64) * 100.0).round() / 100.0)
        .collect())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = ProjectionConfig::default();
    if let Some(start_year) = args.start_year {
        config.start_year = start_year;
    }
    config.start_age = args.start_age;
    config.num_years = args.years;
    config.validate()?;

    let rates = sweep_rates(args.from, args.to, args.step)?;

    let mut store = load_store(&args.data_dir)
        .with_context(|| format!("failed to load records from {}", args.data_dir.display()))?;
    let policy = if args.assume_zero_savings {
        MissingMonthlyPolicy::AssumeZero
    } else {
        MissingMonthlyPolicy::Fail
    };
    let inputs = ProjectionInputs::gather(&mut store, policy)?;

    let fractions = rates
        .iter()
        .map(|&pct| Ok((pct, percent_to_fraction("return", pct)?)))
        .collect::<wealth_projection::Result<Vec<_>>>()?;

    info!("Running {} projections...", fractions.len());
    let start = Instant::now();

    // One engine shared across threads; each projection owns its inputs
    let engine = ProjectionEngine::new(config);
    let rows: Vec<SweepRow> = fractions
        .par_iter()
        .map(|&(pct, rate)| {
            let result = engine.project(&inputs.with_return_rate(rate));
            SweepRow {
                return_rate_pct: pct,
                final_wealth: result.final_wealth().unwrap_or(inputs.initial_wealth),
                min_wealth: result.min_wealth().unwrap_or(inputs.initial_wealth),
                first_negative_year: result.first_negative_year(),
            }
        })
        .collect();

    info!("Projections complete in {:?}", start.elapsed());

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = csv::Writer::from_writer(sink);
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        println!("Output written to {}", path.display());
    }
    Ok(())
}
