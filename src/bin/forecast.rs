//! Print a year-by-year wealth projection from a data directory
//!
//! Strict by default: without a monthly income/expense record nothing is
//! printed and the command fails. `--assume-zero-savings` switches to the
//! dashboard behavior of projecting with zero yearly savings.

use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use wealth_projection::projection::{DEFAULT_PROJECTION_YEARS, DEFAULT_START_AGE};
use wealth_projection::records::load_store;
use wealth_projection::report::{DashboardView, TableReport};
use wealth_projection::{
    MissingMonthlyPolicy, ProjectionConfig, ProjectionEngine, ProjectionInputs, RecordStore,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    /// Fixed-width text table
    Table,
    /// Dashboard JSON with chart series
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "forecast", about = "Project net worth year by year, including life goals")]
struct Args {
    /// Directory holding assets.csv, monthly.csv, goals.csv and settings.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// First projected year (default: current year)
    #[arg(long)]
    start_year: Option<i32>,

    /// Age in the first projected year
    #[arg(long, default_value_t = DEFAULT_START_AGE)]
    start_age: u32,

    /// Number of years to project
    #[arg(short, long, default_value_t = DEFAULT_PROJECTION_YEARS)]
    years: u32,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Project with zero yearly savings when no monthly record exists
    #[arg(long)]
    assume_zero_savings: bool,

    /// Highlight negative wealth in red
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
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

    let start = Instant::now();
    let mut store = load_store(&args.data_dir)
        .with_context(|| format!("failed to load records from {}", args.data_dir.display()))?;
    info!("Loaded records in {:?}", start.elapsed());

    let policy = if args.assume_zero_savings {
        MissingMonthlyPolicy::AssumeZero
    } else {
        MissingMonthlyPolicy::Fail
    };
    let inputs = ProjectionInputs::gather(&mut store, policy)?;
    let result = ProjectionEngine::new(config.clone()).project(&inputs);

    let stdout = io::stdout();
    let highlight = match args.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => stdout.is_terminal(),
    };
    let mut out = BufWriter::new(stdout.lock());

    match args.format {
        OutputFormat::Table => {
            TableReport::new(inputs.initial_wealth, inputs.yearly_savings)
                .with_highlight(highlight)
                .render(&mut out, &result)?;
        }
        OutputFormat::Json => {
            let settings = store.settings().clone();
            let view = DashboardView::new(&inputs, settings, config, result);
            serde_json::to_writer_pretty(&mut out, &view)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
