mod cli;
mod harness;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::report::CsvReport;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid experiment config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Algorithm(#[from] algorithms::Error),
    #[error("cannot create {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed writing results: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed writing progress: {0}")]
    Progress(#[source] std::io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("off")),
                ),
        )
        .init();

    let opts = match cli::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("error: {}", e);
            cli::print_usage();
            return ExitCode::from(2);
        }
    };

    for flag in &opts.ignored {
        eprintln!("warning: ignoring unrecognised flag {:?}", flag);
    }

    if opts.help {
        cli::print_usage();
        return ExitCode::SUCCESS;
    }

    if !opts.experiments {
        println!("{}", cli::USAGE_HINT);
        return ExitCode::SUCCESS;
    }

    match run_experiments(&opts.out) {
        Ok(()) => {
            println!("Experiments completed, results written to: {}", opts.out.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_experiments(out: &std::path::Path) -> Result<(), Error> {
    let cfg = harness::Config::default();
    cfg.validate()?;

    let mut report = CsvReport::create(out)?;

    let seed = algorithms::clock_seed();
    info!(seed, path = %out.display(), "seeded");
    let mut rng = StdRng::seed_from_u64(seed);

    let start = std::time::Instant::now();
    harness::run(&cfg, &mut rng, &mut report, &mut std::io::stderr())?;
    info!(
        rows = report.rows(),
        sizes = cfg.sizes().len(),
        trials = cfg.trials(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "experiments_done"
    );
    report.finish()?;
    Ok(())
}
