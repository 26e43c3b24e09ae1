mod config;
mod error;
mod export;
mod scenario;
mod simulation;

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info, warn};
use rocket_landing::LandingStatus;
use std::{io::Write, path::PathBuf};

use crate::{scenario::Scenario, simulation::LandingAttempt};

#[derive(Parser)]
#[command(author, version, about = "Race rockets for a shared landing platform", long_about = None)]
struct Args {
    /// Scenario file path (falls back to the built-in scenario if missing)
    #[arg(short = 'c', long = "config", default_value = "scenario.toml")]
    config: PathBuf,

    /// Directory for the attempt log, overrides LANDING_SIM_OUTPUT_DIR
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Skip writing the CSV attempt log
    #[arg(long = "no-export")]
    no_export: bool,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    let config = config::Config::resolve(args.output_dir.clone())?;

    let scenario = if args.config.exists() {
        Scenario::load_from_file(&args.config)?
    } else {
        warn!(
            "Scenario file not found: {}, using built-in scenario",
            args.config.display()
        );
        Scenario::default()
    };

    let checker = scenario.build_checker()?;
    info!(
        "Platform {} in area {}, separation {} (diameter {})",
        checker.landing_platform(),
        checker.landing_area(),
        checker.separation_units(),
        checker.separation_diameter()
    );
    info!(
        "Launching {} rockets with {} landing requests",
        scenario.rockets.len(),
        scenario.total_targets()
    );

    let attempts = simulation::run(&checker, &scenario)?;
    report(&attempts);

    if args.no_export {
        debug!("CSV export disabled");
        return Ok(());
    }

    match export::export_to_csv_with_path(&attempts, config.output_dir.as_deref()) {
        Ok(path) => {
            info!("Attempt log saved to: {}", path.display());
            Ok(())
        }
        Err(e) => {
            let e = anyhow::Error::from(e);
            error!("Error: {e}");

            use std::io::ErrorKind;
            for cause in e.chain() {
                if let Some(ioe) = cause.downcast_ref::<std::io::Error>()
                    && ioe.kind() == ErrorKind::PermissionDenied
                {
                    error!("Hint: Run in a writable directory or set LANDING_SIM_OUTPUT_DIR.");
                    break;
                }
            }
            let _ = std::io::stderr().flush();
            std::process::exit(1);
        }
    }
}

fn report(attempts: &[LandingAttempt]) {
    for attempt in attempts {
        info!(
            "{:<12} {:>10} -> {}",
            attempt.rocket,
            attempt.point.to_string(),
            attempt.status
        );
    }

    let summary = simulation::summarize(attempts);
    for status in LandingStatus::ALL {
        info!(
            "{}: {}",
            status,
            summary.get(&status).copied().unwrap_or(0)
        );
    }
}
