#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` wires the mirror engine into the `wsmirror` binary: it parses
//! command-line arguments, loads the YAML run configuration, initialises
//! logging, and sequences one synchronous run — build the source catalog,
//! open both destination roots, run every copy job, then run both
//! reclamation passes.
//!
//! The run either completes everything or terminates on the first
//! unrecovered error; there is no partial-success reporting.

mod config;

pub use config::{Config, ConfigError, DEFAULT_BACKUP_SUBDIRECTORY};

use clap::Parser;
use engine::{DestinationRoot, EngineError, ExclusionSet, MirrorJob, SourceCatalog};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error};

/// Mirror a workspace to a cloud-synced folder and a secondary destination.
#[derive(Debug, Parser)]
#[command(name = "wsmirror", version, about)]
struct Options {
    /// Path to the YAML run configuration
    #[arg(short = 'c', long, default_value = "config.yml")]
    config: PathBuf,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Error that aborts a run.
#[derive(Debug, Error)]
enum RunError {
    /// Loading or parsing the configuration file failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The mirror engine reported an unrecovered failure.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// No secondary destination was configured and the platform has no
    /// Downloads folder to fall back to.
    #[error("no secondary destination configured and no Downloads folder available")]
    MissingSecondaryDestination,
}

/// Parses `args`, performs one mirror run, and maps the outcome to a
/// process exit code.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let options = Options::parse_from(args);
    init_tracing(options.verbose);

    match execute(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(run_error) => {
            error!("{run_error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .init();
}

fn execute(options: &Options) -> Result<(), RunError> {
    let config = Config::load(&options.config)?;
    debug!("loaded configuration from {}", options.config.display());

    let exclusions = ExclusionSet::new(&config.exclude_directories);
    let catalog = SourceCatalog::new(&config.source_root, &config.large_file_directory_names)?;

    let secondary_base = match &config.nas {
        Some(path) => path.clone(),
        None => dirs::download_dir().ok_or(RunError::MissingSecondaryDestination)?,
    };

    let cloud = DestinationRoot::new(&config.cloud, &config.backup_subdirectory)?;
    let secondary = DestinationRoot::new(secondary_base, &config.backup_subdirectory)?;

    let mut jobs: Vec<MirrorJob> = cloud.create_jobs(catalog.normal())?;
    jobs.extend(secondary.create_jobs(catalog.large())?);

    for job in &jobs {
        job.run(&exclusions)?;
    }

    // Reclamation only starts once every copy job has completed, so a
    // partially failed copy can never trigger deletions.
    cloud.reclaim(&catalog)?;
    secondary.reclaim(&catalog)?;

    Ok(())
}
