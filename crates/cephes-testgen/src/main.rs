//! CLI that writes the JUnit tests for the Cephes port.

mod commands;
mod utils;

use std::path::PathBuf;

use cephes_testgen::{Generator, JUnitFlavour, Overrides, catalog};
use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The path to a YAML catalog of test cases. The built-in cases are used if not provided.
    #[arg(short('c'), long)]
    catalog: Option<PathBuf>,

    /// The fully qualified class whose static methods are under test.
    #[arg(short('n'), long)]
    namespace: Option<String>,

    /// The logical path of the generated file, e.g. `net.mahdilamb.statistics.cephes.JUnitTests.java`.
    #[arg(short('d'), long)]
    destination: Option<String>,

    /// The maximum allowed difference in every assertion.
    #[arg(short('t'), long)]
    tolerance: Option<String>,

    /// The JUnit API to write the tests against. Defaults to `jupiter`.
    #[arg(short('j'), long)]
    junit: Option<JUnitFlavour>,

    /// The directory for log files. Logs go to stderr if not provided.
    #[arg(short('l'), long)]
    log_dir: Option<PathBuf>,

    /// The name of the log-file to use.
    #[arg(long, default_value = "cephes-testgen")]
    log_name: String,

    /// The subcommand to run. Defaults to `generate`.
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Args {
    /// The values given on the command line that replace those of the catalog.
    fn overrides(&self) -> Overrides {
        Overrides {
            namespace: self.namespace.clone(),
            destination: self.destination.clone(),
            tolerance: self.tolerance.clone(),
            flavour: self.junit,
        }
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_name, args.log_dir.as_deref())?;
    if let Some(log_path) = &log_path {
        ftlog::info!("Log file: {log_path:?}");
    }

    let config = catalog::load(args.catalog.as_deref(), &args.overrides()).map_err(|e| e.to_string())?;

    match args.command.unwrap_or_default() {
        Commands::List => {
            commands::list(&config);
            Ok(())
        }
        command => {
            let working_dir = std::env::current_dir()
                .and_then(std::fs::canonicalize)
                .map_err(|e| e.to_string())?;
            ftlog::info!("Working directory: {working_dir:?}");

            let generator = Generator::new(config);
            match command {
                Commands::Check => commands::check(&generator, &working_dir),
                _ => commands::generate(&generator, &working_dir),
            }
        }
    }
}
