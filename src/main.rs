//! @dose
//! purpose: This is the CLI entry point for aisl-convert. It parses command-line arguments
//!     using clap, sets up diagnostics, and hands the path list to the convert command.
//!
//! when-editing:
//!     - !No paths means usage text on stdout and exit 1, before any file I/O
//!     - Error messages are printed to stderr and exit with code 1
//!
//! invariants:
//!     - Exit 0 on success; skipped (missing) files don't change that
//!     - Exit 1 on no paths, on an I/O failure, or when --check finds unconverted files
//!
//! do-not:
//!     - Never add business logic here - delegate to command modules

use aisl_convert::cli::{Cli, USAGE};
use aisl_convert::commands::run_convert;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    if cli.convert.paths.is_empty() {
        println!("{}", USAGE);
        std::process::exit(1);
    }

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when `--check` found files that still need converting.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let summary = run_convert(&cli.convert, cli.verbose)?;

    if cli.convert.check && summary.pending() > 0 {
        eprintln!(
            "{} file(s) still use nested parameter syntax",
            summary.pending()
        );
        return Ok(false);
    }

    Ok(true)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
