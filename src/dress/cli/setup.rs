use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dress", bin_name = "dress", version)]
#[command(about = "Inventory manager for a clothing store", long_about = None)]
pub struct Cli {
    /// Directory holding the products file and the audit log
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Diagnostics go to stderr so they never interleave with the menu.
/// `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
