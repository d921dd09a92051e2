use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use facility_records::{AppConfig, Domain, Gym, Hospital, Shell};

fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::parse();
    let output_dir = config.output_dir();

    tracing::info!(
        domain = config.domain.as_str(),
        output_dir = %output_dir.display(),
        version = facility_records::VERSION,
        "starting"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), output_dir);

    match config.domain {
        Domain::Gym => shell.run(&mut Gym::new())?,
        Domain::Hospital => shell.run(&mut Hospital::new())?,
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
