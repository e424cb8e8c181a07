//! medicos roster binary.

use std::process::ExitCode;

use medicos_cli::{run, Cli};
use medicos_store::MedicosStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse_args();

    tracing::info!("Using roster at: {}", cli.data.display());
    let mut store = MedicosStore::open(&cli.data)?;

    match run(&cli.command, &mut store) {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_rejection() => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
