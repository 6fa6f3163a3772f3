//! examkit CLI — author an exam at the console and optionally take it.

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use examkit_core::{AuthoringLimits, Console};

mod session;

/// The session is fully interactive; the only flags are `--help` and
/// `--version`.
#[derive(Parser)]
#[command(
    name = "examkit",
    version,
    about = "Author a multiple choice or true/false exam and take it at the console"
)]
struct Cli {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("examkit=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let Cli {} = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    if let Err(e) = session::run(&mut console, &AuthoringLimits::default()) {
        if session::is_defect(&e) {
            tracing::error!(error = %e, "exam data violated a model invariant");
            eprintln!("Internal error: {e:#}");
            process::exit(2);
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
