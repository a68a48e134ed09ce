use std::process::ExitCode;

use clap::Parser;
use stashit_lib::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // One command per process; a single thread is plenty.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("✗ Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(stashit_lib::run(cli))
}
