use clap::Parser;
use record_temps::cli::{run, Cli};
use record_temps::utils::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("{}: {}", e.kind(), e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}
