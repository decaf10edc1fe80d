use cidr_report::config::{init_colors, init_logging, stderr_is_terminal};
use cidr_report::{failed_run, run, Cli};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.log_level()) {
        eprintln!("Error initializing log4rs: {e}");
        return ExitCode::FAILURE;
    }
    init_colors(stderr_is_terminal());
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match run(&cli, &program, &mut out, &mut err) {
        Ok(summary) if failed_run(&cli, &summary) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run() failed: {e:?}");
            let _ = writeln!(err, "{e}");
            ExitCode::FAILURE
        }
    }
}
