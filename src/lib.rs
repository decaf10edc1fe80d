//! Subnet calculator for IPv4 networks given as `address/prefix-length`.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;

use std::io::Write;

pub use config::Cli;
pub use error::{CidrError, Error, ParseError};
pub use report::{report_networks, Summary};

/// Report every network named on the command line.
///
/// Fails with [`Error::Usage`] before writing anything if no networks
/// were given.
pub fn run<W: Write, E: Write>(
    cli: &Cli,
    program: &str,
    out: &mut W,
    err: &mut E,
) -> Result<Summary, Error> {
    if cli.networks.is_empty() {
        return Err(Error::Usage {
            program: program.to_string(),
        });
    }
    log::info!("#Start run() with {} networks", cli.networks.len());

    let summary = report_networks(cli.networks.as_slice(), cli.format, out, err)?;

    log::info!(
        "#End run() {} ok, {} failed",
        summary.succeeded(),
        summary.failed
    );
    Ok(summary)
}

/// Whether the run should end with a failure status.
pub fn failed_run(cli: &Cli, summary: &Summary) -> bool {
    cli.strict && summary.failed > 0
}
