//! The per-token report loop.
//!
//! Tokens are handled strictly in order: a valid token becomes one output
//! row, an invalid one becomes one error line on `err` and bumps the
//! failure count. Nothing here is fatal except a failing writer.

use crate::error::ParseError;
use crate::models::Network;
use crate::output::Format;
use colored::Colorize;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Totals printed after the last row.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub processed: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl Summary {
    pub fn succeeded(&self) -> usize {
        self.processed - self.failed
    }

    pub fn message(&self) -> String {
        format!(
            "Processed {} networks in {:.3}s of which {} failed",
            self.processed,
            self.elapsed.as_secs_f64(),
            self.failed
        )
    }
}

/// Running state for one report.
struct Reporter {
    started: Instant,
    processed: usize,
    failed: usize,
}

impl Reporter {
    fn new() -> Reporter {
        Reporter {
            started: Instant::now(),
            processed: 0,
            failed: 0,
        }
    }

    fn parse(&mut self, token: &str) -> Result<Network, ParseError> {
        self.processed += 1;
        token.parse::<Network>().map_err(|e| {
            self.failed += 1;
            ParseError::new(token, e)
        })
    }

    fn finish(self) -> Summary {
        Summary {
            processed: self.processed,
            failed: self.failed,
            elapsed: self.started.elapsed(),
        }
    }
}

/// Parse every token and write a header, one row per valid network and a
/// summary to `out`. Parse failures go to `err`.
pub fn report_networks<T, W, E>(
    tokens: &[T],
    format: Format,
    out: &mut W,
    err: &mut E,
) -> io::Result<Summary>
where
    T: AsRef<str>,
    W: Write,
    E: Write,
{
    let mut reporter = Reporter::new();
    format.write_header(out)?;

    for token in tokens {
        let token = token.as_ref();
        match reporter.parse(token) {
            Ok(network) => {
                log::debug!("{token} -> {}/{}", network.net_addr, network.ones);
                format.write_row(out, &network)?;
            }
            Err(e) => {
                log::debug!("failed to parse {token}: {:?}", e.source);
                writeln!(err, "{}: {}", "error".red(), e)?;
            }
        }
    }

    let summary = reporter.finish();
    format.write_summary(out, &summary)?;
    Ok(summary)
}
