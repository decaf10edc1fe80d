//! Command line options and logging setup.

use crate::output::Format;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::io::{self, IsTerminal};

/// Overrides `--verbose` when set, e.g. `CIDR_REPORT_LOG=debug`.
pub const LOG_ENV: &str = "CIDR_REPORT_LOG";

/// Print network address, mask, broadcast address and host count for IPv4 networks.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Networks in address/network-bits form, e.g. 192.168.1.0/24
    ///
    /// Options go before the first network; everything after it is a network.
    #[arg(value_name = "ADDR/BITS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub networks: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Tab)]
    pub format: Format,

    /// Exit with status 1 if any network fails to parse
    #[arg(long)]
    pub strict: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if let Some(level) = std::env::var(LOG_ENV)
            .ok()
            .and_then(|v| v.parse::<LevelFilter>().ok())
        {
            return level;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Colour the stderr error tags only when stderr is a terminal.
///
/// `colored` only looks at stdout, which is the wrong stream for us.
pub fn init_colors(stderr_is_terminal: bool) {
    colored::control::set_override(stderr_is_terminal);
}

pub fn stderr_is_terminal() -> bool {
    io::stderr().is_terminal()
}

/// Send log records to stderr so stdout only carries the report.
pub fn init_logging(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
