//! Output formatting for network reports.
//!
//! - [`terminal`] - tab separated columns (the default)
//! - [`csv`] - quoted, aligned CSV
//! - [`json`] - one JSON object per line

mod csv;
mod json;
mod terminal;

use crate::models::Network;
use crate::report::Summary;
use std::io::{self, Write};

pub use csv::format_field;

/// How report rows are written to stdout.
#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Tab,
    Csv,
    Json,
}

impl Format {
    pub fn write_header<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            Format::Tab => terminal::write_header(out),
            Format::Csv => csv::write_header(out),
            // json lines are self describing
            Format::Json => Ok(()),
        }
    }

    pub fn write_row<W: Write>(self, out: &mut W, network: &Network) -> io::Result<()> {
        match self {
            Format::Tab => terminal::write_row(out, network),
            Format::Csv => csv::write_row(out, network),
            Format::Json => json::write_row(out, network),
        }
    }

    pub fn write_summary<W: Write>(self, out: &mut W, summary: &Summary) -> io::Result<()> {
        match self {
            Format::Tab => terminal::write_summary(out, summary),
            Format::Csv => csv::write_summary(out, summary),
            Format::Json => json::write_summary(out, summary),
        }
    }
}
