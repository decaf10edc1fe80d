//! JSON lines output.

use crate::models::Network;
use crate::report::Summary;
use serde_json::json;
use std::io::{self, Write};

pub fn write_row<W: Write>(out: &mut W, n: &Network) -> io::Result<()> {
    serde_json::to_writer(&mut *out, n)?;
    writeln!(out)
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    let value = json!({
        "processed": summary.processed,
        "elapsed_secs": summary.elapsed.as_secs_f64(),
        "failed": summary.failed,
    });
    serde_json::to_writer(&mut *out, &value)?;
    writeln!(out)
}
