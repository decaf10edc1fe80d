//! CSV output formatting for network reports.

use crate::models::Network;
use crate::report::Summary;
use std::io::{self, Write};

// "255.255.255.255" quoted is 17
const ADDR_WIDTH: usize = 18;
const MASK_WIDTH: usize = 11;
const BITS_WIDTH: usize = 7;
const HOSTS_WIDTH: usize = 13;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{},{},{},{},{},{},{}",
        format_field("addr", ADDR_WIDTH),
        format_field("net_addr", ADDR_WIDTH),
        format_field("mask_hex", MASK_WIDTH),
        format_field("brd_addr", ADDR_WIDTH),
        format_field("ones", BITS_WIDTH),
        format_field("bits", BITS_WIDTH),
        format_field("max_hosts", HOSTS_WIDTH),
    )
}

pub fn write_row<W: Write>(out: &mut W, n: &Network) -> io::Result<()> {
    writeln!(
        out,
        "{addr},{net_addr},{mask},{brd_addr},{ones},{bits},{max_hosts}",
        addr = format_field(n.addr, ADDR_WIDTH),
        net_addr = format_field(n.net_addr, ADDR_WIDTH),
        mask = format_field(n.mask_hex(), MASK_WIDTH),
        brd_addr = format_field(n.brd_addr, ADDR_WIDTH),
        ones = format_field(n.ones, BITS_WIDTH),
        bits = format_field(n.bits, BITS_WIDTH),
        max_hosts = format_field(n.max_hosts, HOSTS_WIDTH),
    )
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "# {}", summary.message())
}
