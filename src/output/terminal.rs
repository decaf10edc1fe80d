//! Tab separated terminal output.

use crate::models::Network;
use crate::report::Summary;
use std::io::{self, Write};

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Addr\t\tNetAddr\t\tMask(hex)\tBrdAddr\t\tLeading ones\tMask Length\tMax Hosts"
    )
}

pub fn write_row<W: Write>(out: &mut W, n: &Network) -> io::Result<()> {
    writeln!(
        out,
        "{addr}\t{net_addr}\t{mask}\t{brd_addr}\t{ones}\t\t{bits}\t\t{max_hosts}",
        addr = n.addr,
        net_addr = n.net_addr,
        mask = n.mask_hex(),
        brd_addr = n.brd_addr,
        ones = n.ones,
        bits = n.bits,
        max_hosts = n.max_hosts,
    )
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "{}", summary.message())
}
