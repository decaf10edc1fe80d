//! A parsed network and the subnet fields derived from it.

use super::ipv4::{broadcast_addr, cut_addr, get_cidr_mask, mask_ones, max_hosts, Ipv4, MAX_LENGTH};
use crate::error::CidrError;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// One report row: everything derived from an `address/prefix-length` token.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Network {
    /// Host address as given.
    pub addr: Ipv4Addr,
    /// Host bits cleared.
    pub net_addr: Ipv4Addr,
    pub mask: Ipv4Addr,
    /// Host bits set.
    pub brd_addr: Ipv4Addr,
    /// Leading ones of the mask.
    pub ones: u8,
    /// Total mask width, always 32.
    pub bits: u8,
    pub max_hosts: i64,
}

impl Network {
    pub fn from_ipv4(cidr: Ipv4) -> Result<Network, CidrError> {
        let mask = get_cidr_mask(cidr.mask)?;
        Ok(Network {
            addr: cidr.addr,
            net_addr: cut_addr(cidr.addr, cidr.mask)?,
            mask: Ipv4Addr::from(mask),
            brd_addr: broadcast_addr(cidr.addr, cidr.mask)?,
            ones: mask_ones(mask),
            bits: MAX_LENGTH,
            max_hosts: max_hosts(cidr.mask)?,
        })
    }

    /// Mask as 8 lower-case hex digits, e.g. `ffffff00`.
    pub fn mask_hex(&self) -> String {
        format!("{:08x}", u32::from(self.mask))
    }
}

impl FromStr for Network {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Network, CidrError> {
        Network::from_ipv4(s.parse()?)
    }
}
