//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for an address with its prefix length,
//! along with the bit arithmetic used to derive the rest of a subnet.

use crate::error::CidrError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_report::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixTooLong(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Number of usable hosts, `2^(32 - len) - 2`.
///
/// Not clamped: a /31 gives 0 and a /32 gives -1.
pub fn max_hosts(len: u8) -> Result<i64, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixTooLong(len.to_string()))
    } else {
        Ok((1i64 << (MAX_LENGTH - len)) - 2)
    }
}

/// Count the leading one-bits of a mask.
pub fn mask_ones(mask: u32) -> u8 {
    mask.leading_ones() as u8
}

/// An `address/prefix-length` pair as parsed from a token.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Ipv4 {
    /// The IPv4 address as written, host bits included.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl FromStr for Ipv4 {
    type Err = CidrError;

    fn from_str(addr_cidr: &str) -> Result<Ipv4, CidrError> {
        let (addr, bits) = addr_cidr.split_once('/').ok_or(CidrError::MissingPrefix)?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr.to_string()))?;

        // u8::from_str takes a leading '+', so check the digits first
        if bits.is_empty() || !bits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CidrError::InvalidPrefix(bits.to_string()));
        }
        let mask: u8 = bits
            .parse()
            .map_err(|_| CidrError::PrefixTooLong(bits.to_string()))?;
        if mask > MAX_LENGTH {
            return Err(CidrError::PrefixTooLong(bits.to_string()));
        }
        Ok(Ipv4 { addr, mask })
    }
}
