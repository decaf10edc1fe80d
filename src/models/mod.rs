//! Domain models for cidr-report.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`Network`] - the subnet fields derived from one [`Ipv4`]

mod ipv4;
mod network;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, mask_ones, max_hosts, Ipv4, MAX_LENGTH,
};
pub use network::Network;
