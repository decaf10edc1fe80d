//! Error types for cidr-report.

use thiserror::Error;

/// Fatal errors that stop the whole run.
#[derive(Error, Debug)]
pub enum Error {
    /// No networks were given on the command line
    #[error("Usage: {program}  address/network-bits \nFor example 192.168.1.0/24")]
    Usage { program: String },

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single `address/prefix-length` token could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// No `/` separator
    #[error("missing /prefix-length")]
    MissingPrefix,

    /// Address part is not a dotted-decimal IPv4 address
    #[error("invalid IPv4 address {0:?}")]
    InvalidAddress(String),

    /// Prefix part is empty or not a decimal number
    #[error("invalid prefix length {0:?}")]
    InvalidPrefix(String),

    /// Prefix is a number but larger than 32
    #[error("prefix length {0} is too long, must be 0-32")]
    PrefixTooLong(String),
}

/// A token that failed to parse, reported per item and counted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid CIDR address: {token}: {source}")]
pub struct ParseError {
    pub token: String,
    pub source: CidrError,
}

impl ParseError {
    pub fn new(token: &str, source: CidrError) -> ParseError {
        ParseError {
            token: token.to_string(),
            source,
        }
    }
}
