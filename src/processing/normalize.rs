//! Notation normalizer: raw text to a canonical address/prefix pair.
//!
//! Accepts `A.B.C.D/N`, `A.B.C.D M.M.M.M` and the `-` / `:` separator
//! variants, and reduces them all to one [`Ipv4`]. Nothing downstream ever
//! re-parses raw text.

use crate::models::{prefix_from_mask, Ipv4, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Reasons an input string fails to normalize, carrying the offending text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("bad format '{0}': expected 'IP/CIDR' or 'IP MASK', e.g. '192.168.1.10/24' or '192.168.1.10 255.255.255.0'")]
    MalformedInput(String),
    #[error("invalid IP: {0}")]
    InvalidAddress(String),
    #[error("CIDR must be between 0-32, got '{0}'")]
    InvalidPrefixLength(String),
    #[error("invalid subnet mask: {0}")]
    InvalidNetmask(String),
    #[error("mask '{0}' is not contiguous")]
    NonContiguousMask(String),
}

lazy_static! {
    // One separator per token boundary: a run of the same punctuation
    // character (optionally space padded) or plain whitespace. A run mixing
    // distinct characters, e.g. "/-1", leaves an empty token behind and the
    // input is rejected as malformed.
    static ref SEPARATORS: Regex =
        Regex::new(r"\s*(?:/+|-+|:+)\s*|\s+").expect("Invalid Regex?");
}

/// Reduce a raw notation string to an address/prefix pair.
///
/// Host bits are preserved; the caller contrasts the original address
/// against the masked network address later.
pub fn normalize(raw: &str) -> Result<Ipv4, NormalizeError> {
    let trimmed = raw.trim();
    let tokens: Vec<&str> = SEPARATORS.split(trimmed).collect();
    log::trace!("normalize({raw:?}) tokens={tokens:?}");

    if tokens.len() != 2 || tokens.iter().any(|t| t.is_empty()) {
        return Err(NormalizeError::MalformedInput(trimmed.to_string()));
    }
    let (ip_token, mask_token) = (tokens[0], tokens[1]);

    let addr: Ipv4Addr = ip_token
        .parse()
        .map_err(|_| NormalizeError::InvalidAddress(ip_token.to_string()))?;
    let mask = resolve_mask(mask_token)?;

    Ok(Ipv4 { addr, mask })
}

/// Classify the mask token: all digits is a prefix length, anything else
/// must be a contiguous dotted netmask.
fn resolve_mask(token: &str) -> Result<u8, NormalizeError> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        let prefix: u8 = token
            .parse()
            .map_err(|_| NormalizeError::InvalidPrefixLength(token.to_string()))?;
        if prefix > MAX_LENGTH {
            return Err(NormalizeError::InvalidPrefixLength(token.to_string()));
        }
        return Ok(prefix);
    }

    let mask: Ipv4Addr = token
        .parse()
        .map_err(|_| NormalizeError::InvalidNetmask(token.to_string()))?;
    prefix_from_mask(mask).ok_or_else(|| NormalizeError::NonContiguousMask(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_notation() {
        let ip = normalize("192.168.1.10/24").unwrap();
        assert_eq!(ip.addr, Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(ip.mask, 24);
    }

    #[test]
    fn test_full_mask_notation() {
        let ip = normalize("192.168.1.10 255.255.255.0").unwrap();
        assert_eq!(ip.addr, Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(ip.mask, 24);
    }

    #[test]
    fn test_equivalent_notations() {
        let expected = normalize("192.168.1.10/24").unwrap();
        for raw in [
            "192.168.1.10 255.255.255.0",
            "192.168.1.10-24",
            "192.168.1.10:24",
            "192.168.1.10:255.255.255.0",
            "  192.168.1.10 / 24  ",
            "192.168.1.10//24",
        ] {
            assert_eq!(normalize(raw).unwrap(), expected, "input {raw:?}");
        }
    }

    #[test]
    fn test_host_bits_preserved() {
        let ip = normalize("59.89.212.216/14").unwrap();
        assert_eq!(ip.addr, Ipv4Addr::new(59, 89, 212, 216));
        assert_eq!(ip.network(), Ipv4Addr::new(59, 88, 0, 0));
    }

    #[test]
    fn test_malformed_token_count() {
        for raw in ["", "192.168.1.10", "1.2.3.4 5.6.7.8 24", "10.0.0.1/"] {
            assert!(
                matches!(normalize(raw), Err(NormalizeError::MalformedInput(_))),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_mixed_separator_run_is_malformed() {
        assert_eq!(
            normalize("192.168.1.10/-1"),
            Err(NormalizeError::MalformedInput("192.168.1.10/-1".to_string()))
        );
        assert!(matches!(
            normalize("10.0.0.1:-24"),
            Err(NormalizeError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_invalid_address() {
        for raw in ["256.1.1.1/24", "1.2.3/24", "1.2.3.4.5/24", "a.b.c.d/24"] {
            assert!(
                matches!(normalize(raw), Err(NormalizeError::InvalidAddress(_))),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_invalid_prefix_length() {
        assert_eq!(
            normalize("192.168.1.10/33"),
            Err(NormalizeError::InvalidPrefixLength("33".to_string()))
        );
        assert!(matches!(
            normalize("192.168.1.10/999999999999"),
            Err(NormalizeError::InvalidPrefixLength(_))
        ));
    }

    #[test]
    fn test_invalid_netmask() {
        assert_eq!(
            normalize("192.168.1.10 255.255.255.x"),
            Err(NormalizeError::InvalidNetmask("255.255.255.x".to_string()))
        );
        assert!(matches!(
            normalize("192.168.1.10 255.255.256.0"),
            Err(NormalizeError::InvalidNetmask(_))
        ));
    }

    #[test]
    fn test_non_contiguous_mask() {
        assert_eq!(
            normalize("192.168.1.10 255.255.0.1"),
            Err(NormalizeError::NonContiguousMask("255.255.0.1".to_string()))
        );
    }

    #[test]
    fn test_prefix_bounds() {
        assert_eq!(normalize("0.0.0.0/0").unwrap().mask, 0);
        assert_eq!(normalize("255.255.255.255/32").unwrap().mask, 32);
        assert_eq!(normalize("10.0.0.1 255.0.0.0").unwrap().mask, 8);
        assert_eq!(normalize("10.0.0.1 0.0.0.0").unwrap().mask, 0);
    }
}
