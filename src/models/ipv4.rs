//! IPv4 address and CIDR prefix utilities.
//!
//! Provides the [`Ipv4`] pair of host address plus prefix length, along with
//! the u32 mask arithmetic the subnet engine is built on.

use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_explain::models::cidr_mask;
/// assert_eq!(cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn cidr_mask(prefix: u8) -> u32 {
    assert!(prefix <= MAX_LENGTH, "Prefix {prefix} exceeds 32 bits");
    let right_len = MAX_LENGTH - prefix;
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Recover the prefix length from a dotted netmask.
///
/// Returns `None` unless the mask bits form a contiguous run of 1s from the
/// most significant bit. A non-contiguous pattern is rejected, never
/// truncated.
pub fn prefix_from_mask(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let prefix = bits.leading_ones() as u8;
    if bits == cidr_mask(prefix) {
        Some(prefix)
    } else {
        None
    }
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, prefix: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & cidr_mask(prefix))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, prefix: u8) -> Ipv4Addr {
    let mask = cidr_mask(prefix);
    let network_bits = u32::from(addr) & mask;
    Ipv4Addr::from(network_bits | !mask)
}

/// Total number of addresses in a block of the given prefix.
///
/// u64 so that `/0` yields 2^32 without wraparound.
pub fn block_size(prefix: u8) -> u64 {
    assert!(prefix <= MAX_LENGTH, "Prefix {prefix} exceeds 32 bits");
    1u64 << (MAX_LENGTH - prefix)
}

/// Returns the first address after the given subnet, or `None` when the
/// block ends at the top of the IPv4 address space.
pub fn next_subnet_addr(addr: Ipv4Addr, prefix: u8) -> Option<Ipv4Addr> {
    let network_bits = u32::from(network_addr(addr, prefix)) as u64;
    let next_bits = network_bits + block_size(prefix);
    u32::try_from(next_bits).ok().map(Ipv4Addr::from)
}

/// Render a byte as an 8-bit binary string.
pub fn bin8(value: u8) -> String {
    format!("{value:08b}")
}

/// Render an address as four 8-bit binary groups joined by '/'.
pub fn ip_bits(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|octet| bin8(*octet)).join("/")
}

/// IPv4 host address with CIDR prefix.
///
/// The address keeps its host bits; masking happens in [`Ipv4::network`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address as supplied, host bits included.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Pair an address with a prefix length.
    ///
    /// The prefix must already be validated; out of range here is a
    /// programming error, not user input.
    pub fn new(addr: Ipv4Addr, mask: u8) -> Ipv4 {
        assert!(mask <= MAX_LENGTH, "Prefix {mask} exceeds 32 bits");
        Ipv4 { addr, mask }
    }

    /// The address with all host bits cleared.
    pub fn network(&self) -> Ipv4Addr {
        network_addr(self.addr, self.mask)
    }

    /// The address with all host bits set.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
    }

    /// The dotted form of the subnet mask.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(cidr_mask(self.mask))
    }

    /// Total addresses in the block, network and broadcast included.
    pub fn num_addresses(&self) -> u64 {
        block_size(self.mask)
    }

    /// Start of the adjacent block, `None` at the top of the address space.
    pub fn next_subnet(&self) -> Option<Ipv4Addr> {
        next_subnet_addr(self.addr, self.mask)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(de::Error::custom(format!("invalid CIDR format: {}", s)));
        }

        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| de::Error::custom(format!("invalid IP address: {}", parts[0])))?;
        let mask = u8::from_str(parts[1])
            .map_err(|_| de::Error::custom(format!("invalid subnet mask: {}", parts[1])))?;
        if mask > MAX_LENGTH {
            return Err(de::Error::custom(format!("invalid subnet mask: {}", mask)));
        }

        Ok(Ipv4 { addr, mask })
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
