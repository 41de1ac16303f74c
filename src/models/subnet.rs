//! Subnet boundary data model.

use serde::Serialize;
use std::net::Ipv4Addr;

/// Boundary addresses and counts for one subnet.
///
/// First and last host are `None` for /31 and /32 blocks, which have no
/// usable-host semantics. `next_subnet` is `None` when the block ends at
/// 255.255.255.255.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BoundaryDescriptor {
    /// Network address (input address with host bits cleared).
    pub network: Ipv4Addr,
    /// CIDR prefix length (0-32).
    pub prefix: u8,
    /// Dotted form of the subnet mask.
    pub netmask: Ipv4Addr,
    /// First usable host address, network + 1.
    pub first_host: Option<Ipv4Addr>,
    /// Last usable host address, broadcast - 1.
    pub last_host: Option<Ipv4Addr>,
    /// Broadcast address (all host bits set).
    pub broadcast: Ipv4Addr,
    /// Start of the adjacent block, network + block size.
    pub next_subnet: Option<Ipv4Addr>,
    /// Total addresses in the block, network and broadcast included.
    pub total_addresses: u64,
    /// Addresses excluding network and broadcast, floored at 0.
    pub usable_hosts: u64,
}
