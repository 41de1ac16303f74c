//! Boundary arithmetic for one validated subnet.

use crate::models::{BoundaryDescriptor, Ipv4};
use std::net::Ipv4Addr;

/// Derive the boundary descriptor for a normalizer-validated pair.
///
/// Pure u32/u64 arithmetic, no failure modes: an out-of-range prefix can
/// only come from a caller bypassing the normalizer and aborts.
pub fn describe_subnet(ipv4: Ipv4) -> BoundaryDescriptor {
    let network = ipv4.network();
    let broadcast = ipv4.broadcast();
    let total = ipv4.num_addresses();

    // /31 and /32 have no usable-host semantics.
    let first_host = (total > 2).then(|| Ipv4Addr::from(u32::from(network) + 1));
    let last_host = (total > 2).then(|| Ipv4Addr::from(u32::from(broadcast) - 1));

    BoundaryDescriptor {
        network,
        prefix: ipv4.mask,
        netmask: ipv4.netmask(),
        first_host,
        last_host,
        broadcast,
        next_subnet: ipv4.next_subnet(),
        total_addresses: total,
        usable_hosts: total.saturating_sub(2),
    }
}
