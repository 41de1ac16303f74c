//! Step-by-step trace of the boundary derivation.

use crate::models::{bin8, ip_bits, ExplanationTrace, Ipv4, TraceStep, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Locate the octet the prefix boundary falls inside.
///
/// Returns the 0-based octet index and the count of 1-bits inside it, or
/// `None` when the prefix is 0 or a multiple of 8 and no octet is split.
pub fn transition_info(prefix: u8) -> Option<(usize, u8)> {
    assert!(prefix <= MAX_LENGTH, "Prefix {prefix} exceeds 32 bits");
    if prefix == 0 || prefix % 8 == 0 {
        return None;
    }
    Some(((prefix / 8) as usize, prefix % 8))
}

/// Build the ordered explanation trace for a normalizer-validated pair.
///
/// Steps follow the derivation order: base and mask binary, transition
/// byte, per-octet AND, then network, first host, last host, broadcast
/// and next subnet.
pub fn explain_network(ipv4: Ipv4) -> ExplanationTrace {
    let netmask = ipv4.netmask();
    let network = ipv4.network();
    let broadcast = ipv4.broadcast();
    let total = ipv4.num_addresses();

    let mut trace = ExplanationTrace::default();
    trace.push(TraceStep::Base {
        bits: ip_bits(Ipv4Addr::UNSPECIFIED),
    });
    trace.push(TraceStep::Netmask {
        mask: netmask,
        bits: ip_bits(netmask),
    });

    match transition_info(ipv4.mask) {
        Some((index, bits_set)) => {
            let value = netmask.octets()[index];
            trace.push(TraceStep::TransitionByte {
                index,
                bits_set,
                value,
                bits: bin8(value),
            });
        }
        None => trace.push(TraceStep::NoTransitionByte),
    }

    for (i, ((addr_octet, mask_octet), network_octet)) in ipv4
        .addr
        .octets()
        .into_iter()
        .zip(netmask.octets())
        .zip(network.octets())
        .enumerate()
    {
        trace.push(TraceStep::OctetAnd {
            ordinal: i + 1,
            addr_octet,
            mask_octet,
            network_octet,
        });
    }
    trace.push(TraceStep::NetworkAddress { network });

    let first_host = (total > 2).then(|| Ipv4Addr::from(u32::from(network) + 1));
    let last_host = (total > 2).then(|| Ipv4Addr::from(u32::from(broadcast) - 1));
    trace.push(TraceStep::FirstHost { host: first_host });
    trace.push(TraceStep::LastHost {
        host: last_host,
        usable_hosts: total.saturating_sub(2),
        total_addresses: total,
    });
    trace.push(TraceStep::Broadcast {
        broadcast,
        last_host,
    });
    trace.push(TraceStep::NextSubnet {
        network,
        block_size: total,
        next: ipv4.next_subnet(),
    });

    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_info() {
        assert_eq!(transition_info(0), None);
        assert_eq!(transition_info(8), None);
        assert_eq!(transition_info(16), None);
        assert_eq!(transition_info(24), None);
        assert_eq!(transition_info(32), None);
        assert_eq!(transition_info(14), Some((1, 6)));
        assert_eq!(transition_info(1), Some((0, 1)));
        assert_eq!(transition_info(27), Some((3, 3)));
        assert_eq!(transition_info(31), Some((3, 7)));
    }

    #[test]
    #[should_panic(expected = "exceeds 32 bits")]
    fn test_transition_info_out_of_range() {
        transition_info(33);
    }

    #[test]
    fn test_trace_step_order() {
        let trace = explain_network(Ipv4::new(Ipv4Addr::new(192, 168, 1, 10), 24));
        // base, mask, transition, 4 AND steps, network, first, last,
        // broadcast, next subnet
        assert_eq!(trace.len(), 12);
        assert!(matches!(trace.steps[0], TraceStep::Base { .. }));
        assert!(matches!(trace.steps[1], TraceStep::Netmask { .. }));
        assert!(matches!(trace.steps[2], TraceStep::NoTransitionByte));
        assert!(matches!(trace.steps[11], TraceStep::NextSubnet { .. }));
    }

    #[test]
    fn test_transition_byte_slash14() {
        let trace = explain_network(Ipv4::new(Ipv4Addr::new(59, 89, 212, 216), 14));
        assert_eq!(
            trace.steps[2],
            TraceStep::TransitionByte {
                index: 1,
                bits_set: 6,
                value: 252,
                bits: "11111100".to_string(),
            }
        );
    }

    #[test]
    fn test_octet_and_reassembles_network() {
        let ip = Ipv4::new(Ipv4Addr::new(59, 89, 212, 216), 14);
        let trace = explain_network(ip);
        let octets: Vec<u8> = trace
            .iter()
            .filter_map(|step| match step {
                TraceStep::OctetAnd {
                    ordinal,
                    addr_octet,
                    mask_octet,
                    network_octet,
                } => {
                    assert!((1..=4).contains(ordinal));
                    assert_eq!(addr_octet & mask_octet, *network_octet);
                    Some(*network_octet)
                }
                _ => None,
            })
            .collect();
        assert_eq!(octets.len(), 4);
        let reassembled = Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]);
        assert_eq!(reassembled, ip.network());
    }

    #[test]
    fn test_host_steps_absent_for_slash31() {
        let trace = explain_network(Ipv4::new(Ipv4Addr::new(10, 0, 0, 0), 31));
        assert!(trace
            .iter()
            .any(|s| matches!(s, TraceStep::FirstHost { host: None })));
        assert!(trace.iter().any(|s| matches!(
            s,
            TraceStep::LastHost {
                host: None,
                usable_hosts: 0,
                total_addresses: 2,
            }
        )));
        assert!(trace.iter().any(|s| matches!(
            s,
            TraceStep::Broadcast {
                broadcast,
                last_host: None,
            } if *broadcast == Ipv4Addr::new(10, 0, 0, 1)
        )));
    }

    #[test]
    fn test_broadcast_cross_check() {
        let trace = explain_network(Ipv4::new(Ipv4Addr::new(192, 168, 1, 10), 24));
        let step = trace
            .iter()
            .find(|s| matches!(s, TraceStep::Broadcast { .. }))
            .unwrap();
        if let TraceStep::Broadcast {
            broadcast,
            last_host: Some(last),
        } = step
        {
            assert_eq!(u32::from(*last) + 1, u32::from(*broadcast));
        } else {
            panic!("expected broadcast step with last host: {step:?}");
        }
    }

    #[test]
    fn test_next_subnet_none_for_slash0() {
        let trace = explain_network(Ipv4::new(Ipv4Addr::new(0, 0, 0, 0), 0));
        assert!(trace.iter().any(|s| matches!(
            s,
            TraceStep::NextSubnet {
                block_size,
                next: None,
                ..
            } if *block_size == 1u64 << 32
        )));
    }
}
