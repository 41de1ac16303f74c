//! Explanation trace data model.
//!
//! A trace is an ordered list of [`TraceStep`] records narrating how the
//! network boundaries follow from address AND mask. It is produced fresh
//! per computation and never mutated afterwards; renderers only read it.

use serde::Serialize;
use std::net::Ipv4Addr;

/// One stage of the boundary derivation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum TraceStep {
    /// The all-zero base address in binary.
    Base { bits: String },
    /// The netmask in binary.
    Netmask { mask: Ipv4Addr, bits: String },
    /// The octet the prefix boundary falls inside (prefix not a multiple
    /// of 8). `index` is the 0-based octet index, `bits_set` the count of
    /// 1-bits inside that octet.
    TransitionByte {
        index: usize,
        bits_set: u8,
        value: u8,
        bits: String,
    },
    /// Prefix is 0 or a multiple of 8, so no octet is split.
    NoTransitionByte,
    /// One octet of the address AND mask computation. `ordinal` is 1-based.
    OctetAnd {
        ordinal: usize,
        addr_octet: u8,
        mask_octet: u8,
        network_octet: u8,
    },
    /// The reassembled network address.
    NetworkAddress { network: Ipv4Addr },
    /// Network + 1, absent when the block has no usable hosts.
    FirstHost { host: Option<Ipv4Addr> },
    /// Broadcast - 1, with the usable-host count.
    LastHost {
        host: Option<Ipv4Addr>,
        usable_hosts: u64,
        total_addresses: u64,
    },
    /// All host bits set; `last_host` carries the + 1 cross-check.
    Broadcast {
        broadcast: Ipv4Addr,
        last_host: Option<Ipv4Addr>,
    },
    /// Network + block size, `None` past the top of the address space.
    NextSubnet {
        network: Ipv4Addr,
        block_size: u64,
        next: Option<Ipv4Addr>,
    },
}

/// Ordered derivation steps for one subnet computation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplanationTrace {
    pub steps: Vec<TraceStep>,
}

impl ExplanationTrace {
    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut trace = ExplanationTrace::default();
        trace.push(TraceStep::Base {
            bits: "00000000/00000000/00000000/00000000".to_string(),
        });
        trace.push(TraceStep::NoTransitionByte);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.iter().last(), Some(&TraceStep::NoTransitionByte));
    }
}
