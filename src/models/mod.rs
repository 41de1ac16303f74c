//! Domain models for subnet explanation.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 address with CIDR prefix, plus mask arithmetic
//! - [`BoundaryDescriptor`] - boundary addresses and counts of one subnet
//! - [`ExplanationTrace`] / [`TraceStep`] - ordered derivation steps

mod ipv4;
mod subnet;
mod trace;

// Re-export public types
pub use ipv4::{
    bin8, block_size, broadcast_addr, cidr_mask, ip_bits, network_addr, next_subnet_addr,
    prefix_from_mask, Ipv4, MAX_LENGTH,
};
pub use subnet::BoundaryDescriptor;
pub use trace::{ExplanationTrace, TraceStep};
