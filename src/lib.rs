//! Compute and explain IPv4 subnet boundaries.
//!
//! Data flows one way: a raw notation string is normalized to an
//! address/prefix pair, the pair is reduced to a [`BoundaryDescriptor`],
//! and an [`ExplanationTrace`] narrates how the network address follows
//! from address AND mask. Rendering lives in [`output`] and only consumes
//! core results.

pub mod models;
pub mod output;
pub mod processing;

use serde::Serialize;

pub use models::{BoundaryDescriptor, ExplanationTrace, Ipv4, TraceStep};
pub use processing::{describe_subnet, explain_network, normalize, NormalizeError};

/// Everything derived from one raw input string.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    /// The trimmed input as supplied by the caller.
    pub input: String,
    /// The canonical address/prefix pair, host bits preserved.
    pub subnet: Ipv4,
    pub descriptor: BoundaryDescriptor,
    pub trace: ExplanationTrace,
}

/// Normalize one raw input and derive its descriptor and trace.
///
/// Each call is independent and allocates only locally-owned results, so
/// batches of inputs need no coordination.
pub fn report(raw: &str) -> Result<SubnetReport, NormalizeError> {
    let subnet = normalize(raw)?;
    log::debug!("normalized {raw:?} to {subnet}");
    Ok(SubnetReport {
        input: raw.trim().to_string(),
        subnet,
        descriptor: describe_subnet(subnet),
        trace: explain_network(subnet),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_deterministic() {
        let a = report("192.0.2.10/27").unwrap();
        let b = report("192.0.2.10/27").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_error_passthrough() {
        assert_eq!(
            report("192.168.1.10 255.255.0.1"),
            Err(NormalizeError::NonContiguousMask("255.255.0.1".to_string()))
        );
    }
}
