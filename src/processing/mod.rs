//! Subnet processing logic.
//!
//! This module contains the core stages, used in sequence:
//! - [`normalize`] - reduce mixed notations to one address/prefix pair
//! - [`describe`] - boundary arithmetic for a validated subnet
//! - [`explain`] - step-by-step trace of the boundary derivation

mod describe;
mod explain;
mod normalize;

// Re-export public functions
pub use describe::describe_subnet;
pub use explain::{explain_network, transition_info};
pub use normalize::{normalize, NormalizeError};
