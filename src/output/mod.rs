//! Output formatting for subnet reports.
//!
//! This module handles formatting and rendering of core results:
//! - [`terminal`] - colored summary and explanation blocks
//! - [`json`] - structured JSON output

mod json;
mod terminal;

pub use json::to_json;
pub use terminal::{print_explanation, print_summary};
