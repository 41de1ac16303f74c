//! JSON rendering of subnet reports.

use crate::SubnetReport;

/// Serialize a full report (descriptor plus trace) as pretty JSON.
pub fn to_json(report: &SubnetReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
