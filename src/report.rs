//! Report serialization to the JSON wire format.
//!
//! The serializer is a rendering step only: array order equals
//! aggregation order, key order is fixed by the model's field order, and
//! nothing is reordered, filtered, or summarized. All string fields go
//! through serde_json's escaping.

use crate::extract::Report;

/// Serialize the report as pretty-printed JSON.
pub fn to_json_string(report: &Report) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the report to stdout, once, after the walk completes.
pub fn write_json(report: &Report) -> anyhow::Result<()> {
    println!("{}", to_json_string(report)?);
    Ok(())
}
