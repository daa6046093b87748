//! JSON rendering of result records.

use crate::error::EvalResult;
use crate::record::ResultRecord;

/// Render a record as pretty-printed JSON.
pub fn to_json(record: &ResultRecord) -> EvalResult<String> {
    Ok(serde_json::to_string_pretty(record)?)
}
