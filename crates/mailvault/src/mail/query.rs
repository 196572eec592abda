//! Canonical timestamp formats exchanged with the mail store and the CRM.

use chrono::{DateTime, Utc};

/// Timestamp format understood by the mail store's restriction query
/// language. Minute precision.
pub const QUERY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Timestamp format persisted to the CRM side. Seconds precision.
pub const CRM_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the restriction clause selecting items received at or after `since`.
pub fn received_since_clause(since: DateTime<Utc>) -> String {
    format!(
        "[ReceivedTime] >= '{}'",
        since.format(QUERY_TIMESTAMP_FORMAT)
    )
}

/// Formats a timestamp for the CRM side.
pub fn crm_timestamp(at: DateTime<Utc>) -> String {
    at.format(CRM_TIMESTAMP_FORMAT).to_string()
}
