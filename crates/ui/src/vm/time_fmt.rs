use chrono::{DateTime, Utc};

/// Elapsed wall time between two stamps, as m:ss.
#[must_use]
pub fn format_elapsed(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> String {
    let seconds = (completed_at - started_at).num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
