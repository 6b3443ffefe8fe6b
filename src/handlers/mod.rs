pub mod dashboard;
pub mod health;

use chrono::{SecondsFormat, Utc};

/// Single UTC timestamp source for response payloads.
pub fn utc_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
