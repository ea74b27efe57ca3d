use crate::utils::constants::CTIME_FORMAT;
use chrono::{DateTime, Local, Utc};

/// Render epoch seconds the way ctime(3) does, without the trailing newline.
///
/// Timestamps outside chrono's representable range fall back to the raw number.
pub fn format_timestamp(epoch_seconds: i64, utc: bool) -> String {
    match DateTime::<Utc>::from_timestamp(epoch_seconds, 0) {
        Some(instant) if utc => instant.format(CTIME_FORMAT).to_string(),
        Some(instant) => instant
            .with_timezone(&Local)
            .format(CTIME_FORMAT)
            .to_string(),
        None => epoch_seconds.to_string(),
    }
}
