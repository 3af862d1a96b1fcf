use time::{OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description};
use time_tz::{ToTimezone, timezones};

use crate::ContactSubmission;

/// Row appended to the spreadsheet: `[localized timestamp, email, message]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetRow {
    pub timestamp: String,
    pub email: String,
    pub message: String,
}

impl SheetRow {
    pub fn from_submission(submission: ContactSubmission, timezone: &str) -> Self {
        Self {
            timestamp: localize_timestamp(&submission.timestamp, timezone),
            email: submission.email,
            message: submission.message,
        }
    }

    pub fn cells(&self) -> [&str; 3] {
        [&self.timestamp, &self.email, &self.message]
    }
}

/// Renders an RFC 3339 timestamp the way `ru-RU` locales print a date time:
/// `DD.MM.YYYY, HH:MM:SS` in the given time zone.
///
/// Unknown zones fall back to UTC. Input that does not parse is returned
/// unchanged and left to the spreadsheet's own coercion.
pub fn localize_timestamp(timestamp: &str, timezone: &str) -> String {
    let Ok(mut date) = OffsetDateTime::parse(timestamp, &Rfc3339) else {
        tracing::debug!(timestamp, "timestamp is not RFC 3339, forwarding as is");
        return timestamp.to_owned();
    };

    if let Some(tz) = timezones::get_by_name(timezone) {
        date = date.to_timezone(tz);
    }

    date.format(format_description!(
        "[day].[month].[year], [hour]:[minute]:[second]"
    ))
    .unwrap_or_else(|_| timestamp.to_owned())
}
