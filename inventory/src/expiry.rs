//! Certificate expiry status relative to a caller-supplied instant.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Certificates with fewer whole days left than this are expiring soon.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Valid,
    ExpiringSoon,
    Expired,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Valid => "valid",
            Status::ExpiringSoon => "expiring-soon",
            Status::Expired => "expired",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whole days from `now` until `not_after`, rounded down. Negative once the
/// certificate has expired, so one second past `not_after` is day -1.
pub fn days_remaining(not_after: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (not_after - now).num_seconds().div_euclid(SECONDS_PER_DAY)
}

pub fn status(not_after: DateTime<Utc>, now: DateTime<Utc>) -> Status {
    match days_remaining(not_after, now) {
        days if days < 0 => Status::Expired,
        days if days < EXPIRY_WARNING_DAYS => Status::ExpiringSoon,
        _ => Status::Valid,
    }
}
