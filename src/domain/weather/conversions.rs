use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which clock turns provider timestamps into calendar dates and wall times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeBasis {
    /// The queried location's UTC offset, as reported by the provider.
    #[default]
    Location,
    /// The machine running the dashboard.
    Local,
    Utc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone {
    pub basis: TimeBasis,
    pub utc_offset_secs: i32,
}

impl DisplayZone {
    #[must_use]
    pub fn new(basis: TimeBasis, utc_offset_secs: i32) -> Self {
        Self {
            basis,
            utc_offset_secs,
        }
    }

    #[must_use]
    pub fn utc() -> Self {
        Self::new(TimeBasis::Utc, 0)
    }

    #[must_use]
    pub fn localize(&self, ts: DateTime<Utc>) -> NaiveDateTime {
        match self.basis {
            TimeBasis::Location => {
                // Offsets outside ±24h are rejected by chrono; fall back to UTC.
                FixedOffset::east_opt(self.utc_offset_secs).map_or_else(
                    || ts.naive_utc(),
                    |offset| ts.with_timezone(&offset).naive_local(),
                )
            }
            TimeBasis::Local => ts.with_timezone(&Local).naive_local(),
            TimeBasis::Utc => ts.naive_utc(),
        }
    }
}

#[must_use]
pub fn timestamp_utc(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
