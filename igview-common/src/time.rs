//! Timestamp utilities
//!
//! Export files store instants as Unix seconds (message threads use
//! milliseconds). Display follows the local calendar and timezone, in the
//! `M/D/YYYY, h:mm:ss AM/PM` shape the viewer has always shown.

use chrono::{Local, TimeZone};
use serde::Serialize;
use std::fmt;

/// Display pattern for every rendered timestamp
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// An instant taken from an export record, in Unix seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Message threads record milliseconds; sub-second precision is dropped
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.div_euclid(1000))
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Format in an explicit timezone.
    ///
    /// Instants chrono cannot represent fall back to the raw seconds value.
    pub fn format_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match tz.timestamp_opt(self.0, 0).single() {
            Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
            None => self.0.to_string(),
        }
    }

    /// Format in the local timezone of the host
    pub fn format_local(&self) -> String {
        self.format_in(&Local)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_local())
    }
}

/// Minimum and maximum instant observed in a record sequence
///
/// Invariant: `start <= end`. Both endpoints display in the same timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timespan {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Timespan {
    /// Fold a sequence of instants into a timespan.
    ///
    /// Returns `None` for an empty sequence; callers turn that into an
    /// explicit `EmptyDataset` error.
    pub fn from_timestamps<I>(timestamps: I) -> Option<Self>
    where
        I: IntoIterator<Item = Timestamp>,
    {
        timestamps.into_iter().fold(None, |span, ts| match span {
            None => Some(Timespan { start: ts, end: ts }),
            Some(Timespan { start, end }) => Some(Timespan {
                start: start.min(ts),
                end: end.max(ts),
            }),
        })
    }
}
