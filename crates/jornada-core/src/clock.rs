//! Wall-clock times of day in "HH:MM" form.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeParseError;

/// A wall-clock time of day with minute resolution.
///
/// Only constructible through parsing or [`ClockTime::new`], so the hour is
/// always in 0..24 and the minute in 0..60. Serialized as the `"HH:MM"`
/// string it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Midnight, the value an absent or empty time field falls back to.
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Create a clock time, validating both components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        if hour > 23 {
            return Err(TimeParseError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeParseError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Parse an optional "HH:MM" field; `None` or an empty string means
    /// midnight. This is the convention attendance forms use for a field
    /// the user has not filled in yet.
    pub fn parse_opt(value: Option<&str>) -> Result<Self, TimeParseError> {
        match value {
            None => Ok(Self::MIDNIGHT),
            Some(s) if s.trim().is_empty() => Ok(Self::MIDNIGHT),
            Some(s) => s.parse(),
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Fractional hours since midnight (07:30 -> 7.5).
    pub fn as_hours(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (h, m) = trimmed
            .split_once(':')
            .ok_or_else(|| TimeParseError::BadFormat(s.to_string()))?;
        let hour: u32 = h
            .parse()
            .map_err(|_| TimeParseError::BadFormat(s.to_string()))?;
        let minute: u32 = m
            .parse()
            .map_err(|_| TimeParseError::BadFormat(s.to_string()))?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
