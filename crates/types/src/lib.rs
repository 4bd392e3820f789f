//! # Clinica Types
//!
//! Small validated value types shared across the clinica workspace.
//!
//! These types carry their validity in the type system so that service code
//! never has to re-check them:
//! - [`NonEmptyText`] — a trimmed string guaranteed to contain at least one
//!   non-whitespace character
//! - [`ClockTime`] — a wall-clock `"HH:MM"` time with a total order

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors that can occur when parsing a [`ClockTime`].
#[derive(Debug, thiserror::Error)]
pub enum ClockTimeError {
    #[error("invalid wall-clock time: {0:?}")]
    Invalid(String),
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during
/// construction; a result that is empty is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText`, trimming surrounding whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyText> for String {
    fn from(value: NonEmptyText) -> Self {
        value.0
    }
}

impl FromStr for NonEmptyText {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A wall-clock time of day, parsed from `"HH:MM"`.
///
/// Accepts an optional leading zero on the hour (`"8:00"` and `"08:00"` denote
/// the same time) and always renders zero-padded. The derived ordering is by
/// (hour, minute), which coincides with comparing the times as 4-digit `HHMM`
/// integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a `ClockTime` from numeric components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ClockTimeError> {
        if hour > 23 || minute > 59 {
            return Err(ClockTimeError::Invalid(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The time as a 4-digit `HHMM` integer, e.g. `"09:30"` → `930`.
    ///
    /// Both operands of a comparison share digit width, so this ordering
    /// matches wall-clock order.
    pub fn ordinal(&self) -> u16 {
        u16::from(self.hour) * 100 + u16::from(self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClockTimeError::Invalid(s.to_owned());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Ana  ").unwrap();
        assert_eq!(text.as_str(), "Ana");
    }

    #[test]
    fn test_non_empty_text_rejects_whitespace() {
        assert!(matches!(NonEmptyText::new("   "), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
    }

    #[test]
    fn test_clock_time_parses_with_and_without_padding() {
        let padded: ClockTime = "09:30".parse().unwrap();
        let bare: ClockTime = "9:30".parse().unwrap();
        assert_eq!(padded, bare);
        assert_eq!(padded.to_string(), "09:30");
    }

    #[test]
    fn test_clock_time_rejects_out_of_range() {
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("nope".parse::<ClockTime>().is_err());
        assert!("12".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_clock_time_ordering_matches_ordinal() {
        let early: ClockTime = "08:00".parse().unwrap();
        let late: ClockTime = "17:30".parse().unwrap();
        assert!(early < late);
        assert_eq!(early.ordinal(), 800);
        assert_eq!(late.ordinal(), 1730);
    }

    #[test]
    fn test_clock_time_serde_round_trip() {
        let time: ClockTime = "07:05".parse().unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"07:05\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
    }
}
