use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, SPAN_SEPARATOR, prelude::*};

/// The days covered by one grid cell, both ends inclusive.
/// The start date is never after the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct WeekSpan {
    start: CalendarDate,
    end:   CalendarDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Start date is after end date.
    #[error("Invalid week span: start ({start}) is after end ({end})")]
    Inverted { start: CalendarDate, end: CalendarDate },

    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("Invalid week span format: {0}")]
    InvalidFormat(String),
}

impl WeekSpan {
    /// # Errors
    /// Returns `SpanError::Inverted` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, SpanError> {
        if start > end {
            return Err(SpanError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Callers pass ordered dates; only saturation at `CalendarDate::MAX`
    /// can invert them, which collapses the span to its start.
    pub(crate) fn from_ordered(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Number of days covered, counting both ends. Seven for an ordinary week.
    pub const fn len_days(&self) -> i32 {
        self.end.days_since(self.start) + 1
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the span in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        let start = self.start;
        (0..self.len_days()).map(move |offset| start.add_days(offset))
    }
}

impl FromStr for WeekSpan {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((start, end)) = trimmed.split_once(SPAN_SEPARATOR) else {
            return Err(SpanError::InvalidFormat(format!(
                "No span separator found (expected '{SPAN_SEPARATOR}'): {s}"
            )));
        };
        if end.contains(SPAN_SEPARATOR) {
            return Err(SpanError::InvalidFormat(format!(
                "Too many '{SPAN_SEPARATOR}' separators: {s}"
            )));
        }

        let start = start.trim().parse::<CalendarDate>()?;
        let end = end.trim().parse::<CalendarDate>()?;
        Self::new(start, end)
    }
}

impl Serialize for WeekSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WeekSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
