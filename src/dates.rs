use chrono::NaiveDate;
use std::fmt;

/// Date format used by the surrounding planner UI.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateError {
    input: String,
}

impl InvalidDateError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date '{}' (expected DD/MM/YYYY)", self.input)
    }
}

impl std::error::Error for InvalidDateError {}

pub fn parse_date(input: &str) -> Result<NaiveDate, InvalidDateError> {
    NaiveDate::parse_from_str(input.trim(), DISPLAY_FORMAT)
        .map_err(|_| InvalidDateError::new(input))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Serde adapter so task dates round-trip in the display format.
pub mod serde_display_date {
    use super::DISPLAY_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DISPLAY_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DISPLAY_FORMAT).map_err(de::Error::custom)
    }
}
