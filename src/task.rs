use crate::dates::{self, InvalidDateError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task record as supplied by the owning task store. The engine reads
/// the date range only to derive a duration; the computed schedule is
/// expressed in day-offsets from project epoch 0, not in calendar dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub name: String,
    #[serde(with = "crate::dates::serde_display_date")]
    pub start_date: NaiveDate,
    #[serde(with = "crate::dates::serde_display_date")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub dependencies: Vec<i32>,
}

impl Task {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_date,
            end_date,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<i32>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Build a task from display-format date strings, failing fast on
    /// unparseable input instead of letting bad dates reach the schedule
    /// math.
    pub fn from_date_strings(
        id: i32,
        name: impl Into<String>,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self, InvalidDateError> {
        let start = dates::parse_date(start_date)?;
        let end = dates::parse_date(end_date)?;
        Ok(Self::new(id, name, start, end))
    }

    /// Inclusive duration of the declared date range. A same-day task
    /// still takes one day.
    pub fn duration_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(1)
    }
}
