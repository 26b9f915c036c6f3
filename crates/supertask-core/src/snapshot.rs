//! Day Snapshot
//!
//! The JSON document copied to the clipboard on submit.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calories::CalorieTotal;
use crate::todo::TodoItem;

/// Export of the day. Built fresh on every submit, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySnapshot {
    pub date: String,
    #[serde(rename = "totalCalories")]
    pub total_calories: CalorieTotal,
    pub tasks: Vec<String>,
}

impl DaySnapshot {
    pub fn new(day: NaiveDate, total_calories: CalorieTotal, todos: &[TodoItem]) -> Self {
        Self {
            date: format_day(day),
            total_calories,
            tasks: todos
                .iter()
                .filter(|todo| todo.counts_as_done())
                .map(|todo| todo.text.clone())
                .collect(),
        }
    }

    /// Pretty JSON, two-space indent
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `M-D-YY`: month and day unpadded, year as its last two digits.
pub fn format_day(day: NaiveDate) -> String {
    format!("{}-{}-{:02}", day.month(), day.day(), day.year().rem_euclid(100))
}
