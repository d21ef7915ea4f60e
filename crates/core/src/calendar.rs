//! Calendar-grid addressing for the date-selection step of the handoff.
//!
//! The scheduler renders each month as a grid and names every day cell after
//! its month, grid row, weekday column and day of month, e.g.
//! `dayGENERAL_REUSABLE.MONTHS.JUNE2_1_10` for Monday June 10 2024. The row
//! arithmetic has to match the interface exactly or the lookup silently lands
//! on the wrong day.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CELL_LABEL_PREFIX: &str = "GENERAL_REUSABLE.MONTHS.";
const CELL_ELEMENT_PREFIX: &str = "day";

/// First column of the calendar grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
	/// Layout used by the scheduler.
	#[default]
	Sunday,
	Monday,
}

impl WeekStart {
	/// Zero-based column of `weekday` in a grid starting on `self`.
	pub fn column(self, weekday: Weekday) -> u32 {
		match self {
			WeekStart::Sunday => weekday.num_days_from_sunday(),
			WeekStart::Monday => weekday.num_days_from_monday(),
		}
	}
}

/// Zero-based grid row of a day: `ceil((day_of_month - 1 - day_of_week) / 7)`.
///
/// Days in the first partial row give offsets in `-6..=-1`, which round up
/// to row 0 rather than a negative row.
pub fn week_of_month(day_of_month: u32, day_of_week: u32) -> u32 {
	let offset = day_of_month as i64 - 1 - day_of_week as i64;
	(offset + 6).div_euclid(7).max(0) as u32
}

/// Address of one day cell in the scheduler's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
	/// Upper-case English month name.
	pub month: String,
	pub week_of_month: u32,
	pub day_of_week: u32,
	pub day_of_month: u32,
}

impl CalendarCell {
	pub fn for_date(date: NaiveDate, week_start: WeekStart) -> Self {
		let day_of_month = date.day();
		let day_of_week = week_start.column(date.weekday());
		Self {
			month: date.format("%B").to_string().to_uppercase(),
			week_of_month: week_of_month(day_of_month, day_of_week),
			day_of_week,
			day_of_month,
		}
	}

	/// Calendar label, e.g. `GENERAL_REUSABLE.MONTHS.JUNE2_1_10`.
	pub fn label(&self) -> String {
		format!(
			"{CELL_LABEL_PREFIX}{}{}_{}_{}",
			self.month, self.week_of_month, self.day_of_week, self.day_of_month
		)
	}

	/// DOM id of the clickable day element.
	pub fn element_id(&self) -> String {
		format!("{CELL_ELEMENT_PREFIX}{}", self.label())
	}
}

impl fmt::Display for CalendarCell {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label())
	}
}

const DATE_FORMATS: &[&str] = &[
	"%Y-%m-%d",
	"%m/%d/%Y",
	"%B %d, %Y",
	"%B %d %Y",
	"%A, %B %d, %Y",
	"%A %B %d, %Y",
	"%d %B %Y",
];

/// Parses the "next appointment" text shown by the scheduler.
pub fn parse_appointment_date(text: &str) -> Result<NaiveDate> {
	let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
	DATE_FORMATS
		.iter()
		.find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
		.ok_or_else(|| Error::InvalidDate(text.trim().to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[test]
	fn first_of_month_on_week_start_is_row_zero() {
		// July 1 2024 is a Monday.
		let cell = CalendarCell::for_date(date(2024, 7, 1), WeekStart::Monday);
		assert_eq!(cell.day_of_week, 0);
		assert_eq!(cell.week_of_month, 0);
		assert_eq!(week_of_month(1, 0), 0);
	}

	#[test]
	fn leading_partial_row_never_goes_negative() {
		for dow in 0..7 {
			assert_eq!(week_of_month(1, dow), 0, "dow {dow}");
		}
		// Saturday June 1 2024 sits in the last column of row 0.
		assert_eq!(CalendarCell::for_date(date(2024, 6, 1), WeekStart::Sunday).week_of_month, 0);
	}

	#[test]
	fn june_tenth_2024_cell() {
		let cell = CalendarCell::for_date(date(2024, 6, 10), WeekStart::Sunday);
		assert_eq!(
			cell,
			CalendarCell {
				month: "JUNE".into(),
				week_of_month: 2,
				day_of_week: 1,
				day_of_month: 10,
			}
		);
		assert_eq!(cell.label(), "GENERAL_REUSABLE.MONTHS.JUNE2_1_10");
		assert_eq!(cell.element_id(), "dayGENERAL_REUSABLE.MONTHS.JUNE2_1_10");
	}

	#[test]
	fn rows_follow_sunday_grid() {
		// September 2024 starts on a Sunday: 1..=7 row 0, 8..=14 row 1, 29 and 30 row 4.
		assert_eq!(CalendarCell::for_date(date(2024, 9, 7), WeekStart::Sunday).week_of_month, 0);
		assert_eq!(CalendarCell::for_date(date(2024, 9, 8), WeekStart::Sunday).week_of_month, 1);
		assert_eq!(CalendarCell::for_date(date(2024, 9, 30), WeekStart::Sunday).week_of_month, 4);
		// March 2025 starts on a Saturday and spills into a sixth row.
		let cell = CalendarCell::for_date(date(2025, 3, 31), WeekStart::Sunday);
		assert_eq!((cell.week_of_month, cell.day_of_week), (5, 1));
	}

	#[test]
	fn parses_rendered_date_formats() {
		let expected = date(2024, 6, 10);
		for text in [
			"2024-06-10",
			"06/10/2024",
			"June 10, 2024",
			"Jun 10, 2024",
			"  Monday,  June 10, 2024\n",
			"Mon, Jun 10, 2024",
			"10 June 2024",
		] {
			assert_eq!(parse_appointment_date(text).unwrap(), expected, "{text:?}");
		}
	}

	#[test]
	fn rejects_unparseable_date() {
		let err = parse_appointment_date("sometime soon").unwrap_err();
		assert!(matches!(err, Error::InvalidDate(s) if s == "sometime soon"));
	}
}
