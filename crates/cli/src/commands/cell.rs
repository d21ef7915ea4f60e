use nexus_watch::{CalendarCell, WeekStart, parse_appointment_date};
use tracing::info;

use crate::error::Result;

pub fn execute(date: &str, week_start: WeekStart) -> Result<()> {
	let date = parse_appointment_date(date)?;
	let cell = CalendarCell::for_date(date, week_start);
	info!(target: "nexus", %date, ?week_start, "calendar cell");

	println!("{}", cell.element_id());
	Ok(())
}
