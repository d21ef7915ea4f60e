use colored::Colorize;
use nexus_watch::Location;

use crate::error::Result;

pub fn execute() -> Result<()> {
	for location in Location::ALL {
		println!(
			"{}  {:<20} {:<32} {}",
			location.center_id().bold(),
			location.slug(),
			location.display_name(),
			location.region().dimmed()
		);
	}
	Ok(())
}
