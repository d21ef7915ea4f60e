use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use nexus_watch::{Location, WeekStart};

#[derive(Parser, Debug)]
#[command(name = "nexus-watch")]
#[command(about = "Watch a Trusted Traveler Programs enrollment center for an open interview slot")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Config file (defaults to <config dir>/nexus-watch/config.json)
	#[arg(long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	#[command(flatten)]
	pub devtools: DevtoolsArgs,

	#[command(subcommand)]
	pub command: Commands,
}

/// Where the operator's browser exposes remote debugging.
#[derive(Args, Debug, Clone, Default)]
pub struct DevtoolsArgs {
	/// DevTools host of the browser running the scheduler
	#[arg(long, global = true, value_name = "HOST")]
	pub cdp_host: Option<String>,

	/// DevTools port (start the browser with --remote-debugging-port)
	#[arg(long, global = true, value_name = "PORT")]
	pub cdp_port: Option<u16>,

	/// Substring identifying the scheduler tab's URL
	#[arg(long, global = true, value_name = "PATTERN")]
	pub target_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Poll a location until a slot opens, then jump to it and sound the alert
	Watch(WatchArgs),

	/// List the enrollment center catalog
	#[command(alias = "ls")]
	Locations,

	/// Show the calendar cell id the handoff would click for a date
	Cell {
		/// Appointment date (2024-06-10, 06/10/2024, June 10, 2024, ...)
		date: String,

		/// First column of the calendar grid
		#[arg(long, value_enum)]
		week_start: Option<WeekStartArg>,
	},

	/// List browser tabs visible over DevTools
	Targets,
}

#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
	/// Center id or name (US30, sweetgrass, port-huron, ...)
	pub location: Location,

	/// How to alert when a slot is found
	#[arg(long, value_enum)]
	pub alert: Option<AlertMode>,

	/// Audio played in the tab for each alert pulse
	#[arg(long, value_name = "URL")]
	pub tone_url: Option<String>,

	/// Consecutive failed probes tolerated before giving up
	#[arg(long, value_name = "N")]
	pub max_errors: Option<u32>,

	/// Pause between probes while fully booked (ms)
	#[arg(long, value_name = "MS")]
	pub interval_ms: Option<u64>,

	/// Give up on one probe if the page keeps loading this long (ms)
	#[arg(long, value_name = "MS")]
	pub loading_timeout_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertMode {
	/// Play the tone in the scheduler tab
	#[default]
	Browser,
	/// Ring the terminal bell
	Bell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WeekStartArg {
	Sunday,
	Monday,
}

impl From<WeekStartArg> for WeekStart {
	fn from(arg: WeekStartArg) -> Self {
		match arg {
			WeekStartArg::Sunday => WeekStart::Sunday,
			WeekStartArg::Monday => WeekStart::Monday,
		}
	}
}
