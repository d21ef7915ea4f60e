mod cell;
mod locations;
mod targets;
mod watch;

use crate::cli::{Cli, Commands};
use crate::config::CliConfig;
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<()> {
	match cli.command {
		Commands::Locations => locations::execute(),
		Commands::Cell { date, week_start } => {
			let config = CliConfig::load(cli.config.as_deref())?;
			cell::execute(&date, week_start.map(Into::into).unwrap_or(config.watch.week_start))
		}
		Commands::Targets => {
			let mut config = CliConfig::load(cli.config.as_deref())?;
			config.apply_devtools(&cli.devtools);
			targets::execute(&config).await
		}
		Commands::Watch(args) => {
			let mut config = CliConfig::load(cli.config.as_deref())?;
			config.apply_devtools(&cli.devtools);
			config.apply_watch(&args);
			watch::execute(args.location, config).await
		}
	}
}
