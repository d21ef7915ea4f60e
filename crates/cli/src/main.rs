use clap::Parser;
use nexus_watch_cli::{cli::Cli, commands, error::CliError, logging};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	match commands::dispatch(cli).await {
		Ok(()) => {}
		Err(CliError::WatchStopped(reason)) => {
			eprintln!("{reason}");
			std::process::exit(2);
		}
		Err(err) => {
			error!(target: "nexus", error = %err, "command failed");
			std::process::exit(1);
		}
	}
}
