use std::sync::Arc;

use colored::Colorize;
use nexus_runtime::Page;
use nexus_watch::{BellNotifier, BrowserScheduler, CancellationToken, Location, Notifier, Termination, Watcher};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::cli::AlertMode;
use crate::config::CliConfig;
use crate::error::{CliError, Result};

/// Conventional status for termination by SIGINT.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

pub async fn execute(location: Location, config: CliConfig) -> Result<()> {
	let endpoint = config.endpoint();
	let page = Page::attach(&endpoint, &config.target_url_pattern).await?;
	info!(target: "nexus", %endpoint, url = page.url(), "attached to scheduler tab");

	let scheduler = Arc::new(BrowserScheduler::new(page).with_tone_url(config.alert_sound_url.clone()));
	let notifier: Arc<dyn Notifier> = match config.alert {
		AlertMode::Browser => scheduler.clone(),
		AlertMode::Bell => Arc::new(BellNotifier),
	};

	let cancel = CancellationToken::new();
	let interrupts = forward_ctrl_c();
	let on_interrupt = cancel.clone();
	tokio::spawn(async move {
		if escalate_interrupts(interrupts, on_interrupt).await {
			eprintln!("Interrupted.");
			std::process::exit(INTERRUPTED_EXIT_CODE);
		}
	});

	println!("Watching {location}");
	let watcher = Watcher::new(scheduler.clone(), scheduler.clone(), notifier, config.watch);
	let report = watcher.watch(location, &cancel).await;

	let message = report.termination.to_string();
	match &report.termination {
		Termination::Found { .. } => println!("{}", message.green().bold()),
		Termination::HandoffFailed { .. } => println!("{}", message.yellow().bold()),
		Termination::Cancelled => println!("{message}"),
		Termination::Closed | Termination::ErrorBudgetExhausted { .. } => {}
	}

	if let Some(alert) = report.alert {
		if let Err(err) = alert.await {
			warn!(target: "nexus", error = %err, "alert task ended abnormally");
		}
	}

	if let Err(err) = scheduler.page().close().await {
		warn!(target: "nexus", error = %err, "closing devtools connection failed");
	}

	match report.termination {
		Termination::Closed | Termination::ErrorBudgetExhausted { .. } => Err(CliError::WatchStopped(message)),
		_ => Ok(()),
	}
}

fn forward_ctrl_c() -> mpsc::UnboundedReceiver<()> {
	let (tx, rx) = mpsc::unbounded_channel();
	tokio::spawn(async move {
		while tokio::signal::ctrl_c().await.is_ok() {
			if tx.send(()).is_err() {
				break;
			}
		}
	});
	rx
}

/// First interrupt cancels the watch at the next cycle boundary. Returns
/// `true` on the second one, when the caller should exit without waiting.
async fn escalate_interrupts(mut interrupts: mpsc::UnboundedReceiver<()>, cancel: CancellationToken) -> bool {
	while interrupts.recv().await.is_some() {
		if cancel.is_cancelled() {
			return true;
		}
		info!(target: "nexus", "interrupt received");
		eprintln!("Stopping after the current probe. Press Ctrl-C again to quit now.");
		cancel.cancel();
	}
	false
}
