//! What the watch loop writes to the log, captured through a fmt subscriber.

mod support;

use std::io;
use std::sync::{Arc, Mutex};

use nexus_watch::{CancellationToken, Location, Termination};
use support::{FakeScheduler, RecordingNotifier, Step, watcher};
use tracing::Level;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl Capture {
	fn text(&self) -> String {
		String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
	}
}

fn watch_and_capture(steps: Vec<Step>, level: Level) -> (Termination, String) {
	let capture = Capture::default();
	let writer = capture.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(level)
		.with_ansi(false)
		.with_target(true)
		.without_time()
		.with_writer(move || writer.clone())
		.finish();

	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_time()
		.start_paused(true)
		.build()
		.unwrap();

	let termination = tracing::subscriber::with_default(subscriber, || {
		runtime.block_on(async {
			let page = Arc::new(FakeScheduler::new(steps));
			let notifier = Arc::new(RecordingNotifier::default());
			watcher(&page, &notifier)
				.watch(Location::Sweetgrass, &CancellationToken::new())
				.await
				.termination
		})
	});
	(termination, capture.text())
}

#[test]
fn events_carry_the_watch_target() {
	let (termination, log) = watch_and_capture(vec![Step::ReadFails, Step::Closed], Level::WARN);

	assert_eq!(termination, Termination::Closed);
	assert!(log.contains("nexus.watch: probe failed, retrying"), "log was:\n{log}");
	assert!(!log.contains("target="), "log was:\n{log}");
}

#[test]
fn stop_reason_is_not_logged_at_warn() {
	let (termination, log) = watch_and_capture(vec![Step::Closed], Level::WARN);

	assert_eq!(termination, Termination::Closed);
	assert!(!log.contains("not accepting appointments"), "log was:\n{log}");
}

#[test]
fn exhausted_budget_is_reported_once_at_info() {
	let steps = vec![Step::ReadFails, Step::ReadFails, Step::ReadFails];
	let (termination, log) = watch_and_capture(steps, Level::INFO);

	assert!(matches!(termination, Termination::ErrorBudgetExhausted { attempts: 3, .. }));
	let ended: Vec<_> = log.lines().filter(|line| line.contains("watch ended")).collect();
	assert_eq!(ended.len(), 1, "log was:\n{log}");
	assert!(ended[0].trim_start().starts_with("INFO"), "log was:\n{log}");
	assert!(ended[0].contains("Errored 3 times in a row"));
}
