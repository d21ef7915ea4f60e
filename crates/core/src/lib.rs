//! nexus-watch: watch a Trusted Traveler Programs enrollment center for an
//! open interview slot and jump to it the moment one appears.
//!
//! The crate is split into the watch core and its adapters:
//!
//! * [`probe`] answers "is anything available right now" for the open panel.
//! * [`watch`] drives repeated probes, owns the retry and error-budget policy,
//!   and performs the one-shot handoff when a slot shows up.
//! * [`scheduler`] declares the three collaborator traits the core consumes.
//! * [`browser`] implements those traits against the operator's browser tab.

pub mod alert;
pub mod browser;
pub mod calendar;
pub mod config;
pub mod error;
pub mod location;
pub mod probe;
pub mod scheduler;
pub mod session;
pub mod watch;

pub use alert::{AlertSchedule, BellNotifier, emit_alert};
pub use browser::BrowserScheduler;
pub use calendar::{CalendarCell, WeekStart, parse_appointment_date, week_of_month};
pub use config::WatchConfig;
pub use error::{Error, Result};
pub use location::Location;
pub use probe::{ProbeResult, Prober};
pub use scheduler::{Notifier, SchedulingActions, SchedulingService};
pub use session::WatchSession;
pub use watch::{Termination, WatchReport, Watcher};

pub use tokio_util::sync::CancellationToken;
