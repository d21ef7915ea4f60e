//! Collaborator seams of the watch core.
//!
//! The core never touches the page directly. It reads through
//! [`SchedulingService`], mutates through [`SchedulingActions`] and draws the
//! operator's attention through [`Notifier`]. [`crate::BrowserScheduler`]
//! implements all three against a live tab; tests use in-memory fakes.

use async_trait::async_trait;

use crate::calendar::CalendarCell;
use crate::error::Result;
use crate::location::Location;

/// Read-only view of the scheduler page.
#[async_trait]
pub trait SchedulingService: Send + Sync {
	/// Whether the loading mask is currently shown.
	async fn is_loading(&self) -> Result<bool>;

	/// Availability summary of the open location panel, `None` if not rendered.
	async fn read_availability_summary(&self) -> Result<Option<String>>;

	/// Raw "next appointment" date text, `None` if not rendered.
	async fn read_next_appointment_date(&self) -> Result<Option<String>>;
}

/// Mutating operations on the scheduler page.
#[async_trait]
pub trait SchedulingActions: Send + Sync {
	/// Opens the details panel of `location`, which triggers an availability load.
	async fn open_location_panel(&self, location: Location) -> Result<()>;

	async fn close_location_panel(&self, location: Location) -> Result<()>;

	/// Picks `location` for booking, moving the page to its calendar.
	async fn choose_location(&self, location: Location) -> Result<()>;

	async fn select_calendar_cell(&self, cell: &CalendarCell) -> Result<()>;

	async fn confirm_selected_date(&self) -> Result<()>;
}

/// Sink for alert pulses. A failed pulse is logged and otherwise ignored.
#[async_trait]
pub trait Notifier: Send + Sync {
	async fn pulse(&self) -> Result<()>;
}
