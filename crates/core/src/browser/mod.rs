//! Scheduler collaborators backed by the operator's browser tab.

pub mod js;

use async_trait::async_trait;
use nexus_runtime::Page;
use serde_json::Value;
use tracing::debug;

use crate::calendar::CalendarCell;
use crate::error::{Error, Result};
use crate::location::Location;
use crate::scheduler::{Notifier, SchedulingActions, SchedulingService};

pub const DEFAULT_TONE_URL: &str = "https://media.geeksforgeeks.org/wp-content/uploads/20190531135120/beep.mp3";

/// Reads and drives the scheduler page through DevTools evaluation.
pub struct BrowserScheduler {
	page: Page,
	tone_url: String,
}

impl BrowserScheduler {
	pub fn new(page: Page) -> Self {
		Self {
			page,
			tone_url: DEFAULT_TONE_URL.to_string(),
		}
	}

	pub fn with_tone_url(mut self, url: impl Into<String>) -> Self {
		self.tone_url = url.into();
		self
	}

	pub fn page(&self) -> &Page {
		&self.page
	}

	async fn click(&self, id: &str) -> Result<()> {
		debug!(target: "nexus.watch", %id, "click");
		self.page.evaluate_value(&js::click_by_id(id)).await?;
		Ok(())
	}

	async fn read_text(&self, expression: &str) -> Result<Option<String>> {
		match self.page.evaluate_value(expression).await? {
			Value::Null => Ok(None),
			Value::String(s) => Ok(Some(s)),
			other => Err(Error::Interface(format!("expected text, got {other}"))),
		}
	}
}

#[async_trait]
impl SchedulingService for BrowserScheduler {
	async fn is_loading(&self) -> Result<bool> {
		match self.page.evaluate_value(&js::is_loading()).await? {
			Value::Bool(b) => Ok(b),
			other => Err(Error::Interface(format!("loading check returned {other}"))),
		}
	}

	async fn read_availability_summary(&self) -> Result<Option<String>> {
		self.read_text(&js::availability_summary()).await
	}

	async fn read_next_appointment_date(&self) -> Result<Option<String>> {
		self.read_text(&js::next_appointment_date()).await
	}
}

#[async_trait]
impl SchedulingActions for BrowserScheduler {
	async fn open_location_panel(&self, location: Location) -> Result<()> {
		self.click(&js::panel_trigger_id(location)).await
	}

	async fn close_location_panel(&self, location: Location) -> Result<()> {
		self.click(&js::popover_close_id(location)).await
	}

	async fn choose_location(&self, location: Location) -> Result<()> {
		self.page.evaluate_value(&js::choose_location(location)).await?;
		Ok(())
	}

	async fn select_calendar_cell(&self, cell: &CalendarCell) -> Result<()> {
		self.click(&cell.element_id()).await
	}

	async fn confirm_selected_date(&self) -> Result<()> {
		self.click(js::confirm_date_id()).await
	}
}

#[async_trait]
impl Notifier for BrowserScheduler {
	async fn pulse(&self) -> Result<()> {
		self.page.evaluate_with_gesture(&js::play_tone(&self.tone_url)).await?;
		Ok(())
	}
}
