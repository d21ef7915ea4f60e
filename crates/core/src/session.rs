//! Run state of one watch.

use crate::location::Location;

/// Mutable state owned by the watch loop for one location.
///
/// `active` flips to false on cancellation or any terminal classification;
/// `terminated` flips once the loop has actually exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSession {
	location: Location,
	active: bool,
	consecutive_error_count: u32,
	terminated: bool,
}

impl WatchSession {
	pub fn new(location: Location) -> Self {
		Self {
			location,
			active: true,
			consecutive_error_count: 0,
			terminated: false,
		}
	}

	pub fn location(&self) -> Location {
		self.location
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn is_terminated(&self) -> bool {
		self.terminated
	}

	pub fn consecutive_error_count(&self) -> u32 {
		self.consecutive_error_count
	}

	/// Any successful probe clears the error streak.
	pub fn record_success(&mut self) {
		self.consecutive_error_count = 0;
	}

	/// Returns the streak length including this failure.
	pub fn record_transient_error(&mut self) -> u32 {
		self.consecutive_error_count += 1;
		self.consecutive_error_count
	}

	pub fn deactivate(&mut self) {
		self.active = false;
	}

	/// Claims the one handoff this session may perform.
	///
	/// Clears `active` before returning `true`; every later call returns `false`.
	pub fn begin_handoff(&mut self) -> bool {
		if !self.active {
			return false;
		}
		self.active = false;
		true
	}

	pub(crate) fn mark_terminated(&mut self) {
		self.active = false;
		self.terminated = true;
	}
}
