use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Runtime(#[from] nexus_runtime::Error),

	#[error("Unknown location '{0}' (run `nexus-watch locations` for the catalog)")]
	UnknownLocation(String),

	#[error("Unrecognized appointment date '{0}'")]
	InvalidDate(String),

	#[error("Loading indicator still showing after {0:?}")]
	LoadingTimeout(Duration),

	#[error("Unexpected page state: {0}")]
	Interface(String),
}
