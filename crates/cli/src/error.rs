use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Watch(#[from] nexus_watch::Error),

	#[error(transparent)]
	Runtime(#[from] nexus_runtime::Error),

	/// The watch ended without finding an appointment for a reason other
	/// than the operator stopping it.
	#[error("{0}")]
	WatchStopped(String),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}
