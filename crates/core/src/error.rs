use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// Backend unreachable or requested capabilities rejected at session
	/// creation. Fatal to the current test; never retried at the lifecycle
	/// layer itself.
	#[error("connection to automation backend failed: {0}")]
	Connection(String),

	/// A session operation ran before `acquire()` or after `reset()`.
	#[error("session not initialized: call acquire() first")]
	NotInitialized,

	/// A session operation ran against a released session.
	#[error("session already closed")]
	SessionClosed,

	/// Element or condition not observable yet. Transient: the wait engine
	/// keeps polling through this and re-wraps it into [`Error::Timeout`]
	/// once the deadline passes. It must never be the final error of a wait.
	#[error("not observable yet: {0}")]
	NotFound(String),

	/// A wait condition never became true within its deadline.
	#[error("timeout after {}ms waiting for: {condition}", elapsed.as_millis())]
	Timeout {
		elapsed: Duration,
		condition: String,
		/// Last transient failure seen before the deadline, when any.
		last_seen: Option<String>,
	},

	/// A wait or retry specification violated its invariants.
	#[error("invalid specification: {0}")]
	InvalidSpec(String),

	#[error("screenshot failed at {}", path.display())]
	Screenshot {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Backend(#[from] anyhow::Error),
}

impl Error {
	/// True for conditions a wait should keep polling through.
	pub fn is_transient(&self) -> bool {
		matches!(self, Error::NotFound(_))
	}
}
