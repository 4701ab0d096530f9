//! Wait/synchronization engine.
//!
//! Converts an asynchronous UI state change into a single bounded call: a
//! predicate is evaluated immediately, then re-evaluated every poll interval
//! until it yields a value or the timeout elapses. A predicate error of
//! [`Error::NotFound`] means "not satisfied yet" and keeps the loop alive;
//! any other error is terminal and propagates unchanged.
//!
//! All durations are [`Duration`]. The seconds-vs-milliseconds split of
//! older harnesses stops at the settings boundary and never reaches these
//! signatures.

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Error, Result};

/// Timeout and poll cadence for a single wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSpec {
	timeout: Duration,
	poll_interval: Duration,
}

impl WaitSpec {
	pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
	pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

	/// Creates a spec, rejecting a zero timeout and a poll interval that is
	/// zero or longer than the timeout.
	pub fn new(timeout: Duration, poll_interval: Duration) -> Result<Self> {
		if timeout.is_zero() {
			return Err(Error::InvalidSpec("wait timeout must be positive".into()));
		}
		if poll_interval.is_zero() {
			return Err(Error::InvalidSpec("poll interval must be positive".into()));
		}
		if poll_interval > timeout {
			return Err(Error::InvalidSpec(format!(
				"poll interval {}ms exceeds timeout {}ms",
				poll_interval.as_millis(),
				timeout.as_millis()
			)));
		}
		Ok(Self { timeout, poll_interval })
	}

	/// Creates a spec with the default poll cadence, clamped to the timeout.
	pub fn from_timeout(timeout: Duration) -> Result<Self> {
		Self::new(timeout, Self::DEFAULT_POLL_INTERVAL.min(timeout))
	}

	/// Returns a copy with a different timeout, keeping the poll cadence
	/// (re-clamped when the new timeout is shorter).
	pub fn with_timeout(self, timeout: Duration) -> Result<Self> {
		Self::new(timeout, self.poll_interval.min(timeout))
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	pub fn poll_interval(&self) -> Duration {
		self.poll_interval
	}
}

impl Default for WaitSpec {
	fn default() -> Self {
		Self {
			timeout: Self::DEFAULT_TIMEOUT,
			poll_interval: Self::DEFAULT_POLL_INTERVAL,
		}
	}
}

/// Blocks the calling thread until `poll_fn` succeeds or the spec's timeout
/// elapses.
///
/// An immediately-successful predicate returns on the first evaluation
/// without sleeping. On timeout the error carries the elapsed time and the
/// last transient failure observed.
pub fn wait_until_blocking<T, F>(spec: &WaitSpec, condition: &str, mut poll_fn: F) -> Result<T>
where
	F: FnMut() -> Result<T>,
{
	let started = Instant::now();
	let mut last_seen = None;

	loop {
		match poll_fn() {
			Ok(value) => return Ok(value),
			Err(err) if err.is_transient() => {
				last_seen = Some(err.to_string());
			}
			Err(err) => return Err(err),
		}

		if started.elapsed() >= spec.timeout {
			return Err(timeout_error(started.elapsed(), condition, last_seen));
		}

		debug!(
			target = "taf.wait",
			condition,
			elapsed_ms = started.elapsed().as_millis() as u64,
			"condition not met yet"
		);
		std::thread::sleep(spec.poll_interval);
	}
}

/// Suspending twin of [`wait_until_blocking`]: yields the task between
/// evaluations instead of blocking a thread. Attempt/deadline semantics are
/// identical.
pub async fn wait_until<T, F, Fut>(spec: &WaitSpec, condition: &str, mut poll_fn: F) -> Result<T>
where
	F: FnMut() -> Fut,
	Fut: Future<Output = Result<T>>,
{
	let started = Instant::now();
	let mut last_seen = None;

	loop {
		match poll_fn().await {
			Ok(value) => return Ok(value),
			Err(err) if err.is_transient() => {
				last_seen = Some(err.to_string());
			}
			Err(err) => return Err(err),
		}

		if started.elapsed() >= spec.timeout {
			return Err(timeout_error(started.elapsed(), condition, last_seen));
		}

		debug!(
			target = "taf.wait",
			condition,
			elapsed_ms = started.elapsed().as_millis() as u64,
			"condition not met yet"
		);
		tokio::time::sleep(spec.poll_interval).await;
	}
}

fn timeout_error(elapsed: Duration, condition: &str, last_seen: Option<String>) -> Error {
	Error::Timeout {
		elapsed,
		condition: condition.to_string(),
		last_seen,
	}
}
