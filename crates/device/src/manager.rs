//! Session lifecycle for the device variant.

use std::sync::Arc;

use tracing::{info, warn};

use taf_core::{Error, Result};

use crate::backend::{DeviceBackend, DeviceSession};
use crate::settings::DeviceSettings;

enum State<S> {
	Uninitialized,
	Active(Arc<S>),
	Closed,
}

/// Owns at most one live device session and its acquire/release contract.
///
/// One manager per test context: construct it in setup, pass it down
/// explicitly, drop it in teardown. Sharing a manager across unrelated
/// tests couples them through lifecycle state.
pub struct DriverManager<B: DeviceBackend> {
	backend: B,
	settings: DeviceSettings,
	state: State<B::Session>,
}

impl<B: DeviceBackend> DriverManager<B> {
	pub fn new(backend: B, settings: DeviceSettings) -> Self {
		Self {
			backend,
			settings,
			state: State::Uninitialized,
		}
	}

	/// Returns the active session, connecting a fresh one when none exists.
	///
	/// Idempotent: a second call without an intervening [`release`] returns
	/// the same handle and opens no second backend connection. Connection
	/// failures propagate unmodified; compose with
	/// [`taf_core::RetryPolicy`] when retries are wanted.
	///
	/// [`release`]: DriverManager::release
	pub fn acquire(&mut self) -> Result<Arc<B::Session>> {
		if let State::Active(session) = &self.state {
			warn!(target = "taf.session", "session already active, reusing");
			return Ok(Arc::clone(session));
		}

		info!(target = "taf.session", url = %self.settings.server_url(), "connecting device session");
		let session = Arc::new(self.backend.connect(&self.settings.capabilities())?);
		info!(target = "taf.session", "device session connected");
		self.state = State::Active(Arc::clone(&session));
		Ok(session)
	}

	/// Returns the active session without side effects.
	pub fn current(&self) -> Result<Arc<B::Session>> {
		match &self.state {
			State::Active(session) => Ok(Arc::clone(session)),
			_ => Err(Error::NotInitialized),
		}
	}

	/// Closes the active session, if any.
	///
	/// Never fails the caller: close errors are logged and swallowed so
	/// teardown proceeds unconditionally. Safe to call repeatedly; a later
	/// [`acquire`] starts fresh.
	///
	/// [`acquire`]: DriverManager::acquire
	pub fn release(&mut self) {
		match std::mem::replace(&mut self.state, State::Closed) {
			State::Active(session) => {
				info!(target = "taf.session", "closing device session");
				if let Err(err) = session.close() {
					warn!(target = "taf.session", error = %err, "error closing session");
				}
			}
			State::Uninitialized => {
				self.state = State::Uninitialized;
			}
			State::Closed => {}
		}
	}

	/// Forgets all lifecycle state without touching the backend.
	///
	/// Used between isolated runs so no state bleeds across them. Does not
	/// close an active session; call [`release`] first when one exists.
	/// Afterwards [`current`] fails with [`Error::NotInitialized`].
	///
	/// [`release`]: DriverManager::release
	/// [`current`]: DriverManager::current
	pub fn reset(&mut self) {
		info!(target = "taf.session", "resetting session lifecycle state");
		self.state = State::Uninitialized;
	}

	pub fn settings(&self) -> &DeviceSettings {
		&self.settings
	}
}
