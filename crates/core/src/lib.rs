//! Platform-neutral core for the TAF test-automation workspace.
//!
//! Both variant crates (`taf-device`, blocking; `taf-web`, async) build on
//! the pieces here: the error taxonomy, the wait/synchronization engine,
//! the retry policy, process settings, the screenshot sink, and the logging
//! bootstrap. Nothing in this crate knows about a concrete automation
//! backend.

pub mod artifacts;
pub mod env;
pub mod error;
pub mod logging;
pub mod retry;
pub mod settings;
pub mod wait;

pub use error::{Error, Result};
pub use retry::RetryPolicy;
pub use settings::Settings;
pub use wait::WaitSpec;
