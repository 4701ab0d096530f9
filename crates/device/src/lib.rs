//! Device (mobile) variant of the TAF automation core.
//!
//! Blocking throughout: one test thread, one device session, operations
//! against a single session strictly ordered. The automation protocol
//! itself sits behind [`backend::DeviceBackend`]; this crate owns the
//! session lifecycle, the wait presets, the page interaction layer, and
//! the failure-handling harness around a test body.

pub mod backend;
pub mod harness;
pub mod manager;
pub mod page;
pub mod settings;
pub mod wait;

pub use backend::{Capabilities, DeviceBackend, DeviceSession, Element, Locator};
pub use manager::DriverManager;
pub use page::PageSession;
pub use settings::DeviceSettings;
pub use wait::WaitHandler;
