//! Web (browser) variant of the TAF automation core.
//!
//! Async throughout: waits and session operations are suspension points on
//! a cooperative scheduler, while the browser's own event loop runs as a
//! separate external process. The automation protocol sits behind
//! [`backend::BrowserBackend`]; this crate owns the session lifecycle, the
//! wait presets, the page interaction layer, and the failure-handling
//! harness around a test body.

pub mod backend;
pub mod harness;
pub mod manager;
pub mod page;
pub mod settings;
pub mod wait;

pub use backend::{BrowserBackend, BrowserPage, LaunchOptions, Selector, Viewport};
pub use manager::BrowserManager;
pub use page::PageSession;
pub use settings::{BrowserKind, WebSettings};
pub use wait::WaitHandler;
