//! Automation-backend seam for the device variant.
//!
//! The wire protocol is out of scope here: a backend only has to open a
//! session from capabilities, answer element queries and interactions, and
//! close. Element addresses are opaque data all the way down.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use taf_core::Result;

/// Capability set requested when opening a device session.
///
/// Serializes in the camelCase shape device-automation servers expect on
/// the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
	pub platform_name: String,
	pub automation_name: String,
	pub platform_version: String,
	pub device_name: String,
	pub app_package: String,
	pub app_activity: String,
	pub auto_grant_permissions: bool,
	pub no_reset: bool,
	pub full_reset: bool,
	/// Backend idle timeout between commands; wire format is milliseconds.
	#[serde(serialize_with = "duration_millis")]
	pub new_command_timeout: Duration,
}

fn duration_millis<S: Serializer>(value: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
	serializer.serialize_u64(value.as_millis() as u64)
}

/// Element address within the backend's query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
	Id(String),
	AccessibilityId(String),
	XPath(String),
	ClassName(String),
}

impl fmt::Display for Locator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Locator::Id(value) => write!(f, "id={value}"),
			Locator::AccessibilityId(value) => write!(f, "accessibility-id={value}"),
			Locator::XPath(value) => write!(f, "xpath={value}"),
			Locator::ClassName(value) => write!(f, "class={value}"),
		}
	}
}

/// Opaque backend element reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element(pub String);

/// One live connection to a device-automation backend.
///
/// Contract: queries for elements that are not observable yet return
/// [`taf_core::Error::NotFound`] (transient); any operation after `close`
/// returns [`taf_core::Error::SessionClosed`].
pub trait DeviceSession: Send + Sync + 'static {
	fn find(&self, locator: &Locator) -> Result<Element>;
	fn is_displayed(&self, element: &Element) -> Result<bool>;
	fn is_enabled(&self, element: &Element) -> Result<bool>;
	fn text(&self, element: &Element) -> Result<String>;
	fn tap(&self, element: &Element) -> Result<()>;
	fn type_text(&self, element: &Element, text: &str) -> Result<()>;
	fn screenshot_png(&self) -> Result<Vec<u8>>;
	fn close(&self) -> Result<()>;
}

/// Opens device sessions from capabilities.
pub trait DeviceBackend {
	type Session: DeviceSession;

	/// Connects to the automation server. Unreachable backends and rejected
	/// capabilities surface as [`taf_core::Error::Connection`] and must
	/// propagate to the caller unmodified.
	fn connect(&self, capabilities: &Capabilities) -> Result<Self::Session>;
}
