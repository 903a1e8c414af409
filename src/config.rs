//! Link configuration.
//!
//! [`LinkProps`] is the per-link configuration surface; [`LinkDefaults`]
//! holds the process-wide class names, injected once when links are set up.
//!
//! Both deserialize with serde. Props use camelCase keys so they can come
//! straight from template attributes or JSON:
//!
//! ```
//! use reinhardt_router_link::config::{EventNames, LinkProps};
//!
//! let props: LinkProps = serde_json::from_str(
//!     r#"{"to": "/users", "tag": "li", "exact": true, "event": ["click", "touchend"]}"#,
//! ).unwrap();
//! assert_eq!(props.tag, "li");
//! assert_eq!(props.event, EventNames::Multiple(vec!["click".into(), "touchend".into()]));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;
use crate::route::Location;

/// Tag that makes a link render as its own anchor.
pub const ANCHOR_TAG: &str = "a";

/// Class applied to active links unless overridden.
pub const DEFAULT_ACTIVE_CLASS: &str = "router-link-active";

/// Class applied to exact-active links unless overridden.
pub const DEFAULT_EXACT_ACTIVE_CLASS: &str = "router-link-exact-active";

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkTarget {
	/// A path string, possibly relative, with optional query and hash.
	Path(String),
	/// A structured location.
	Location(Location),
}

impl fmt::Display for LinkTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Path(path) => f.write_str(path),
			Self::Location(location) => match (&location.name, location.path.is_empty()) {
				(Some(name), true) => write!(f, "{{ name: {} }}", name),
				_ => f.write_str(&location.full_path()),
			},
		}
	}
}

impl From<&str> for LinkTarget {
	fn from(path: &str) -> Self {
		Self::Path(path.to_string())
	}
}

impl From<String> for LinkTarget {
	fn from(path: String) -> Self {
		Self::Path(path)
	}
}

impl From<Location> for LinkTarget {
	fn from(location: Location) -> Self {
		Self::Location(location)
	}
}

/// Event name(s) that trigger navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventNames {
	/// One event.
	Single(String),
	/// Several events.
	Multiple(Vec<String>),
}

impl EventNames {
	/// Iterates over the configured names.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		let names: &[String] = match self {
			Self::Single(name) => std::slice::from_ref(name),
			Self::Multiple(names) => names,
		};
		names.iter().map(String::as_str)
	}

	/// Whether `event` is one of the configured names.
	pub fn contains(&self, event: &str) -> bool {
		self.iter().any(|name| name == event)
	}
}

impl Default for EventNames {
	fn default() -> Self {
		Self::Single("click".to_string())
	}
}

impl From<&str> for EventNames {
	fn from(name: &str) -> Self {
		Self::Single(name.to_string())
	}
}

impl From<Vec<&str>> for EventNames {
	fn from(names: Vec<&str>) -> Self {
		Self::Multiple(names.into_iter().map(str::to_string).collect())
	}
}

fn default_tag() -> String {
	ANCHOR_TAG.to_string()
}

fn default_aria_current_value() -> String {
	"page".to_string()
}

/// Configuration of one router link.
///
/// # Example
///
/// ```
/// use reinhardt_router_link::config::LinkProps;
///
/// let props = LinkProps::new("/users/42/")
///     .tag("li")
///     .exact(true)
///     .active_class("is-active");
/// assert!(props.exact);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkProps {
	/// Destination.
	pub to: LinkTarget,
	/// Element to render; `"a"` renders the link as its own anchor.
	#[serde(default = "default_tag")]
	pub tag: String,
	/// Only exact matches count as active.
	#[serde(default)]
	pub exact: bool,
	/// Force a refresh when navigating to the current route.
	#[serde(default)]
	pub refresh: bool,
	/// Resolve relative paths below the current path.
	#[serde(default)]
	pub append: bool,
	/// Replace the history entry instead of pushing.
	#[serde(default)]
	pub replace: bool,
	/// Overrides [`LinkDefaults::active_class`].
	#[serde(default)]
	pub active_class: Option<String>,
	/// Overrides [`LinkDefaults::exact_active_class`].
	#[serde(default)]
	pub exact_active_class: Option<String>,
	/// `aria-current` value on exact-active links.
	#[serde(default = "default_aria_current_value")]
	pub aria_current_value: String,
	/// Events that trigger navigation.
	#[serde(default)]
	pub event: EventNames,
}

impl LinkProps {
	/// Creates props for a destination with every other option defaulted.
	pub fn new(to: impl Into<LinkTarget>) -> Self {
		Self {
			to: to.into(),
			tag: default_tag(),
			exact: false,
			refresh: false,
			append: false,
			replace: false,
			active_class: None,
			exact_active_class: None,
			aria_current_value: default_aria_current_value(),
			event: EventNames::default(),
		}
	}

	/// Sets the destination.
	pub fn to(mut self, to: impl Into<LinkTarget>) -> Self {
		self.to = to.into();
		self
	}

	/// Sets the rendered tag.
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = tag.into();
		self
	}

	/// Sets exact matching.
	pub fn exact(mut self, exact: bool) -> Self {
		self.exact = exact;
		self
	}

	/// Sets forced refresh on same-route navigation.
	pub fn refresh(mut self, refresh: bool) -> Self {
		self.refresh = refresh;
		self
	}

	/// Sets relative-path appending.
	pub fn append(mut self, append: bool) -> Self {
		self.append = append;
		self
	}

	/// Sets history replacement.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Overrides the active class.
	pub fn active_class(mut self, class: impl Into<String>) -> Self {
		self.active_class = Some(class.into());
		self
	}

	/// Overrides the exact-active class.
	pub fn exact_active_class(mut self, class: impl Into<String>) -> Self {
		self.exact_active_class = Some(class.into());
		self
	}

	/// Sets the `aria-current` value.
	pub fn aria_current_value(mut self, value: impl Into<String>) -> Self {
		self.aria_current_value = value.into();
		self
	}

	/// Sets the triggering event(s).
	pub fn event(mut self, event: impl Into<EventNames>) -> Self {
		self.event = event.into();
		self
	}
}

fn default_active_class() -> String {
	DEFAULT_ACTIVE_CLASS.to_string()
}

fn default_exact_active_class() -> String {
	DEFAULT_EXACT_ACTIVE_CLASS.to_string()
}

fn default_diagnostics() -> bool {
	cfg!(debug_assertions)
}

/// Process-wide link settings.
///
/// An empty class name is allowed and disables that class.
///
/// # Example
///
/// ```
/// use reinhardt_router_link::config::LinkDefaults;
///
/// let defaults = LinkDefaults::from_toml_str(r#"active_class = "active""#).unwrap();
/// assert_eq!(defaults.active_class, "active");
/// assert_eq!(defaults.exact_active_class, "router-link-exact-active");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDefaults {
	/// Class for active links.
	#[serde(default = "default_active_class")]
	pub active_class: String,
	/// Class for exact-active links.
	#[serde(default = "default_exact_active_class")]
	pub exact_active_class: String,
	/// Record diagnostics about recovered content. Off in release builds
	/// unless set.
	#[serde(default = "default_diagnostics")]
	pub diagnostics: bool,
}

impl Default for LinkDefaults {
	fn default() -> Self {
		Self {
			active_class: default_active_class(),
			exact_active_class: default_exact_active_class(),
			diagnostics: default_diagnostics(),
		}
	}
}

impl LinkDefaults {
	/// Loads defaults from a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Sets the active class.
	pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
		self.active_class = class.into();
		self
	}

	/// Sets the exact-active class.
	pub fn with_exact_active_class(mut self, class: impl Into<String>) -> Self {
		self.exact_active_class = class.into();
		self
	}

	/// Enables or disables diagnostics.
	pub fn with_diagnostics(mut self, enabled: bool) -> Self {
		self.diagnostics = enabled;
		self
	}

	/// Active class for a link, honouring its override.
	pub fn active_class_for<'a>(&'a self, props: &'a LinkProps) -> &'a str {
		props.active_class.as_deref().unwrap_or(&self.active_class)
	}

	/// Exact-active class for a link, honouring its override.
	pub fn exact_active_class_for<'a>(&'a self, props: &'a LinkProps) -> &'a str {
		props
			.exact_active_class
			.as_deref()
			.unwrap_or(&self.exact_active_class)
	}
}
