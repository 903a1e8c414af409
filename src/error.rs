//! Error types for router links.
//!
//! Nothing here is fatal to rendering. Navigation errors only ever reach
//! the router's own callbacks, configuration errors come from loading
//! settings, and diagnostics describe content the link recovered from.

/// Outcome of a navigation that did not complete.
///
/// Routers hand these to the abort callback passed to
/// [`Navigator::replace`](crate::router::Navigator::replace). Links always
/// pass a no-op there, so callers that care must observe the router directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
	/// Navigating to the route the router is already on.
	#[error("Avoided redundant navigation to current location: {0}")]
	Duplicated(String),
}

/// Error type for loading link configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The settings document could not be parsed.
	#[error("invalid link settings: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Non-fatal problems a link recovers from while rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkDiagnostic {
	/// A scoped-content callback returned something other than one node.
	#[error(
		"RouterLink with to=\"{to}\" is trying to use a scoped slot but it didn't provide exactly one child ({count} nodes). Wrapping the content with a span element."
	)]
	ScopedSlotCardinality {
		/// Display form of the link target.
		to: String,
		/// Number of nodes the callback returned.
		count: usize,
	},
}
