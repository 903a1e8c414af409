//! The router a link talks to.
//!
//! Links do not match paths or manage history themselves. They ask a
//! [`Navigator`] to resolve their target and to push or replace locations.

use crate::config::LinkTarget;
use crate::error::NavigationError;
use crate::route::{Location, ResolvedTarget, RouteDescriptor};

/// Called with the new route when a navigation completes.
pub type OnComplete = Box<dyn FnOnce(&RouteDescriptor) + Send + 'static>;

/// Called when a navigation is aborted or fails.
pub type OnAbort = Box<dyn FnOnce(NavigationError) + Send + 'static>;

/// Router operations used by links.
///
/// `push` and `replace` may complete asynchronously. Links never wait for
/// them and pass no-op callbacks.
pub trait Navigator: Send + Sync {
	/// The route the application is currently on.
	fn current_route(&self) -> RouteDescriptor;

	/// Resolves a link target against `current`.
	///
	/// With `append`, relative paths are resolved below the current path
	/// instead of next to it.
	fn resolve(&self, to: &LinkTarget, current: &RouteDescriptor, append: bool) -> ResolvedTarget;

	/// Navigates to `location`, adding a history entry.
	fn push(&self, location: Location, on_complete: OnComplete);

	/// Navigates to `location`, replacing the current history entry.
	///
	/// `force_refresh` re-runs the navigation even when `location` is the
	/// current route.
	fn replace(
		&self,
		location: Location,
		on_complete: OnComplete,
		on_abort: Option<OnAbort>,
		force_refresh: bool,
	);
}

/// A completion callback that ignores the result.
pub fn noop_complete() -> OnComplete {
	Box::new(|_: &RouteDescriptor| {})
}
