//! Navigation dispatch for intercepted clicks.

use std::sync::Arc;

use crate::callback::{EventHandler, event_handler};
use crate::event::guard_event;
use crate::route::Location;
use crate::router::{Navigator, noop_complete};

/// How a link navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
	/// Add a history entry.
	Push,
	/// Replace the current history entry.
	Replace {
		/// Re-run navigation even if the target is the current route.
		force_refresh: bool,
	},
}

impl NavigationMode {
	/// Picks push or replace for a link.
	///
	/// Links to the current route always replace, refreshing only when
	/// `refresh` is set. Other links replace only when `replace` is set.
	pub fn decide(refresh: bool, replace: bool, is_same_route: bool) -> Self {
		if refresh && is_same_route {
			Self::Replace {
				force_refresh: true,
			}
		} else if replace || is_same_route {
			Self::Replace {
				force_refresh: false,
			}
		} else {
			Self::Push
		}
	}
}

/// A navigation ready to run: where to go and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPlan {
	/// Destination handed to the router.
	pub location: Location,
	/// Push or replace.
	pub mode: NavigationMode,
}

impl NavigationPlan {
	/// Creates a plan.
	pub fn new(location: Location, mode: NavigationMode) -> Self {
		Self { location, mode }
	}

	/// Starts the navigation without waiting for it.
	///
	/// Completion and abort are ignored; the router reports them to its own
	/// observers.
	pub fn dispatch(&self, navigator: &dyn Navigator) {
		tracing::debug!(
			path = %self.location.full_path(),
			mode = ?self.mode,
			"dispatching link navigation"
		);
		match self.mode {
			NavigationMode::Push => navigator.push(self.location.clone(), noop_complete()),
			NavigationMode::Replace { force_refresh } => navigator.replace(
				self.location.clone(),
				noop_complete(),
				None,
				force_refresh,
			),
		}
	}
}

/// Builds the listener that guards an event and then dispatches `plan`.
pub fn navigation_handler(navigator: Arc<dyn Navigator>, plan: NavigationPlan) -> EventHandler {
	event_handler(move |event| {
		if guard_event(event) {
			plan.dispatch(navigator.as_ref());
		}
	})
}

/// Builds the listener that only guards an event.
pub fn guard_handler() -> EventHandler {
	event_handler(|event| {
		guard_event(event);
	})
}
