//! An in-memory [`Navigator`].
//!
//! `MemoryRouter` keeps the current route and a log of navigations in
//! memory. It is used for server-side rendering, where there is no browser
//! history, and for testing links.
//!
//! It resolves relative paths, reverses named routes and follows static
//! redirects. It does not match paths against route patterns.
//!
//! # Example
//!
//! ```
//! use reinhardt_router_link::testing::MemoryRouter;
//!
//! let router = MemoryRouter::new("/users/42")
//!     .with_named_route("user", "/users/{id}")
//!     .with_redirect("/people", "/users");
//! assert_eq!(router.current_path(), "/users/42");
//! ```

use parking_lot::Mutex;
use std::collections::HashMap;

use crate::config::LinkTarget;
use crate::error::NavigationError;
use crate::route::{
	Location, ResolvedTarget, RouteDescriptor, RouteRecord, is_same_route, resolve_relative_path,
};
use crate::router::{Navigator, OnAbort, OnComplete};

/// Whether a navigation pushed or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
	/// A `push` call.
	Push,
	/// A `replace` call.
	Replace,
}

/// One call to `push` or `replace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRecord {
	/// Push or replace.
	pub kind: NavigationKind,
	/// The requested location.
	pub location: Location,
	/// The `force_refresh` flag of a replace.
	pub force_refresh: bool,
}

/// A router that lives entirely in memory.
#[derive(Debug)]
pub struct MemoryRouter {
	base: String,
	current: Mutex<RouteDescriptor>,
	history: Mutex<Vec<NavigationRecord>>,
	named_routes: HashMap<String, String>,
	redirects: HashMap<String, String>,
}

impl MemoryRouter {
	/// Creates a router whose current route is `initial` (a full path).
	pub fn new(initial: &str) -> Self {
		let mut router = Self {
			base: String::new(),
			current: Mutex::new(RouteDescriptor::default()),
			history: Mutex::new(Vec::new()),
			named_routes: HashMap::new(),
			redirects: HashMap::new(),
		};
		let route = router.route_for(&Location::parse(initial));
		router.current = Mutex::new(route);
		router
	}

	/// Prefixes every generated `href` with `base`.
	pub fn with_base(mut self, base: impl Into<String>) -> Self {
		self.base = base.into().trim_end_matches('/').to_string();
		self
	}

	/// Registers a named route. `{param}` placeholders are filled from
	/// location params.
	pub fn with_named_route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
		self.named_routes.insert(name.into(), pattern.into());
		self
	}

	/// Registers a redirect from one path to another.
	pub fn with_redirect(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
		self.redirects.insert(from.into(), to.into());
		self
	}

	/// Path of the current route.
	pub fn current_path(&self) -> String {
		self.current.lock().path.clone()
	}

	/// Moves to `full_path` without recording a navigation, as a browser
	/// back button would.
	pub fn set_current(&self, full_path: &str) {
		let route = self.route_for(&Location::parse(full_path));
		*self.current.lock() = route;
	}

	/// Every push and replace so far.
	pub fn history(&self) -> Vec<NavigationRecord> {
		self.history.lock().clone()
	}

	/// Forgets recorded navigations.
	pub fn clear_history(&self) {
		self.history.lock().clear();
	}

	fn reverse(&self, location: &Location) -> Option<String> {
		let name = location.name.as_ref()?;
		let mut path = self.named_routes.get(name)?.clone();
		for (key, value) in &location.params {
			path = path.replace(&format!("{{{}}}", key), value);
		}
		Some(path)
	}

	fn normalize(&self, location: &Location, current: &RouteDescriptor, append: bool) -> Location {
		let mut location = location.clone();
		if location.path.is_empty() {
			location.path = self
				.reverse(&location)
				.unwrap_or_else(|| current.path.clone());
		}
		location.path = resolve_relative_path(&location.path, &current.path, append);
		location
	}

	fn route_for(&self, location: &Location) -> RouteDescriptor {
		let record = |path: &str| {
			let record = RouteRecord::new(path);
			match &location.name {
				Some(name) => record.with_name(name.clone()),
				None => record,
			}
		};

		match self.redirects.get(&location.path) {
			Some(target) => {
				let redirected = Location {
					path: target.clone(),
					..location.clone()
				};
				let mut route = RouteDescriptor::from_location(&redirected)
					.with_record(record(target.as_str()))
					.redirected_from(location.clone());
				route.name = None;
				route
			}
			None => RouteDescriptor::from_location(location).with_record(record(location.path.as_str())),
		}
	}

	fn complete(&self, kind: NavigationKind, location: Location, force_refresh: bool) -> RouteDescriptor {
		let route = self.route_for(&location);
		self.history.lock().push(NavigationRecord {
			kind,
			location,
			force_refresh,
		});
		*self.current.lock() = route.clone();
		route
	}
}

impl Navigator for MemoryRouter {
	fn current_route(&self) -> RouteDescriptor {
		self.current.lock().clone()
	}

	fn resolve(&self, to: &LinkTarget, current: &RouteDescriptor, append: bool) -> ResolvedTarget {
		let location = match to {
			LinkTarget::Path(path) => Location::parse(path),
			LinkTarget::Location(location) => location.clone(),
		};
		let location = self.normalize(&location, current, append);
		let route = self.route_for(&location);
		let href = format!("{}{}", self.base, location.full_path());

		tracing::debug!(to = %to, href = %href, "resolved link target");
		ResolvedTarget {
			route,
			location,
			href,
		}
	}

	fn push(&self, location: Location, on_complete: OnComplete) {
		let route = self.complete(NavigationKind::Push, location, false);
		on_complete(&route);
	}

	fn replace(
		&self,
		location: Location,
		on_complete: OnComplete,
		on_abort: Option<OnAbort>,
		force_refresh: bool,
	) {
		let current = self.current_route();
		let target = self.route_for(&location);
		if !force_refresh && is_same_route(&current, &target) {
			self.history.lock().push(NavigationRecord {
				kind: NavigationKind::Replace,
				location: location.clone(),
				force_refresh,
			});
			if let Some(on_abort) = on_abort {
				on_abort(NavigationError::Duplicated(location.full_path()));
			}
			return;
		}

		let route = self.complete(NavigationKind::Replace, location, force_refresh);
		on_complete(&route);
	}
}
