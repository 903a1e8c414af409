//! The router link component.
//!
//! [`RouterLink`] renders a navigable element for a route target:
//!
//! - [`state`]: resolution and the classes, attributes and listeners derived from it
//! - [`navigate`]: push/replace decision and dispatch
//! - [`compose`]: element layout for ordinary content
//! - [`scoped`]: caller-rendered content
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use reinhardt_router_link::component::Component;
//! use reinhardt_router_link::config::{LinkDefaults, LinkProps};
//! use reinhardt_router_link::link::RouterLink;
//! use reinhardt_router_link::testing::MemoryRouter;
//!
//! let router = Arc::new(MemoryRouter::new("/users/42"));
//! let link = RouterLink::new(router, Arc::new(LinkDefaults::default()), LinkProps::new("/users"))
//!     .children(["Users"]);
//! assert_eq!(
//!     link.render().render_to_string(),
//!     "<a class=\"router-link-active\" href=\"/users\">Users</a>"
//! );
//! ```

pub mod compose;
pub mod navigate;
pub mod scoped;
pub mod state;

pub use compose::{MarkupMode, compose};
pub use navigate::{NavigationMode, NavigationPlan};
pub use scoped::{LinkContent, ScopedSlot, SlotProps};
pub use state::{LinkState, Resolution};

use parking_lot::Mutex;
use std::sync::Arc;

use crate::component::Component;
use crate::config::{LinkDefaults, LinkProps};
use crate::error::LinkDiagnostic;
use crate::logging::debug_log;
use crate::node::Node;
use crate::router::Navigator;

/// A link to a route that navigates through the router.
///
/// Resolution of the target is cached until the props change or the router
/// moves to another route. Everything else is rebuilt on every render.
pub struct RouterLink {
	navigator: Arc<dyn Navigator>,
	defaults: Arc<LinkDefaults>,
	props: LinkProps,
	content: LinkContent,
	resolution: Mutex<Option<Resolution>>,
	state: Mutex<Option<LinkState>>,
	diagnostics: Mutex<Vec<LinkDiagnostic>>,
}

impl RouterLink {
	/// Creates a link with no content.
	pub fn new(navigator: Arc<dyn Navigator>, defaults: Arc<LinkDefaults>, props: LinkProps) -> Self {
		Self {
			navigator,
			defaults,
			props,
			content: LinkContent::default(),
			resolution: Mutex::new(None),
			state: Mutex::new(None),
			diagnostics: Mutex::new(Vec::new()),
		}
	}

	/// Sets ordinary child content.
	pub fn children(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
		self.content = LinkContent::Children(children.into_iter().map(Into::into).collect());
		self
	}

	/// Sets scoped content.
	pub fn scoped(mut self, slot: impl Fn(&SlotProps) -> Vec<Node> + Send + Sync + 'static) -> Self {
		self.content = LinkContent::Scoped(Arc::new(slot));
		self
	}

	/// Returns the props.
	pub fn props(&self) -> &LinkProps {
		&self.props
	}

	/// Returns the content.
	pub fn content(&self) -> &LinkContent {
		&self.content
	}

	/// Replaces the props and drops the cached resolution.
	pub fn set_props(&mut self, props: LinkProps) {
		self.props = props;
		*self.resolution.get_mut() = None;
	}

	/// State computed by the latest render.
	pub fn state(&self) -> Option<LinkState> {
		self.state.lock().clone()
	}

	/// Diagnostics recorded so far.
	pub fn diagnostics(&self) -> Vec<LinkDiagnostic> {
		self.diagnostics.lock().clone()
	}

	/// Returns and clears recorded diagnostics.
	pub fn take_diagnostics(&self) -> Vec<LinkDiagnostic> {
		std::mem::take(&mut *self.diagnostics.lock())
	}

	/// Resolves the target, reusing the cached resolution while the
	/// current route is unchanged.
	pub fn resolution(&self) -> Resolution {
		// the lock is never held across navigator calls, which may render
		// this link again
		let cached = self.resolution.lock().clone();
		if let Some(resolution) = cached
			&& resolution.current == self.navigator.current_route()
		{
			return resolution;
		}

		let resolution = Resolution::resolve(self.navigator.as_ref(), &self.props);
		debug_log!(
			"RouterLink resolved {} to {}",
			self.props.to,
			resolution.target.href
		);
		*self.resolution.lock() = Some(resolution.clone());
		resolution
	}
}

impl Component for RouterLink {
	fn render(&self) -> Node {
		let resolution = self.resolution();
		let state = LinkState::compute(
			Arc::clone(&self.navigator),
			&resolution,
			&self.props,
			&self.defaults,
		);

		let node = match &self.content {
			LinkContent::Children(children) => compose(&self.props.tag, &state, children).0,
			LinkContent::Scoped(slot) => {
				let slot_props = scoped::slot_props(
					&state,
					&resolution.target.route,
					&resolution.target.href,
					&self.props,
				);
				let output =
					scoped::render_scoped(slot, &slot_props, &self.props, self.defaults.diagnostics);
				if let Some(diagnostic) = output.diagnostic {
					self.diagnostics.lock().push(diagnostic);
				}
				output.node
			}
		};

		*self.state.lock() = Some(state);
		node
	}

	fn name() -> &'static str {
		"RouterLink"
	}
}

impl std::fmt::Debug for RouterLink {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouterLink")
			.field("props", &self.props)
			.field("content", &self.content)
			.field("defaults", &self.defaults)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::LinkTarget;
	use crate::route::{Location, ResolvedTarget, RouteDescriptor};
	use crate::router::{OnAbort, OnComplete};
	use crate::testing::MemoryRouter;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	/// Counts resolutions made through an inner router.
	struct CountingRouter {
		inner: MemoryRouter,
		resolves: AtomicUsize,
	}

	impl Navigator for CountingRouter {
		fn current_route(&self) -> RouteDescriptor {
			self.inner.current_route()
		}

		fn resolve(&self, to: &LinkTarget, current: &RouteDescriptor, append: bool) -> ResolvedTarget {
			self.resolves.fetch_add(1, Ordering::SeqCst);
			self.inner.resolve(to, current, append)
		}

		fn push(&self, location: Location, on_complete: OnComplete) {
			self.inner.push(location, on_complete)
		}

		fn replace(
			&self,
			location: Location,
			on_complete: OnComplete,
			on_abort: Option<OnAbort>,
			force_refresh: bool,
		) {
			self.inner.replace(location, on_complete, on_abort, force_refresh)
		}
	}

	fn counting(current: &str) -> Arc<CountingRouter> {
		Arc::new(CountingRouter {
			inner: MemoryRouter::new(current),
			resolves: AtomicUsize::new(0),
		})
	}

	fn link(router: Arc<dyn Navigator>, props: LinkProps) -> RouterLink {
		RouterLink::new(router, Arc::new(LinkDefaults::default()), props)
	}

	#[rstest]
	fn test_name() {
		assert_eq!(RouterLink::name(), "RouterLink");
	}

	#[rstest]
	fn test_resolution_is_cached() {
		let router = counting("/");
		let link = link(router.clone(), LinkProps::new("/users")).children(["Users"]);

		link.render();
		link.render();
		assert_eq!(router.resolves.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_set_props_invalidates_cache() {
		let router = counting("/");
		let mut link = link(router.clone(), LinkProps::new("/users")).children(["Users"]);
		link.render();

		link.set_props(LinkProps::new("/about"));
		let node = link.render();
		assert_eq!(router.resolves.load(Ordering::SeqCst), 2);
		assert_eq!(node.as_element().unwrap().get_attr("href"), Some("/about"));
	}

	#[rstest]
	fn test_route_change_invalidates_cache() {
		let router = counting("/");
		let link = link(router.clone(), LinkProps::new("/users")).children(["Users"]);
		link.render();
		assert!(!link.state().unwrap().is_same_route);

		router.inner.set_current("/users");
		link.render();
		assert_eq!(router.resolves.load(Ordering::SeqCst), 2);
		assert!(link.state().unwrap().is_same_route);
	}

	#[rstest]
	fn test_click_navigates_and_updates_markup() {
		let router = Arc::new(MemoryRouter::new("/"));
		let link = link(router.clone(), LinkProps::new("/users")).children(["Users"]);

		let node = link.render();
		node.as_element()
			.unwrap()
			.emit("click", &crate::event::SyntheticEvent::click());
		assert_eq!(router.current_path(), "/users");

		let node = link.render();
		let anchor = node.as_element().unwrap();
		assert_eq!(anchor.get_attr("aria-current"), Some("page"));
		assert!(anchor.has_class("router-link-exact-active"));
	}

	#[rstest]
	#[case(true, 1)]
	#[case(false, 0)]
	fn test_scoped_diagnostics_recorded(#[case] enabled: bool, #[case] expected: usize) {
		let router = Arc::new(MemoryRouter::new("/"));
		let defaults = Arc::new(LinkDefaults::default().with_diagnostics(enabled));
		let link = RouterLink::new(router, defaults, LinkProps::new("/users"))
			.scoped(|_| vec![Node::text("a"), Node::text("b")]);

		let node = link.render();
		assert_eq!(node.as_element().unwrap().tag_name(), "span");
		assert_eq!(link.diagnostics().len(), expected);
		assert_eq!(link.take_diagnostics().len(), expected);
		assert!(link.diagnostics().is_empty());
	}

	/// Renders a registered link from inside its first resolution.
	struct RerenderingRouter {
		inner: MemoryRouter,
		link: Mutex<Option<std::sync::Weak<RouterLink>>>,
		resolves: AtomicUsize,
	}

	impl Navigator for RerenderingRouter {
		fn current_route(&self) -> RouteDescriptor {
			self.inner.current_route()
		}

		fn resolve(&self, to: &LinkTarget, current: &RouteDescriptor, append: bool) -> ResolvedTarget {
			if self.resolves.fetch_add(1, Ordering::SeqCst) == 0 {
				let link = self.link.lock().as_ref().and_then(std::sync::Weak::upgrade);
				if let Some(link) = link {
					link.render();
				}
			}
			self.inner.resolve(to, current, append)
		}

		fn push(&self, location: Location, on_complete: OnComplete) {
			self.inner.push(location, on_complete)
		}

		fn replace(
			&self,
			location: Location,
			on_complete: OnComplete,
			on_abort: Option<OnAbort>,
			force_refresh: bool,
		) {
			self.inner.replace(location, on_complete, on_abort, force_refresh)
		}
	}

	#[rstest]
	fn test_render_during_resolution_does_not_deadlock() {
		let router = Arc::new(RerenderingRouter {
			inner: MemoryRouter::new("/"),
			link: Mutex::new(None),
			resolves: AtomicUsize::new(0),
		});
		let link = Arc::new(
			RouterLink::new(
				router.clone(),
				Arc::new(LinkDefaults::default()),
				LinkProps::new("/users"),
			)
			.children(["Users"]),
		);
		*router.link.lock() = Some(Arc::downgrade(&link));

		let node = link.render();
		assert_eq!(router.resolves.load(Ordering::SeqCst), 2);
		assert_eq!(node.as_element().unwrap().get_attr("href"), Some("/users"));

		link.render();
		assert_eq!(router.resolves.load(Ordering::SeqCst), 2);
	}

	#[rstest]
	fn test_state_before_render_is_none() {
		let router = Arc::new(MemoryRouter::new("/"));
		let link = link(router, LinkProps::new("/users"));
		assert!(link.state().is_none());
	}
}
