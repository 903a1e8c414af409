//! Per-render link state.

use std::fmt;
use std::sync::Arc;

use super::navigate::{NavigationMode, NavigationPlan, guard_handler, navigation_handler};
use crate::callback::EventHandler;
use crate::config::{LinkDefaults, LinkProps};
use crate::node::{Attributes, ClassMap, ListenerSlot, Listeners};
use crate::route::{ResolvedTarget, RouteDescriptor, comparison_target, is_included_route, is_same_route};
use crate::router::Navigator;

/// A resolution together with how it compares to the route it was made on.
///
/// Cached by a link until its props or the current route change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
	/// The route the target was resolved against.
	pub current: RouteDescriptor,
	/// The resolved target.
	pub target: ResolvedTarget,
	/// The target is the current route.
	pub is_same_route: bool,
	/// The target is the current route or one of its ancestors.
	pub is_included_route: bool,
}

impl Resolution {
	/// Resolves `props.to` against the navigator's current route.
	pub fn resolve(navigator: &dyn Navigator, props: &LinkProps) -> Self {
		let current = navigator.current_route();
		let target = navigator.resolve(&props.to, &current, props.append);
		let compare_to = comparison_target(&target.route);

		Self {
			is_same_route: is_same_route(&current, &compare_to),
			is_included_route: is_included_route(&current, &compare_to),
			current,
			target,
		}
	}
}

/// Everything a link derives for one render.
#[derive(Clone)]
pub struct LinkState {
	/// The target is the current route.
	pub is_same_route: bool,
	/// The target is the current route or one of its ancestors.
	pub is_included_route: bool,
	/// Active and exact-active classes.
	pub classes: ClassMap,
	/// `href` and, on exact-active links, `aria-current`.
	pub attributes: Attributes,
	/// Listeners for the link element.
	pub listeners: Listeners,
	/// The handler that navigates, also handed to scoped content.
	pub navigate: EventHandler,
}

impl LinkState {
	/// Derives the state for one render from a resolution.
	pub fn compute(
		navigator: Arc<dyn Navigator>,
		resolution: &Resolution,
		props: &LinkProps,
		defaults: &LinkDefaults,
	) -> Self {
		let is_same_route = resolution.is_same_route;
		let is_included_route = resolution.is_included_route;

		let mut classes = ClassMap::new();
		// exact first: when both names are the same, the active rule wins
		classes.insert(defaults.exact_active_class_for(props).to_string(), is_same_route);
		classes.insert(
			defaults.active_class_for(props).to_string(),
			if props.exact {
				is_same_route
			} else {
				is_included_route
			},
		);

		let mut attributes = Attributes::new();
		attributes.insert("href".to_string(), resolution.target.href.clone());
		if is_same_route {
			attributes.insert(
				"aria-current".to_string(),
				props.aria_current_value.clone(),
			);
		}

		let plan = NavigationPlan::new(
			resolution.target.location.clone(),
			NavigationMode::decide(props.refresh, props.replace, is_same_route),
		);
		let navigate = navigation_handler(navigator, plan);

		let mut listeners = Listeners::new();
		if !props.event.contains("click") {
			listeners.insert("click".to_string(), ListenerSlot::One(guard_handler()));
		}
		for event in props.event.iter() {
			listeners.insert(event.to_string(), ListenerSlot::One(Arc::clone(&navigate)));
		}

		Self {
			is_same_route,
			is_included_route,
			classes,
			attributes,
			listeners,
			navigate,
		}
	}

	/// Whether the active class applies.
	pub fn is_active(&self, props: &LinkProps) -> bool {
		if props.exact {
			self.is_same_route
		} else {
			self.is_included_route
		}
	}

	/// Whether the exact-active class applies.
	pub fn is_exact_active(&self) -> bool {
		self.is_same_route
	}
}

impl fmt::Debug for LinkState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LinkState")
			.field("is_same_route", &self.is_same_route)
			.field("is_included_route", &self.is_included_route)
			.field("classes", &self.classes)
			.field("attributes", &self.attributes)
			.field("listeners", &self.listeners)
			.finish_non_exhaustive()
	}
}
