//! Route equivalence and inclusion.
//!
//! These comparisons drive the active and exact-active link classes.
//! Paths are compared case-sensitively and without trailing slashes.

use super::descriptor::RouteDescriptor;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Strips trailing slashes. The root path normalizes to `""`.
pub fn normalize_path(path: &str) -> &str {
	path.trim_end_matches('/')
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
	path.split('/').filter(|segment| !segment.is_empty())
}

fn is_subset<V: PartialEq>(subset: &BTreeMap<String, V>, superset: &BTreeMap<String, V>) -> bool {
	subset
		.iter()
		.all(|(key, value)| superset.get(key).is_some_and(|other| other == value))
}

/// Whether `current` and `target` describe the same route.
///
/// Normalized paths must be equal, query sets must be equal regardless of
/// key order, and params must be equal key by key.
pub fn is_same_route(current: &RouteDescriptor, target: &RouteDescriptor) -> bool {
	normalize_path(&current.path) == normalize_path(&target.path)
		&& current.query == target.query
		&& current.params == target.params
}

/// Whether `target` is `current` or one of its ancestors.
///
/// Target's path segments must be a prefix of current's, so `/user` does
/// not include `/users`. Target's query and params must be subsets of
/// current's.
pub fn is_included_route(current: &RouteDescriptor, target: &RouteDescriptor) -> bool {
	let mut current_segments = segments(&current.path);
	let path_included = segments(&target.path).all(|segment| current_segments.next() == Some(segment));

	path_included
		&& is_subset(&target.query, &current.query)
		&& is_subset(&target.params, &current.params)
}

/// The descriptor a resolved route should be compared by.
///
/// A redirected route is compared by the location it was redirected from.
pub fn comparison_target(route: &RouteDescriptor) -> Cow<'_, RouteDescriptor> {
	match &route.redirected_from {
		Some(origin) => Cow::Owned(RouteDescriptor::from_location(origin)),
		None => Cow::Borrowed(route),
	}
}
