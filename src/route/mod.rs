//! Route data and route comparison.
//!
//! - [`Location`]: a navigable target (path or name, query, params, hash)
//! - [`RouteDescriptor`]: a resolved route as reported by the router
//! - [`ResolvedTarget`]: the `{route, location, href}` triple of a resolution
//! - [`is_same_route`] / [`is_included_route`]: comparisons behind link classes

mod compare;
mod descriptor;
mod location;

pub use compare::{comparison_target, is_included_route, is_same_route, normalize_path};
pub use descriptor::{ResolvedTarget, RouteDescriptor, RouteRecord};
pub use location::{
	Location, Params, Query, QueryValue, parse_query, resolve_relative_path, stringify_query,
};
