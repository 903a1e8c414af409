//! Route descriptors produced by router resolution.

use super::location::{Location, Params, Query};

/// A route definition that took part in a match, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRecord {
	/// The record's path pattern.
	pub path: String,
	/// Optional route name.
	pub name: Option<String>,
}

impl RouteRecord {
	/// Creates a record for a path pattern.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			name: None,
		}
	}

	/// Sets the record name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

/// A resolved route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDescriptor {
	/// Concrete path.
	pub path: String,
	/// Name of the matched route, if any.
	pub name: Option<String>,
	/// Fragment including `#`, or empty.
	pub hash: String,
	/// Query parameters.
	pub query: Query,
	/// Path parameters.
	pub params: Params,
	/// Matched records, outermost first.
	pub matched: Vec<RouteRecord>,
	/// Where the router was originally asked to go before a redirect.
	pub redirected_from: Option<Location>,
}

impl RouteDescriptor {
	/// Creates a descriptor for a bare path.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			..Self::default()
		}
	}

	/// Builds an unmatched descriptor from a location.
	///
	/// Used for redirect origins, which are compared by what was asked for
	/// rather than by any route record.
	pub fn from_location(location: &Location) -> Self {
		Self {
			path: location.path.clone(),
			name: location.name.clone(),
			hash: location.hash.clone(),
			query: location.query.clone(),
			params: location.params.clone(),
			matched: Vec::new(),
			redirected_from: None,
		}
	}

	/// Adds a query parameter.
	pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let location = Location {
			query: std::mem::take(&mut self.query),
			..Location::default()
		}
		.with_query(key, value);
		self.query = location.query;
		self
	}

	/// Adds a path parameter.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());
		self
	}

	/// Appends a matched record.
	pub fn with_record(mut self, record: RouteRecord) -> Self {
		self.matched.push(record);
		self
	}

	/// Marks this route as the result of a redirect from `origin`.
	pub fn redirected_from(mut self, origin: Location) -> Self {
		self.redirected_from = Some(origin);
		self
	}

	/// Path, query string and hash joined back together.
	pub fn full_path(&self) -> String {
		Location {
			path: self.path.clone(),
			query: self.query.clone(),
			hash: self.hash.clone(),
			..Location::default()
		}
		.full_path()
	}
}

/// The result of resolving a link target against the current route.
///
/// Replaced as a whole on every resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
	/// The route the target resolves to.
	pub route: RouteDescriptor,
	/// The location to hand to `push`/`replace`.
	pub location: Location,
	/// The URL to put in `href`.
	pub href: String,
}
