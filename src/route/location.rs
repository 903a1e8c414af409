//! Navigable locations and their query strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Path parameters by name.
pub type Params = BTreeMap<String, String>;

/// Query parameters by key. Key order never matters.
pub type Query = BTreeMap<String, QueryValue>;

/// A query value: one string, or several for a repeated key.
///
/// `Single(v)` and `List(vec![v])` compare equal. Values inside a list are
/// compared in order.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
	/// `?key=value`
	Single(String),
	/// `?key=a&key=b`
	List(Vec<String>),
}

impl QueryValue {
	/// Returns the values as a slice.
	pub fn values(&self) -> &[String] {
		match self {
			Self::Single(value) => std::slice::from_ref(value),
			Self::List(values) => values,
		}
	}

	fn push(self, value: String) -> Self {
		let mut values = match self {
			Self::Single(first) => vec![first],
			Self::List(values) => values,
		};
		values.push(value);
		Self::List(values)
	}
}

impl PartialEq for QueryValue {
	fn eq(&self, other: &Self) -> bool {
		self.values() == other.values()
	}
}

impl From<&str> for QueryValue {
	fn from(value: &str) -> Self {
		Self::Single(value.to_string())
	}
}

impl From<String> for QueryValue {
	fn from(value: String) -> Self {
		Self::Single(value)
	}
}

/// A navigable target handed to the router.
///
/// Either `path` or `name` identifies the destination. A location with an
/// empty path and no name stays on the current path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
	/// Absolute or relative path.
	pub path: String,
	/// Route name for reverse lookup.
	pub name: Option<String>,
	/// Query parameters.
	pub query: Query,
	/// Path parameters, used with `name`.
	pub params: Params,
	/// Fragment including the leading `#`, or empty.
	pub hash: String,
}

impl Location {
	/// Creates a location for a path without query or hash.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			..Self::default()
		}
	}

	/// Creates a location pointing at a named route.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	/// Parses `"/path?query#hash"`.
	///
	/// Undecodable query strings are dropped rather than failing the link.
	pub fn parse(raw: &str) -> Self {
		let (rest, hash) = match raw.find('#') {
			Some(index) => (&raw[..index], raw[index..].to_string()),
			None => (raw, String::new()),
		};
		let (path, query) = match rest.find('?') {
			Some(index) => (&rest[..index], parse_query(&rest[index + 1..])),
			None => (rest, Query::new()),
		};

		Self {
			path: path.to_string(),
			name: None,
			query,
			params: Params::new(),
			hash,
		}
	}

	/// Adds a query parameter, turning repeated keys into lists.
	pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		insert_query(&mut self.query, key.into(), value.into());
		self
	}

	/// Adds a path parameter.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());
		self
	}

	/// Sets the fragment. A missing `#` is added.
	pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
		let hash = hash.into();
		self.hash = if hash.is_empty() || hash.starts_with('#') {
			hash
		} else {
			format!("#{}", hash)
		};
		self
	}

	/// Path, query string and hash joined back together.
	pub fn full_path(&self) -> String {
		let mut full = self.path.clone();
		let query = stringify_query(&self.query);
		if !query.is_empty() {
			full.push('?');
			full.push_str(&query);
		}
		full.push_str(&self.hash);
		full
	}
}

/// Parses a raw query string (without the leading `?`).
pub fn parse_query(raw: &str) -> Query {
	let raw = raw.trim_start_matches('?');
	let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(raw) {
		Ok(pairs) => pairs,
		Err(err) => {
			tracing::debug!("ignoring undecodable query string {:?}: {}", raw, err);
			Vec::new()
		}
	};

	let mut query = Query::new();
	for (key, value) in pairs {
		insert_query(&mut query, key, value);
	}
	query
}

/// Serialises a query map, percent-encoding keys and values.
pub fn stringify_query(query: &Query) -> String {
	query
		.iter()
		.flat_map(|(key, value)| {
			value.values().iter().map(move |value| {
				if value.is_empty() {
					urlencoding::encode(key).into_owned()
				} else {
					format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
				}
			})
		})
		.collect::<Vec<_>>()
		.join("&")
}

fn insert_query(query: &mut Query, key: String, value: String) {
	let merged = match query.remove(&key) {
		Some(existing) => existing.push(value),
		None => QueryValue::Single(value),
	};
	query.insert(key, merged);
}

/// Resolves `relative` against `base` the way browsers resolve link paths.
///
/// Absolute paths are returned unchanged; query- or hash-only targets keep
/// the base path. Without `append`, the last segment of `base` is replaced;
/// with `append`, the relative path is added below it.
pub fn resolve_relative_path(relative: &str, base: &str, append: bool) -> String {
	match relative.chars().next() {
		Some('/') => return relative.to_string(),
		None => return base.to_string(),
		Some('?') | Some('#') => return format!("{}{}", base, relative),
		_ => {}
	}

	let mut stack: Vec<&str> = base.split('/').collect();
	if !append || stack.last().is_some_and(|last| last.is_empty()) {
		stack.pop();
	}

	for segment in relative.trim_start_matches('/').split('/') {
		match segment {
			".." => {
				stack.pop();
			}
			"." => {}
			segment => stack.push(segment),
		}
	}

	if stack.first().is_none_or(|first| !first.is_empty()) {
		stack.insert(0, "");
	}
	if stack.len() == 1 {
		return "/".to_string();
	}
	stack.join("/")
}
