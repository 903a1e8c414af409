//! Caller-rendered link content.
//!
//! Scoped content receives the link's state and builds its own markup. It
//! must return exactly one node; anything else is recovered from and
//! reported as a [`LinkDiagnostic`].

use std::fmt;
use std::sync::Arc;

use crate::callback::EventHandler;
use crate::config::LinkProps;
use crate::error::LinkDiagnostic;
use crate::logging::warn_log;
use crate::node::{Node, NodeData, render};
use crate::route::RouteDescriptor;

use super::state::LinkState;

/// What scoped content is given to render with.
#[derive(Clone)]
pub struct SlotProps {
	/// The resolved `href`.
	pub href: String,
	/// The resolved route.
	pub route: RouteDescriptor,
	/// Guards an event and navigates.
	pub navigate: EventHandler,
	/// The active class applies.
	pub is_active: bool,
	/// The exact-active class applies.
	pub is_exact_active: bool,
}

impl fmt::Debug for SlotProps {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SlotProps")
			.field("href", &self.href)
			.field("route", &self.route)
			.field("is_active", &self.is_active)
			.field("is_exact_active", &self.is_exact_active)
			.finish_non_exhaustive()
	}
}

/// Builds link content from [`SlotProps`].
pub type ScopedSlot = Arc<dyn Fn(&SlotProps) -> Vec<Node> + Send + Sync + 'static>;

/// The content of a link.
#[derive(Clone)]
pub enum LinkContent {
	/// Ordinary child nodes, laid out by the composer.
	Children(Vec<Node>),
	/// Content the caller renders from the link state.
	Scoped(ScopedSlot),
}

impl Default for LinkContent {
	fn default() -> Self {
		Self::Children(Vec::new())
	}
}

impl fmt::Debug for LinkContent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Children(children) => f.debug_tuple("Children").field(children).finish(),
			Self::Scoped(_) => f.write_str("Scoped(..)"),
		}
	}
}

/// Result of rendering scoped content.
#[derive(Debug, Clone)]
pub struct ScopedOutput {
	/// The node to render in place of the link.
	pub node: Node,
	/// Set when the content did not return exactly one node.
	pub diagnostic: Option<LinkDiagnostic>,
}

/// Builds the slot props for one render.
pub fn slot_props(state: &LinkState, route: &RouteDescriptor, href: &str, props: &LinkProps) -> SlotProps {
	SlotProps {
		href: href.to_string(),
		route: route.clone(),
		navigate: Arc::clone(&state.navigate),
		is_active: state.is_active(props),
		is_exact_active: state.is_exact_active(),
	}
}

/// Runs `slot` and enforces the single-node contract.
///
/// One node is used as is. No nodes render nothing. Several nodes are
/// wrapped in a `span`. With `diagnostics` set, both fallbacks are logged
/// and returned as a diagnostic.
pub fn render_scoped(
	slot: &ScopedSlot,
	slot_props: &SlotProps,
	props: &LinkProps,
	diagnostics: bool,
) -> ScopedOutput {
	let mut nodes = slot(slot_props);
	let count = nodes.len();

	let node = match count {
		1 => {
			return ScopedOutput {
				node: nodes.remove(0),
				diagnostic: None,
			};
		}
		0 => Node::Empty,
		_ => render("span", NodeData::default(), nodes),
	};

	ScopedOutput {
		node,
		diagnostic: diagnostics.then(|| report(props, count)),
	}
}

fn report(props: &LinkProps, count: usize) -> LinkDiagnostic {
	let diagnostic = LinkDiagnostic::ScopedSlotCardinality {
		to: props.to.to_string(),
		count,
	};
	warn_log!("{}", diagnostic);
	diagnostic
}
