//! Markup composition for links with ordinary content.
//!
//! A link renders in one of three ways:
//!
//! 1. its tag is `a`: classes, attributes and listeners go on that anchor;
//! 2. its content contains an `a`: the first one (depth-first) receives the
//!    attributes and listeners, the wrapper only the classes;
//! 3. otherwise the wrapper receives everything.
//!
//! Content nodes are never modified. Case 2 rebuilds the path from the
//! content root down to the anchor and shares everything else.

use crate::config::ANCHOR_TAG;
use crate::node::{Attributes, ElementNode, ListenerSlot, Listeners, Node, NodeData, render};

use super::state::LinkState;

/// How the link was laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupMode {
	/// The link element is the anchor.
	SelfAnchor,
	/// A descendant anchor carries attributes and listeners.
	ChildAnchor,
	/// No anchor; the wrapper carries everything.
	SelfFallback,
}

/// Builds the link element for `tag` around `children`.
pub fn compose(tag: &str, state: &LinkState, children: &[Node]) -> (Node, MarkupMode) {
	let mut data = NodeData {
		class: state.classes.clone(),
		..NodeData::default()
	};

	if tag == ANCHOR_TAG {
		data.attrs = state.attributes.clone();
		data.on = state.listeners.clone();
		return (
			render(tag.to_string(), data, children.to_vec()),
			MarkupMode::SelfAnchor,
		);
	}

	match inject_into_anchor(children, state) {
		Some(children) => (render(tag.to_string(), data, children), MarkupMode::ChildAnchor),
		None => {
			data.attrs = state.attributes.clone();
			data.on = state.listeners.clone();
			(
				render(tag.to_string(), data, children.to_vec()),
				MarkupMode::SelfFallback,
			)
		}
	}
}

/// Rebuilds `nodes` with the first anchor replaced by a linked copy.
///
/// Returns `None` when no anchor exists.
fn inject_into_anchor(nodes: &[Node], state: &LinkState) -> Option<Vec<Node>> {
	for (index, node) in nodes.iter().enumerate() {
		if let Some(replacement) = inject_into_node(node, state) {
			let mut rebuilt = nodes.to_vec();
			rebuilt[index] = replacement;
			return Some(rebuilt);
		}
	}
	None
}

fn inject_into_node(node: &Node, state: &LinkState) -> Option<Node> {
	match node {
		Node::Element(element) if element.tag_name() == ANCHOR_TAG => {
			Some(Node::Element(link_anchor(element, state)))
		}
		Node::Element(element) => {
			let children = inject_into_anchor(element.child_nodes(), state)?;
			let (tag, data, _, is_static) = element.clone().into_parts();
			Some(Node::Element(ElementNode::from_parts(
				tag, data, children, is_static,
			)))
		}
		Node::Fragment(children) => inject_into_anchor(children, state).map(Node::Fragment),
		Node::Text(_) | Node::Empty => None,
	}
}

/// A copy of `anchor` carrying the link's attributes and listeners.
///
/// The copy is never static: its listeners change with every resolution.
fn link_anchor(anchor: &ElementNode, state: &LinkState) -> ElementNode {
	let (tag, mut data, children, _) = anchor.clone().into_parts();
	data.on = merge_listeners(data.on, &state.listeners);
	data.attrs = merge_attributes(data.attrs, &state.attributes);
	ElementNode::from_parts(tag, data, children, false)
}

/// Adds the link's listeners after the anchor's own.
///
/// Events both sides listen to become ordered lists with the link handler
/// last.
pub fn merge_listeners(existing: Listeners, ours: &Listeners) -> Listeners {
	let mut merged = existing;
	for (event, slot) in ours {
		let combined = match merged.remove(event) {
			Some(theirs) => {
				let mut handlers = theirs.into_list();
				handlers.extend(slot.handlers().iter().cloned());
				ListenerSlot::Many(handlers)
			}
			None => slot.clone(),
		};
		merged.insert(event.clone(), combined);
	}
	merged
}

fn merge_attributes(existing: Attributes, ours: &Attributes) -> Attributes {
	let mut merged = existing;
	// a stale aria-current from cached content must not survive
	merged.remove("aria-current");
	merged.extend(ours.iter().map(|(name, value)| (name.clone(), value.clone())));
	merged
}
