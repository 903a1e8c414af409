//! Render tree nodes.
//!
//! A minimal host render tree: elements carrying `{class, attrs, on}` data,
//! text, fragments and empty nodes. Links never rewrite nodes they are
//! given; they build new ones.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::callback::EventHandler;
use crate::event::ClickEvent;

/// Class names mapped to whether they are applied.
pub type ClassMap = BTreeMap<String, bool>;

/// HTML attributes by name.
pub type Attributes = BTreeMap<String, String>;

/// Event listeners by event name.
pub type Listeners = BTreeMap<String, ListenerSlot>;

/// The listener(s) registered for one event.
#[derive(Clone)]
pub enum ListenerSlot {
	/// A single handler.
	One(EventHandler),
	/// Several handlers, run in order.
	Many(Vec<EventHandler>),
}

impl ListenerSlot {
	/// Returns the handlers in call order.
	pub fn handlers(&self) -> &[EventHandler] {
		match self {
			Self::One(handler) => std::slice::from_ref(handler),
			Self::Many(handlers) => handlers,
		}
	}

	/// Converts into an ordered list.
	pub fn into_list(self) -> Vec<EventHandler> {
		match self {
			Self::One(handler) => vec![handler],
			Self::Many(handlers) => handlers,
		}
	}

	/// Number of handlers.
	pub fn len(&self) -> usize {
		self.handlers().len()
	}

	/// Whether there are no handlers.
	pub fn is_empty(&self) -> bool {
		self.handlers().is_empty()
	}
}

impl From<EventHandler> for ListenerSlot {
	fn from(handler: EventHandler) -> Self {
		Self::One(handler)
	}
}

impl std::fmt::Debug for ListenerSlot {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::One(_) => f.write_str("One(<function>)"),
			Self::Many(handlers) => write!(f, "Many({} handlers)", handlers.len()),
		}
	}
}

/// Data attached to an element.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
	/// Class names.
	pub class: ClassMap,
	/// Attributes.
	pub attrs: Attributes,
	/// Event listeners.
	pub on: Listeners,
}

/// An element node.
#[derive(Debug, Clone)]
pub struct ElementNode {
	tag: Cow<'static, str>,
	data: NodeData,
	children: Vec<Node>,
	is_static: bool,
}

impl ElementNode {
	/// Creates an element with no data and no children.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			data: NodeData::default(),
			children: Vec::new(),
			is_static: false,
		}
	}

	/// Sets whether a class is applied.
	pub fn class(mut self, name: impl Into<String>, applied: bool) -> Self {
		self.data.class.insert(name.into(), applied);
		self
	}

	/// Adds an attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.data.attrs.insert(name.into(), value.into());
		self
	}

	/// Adds a listener. Repeated events keep every handler in order.
	pub fn on(mut self, event: impl Into<String>, handler: EventHandler) -> Self {
		let event = event.into();
		let slot = match self.data.on.remove(&event) {
			Some(existing) => {
				let mut handlers = existing.into_list();
				handlers.push(handler);
				ListenerSlot::Many(handlers)
			}
			None => ListenerSlot::One(handler),
		};
		self.data.on.insert(event, slot);
		self
	}

	/// Replaces the element data.
	pub fn data(mut self, data: NodeData) -> Self {
		self.data = data;
		self
	}

	/// Adds a child.
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Adds several children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Marks the element as static content the host may reuse as-is.
	pub fn static_node(mut self, is_static: bool) -> Self {
		self.is_static = is_static;
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the element data.
	pub fn node_data(&self) -> &NodeData {
		&self.data
	}

	/// Returns the value of an attribute.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.data.attrs.get(name).map(String::as_str)
	}

	/// Whether a class is present and applied.
	pub fn has_class(&self, name: &str) -> bool {
		self.data.class.get(name).copied().unwrap_or(false)
	}

	/// Returns the listeners for an event.
	pub fn listeners(&self, event: &str) -> Option<&ListenerSlot> {
		self.data.on.get(event)
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Whether the host may skip re-evaluating this element.
	pub fn is_static(&self) -> bool {
		self.is_static
	}

	/// Runs every listener registered for `event`, in order.
	///
	/// Returns the number of handlers called.
	pub fn emit(&self, event: &str, payload: &dyn ClickEvent) -> usize {
		let Some(slot) = self.data.on.get(event) else {
			return 0;
		};
		for handler in slot.handlers() {
			handler(payload);
		}
		slot.len()
	}

	pub(crate) fn into_parts(self) -> (Cow<'static, str>, NodeData, Vec<Node>, bool) {
		(self.tag, self.data, self.children, self.is_static)
	}

	pub(crate) fn from_parts(
		tag: Cow<'static, str>,
		data: NodeData,
		children: Vec<Node>,
		is_static: bool,
	) -> Self {
		Self {
			tag,
			data,
			children,
			is_static,
		}
	}

	fn is_void(&self) -> bool {
		matches!(
			self.tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		)
	}
}

/// A node in the render tree.
#[derive(Debug, Clone)]
pub enum Node {
	/// An element.
	Element(ElementNode),
	/// A text node.
	Text(Cow<'static, str>),
	/// Several nodes without a wrapper element.
	Fragment(Vec<Node>),
	/// Renders nothing.
	Empty,
}

/// Creates an element node from a tag, its data and its children.
pub fn render(tag: impl Into<Cow<'static, str>>, data: NodeData, children: Vec<Node>) -> Node {
	Node::Element(ElementNode::from_parts(tag.into(), data, children, false))
}

impl Node {
	/// Creates an element builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementNode {
		ElementNode::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
		Self::Fragment(children.into_iter().map(Into::into).collect())
	}

	/// Returns the element, if this node is one.
	pub fn as_element(&self) -> Option<&ElementNode> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}

	/// Whether the node renders nothing.
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Child nodes of elements and fragments.
	pub fn child_nodes(&self) -> &[Node] {
		match self {
			Self::Element(element) => element.child_nodes(),
			Self::Fragment(children) => children,
			Self::Text(_) | Self::Empty => &[],
		}
	}

	/// Depth-first search for the first element with `tag`, this node included.
	pub fn find_element(&self, tag: &str) -> Option<&ElementNode> {
		if let Self::Element(element) = self
			&& element.tag_name() == tag
		{
			return Some(element);
		}
		find_element_in(self.child_nodes(), tag)
	}

	/// Renders the node to an HTML string.
	///
	/// Applied classes become a `class` attribute; listeners are not
	/// serialised.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Node::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				let classes = el
					.data
					.class
					.iter()
					.filter(|(name, applied)| **applied && !name.is_empty())
					.map(|(name, _)| name.as_str())
					.collect::<Vec<_>>();
				if !classes.is_empty() {
					output.push_str(" class=\"");
					output.push_str(&html_escape(&classes.join(" ")));
					output.push('"');
				}

				for (name, value) in &el.data.attrs {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_nodes() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Node::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Node::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Node::Empty => {}
		}
	}
}

/// Depth-first search through a node list for the first element with `tag`.
pub fn find_element_in<'a>(nodes: &'a [Node], tag: &str) -> Option<&'a ElementNode> {
	nodes.iter().find_map(|node| node.find_element(tag))
}

impl From<ElementNode> for Node {
	fn from(element: ElementNode) -> Self {
		Self::Element(element)
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Self::Text(Cow::Owned(text))
	}
}

impl From<&'static str> for Node {
	fn from(text: &'static str) -> Self {
		Self::Text(Cow::Borrowed(text))
	}
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
