//! Component trait definition.

use crate::node::Node;

/// Trait for renderable components.
///
/// # Example
///
/// ```
/// use reinhardt_router_link::component::Component;
/// use reinhardt_router_link::node::Node;
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn render(&self) -> Node {
///         Node::element("div")
///             .attr("class", "greeting")
///             .child(format!("Hello, {}!", self.name))
///             .into()
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
/// }
///
/// let html = Greeting { name: "Ada".into() }.render().render_to_string();
/// assert_eq!(html, "<div class=\"greeting\">Hello, Ada!</div>");
/// ```
pub trait Component: 'static {
	/// Renders the component to a node tree.
	fn render(&self) -> Node;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
