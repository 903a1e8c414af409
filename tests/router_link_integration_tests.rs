//! Integration tests for RouterLink
//!
//! These tests drive links through a `MemoryRouter` the way an application
//! would:
//! 1. Active and exact-active state
//! 2. Click interception
//! 3. Push/replace selection
//! 4. Anchor injection into wrapper content
//! 5. Scoped content
//! 6. Configuration loading

use reinhardt_router_link::config::LinkTarget;
use reinhardt_router_link::testing::NavigationKind;
use reinhardt_router_link::{
	Component, LinkDefaults, LinkDiagnostic, LinkProps, Location, MemoryRouter, Node, RouterLink,
	SyntheticEvent, event_handler,
};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn defaults() -> Arc<LinkDefaults> {
	Arc::new(LinkDefaults::default().with_diagnostics(true))
}

fn anchor_link(router: &Arc<MemoryRouter>, defaults: &Arc<LinkDefaults>, props: LinkProps) -> RouterLink {
	RouterLink::new(router.clone(), Arc::clone(defaults), props).children(["Go"])
}

fn click(link: &RouterLink, event: &SyntheticEvent) -> Node {
	let node = link.render();
	if let Some(element) = node.find_element("a").or_else(|| node.as_element()) {
		element.emit("click", event);
	}
	node
}

// ============================================================================
// Active state
// ============================================================================

#[rstest]
#[case("/users/42", "/users", false, "<a class=\"router-link-active\" href=\"/users\">Go</a>")]
#[case("/users/42", "/users", true, "<a href=\"/users\">Go</a>")]
#[case(
	"/users/",
	"/users",
	false,
	"<a class=\"router-link-active router-link-exact-active\" aria-current=\"page\" href=\"/users\">Go</a>"
)]
#[case("/users", "/user", false, "<a href=\"/user\">Go</a>")]
#[case("/about", "/", false, "<a class=\"router-link-active\" href=\"/\">Go</a>")]
fn test_active_markup(
	defaults: Arc<LinkDefaults>,
	#[case] current: &str,
	#[case] to: &str,
	#[case] exact: bool,
	#[case] html: &str,
) {
	let router = Arc::new(MemoryRouter::new(current));
	let link = anchor_link(&router, &defaults, LinkProps::new(to).exact(exact));
	assert_eq!(link.render().render_to_string(), html);
}

#[rstest]
fn test_query_must_match_for_exact_active(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/search?q=rust&page=2"));

	let same = anchor_link(&router, &defaults, LinkProps::new("/search?page=2&q=rust"));
	same.render();
	assert!(same.state().unwrap().is_same_route);

	let subset = anchor_link(&router, &defaults, LinkProps::new("/search?q=rust"));
	subset.render();
	let state = subset.state().unwrap();
	assert!(!state.is_same_route);
	assert!(state.is_included_route);

	let other = anchor_link(&router, &defaults, LinkProps::new("/search?q=go"));
	other.render();
	assert!(!other.state().unwrap().is_included_route);
}

#[rstest]
fn test_active_state_follows_navigation(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let users = anchor_link(&router, &defaults, LinkProps::new("/users"));
	let about = anchor_link(&router, &defaults, LinkProps::new("/about"));

	click(&users, &SyntheticEvent::click());
	assert_eq!(router.current_path(), "/users");

	let users_node = users.render();
	let about_node = about.render();
	assert_eq!(
		users_node.as_element().unwrap().get_attr("aria-current"),
		Some("page")
	);
	assert!(about_node.as_element().unwrap().get_attr("aria-current").is_none());

	router.set_current("/about");
	assert!(users.render().as_element().unwrap().get_attr("aria-current").is_none());
	assert!(about.render().as_element().unwrap().has_class("router-link-exact-active"));
}

#[rstest]
fn test_configured_class_names(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/users"));
	let defaults = Arc::new(
		(*defaults)
			.clone()
			.with_active_class("is-active")
			.with_exact_active_class("is-current"),
	);
	let link = anchor_link(&router, &defaults, LinkProps::new("/users"));
	assert_eq!(
		link.render().render_to_string(),
		"<a class=\"is-active is-current\" aria-current=\"page\" href=\"/users\">Go</a>"
	);

	let overridden = anchor_link(&router, &defaults, LinkProps::new("/users").active_class("on"));
	let node = overridden.render();
	let anchor = node.as_element().unwrap();
	assert!(anchor.has_class("on"));
	assert!(!anchor.has_class("is-active"));
}

// ============================================================================
// Click interception
// ============================================================================

#[rstest]
#[case::meta(SyntheticEvent::click().with_meta(true))]
#[case::alt(SyntheticEvent::click().with_alt(true))]
#[case::ctrl(SyntheticEvent::click().with_ctrl(true))]
#[case::shift(SyntheticEvent::click().with_shift(true))]
#[case::middle_button(SyntheticEvent::click().with_button(1))]
#[case::right_button(SyntheticEvent::click().with_button(2))]
#[case::already_prevented(SyntheticEvent::click().already_prevented())]
fn test_ignored_clicks_do_not_navigate(defaults: Arc<LinkDefaults>, #[case] event: SyntheticEvent) {
	let router = Arc::new(MemoryRouter::new("/"));
	let link = anchor_link(&router, &defaults, LinkProps::new("/users"));
	let was_prevented = event.is_default_prevented();

	click(&link, &event);
	assert!(router.history().is_empty());
	assert_eq!(event.is_default_prevented(), was_prevented);
}

#[rstest]
fn test_blank_target_on_anchor_is_left_to_browser(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let link = RouterLink::new(router.clone(), defaults, LinkProps::new("/users").tag("div"))
		.children([Node::from(Node::element("a").attr("target", "_blank"))]);

	// hosts report the attribute of the element the listener sits on
	click(&link, &SyntheticEvent::click().with_target("_blank"));
	assert!(router.history().is_empty());
}

#[rstest]
fn test_plain_click_navigates_once_and_prevents_default(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let link = anchor_link(&router, &defaults, LinkProps::new("/users"));
	let event = SyntheticEvent::click();

	click(&link, &event);
	assert!(event.is_default_prevented());
	assert_eq!(router.history().len(), 1);
}

#[rstest]
fn test_event_without_button_navigates(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let link = anchor_link(&router, &defaults, LinkProps::new("/users"));

	click(&link, &SyntheticEvent::without_button());
	assert_eq!(router.history().len(), 1);
}

#[rstest]
fn test_custom_events(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let link = anchor_link(
		&router,
		&defaults,
		LinkProps::new("/users").event(vec!["mouseover", "focus"]),
	);
	let node = link.render();
	let anchor = node.as_element().unwrap();

	let event = SyntheticEvent::click();
	anchor.emit("click", &event);
	assert!(event.is_default_prevented());
	assert!(router.history().is_empty());

	anchor.emit("focus", &SyntheticEvent::without_button());
	assert_eq!(router.history().len(), 1);
}

// ============================================================================
// Push / replace
// ============================================================================

#[rstest]
#[case::other_route("/", LinkProps::new("/users"), NavigationKind::Push, false)]
#[case::replace_prop("/", LinkProps::new("/users").replace(true), NavigationKind::Replace, false)]
#[case::same_route("/users", LinkProps::new("/users"), NavigationKind::Replace, false)]
#[case::refresh("/users", LinkProps::new("/users").refresh(true), NavigationKind::Replace, true)]
#[case::refresh_other_route("/", LinkProps::new("/users").refresh(true), NavigationKind::Push, false)]
fn test_navigation_kind(
	defaults: Arc<LinkDefaults>,
	#[case] current: &str,
	#[case] props: LinkProps,
	#[case] kind: NavigationKind,
	#[case] force_refresh: bool,
) {
	let router = Arc::new(MemoryRouter::new(current));
	let link = anchor_link(&router, &defaults, props);

	click(&link, &SyntheticEvent::click());
	let history = router.history();
	assert_eq!(history.len(), 1);
	assert_eq!(history[0].kind, kind);
	assert_eq!(history[0].force_refresh, force_refresh);
	assert_eq!(history[0].location.path, "/users");
}

#[rstest]
fn test_relative_targets(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/users/42"));

	let sibling = anchor_link(&router, &defaults, LinkProps::new("43"));
	assert_eq!(sibling.render().as_element().unwrap().get_attr("href"), Some("/users/43"));

	let child = anchor_link(&router, &defaults, LinkProps::new("posts").append(true));
	assert_eq!(
		child.render().as_element().unwrap().get_attr("href"),
		Some("/users/42/posts")
	);
}

#[rstest]
fn test_named_route_target(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/").with_named_route("user", "/users/{id}"));
	let to = LinkTarget::Location(Location::named("user").with_param("id", "7").with_query("tab", "posts"));
	let link = anchor_link(&router, &defaults, LinkProps::new(to));

	assert_eq!(
		link.render().as_element().unwrap().get_attr("href"),
		Some("/users/7?tab=posts")
	);
	click(&link, &SyntheticEvent::click());
	assert_eq!(router.current_path(), "/users/7");
}

// ============================================================================
// Anchor injection
// ============================================================================

#[rstest]
fn test_wrapper_with_text_anchor_text(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let link = RouterLink::new(router.clone(), defaults, LinkProps::new("/users").tag("li")).children([
		Node::text("See "),
		Node::from(Node::element("a").child("users")),
		Node::text(" here"),
	]);

	let node = link.render();
	assert_eq!(
		node.render_to_string(),
		"<li>See <a href=\"/users\">users</a> here</li>"
	);

	let anchor = node.find_element("a").unwrap();
	assert!(anchor.listeners("click").is_some());
	assert!(node.as_element().unwrap().listeners("click").is_none());

	anchor.emit("click", &SyntheticEvent::click());
	assert_eq!(router.history().len(), 1);
}

#[rstest]
fn test_injected_anchor_keeps_own_handlers_first(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let calls = Arc::new(parking_lot::Mutex::new(Vec::new()));
	let own = event_handler({
		let calls = Arc::clone(&calls);
		let router = Arc::clone(&router);
		move |_| calls.lock().push(router.history().len())
	});

	let link = RouterLink::new(router.clone(), defaults, LinkProps::new("/users").tag("div"))
		.children([Node::from(Node::element("a").on("click", own))]);
	let node = link.render();
	let handled = node
		.find_element("a")
		.unwrap()
		.emit("click", &SyntheticEvent::click());

	assert_eq!(handled, 2);
	assert_eq!(*calls.lock(), vec![0]);
	assert_eq!(router.history().len(), 1);
}

#[rstest]
fn test_content_is_unchanged_across_renders(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let link = RouterLink::new(router.clone(), defaults, LinkProps::new("/users").tag("div"))
		.children([Node::from(Node::element("a").static_node(true).child("users"))]);

	for _ in 0..3 {
		let node = link.render();
		let anchor = node.find_element("a").unwrap();
		assert_eq!(anchor.listeners("click").map(|slot| slot.len()), Some(1));
	}

	let reinhardt_router_link::LinkContent::Children(children) = link.content() else {
		panic!("expected ordinary content");
	};
	let original = children[0].as_element().unwrap();
	assert!(original.is_static());
	assert!(original.get_attr("href").is_none());
	assert!(original.listeners("click").is_none());
}

#[rstest]
fn test_wrapper_without_anchor_is_the_link(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let link = RouterLink::new(router.clone(), defaults, LinkProps::new("/users").tag("button"))
		.children([Node::from(Node::element("span").child("Users"))]);

	let node = link.render();
	assert_eq!(
		node.render_to_string(),
		"<button href=\"/users\"><span>Users</span></button>"
	);
	node.as_element()
		.unwrap()
		.emit("click", &SyntheticEvent::click());
	assert_eq!(router.history().len(), 1);
}

// ============================================================================
// Scoped content
// ============================================================================

#[rstest]
fn test_scoped_single_node(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/users"));
	let link = RouterLink::new(router.clone(), defaults, LinkProps::new("/users")).scoped(|slot| {
		let class = if slot.is_exact_active { "here" } else { "" };
		vec![Node::from(
			Node::element("button")
				.class(class, !class.is_empty())
				.attr("data-href", slot.href.clone())
				.on("click", Arc::clone(&slot.navigate)),
		)]
	});

	let node = link.render();
	assert_eq!(
		node.render_to_string(),
		"<button class=\"here\" data-href=\"/users\"></button>"
	);
	assert!(link.diagnostics().is_empty());

	node.as_element()
		.unwrap()
		.emit("click", &SyntheticEvent::click());
	assert_eq!(router.history()[0].kind, NavigationKind::Replace);
}

#[rstest]
fn test_scoped_two_nodes_are_wrapped(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let link = RouterLink::new(router, defaults, LinkProps::new("/users"))
		.scoped(|_| vec![Node::text("one"), Node::text("two")]);

	let node = link.render();
	assert_eq!(node.render_to_string(), "<span>onetwo</span>");
	assert_eq!(
		link.diagnostics(),
		vec![LinkDiagnostic::ScopedSlotCardinality {
			to: "/users".to_string(),
			count: 2,
		}]
	);
}

#[rstest]
fn test_scoped_no_nodes_renders_nothing(defaults: Arc<LinkDefaults>) {
	let router = Arc::new(MemoryRouter::new("/"));
	let link = RouterLink::new(router, defaults, LinkProps::new("/users")).scoped(|_| Vec::new());

	let node = link.render();
	assert!(node.is_empty());
	assert_eq!(node.render_to_string(), "");
	assert_eq!(link.diagnostics().len(), 1);
}

// ============================================================================
// Configuration
// ============================================================================

#[rstest]
fn test_props_from_json() {
	let props: LinkProps = serde_json::from_str(
		r#"{
			"to": "/users",
			"tag": "li",
			"exact": true,
			"activeClass": "on",
			"event": ["click", "focus"]
		}"#,
	)
	.unwrap();

	let router = Arc::new(MemoryRouter::new("/users/1"));
	let link = RouterLink::new(router, Arc::new(LinkDefaults::default()), props)
		.children([Node::from(Node::element("a"))]);
	let node = link.render();
	assert!(!node.as_element().unwrap().has_class("on"));
	assert!(node.find_element("a").unwrap().listeners("focus").is_some());
}

#[rstest]
fn test_defaults_from_toml() {
	let defaults = LinkDefaults::from_toml_str(
		r#"
		active_class = "active"
		diagnostics = false
		"#,
	)
	.unwrap();
	assert_eq!(defaults.active_class, "active");
	assert_eq!(defaults.exact_active_class, "router-link-exact-active");
	assert!(!defaults.diagnostics);

	assert!(LinkDefaults::from_toml_str("active_class = ").is_err());
}
