//! # Reinhardt Router Link
//!
//! Router-aware navigation links.
//!
//! A [`RouterLink`] renders an element pointing at a route and keeps it in
//! step with the router:
//!
//! - **Active state**: `router-link-active` while the current route is the
//!   target or below it, `router-link-exact-active` and `aria-current` while
//!   it is the target itself
//! - **Click interception**: plain clicks become router navigations;
//!   modified, middle and `target="_blank"` clicks are left to the browser
//! - **Anchor injection**: a link rendered as another element (`li`,
//!   `div`) hands its `href` and listeners to the first `<a>` inside it
//! - **Scoped content**: callers may render the link themselves from
//!   [`SlotProps`](link::SlotProps)
//!
//! The router itself is abstracted by [`Navigator`]. [`MemoryRouter`]
//! implements it in memory for server-side rendering and tests.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use reinhardt_router_link::{Component, LinkDefaults, LinkProps, MemoryRouter, Node, RouterLink};
//!
//! let router = Arc::new(MemoryRouter::new("/users/42"));
//! let defaults = Arc::new(LinkDefaults::default());
//!
//! let link = RouterLink::new(router, defaults, LinkProps::new("/users").tag("li"))
//!     .children([Node::from(Node::element("a").child("Users"))]);
//!
//! assert_eq!(
//!     link.render().render_to_string(),
//!     "<li class=\"router-link-active\"><a href=\"/users\">Users</a></li>"
//! );
//! ```
//!
//! ## Logging
//!
//! Resolution and dispatch emit `tracing` events at `debug` level.
//! Development diagnostics (such as scoped content returning several
//! nodes) are logged as warnings in debug builds only.

#![warn(missing_docs)]

mod logging;

pub mod callback;
pub mod component;
pub mod config;
pub mod error;
pub mod event;
pub mod link;
pub mod node;
pub mod route;
pub mod router;
pub mod testing;

pub use callback::{EventHandler, IntoEventHandler, event_handler};
pub use component::Component;
pub use config::{EventNames, LinkDefaults, LinkProps, LinkTarget};
pub use error::{ConfigError, LinkDiagnostic, NavigationError};
pub use event::{ClickEvent, SyntheticEvent, guard_event};
pub use link::{LinkContent, LinkState, RouterLink, SlotProps};
pub use node::{ElementNode, Node, NodeData};
pub use route::{Location, QueryValue, RouteDescriptor, is_included_route, is_same_route};
pub use router::Navigator;
pub use testing::MemoryRouter;
