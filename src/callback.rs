//! Event handler types.
//!
//! Handlers receive the event as a [`ClickEvent`] trait object so that the
//! same listener works for browser events and [`SyntheticEvent`]s.
//!
//! [`SyntheticEvent`]: crate::event::SyntheticEvent

use std::sync::Arc;

use crate::event::ClickEvent;

/// A shareable event listener.
pub type EventHandler = Arc<dyn Fn(&dyn ClickEvent) + Send + Sync + 'static>;

/// Trait for converting closures and handlers into an [`EventHandler`].
pub trait IntoEventHandler {
	/// Converts self into an [`EventHandler`].
	fn into_event_handler(self) -> EventHandler;
}

impl<F> IntoEventHandler for F
where
	F: Fn(&dyn ClickEvent) + Send + Sync + 'static,
{
	fn into_event_handler(self) -> EventHandler {
		Arc::new(self)
	}
}

/// Builds an [`EventHandler`] with the argument type already fixed.
///
/// Lets closures skip the `&dyn ClickEvent` annotation.
///
/// # Example
///
/// ```
/// use reinhardt_router_link::callback::event_handler;
/// use reinhardt_router_link::event::SyntheticEvent;
///
/// let handler = event_handler(|event| {
///     let _ = event.button();
/// });
/// handler(&SyntheticEvent::click());
/// ```
pub fn event_handler(f: impl Fn(&dyn ClickEvent) + Send + Sync + 'static) -> EventHandler {
	Arc::new(f)
}
