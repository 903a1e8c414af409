//! Click events and the click guard.
//!
//! A link only takes over a click when the browser would otherwise have
//! followed the anchor in the current tab. Everything else (modified
//! clicks, middle clicks, `target="_blank"`, already handled events) is left
//! to the browser.

use std::cell::Cell;

/// The parts of a pointer event the click guard looks at.
///
/// Implemented by [`SyntheticEvent`] everywhere and by
/// `web_sys::MouseEvent` in the browser.
pub trait ClickEvent {
	/// Whether the meta (command) key was held.
	fn meta_key(&self) -> bool;
	/// Whether the alt key was held.
	fn alt_key(&self) -> bool;
	/// Whether the control key was held.
	fn ctrl_key(&self) -> bool;
	/// Whether the shift key was held.
	fn shift_key(&self) -> bool;
	/// Whether some listener already prevented the default action.
	fn default_prevented(&self) -> bool;
	/// Pressed button, or `None` for events without one.
	fn button(&self) -> Option<i16>;
	/// The `target` attribute of the element the listener is attached to.
	fn target_attribute(&self) -> Option<String>;
	/// Whether [`prevent_default`](Self::prevent_default) is available.
	///
	/// Some hosts deliver events without it.
	fn can_prevent_default(&self) -> bool {
		true
	}
	/// Prevents the browser's default action.
	fn prevent_default(&self);
}

/// Decides whether a link should handle `event` itself.
///
/// Returns `true` and prevents the default action when the click should
/// become a router navigation. Rejected events are left untouched.
pub fn guard_event(event: &dyn ClickEvent) -> bool {
	// don't redirect with control keys
	if event.meta_key() || event.alt_key() || event.ctrl_key() || event.shift_key() {
		return false;
	}
	if event.default_prevented() {
		return false;
	}
	// don't redirect on right or middle click
	if event.button().is_some_and(|button| button != 0) {
		return false;
	}
	if event
		.target_attribute()
		.is_some_and(|target| opens_new_context(&target))
	{
		return false;
	}

	if event.can_prevent_default() {
		event.prevent_default();
	}
	true
}

fn opens_new_context(target: &str) -> bool {
	target
		.split_whitespace()
		.any(|token| token.eq_ignore_ascii_case("_blank"))
}

/// A host-independent click event.
///
/// Used for server-side rendering, tests, and hosts that translate their
/// own events.
///
/// # Example
///
/// ```
/// use reinhardt_router_link::event::{SyntheticEvent, guard_event};
///
/// let event = SyntheticEvent::click();
/// assert!(guard_event(&event));
/// assert!(event.is_default_prevented());
///
/// let ctrl_click = SyntheticEvent::click().with_ctrl(true);
/// assert!(!guard_event(&ctrl_click));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyntheticEvent {
	meta: bool,
	alt: bool,
	ctrl: bool,
	shift: bool,
	button: Option<i16>,
	target: Option<String>,
	supports_prevent_default: bool,
	prevented: Cell<bool>,
}

impl SyntheticEvent {
	/// A primary-button click with no modifiers.
	pub fn click() -> Self {
		Self {
			button: Some(0),
			supports_prevent_default: true,
			..Self::default()
		}
	}

	/// An event that carries no button, such as a keyboard-triggered one.
	pub fn without_button() -> Self {
		Self {
			supports_prevent_default: true,
			..Self::default()
		}
	}

	/// Sets the meta key.
	pub fn with_meta(mut self, held: bool) -> Self {
		self.meta = held;
		self
	}

	/// Sets the alt key.
	pub fn with_alt(mut self, held: bool) -> Self {
		self.alt = held;
		self
	}

	/// Sets the control key.
	pub fn with_ctrl(mut self, held: bool) -> Self {
		self.ctrl = held;
		self
	}

	/// Sets the shift key.
	pub fn with_shift(mut self, held: bool) -> Self {
		self.shift = held;
		self
	}

	/// Sets the pressed button.
	pub fn with_button(mut self, button: i16) -> Self {
		self.button = Some(button);
		self
	}

	/// Sets the `target` attribute of the originating element.
	pub fn with_target(mut self, target: impl Into<String>) -> Self {
		self.target = Some(target.into());
		self
	}

	/// Marks the default action as already prevented.
	pub fn already_prevented(self) -> Self {
		self.prevented.set(true);
		self
	}

	/// Removes the prevent-default capability.
	pub fn without_prevent_default(mut self) -> Self {
		self.supports_prevent_default = false;
		self
	}

	/// Whether the default action has been prevented.
	pub fn is_default_prevented(&self) -> bool {
		self.prevented.get()
	}
}

impl ClickEvent for SyntheticEvent {
	fn meta_key(&self) -> bool {
		self.meta
	}

	fn alt_key(&self) -> bool {
		self.alt
	}

	fn ctrl_key(&self) -> bool {
		self.ctrl
	}

	fn shift_key(&self) -> bool {
		self.shift
	}

	fn default_prevented(&self) -> bool {
		self.prevented.get()
	}

	fn button(&self) -> Option<i16> {
		self.button
	}

	fn target_attribute(&self) -> Option<String> {
		self.target.clone()
	}

	fn can_prevent_default(&self) -> bool {
		self.supports_prevent_default
	}

	fn prevent_default(&self) {
		self.prevented.set(true);
	}
}

#[cfg(target_arch = "wasm32")]
impl ClickEvent for web_sys::MouseEvent {
	fn meta_key(&self) -> bool {
		web_sys::MouseEvent::meta_key(self)
	}

	fn alt_key(&self) -> bool {
		web_sys::MouseEvent::alt_key(self)
	}

	fn ctrl_key(&self) -> bool {
		web_sys::MouseEvent::ctrl_key(self)
	}

	fn shift_key(&self) -> bool {
		web_sys::MouseEvent::shift_key(self)
	}

	fn default_prevented(&self) -> bool {
		web_sys::Event::default_prevented(self)
	}

	fn button(&self) -> Option<i16> {
		Some(web_sys::MouseEvent::button(self))
	}

	fn target_attribute(&self) -> Option<String> {
		use wasm_bindgen::JsCast;

		web_sys::Event::current_target(self)
			.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
			.and_then(|element| element.get_attribute("target"))
	}

	fn prevent_default(&self) {
		web_sys::Event::prevent_default(self);
	}
}
