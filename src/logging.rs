//! Development logging for router links.
//!
//! These macros compile to no-ops in release builds. Natively they forward
//! to `tracing`; in the browser they write to the developer console.
//!
//! | Macro | Debug Assertions | WASM | Non-WASM |
//! |-------|------------------|------|----------|
//! | `debug_log!` | Required | `console.debug` | `tracing::debug!` |
//! | `warn_log!` | Required | `console.warn` | `tracing::warn!` |

/// Logs a debug message (requires `debug_assertions`)
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (requires `debug_assertions`)
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		tracing::debug!($($arg)*);
	}};
}

/// No-op debug_log in release builds
#[cfg(not(debug_assertions))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`)
///
/// Used for diagnostics about link content the component recovered from.
///
/// # Example
///
/// ```ignore
/// warn_log!("RouterLink with to=\"{}\" wrapped its content", to);
/// ```
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		tracing::warn!($($arg)*);
	}};
}

/// No-op warn_log in release builds
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

pub(crate) use debug_log;
pub(crate) use warn_log;
