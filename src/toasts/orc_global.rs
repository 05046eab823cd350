//! Process-wide toast access.
//!
//! Call sites scattered across an application (command handlers, task
//! completions, network error paths) report feedback without holding a
//! center reference. The center is created lazily on first use; [`init`]
//! installs a custom configuration if it runs before anything else touches
//! the center. There is no teardown beyond process exit.
//!
//! Callbacks passed through this module run while the center lock is held,
//! so they must not call back into these functions; set a flag and act on
//! it from the host loop instead.

use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::toasts::classes::{
	ConfirmOptions, ShowOptions, ToastCallback, ToastCenter, ToastConfig, ToastHandle,
};
use crate::toasts::types::Level;

static CENTER: OnceLock<Mutex<ToastCenter>> = OnceLock::new();

fn center() -> &'static Mutex<ToastCenter> {
	CENTER.get_or_init(|| Mutex::new(ToastCenter::new()))
}

/// Installs the configuration for the process-wide center.
///
/// Returns `false` when the center already exists; the running
/// configuration is left untouched in that case.
pub fn init(config: ToastConfig) -> bool {
	let mut installed = false;
	CENTER.get_or_init(|| {
		installed = true;
		Mutex::new(ToastCenter::with_config(config))
	});
	installed
}

/// Runs `f` against the process-wide center.
///
/// The host loop uses this for the operations that need the center itself,
/// `tick`, `render`, and `handle_key` in particular.
pub fn with_toasts<R>(f: impl FnOnce(&mut ToastCenter) -> R) -> R {
	f(&mut center().lock())
}

/// See [`ToastCenter::show`].
pub fn show(message: impl AsRef<str>, level: Level) -> Option<ToastHandle> {
	with_toasts(|toasts| toasts.show(message, level))
}

/// See [`ToastCenter::show_with`].
pub fn show_with(
	message: impl AsRef<str>,
	level: Level,
	options: ShowOptions,
) -> Option<ToastHandle> {
	with_toasts(|toasts| toasts.show_with(message, level, options))
}

/// See [`ToastCenter::confirm`].
pub fn confirm(
	message: impl AsRef<str>,
	on_confirm: ToastCallback,
	on_cancel: Option<ToastCallback>,
) -> Option<ToastHandle> {
	with_toasts(|toasts| toasts.confirm(message, on_confirm, on_cancel))
}

/// See [`ToastCenter::confirm_with`].
pub fn confirm_with(
	message: impl AsRef<str>,
	on_confirm: ToastCallback,
	on_cancel: Option<ToastCallback>,
	options: ConfirmOptions,
) -> Option<ToastHandle> {
	with_toasts(|toasts| toasts.confirm_with(message, on_confirm, on_cancel, options))
}

/// See [`ToastCenter::hide`].
pub fn hide(handle: ToastHandle) {
	with_toasts(|toasts| toasts.hide(handle));
}

/// See [`ToastCenter::clear_all`].
pub fn clear_all() {
	with_toasts(|toasts| toasts.clear_all());
}

#[cfg(test)]
mod tests {
	use super::*;

	// one test so the shared process-wide center sees a single,
	// deterministic sequence of operations
	#[test]
	fn test_global_center_lifecycle() {
		let handle = show("global toast", Level::Info).expect("shown");
		assert!(with_toasts(|toasts| toasts.contains(handle)));

		// first touch above already initialized the center
		assert!(!init(ToastConfig::default()));

		hide(handle);
		show("another", Level::Success).expect("shown");
		clear_all();
		assert_eq!(with_toasts(|toasts| toasts.visible_count()), 0);

		with_toasts(|toasts| toasts.tick(std::time::Duration::from_millis(300)));
		assert!(with_toasts(|toasts| toasts.is_empty()));
	}
}
