use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local};

use super::cls_toast::Toast;
use crate::toasts::types::Phase;

/// Callback attached to a toast; runs at most once.
///
/// `Send` so the same callback types work through the process-wide
/// accessor, which keeps the center behind a mutex.
pub type ToastCallback = Box<dyn FnOnce() + Send>;

/// Runtime state for a single tracked toast.
///
/// Owns the toast configuration, its lifecycle phase, the auto-dismiss
/// countdown, and any pending callbacks.
pub(crate) struct ToastState {
	/// Unique identifier, monotonic over the owning center.
	pub(crate) id: u64,

	/// The toast configuration being displayed.
	pub(crate) toast: Toast,

	/// Wall-clock creation time, for relative-age displays.
	pub(crate) created_at: DateTime<Local>,

	/// Current lifecycle phase.
	pub(crate) phase: Phase,

	/// Time spent in the current phase.
	pub(crate) phase_elapsed: Duration,

	/// Remaining time until auto-dismiss; `None` for persistent toasts.
	pub(crate) remaining: Option<Duration>,

	pub(crate) on_select: Option<ToastCallback>,
	pub(crate) on_confirm: Option<ToastCallback>,
	pub(crate) on_cancel: Option<ToastCallback>,
}

impl ToastState {
	/// Creates state for a freshly shown toast.
	///
	/// The auto-dismiss countdown is resolved immediately, so it runs from
	/// creation rather than from the end of the entry transition.
	pub(crate) fn new(id: u64, toast: Toast, default_duration: Duration) -> Self {
		let remaining = toast.auto_dismiss().resolve(default_duration);
		Self {
			id,
			toast,
			created_at: Local::now(),
			phase: Phase::Entering,
			phase_elapsed: Duration::ZERO,
			remaining,
			on_select: None,
			on_confirm: None,
			on_cancel: None,
		}
	}

	/// Starts the exit transition. No-op unless the toast is live, which
	/// is what makes every dismissal path idempotent.
	pub(crate) fn start_leaving(&mut self) {
		if !self.phase.is_live() {
			return;
		}
		self.phase = Phase::Leaving;
		self.phase_elapsed = Duration::ZERO;
		// a dismissed toast can no longer be answered or activated
		self.on_select = None;
		self.on_confirm = None;
		self.on_cancel = None;
		log::trace!("toast {} leaving", self.id);
	}

	/// Advances phase timers by `delta`.
	///
	/// Transitions are driven purely by these fixed timeouts, never by
	/// render completion, so a hidden or never-rendered center cannot
	/// stall a toast in `Entering` or `Leaving`.
	pub(crate) fn advance(&mut self, delta: Duration, enter: Duration, leave: Duration) {
		self.phase_elapsed = self.phase_elapsed.saturating_add(delta);
		match self.phase {
			Phase::Entering => {
				if self.phase_elapsed >= enter {
					self.phase = Phase::Visible;
					self.phase_elapsed -= enter;
				}
				self.tick_countdown(delta);
			}
			Phase::Visible => self.tick_countdown(delta),
			Phase::Leaving => {
				if self.phase_elapsed >= leave {
					self.phase = Phase::Removed;
				}
			}
			Phase::Removed => {}
		}
	}

	fn tick_countdown(&mut self, delta: Duration) {
		if let Some(remaining) = self.remaining.as_mut() {
			*remaining = remaining.saturating_sub(delta);
			if remaining.is_zero() {
				// the countdown can lapse again after a manual dismiss;
				// start_leaving treats that as a harmless no-op
				self.start_leaving();
			}
		}
	}

	/// Progress through the current transition in `0.0..=1.0`.
	///
	/// `Visible` and `Removed` report `1.0` (at rest).
	pub(crate) fn phase_progress(&self, enter: Duration, leave: Duration) -> f32 {
		let total = match self.phase {
			Phase::Entering => enter,
			Phase::Leaving => leave,
			Phase::Visible | Phase::Removed => return 1.0,
		};
		if total.is_zero() {
			return 1.0;
		}
		(self.phase_elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
	}
}

impl fmt::Debug for ToastState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ToastState")
			.field("id", &self.id)
			.field("phase", &self.phase)
			.field("remaining", &self.remaining)
			.field("toast", &self.toast)
			.finish_non_exhaustive()
	}
}
