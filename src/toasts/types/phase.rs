/// Lifecycle phase of a tracked toast.
///
/// Phases advance monotonically; `Leaving` is only reachable from
/// `Entering` or `Visible`, and `Removed` toasts are evicted from the
/// tracking collection and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
	/// Inserted, playing the entry transition.
	#[default]
	Entering,

	/// Fully shown, counting down toward auto-dismissal (if any).
	Visible,

	/// Playing the exit transition; removal is already scheduled.
	Leaving,

	/// Gone from the screen and about to be dropped from tracking.
	Removed,
}

impl Phase {
	/// A toast counts against the visible cap while in these phases.
	pub fn is_live(self) -> bool {
		matches!(self, Self::Entering | Self::Visible)
	}
}
