use std::time::Duration;

/// Controls automatic dismissal of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoDismiss {
	/// Dismiss after the center's configured default duration.
	#[default]
	Auto,

	/// Dismiss after the given duration.
	After(Duration),

	/// Stay until dismissed explicitly or evicted by the visible cap.
	Never,
}

impl AutoDismiss {
	/// Maps a raw millisecond count to a dismissal policy.
	///
	/// Zero means persistent, not "dismiss immediately".
	pub fn from_millis(ms: u64) -> Self {
		if ms == 0 {
			Self::Never
		} else {
			Self::After(Duration::from_millis(ms))
		}
	}

	/// Resolves the countdown to run, if any, given the configured default.
	pub(crate) fn resolve(self, default_duration: Duration) -> Option<Duration> {
		match self {
			Self::Auto => Some(default_duration),
			Self::After(d) => Some(d),
			Self::Never => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_zero_millis_means_persistent() {
		assert_eq!(AutoDismiss::from_millis(0), AutoDismiss::Never);
	}

	#[test]
	fn test_nonzero_millis_sets_duration() {
		assert_eq!(
			AutoDismiss::from_millis(2500),
			AutoDismiss::After(Duration::from_millis(2500))
		);
	}

	#[test]
	fn test_auto_resolves_to_default() {
		let default = Duration::from_secs(5);
		assert_eq!(AutoDismiss::Auto.resolve(default), Some(default));
	}

	#[test]
	fn test_never_resolves_to_no_countdown() {
		assert_eq!(AutoDismiss::Never.resolve(Duration::from_secs(5)), None);
	}
}
