use thiserror::Error;

/// Errors surfaced by the strict builder API.
///
/// The center's own entry points are fail-soft and never return these;
/// they exist for callers that prefer validation over silent no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ToastError {
	/// Message was empty after sanitizing and trimming.
	#[error("empty message")]
	EmptyMessage,

	/// Content exceeds size limits.
	#[error("content too large: {0} bytes exceeds limit of {1} bytes")]
	ContentTooLarge(usize, usize),

	/// Progress value outside the `0..=100` range.
	#[error("progress {0} out of range (expected 0..=100)")]
	ProgressOutOfRange(u16),
}
