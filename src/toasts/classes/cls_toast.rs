use crate::toasts::functions::fnc_sanitize_message::{clamp_bytes, sanitize_message};
use crate::toasts::types::{AutoDismiss, Level, ToastError};

/// Maximum sanitized message size retained, in bytes.
pub const MAX_MESSAGE_BYTES: usize = 1024;

/// Maximum sanitized description size retained, in bytes.
pub const MAX_DESCRIPTION_BYTES: usize = 2048;

/// Immutable configuration of a single toast.
///
/// Text fields are always sanitized; construction goes through
/// [`Toast::builder`] or the center's fail-soft entry points, never by
/// filling in fields directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
	pub(crate) message: String,
	pub(crate) level: Level,
	pub(crate) auto_dismiss: AutoDismiss,
	pub(crate) description: Option<String>,
	pub(crate) progress: Option<u16>,
	pub(crate) tag: Option<String>,
	pub(crate) action_labels: Option<(String, String)>,
}

impl Toast {
	/// Starts building a toast with strict validation.
	pub fn builder(message: impl Into<String>) -> ToastBuilder {
		ToastBuilder {
			message: message.into(),
			level: Level::default(),
			auto_dismiss: AutoDismiss::default(),
			description: None,
			progress: None,
			tag: None,
		}
	}

	/// The sanitized display text.
	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn level(&self) -> Level {
		self.level
	}

	pub fn auto_dismiss(&self) -> AutoDismiss {
		self.auto_dismiss
	}

	/// Optional secondary line rendered under the message.
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// Completion percentage in `0..=100`, when this toast tracks one.
	pub fn progress(&self) -> Option<u16> {
		self.progress
	}

	/// Replace key: showing another toast with the same tag refreshes this
	/// one in place instead of stacking a duplicate.
	pub fn tag(&self) -> Option<&str> {
		self.tag.as_deref()
	}

	/// Labels of the accept/cancel controls on a confirm-style toast.
	pub fn action_labels(&self) -> Option<(&str, &str)> {
		self.action_labels
			.as_ref()
			.map(|(confirm, cancel)| (confirm.as_str(), cancel.as_str()))
	}

	pub(crate) fn is_confirm(&self) -> bool {
		self.action_labels.is_some()
	}
}

/// Builder returned by [`Toast::builder`].
///
/// Unlike the center's entry points, [`build`](Self::build) rejects
/// invalid input instead of silently dropping or clamping it.
#[derive(Debug, Clone)]
pub struct ToastBuilder {
	message: String,
	level: Level,
	auto_dismiss: AutoDismiss,
	description: Option<String>,
	progress: Option<u16>,
	tag: Option<String>,
}

impl ToastBuilder {
	pub fn level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	pub fn auto_dismiss(mut self, auto_dismiss: AutoDismiss) -> Self {
		self.auto_dismiss = auto_dismiss;
		self
	}

	/// Shorthand for [`AutoDismiss::from_millis`]; zero means persistent.
	pub fn duration_ms(mut self, ms: u64) -> Self {
		self.auto_dismiss = AutoDismiss::from_millis(ms);
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn progress(mut self, progress: u16) -> Self {
		self.progress = Some(progress);
		self
	}

	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = Some(tag.into());
		self
	}

	/// Validates and builds the toast.
	///
	/// # Errors
	///
	/// [`ToastError::EmptyMessage`] when the message sanitizes to nothing,
	/// [`ToastError::ContentTooLarge`] when message or description exceed
	/// their byte limits, [`ToastError::ProgressOutOfRange`] when progress
	/// exceeds 100.
	pub fn build(self) -> Result<Toast, ToastError> {
		let message = sanitize_message(&self.message);
		if message.is_empty() {
			return Err(ToastError::EmptyMessage);
		}
		if message.len() > MAX_MESSAGE_BYTES {
			return Err(ToastError::ContentTooLarge(message.len(), MAX_MESSAGE_BYTES));
		}

		let description = match self.description {
			Some(raw) => {
				let description = sanitize_message(&raw);
				if description.len() > MAX_DESCRIPTION_BYTES {
					return Err(ToastError::ContentTooLarge(
						description.len(),
						MAX_DESCRIPTION_BYTES,
					));
				}
				(!description.is_empty()).then_some(description)
			}
			None => None,
		};

		if let Some(progress) = self.progress {
			if progress > 100 {
				return Err(ToastError::ProgressOutOfRange(progress));
			}
		}

		Ok(Toast {
			message,
			level: self.level,
			auto_dismiss: self.auto_dismiss,
			description,
			progress: self.progress,
			tag: self.tag,
			action_labels: None,
		})
	}
}

/// Fail-soft construction used by the center: sanitizes, clamps oversized
/// content, and clamps progress instead of erroring. Returns `None` only
/// when no displayable message remains.
pub(crate) fn build_lossy(
	message: &str,
	level: Level,
	auto_dismiss: AutoDismiss,
	description: Option<String>,
	progress: Option<u16>,
	tag: Option<String>,
) -> Option<Toast> {
	let message = sanitize_message(message);
	if message.is_empty() {
		return None;
	}
	let message = clamp_bytes(message, MAX_MESSAGE_BYTES);
	let description = description
		.map(|raw| clamp_bytes(sanitize_message(&raw), MAX_DESCRIPTION_BYTES))
		.filter(|description| !description.is_empty());
	Some(Toast {
		message,
		level,
		auto_dismiss,
		description,
		progress: progress.map(|p| p.min(100)),
		tag,
		action_labels: None,
	})
}
