/// Severity level of a toast.
///
/// Determines icon and color styling only; no other behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
	/// Informational message (default).
	#[default]
	Info,

	/// An operation completed successfully.
	Success,

	/// Something needs attention but nothing failed.
	Warning,

	/// An operation failed.
	Error,
}

impl Level {
	/// Resolves a level from a loosely-typed name.
	///
	/// Callers often forward type strings straight out of server
	/// responses; unrecognized names fall back to `Info`.
	pub fn from_name(name: &str) -> Self {
		match name.trim().to_ascii_lowercase().as_str() {
			"success" => Self::Success,
			"warning" | "warn" => Self::Warning,
			"error" => Self::Error,
			_ => Self::Info,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_names_resolve() {
		assert_eq!(Level::from_name("success"), Level::Success);
		assert_eq!(Level::from_name("warning"), Level::Warning);
		assert_eq!(Level::from_name("error"), Level::Error);
		assert_eq!(Level::from_name("info"), Level::Info);
	}

	#[test]
	fn test_name_lookup_ignores_case_and_whitespace() {
		assert_eq!(Level::from_name("  SUCCESS "), Level::Success);
		assert_eq!(Level::from_name("Warn"), Level::Warning);
	}

	#[test]
	fn test_unrecognized_name_falls_back_to_info() {
		assert_eq!(Level::from_name("fatal"), Level::Info);
		assert_eq!(Level::from_name(""), Level::Info);
	}
}
