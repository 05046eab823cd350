/// Sanitizes untrusted display text before it reaches the terminal.
///
/// Messages frequently come straight out of server responses. Passing them
/// through unfiltered would let a response restyle or corrupt the host
/// screen with ANSI escape sequences, so escapes are stripped, remaining
/// control characters are dropped (tabs become spaces, newlines survive
/// for multi-line messages), and the result is trimmed. Plain markup such
/// as `<script>` tags has no meaning in a terminal and is kept as literal
/// text.
///
/// # Arguments
///
/// * `raw` - The untrusted input text
///
/// # Returns
///
/// The sanitized text; empty when nothing displayable remains.
pub fn sanitize_message(raw: &str) -> String {
	let stripped = strip_ansi_escapes::strip_str(raw);
	let mut out = String::with_capacity(stripped.len());
	for ch in stripped.chars() {
		match ch {
			'\n' => out.push('\n'),
			'\t' => out.push(' '),
			c if c.is_control() => {}
			c => out.push(c),
		}
	}
	out.trim().to_string()
}

/// Truncates `text` to at most `max` bytes on a character boundary.
pub(crate) fn clamp_bytes(mut text: String, max: usize) -> String {
	if text.len() <= max {
		return text;
	}
	let mut end = max;
	while end > 0 && !text.is_char_boundary(end) {
		end -= 1;
	}
	text.truncate(end);
	text
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ansi_escapes_are_stripped() {
		assert_eq!(sanitize_message("\u{1b}[31mdanger\u{1b}[0m"), "danger");
	}

	#[test]
	fn test_markup_is_kept_as_literal_text() {
		assert_eq!(
			sanitize_message("<script>alert(1)</script>"),
			"<script>alert(1)</script>"
		);
	}

	#[test]
	fn test_control_characters_are_dropped() {
		assert_eq!(sanitize_message("a\u{7}b\rc"), "abc");
	}

	#[test]
	fn test_tabs_become_spaces_and_newlines_survive() {
		assert_eq!(sanitize_message("a\tb\nc"), "a b\nc");
	}

	#[test]
	fn test_whitespace_only_input_sanitizes_to_empty() {
		assert_eq!(sanitize_message("  \t \n "), "");
		assert_eq!(sanitize_message("\u{1b}[2J"), "");
	}

	#[test]
	fn test_clamp_respects_char_boundaries() {
		// 'é' is two bytes; clamping mid-character backs up to the boundary
		assert_eq!(clamp_bytes("aé".to_string(), 2), "a");
		assert_eq!(clamp_bytes("abc".to_string(), 8), "abc");
	}
}
