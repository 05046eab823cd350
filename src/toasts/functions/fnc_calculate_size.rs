use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::toasts::classes::Toast;

/// Horizontal chrome around the content: two border cells plus one cell of
/// padding on each side.
pub(crate) const H_CHROME: u16 = 4;

/// Vertical chrome around the content: top and bottom border cells.
pub(crate) const V_CHROME: u16 = 2;

/// Smallest card width that still fits chrome plus a sliver of text.
const MIN_WIDTH: u16 = 12;

/// Calculates the card size for a toast.
///
/// Width follows the widest content line, clamped between `MIN_WIDTH` and
/// the smaller of `max_width` and the frame. Height is estimated from
/// character-width wrapping of the message and description, plus one row
/// each for the progress bar and the confirm controls when present. The
/// estimate errs low for pathological word-wrap cases; rendering clips to
/// the returned rect either way.
///
/// # Arguments
///
/// * `toast` - The toast to size
/// * `frame_area` - The frame the card must fit inside
/// * `max_width` - Configured upper bound on card width
///
/// # Returns
///
/// A `(width, height)` tuple in cells, clamped to the frame.
pub fn calculate_size(toast: &Toast, frame_area: Rect, max_width: u16) -> (u16, u16) {
	if frame_area.width == 0 || frame_area.height == 0 {
		return (0, 0);
	}

	let cap = max_width.min(frame_area.width).max(MIN_WIDTH.min(frame_area.width));

	let content_width = content_lines(toast)
		.map(|line| Line::raw(line).width() as u16)
		.max()
		.unwrap_or(0)
		.max(extra_row_width(toast));

	let width = content_width.saturating_add(H_CHROME).clamp(MIN_WIDTH.min(cap), cap);
	let inner = width.saturating_sub(H_CHROME).max(1);

	let mut rows = wrapped_rows(toast.message(), inner);
	if let Some(description) = toast.description() {
		rows = rows.saturating_add(wrapped_rows(description, inner));
	}
	if toast.progress().is_some() {
		rows = rows.saturating_add(1);
	}
	if toast.action_labels().is_some() {
		rows = rows.saturating_add(1);
	}

	let height = rows.saturating_add(V_CHROME).min(frame_area.height);
	(width, height)
}

fn content_lines(toast: &Toast) -> impl Iterator<Item = &str> + '_ {
	toast
		.message()
		.lines()
		.chain(toast.description().into_iter().flat_map(str::lines))
}

/// Minimum width demanded by the single-row extras (progress bar, confirm
/// controls).
fn extra_row_width(toast: &Toast) -> u16 {
	let mut width = 0u16;
	if toast.progress().is_some() {
		// bar plus " 100%" label
		width = width.max(16);
	}
	if let Some((confirm, cancel)) = toast.action_labels() {
		let controls = format!("[Enter] {confirm}  [Esc] {cancel}");
		width = width.max(Line::raw(controls.as_str()).width() as u16);
	}
	width
}

fn wrapped_rows(text: &str, inner_width: u16) -> u16 {
	let mut rows = 0u16;
	for line in text.lines() {
		let line_width = Line::raw(line).width() as u16;
		rows = rows.saturating_add(line_width.max(1).div_ceil(inner_width));
	}
	rows.max(1)
}
