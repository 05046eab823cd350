use ratatui::layout::Rect;

use crate::toasts::types::Anchor;

/// Calculates the final rectangular area for one card in the stack.
///
/// The card is aligned to the anchor corner, pushed `stack_offset` cells
/// away from it (up for bottom anchors, down for top anchors), inset by
/// `margin` from the frame edges, and shifted horizontally toward its
/// anchored side by `slide` while entering or leaving.
///
/// # Arguments
///
/// * `anchor` - Corner the stack grows from
/// * `frame_area` - The frame/screen area to place the card within
/// * `width` - Card width in cells
/// * `height` - Card height in cells
/// * `stack_offset` - Distance already occupied by earlier cards
/// * `margin` - Inset from the frame edges
/// * `slide` - Transition offset in `0.0..=1.0`; `0.0` is the resting
///   position, `1.0` is fully off the anchored edge
///
/// # Returns
///
/// The card `Rect`, clipped to the frame. The result can be empty when the
/// stack has outgrown the frame; callers skip drawing in that case.
pub fn calculate_rect(
	anchor: Anchor,
	frame_area: Rect,
	width: u16,
	height: u16,
	stack_offset: u16,
	margin: u16,
	slide: f32,
) -> Rect {
	if width == 0 || height == 0 {
		return Rect::default();
	}

	let width = width.min(frame_area.width);
	let height = height.min(frame_area.height);

	let mut x = if anchor.is_right() {
		frame_area.right().saturating_sub(margin).saturating_sub(width)
	} else {
		frame_area.x.saturating_add(margin)
	};

	let y = if anchor.is_bottom() {
		// An overgrown stack must fall off the edge, not wrap back in at
		// the top of the frame.
		let needed = u32::from(height) + u32::from(stack_offset) + u32::from(margin);
		if needed > u32::from(frame_area.height) {
			return Rect::default();
		}
		frame_area.bottom() - margin - height - stack_offset
	} else {
		frame_area.y.saturating_add(margin).saturating_add(stack_offset)
	};

	// Horizontal shift toward the anchored edge during enter/leave.
	let shift = (slide.clamp(0.0, 1.0) * f32::from(width.saturating_add(margin))) as u16;
	if anchor.is_right() {
		x = x.saturating_add(shift);
	} else {
		x = x.saturating_sub(shift);
	}

	Rect::new(x, y, width, height).intersection(frame_area)
}

#[cfg(test)]
mod tests {
	use super::*;

	const FRAME: Rect = Rect::new(0, 0, 80, 24);

	#[test]
	fn test_bottom_right_rests_in_the_corner() {
		let rect = calculate_rect(Anchor::BottomRight, FRAME, 20, 4, 0, 1, 0.0);
		assert_eq!(rect, Rect::new(59, 19, 20, 4));
	}

	#[test]
	fn test_top_left_rests_in_the_corner() {
		let rect = calculate_rect(Anchor::TopLeft, FRAME, 20, 4, 0, 1, 0.0);
		assert_eq!(rect, Rect::new(1, 1, 20, 4));
	}

	#[test]
	fn test_stack_offset_moves_away_from_the_anchor() {
		let first = calculate_rect(Anchor::BottomRight, FRAME, 20, 4, 0, 1, 0.0);
		let second = calculate_rect(Anchor::BottomRight, FRAME, 20, 4, 5, 1, 0.0);
		assert_eq!(second.y + 5, first.y);

		let first = calculate_rect(Anchor::TopRight, FRAME, 20, 4, 0, 1, 0.0);
		let second = calculate_rect(Anchor::TopRight, FRAME, 20, 4, 5, 1, 0.0);
		assert_eq!(second.y, first.y + 5);
	}

	#[test]
	fn test_full_slide_leaves_the_frame() {
		let rect = calculate_rect(Anchor::BottomRight, FRAME, 20, 4, 0, 1, 1.0);
		// clipped to whatever sliver still overlaps the frame
		assert!(rect.width < 20);
	}

	#[test]
	fn test_overgrown_stack_yields_empty_rect() {
		let rect = calculate_rect(Anchor::BottomRight, FRAME, 20, 4, 200, 1, 0.0);
		assert_eq!(rect.height, 0);
	}

	#[test]
	fn test_zero_size_yields_empty_rect() {
		let rect = calculate_rect(Anchor::BottomRight, FRAME, 0, 4, 0, 1, 0.0);
		assert_eq!(rect, Rect::default());
	}
}
