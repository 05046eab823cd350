/// Screen corner the toast stack grows from.
///
/// Toasts are placed at the anchor corner in call order and stack away
/// from it (upward for bottom anchors, downward for top anchors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Anchor {
	/// Top-left corner, stacking downward.
	TopLeft,

	/// Top-right corner, stacking downward.
	TopRight,

	/// Bottom-left corner, stacking upward.
	BottomLeft,

	/// Bottom-right corner (default), stacking upward.
	#[default]
	BottomRight,
}

impl Anchor {
	pub(crate) fn is_bottom(self) -> bool {
		matches!(self, Self::BottomLeft | Self::BottomRight)
	}

	pub(crate) fn is_right(self) -> bool {
		matches!(self, Self::TopRight | Self::BottomRight)
	}
}
