/// Answer to a confirm-style toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
	/// The accept control was triggered.
	Confirmed,

	/// The cancel control was triggered.
	Cancelled,
}
