pub mod classes;
pub mod functions;
pub mod orc_global;
pub mod types;

pub use classes::{
	ConfirmOptions, ShowOptions, Toast, ToastBuilder, ToastCallback, ToastCenter, ToastConfig,
	ToastHandle, MAX_DESCRIPTION_BYTES, MAX_MESSAGE_BYTES,
};
pub use functions::{
	age_of, calculate_rect, calculate_size, format_age, level_icon, resolve_styles,
	sanitize_message,
};
pub use types::{Anchor, AutoDismiss, ConfirmChoice, Level, Phase, ToastError};
