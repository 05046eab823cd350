pub mod cls_toast;
pub mod cls_toast_center;
pub mod cls_toast_state;

pub use cls_toast::{Toast, ToastBuilder, MAX_DESCRIPTION_BYTES, MAX_MESSAGE_BYTES};
pub use cls_toast_center::{ConfirmOptions, ShowOptions, ToastCenter, ToastConfig, ToastHandle};
pub use cls_toast_state::ToastCallback;
pub(crate) use cls_toast_state::ToastState;
