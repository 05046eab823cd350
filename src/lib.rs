//! # Ratatui Toasts
//!
//! Toast notification center for [ratatui](https://ratatui.rs) terminal applications.
//!
//! A [`ToastCenter`] owns a stack of short-lived messages: each toast
//! enters, stays visible until its countdown lapses or it is dismissed,
//! plays a fixed exit transition, and is dropped from tracking. The stack
//! holds at most a configured number of visible toasts and evicts the
//! oldest beyond that.
//!
//! ## Features
//!
//! - **Levels**: Success, Error, Warning, Info with distinct icons/colors
//! - **Auto-dismiss**: configurable countdown; zero means persistent
//! - **Confirm flow**: persistent accept/cancel toasts with exactly-once
//!   callbacks
//! - **De-duplication**: tag-based replace for progress/status updates
//! - **Sanitized input**: ANSI escapes in untrusted messages never reach
//!   the terminal
//! - **Process-wide access**: lazily-initialized [`global`] functions for
//!   call sites that hold no center reference
//!
//! ## Quick Start
//!
//! ```
//! use ratatui_toasts::{Level, ToastCenter};
//!
//! let mut toasts = ToastCenter::new();
//! let handle = toasts.show("Order accepted", Level::Success);
//! assert!(handle.is_some());
//!
//! // In the host event loop:
//! // toasts.tick(frame_delta);
//! // toasts.render(&mut frame, frame.area());
//! ```
//!
//! ## Confirm flow
//!
//! ```
//! use ratatui_toasts::{ConfirmChoice, ToastCenter};
//!
//! let mut toasts = ToastCenter::new();
//! let handle = toasts
//!     .confirm("Decline order?", Box::new(|| println!("declined")), None)
//!     .expect("non-empty message");
//!
//! // Forward key events with `toasts.handle_key(key)`, or answer directly:
//! toasts.respond(handle, ConfirmChoice::Confirmed);
//! ```

pub mod toasts;

pub(crate) mod shared_utils;

// Re-export the public API at the crate root for ergonomic imports
pub use toasts::{
	age_of, format_age, level_icon, sanitize_message, Anchor, AutoDismiss, ConfirmChoice,
	ConfirmOptions, Level, Phase, ShowOptions, Toast, ToastBuilder, ToastCallback, ToastCenter,
	ToastConfig, ToastError, ToastHandle, MAX_DESCRIPTION_BYTES, MAX_MESSAGE_BYTES,
};

/// Process-wide toast functions; see [`toasts::orc_global`].
pub use toasts::orc_global as global;
