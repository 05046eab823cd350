pub mod anchor;
pub mod auto_dismiss;
pub mod confirm_choice;
pub mod error;
pub mod level;
pub mod phase;

pub use anchor::Anchor;
pub use auto_dismiss::AutoDismiss;
pub use confirm_choice::ConfirmChoice;
pub use error::ToastError;
pub use level::Level;
pub use phase::Phase;
