pub mod fnc_calculate_rect;
pub mod fnc_calculate_size;
pub mod fnc_format_age;
pub mod fnc_resolve_styles;
pub mod fnc_sanitize_message;

pub use fnc_calculate_rect::calculate_rect;
pub use fnc_calculate_size::calculate_size;
pub use fnc_format_age::{age_of, format_age};
pub use fnc_resolve_styles::{level_icon, resolve_styles};
pub use fnc_sanitize_message::sanitize_message;
