pub mod fnc_ease;

pub use fnc_ease::ease_out;
