pub mod file;
pub mod string;

// Re-export common utilities
pub use string::{strip_after, trim_blanks, trim_blanks_end, trim_blanks_start};
