pub mod error;
pub mod store;
pub mod utils;

// Re-export the store and its error types for easier access
pub use error::{FileError, IniError};
pub use store::{IniStore, IniValue, Section, SectionMap};
