use std::fmt;
use std::io::Write;

use super::IniStore;
use crate::error::IniError;

impl IniStore {
    /// Write the content to `writer`, formatted as an INI document
    ///
    /// The writer is neither flushed nor closed.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), IniError> {
        write!(writer, "{}", self)?;
        Ok(())
    }
}

/// Every section is followed by one blank line, empty ones included. The
/// `""` section is written without a header.
impl fmt::Display for IniStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, items) in self.data.iter() {
            if !name.is_empty() {
                writeln!(f, "[{}]", name)?;
            }
            for (key, value) in items.iter() {
                writeln!(f, "{} = {}", key, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
