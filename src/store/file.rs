//! Linking a store to a file on disk
//!
//! A store is unlinked until [`IniStore::open`] (or [`IniStore::set_filename`])
//! gives it a path. [`IniStore::sync`] writes to that path; with auto-sync
//! enabled, [`IniStore::close`] and dropping the store sync first.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, error};

use super::IniStore;
use crate::error::{FileError, IniError};
use crate::utils::file::{create_writer, open_reader};

impl IniStore {
    /// Create a store linked to `path`, reading it if it exists
    pub fn with_file<P: Into<PathBuf>>(path: P, auto_sync: bool) -> Result<Self, IniError> {
        let mut store = IniStore::new();
        store.open(path, auto_sync, false)?;
        Ok(store)
    }

    /// Read the file at `path` and link it to this store
    ///
    /// The path and auto-sync flag are recorded even when the file can't be
    /// read, so a later [`IniStore::sync`] creates it. A readable file
    /// replaces the current content; format errors in it are reported unless
    /// `ignore_errors` is set. On such an error the previous content is kept
    /// and auto-sync is switched off, leaving the file untouched.
    pub fn open<P: Into<PathBuf>>(
        &mut self,
        path: P,
        auto_sync: bool,
        ignore_errors: bool,
    ) -> Result<(), IniError> {
        self.set_filename(path);
        self.auto_sync = auto_sync;

        let Some(path) = self.filename.clone() else {
            return Ok(());
        };

        match open_reader(&path) {
            Some(reader) => {
                debug!("Reading ini file {}", path.display());
                let previous = std::mem::take(&mut self.data);
                if let Err(err) = self.read(reader, ignore_errors) {
                    // A partial read must never be synced over the file
                    self.data = previous;
                    self.auto_sync = false;
                    return Err(err);
                }
                Ok(())
            }
            None => {
                debug!("Ini file {} is not readable, linking it anyway", path.display());
                Ok(())
            }
        }
    }

    /// Write the content to the linked file, truncating it
    pub fn sync(&self) -> Result<(), IniError> {
        let path = self.filename.as_deref().ok_or(FileError::NotLinked)?;

        let mut writer = create_writer(path).map_err(|source| FileError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.write(&mut writer)?;
        writer.flush()?;

        debug!("Synced ini file {}", path.display());
        Ok(())
    }

    /// Sync if auto-sync is on, then reset to an empty, unlinked store
    ///
    /// When the sync fails the error is returned and nothing is reset.
    pub fn close(&mut self) -> Result<(), IniError> {
        if self.auto_sync && self.filename.is_some() {
            self.sync()?;
        }

        self.data.clear();
        self.filename = None;
        self.auto_sync = false;
        Ok(())
    }

    /// The linked file. Reading a file through [`IniStore::read`] doesn't link it.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Link a file without reading it; an empty path unlinks
    pub fn set_filename<P: Into<PathBuf>>(&mut self, path: P) {
        let path = path.into();
        self.filename = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        };
    }

    pub fn auto_sync_enabled(&self) -> bool {
        self.auto_sync
    }

    pub fn enable_auto_sync(&mut self, enable: bool) {
        self.auto_sync = enable;
    }
}

impl Drop for IniStore {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            error!("Failed to sync ini store on drop: {}", err);
        }
    }
}
