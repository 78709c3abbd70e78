//! Storage layer for wallet-cli
//!
//! The whole ledger lives in one JSON file: a single array of entry objects.
//! Every load reads the entire file and every save rewrites it in full;
//! there is no partial I/O.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use crate::error::WalletResult;
use crate::models::Entry;

/// Whole-file persistence boundary for the entry collection
///
/// Holds the path to the backing file; the collection itself is loaded and
/// saved wholesale, never cached here.
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the entire entry collection
    ///
    /// A missing file is an I/O error: callers are expected to
    /// [`initialize`](Self::initialize) first. Content that fails to decode
    /// is a fatal `CorruptStore` error; there is no auto-repair.
    pub fn load(&self) -> WalletResult<Vec<Entry>> {
        read_json(&self.path)
    }

    /// Overwrite the backing file with the full collection
    ///
    /// Always pass the complete desired state; this is a full-replace write,
    /// not an append.
    pub fn save(&self, entries: &[Entry]) -> WalletResult<()> {
        write_json_atomic(&self.path, &entries)
    }

    /// Reset the backing file to an empty collection
    ///
    /// Used for first-run setup, and by tests to reset state between runs.
    pub fn initialize(&self) -> WalletResult<()> {
        self.save(&[])
    }
}
