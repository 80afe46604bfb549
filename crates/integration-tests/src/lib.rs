//! Integration tests for VetCare.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vetcare-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart store semantics against the file-backed snapshot
//!   store, including reload round-trips
//! - `site_flows` - Catalog-to-cart flows, contact validation, and
//!   rendering

#![cfg_attr(not(test), forbid(unsafe_code))]

use tempfile::TempDir;
use vetcare_cart::{CartStore, FileStore, NullRenderer};

/// A cart store backed by a throwaway data directory.
///
/// Each [`TestStore::open`] call hydrates a fresh `CartStore` from the same
/// directory, which is how tests exercise persist-reload round-trips.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    /// Create a new throwaway data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        #[allow(clippy::unwrap_used)]
        let dir = TempDir::new().unwrap();
        Self { dir }
    }

    /// Hydrate a cart store from this directory's snapshot.
    #[must_use]
    pub fn open(&self) -> CartStore<FileStore, NullRenderer> {
        CartStore::load(FileStore::new(self.dir.path()), NullRenderer)
    }

    /// Raw contents of the snapshot file, if it has been written.
    #[must_use]
    pub fn raw_snapshot(&self) -> Option<String> {
        let path = self
            .dir
            .path()
            .join(format!("{}.json", vetcare_cart::STORAGE_KEY));
        std::fs::read_to_string(path).ok()
    }

    /// Overwrite the snapshot file with arbitrary bytes.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_raw_snapshot(&self, contents: &str) {
        let path = self
            .dir
            .path()
            .join(format!("{}.json", vetcare_cart::STORAGE_KEY));
        #[allow(clippy::unwrap_used)]
        std::fs::write(path, contents).unwrap();
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}
