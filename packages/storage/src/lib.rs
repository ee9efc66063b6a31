//! # inmemfs-storage
//!
//! A named-file storage facade over an [`inmemfs_tree::Tree`].
//!
//! Hosting frameworks usually talk to file storage through a small
//! contract: open, save, delete, exists, size, listdir, and a public URL
//! for each name. [`Storage`] is that contract and [`InMemoryStorage`]
//! fulfils it without touching disk, which makes it a drop-in backend for
//! tests and throwaway environments.
//!
//! ```rust
//! use std::io::Read;
//! use inmemfs_storage::{InMemoryStorage, OpenMode, Storage};
//!
//! let mut storage = InMemoryStorage::new();
//! storage.save_bytes("dir/subdir/file", b"testing").unwrap();
//!
//! let mut body = String::new();
//! storage.open("dir/subdir/file", OpenMode::Read).unwrap().read_to_string(&mut body).unwrap();
//! assert_eq!(body, "testing");
//!
//! // No base URL was configured
//! assert!(storage.url("dir/subdir/file").is_err());
//! ```

mod config;
mod error;
mod memory;
mod traits;
pub mod uri;

pub use config::StorageConfig;
pub use error::StorageError;
pub use memory::InMemoryStorage;
pub use traits::Storage;
pub use uri::BaseUrl;

// Re-export tree types that appear in the storage API
pub use inmemfs_tree::{File, Listing, OpenMode, Tree};
