//! inmemfs: a transient, path-addressable file tree.
//!
//! The tree lives entirely in memory. Files and directories are created by
//! resolving `/`-delimited paths, and everything is gone once the owning
//! value is dropped. `inmemfs-storage` wraps the tree in the small
//! open/save/delete/exists/size/listdir/url contract that web frameworks
//! expect from a file storage backend.
//!
//! ```rust
//! use inmemfs::{InMemoryStorage, Storage};
//!
//! let mut storage = InMemoryStorage::new();
//! assert_eq!(storage.save_bytes("dir/subdir/file", b"testing").unwrap(), "dir/subdir/file");
//! assert_eq!(storage.listdir("").unwrap().directories, vec!["dir"]);
//! ```

pub use inmemfs_storage as storage;
pub use inmemfs_tree as tree;

pub use inmemfs_storage::{BaseUrl, InMemoryStorage, Storage, StorageConfig, StorageError};
pub use inmemfs_tree::{
    path, Directory, Error, File, Listing, Node, NodeKind, NodeMut, NodeRef, OpenMode, Path, Tree,
};
