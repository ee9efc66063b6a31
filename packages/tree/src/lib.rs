//! inmemfs tree: a transient, path-addressable file tree.
//!
//! Everything lives in memory and disappears with the owning value:
//! - `Path`: `/`-delimited path with surrounding slashes ignored
//! - `Directory`: name-to-node mapping with path resolution
//! - `File`: growable byte buffer with a cursor and derived size
//! - `Node`: either of the above
//! - `Tree`: a root directory addressed with plain strings
//!
//! Resolution walks a path one component at a time from the root. In
//! create mode, missing intermediate components become directories and a
//! missing final component becomes an empty file.
//!
//! # Example
//!
//! ```rust
//! use inmemfs_tree::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Opening for write creates the file and its parents
//! tree.open("media/avatars/alice.png", "wb").unwrap();
//! assert!(tree.exists("media/avatars"));
//!
//! // Opening for read does not
//! assert!(matches!(tree.open("media/missing.png", "rb"), Err(Error::PathNotFound { .. })));
//! ```

mod directory;
mod error;
mod file;
mod mode;
mod node;
mod path;
mod tree;

pub use directory::{Directory, Listing};
pub use error::Error;
pub use file::File;
pub use mode::OpenMode;
pub use node::{Node, NodeKind, NodeMut, NodeRef};
pub use path::Path;
pub use tree::Tree;
