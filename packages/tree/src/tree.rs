//! String-path facade over a root directory.

use crate::directory::{Directory, Listing};
use crate::error::Error;
use crate::file::File;
use crate::mode::OpenMode;
use crate::node::{Node, NodeMut, NodeRef};
use crate::path::Path;

/// A transient file tree addressed by `/`-delimited strings.
///
/// `Tree` owns the root [`Directory`] and parses each path before handing
/// it down. All state lives in memory and disappears with the value.
///
/// Mutating operations take `&mut self`, so the tree cannot be changed
/// concurrently without external synchronization. To share one tree between
/// threads, put it behind a `Mutex`.
///
/// # Example
///
/// ```rust
/// use std::io::Read;
/// use inmemfs_tree::Tree;
///
/// let mut tree = Tree::new();
/// assert_eq!(tree.save("dir/subdir/file", b"testing").unwrap(), "dir/subdir/file");
/// assert_eq!(tree.listdir("").unwrap().directories, vec!["dir"]);
/// assert_eq!(tree.size("dir/subdir/file").unwrap(), 7);
///
/// let mut body = String::new();
/// tree.open("dir/subdir/file", "r").unwrap().read_to_string(&mut body).unwrap();
/// assert_eq!(body, "testing");
///
/// tree.delete("dir/subdir/file").unwrap();
/// assert!(tree.listdir("dir/subdir").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tree {
    root: Directory,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing directory as the root of a tree.
    pub fn with_root(root: Directory) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Directory {
        &mut self.root
    }

    pub fn into_root(self) -> Directory {
        self.root
    }

    pub fn resolve(&self, path: &str) -> Result<NodeRef<'_>, Error> {
        self.root.resolve(&Path::parse(path))
    }

    pub fn resolve_mut(&mut self, path: &str, create: bool) -> Result<NodeMut<'_>, Error> {
        self.root.resolve_mut(&Path::parse(path), create)
    }

    pub fn ls(&self, path: &str) -> Result<Vec<String>, Error> {
        self.root.ls(&Path::parse(path))
    }

    pub fn listdir(&self, path: &str) -> Result<Listing, Error> {
        self.root.listdir(&Path::parse(path))
    }

    pub fn delete(&mut self, path: &str) -> Result<Node, Error> {
        self.root.delete(&Path::parse(path))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.root.exists(&Path::parse(path))
    }

    pub fn size(&mut self, path: &str) -> Result<u64, Error> {
        self.root.size(&Path::parse(path))
    }

    /// Open a file. `mode` is an [`OpenMode`] or a mode string like `"rb"`.
    pub fn open<M>(&mut self, path: &str, mode: M) -> Result<&mut File, Error>
    where
        M: TryInto<OpenMode>,
        Error: From<M::Error>,
    {
        let mode = mode.try_into()?;
        self.root.open(&Path::parse(path), mode)
    }

    /// Store `content` at `path` and echo `path` back unchanged.
    pub fn save(&mut self, path: &str, content: &[u8]) -> Result<String, Error> {
        self.root.save(&Path::parse(path), content)?;
        Ok(path.to_string())
    }
}
