//! Directories and path resolution.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::file::File;
use crate::mode::OpenMode;
use crate::node::{Node, NodeMut, NodeRef};
use crate::path::Path;

/// The children of a directory, partitioned by kind.
///
/// Names are sorted within each list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

impl From<Listing> for (Vec<String>, Vec<String>) {
    fn from(listing: Listing) -> Self {
        (listing.directories, listing.files)
    }
}

/// A directory: a mapping from names to child nodes.
///
/// Every operation takes a [`Path`] relative to this directory. Resolution
/// walks one component at a time and, in create mode, materializes missing
/// intermediate components as directories and a missing final component as
/// an empty file. An existing node always wins over creating a new one, and
/// nothing is ever overwritten by resolution.
///
/// Creation is not transactional: directories made on the way down stay
/// in place whatever happens afterwards.
///
/// # Example
///
/// ```rust
/// use inmemfs_tree::{path, Directory};
///
/// let mut root = Directory::new();
/// root.save(&path!("dir/subdir/file"), b"testing").unwrap();
///
/// let listing = root.listdir(&path!("dir")).unwrap();
/// assert_eq!(listing.directories, vec!["subdir"]);
/// assert_eq!(root.size(&path!("dir/subdir/file")).unwrap(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Directory {
    children: BTreeMap<String, Node>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `child` under `name`, returning any node it replaces.
    pub fn add_child(&mut self, name: impl Into<String>, child: impl Into<Node>) -> Option<Node> {
        let name = name.into();
        let mut child = child.into();
        if let Node::File(file) = &mut child {
            file.set_name(&name);
        }
        self.children.insert(name, child)
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    /// Detach the child stored under `name`.
    pub fn remove_child(&mut self, name: &str) -> Option<Node> {
        self.children.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Resolve `path` without creating anything.
    ///
    /// The root path resolves to `self`.
    pub fn resolve(&self, path: &Path) -> Result<NodeRef<'_>, Error> {
        let Some(name) = path.name() else {
            return Ok(NodeRef::Directory(self));
        };

        let parent = self.descend(path, path.len() - 1)?;
        parent
            .children
            .get(name)
            .map(NodeRef::from)
            .ok_or_else(|| Error::PathNotFound { path: path.clone() })
    }

    /// Resolve `path`, creating missing components when `create` is set.
    pub fn resolve_mut(&mut self, path: &Path, create: bool) -> Result<NodeMut<'_>, Error> {
        log::trace!("Resolving {:?} (create: {})", path.to_string(), create);

        let Some(name) = path.name() else {
            return Ok(NodeMut::Directory(self));
        };

        let parent = self.descend_mut(path, path.len() - 1, create)?;
        let node = match parent.children.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) if create => {
                log::debug!("Creating file {}...", path);
                entry.insert(Node::File(File::named(name)))
            }
            Entry::Vacant(_) => return Err(Error::PathNotFound { path: path.clone() }),
        };

        Ok(NodeMut::from(node))
    }

    /// Walk the first `len` components of `path`, all of which must be directories.
    fn descend(&self, path: &Path, len: usize) -> Result<&Directory, Error> {
        let mut current = self;
        for (depth, name) in path.components[..len].iter().enumerate() {
            current = match current.children.get(name) {
                Some(Node::Directory(dir)) => dir,
                Some(Node::File(_)) => {
                    return Err(Error::NotADirectory {
                        path: path.prefix(depth + 1),
                    })
                }
                None => return Err(Error::PathNotFound { path: path.clone() }),
            };
        }
        Ok(current)
    }

    fn descend_mut(&mut self, path: &Path, len: usize, create: bool) -> Result<&mut Directory, Error> {
        let mut current = self;
        for (depth, name) in path.components[..len].iter().enumerate() {
            let node = match current.children.entry(name.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) if create => {
                    log::debug!("Creating directory {}...", path.prefix(depth + 1));
                    entry.insert(Node::Directory(Directory::new()))
                }
                Entry::Vacant(_) => return Err(Error::PathNotFound { path: path.clone() }),
            };
            current = match node {
                Node::Directory(dir) => dir,
                Node::File(_) => {
                    return Err(Error::NotADirectory {
                        path: path.prefix(depth + 1),
                    })
                }
            };
        }
        Ok(current)
    }

    /// Names of every child of the directory at `path`.
    pub fn ls(&self, path: &Path) -> Result<Vec<String>, Error> {
        let dir = self.descend(path, path.len())?;
        Ok(dir.children.keys().cloned().collect())
    }

    /// Children of the directory at `path`, split into directories and files.
    pub fn listdir(&self, path: &Path) -> Result<Listing, Error> {
        let dir = self.descend(path, path.len())?;
        let mut listing = Listing::default();
        for (name, child) in &dir.children {
            match child {
                Node::Directory(_) => listing.directories.push(name.clone()),
                Node::File(_) => listing.files.push(name.clone()),
            }
        }
        Ok(listing)
    }

    /// Remove the node at `path` from its parent and hand it back.
    ///
    /// Removing a directory takes its whole subtree with it. The root has
    /// no parent and cannot be deleted.
    pub fn delete(&mut self, path: &Path) -> Result<Node, Error> {
        let Some(name) = path.name() else {
            return Err(Error::RootDeletion);
        };

        let parent = self.descend_mut(path, path.len() - 1, false)?;
        let node = parent
            .children
            .remove(name)
            .ok_or_else(|| Error::PathNotFound { path: path.clone() })?;

        log::debug!("Deleted {} {}", node.kind(), path);
        Ok(node)
    }

    /// Whether anything lives at `path`.
    pub fn exists(&self, path: &Path) -> bool {
        match self.resolve(path) {
            Ok(_) => true,
            Err(err) => {
                debug_assert!(err.is_not_found());
                false
            }
        }
    }

    /// Size in bytes of the file at `path`.
    pub fn size(&mut self, path: &Path) -> Result<u64, Error> {
        match self.resolve_mut(path, false)? {
            NodeMut::File(file) => Ok(file.size()?),
            NodeMut::Directory(_) => Err(Error::IsADirectory { path: path.clone() }),
        }
    }

    /// Open the file at `path` with its cursor at the start.
    ///
    /// [`OpenMode::Write`] creates the file and any missing parents;
    /// [`OpenMode::Read`] fails with [`Error::PathNotFound`] instead.
    /// Existing content is kept either way.
    pub fn open(&mut self, path: &Path, mode: OpenMode) -> Result<&mut File, Error> {
        match self.resolve_mut(path, mode.creates())? {
            NodeMut::File(file) => {
                file.open();
                Ok(file)
            }
            NodeMut::Directory(_) => Err(Error::IsADirectory { path: path.clone() }),
        }
    }

    /// Replace the content of the file at `path`, creating it if needed.
    ///
    /// Unlike [`Directory::open`], bytes past the end of `content` are cut
    /// off, so a shorter save leaves nothing of the old file behind.
    /// Returns `path` so calls can be chained.
    pub fn save(&mut self, path: &Path, content: &[u8]) -> Result<Path, Error> {
        let file = self.open(path, OpenMode::Write)?;
        file.write_all(content)?;
        file.truncate();
        file.close();

        log::debug!("Saved {} bytes to {}", content.len(), path);
        Ok(path.clone())
    }
}
