//! Tree nodes: every entry is either a file or a directory.

use std::fmt;

use crate::directory::Directory;
use crate::file::File;

/// The two kinds of node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Directory,
    File,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Directory => write!(f, "directory"),
            NodeKind::File => write!(f, "file"),
        }
    }
}

/// An owned entry in a directory.
///
/// A node's name is the key it is stored under in its parent. Nodes are
/// owned by their parent directory, so removing an entry drops the whole
/// subtree beneath it.
#[derive(Debug, Clone)]
pub enum Node {
    Directory(Directory),
    File(File),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory(_) => NodeKind::Directory,
            Node::File(_) => NodeKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == NodeKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut File> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }

    pub fn as_dir(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_dir_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

/// A shared borrow of a resolved node.
///
/// Resolution can land on the directory it started from (the empty path),
/// which is not stored in any [`Node`], so results are borrowed views.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Directory(&'a Directory),
    File(&'a File),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Directory(_) => NodeKind::Directory,
            NodeRef::File(_) => NodeKind::File,
        }
    }

    pub fn as_file(self) -> Option<&'a File> {
        match self {
            NodeRef::File(file) => Some(file),
            NodeRef::Directory(_) => None,
        }
    }

    pub fn as_dir(self) -> Option<&'a Directory> {
        match self {
            NodeRef::Directory(dir) => Some(dir),
            NodeRef::File(_) => None,
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Directory(dir) => NodeRef::Directory(dir),
            Node::File(file) => NodeRef::File(file),
        }
    }
}

/// An exclusive borrow of a resolved node.
#[derive(Debug)]
pub enum NodeMut<'a> {
    Directory(&'a mut Directory),
    File(&'a mut File),
}

impl<'a> NodeMut<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeMut::Directory(_) => NodeKind::Directory,
            NodeMut::File(_) => NodeKind::File,
        }
    }

    pub fn into_file(self) -> Option<&'a mut File> {
        match self {
            NodeMut::File(file) => Some(file),
            NodeMut::Directory(_) => None,
        }
    }

    pub fn into_dir(self) -> Option<&'a mut Directory> {
        match self {
            NodeMut::Directory(dir) => Some(dir),
            NodeMut::File(_) => None,
        }
    }
}

impl<'a> From<&'a mut Node> for NodeMut<'a> {
    fn from(node: &'a mut Node) -> Self {
        match node {
            Node::Directory(dir) => NodeMut::Directory(dir),
            Node::File(file) => NodeMut::File(file),
        }
    }
}
