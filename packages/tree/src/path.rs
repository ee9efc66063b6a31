//! Slash-delimited tree paths.

use std::fmt;

/// A normalized path into the tree.
///
/// Paths are `/`-delimited. Leading, trailing and repeated slashes carry no
/// meaning, so `"/a//b/"` and `"a/b"` name the same node. The empty path (and
/// `"/"`) names the root directory.
///
/// Unlike a real filesystem path, components are not validated: any
/// non-empty string without a `/` is a legal name.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub components: Vec<String>,
}

impl Path {
    /// Parse a path string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inmemfs_tree::Path;
    ///
    /// let path = Path::parse("dir/subdir/file");
    /// assert_eq!(path.len(), 3);
    ///
    /// // Surrounding slashes are ignored
    /// assert_eq!(Path::parse("/dir/subdir/"), Path::parse("dir/subdir"));
    ///
    /// // The empty path is the root
    /// assert!(Path::parse("/").is_root());
    /// ```
    pub fn parse(s: &str) -> Self {
        let components = s
            .split('/')
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
            .collect();

        Path { components }
    }

    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Check if this path names the root directory.
    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Alias for [`Path::is_root`].
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.components.iter()
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &Path) -> Path {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        Path { components }
    }

    /// The final component, or `None` for the root.
    pub fn name(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// Split into the final component and the path of its parent directory.
    ///
    /// Returns `None` for the root, which has no parent.
    pub fn split_last(&self) -> Option<(&str, Path)> {
        let (last, rest) = self.components.split_last()?;
        Some((last.as_str(), Path::from(rest)))
    }

    /// The first `len` components as a new path.
    pub fn prefix(&self, len: usize) -> Path {
        Path::from(&self.components[..len.min(self.components.len())])
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

impl std::ops::Index<usize> for Path {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.components[i]
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl From<&[String]> for Path {
    fn from(components: &[String]) -> Self {
        Path {
            components: components.to_vec(),
        }
    }
}

/// Shorthand for [`Path::parse`].
///
/// # Example
///
/// ```rust
/// use inmemfs_tree::path;
///
/// let p = path!("dir/subdir/file");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_paths() {
        assert_eq!(Path::parse("").len(), 0);
        assert_eq!(Path::parse("file").len(), 1);
        assert_eq!(Path::parse("dir/file").len(), 2);
        assert_eq!(Path::parse("dir/subdir/file").len(), 3);
    }

    #[test]
    fn normalize_slashes() {
        assert_eq!(Path::parse("dir/subdir/"), Path::parse("dir/subdir"));
        assert_eq!(Path::parse("dir//subdir"), Path::parse("dir/subdir"));
        assert_eq!(Path::parse("/dir/subdir"), Path::parse("dir/subdir"));
        assert_eq!(Path::parse("///"), Path::root());
    }

    #[test]
    fn any_name_is_a_component() {
        let p = path!("media/photo 1.jpg/.hidden/名前");
        assert_eq!(p.len(), 4);
        assert_eq!(&p[1], "photo 1.jpg");
        assert_eq!(&p[2], ".hidden");
    }

    #[test]
    fn split_last_separates_parent() {
        let p = path!("dir/subdir/file");
        let (name, parent) = p.split_last().unwrap();
        assert_eq!(name, "file");
        assert_eq!(parent, path!("dir/subdir"));

        let p = path!("file");
        let (name, parent) = p.split_last().unwrap();
        assert_eq!(name, "file");
        assert!(parent.is_root());

        assert!(Path::root().split_last().is_none());
    }

    #[test]
    fn prefix_clamps_to_length() {
        let p = path!("a/b/c");
        assert_eq!(p.prefix(0), Path::root());
        assert_eq!(p.prefix(2), path!("a/b"));
        assert_eq!(p.prefix(10), p);
    }

    #[test]
    fn join_and_display() {
        let p = path!("dir").join(&path!("subdir/file"));
        assert_eq!(p.to_string(), "dir/subdir/file");
        assert_eq!(Path::root().to_string(), "");
        assert_eq!(p.name(), Some("file"));
        assert_eq!(Path::root().name(), None);
    }
}
