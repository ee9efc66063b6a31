//! Storage backed by a transient in-memory tree.

use std::io::Read;

use chrono::{DateTime, Utc};
use inmemfs_tree::{Error as TreeError, File, Listing, NodeRef, OpenMode, Path, Tree};
use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::traits::Storage;
use crate::uri::BaseUrl;

/// A [`Storage`] whose files live only in memory.
///
/// Nothing is persisted: dropping the storage drops every file in it.
///
/// # Example
///
/// ```rust
/// use inmemfs_storage::{InMemoryStorage, Storage};
///
/// let mut storage = InMemoryStorage::with_base_url("http://www.example.com").unwrap();
///
/// let name = storage.save_bytes("avatars/alice.png", b"\x89PNG").unwrap();
/// assert_eq!(storage.size(&name).unwrap(), 4);
/// assert_eq!(storage.url(&name).unwrap(), "http://www.example.com/avatars/alice.png");
///
/// // Relative bases work too
/// let storage = InMemoryStorage::with_base_url("/media/").unwrap();
/// assert_eq!(storage.url("file0").unwrap(), "/media/file0");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    tree: Tree,
    base_url: Option<BaseUrl>,
}

impl InMemoryStorage {
    /// Create an empty storage with no base URL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty storage that serves URLs under `base_url`.
    pub fn with_base_url(base_url: &str) -> Result<Self, StorageError> {
        Self::from_config(&StorageConfig::with_base_url(base_url))
    }

    /// Create an empty storage from configuration.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let base_url = config
            .base_url
            .as_deref()
            .map(|url| {
                BaseUrl::parse(url).map_err(|source| StorageError::InvalidBaseUrl {
                    url: url.to_string(),
                    source,
                })
            })
            .transpose()?;

        match &base_url {
            Some(url) => log::debug!("Serving stored files under {}", url),
            None => log::debug!("No base URL configured, files will not have URLs"),
        }

        Ok(Self::with_tree(Tree::new(), base_url))
    }

    /// Serve an existing tree.
    pub fn with_tree(tree: Tree, base_url: Option<BaseUrl>) -> Self {
        Self { tree, base_url }
    }

    pub fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn into_tree(self) -> Tree {
        self.tree
    }

    fn file(&self, name: &str) -> Result<&File, StorageError> {
        match self.tree.resolve(name)? {
            NodeRef::File(file) => Ok(file),
            NodeRef::Directory(_) => Err(TreeError::IsADirectory {
                path: Path::parse(name),
            }
            .into()),
        }
    }
}

impl Storage for InMemoryStorage {
    fn open(&mut self, name: &str, mode: OpenMode) -> Result<&mut File, StorageError> {
        Ok(self.tree.open(name, mode)?)
    }

    fn save(&mut self, name: &str, content: &mut dyn Read) -> Result<String, StorageError> {
        let mut bytes = Vec::new();
        content.read_to_end(&mut bytes)?;
        Ok(self.tree.save(name, &bytes)?)
    }

    fn delete(&mut self, name: &str) -> Result<(), StorageError> {
        self.tree.delete(name)?;
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.tree.exists(name)
    }

    fn size(&mut self, name: &str) -> Result<u64, StorageError> {
        Ok(self.tree.size(name)?)
    }

    fn listdir(&self, name: &str) -> Result<Listing, StorageError> {
        Ok(self.tree.listdir(name)?)
    }

    fn url(&self, name: &str) -> Result<String, StorageError> {
        let base = self.base_url.as_ref().ok_or(StorageError::NoBaseUrl)?;
        Ok(base.join(name)?)
    }

    fn created_time(&self, name: &str) -> Result<DateTime<Utc>, StorageError> {
        Ok(self.file(name)?.created())
    }

    fn modified_time(&self, name: &str) -> Result<DateTime<Utc>, StorageError> {
        Ok(self.file(name)?.modified())
    }

    fn accessed_time(&self, name: &str) -> Result<DateTime<Utc>, StorageError> {
        Ok(self.file(name)?.accessed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inmemfs_tree::Directory;
    use std::io::Write;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn url_without_base_fails() {
        let storage = InMemoryStorage::new();
        assert!(matches!(storage.url("file0"), Err(StorageError::NoBaseUrl)));
    }

    #[test]
    fn url_with_base() {
        let storage = InMemoryStorage::with_base_url("http://www.example.com").unwrap();
        assert_eq!(
            storage.url("file0").unwrap(),
            "http://www.example.com/file0"
        );
    }

    #[test]
    fn url_does_not_need_the_file() {
        let storage = InMemoryStorage::with_base_url("http://www.example.com/media/").unwrap();
        assert!(!storage.exists("not/saved yet"));
        assert_eq!(
            storage.url("not/saved yet").unwrap(),
            "http://www.example.com/media/not/saved%20yet"
        );
    }

    #[test]
    fn url_with_relative_base() {
        let storage = InMemoryStorage::with_base_url("/media/").unwrap();
        assert!(!storage.base_url().unwrap().is_absolute());
        assert_eq!(storage.url("file0").unwrap(), "/media/file0");
        assert_eq!(storage.url("dir/a b").unwrap(), "/media/dir/a%20b");
    }

    #[test]
    fn url_with_empty_base() {
        let storage = InMemoryStorage::with_base_url("").unwrap();
        assert_eq!(storage.url("file0").unwrap(), "file0");
    }

    #[test]
    fn invalid_base_url_rejected() {
        assert!(matches!(
            InMemoryStorage::with_base_url("http://[::1"),
            Err(StorageError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn from_config() {
        let storage = InMemoryStorage::from_config(&StorageConfig::default()).unwrap();
        assert!(storage.base_url().is_none());

        let config = StorageConfig::with_base_url("https://cdn.example.com/");
        let storage = InMemoryStorage::from_config(&config).unwrap();
        assert_eq!(storage.base_url().unwrap().to_string(), "https://cdn.example.com/");
        assert!(storage.base_url().unwrap().is_absolute());
    }

    #[test]
    fn with_tree_serves_existing_files() {
        let mut root = Directory::new();
        root.add_child("file0", File::with_content("test"));

        let mut storage = InMemoryStorage::with_tree(Tree::with_root(root), None);
        assert!(storage.exists("file0"));
        assert_eq!(storage.size("file0").unwrap(), 4);
        assert_eq!(storage.into_tree().ls("").unwrap(), vec!["file0"]);
    }

    #[test]
    fn save_reads_whole_stream() {
        let mut storage = InMemoryStorage::new();
        let mut content: &[u8] = b"test";
        assert_eq!(storage.save("file", &mut content).unwrap(), "file");
        assert_eq!(storage.size("file").unwrap(), 4);

        storage.save_bytes("subdir/file", b"test").unwrap();
        assert_eq!(storage.size("subdir/file").unwrap(), 4);
    }

    #[test]
    fn open_and_write() {
        let mut storage = InMemoryStorage::new();
        storage
            .open("file", OpenMode::Write)
            .unwrap()
            .write_all(b"hello")
            .unwrap();

        let mut out = String::new();
        storage
            .open("file", OpenMode::Read)
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn delete_and_exists() {
        let mut storage = InMemoryStorage::new();
        storage.tree_mut().root_mut().add_child("file0", File::new());
        assert!(storage.exists("file0"));
        assert!(!storage.exists("file1"));

        storage.delete("file0").unwrap();
        assert!(!storage.exists("file0"));
        assert!(storage.delete("file0").unwrap_err().is_not_found());
    }

    #[test]
    fn modified_time_advances() {
        let mut storage = InMemoryStorage::new();
        storage.save_bytes("file", b"test").unwrap();
        let modified = storage.modified_time("file").unwrap();

        storage.delete("file").unwrap();
        sleep(Duration::from_millis(20));

        storage.save_bytes("file", b"test-again").unwrap();
        assert!(storage.modified_time("file").unwrap() > modified);
    }

    #[test]
    fn accessed_time_advances_on_open() {
        let mut storage = InMemoryStorage::new();
        storage.save_bytes("file", b"test").unwrap();

        storage.open("file", OpenMode::Read).unwrap();
        let accessed = storage.accessed_time("file").unwrap();

        sleep(Duration::from_millis(20));

        storage.open("file", OpenMode::Read).unwrap();
        assert!(storage.accessed_time("file").unwrap() > accessed);
    }

    #[test]
    fn created_time_is_stable() {
        let mut storage = InMemoryStorage::new();
        storage.save_bytes("file", b"test").unwrap();
        let created = storage.created_time("file").unwrap();

        sleep(Duration::from_millis(20));

        storage.open("file", OpenMode::Read).unwrap();
        assert_eq!(storage.created_time("file").unwrap(), created);

        storage
            .open("file", OpenMode::Write)
            .unwrap()
            .write_all(b"test-test-test")
            .unwrap();
        storage.save_bytes("file", b"test-test-test").unwrap();
        assert_eq!(storage.created_time("file").unwrap(), created);
    }

    #[test]
    fn times_of_directory_fail() {
        let mut storage = InMemoryStorage::new();
        storage.save_bytes("dir/file", b"").unwrap();
        assert!(matches!(
            storage.created_time("dir"),
            Err(StorageError::Tree(TreeError::IsADirectory { .. }))
        ));
        assert!(storage.modified_time("missing").unwrap_err().is_not_found());
    }
}
