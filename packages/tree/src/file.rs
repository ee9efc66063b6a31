//! In-memory file buffers.

use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use chrono::{DateTime, Utc};

/// A file living in the tree: a growable byte buffer with a cursor.
///
/// `File` implements [`Read`], [`Write`] and [`Seek`], so the usual I/O
/// adapters work on it directly. Writes overwrite bytes at the cursor and
/// extend the buffer when they run past its end.
///
/// The size is never cached. [`File::size`] seeks to the end of the buffer
/// and back, so it always reflects every write made since construction.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use inmemfs_tree::File;
///
/// let mut file = File::with_content("test");
/// assert_eq!(file.size().unwrap(), 4);
///
/// file.write_all(b"testing").unwrap();
/// assert_eq!(file.size().unwrap(), 7);
/// assert_eq!(file.contents(), b"testing");
/// ```
#[derive(Debug, Clone)]
pub struct File {
    name: String,
    buffer: Cursor<Vec<u8>>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    accessed: DateTime<Utc>,
}

impl File {
    /// Create an empty, unnamed file.
    pub fn new() -> Self {
        Self::with_content(Vec::new())
    }

    /// Create an unnamed file holding `content`, with the cursor at the start.
    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        let now = Utc::now();
        Self {
            name: String::new(),
            buffer: Cursor::new(content.into()),
            created: now,
            modified: now,
            accessed: now,
        }
    }

    /// Create an empty file with a name.
    pub fn named(name: impl Into<String>) -> Self {
        let mut file = Self::new();
        file.name = name.into();
        file
    }

    /// The name this file was last attached under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        name.clone_into(&mut self.name);
    }

    /// Prepare the file for use by a new caller.
    ///
    /// The cursor always returns to offset zero, whatever the caller intends
    /// to do next.
    pub fn open(&mut self) {
        self.buffer.set_position(0);
        self.accessed = Utc::now();
    }

    /// Nothing to release for a buffer in memory.
    pub fn close(&mut self) {}

    /// Current length of the buffer in bytes.
    ///
    /// Seeks to the end and restores the previous cursor position.
    pub fn size(&mut self) -> io::Result<u64> {
        let pos = self.buffer.stream_position()?;
        let size = self.buffer.seek(SeekFrom::End(0))?;
        self.buffer.seek(SeekFrom::Start(pos))?;
        Ok(size)
    }

    /// Current cursor position.
    pub fn tell(&self) -> u64 {
        self.buffer.position()
    }

    /// Cut the buffer at the cursor, dropping everything after it.
    pub fn truncate(&mut self) {
        let pos = usize::try_from(self.buffer.position()).unwrap_or(usize::MAX);
        self.buffer.get_mut().truncate(pos);
        self.modified = Utc::now();
    }

    /// Read up to `n` bytes from the cursor.
    pub fn read_bytes(&mut self, n: usize) -> io::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(n.min(self.contents().len()));
        Read::by_ref(self).take(n as u64).read_to_end(&mut out)?;
        Ok(out)
    }

    /// The whole buffer, independent of the cursor.
    pub fn contents(&self) -> &[u8] {
        self.buffer.get_ref()
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    pub fn accessed(&self) -> DateTime<Utc> {
        self.accessed
    }
}

impl Default for File {
    fn default() -> Self {
        Self::new()
    }
}

impl Read for File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.buffer.read(buf)?;
        self.accessed = Utc::now();
        Ok(n)
    }
}

impl Write for File {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.buffer.write(buf)?;
        self.modified = Utc::now();
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for File {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.buffer.seek(pos)
    }
}
