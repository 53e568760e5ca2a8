//! VFS operations trait.
//!
//! One method per driver callback. Everything is path-based with explicit
//! offsets, so the adapter never has to hold per-open state.

use super::VfsResult;
use super::types::{DirEntry, FileAttr, SetAttr, StatFs};

/// Core VFS operations trait.
///
/// Paths are absolute (`/` or `/<name>`). Every call resolves its path
/// afresh; there are no handles. Implementations must be safe to call from
/// several host worker threads at once.
pub trait VfsOps: Send + Sync {
    // ========================================================================
    // Reading
    // ========================================================================

    /// Get file attributes.
    fn getattr(&self, path: &str) -> VfsResult<FileAttr>;

    /// Read directory entries, `.` and `..` first.
    fn readdir(&self, path: &str) -> VfsResult<Vec<DirEntry>>;

    /// Read file contents.
    ///
    /// Reads up to `size` bytes starting at `offset`.
    /// Returns fewer bytes if EOF is reached, and none past it.
    fn read(&self, path: &str, offset: u64, size: u32) -> VfsResult<Vec<u8>>;

    /// Check that a file exists. No handle is issued.
    fn open(&self, path: &str) -> VfsResult<()>;

    // ========================================================================
    // Writing
    // ========================================================================

    /// Write data to a file.
    ///
    /// Writes `data` at the specified `offset`.
    /// Returns the number of bytes written.
    fn write(&self, path: &str, offset: u64, data: &[u8]) -> VfsResult<u32>;

    /// Create a new empty file.
    ///
    /// Returns the attributes of the newly created file.
    fn create(&self, path: &str) -> VfsResult<FileAttr>;

    /// Remove a file.
    fn unlink(&self, path: &str) -> VfsResult<()>;

    /// Truncate a file to the specified size.
    fn truncate(&self, path: &str, size: u64) -> VfsResult<()>;

    /// Accept a timestamp update. Timestamps are not stored.
    fn utimens(&self, path: &str) -> VfsResult<()>;

    /// Set file attributes.
    fn setattr(&self, path: &str, attr: SetAttr) -> VfsResult<FileAttr> {
        if let Some(size) = attr.size {
            self.truncate(path, size)?;
        }
        if attr.touches_times() {
            self.utimens(path)?;
        }
        self.getattr(path)
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    /// Get filesystem statistics.
    fn statfs(&self) -> VfsResult<StatFs>;

    // ========================================================================
    // Convenience methods (default implementations)
    // ========================================================================

    /// Check if a path exists.
    fn exists(&self, path: &str) -> bool {
        self.getattr(path).is_ok()
    }

    /// Read entire file contents.
    fn read_all(&self, path: &str) -> VfsResult<Vec<u8>> {
        let attr = self.getattr(path)?;
        let size = u32::try_from(attr.size).unwrap_or(u32::MAX);
        self.read(path, 0, size)
    }

    /// Write entire file contents.
    ///
    /// Convenience method that creates or truncates, then writes from the
    /// start. Returns the number of bytes stored.
    ///
    /// The default is three separate calls and is not atomic: a concurrent
    /// caller can slip in between them. Backends with a single lock should
    /// override it.
    fn write_all(&self, path: &str, data: &[u8]) -> VfsResult<u32> {
        if self.exists(path) {
            self.truncate(path, 0)?;
        } else {
            self.create(path)?;
        }
        self.write(path, 0, data)
    }
}
