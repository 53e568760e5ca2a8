//! Core VFS types.
//!
//! These are the values handed back across the driver boundary. They are
//! serde-serializable so an adapter can forward them without reshaping.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Permission bits reported for the root directory.
pub const ROOT_PERM: u32 = 0o755;

/// Permission bits reported for every stored file.
pub const FILE_PERM: u32 = 0o644;

/// File type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

impl FileType {
    /// Returns true if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, FileType::File)
    }

    /// Returns true if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, FileType::Directory)
    }
}

/// File attributes (metadata).
///
/// Ownership and timestamps are not tracked; adapters fill those in with
/// host defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttr {
    /// Size in bytes.
    pub size: u64,
    /// File type.
    pub kind: FileType,
    /// Unix permissions (e.g., 0o644).
    pub perm: u32,
    /// Number of hard links.
    pub nlink: u32,
}

impl FileAttr {
    /// Attributes for a stored file of the given size.
    pub fn file(size: u64) -> Self {
        Self {
            size,
            kind: FileType::File,
            perm: FILE_PERM,
            nlink: 1,
        }
    }

    /// Attributes for the root directory.
    pub fn root() -> Self {
        Self {
            size: 0,
            kind: FileType::Directory,
            perm: ROOT_PERM,
            nlink: 2, // . and ..
        }
    }

    /// Returns true if this is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Returns true if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Full `st_mode` value (type bits | permission bits).
    pub fn mode(&self) -> u32 {
        const S_IFDIR: u32 = 0o040000;
        const S_IFREG: u32 = 0o100000;
        match self.kind {
            FileType::Directory => S_IFDIR | self.perm,
            FileType::File => S_IFREG | self.perm,
        }
    }
}

/// Directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Entry name (not full path).
    pub name: String,
    /// Entry type.
    pub kind: FileType,
}

impl DirEntry {
    /// Create a new directory entry.
    pub fn new(name: impl Into<String>, kind: FileType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, FileType::File)
    }

    /// Create a directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, FileType::Directory)
    }
}

/// Attributes to set (for setattr operation).
///
/// Times are accepted but not stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetAttr {
    /// New size (truncate/extend).
    pub size: Option<u64>,
    /// New modification time.
    pub mtime: Option<SystemTime>,
    /// New access time.
    pub atime: Option<SystemTime>,
}

impl SetAttr {
    /// Create a new empty SetAttr.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the modification time.
    pub fn with_mtime(mut self, mtime: SystemTime) -> Self {
        self.mtime = Some(mtime);
        self
    }

    /// Set the access time.
    pub fn with_atime(mut self, atime: SystemTime) -> Self {
        self.atime = Some(atime);
        self
    }

    /// Returns true if any timestamp is being set.
    pub fn touches_times(&self) -> bool {
        self.mtime.is_some() || self.atime.is_some()
    }
}

/// Filesystem statistics.
///
/// One block per file slot: `bsize` is the per-file capacity and `blocks`
/// the maximum file count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatFs {
    /// Total blocks.
    pub blocks: u64,
    /// Free blocks.
    pub bfree: u64,
    /// Available blocks (to non-root).
    pub bavail: u64,
    /// Total inodes.
    pub files: u64,
    /// Free inodes.
    pub ffree: u64,
    /// Block size.
    pub bsize: u32,
    /// Maximum name length.
    pub namelen: u32,
    /// Fragment size.
    pub frsize: u32,
}
