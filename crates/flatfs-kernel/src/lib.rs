//! # flatfs-kernel
//!
//! Core of a flat, in-memory filesystem meant to sit behind a userspace
//! filesystem driver.
//!
//! The filesystem is one root directory holding a bounded number of named
//! byte buffers. Nothing is persisted. A driver adapter (not part of this
//! crate) receives host callbacks, calls the matching [`VfsOps`] method on a
//! shared [`MemoryBackend`], and relays the result, usually by way of
//! [`VfsError::errno`].
//!
//! ```
//! use flatfs_kernel::{MemoryBackend, VfsOps};
//!
//! let fs = MemoryBackend::new();
//! fs.create("/greeting").unwrap();
//! fs.write("/greeting", 0, b"hello").unwrap();
//! assert_eq!(fs.read("/greeting", 0, 64).unwrap(), b"hello");
//! ```

pub mod config;
pub mod vfs;

pub use config::{ConfigError, FsLimits};
pub use vfs::{
    DirEntry, FileAttr, FileType, MemoryBackend, SetAttr, SharedMemoryBackend, StatFs, VfsError,
    VfsOps, VfsResult, shared_memory_backend,
};
