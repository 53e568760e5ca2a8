//! In-memory flat filesystem backend.
//!
//! One root directory holding at most `max_files` fixed-capacity files.
//! All data is ephemeral.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::config::FsLimits;
use crate::vfs::error::{VfsError, VfsResult};
use crate::vfs::ops::VfsOps;
use crate::vfs::path::{Resolved, is_flat_name, resolve};
use crate::vfs::table::FileTable;
use crate::vfs::types::{DirEntry, FileAttr, StatFs};

/// In-memory filesystem backend.
///
/// Thread-safe via a single table-wide `RwLock`. Each operation runs under
/// one lock acquisition, so its effect is applied entirely or not at all.
#[derive(Debug)]
pub struct MemoryBackend {
    table: RwLock<FileTable>,
    limits: FsLimits,
}

/// Shared reference to a memory backend.
pub type SharedMemoryBackend = Arc<MemoryBackend>;

/// Create a new shared memory backend with the given limits.
pub fn shared_memory_backend(limits: FsLimits) -> SharedMemoryBackend {
    Arc::new(MemoryBackend::with_limits(limits))
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Create an empty filesystem with default limits.
    pub fn new() -> Self {
        Self::with_limits(FsLimits::default())
    }

    /// Create an empty filesystem with custom limits.
    ///
    /// Limits are used as given; pass untrusted values through
    /// [`FsLimits::validate`] (or load them with [`FsLimits::load`]) first.
    pub fn with_limits(limits: FsLimits) -> Self {
        Self {
            table: RwLock::new(FileTable::new(&limits)),
            limits,
        }
    }

    /// Limits this filesystem was created with.
    pub fn limits(&self) -> &FsLimits {
        &self.limits
    }

    /// Number of stored files.
    pub fn file_count(&self) -> usize {
        self.table.read().len()
    }

    /// Resolve a path that must name a file (root is not a file).
    fn file_name(path: &str) -> VfsResult<&str> {
        resolve(path)?
            .name()
            .ok_or_else(|| VfsError::not_found(path))
    }

    /// Check that `name` may be stored as a new file.
    fn check_new_name(&self, path: &str, name: &str) -> VfsResult<()> {
        // A separator left in the name means a parent directory that can't exist.
        if !is_flat_name(name) {
            return Err(VfsError::not_found(path));
        }
        if name.len() > self.limits.max_name_len {
            return Err(VfsError::name_too_long(name));
        }
        Ok(())
    }

    /// Insert `name`, logging when the table is out of slots.
    fn insert_file(table: &mut FileTable, path: &str, name: &str) -> VfsResult<()> {
        match table.insert(name) {
            Ok(()) => {
                debug!(path, count = table.len(), "create");
                Ok(())
            }
            Err(e @ VfsError::Full { .. }) => {
                warn!(path, max_files = table.capacity(), "create refused: file table full");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}

impl VfsOps for MemoryBackend {
    fn getattr(&self, path: &str) -> VfsResult<FileAttr> {
        let Some(name) = resolve(path)?.name() else {
            return Ok(FileAttr::root());
        };

        let table = self.table.read();
        table
            .get(name)
            .map(|file| FileAttr::file(file.size() as u64))
            .ok_or_else(|| VfsError::not_found(path))
    }

    fn readdir(&self, path: &str) -> VfsResult<Vec<DirEntry>> {
        // Only root can be listed; stored names are regular files.
        if resolve(path)?.name().is_some() {
            return Err(VfsError::not_found(path));
        }

        let table = self.table.read();

        let mut entries = Vec::with_capacity(table.len() + 2);
        entries.push(DirEntry::directory("."));
        entries.push(DirEntry::directory(".."));
        entries.extend(table.iter().map(|(name, _)| DirEntry::file(name)));

        trace!(count = table.len(), "readdir /");
        Ok(entries)
    }

    fn read(&self, path: &str, offset: u64, size: u32) -> VfsResult<Vec<u8>> {
        let name = Self::file_name(path)?;
        let table = self.table.read();
        let file = table.get(name).ok_or_else(|| VfsError::not_found(path))?;

        let data = file.read_at(offset, size as usize).to_vec();
        trace!(path, offset, requested = size, returned = data.len(), "read");
        Ok(data)
    }

    fn open(&self, path: &str) -> VfsResult<()> {
        let name = Self::file_name(path)?;
        let table = self.table.read();
        table
            .find(name)
            .map(|_| ())
            .ok_or_else(|| VfsError::not_found(path))
    }

    fn write(&self, path: &str, offset: u64, data: &[u8]) -> VfsResult<u32> {
        let name = Self::file_name(path)?;
        let mut table = self.table.write();
        let file = table
            .get_mut(name)
            .ok_or_else(|| VfsError::not_found(path))?;

        let written = file.write_at(offset, data)?;
        if written < data.len() {
            debug!(
                path,
                offset,
                requested = data.len(),
                written,
                "write clamped to file capacity"
            );
        }
        debug!(path, offset, written, size = file.size(), "write");
        u32::try_from(written).map_err(|_| VfsError::TooLarge {
            size: written as u64,
            max: file.capacity(),
        })
    }

    fn create(&self, path: &str) -> VfsResult<FileAttr> {
        let name = match resolve(path)? {
            Resolved::Root => return Err(VfsError::already_exists(path)),
            Resolved::Child(name) => name,
        };
        self.check_new_name(path, name)?;

        let mut table = self.table.write();
        Self::insert_file(&mut table, path, name)?;
        Ok(FileAttr::file(0))
    }

    fn unlink(&self, path: &str) -> VfsResult<()> {
        let name = Self::file_name(path)?;
        let mut table = self.table.write();
        table
            .remove(name)
            .map_err(|_| VfsError::not_found(path))?;
        debug!(path, count = table.len(), "unlink");
        Ok(())
    }

    fn truncate(&self, path: &str, size: u64) -> VfsResult<()> {
        let name = Self::file_name(path)?;
        let mut table = self.table.write();
        let file = table
            .get_mut(name)
            .ok_or_else(|| VfsError::not_found(path))?;

        file.truncate(size)?;
        debug!(path, size, "truncate");
        Ok(())
    }

    fn utimens(&self, path: &str) -> VfsResult<()> {
        // Timestamps aren't stored; the call only has to find the file.
        self.open(path)
    }

    /// Create-or-truncate and write under one write lock.
    fn write_all(&self, path: &str, data: &[u8]) -> VfsResult<u32> {
        let name = Self::file_name(path)?;
        let mut table = self.table.write();

        if table.find(name).is_none() {
            self.check_new_name(path, name)?;
            Self::insert_file(&mut table, path, name)?;
        }
        let file = table
            .get_mut(name)
            .ok_or_else(|| VfsError::not_found(path))?;

        file.truncate(0)?;
        let written = file.write_at(0, data)?;
        debug!(path, written, "write_all");
        u32::try_from(written).map_err(|_| VfsError::TooLarge {
            size: written as u64,
            max: file.capacity(),
        })
    }

    fn statfs(&self) -> VfsResult<StatFs> {
        let table = self.table.read();
        let total = table.capacity() as u64;
        let free = total.saturating_sub(table.len() as u64);
        let bsize = u32::try_from(table.file_capacity()).unwrap_or(u32::MAX);
        Ok(StatFs {
            blocks: total,
            bfree: free,
            bavail: free,
            files: total,
            ffree: free,
            bsize,
            namelen: u32::try_from(self.limits.max_name_len).unwrap_or(u32::MAX),
            frsize: bsize,
        })
    }
}
