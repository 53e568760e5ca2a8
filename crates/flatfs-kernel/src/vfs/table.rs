//! The file table: a bounded, insertion-ordered set of fixed-capacity files.

use indexmap::IndexMap;

use super::error::{VfsError, VfsResult};
use crate::config::FsLimits;

/// A single stored file.
///
/// `content` is allocated zeroed at its full capacity when the file is
/// created and never reallocated. Only `content[..size]` is ever exposed.
#[derive(Debug, Clone)]
pub struct FileEntity {
    content: Box<[u8]>,
    size: usize,
}

impl FileEntity {
    fn new(capacity: usize) -> Self {
        Self {
            content: vec![0u8; capacity].into_boxed_slice(),
            size: 0,
        }
    }

    /// Logical length of the file.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Fixed buffer capacity.
    pub fn capacity(&self) -> usize {
        self.content.len()
    }

    /// Valid bytes in `[offset, offset + len)`, clamped to the file size.
    pub fn read_at(&self, offset: u64, len: usize) -> &[u8] {
        let Ok(start) = usize::try_from(offset) else {
            return &[];
        };
        if start >= self.size {
            return &[];
        }
        let end = start.saturating_add(len).min(self.size);
        &self.content[start..end]
    }

    /// Copy `data` in at `offset`, clamped to capacity.
    ///
    /// The size becomes `offset + written`, which shrinks the file when the
    /// write ends before the old size. A gap between the old size and
    /// `offset` is zeroed first.
    pub fn write_at(&mut self, offset: u64, data: &[u8]) -> VfsResult<usize> {
        let cap = self.capacity();
        let start = match usize::try_from(offset) {
            Ok(start) if start < cap || (start == cap && data.is_empty()) => start,
            _ => {
                return Err(VfsError::TooLarge {
                    size: offset.saturating_add(data.len() as u64),
                    max: cap,
                });
            }
        };

        if start > self.size {
            self.content[self.size..start].fill(0);
        }

        let len = data.len().min(cap - start);
        self.content[start..start + len].copy_from_slice(&data[..len]);
        self.size = start + len;
        Ok(len)
    }

    /// Set the size to `len` and zero everything past the valid region.
    pub fn truncate(&mut self, len: u64) -> VfsResult<()> {
        let cap = self.capacity();
        let new_size = match usize::try_from(len) {
            Ok(n) if n <= cap => n,
            _ => return Err(VfsError::TooLarge { size: len, max: cap }),
        };

        let zero_from = self.size.min(new_size);
        self.content[zero_from..].fill(0);
        self.size = new_size;
        Ok(())
    }
}

/// Ordered collection of files keyed by name.
///
/// Iteration order is insertion order. Removal shifts later entries down so
/// survivors keep their relative order.
#[derive(Debug)]
pub struct FileTable {
    files: IndexMap<String, FileEntity>,
    max_files: usize,
    file_capacity: usize,
}

impl FileTable {
    /// Create an empty table sized by `limits`.
    pub fn new(limits: &FsLimits) -> Self {
        Self {
            files: IndexMap::with_capacity(limits.max_files),
            max_files: limits.max_files,
            file_capacity: limits.max_file_size,
        }
    }

    /// Add an empty file.
    pub fn insert(&mut self, name: &str) -> VfsResult<()> {
        if self.files.len() >= self.max_files {
            return Err(VfsError::Full {
                max: self.max_files,
            });
        }
        if self.files.contains_key(name) {
            return Err(VfsError::already_exists(name));
        }
        self.files
            .insert(name.to_owned(), FileEntity::new(self.file_capacity));
        Ok(())
    }

    /// Remove a file, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> VfsResult<()> {
        self.files
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| VfsError::not_found(name))
    }

    /// Position of `name` in listing order.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.files.get_index_of(name)
    }

    pub fn get(&self, name: &str) -> Option<&FileEntity> {
        self.files.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FileEntity> {
        self.files.get_mut(name)
    }

    /// `(name, size)` pairs in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.files
            .iter()
            .map(|(name, file)| (name.as_str(), file.size()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Maximum number of files.
    pub fn capacity(&self) -> usize {
        self.max_files
    }

    /// Per-file content capacity.
    pub fn file_capacity(&self) -> usize {
        self.file_capacity
    }
}
