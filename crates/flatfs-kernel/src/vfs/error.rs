//! VFS error types.

use std::io;
use thiserror::Error;

/// VFS error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VfsError {
    /// Path does not resolve to root or to a stored file.
    #[error("not found: {0}")]
    NotFound(String),

    /// Path already exists.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// File table holds the maximum number of files.
    #[error("file table is full ({max} files)")]
    Full { max: usize },

    /// Requested length exceeds the per-file capacity.
    #[error("file too large: {size} bytes exceeds capacity of {max}")]
    TooLarge { size: u64, max: usize },

    /// File name exceeds the configured maximum length.
    #[error("file name too long: {0}")]
    NameTooLong(String),
}

// Linux errno values relayed by the driver adapter.
const ENOENT: i32 = 2;
const EEXIST: i32 = 17;
const EFBIG: i32 = 27;
const ENOSPC: i32 = 28;
const ENAMETOOLONG: i32 = 36;

impl VfsError {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create an AlreadyExists error.
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists(path.into())
    }

    /// Create a NameTooLong error.
    pub fn name_too_long(name: impl Into<String>) -> Self {
        Self::NameTooLong(name.into())
    }

    /// Positive errno for this error. Adapters negate it when the host
    /// expects `-errno` return codes.
    pub fn errno(&self) -> i32 {
        match self {
            VfsError::NotFound(_) => ENOENT,
            VfsError::AlreadyExists(_) => EEXIST,
            VfsError::Full { .. } => ENOSPC,
            VfsError::TooLarge { .. } => EFBIG,
            VfsError::NameTooLong(_) => ENAMETOOLONG,
        }
    }
}

/// Convert VfsError to std::io::Error for compatibility.
impl From<VfsError> for io::Error {
    fn from(e: VfsError) -> Self {
        let kind = match &e {
            VfsError::NotFound(_) => io::ErrorKind::NotFound,
            VfsError::AlreadyExists(_) => io::ErrorKind::AlreadyExists,
            VfsError::Full { .. } => io::ErrorKind::StorageFull,
            VfsError::TooLarge { .. } => io::ErrorKind::FileTooLarge,
            VfsError::NameTooLong(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, e)
    }
}

/// VFS result type.
pub type VfsResult<T> = Result<T, VfsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_mapping() {
        assert_eq!(VfsError::not_found("/a").errno(), 2);
        assert_eq!(VfsError::already_exists("/a").errno(), 17);
        assert_eq!(VfsError::Full { max: 100 }.errno(), 28);
        assert_eq!(VfsError::TooLarge { size: 5000, max: 4096 }.errno(), 27);
        assert_eq!(VfsError::name_too_long("x").errno(), 36);
    }

    #[test]
    fn test_into_io_error() {
        let err: io::Error = VfsError::not_found("/missing").into();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("/missing"));

        let err: io::Error = VfsError::Full { max: 100 }.into();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);

        let err: io::Error = VfsError::TooLarge { size: 5000, max: 4096 }.into();
        assert_eq!(err.kind(), io::ErrorKind::FileTooLarge);
    }
}
