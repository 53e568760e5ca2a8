//! Virtual Filesystem abstraction.
//!
//! A single flat directory of fixed-capacity files held in memory.
//! Key components:
//!
//! - [`VfsOps`] - One method per driver callback
//! - [`FileTable`] - Bounded, insertion-ordered file storage
//! - [`resolve`] - Maps `/` and `/<name>` onto the table
//! - [`MemoryBackend`] - `VfsOps` over a locked `FileTable`
//!
//! ## Design Decisions
//!
//! - **Path-based, no inodes**: Operations use paths, not inode numbers.
//!   Driver adapters handle inode ↔ path mapping themselves.
//! - **No handles**: `open` only checks existence and every call resolves
//!   its path again.
//! - **One lock**: The table sits behind a single `RwLock`; operations are
//!   short and bounded, so there is nothing finer-grained to gain.

pub mod backends;
mod error;
mod ops;
mod path;
mod table;
mod types;

pub use backends::{MemoryBackend, SharedMemoryBackend, shared_memory_backend};
pub use error::{VfsError, VfsResult};
pub use ops::VfsOps;
pub use path::{Resolved, SEPARATOR, is_flat_name, resolve};
pub use table::{FileEntity, FileTable};
pub use types::{DirEntry, FILE_PERM, FileAttr, FileType, ROOT_PERM, SetAttr, StatFs};
