//! VFS backends.
//!
//! Backends implement [`VfsOps`](crate::vfs::VfsOps) for different storage types.

mod memory;

pub use memory::{MemoryBackend, SharedMemoryBackend, shared_memory_backend};
