//! Path resolution for the flat namespace.
//!
//! There is exactly one directory. A path is either `/` or `/<name>`, and
//! the name is looked up verbatim: no `.`/`..` handling and no nested
//! components. A name that still contains a separator after the leading one
//! is stripped can never match a stored file.

use super::error::{VfsError, VfsResult};

/// Path separator.
pub const SEPARATOR: char = '/';

/// Outcome of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// The implicit root directory.
    Root,
    /// A direct child of root, by name.
    Child(&'a str),
}

impl<'a> Resolved<'a> {
    /// The child name, or `None` for root.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Resolved::Root => None,
            Resolved::Child(name) => Some(name),
        }
    }
}

/// Resolve an absolute path into root or a child name.
///
/// Relative paths are reported as `NotFound`.
pub fn resolve(path: &str) -> VfsResult<Resolved<'_>> {
    let rest = path
        .strip_prefix(SEPARATOR)
        .ok_or_else(|| VfsError::not_found(path))?;

    if rest.is_empty() {
        Ok(Resolved::Root)
    } else {
        Ok(Resolved::Child(rest))
    }
}

/// Returns true if `name` can be stored in the flat namespace.
pub fn is_flat_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(SEPARATOR)
}
