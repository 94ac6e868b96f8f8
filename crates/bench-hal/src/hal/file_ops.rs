//! Destructive filesystem operations.

use crate::HalResult;
use std::path::Path;

pub trait FileOps {
    /// Recursively delete a directory tree.
    fn remove_dir_all(&self, path: &Path) -> HalResult<()>;
}
