use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Make sure the directory that will hold `path` exists.
///
/// Not race-free: concurrent callers may both see the directory missing.
/// `create_dir_all` tolerates that, but callers writing into the same tree
/// should still serialize.
pub fn ensure_parent_dir(path: impl AsRef<Path>) -> Result<()> {
    let Some(dir) = path.as_ref().parent() else {
        return Ok(());
    };
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }

    debug!(dir = %dir.display(), "creating output directory");
    std::fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })
}
