//! Filesystem primitives used by the generator

use std::fs::DirBuilder;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Outcome of [`write_new`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created with the given contents
    Written,
    /// A file already existed at the path; nothing was changed
    Exists,
}

/// Recursively create a directory
///
/// On unix new directories get mode `0o777`, subject to the process umask.
///
/// # Errors
///
/// Returns the underlying IO error, including when a path component exists
/// as a regular file.
pub fn make_directory(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(path)
}

/// Write `contents` to `path` unless a file is already there
///
/// The contents go to a temporary file in the target directory, which is
/// then renamed into place without replacing an existing file. A concurrent
/// writer that wins the race yields [`WriteOutcome::Exists`].
///
/// # Errors
///
/// Returns an error if `path` has no parent directory, or the temporary file
/// cannot be created, written or renamed.
pub fn write_new(path: &Path, contents: &str) -> io::Result<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::Exists);
    }

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_bytes())?;
    temp.flush()?;

    match temp.persist_noclobber(path) {
        Ok(_) => Ok(WriteOutcome::Written),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(WriteOutcome::Exists),
        Err(e) => Err(e.error),
    }
}
