use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Write `bytes` to `dir/name` through a temporary file in the same directory.
///
/// The temporary file is removed on every failure path; on success it is
/// renamed into place. With `overwrite == false` an existing destination is an
/// `AlreadyExists` error and is left untouched. Once the file is in place the
/// call succeeds; a failed directory sync afterwards is only logged.
pub fn write_staged(dir: &Path, name: &str, bytes: &[u8], overwrite: bool) -> io::Result<PathBuf> {
    let destination = dir.join(name);

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;

    let persisted = if overwrite {
        staged.persist(&destination)
    } else {
        staged.persist_noclobber(&destination)
    };
    persisted.map_err(|e| e.error)?;

    #[cfg(unix)]
    sync_dir(dir);

    Ok(destination)
}

#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Err(e) = std::fs::File::open(dir).and_then(|parent| parent.sync_all()) {
        log::warn!("Failed to sync directory {}: {}", dir.display(), e);
    }
}
