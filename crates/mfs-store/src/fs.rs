use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// Synchronous filesystem capability used by the record store.
///
/// Every call blocks until complete. Implementations must be thread-safe
/// (`Send + Sync`) but need not coordinate concurrent callers: interleaved
/// operations on the same directory have no defined outcome.
pub trait FileSystem: Send + Sync {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `dir` has no entries at all, of any kind.
    fn is_empty_dir(&self, dir: &Path) -> io::Result<bool>;

    /// Names of the regular files directly inside `dir`, in listing order.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Create or overwrite the file at `path`.
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn delete_file(&self, path: &Path) -> io::Result<()>;

    /// Move `from` to `to`, replacing any existing file at `to`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_empty_dir(&self, dir: &Path) -> io::Result<bool> {
        Ok(fs::read_dir(dir)?.next().is_none())
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Follows symlinks, so a link to a regular file counts.
            if entry.path().is_file() {
                names.push(entry.file_name());
            }
        }
        Ok(names)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}
