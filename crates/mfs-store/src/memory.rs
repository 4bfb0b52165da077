use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::fs::FileSystem;

#[derive(Default)]
struct MemoryState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    failing_writes: BTreeSet<PathBuf>,
}

/// In-memory [`FileSystem`] for tests and embedding.
///
/// Directories must be created explicitly. Listings are returned in
/// lexicographic order. Writes to paths registered with
/// [`fail_writes_to`](Self::fail_writes_to) fail with `PermissionDenied`,
/// which makes partial-failure behaviour testable.
pub struct InMemoryFileSystem {
    state: RwLock<MemoryState>,
}

impl InMemoryFileSystem {
    /// Create an empty filesystem with no directories.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }

    /// Create a directory (parents are not required to exist).
    pub fn create_dir(&self, path: impl Into<PathBuf>) {
        self.state
            .write()
            .expect("lock poisoned")
            .dirs
            .insert(path.into());
    }

    /// Place a file directly, bypassing failure injection.
    pub fn insert_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.state
            .write()
            .expect("lock poisoned")
            .files
            .insert(path.into(), contents.into());
    }

    /// Contents of the file at `path`, if any.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.state
            .read()
            .expect("lock poisoned")
            .files
            .get(path)
            .cloned()
    }

    /// Sorted names of the files directly inside `dir`.
    pub fn file_names(&self, dir: &Path) -> Vec<String> {
        let state = self.state.read().expect("lock poisoned");
        state
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
            .collect()
    }

    /// Make every subsequent write to `path` fail.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.state
            .write()
            .expect("lock poisoned")
            .failing_writes
            .insert(path.into());
    }
}

impl Default for InMemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

impl FileSystem for InMemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.read().expect("lock poisoned");
        state.dirs.contains(path) || state.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.read().expect("lock poisoned").dirs.contains(path)
    }

    fn is_empty_dir(&self, dir: &Path) -> io::Result<bool> {
        let state = self.state.read().expect("lock poisoned");
        if !state.dirs.contains(dir) {
            return Err(not_found(dir));
        }
        let in_dir = |path: &PathBuf| path.parent() == Some(dir);
        Ok(!state.dirs.iter().any(in_dir) && !state.files.keys().any(in_dir))
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let state = self.state.read().expect("lock poisoned");
        if !state.dirs.contains(dir) {
            return Err(not_found(dir));
        }
        Ok(state
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name().map(OsString::from))
            .collect())
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.contents(path).ok_or_else(|| not_found(path))
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut state = self.state.write().expect("lock poisoned");
        if state.failing_writes.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write refused: {}", path.display()),
            ));
        }
        match path.parent() {
            Some(parent) if state.dirs.contains(parent) => {}
            _ => return Err(not_found(path)),
        }
        state.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().expect("lock poisoned");
        state
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut state = self.state.write().expect("lock poisoned");
        let contents = state.files.remove(from).ok_or_else(|| not_found(from))?;
        state.files.insert(to.to_path_buf(), contents);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryFileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().expect("lock poisoned");
        f.debug_struct("InMemoryFileSystem")
            .field("dir_count", &state.dirs.len())
            .field("file_count", &state.files.len())
            .finish()
    }
}
