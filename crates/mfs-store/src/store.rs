use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mfs_codec::{Codec, CodecError, JsonCodec};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::config::{ElementOrder, StoreConfig, WriteMode};
use crate::error::{StoreError, StoreResult};
use crate::fs::{FileSystem, StdFileSystem};
use crate::naming::{classify, matches_extension_os, staging_file_name, FileName};
use crate::plan::WritePlan;
use crate::Record;

/// Outcome of a successful [`RecordStore::write`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Extension-matching files present before the write that were deleted
    /// or replaced.
    pub files_removed: usize,
    /// Files holding the new record.
    pub files_written: usize,
}

/// Directory-backed record store.
///
/// Maps a [`Record`] onto a flat directory: one file per scalar key, one file
/// per element of an array key (see [`naming`](crate::naming)). The store
/// holds only configuration; every `read` and `write` works from the
/// directory contents afresh.
pub struct RecordStore {
    config: StoreConfig,
    codec: Arc<dyn Codec>,
    fs: Arc<dyn FileSystem>,
}

impl RecordStore {
    /// Store over `source` with the default configuration, the JSON codec and
    /// the real filesystem.
    pub fn open(source: impl Into<PathBuf>) -> Self {
        Self {
            config: StoreConfig::new(source),
            codec: Arc::new(JsonCodec::new()),
            fs: Arc::new(StdFileSystem),
        }
    }

    /// Store with an explicit configuration. Fails if the configuration is
    /// invalid.
    pub fn with_config(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            codec: Arc::new(JsonCodec::new()),
            fs: Arc::new(StdFileSystem),
        })
    }

    /// Replace the codec used for file contents.
    pub fn with_codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = codec;
        self
    }

    /// Replace the filesystem capability.
    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn source(&self) -> &Path {
        &self.config.source
    }

    pub fn extension(&self) -> &str {
        &self.config.extension
    }

    /// Read the directory into a record.
    ///
    /// Returns the configured default value when the directory is missing or
    /// has no entries at all. Files without the configured extension are ignored.
    /// Any name containing `__` contributes to an array, even if it is the
    /// only such file.
    ///
    /// Aborts on the first failure: a codec syntax error becomes
    /// [`StoreError::MalformedData`]; I/O and other codec errors propagate
    /// unchanged.
    pub fn read(&self) -> StoreResult<Record> {
        let source = self.source();
        if !self.fs.exists(source) {
            debug!(source = %source.display(), "source missing; returning default value");
            return Ok(self.config.default_value.clone());
        }

        if self.fs.is_empty_dir(source)? {
            debug!(source = %source.display(), "source empty; returning default value");
            return Ok(self.config.default_value.clone());
        }

        let listing = self.fs.list_files(source)?;
        let mut entries: Vec<(String, FileName)> = Vec::with_capacity(listing.len());
        for name in listing {
            let name = match name.into_string() {
                Ok(name) => name,
                Err(raw) => {
                    if matches_extension_os(&raw, self.extension()) {
                        warn!(name = ?raw, "skipping non UTF-8 file name");
                    }
                    continue;
                }
            };
            if let Some(kind) = classify(&name, self.extension()) {
                entries.push((name, kind));
            }
        }

        if self.config.element_order == ElementOrder::Discriminator {
            entries.sort_by(|a, b| a.1.cmp(&b.1));
        }

        let mut result = Record::new();
        for (name, kind) in entries {
            let value = self.read_single_file(&source.join(&name))?;
            match kind {
                FileName::Element(element) => {
                    let slot = result
                        .entry(element.key)
                        .or_insert_with(|| Value::Array(Vec::new()));
                    match slot {
                        Value::Array(items) => items.push(value),
                        other => *other = Value::Array(vec![value]),
                    }
                }
                FileName::Scalar(key) => {
                    result.insert(key, value);
                }
            }
        }

        debug!(source = %source.display(), keys = result.len(), "read complete");
        Ok(result)
    }

    /// Replace the directory contents with `data`.
    ///
    /// Every existing file with the configured extension is removed, whether
    /// or not its key appears in `data`; other files are left alone. `None`
    /// only removes. The source must be an existing directory, otherwise
    /// [`StoreError::Configuration`] is returned and nothing is touched.
    ///
    /// In [`WriteMode::Direct`] a failure part way leaves the directory mixed:
    /// old files deleted, some new files written. [`WriteMode::Staged`]
    /// leaves the old files intact if staging fails.
    pub fn write(&self, data: Option<&Record>) -> StoreResult<WriteReport> {
        let source = self.source();
        if !self.fs.exists(source) {
            return Err(StoreError::Configuration {
                dir: source.to_path_buf(),
                reason: "source does not exist".into(),
            });
        }
        if !self.fs.is_dir(source) {
            return Err(StoreError::Configuration {
                dir: source.to_path_buf(),
                reason: "source is not a directory".into(),
            });
        }

        let plan = match data {
            Some(record) => WritePlan::build(
                record,
                self.extension(),
                self.config.collision_policy,
                self.codec.as_ref(),
            )?,
            None => WritePlan::empty(),
        };

        let report = match self.config.write_mode {
            WriteMode::Direct => self.write_direct(&plan)?,
            WriteMode::Staged => self.write_staged(&plan)?,
        };

        info!(
            source = %source.display(),
            removed = report.files_removed,
            written = report.files_written,
            "write complete"
        );
        Ok(report)
    }

    fn write_direct(&self, plan: &WritePlan) -> StoreResult<WriteReport> {
        let source = self.source();
        let existing = self.existing_files()?;
        for name in &existing {
            self.fs.delete_file(&source.join(name))?;
            debug!(file = ?name, "deleted");
        }

        for file in plan.files() {
            self.fs
                .write_text(&source.join(&file.file_name), &file.contents)?;
            debug!(file = %file.file_name, bytes = file.contents.len(), "written");
        }

        Ok(WriteReport {
            files_removed: existing.len(),
            files_written: plan.len(),
        })
    }

    fn write_staged(&self, plan: &WritePlan) -> StoreResult<WriteReport> {
        let source = self.source();
        let existing = self.existing_files()?;

        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(plan.len());
        for file in plan.files() {
            let temp = source.join(staging_file_name(&file.file_name));
            if let Err(e) = self.fs.write_text(&temp, &file.contents) {
                staged.push((temp, PathBuf::new()));
                self.discard_staged(&staged);
                return Err(e.into());
            }
            staged.push((temp, source.join(&file.file_name)));
        }

        for (i, (temp, target)) in staged.iter().enumerate() {
            if let Err(e) = self.fs.rename(temp, target) {
                self.discard_staged(&staged[i..]);
                return Err(e.into());
            }
            debug!(file = %target.display(), "written");
        }

        let planned: HashSet<&str> = plan.files().iter().map(|f| f.file_name.as_str()).collect();
        let stale = existing
            .iter()
            .filter(|name| !name.to_str().is_some_and(|name| planned.contains(name)));
        for name in stale {
            self.fs.delete_file(&source.join(name))?;
            debug!(file = ?name, "deleted");
        }

        Ok(WriteReport {
            files_removed: existing.len(),
            files_written: plan.len(),
        })
    }

    /// Best-effort removal of staging files after a failed write.
    fn discard_staged(&self, staged: &[(PathBuf, PathBuf)]) {
        for (temp, _) in staged {
            if self.fs.exists(temp) {
                if let Err(e) = self.fs.delete_file(temp) {
                    warn!(file = %temp.display(), error = %e, "failed to remove staging file");
                }
            }
        }
    }

    /// Names of the files this store owns in the source directory, including
    /// names that are not valid UTF-8.
    fn existing_files(&self) -> StoreResult<Vec<OsString>> {
        let names = self
            .fs
            .list_files(self.source())?
            .into_iter()
            .filter(|name| matches_extension_os(name, self.extension()))
            .collect();
        Ok(names)
    }

    fn read_single_file(&self, path: &Path) -> StoreResult<Value> {
        let text = self.fs.read_text(path)?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        self.codec.decode(text).map_err(|e| match e {
            CodecError::Syntax(message) => StoreError::MalformedData {
                dir: self.source().to_path_buf(),
                file: path.to_path_buf(),
                message,
            },
            other => StoreError::Codec(other),
        })
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("source", &self.config.source)
            .field("extension", &self.config.extension)
            .field("codec", &self.codec.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollisionPolicy;
    use crate::memory::InMemoryFileSystem;
    use mfs_codec::FnCodec;
    use serde_json::json;
    use std::fs;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(fs::read_to_string(path).unwrap().trim()).unwrap()
    }

    fn memory_store(mode: WriteMode) -> (Arc<InMemoryFileSystem>, RecordStore) {
        let mem = Arc::new(InMemoryFileSystem::new());
        mem.create_dir("/db");
        let config = StoreConfig::new("/db").with_write_mode(mode);
        let store = RecordStore::with_config(config)
            .unwrap()
            .with_file_system(mem.clone());
        (mem, store)
    }

    // -----------------------------------------------------------------------
    // read
    // -----------------------------------------------------------------------

    #[test]
    fn read_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("count.json"), "1").unwrap();
        fs::write(dir.path().join("person.json"), r#"{"name":"x"}"#).unwrap();
        fs::write(dir.path().join("items__0.json"), r#"{"v":1}"#).unwrap();
        fs::write(dir.path().join("items__1.json"), r#"{"v":2}"#).unwrap();

        let store = RecordStore::open(dir.path());
        let data = store.read().unwrap();
        assert_eq!(
            Value::Object(data),
            json!({"count": 1, "person": {"name": "x"}, "items": [{"v": 1}, {"v": 2}]})
        );
    }

    #[test]
    fn read_missing_directory_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let default_value = record(json!({"users": []}));
        let config = StoreConfig::new(dir.path().join("missing")).with_default_value(default_value.clone());
        let store = RecordStore::with_config(config).unwrap();
        assert_eq!(store.read().unwrap(), default_value);
    }

    #[test]
    fn read_empty_directory_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let default_value = record(json!({"seeded": true}));
        let config = StoreConfig::new(dir.path()).with_default_value(default_value.clone());
        let store = RecordStore::with_config(config).unwrap();
        assert_eq!(store.read().unwrap(), default_value);
    }

    #[test]
    fn read_ignores_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("normalnumber.other"), "1").unwrap();
        fs::write(dir.path().join("complexobject.json"), r#"{"prop1":"1"}"#).unwrap();

        let config = StoreConfig::new(dir.path()).with_extension("other");
        let store = RecordStore::with_config(config).unwrap();
        assert_eq!(Value::Object(store.read().unwrap()), json!({"normalnumber": 1}));
    }

    #[test]
    fn read_directory_without_matching_files_is_empty_not_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let config = StoreConfig::new(dir.path()).with_default_value(record(json!({"d": 1})));
        let store = RecordStore::with_config(config).unwrap();
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn read_directory_with_only_subdirectory_is_empty_not_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let config = StoreConfig::new(dir.path()).with_default_value(record(json!({"d": 1})));
        let store = RecordStore::with_config(config).unwrap();
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn memory_directory_with_only_subdirectory_is_empty_not_default() {
        let mem = Arc::new(InMemoryFileSystem::new());
        mem.create_dir("/db");
        mem.create_dir("/db/sub");
        let config = StoreConfig::new("/db").with_default_value(record(json!({"d": 1})));
        let store = RecordStore::with_config(config)
            .unwrap()
            .with_file_system(mem);
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn single_element_file_still_yields_array() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tags__a.json"), r#"{"id":"a"}"#).unwrap();

        let data = RecordStore::open(dir.path()).read().unwrap();
        assert_eq!(data.get("tags"), Some(&json!([{"id": "a"}])));
    }

    #[test]
    fn empty_file_reads_as_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blank.json"), "  \n ").unwrap();

        let data = RecordStore::open(dir.path()).read().unwrap();
        assert_eq!(data.get("blank"), Some(&json!({})));
    }

    #[test]
    fn malformed_file_names_source_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.json"), "1").unwrap();
        fs::write(dir.path().join("bad.json"), "{oops").unwrap();

        let err = RecordStore::open(dir.path()).read().unwrap_err();
        match &err {
            StoreError::MalformedData { dir: src, file, .. } => {
                assert_eq!(src, dir.path());
                assert_eq!(file, &dir.path().join("bad.json"));
            }
            other => panic!("expected MalformedData, got {other:?}"),
        }
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }

    #[test]
    fn non_syntax_codec_errors_propagate_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "anything").unwrap();

        let codec = FnCodec::new(
            "refusing",
            |_| Ok(String::new()),
            |_| Err(CodecError::Data("unsupported".into())),
        );
        let store = RecordStore::open(dir.path()).with_codec(Arc::new(codec));
        let err = store.read().unwrap_err();
        assert!(matches!(err, StoreError::Codec(CodecError::Data(_))));
    }

    #[test]
    fn discriminator_order_sorts_numerically() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..12 {
            fs::write(dir.path().join(format!("items__{i}.json")), i.to_string()).unwrap();
        }

        let data = RecordStore::open(dir.path()).read().unwrap();
        let expected: Vec<Value> = (0..12).map(|i| json!(i)).collect();
        assert_eq!(data.get("items"), Some(&Value::Array(expected)));
    }

    #[test]
    fn listing_order_follows_filesystem() {
        let mem = Arc::new(InMemoryFileSystem::new());
        mem.create_dir("/db");
        for i in [0, 1, 2, 10] {
            mem.insert_file(format!("/db/items__{i}.json"), i.to_string());
        }
        let config = StoreConfig::new("/db").with_element_order(ElementOrder::Listing);
        let store = RecordStore::with_config(config)
            .unwrap()
            .with_file_system(mem);

        // The in-memory listing is lexicographic: 10 sorts before 2.
        let data = store.read().unwrap();
        assert_eq!(data.get("items"), Some(&json!([0, 1, 10, 2])));
    }

    #[test]
    fn array_file_replaces_scalar_of_same_key() {
        let (mem, store) = memory_store(WriteMode::Staged);
        mem.insert_file("/db/a.json", "1");
        mem.insert_file("/db/a__0.json", "2");

        let data = store.read().unwrap();
        assert_eq!(data.get("a"), Some(&json!([2])));
    }

    // -----------------------------------------------------------------------
    // write
    // -----------------------------------------------------------------------

    #[test]
    fn write_scalars_and_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let data = record(json!({
            "normalnumber": 1,
            "complexobject": {"prop1": "1", "prop2": "2"},
            "array": [
                {"arrayProp1": "11"},
                {"arrayProp1": "21"},
                {"arrayProp1": "31"},
            ],
        }));

        let report = RecordStore::open(dir.path()).write(Some(&data)).unwrap();
        assert_eq!(report, WriteReport { files_removed: 0, files_written: 5 });

        let p = dir.path();
        assert_eq!(read_json(&p.join("normalnumber.json")), json!(1));
        assert_eq!(read_json(&p.join("complexobject.json")), json!({"prop1": "1", "prop2": "2"}));
        assert_eq!(read_json(&p.join("array__0.json")), json!({"arrayProp1": "11"}));
        assert_eq!(read_json(&p.join("array__1.json")), json!({"arrayProp1": "21"}));
        assert_eq!(read_json(&p.join("array__2.json")), json!({"arrayProp1": "31"}));
    }

    #[test]
    fn write_uses_configured_extension() {
        let dir = tempfile::tempdir().unwrap();
        let data = record(json!({"n": 1, "array": [{"a": 1}, {"a": 2}]}));
        let config = StoreConfig::new(dir.path()).with_extension("anotherExtension");
        RecordStore::with_config(config).unwrap().write(Some(&data)).unwrap();

        assert!(dir.path().join("n.anotherExtension").exists());
        assert!(dir.path().join("array__0.anotherExtension").exists());
        assert!(dir.path().join("array__1.anotherExtension").exists());
        assert!(!dir.path().join("n.json").exists());
    }

    #[test]
    fn write_names_elements_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let data = record(json!({"tags": [{"id": "a", "n": 1}, {"id": "b", "n": 2}]}));
        RecordStore::open(dir.path()).write(Some(&data)).unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["tags__a.json", "tags__b.json"]);
        assert_eq!(read_json(&dir.path().join("tags__a.json")), json!({"id": "a", "n": 1}));
    }

    #[test]
    fn write_purges_matching_files_only() {
        for mode in [WriteMode::Direct, WriteMode::Staged] {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join("a.json"), "\"old\"").unwrap();
            fs::write(dir.path().join("a.other"), "keep me").unwrap();

            let config = StoreConfig::new(dir.path()).with_write_mode(mode);
            let report = RecordStore::with_config(config)
                .unwrap()
                .write(Some(&Record::new()))
                .unwrap();

            assert_eq!(report.files_removed, 1);
            assert!(!dir.path().join("a.json").exists());
            assert_eq!(fs::read_to_string(dir.path().join("a.other")).unwrap(), "keep me");
        }
    }

    #[cfg(unix)]
    #[test]
    fn write_purges_non_utf8_matching_files() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        for mode in [WriteMode::Direct, WriteMode::Staged] {
            let dir = tempfile::tempdir().unwrap();
            let bad = dir.path().join(OsStr::from_bytes(b"\xffbad.json"));
            let foreign = dir.path().join(OsStr::from_bytes(b"\xffbad.other"));
            if fs::write(&bad, "1").is_err() {
                // Filesystems that enforce UTF-8 names cannot hold such a file.
                return;
            }
            fs::write(&foreign, "keep").unwrap();

            let config = StoreConfig::new(dir.path()).with_write_mode(mode);
            let store = RecordStore::with_config(config).unwrap();
            assert!(store.read().unwrap().is_empty());

            let report = store.write(Some(&record(json!({"a": 1})))).unwrap();
            assert_eq!(report, WriteReport { files_removed: 1, files_written: 1 });
            assert!(!bad.exists());
            assert!(foreign.exists());
            assert!(dir.path().join("a.json").exists());
        }
    }

    #[test]
    fn write_none_only_purges() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "1").unwrap();
        fs::write(dir.path().join("b__0.json"), "2").unwrap();

        let report = RecordStore::open(dir.path()).write(None).unwrap();
        assert_eq!(report, WriteReport { files_removed: 2, files_written: 0 });
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn write_to_missing_directory_fails_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let data = record(json!({"a": 1}));

        let err = RecordStore::open(&missing).write(Some(&data)).unwrap_err();
        assert!(matches!(err, StoreError::Configuration { .. }));
        assert!(!missing.exists());
    }

    #[test]
    fn write_to_regular_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.json");
        fs::write(&file, "1").unwrap();

        let err = RecordStore::open(&file).write(None).unwrap_err();
        assert!(
            matches!(err, StoreError::Configuration { ref reason, .. } if reason.contains("not a directory"))
        );
        assert_eq!(fs::read_to_string(&file).unwrap(), "1");
    }

    #[test]
    fn rejected_collision_leaves_directory_unchanged() {
        let (mem, store) = memory_store(WriteMode::Direct);
        mem.insert_file("/db/old.json", "1");
        let store = RecordStore::with_config(
            store.config().clone().with_collision_policy(CollisionPolicy::Reject),
        )
        .unwrap()
        .with_file_system(mem.clone());

        let data = record(json!({"tags": [{"id": "a"}, {"id": "a"}]}));
        let err = store.write(Some(&data)).unwrap_err();
        assert!(matches!(err, StoreError::Collision { .. }));
        assert_eq!(mem.file_names(Path::new("/db")), vec!["old.json"]);
    }

    #[test]
    fn direct_write_failure_leaves_partial_state() {
        let (mem, store) = memory_store(WriteMode::Direct);
        mem.insert_file("/db/old.json", "1");
        mem.fail_writes_to("/db/b.json");

        let data = record(json!({"a": 1, "b": 2, "c": 3}));
        let err = store.write(Some(&data)).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        // Old file gone, "a" written, "b" and "c" missing.
        assert_eq!(mem.file_names(Path::new("/db")), vec!["a.json"]);
    }

    #[test]
    fn staged_write_failure_keeps_previous_files() {
        let (mem, store) = memory_store(WriteMode::Staged);
        mem.insert_file("/db/old.json", "1");
        mem.fail_writes_to("/db/.b.json.mfs-tmp");

        let data = record(json!({"a": 1, "b": 2, "c": 3}));
        let err = store.write(Some(&data)).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert_eq!(mem.file_names(Path::new("/db")), vec!["old.json"]);
    }

    #[test]
    fn staged_write_replaces_existing_files() {
        let (mem, store) = memory_store(WriteMode::Staged);
        mem.insert_file("/db/a.json", "1");
        mem.insert_file("/db/stale__0.json", "{}");
        mem.insert_file("/db/readme.md", "docs");

        let data = record(json!({"a": 2, "b": [{"id": "x"}]}));
        let report = store.write(Some(&data)).unwrap();
        assert_eq!(report, WriteReport { files_removed: 2, files_written: 2 });
        assert_eq!(
            mem.file_names(Path::new("/db")),
            vec!["a.json", "b__x.json", "readme.md"]
        );
        assert_eq!(mem.contents(Path::new("/db/a.json")).as_deref(), Some("2"));
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let data = record(json!({
            "count": 3,
            "person": {"name": "x"},
            "flag": false,
            "tags": [{"id": "a", "n": 1}, {"id": "b", "n": 2}],
        }));

        let store = RecordStore::open(dir.path());
        store.write(Some(&data)).unwrap();
        let back = store.read().unwrap();
        assert_eq!(Value::Object(back), Value::Object(data));
    }

    #[test]
    fn debug_output() {
        let store = RecordStore::open("/db");
        let text = format!("{store:?}");
        assert!(text.contains("RecordStore"));
        assert!(text.contains("json"));
    }
}
