//! Directory-backed record store.
//!
//! Persists a mapping of named values as a flat directory of small files so
//! every top-level property can be read and edited on its own:
//!
//! ```text
//! db/
//!   count.json        -> "count": 1
//!   person.json       -> "person": {"name": "x"}
//!   items__0.json     -> "items": [{"v": 1},
//!   items__1.json     ->           {"v": 2}]
//!   tags__a.json      -> "tags": [{"id": "a", ...}]
//!   notes.txt            (other extensions are never touched)
//! ```
//!
//! # Modules
//!
//! - [`naming`] -- file name encoding for scalar and array entries
//! - [`store`] -- [`RecordStore`] with synchronous `read` / `write`
//! - [`async_store`] -- [`AsyncRecordStore`], the awaitable wrapper
//! - [`config`] -- [`StoreConfig`], loadable from TOML
//! - [`fs`] -- the [`FileSystem`] capability and [`StdFileSystem`]
//! - [`memory`] -- [`InMemoryFileSystem`] for tests and embedding
//! - [`plan`] -- [`WritePlan`], the files a record expands to
//!
//! # Rules
//!
//! 1. `write` removes every file with the configured extension before the new
//!    record is in place, regardless of which keys it holds.
//! 2. Array membership lives in the file name: `<key>__<discriminator>`.
//! 3. Element files are named by `id` when present, else by position.
//!    Colliding names overwrite silently unless the collision policy rejects.
//! 4. No locking. Callers serialize access to a directory themselves.

pub mod async_store;
pub mod config;
pub mod error;
pub mod fs;
pub mod memory;
pub mod naming;
pub mod plan;
pub mod store;

pub use async_store::AsyncRecordStore;
pub use config::{CollisionPolicy, ElementOrder, StoreConfig, WriteMode};
pub use error::{StoreError, StoreResult};
pub use fs::{FileSystem, StdFileSystem};
pub use memory::InMemoryFileSystem;
pub use naming::{decode_element_name, encode_element_name, Discriminator, ElementName, FileName};
pub use plan::{PlannedFile, WritePlan};
pub use store::{RecordStore, WriteReport};

pub use mfs_codec::{Codec, CodecError, FnCodec, JsonCodec};

/// The in-memory payload: top-level keys to values, in insertion order.
pub type Record = serde_json::Map<String, serde_json::Value>;
