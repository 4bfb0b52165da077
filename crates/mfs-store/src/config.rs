use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::naming::STAGING_SUFFIX;
use crate::Record;

/// Order of array elements reconstructed by `read`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementOrder {
    /// Directory listing order, whatever the filesystem returns.
    Listing,
    /// Sorted by discriminator: indices numerically, then ids lexicographically.
    Discriminator,
}

impl Default for ElementOrder {
    fn default() -> Self {
        Self::Discriminator
    }
}

/// How `write` replaces the directory contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Delete every matching file, then write the new files in place.
    Direct,
    /// Write new files under staging names, rename them into place, then
    /// delete matching files that are no longer part of the record.
    Staged,
}

impl Default for WriteMode {
    fn default() -> Self {
        Self::Staged
    }
}

/// What `write` does when two entries map to the same file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The later entry silently replaces the earlier one.
    Overwrite,
    /// Fail with [`StoreError::Collision`] before touching the directory.
    Reject,
}

impl Default for CollisionPolicy {
    fn default() -> Self {
        Self::Overwrite
    }
}

/// Configuration for a [`RecordStore`](crate::RecordStore).
///
/// Loadable from TOML:
///
/// ```toml
/// source = "data/db"
/// extension = "json"
/// element_order = "discriminator"
/// write_mode = "staged"
/// collision_policy = "overwrite"
///
/// [default_value]
/// users = []
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the record files.
    pub source: PathBuf,
    /// Extension filter, without the leading dot.
    pub extension: String,
    pub element_order: ElementOrder,
    pub write_mode: WriteMode,
    pub collision_policy: CollisionPolicy,
    /// Returned by `read` when the directory is missing or empty.
    pub default_value: Record,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            extension: "json".into(),
            element_order: ElementOrder::default(),
            write_mode: WriteMode::default(),
            collision_policy: CollisionPolicy::default(),
            default_value: Record::new(),
        }
    }
}

impl StoreConfig {
    /// Default configuration for the given directory.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Use a different extension. A leading dot is accepted and dropped.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension
            .strip_prefix('.')
            .map(str::to_string)
            .unwrap_or(extension);
        self
    }

    pub fn with_default_value(mut self, default_value: Record) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn with_element_order(mut self, order: ElementOrder) -> Self {
        self.element_order = order;
        self
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Check that the configuration describes a usable store.
    pub fn validate(&self) -> StoreResult<()> {
        if self.extension.is_empty() {
            return Err(self.invalid("extension must not be empty"));
        }
        if self.extension.starts_with('.') {
            return Err(self.invalid("extension must not start with '.'"));
        }
        if self.extension.contains(['/', '\\', '\0']) {
            return Err(self.invalid("extension must not contain path separators"));
        }
        let last_segment = self.extension.rsplit('.').next().unwrap_or_default();
        if last_segment == STAGING_SUFFIX {
            return Err(self.invalid("extension must not end in the staging suffix"));
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(text: &str) -> StoreResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| StoreError::Configuration {
            dir: PathBuf::new(),
            reason: format!("invalid configuration: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> StoreResult<String> {
        toml::to_string(self).map_err(|e| self.invalid(&format!("cannot render configuration: {e}")))
    }

    fn invalid(&self, reason: &str) -> StoreError {
        StoreError::Configuration {
            dir: self.source.clone(),
            reason: reason.to_string(),
        }
    }
}
