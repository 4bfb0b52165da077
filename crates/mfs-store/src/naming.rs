//! File naming convention for record directories.
//!
//! A flat directory encodes a two-level structure:
//!
//! ```text
//! <key>.<ext>                    scalar entry
//! <key>__<discriminator>.<ext>   one element of an array entry
//! ```
//!
//! The discriminator is the element's `id` field when it has one, otherwise
//! its zero-based position. Names are split on the *first* `__`, so a
//! discriminator may itself contain the separator.

use std::ffi::OsStr;
use std::fmt;

use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// Separator between an array key and an element discriminator.
pub const ARRAY_SEPARATOR: &str = "__";

/// Object field used as the element discriminator when present.
pub const ID_FIELD: &str = "id";

/// Suffix appended to staged files during a staged write.
pub const STAGING_SUFFIX: &str = "mfs-tmp";

/// Characters that would take a file name out of the flat directory.
const FORBIDDEN_CHARS: &[char] = &['/', '\\', '\0'];

/// Per-element file name suffix.
///
/// Orders all positional indices (numerically) before all ids
/// (lexicographically).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Discriminator {
    Index(u64),
    Id(String),
}

impl Discriminator {
    /// Parse a discriminator from file name text.
    ///
    /// Only canonical decimal integers become [`Discriminator::Index`];
    /// `"007"` stays an id so that re-encoding yields the same file name.
    pub fn parse(text: &str) -> Self {
        match text.parse::<u64>() {
            Ok(index) if index.to_string() == text => Self::Index(index),
            _ => Self::Id(text.to_string()),
        }
    }

    /// Discriminator for the element at `index` of an array entry.
    pub fn for_element(element: &Value, index: usize) -> Self {
        match element.get(ID_FIELD) {
            Some(id) => Self::parse(&render_id(id)),
            None => Self::Index(index as u64),
        }
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Id(id) => f.write_str(id),
        }
    }
}

/// Text form of an `id` field value.
fn render_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// An array element's identity within the directory.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementName {
    pub key: String,
    pub discriminator: Discriminator,
}

impl ElementName {
    pub fn new(key: impl Into<String>, discriminator: Discriminator) -> Self {
        Self {
            key: key.into(),
            discriminator,
        }
    }

    /// File name for this element under the given extension.
    pub fn file_name(&self, extension: &str) -> String {
        encode_element_name(&self.key, &self.discriminator, extension)
    }
}

/// A classified record file name.
///
/// Sorts scalars (by key) before elements (by key, then discriminator).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileName {
    Scalar(String),
    Element(ElementName),
}

impl FileName {
    /// Top-level key this file contributes to.
    pub fn key(&self) -> &str {
        match self {
            Self::Scalar(key) => key,
            Self::Element(element) => &element.key,
        }
    }
}

/// `<key>__<discriminator>.<ext>`
pub fn encode_element_name(key: &str, discriminator: &Discriminator, extension: &str) -> String {
    format!("{key}{ARRAY_SEPARATOR}{discriminator}.{extension}")
}

/// Split an element file name into key and discriminator.
///
/// Returns `None` if the name does not carry the extension or has no
/// separator.
pub fn decode_element_name(file_name: &str, extension: &str) -> Option<ElementName> {
    let stem = strip_extension(file_name, extension)?;
    let (key, discriminator) = stem.split_once(ARRAY_SEPARATOR)?;
    Some(ElementName::new(key, Discriminator::parse(discriminator)))
}

/// `<key>.<ext>`
pub fn scalar_file_name(key: &str, extension: &str) -> String {
    format!("{key}.{extension}")
}

/// Temporary name used while staging `file_name`. Never carries the
/// record extension, so readers ignore it.
pub fn staging_file_name(file_name: &str) -> String {
    format!(".{file_name}.{STAGING_SUFFIX}")
}

/// Whether a directory entry belongs to a store with this extension: the
/// name ends in `.<extension>` after a non-empty stem. The name need not be
/// valid UTF-8.
pub fn matches_extension_os(file_name: &OsStr, extension: &str) -> bool {
    let bytes = file_name.as_encoded_bytes();
    let suffix_len = extension.len() + 1;
    bytes.len() > suffix_len
        && bytes.ends_with(extension.as_bytes())
        && bytes[bytes.len() - suffix_len] == b'.'
}

/// Classify a directory entry. Returns `None` for names the store does not
/// own, and for names whose key would be empty.
pub fn classify(file_name: &str, extension: &str) -> Option<FileName> {
    let stem = strip_extension(file_name, extension)?;
    if stem.contains(ARRAY_SEPARATOR) {
        let element = decode_element_name(file_name, extension)?;
        if element.key.is_empty() {
            return None;
        }
        Some(FileName::Element(element))
    } else {
        Some(FileName::Scalar(stem.to_string()))
    }
}

/// Reject names that cannot be stored as a single file in the directory.
pub fn validate_name(name: &str) -> StoreResult<()> {
    if name.is_empty() {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
            reason: "name must not be empty".into(),
        });
    }

    for ch in FORBIDDEN_CHARS {
        if name.contains(*ch) {
            return Err(StoreError::InvalidName {
                name: name.to_string(),
                reason: format!("contains forbidden character: {ch:?}"),
            });
        }
    }

    if name == "." || name == ".." {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
            reason: "must not be a relative path component".into(),
        });
    }

    Ok(())
}

fn strip_extension<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let stem = file_name.strip_suffix(extension)?.strip_suffix('.')?;
    if stem.is_empty() {
        None
    } else {
        Some(stem)
    }
}
