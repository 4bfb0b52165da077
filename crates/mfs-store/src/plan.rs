use std::collections::HashMap;

use mfs_codec::Codec;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::CollisionPolicy;
use crate::error::{StoreError, StoreResult};
use crate::naming::{scalar_file_name, validate_name, Discriminator, ElementName, ARRAY_SEPARATOR};
use crate::Record;

/// A file to be produced by a write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedFile {
    pub file_name: String,
    pub contents: String,
}

/// Every file a record expands to, computed before the directory is touched.
///
/// Names are validated and values serialized up front, so naming, collision
/// and codec failures abort a write with the directory unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WritePlan {
    files: Vec<PlannedFile>,
}

impl WritePlan {
    /// A plan that writes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Expand `record` into files in iteration order.
    ///
    /// Arrays become one file per element, everything else one file per key.
    /// When two entries share a file name, `Overwrite` keeps the later
    /// contents and `Reject` fails.
    pub fn build(
        record: &Record,
        extension: &str,
        policy: CollisionPolicy,
        codec: &dyn Codec,
    ) -> StoreResult<Self> {
        let mut plan = Self::default();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (key, value) in record {
            validate_name(key)?;
            match value {
                Value::Array(elements) => {
                    for (index, element) in elements.iter().enumerate() {
                        let element_name =
                            ElementName::new(key.as_str(), Discriminator::for_element(element, index));
                        validate_name(&element_name.discriminator.to_string())?;
                        let file_name = element_name.file_name(extension);
                        let contents = codec.encode(element)?;
                        plan.push(&mut positions, policy, file_name, contents)?;
                    }
                }
                scalar => {
                    if key.contains(ARRAY_SEPARATOR) {
                        warn!(key = %key, "scalar key contains array separator; it will read back as an array element");
                    }
                    let file_name = scalar_file_name(key, extension);
                    let contents = codec.encode(scalar)?;
                    plan.push(&mut positions, policy, file_name, contents)?;
                }
            }
        }

        Ok(plan)
    }

    fn push(
        &mut self,
        positions: &mut HashMap<String, usize>,
        policy: CollisionPolicy,
        file_name: String,
        contents: String,
    ) -> StoreResult<()> {
        if let Some(&pos) = positions.get(&file_name) {
            return match policy {
                CollisionPolicy::Reject => Err(StoreError::Collision { file: file_name }),
                CollisionPolicy::Overwrite => {
                    debug!(file = %file_name, "file name collision; later entry wins");
                    self.files[pos].contents = contents;
                    Ok(())
                }
            };
        }
        positions.insert(file_name.clone(), self.files.len());
        self.files.push(PlannedFile {
            file_name,
            contents,
        });
        Ok(())
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether the plan produces a file with this name.
    pub fn contains(&self, file_name: &str) -> bool {
        self.files.iter().any(|f| f.file_name == file_name)
    }
}
