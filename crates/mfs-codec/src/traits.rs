use serde_json::Value;

use crate::error::CodecResult;

/// Text encoding used for the contents of a single record file.
///
/// Implementations must round-trip: `decode(&encode(v)?)?` is
/// value-equivalent to `v` for every value the codec accepts.
///
/// `decode` must report malformed input as [`CodecError::Syntax`] so the
/// store can attribute it to the offending directory; all other failures
/// are passed through untouched.
///
/// [`CodecError::Syntax`]: crate::CodecError::Syntax
pub trait Codec: Send + Sync {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Serialize a value to text.
    fn encode(&self, value: &Value) -> CodecResult<String>;

    /// Deserialize text (already trimmed, never empty) to a value.
    fn decode(&self, text: &str) -> CodecResult<Value>;
}
