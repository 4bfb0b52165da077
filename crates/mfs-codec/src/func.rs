use std::fmt;

use serde_json::Value;

use crate::error::CodecResult;
use crate::traits::Codec;

type EncodeFn = dyn Fn(&Value) -> CodecResult<String> + Send + Sync;
type DecodeFn = dyn Fn(&str) -> CodecResult<Value> + Send + Sync;

/// Codec assembled from a pair of closures.
///
/// Lets callers inject an arbitrary serialize/deserialize pair without
/// declaring a type for it.
pub struct FnCodec {
    name: String,
    encode: Box<EncodeFn>,
    decode: Box<DecodeFn>,
}

impl FnCodec {
    pub fn new<E, D>(name: impl Into<String>, encode: E, decode: D) -> Self
    where
        E: Fn(&Value) -> CodecResult<String> + Send + Sync + 'static,
        D: Fn(&str) -> CodecResult<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            encode: Box::new(encode),
            decode: Box::new(decode),
        }
    }
}

impl Codec for FnCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn encode(&self, value: &Value) -> CodecResult<String> {
        (self.encode)(value)
    }

    fn decode(&self, text: &str) -> CodecResult<Value> {
        (self.decode)(text)
    }
}

impl fmt::Debug for FnCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCodec").field("name", &self.name).finish()
    }
}
