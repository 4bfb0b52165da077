use serde_json::Value;

use crate::error::CodecResult;
use crate::traits::Codec;

/// JSON codec backed by `serde_json`.
///
/// Compact output by default; [`JsonCodec::pretty`] indents for datasets that
/// are meant to be edited by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Compact single-line output.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented multi-line output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Codec for JsonCodec {
    fn name(&self) -> &str {
        if self.pretty {
            "json-pretty"
        } else {
            "json"
        }
    }

    fn encode(&self, value: &Value) -> CodecResult<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }

    fn decode(&self, text: &str) -> CodecResult<Value> {
        Ok(serde_json::from_str(text)?)
    }
}
