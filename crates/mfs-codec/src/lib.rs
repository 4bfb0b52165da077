//! Text codecs for the multi-file record store.
//!
//! Every record file holds one value encoded as text. The encoding is a
//! strategy injected into the store through the [`Codec`] trait, so a
//! directory can hold JSON, pretty JSON, or any caller-defined format.
//!
//! - [`JsonCodec`] -- `serde_json`, compact or pretty (the default codec)
//! - [`FnCodec`] -- wraps a pair of closures
//!
//! Decoders classify failures: [`CodecError::Syntax`] for malformed text,
//! everything else for data or I/O problems. The store only annotates syntax
//! errors; the rest propagate unchanged.

pub mod error;
pub mod func;
pub mod json;
pub mod traits;

pub use error::{CodecError, CodecResult};
pub use func::FnCodec;
pub use json::JsonCodec;
pub use traits::Codec;

pub use serde_json::Value;
