//! Purpose: Lenient JSON decoding that substitutes registered defaults for broken fields.
//! Exports: `api` (entry points), `core` (configuration, errors, paths), `decode` (proxy layer).
//! Role: Library crate; wraps a serde_json value tree in fallback-aware decode views.
//! Invariants: A finalized `Configuration` is never mutated during a decode call.
//! Invariants: Shape and metadata queries pass through to the underlying value untouched.
pub mod api;
pub mod core;
pub mod decode;

pub use crate::api::{
    from_slice, from_slice_configured, from_slice_with, from_str, from_str_configured,
    from_str_with, from_value, from_value_configured, from_value_with,
};
pub use crate::core::config::{
    BaselineProvider, Configuration, ConfigurationBuilder, ConfigurationProvider,
};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::path::{CodingPath, Segment};
pub use crate::decode::{Decode, Decoder, KeyedDecoder, Primitive, SingleDecoder, UnkeyedDecoder};
