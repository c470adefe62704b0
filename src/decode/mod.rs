//! Purpose: Fallback-aware decode views layered over a borrowed serde_json value tree.
//! Exports: `Decode`, `Decoder`, `KeyedDecoder`, `UnkeyedDecoder`, `SingleDecoder`, `Primitive`.
//! Role: The proxy layer; intercepts value extraction, forwards shape queries untouched.
//! Invariants: Every view created below a position carries that position's configuration.
//! Invariants: Container-view requests never substitute defaults; only value extraction does.

mod impls;
mod keyed;
mod primitive;
mod single;
mod unkeyed;

pub use keyed::KeyedDecoder;
pub use primitive::Primitive;
pub use single::SingleDecoder;
pub use unkeyed::UnkeyedDecoder;

use serde_json::Value;

use crate::core::config::Configuration;
use crate::core::error::{Error, ErrorKind};
use crate::core::path::CodingPath;

/// Types that can rebuild themselves from a decode position. The extra
/// bounds let any decodable type double as its own registered fallback and
/// let lookups hand back owned clones.
pub trait Decode: Clone + Send + Sync + Sized + 'static {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, Error>;
}

/// One decode position: a borrowed value node, the active configuration, and
/// the path that led here. Created fresh at every container boundary and
/// discarded when the level completes.
pub struct Decoder<'v> {
    value: &'v Value,
    config: &'v Configuration,
    path: CodingPath,
}

impl<'v> Decoder<'v> {
    pub(crate) fn new(value: &'v Value, config: &'v Configuration, path: CodingPath) -> Self {
        Self {
            value,
            config,
            path,
        }
    }

    pub fn path(&self) -> &CodingPath {
        &self.path
    }

    pub fn configuration(&self) -> &Configuration {
        self.config
    }

    /// The raw node at this position. Shape metadata, never faked.
    pub fn value(&self) -> &'v Value {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Map-of-name-to-value view. A non-object node is a hard error: there
    /// is no meaningful default container.
    pub fn keyed(&self) -> Result<KeyedDecoder<'v>, Error> {
        match self.value {
            Value::Object(map) => Ok(KeyedDecoder::new(map, self.config, self.path.clone())),
            other => Err(Error::new(ErrorKind::Structure)
                .with_message("cannot open keyed view")
                .with_expected("object")
                .with_found(json_kind(other))
                .with_path(self.path.clone())),
        }
    }

    /// Ordered-sequence view. Same shape discipline as `keyed`.
    pub fn unkeyed(&self) -> Result<UnkeyedDecoder<'v>, Error> {
        match self.value {
            Value::Array(items) => Ok(UnkeyedDecoder::new(items, self.config, self.path.clone())),
            other => Err(Error::new(ErrorKind::Structure)
                .with_message("cannot open unkeyed view")
                .with_expected("array")
                .with_found(json_kind(other))
                .with_path(self.path.clone())),
        }
    }

    /// Single-value leaf view; always available.
    pub fn single(&self) -> SingleDecoder<'v> {
        SingleDecoder::new(self.value, self.config, self.path.clone())
    }

    /// Decode a whole value at this position. The type reconstructs itself
    /// first, so its internal field-level fallbacks fire before this level
    /// consults the registry; only an entry for exactly `T` can substitute
    /// for a failed reconstruction.
    pub fn decode<T: Decode>(&self) -> Result<T, Error> {
        match T::decode(self) {
            Ok(value) => Ok(value),
            Err(err) => match self.config.lookup::<T>() {
                Some(fallback) => {
                    tracing::debug!(
                        path = %self.path,
                        target_type = std::any::type_name::<T>(),
                        "substituting registered default for failed value"
                    );
                    Ok(fallback)
                }
                None => Err(err),
            },
        }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
