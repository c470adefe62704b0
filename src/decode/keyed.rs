//! Purpose: Map-of-name-to-value view with per-key fallback on extraction.
//! Exports: `KeyedDecoder`.
//! Invariants: Presence and key-enumeration queries forward untouched; they are never faked.
//! Invariants: Nested container requests hard-error on shape mismatch regardless of registry.

use serde_json::{Map, Value};

use crate::core::config::Configuration;
use crate::core::error::{Error, ErrorKind};
use crate::core::path::CodingPath;
use crate::decode::{Decode, Decoder, UnkeyedDecoder, json_kind};

#[derive(Debug)]
pub struct KeyedDecoder<'v> {
    map: &'v Map<String, Value>,
    config: &'v Configuration,
    path: CodingPath,
}

impl<'v> KeyedDecoder<'v> {
    pub(crate) fn new(
        map: &'v Map<String, Value>,
        config: &'v Configuration,
        path: CodingPath,
    ) -> Self {
        Self { map, config, path }
    }

    pub fn path(&self) -> &CodingPath {
        &self.path
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Whether the value at `key` is explicitly null. An absent key is an
    /// error here, matching the underlying protocol.
    pub fn is_null(&self, key: &str) -> Result<bool, Error> {
        match self.map.get(key) {
            Some(value) => Ok(value.is_null()),
            None => Err(self.missing_key(key)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'v str> + '_ {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Decode the value at `key`. A present value recurses through a nested
    /// decoder anchored at the key, so field-level fallbacks inside `T` fire
    /// first; an absent key, or a reconstruction that still fails, consults
    /// the registry for exactly `T` before propagating.
    pub fn decode<T: Decode>(&self, key: &str) -> Result<T, Error> {
        let attempt = match self.map.get(key) {
            Some(value) => {
                let child = Decoder::new(value, self.config, self.path.child_key(key));
                T::decode(&child)
            }
            None => Err(self.missing_key(key)),
        };
        match attempt {
            Ok(value) => Ok(value),
            Err(err) => match self.config.lookup::<T>() {
                Some(fallback) => {
                    tracing::debug!(
                        path = %self.path.child_key(key),
                        target_type = std::any::type_name::<T>(),
                        "substituting registered default at key"
                    );
                    Ok(fallback)
                }
                None => Err(err),
            },
        }
    }

    /// Decode `key` if present and non-null; `Ok(None)` otherwise. The
    /// registry is not consulted for the absence itself.
    pub fn optional<T: Decode>(&self, key: &str) -> Result<Option<T>, Error> {
        match self.map.get(key) {
            None => Ok(None),
            Some(Value::Null) => Ok(None),
            Some(value) => {
                let child = Decoder::new(value, self.config, self.path.child_key(key));
                child.decode::<T>().map(Some)
            }
        }
    }

    /// Keyed sub-container at `key`. Shape mismatches (and absent keys) are
    /// hard errors: there is no meaningful default container.
    pub fn nested_keyed(&self, key: &str) -> Result<KeyedDecoder<'v>, Error> {
        match self.map.get(key) {
            Some(Value::Object(map)) => {
                Ok(KeyedDecoder::new(map, self.config, self.path.child_key(key)))
            }
            Some(other) => Err(self.bad_container(key, "object", other)),
            None => Err(self.missing_container(key, "object")),
        }
    }

    /// Unkeyed sub-container at `key`; same discipline as `nested_keyed`.
    pub fn nested_unkeyed(&self, key: &str) -> Result<UnkeyedDecoder<'v>, Error> {
        match self.map.get(key) {
            Some(Value::Array(items)) => {
                Ok(UnkeyedDecoder::new(items, self.config, self.path.child_key(key)))
            }
            Some(other) => Err(self.bad_container(key, "array", other)),
            None => Err(self.missing_container(key, "array")),
        }
    }

    fn missing_key(&self, key: &str) -> Error {
        Error::new(ErrorKind::Value)
            .with_message(format!("missing key `{key}`"))
            .with_path(self.path.child_key(key))
    }

    fn missing_container(&self, key: &str, expected: &'static str) -> Error {
        Error::new(ErrorKind::Structure)
            .with_message(format!("missing key `{key}` for nested container"))
            .with_expected(expected)
            .with_path(self.path.child_key(key))
    }

    fn bad_container(&self, key: &str, expected: &'static str, found: &Value) -> Error {
        Error::new(ErrorKind::Structure)
            .with_message("cannot open nested container")
            .with_expected(expected)
            .with_found(json_kind(found))
            .with_path(self.path.child_key(key))
    }
}
