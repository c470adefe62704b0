//! Purpose: Ordered-sequence view with per-element fallback on extraction.
//! Exports: `UnkeyedDecoder`.
//! Invariants: Each element attempt advances the cursor exactly once, masked or not.
//! Invariants: Count and position queries forward untouched.

use serde_json::Value;

use crate::core::config::Configuration;
use crate::core::error::{Error, ErrorKind};
use crate::core::path::CodingPath;
use crate::decode::{Decode, Decoder, KeyedDecoder, json_kind};

#[derive(Debug)]
pub struct UnkeyedDecoder<'v> {
    items: &'v [Value],
    config: &'v Configuration,
    path: CodingPath,
    index: usize,
}

impl<'v> UnkeyedDecoder<'v> {
    pub(crate) fn new(items: &'v [Value], config: &'v Configuration, path: CodingPath) -> Self {
        Self {
            items,
            config,
            path,
            index: 0,
        }
    }

    pub fn path(&self) -> &CodingPath {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cursor position: the slot the next element attempt will consume.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.items.len()
    }

    /// Decode the next element. The cursor moves exactly once per call, so a
    /// masked failure neither re-reads nor skips its slot and later elements
    /// stay aligned.
    pub fn element<T: Decode>(&mut self) -> Result<T, Error> {
        let (slot, path) = self.advance();
        let attempt = match self.items.get(slot) {
            Some(value) => {
                let child = Decoder::new(value, self.config, path.clone());
                T::decode(&child)
            }
            None => Err(self.past_end(path.clone())),
        };
        match attempt {
            Ok(value) => Ok(value),
            Err(err) => match self.config.lookup::<T>() {
                Some(fallback) => {
                    tracing::debug!(
                        path = %path,
                        target_type = std::any::type_name::<T>(),
                        "substituting registered default for element"
                    );
                    Ok(fallback)
                }
                None => Err(err),
            },
        }
    }

    /// Next element if it is not null; `Ok(None)` consumes a null slot.
    pub fn optional<T: Decode>(&mut self) -> Result<Option<T>, Error> {
        match self.items.get(self.index) {
            Some(Value::Null) => {
                self.advance();
                Ok(None)
            }
            _ => self.element::<T>().map(Some),
        }
    }

    /// Keyed sub-container at the next slot. Advances once; shape mismatches
    /// and exhausted sequences are hard errors.
    pub fn nested_keyed(&mut self) -> Result<KeyedDecoder<'v>, Error> {
        let (slot, path) = self.advance();
        match self.items.get(slot) {
            Some(Value::Object(map)) => Ok(KeyedDecoder::new(map, self.config, path)),
            Some(other) => Err(self.bad_container(path, "object", other)),
            None => Err(self.past_end(path)),
        }
    }

    /// Unkeyed sub-container at the next slot; same discipline as
    /// `nested_keyed`.
    pub fn nested_unkeyed(&mut self) -> Result<UnkeyedDecoder<'v>, Error> {
        let (slot, path) = self.advance();
        match self.items.get(slot) {
            Some(Value::Array(items)) => Ok(UnkeyedDecoder::new(items, self.config, path)),
            Some(other) => Err(self.bad_container(path, "array", other)),
            None => Err(self.past_end(path)),
        }
    }

    fn advance(&mut self) -> (usize, CodingPath) {
        let slot = self.index;
        self.index += 1;
        (slot, self.path.child_index(slot))
    }

    fn past_end(&self, path: CodingPath) -> Error {
        Error::new(ErrorKind::Value)
            .with_message(format!("no element remaining ({} total)", self.items.len()))
            .with_path(path)
    }

    fn bad_container(&self, path: CodingPath, expected: &'static str, found: &Value) -> Error {
        Error::new(ErrorKind::Structure)
            .with_message("cannot open nested container")
            .with_expected(expected)
            .with_found(json_kind(found))
            .with_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::UnkeyedDecoder;
    use crate::core::config::Configuration;
    use crate::core::error::ErrorKind;
    use crate::core::path::CodingPath;
    use serde_json::{Value, json};

    fn unkeyed<'v>(value: &'v Value, config: &'v Configuration) -> UnkeyedDecoder<'v> {
        match value {
            Value::Array(items) => UnkeyedDecoder::new(items, config, CodingPath::root()),
            _ => panic!("fixture must be an array"),
        }
    }

    #[test]
    fn masked_element_advances_the_cursor_exactly_once() {
        let value = json!([1, "broken", 3]);
        let config = Configuration::baseline();
        let mut seq = unkeyed(&value, &config);
        assert_eq!(seq.element::<i64>().expect("native"), 1);
        assert_eq!(seq.index(), 1);
        assert_eq!(seq.element::<i64>().expect("defaulted"), 0);
        assert_eq!(seq.index(), 2);
        assert_eq!(seq.element::<i64>().expect("native"), 3);
        assert!(seq.is_at_end());
    }

    #[test]
    fn failed_element_without_fallback_still_advances_once() {
        let value = json!(["broken", 2]);
        let config = Configuration::empty();
        let mut seq = unkeyed(&value, &config);
        let err = seq.element::<i64>().expect_err("no fallback");
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err.path().expect("path").to_string(), "$[0]");
        assert_eq!(seq.index(), 1);
        assert_eq!(seq.element::<i64>().expect("aligned"), 2);
    }

    #[test]
    fn reading_past_the_end_is_a_value_error() {
        let value = json!([]);
        let config = Configuration::empty();
        let mut seq = unkeyed(&value, &config);
        assert!(seq.is_at_end());
        let err = seq.element::<i64>().expect_err("exhausted");
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn past_end_reads_still_mask_when_a_default_exists() {
        let value = json!([]);
        let config = Configuration::baseline();
        let mut seq = unkeyed(&value, &config);
        assert_eq!(seq.element::<i64>().expect("masked"), 0);
        assert_eq!(seq.index(), 1);
    }

    #[test]
    fn optional_consumes_null_slots() {
        let value = json!([null, 5]);
        let config = Configuration::baseline();
        let mut seq = unkeyed(&value, &config);
        assert_eq!(seq.optional::<i64>().expect("null slot"), None);
        assert_eq!(seq.optional::<i64>().expect("value slot"), Some(5));
        assert!(seq.is_at_end());
    }

    #[test]
    fn nested_container_shape_errors_are_hard_and_advance_once() {
        let value = json!([42, {"a": 1}]);
        let config = Configuration::baseline();
        let mut seq = unkeyed(&value, &config);
        let err = seq.nested_keyed().expect_err("number is not an object");
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert_eq!(err.found(), Some("number"));
        let inner = seq.nested_keyed().expect("object slot");
        assert_eq!(inner.path().to_string(), "$[1]");
    }

    #[test]
    fn count_queries_forward_natively() {
        let value = json!([1, 2, 3]);
        let config = Configuration::baseline();
        let seq = unkeyed(&value, &config);
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        assert_eq!(seq.index(), 0);
    }
}
