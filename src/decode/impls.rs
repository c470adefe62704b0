// Decode impls shipped with the crate: scalars, Option, Vec, maps, char, Value.
use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::decode::{Decode, Decoder};

macro_rules! decode_via_scalar {
    ($($kind:ty),* $(,)?) => {$(
        impl Decode for $kind {
            fn decode(decoder: &Decoder<'_>) -> Result<Self, Error> {
                decoder.single().scalar::<$kind>()
            }
        }
    )*};
}

decode_via_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String);

/// Null maps to `None`; the registry is never consulted for the inner type
/// on null, so an explicit null stays `None` even when a default exists.
impl<T: Decode> Decode for Option<T> {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, Error> {
        if decoder.is_null() {
            return Ok(None);
        }
        T::decode(decoder).map(Some)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, Error> {
        let mut sequence = decoder.unkeyed()?;
        let mut out = Vec::with_capacity(sequence.len());
        while !sequence.is_at_end() {
            out.push(sequence.element::<T>()?);
        }
        Ok(out)
    }
}

impl<T: Decode> Decode for HashMap<String, T> {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, Error> {
        let keyed = decoder.keyed()?;
        let mut out = HashMap::with_capacity(keyed.len());
        for key in keyed.keys() {
            out.insert(key.to_string(), keyed.decode::<T>(key)?);
        }
        Ok(out)
    }
}

impl<T: Decode> Decode for BTreeMap<String, T> {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, Error> {
        let keyed = decoder.keyed()?;
        let mut out = BTreeMap::new();
        for key in keyed.keys() {
            out.insert(key.to_string(), keyed.decode::<T>(key)?);
        }
        Ok(out)
    }
}

impl Decode for char {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, Error> {
        let text: String = decoder.single().scalar()?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(only), None) => Ok(only),
            _ => Err(Error::new(ErrorKind::Composition)
                .with_message(format!("expected a single character, got `{text}`"))
                .with_path(decoder.path().clone())),
        }
    }
}

/// Verbatim subtree passthrough; any shape decodes as itself.
impl Decode for Value {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, Error> {
        Ok(decoder.value().clone())
    }
}
