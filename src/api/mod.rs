//! Purpose: Public decode entry points over bytes, strings, and parsed values.
//! Exports: `from_str`/`from_slice`/`from_value` families (baseline, provider, configured).
//! Role: The single parse seam from raw input to the value tree; thin glue over the proxy layer.
//! Invariants: Syntax failures are final; fallback logic only runs on parsed values.
//! Invariants: The configuration is finalized before the root decoder is built.

use serde_json::Value;

use crate::core::config::{Configuration, ConfigurationProvider};
use crate::core::error::{Error, ErrorKind};
use crate::core::path::CodingPath;
use crate::decode::{Decode, Decoder};

/// Decode `input` with the baseline configuration (zero values for every
/// primitive scalar kind).
pub fn from_str<T: Decode>(input: &str) -> Result<T, Error> {
    from_str_configured(input, &Configuration::baseline())
}

pub fn from_slice<T: Decode>(input: &[u8]) -> Result<T, Error> {
    from_slice_configured(input, &Configuration::baseline())
}

pub fn from_value<T: Decode>(value: &Value) -> Result<T, Error> {
    from_value_configured(value, &Configuration::baseline())
}

/// Decode with the fixed configuration named by provider `P`, letting call
/// sites pick different defaults for the same target type.
pub fn from_str_with<T: Decode, P: ConfigurationProvider>(input: &str) -> Result<T, Error> {
    from_str_configured(input, &P::configuration())
}

pub fn from_slice_with<T: Decode, P: ConfigurationProvider>(input: &[u8]) -> Result<T, Error> {
    from_slice_configured(input, &P::configuration())
}

pub fn from_value_with<T: Decode, P: ConfigurationProvider>(value: &Value) -> Result<T, Error> {
    from_value_configured(value, &P::configuration())
}

/// Decode with an already-finalized configuration.
pub fn from_str_configured<T: Decode>(input: &str, config: &Configuration) -> Result<T, Error> {
    let value: Value = serde_json::from_str(input).map_err(syntax_error)?;
    from_value_configured(&value, config)
}

pub fn from_slice_configured<T: Decode>(input: &[u8], config: &Configuration) -> Result<T, Error> {
    let value: Value = serde_json::from_slice(input).map_err(syntax_error)?;
    from_value_configured(&value, config)
}

pub fn from_value_configured<T: Decode>(value: &Value, config: &Configuration) -> Result<T, Error> {
    tracing::trace!(
        target_type = std::any::type_name::<T>(),
        registered = config.len(),
        "decoding value"
    );
    Decoder::new(value, config, CodingPath::root()).decode::<T>()
}

fn syntax_error(err: serde_json::Error) -> Error {
    Error::new(ErrorKind::Syntax)
        .with_message("input is not valid JSON")
        .with_source(err)
}
