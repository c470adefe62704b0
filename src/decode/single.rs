// Leaf view: native scalar extraction with per-kind registry fallback.
use serde_json::Value;

use crate::core::config::Configuration;
use crate::core::error::{Error, ErrorKind};
use crate::core::path::CodingPath;
use crate::decode::json_kind;
use crate::decode::primitive::Primitive;

pub struct SingleDecoder<'v> {
    value: &'v Value,
    config: &'v Configuration,
    path: CodingPath,
}

impl<'v> SingleDecoder<'v> {
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

    /// Shape query, forwarded untouched.
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Extract a scalar of kind `P`. Native extraction is attempted first;
    /// on failure the registry is consulted for exactly that kind, and a
    /// miss propagates the native error unchanged.
    pub fn scalar<P: Primitive>(&self) -> Result<P, Error> {
        if let Some(extracted) = P::from_value(self.value) {
            return Ok(extracted);
        }
        let native = Error::new(ErrorKind::Value)
            .with_message(format!("cannot read {} here", P::NAME))
            .with_expected(P::NAME)
            .with_found(json_kind(self.value))
            .with_path(self.path.clone());
        match self.config.lookup::<P>() {
            Some(fallback) => {
                tracing::debug!(
                    path = %self.path,
                    kind = P::NAME,
                    "substituting registered default for scalar"
                );
                Ok(fallback)
            }
            None => Err(native),
        }
    }
}
