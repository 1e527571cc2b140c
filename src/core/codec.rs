//! Purpose: Forgiving JSON encode/decode over a fixed `CodecConfig`.
//! Exports: `JsonCodec`, `encode`, `decode`, `EMPTY_OBJECT`.
//! Role: Converts every serde_json failure into a sentinel at the boundary.
//! Invariants: Public operations never panic on bad input and never return an error.
//! Invariants: Encode failure yields `{}`; decode failure yields `None`.
//! Invariants: The shared codec is built once and never mutated.
//! Notes: Swallowed failures are logged at debug level with their parse category.

use std::any::type_name;
use std::sync::OnceLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::config::CodecConfig;
use crate::core::error::{Error, ErrorKind};
use crate::json::parse;

pub const EMPTY_OBJECT: &str = "{}";

static SHARED: OnceLock<JsonCodec> = OnceLock::new();

#[derive(Clone, Debug, Default)]
pub struct JsonCodec {
    config: CodecConfig,
}

impl JsonCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Process-wide codec with the default (lenient, compact) configuration.
    pub fn shared() -> &'static JsonCodec {
        SHARED.get_or_init(JsonCodec::default)
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Serializes `value`, or returns `{}` if serialization fails.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> String {
        match self.try_encode(value) {
            Ok(json) => {
                trace!(shape = type_name::<T>(), len = json.len(), "encoded json");
                json
            }
            Err(err) => {
                debug!(
                    shape = type_name::<T>(),
                    error = %err,
                    hint = err.hint().unwrap_or_default(),
                    "encode failed; returning empty object"
                );
                EMPTY_OBJECT.to_string()
            }
        }
    }

    /// Parses `json` into `T`, or returns `None` on any failure.
    pub fn decode<T: DeserializeOwned>(&self, json: &str) -> Option<T> {
        match self.try_decode(json) {
            Ok(value) => {
                trace!(shape = type_name::<T>(), "decoded json");
                Some(value)
            }
            Err(err) => {
                debug!(
                    shape = type_name::<T>(),
                    error = %err,
                    hint = err.hint().unwrap_or_default(),
                    "decode failed; returning none"
                );
                None
            }
        }
    }

    pub(crate) fn try_encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, Error> {
        parse::to_string(value, self.config.pretty).map_err(|err| {
            Error::new(ErrorKind::Encode)
                .with_message("value could not be serialized")
                .with_hint(parse::hint_for_error(&err, type_name::<T>()))
                .with_source(err)
        })
    }

    pub(crate) fn try_decode<T: DeserializeOwned>(&self, json: &str) -> Result<T, Error> {
        // Both modes read through `Value` so duplicate keys resolve the same way (last wins).
        let input: Value = parse::from_str(json).map_err(decode_error::<T>)?;
        if !self.config.reject_unknown_fields {
            return parse::from_value(&input).map_err(decode_error::<T>);
        }

        let (decoded, ignored) =
            parse::from_value_reporting_ignored::<T>(&input).map_err(decode_error::<T>)?;
        if let Some(field) = ignored.into_iter().next() {
            return Err(Error::new(ErrorKind::UnknownField)
                .with_message(format!("input key not declared by {}", type_name::<T>()))
                .with_field(field));
        }
        Ok(decoded)
    }
}

/// Serializes with the shared codec; `{}` on failure.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> String {
    JsonCodec::shared().encode(value)
}

/// Decodes with the shared codec; `None` on failure.
pub fn decode<T: DeserializeOwned>(json: &str) -> Option<T> {
    JsonCodec::shared().decode(json)
}

fn decode_error<T>(err: serde_json::Error) -> Error {
    Error::new(ErrorKind::Decode)
        .with_message("json could not be decoded")
        .with_hint(parse::hint_for_error(&err, type_name::<T>()))
        .with_source(err)
}
