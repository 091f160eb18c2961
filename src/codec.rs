//! The decode/encode contract shared by all wire models.

use crate::error::{DecodeError, Result};
use serde_json::{Map, Value};
use tracing::debug;

/// A JSON object as it appears on the wire.
pub type JsonObject = Map<String, Value>;

/// Bidirectional mapping between a wire JSON object and a typed value.
///
/// `decode` either returns a fully populated value or fails; it never
/// produces a partial one. `encode` is total.
pub trait WireCodec: Sized {
    /// Model name used in log output.
    const NAME: &'static str;

    /// Decode from a JSON object.
    fn decode(json: &JsonObject) -> Result<Self>;

    /// Encode into a JSON object.
    fn encode(&self) -> JsonObject;

    /// Decode from any JSON value. Non-objects are rejected.
    fn decode_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(json) => Self::decode(json),
            _ => Err(DecodeError::NotAnObject),
        }
    }

    /// Decode, discarding the failure reason.
    ///
    /// The reason is logged at debug level before being dropped.
    fn decode_opt(json: &JsonObject) -> Option<Self> {
        match Self::decode(json) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(model = Self::NAME, error = %e, "discarding undecodable record");
                None
            }
        }
    }

    /// Parse JSON text and decode it.
    fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::decode_value(&value)
    }

    /// Parse a JSON byte buffer (e.g. an HTTP body) and decode it.
    fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::decode_value(&value)
    }

    /// Encode as a JSON value.
    fn to_json_value(&self) -> Value {
        Value::Object(self.encode())
    }

    /// Encode as compact JSON text.
    fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }
}

/// Read a required string field.
pub fn required_str<'a>(json: &'a JsonObject, field: &'static str) -> Result<&'a str> {
    match json.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(DecodeError::InvalidType {
            field,
            expected: "string",
        }),
        None => Err(DecodeError::MissingField(field)),
    }
}

/// Read a required nested object field.
pub fn required_object<'a>(json: &'a JsonObject, field: &'static str) -> Result<&'a JsonObject> {
    match json.get(field) {
        Some(Value::Object(obj)) => Ok(obj),
        Some(_) => Err(DecodeError::InvalidType {
            field,
            expected: "object",
        }),
        None => Err(DecodeError::MissingField(field)),
    }
}
