//! Module: codec
//! Responsibility: canonical JSON text for persisted values.
//! Does not own: the value model itself or any storage encoding.
//! Boundary: the only serialized artifact at the edge of the algebra.

#[cfg(test)]
mod tests;

use crate::value::Value;
use serde::{Serialize, Serializer, ser::SerializeMap};
use thiserror::Error as ThisError;

///
/// CodecError
///

#[derive(Debug, ThisError)]
pub enum CodecError {
    #[error("json encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("json decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}

///
/// Render any serializable value as compact JSON text.
///
/// Fails only when `T`'s own `Serialize` impl fails (for example a map
/// with non-string keys). `Value` input never fails.
///
pub fn to_json_text<T>(value: &T) -> Result<String, CodecError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(CodecError::Encode)
}

/// Render a sequence of values as a JSON array.
#[must_use]
pub fn list_to_json_text(values: &[Value]) -> String {
    render(values)
}

/// Render ordered pairs as a JSON object.
///
/// Key order is kept and duplicate keys are written as given.
#[must_use]
pub fn map_to_json_text<K>(pairs: &[(K, Value)]) -> String
where
    K: AsRef<str>,
{
    render(&OrderedPairs(pairs))
}

impl Value {
    /// Render this value as compact JSON text.
    #[must_use]
    pub fn to_json_text(&self) -> String {
        render(self)
    }

    /// Parse JSON text into a value.
    pub fn from_json_text(text: &str) -> Result<Self, CodecError> {
        serde_json::from_str(text).map_err(CodecError::Decode)
    }
}

///
/// OrderedPairs
/// Serializes borrowed pairs as a map without collecting into a keyed
/// container, so order and duplicates survive.
///

struct OrderedPairs<'a, K>(&'a [(K, Value)]);

impl<K: AsRef<str>> Serialize for OrderedPairs<'_, K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key.as_ref(), value)?;
        }
        map.end()
    }
}

// Values only ever produce string keys and finite floats, so encoding into
// an in-memory buffer cannot fail.
fn render<T>(value: &T) -> String
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).expect("value json encoding is infallible")
}
