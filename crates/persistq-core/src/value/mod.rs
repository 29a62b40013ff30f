mod float;
mod wire;

#[cfg(test)]
mod tests;

use serde::{Serialize, Serializer, ser::SerializeMap};
use std::fmt;

// re-exports
pub use float::Float64;

///
/// ValueKind
///
/// Stable variant tag for diagnostics and evaluator errors.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum ValueKind {
    Blob = 0x01,
    Bool = 0x02,
    Float64 = 0x03,
    Int = 0x04,
    List = 0x05,
    Map = 0x06,
    Null = 0x07,
    Text = 0x08,
}

impl ValueKind {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Bool => "bool",
            Self::Float64 => "float64",
            Self::Int => "int",
            Self::List => "list",
            Self::Map => "map",
            Self::Null => "null",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Value
///
/// Any value the storage layer can hold.
///
/// Null    → the field's value is absent (SQL NULL).
/// Map     → ordered key/value pairs; order and duplicates are preserved
///           exactly as given, deduplication is the consumer's concern.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float64(Float64),
    Int(i64),
    /// Ordered list of values.
    List(Vec<Self>),
    Map(Vec<(String, Self)>),
    Null,
    Text(String),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a `Value::Map` from owned entries, keeping their order.
    pub fn from_map<K, V>(entries: Vec<(K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a `Value::Float64`; `None` for NaN or infinities.
    #[must_use]
    pub fn float(value: f64) -> Option<Self> {
        Float64::try_new(value).map(Self::Float64)
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Blob(_) => ValueKind::Blob,
            Self::Bool(_) => ValueKind::Bool,
            Self::Float64(_) => ValueKind::Float64,
            Self::Int(_) => ValueKind::Int,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
            Self::Null => ValueKind::Null,
            Self::Text(_) => ValueKind::Text,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float64(_))
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Map(_))
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view with integer widening; `None` for non-numeric values.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float64(v) => Some(v.get()),
            _ => None,
        }
    }
}

///
/// Serialize
///
/// Values serialize as plain data in the shape of the target format
/// (no variant tags), so JSON output is exactly the logical value.
/// Blobs serialize as a sequence of byte numbers.
///

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Blob(bytes) => serializer.collect_seq(bytes),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Float64(v) => v.serialize(serializer),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::List(items) => serializer.collect_seq(items),
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Null => serializer.serialize_unit(),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

///
/// CONVERSIONS
///

macro_rules! impl_from_for_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value!(
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    Float64 => Float64,
    String => Text,
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::from_list(v)
    }
}
