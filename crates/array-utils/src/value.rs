use std::{collections::BTreeMap, sync::Arc};

use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// A dynamically typed element of an input sequence.
///
/// Composite values are shared through [`Arc`], so cloning an array or object keeps its identity.
/// Two separately built composites are different values to [`Value::identity`] even when their
/// contents are equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Missing value marker
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Arc<Vec<Value>>),
    Object(Arc<BTreeMap<String, Value>>),
}

impl Value {
    /// Build a new array value with its own identity
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Arc::new(items.into_iter().collect()))
    }

    /// Build a new object value with its own identity
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(Arc::new(
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Name of the value's type, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// The key under which this value is considered equal to another.
    ///
    /// Primitives compare by value (`NaN` equals `NaN`, `0` equals `-0`), composites compare by
    /// the address of their shared allocation.
    pub fn identity(&self) -> Identity<'_> {
        match self {
            Value::Null => Identity::Null,
            Value::Bool(b) => Identity::Bool(*b),
            Value::Number(n) => Identity::Number(normalized_bits(*n)),
            Value::String(s) => Identity::String(s),
            Value::Array(items) => Identity::Array(Arc::as_ptr(items) as usize),
            Value::Object(fields) => Identity::Object(Arc::as_ptr(fields) as usize),
        }
    }

    /// JSON text of the value, as reported in errors
    pub(crate) fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }
}

fn normalized_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0
    } else {
        n.to_bits()
    }
}

/// Hashable identity of a [`Value`], see [`Value::identity`]
///
/// Arrays and objects are identified by the address of their allocation, which is only unique
/// while the value is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity<'a> {
    Null,
    Bool(bool),
    Number(u64),
    String(&'a str),
    Array(usize),
    Object(usize),
}

/// Access to an ordered sequence of values
///
/// Slices and vectors are always sequences. A dynamic [`Value`] is one only if it is an array.
pub trait AsSequence {
    fn as_sequence(&self) -> Result<&[Value]>;
}

impl AsSequence for [Value] {
    fn as_sequence(&self) -> Result<&[Value]> {
        Ok(self)
    }
}

impl<const N: usize> AsSequence for [Value; N] {
    fn as_sequence(&self) -> Result<&[Value]> {
        Ok(self.as_slice())
    }
}

impl AsSequence for Vec<Value> {
    fn as_sequence(&self) -> Result<&[Value]> {
        Ok(self.as_slice())
    }
}

impl AsSequence for Value {
    fn as_sequence(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items.as_slice()),
            other => {
                log::debug!("rejected {} argument, expected a sequence", other.kind());
                Err(Error::InvalidArgument {
                    found: other.kind(),
                })
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // 2^53, the end of the exactly representable integers
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT => {
                serializer.serialize_i64(*n as i64)
            }
            // serde_json writes non-finite numbers as null
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items.iter()),
            Value::Object(fields) => serializer.collect_map(fields.iter()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($num_type:ty),*) => {
        $(
            impl From<$num_type> for Value {
                fn from(n: $num_type) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Object(Arc::new(fields))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::array(items.into_iter().map(Value::from)),
            Json::Object(fields) => {
                Value::object(fields.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}
