//! Module: value
//! Responsibility: the typed scalar accepted by conditions, conversion
//! from Rust primitives, and the query-token formatting policy.
//! Does not own: expression structure or builder chaining.

mod float;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;

// re-exports
pub use float::{Float64, FloatValueError};

///
/// Value
///
/// Scalar payload of a condition. The closed set of variants makes the
/// formatting match exhaustive; there is no unsupported-type case at
/// runtime.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Float(Float64),
    Int(i64),
    Text(String),
    Uint(u64),
}

impl Value {
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

///
/// Formatting policy
///
/// Numbers and booleans render via their natural textual representation,
/// unquoted. A text value that already starts with a double quote is
/// caller pre-quoting (wildcard patterns and the like) and passes through
/// verbatim; any other text is wrapped in exactly one pair of quotes.
/// Quote characters inside the text are never escaped.
///

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Text(v) => {
                if v.starts_with('"') {
                    f.write_str(v)
                } else {
                    write!(f, "\"{v}\"")
                }
            }
        }
    }
}

///
/// FieldValue
///
/// Conversion boundary between caller-supplied Rust values and `Value`.
/// Raw `f64` has no impl on purpose: finite floats enter through
/// `Float64::try_new`.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

// impl_field_value
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }
        )*
    };
}

impl_field_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    bool => Bool,
    Float64 => Float,
);
