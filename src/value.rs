//! Dynamically typed elements.
//!
//! Most sequences in this crate are statically typed, and the compiler already
//! refuses to map a function over elements it cannot accept.
//! [`Value`] exists for the remaining case: heterogeneous sequences like
//! `[1, "a", 3]`, where the element type can only be checked at runtime.

use core::fmt;

use sealed::sealed;

/// A single dynamically typed element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
        };
        f.write_str(name)
    }
}

/// A [`Value`] was not of the expected kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct KindError {
    pub expected: ValueKind,
    pub found: ValueKind,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
        }
    }

    /// Converts into the Rust type `T`, if the kinds are compatible.
    ///
    /// ```rust
    /// use functionals::value::{Value, ValueKind};
    /// assert_eq!(Value::Int(3).to::<f64>(), Ok(3.0));
    /// let err = Value::from("a").to::<f64>().unwrap_err();
    /// assert_eq!(err.found, ValueKind::Str);
    /// ```
    pub fn to<T: FromValue>(&self) -> Result<T, KindError> {
        T::from_value(self).ok_or(KindError {
            expected: T::KIND,
            found: self.kind(),
        })
    }
}

/// Rust types a [`Value`] can be converted into.
///
/// Sealed: the set of kinds is closed.
#[sealed]
pub trait FromValue: Sized {
    /// The kind this type is declared as.
    const KIND: ValueKind;

    fn from_value(value: &Value) -> Option<Self>;
}

#[sealed]
impl FromValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

#[sealed]
impl FromValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

// Ints widen to floats; the reverse is never implicit.
#[sealed]
impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(*x),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

#[sealed]
impl FromValue for String {
    const KIND: ValueKind = ValueKind::Str;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
